//! Converts a Markdown-flavored plain-text report into an HTML fragment.
//!
//! Only paragraphs, `- ` / `* ` bullet lists and `**bold**` spans are
//! recognized. Input text is copied into the output without escaping.
//!
//! ```
//! assert_eq!(
//!     reporthtml::render("**Luck**\n- work\n- love"),
//!     "<p><b>Luck</b></p>\n<ul>\n<li>work</li>\n<li>love</li>\n</ul>"
//! );
//! ```

pub mod page;
mod render;

pub use page::{assemble, Page, PageError, DEFAULT_TEMPLATE};
pub use render::{classify_line, emphasize, render, LineKind};
