// src/render.rs
//
// Line-based report renderer.
//
// - Splits the input on '\n' and trims every line (so "\r\n" input is fine).
// - Blank lines emit nothing; they close an open list.
// - "- " / "* " lines become <li> items inside a single <ul> per run.
// - Everything else becomes a <p>.
// - **bold** spans become <b>bold</b> before the line is classified.
// - Text is passed through verbatim: no HTML escaping.

use memchr::memmem;
use std::borrow::Cow;

const BOLD_DELIM: &[u8] = b"**";

/* ============================ Inline emphasis =========================== */

/// Replace every `**text**` span with `<b>text</b>`.
///
/// Openers pair with the nearest following delimiter, left to right. An
/// opener with no closer is copied literally together with the rest of the
/// line. Returns the input unchanged (borrowed) when there is nothing to do.
pub fn emphasize(line: &str) -> Cow<'_, str> {
    let bytes = line.as_bytes();
    let finder = memmem::Finder::new(BOLD_DELIM);

    let mut out: Option<String> = None;
    let mut copied = 0usize;
    let mut i = 0usize;

    while let Some(open) = finder.find(&bytes[i..]).map(|off| i + off) {
        let body_start = open + BOLD_DELIM.len();
        let Some(close) = finder.find(&bytes[body_start..]).map(|off| body_start + off) else {
            break;
        };

        // '*' is ASCII, so both offsets sit on char boundaries.
        let buf = out.get_or_insert_with(|| String::with_capacity(line.len() + 16));
        buf.push_str(&line[copied..open]);
        buf.push_str("<b>");
        buf.push_str(&line[body_start..close]);
        buf.push_str("</b>");

        i = close + BOLD_DELIM.len();
        copied = i;
    }

    match out {
        Some(mut buf) => {
            buf.push_str(&line[copied..]);
            Cow::Owned(buf)
        }
        None => Cow::Borrowed(line),
    }
}

/* ============================ Line classes ============================== */

/// What a processed (trimmed, emphasized) line turns into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    /// Item content with the bullet prefix removed and trimmed.
    ListItem(&'a str),
    Paragraph(&'a str),
}

#[inline]
fn is_bullet_prefix(line: &str) -> bool {
    line.starts_with("- ") || line.starts_with("* ")
}

pub fn classify_line(processed: &str) -> LineKind<'_> {
    if processed.is_empty() {
        LineKind::Blank
    } else if is_bullet_prefix(processed) {
        // Both bullet prefixes are two ASCII bytes.
        LineKind::ListItem(processed[2..].trim())
    } else {
        LineKind::Paragraph(processed)
    }
}

/* =============================== Renderer =============================== */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ListState {
    Outside,
    Inside,
}

/// Convert a report into an HTML fragment of `<p>`, `<ul>`, `<li>` and `<b>`
/// elements, one block per output line.
///
/// Never fails: empty or all-blank input yields an empty string.
pub fn render(text: &str) -> String {
    let mut blocks: Vec<String> = Vec::new();
    let mut state = ListState::Outside;

    for raw in text.split('\n') {
        let processed = emphasize(raw.trim());
        match classify_line(&processed) {
            LineKind::Blank => {
                if state == ListState::Inside {
                    blocks.push("</ul>".to_owned());
                    state = ListState::Outside;
                }
            }
            LineKind::ListItem(item) => {
                if state == ListState::Outside {
                    blocks.push("<ul>".to_owned());
                    state = ListState::Inside;
                }
                blocks.push(format!("<li>{item}</li>"));
            }
            LineKind::Paragraph(para) => {
                if state == ListState::Inside {
                    blocks.push("</ul>".to_owned());
                    state = ListState::Outside;
                }
                blocks.push(format!("<p>{para}</p>"));
            }
        }
    }

    // flush at end
    if state == ListState::Inside {
        blocks.push("</ul>".to_owned());
    }

    let html = blocks.join("\n");
    tracing::debug!(
        input_bytes = text.len(),
        output_bytes = html.len(),
        blocks = blocks.len(),
        "rendered report fragment"
    );
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("plain text", "plain text" ; "no delimiters")]
    #[test_case("**bold** and plain", "<b>bold</b> and plain" ; "leading span")]
    #[test_case("a **b** c **d** e", "a <b>b</b> c <b>d</b> e" ; "two spans")]
    #[test_case("**unclosed", "**unclosed" ; "unclosed opener")]
    #[test_case("**a** and **b", "<b>a</b> and **b" ; "trailing unclosed opener")]
    #[test_case("**a**b**", "<b>a</b>b**" ; "odd delimiter count")]
    #[test_case("****", "<b></b>" ; "empty span")]
    #[test_case("***a**", "<b>*a</b>" ; "triple star opener")]
    #[test_case("**運勢** は良好", "<b>運勢</b> は良好" ; "multibyte body")]
    #[test_case("*single* stars", "*single* stars" ; "single stars untouched")]
    fn emphasize_cases(input: &str, expected: &str) {
        assert_eq!(emphasize(input), expected);
    }

    #[test]
    fn emphasize_borrows_when_unchanged() {
        assert!(matches!(emphasize("no bold **here"), Cow::Borrowed(_)));
        assert!(matches!(emphasize("**here**"), Cow::Owned(_)));
    }

    #[test_case("", LineKind::Blank ; "empty")]
    #[test_case("- item", LineKind::ListItem("item") ; "dash bullet")]
    #[test_case("* item", LineKind::ListItem("item") ; "star bullet")]
    #[test_case("-   spaced  ", LineKind::ListItem("spaced") ; "bullet content trimmed")]
    #[test_case("-item", LineKind::Paragraph("-item") ; "dash without space")]
    #[test_case("-", LineKind::Paragraph("-") ; "bare dash")]
    #[test_case("<b>x</b> y", LineKind::Paragraph("<b>x</b> y") ; "bold at start is prose")]
    fn classify_cases(line: &str, expected: LineKind<'_>) {
        assert_eq!(classify_line(line), expected);
    }

    #[test_case("" ; "empty input")]
    #[test_case("\n\n   \n\t\n" ; "only blank lines")]
    fn blank_input_renders_nothing(input: &str) {
        assert_eq!(render(input), "");
    }

    #[test]
    fn single_item_is_wrapped_in_list() {
        assert_eq!(render("- item"), "<ul>\n<li>item</li>\n</ul>");
    }

    #[test]
    fn bold_paragraph() {
        assert_eq!(render("**bold** and plain"), "<p><b>bold</b> and plain</p>");
    }

    #[test]
    fn consecutive_items_share_one_list() {
        assert_eq!(
            render("- one\n* two\n- three"),
            "<ul>\n<li>one</li>\n<li>two</li>\n<li>three</li>\n</ul>"
        );
    }

    #[test]
    fn paragraph_after_item_closes_list() {
        assert_eq!(render("- a\nb"), "<ul>\n<li>a</li>\n</ul>\n<p>b</p>");
    }

    #[test]
    fn blank_line_splits_lists() {
        assert_eq!(
            render("- a\n\n- b"),
            "<ul>\n<li>a</li>\n</ul>\n<ul>\n<li>b</li>\n</ul>"
        );
    }

    #[test]
    fn emphasis_inside_list_item() {
        assert_eq!(
            render("  * **Heart line**: long and clear  "),
            "<ul>\n<li><b>Heart line</b>: long and clear</li>\n</ul>"
        );
    }

    #[test]
    fn crlf_and_indentation_are_trimmed() {
        assert_eq!(
            render("  Intro\r\n\r\n\t- a\r\n- b\r\nOutro\r\n"),
            "<p>Intro</p>\n<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n<p>Outro</p>"
        );
    }

    #[test]
    fn markup_is_not_escaped() {
        assert_eq!(render("a < b & c"), "<p>a < b & c</p>");
    }

    #[test]
    fn mixed_report() {
        let input = "\
**Overall**

The lines are clear.
- **Heart line**: deep
- Head line: long

* Life line: strong
Closing advice.
";
        let expected = "\
<p><b>Overall</b></p>
<p>The lines are clear.</p>
<ul>
<li><b>Heart line</b>: deep</li>
<li>Head line: long</li>
</ul>
<ul>
<li>Life line: strong</li>
</ul>
<p>Closing advice.</p>";
        assert_eq!(render(input), expected);
    }

    #[test]
    fn lists_stay_balanced() {
        let inputs = [
            "- a",
            "- a\n- b\n\n\n- c\nd\n* e",
            "x\n- y\n\nz\n- ",
            "* **a\n- b**\n\n",
            "-\n*\n- -\n* *",
        ];
        for input in inputs {
            let html = render(input);
            let mut depth = 0i32;
            for block in html.lines() {
                match block {
                    "<ul>" => {
                        assert_eq!(depth, 0, "nested list in {input:?}");
                        depth += 1;
                    }
                    "</ul>" => depth -= 1,
                    b if b.starts_with("<li>") => assert_eq!(depth, 1, "stray item in {input:?}"),
                    b => assert!(b.starts_with("<p>"), "unexpected block {b:?}"),
                }
                assert!(depth >= 0);
            }
            assert_eq!(depth, 0, "unbalanced list in {input:?}");
            assert!(!html.ends_with('\n'));
        }
    }
}
