// src/page.rs
//
// Splices a rendered fragment into a static HTML shell.
//
// - The shell carries two placeholders: USER_NAME_PLACEHOLDER and
//   RESULT_PLACEHOLDER. Every occurrence of each is replaced.
// - The user name is substituted first, then the fragment.
// - Values are inserted verbatim, like the fragment itself.

use std::borrow::Cow;
use thiserror::Error;

pub const USER_NAME_PLACEHOLDER: &str = "__USER_NAME__";
pub const RESULT_PLACEHOLDER: &str = "__DIAGNOSIS_RESULT__";

/// Built-in page shell.
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/report.html");

/// Errors that can occur when loading a page shell.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PageError {
    #[error("template has no {0} placeholder")]
    MissingPlaceholder(&'static str),
}

#[derive(Clone, Debug)]
pub struct Page<'t> {
    template: Cow<'t, str>,
    user_name: String,
}

impl Page<'static> {
    /// A page using the built-in shell.
    pub fn new(user_name: impl Into<String>) -> Self {
        Page {
            template: Cow::Borrowed(DEFAULT_TEMPLATE),
            user_name: user_name.into(),
        }
    }
}

impl<'t> Page<'t> {
    /// A page using a caller-supplied shell. The shell must contain the
    /// result placeholder; the user name placeholder is optional.
    pub fn with_template(
        template: impl Into<Cow<'t, str>>,
        user_name: impl Into<String>,
    ) -> Result<Self, PageError> {
        let template = template.into();
        if !template.contains(RESULT_PLACEHOLDER) {
            return Err(PageError::MissingPlaceholder(RESULT_PLACEHOLDER));
        }
        if !template.contains(USER_NAME_PLACEHOLDER) {
            tracing::warn!(
                "template has no {} placeholder; user name not shown",
                USER_NAME_PLACEHOLDER
            );
        }
        Ok(Page {
            template,
            user_name: user_name.into(),
        })
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn assemble(&self, fragment: &str) -> String {
        let html = self
            .template
            .replace(USER_NAME_PLACEHOLDER, &self.user_name)
            .replace(RESULT_PLACEHOLDER, fragment);
        tracing::debug!(
            fragment_bytes = fragment.len(),
            page_bytes = html.len(),
            "assembled page"
        );
        html
    }
}

/// Splice `fragment` into the built-in shell.
pub fn assemble(fragment: &str, user_name: &str) -> String {
    Page::new(user_name).assemble(fragment)
}
