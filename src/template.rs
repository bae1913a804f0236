use std::sync::OnceLock;

use regex::{NoExpand, Regex};
use thiserror::Error;

/// Canonical spelling of the ticket placeholder, used in error messages.
pub const TICKET_PLACEHOLDER: &str = "{{.Ticket}}";
/// Canonical spelling of the message placeholder, used in error messages.
pub const MESSAGE_PLACEHOLDER: &str = "{{.Message}}";

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("commit message template must contain {0}")]
    MissingPlaceholder(&'static str),
}

/// Matches `{{.Ticket}}`, tolerating whitespace inside the braces.
pub(crate) fn ticket_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{\{\s*\.Ticket\s*\}\}").expect("valid placeholder regex"))
}

/// Matches `{{.Message}}`, tolerating whitespace inside the braces.
pub(crate) fn message_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{\{\s*\.Message\s*\}\}").expect("valid placeholder regex"))
}

/// Substitute the ticket and message into the commit message template.
///
/// Load-time validation already rejects templates missing a placeholder, but
/// the check is repeated here so a render can never silently produce a
/// partial message. Replacement text is inserted verbatim; `$` in a commit
/// message is not a capture-group reference.
pub fn render_commit_message(
    template: &str,
    ticket: &str,
    message: &str,
) -> Result<String, TemplateError> {
    if !ticket_re().is_match(template) {
        return Err(TemplateError::MissingPlaceholder(TICKET_PLACEHOLDER));
    }
    if !message_re().is_match(template) {
        return Err(TemplateError::MissingPlaceholder(MESSAGE_PLACEHOLDER));
    }

    let rendered = ticket_re().replace_all(template, NoExpand(ticket));
    let rendered = message_re().replace_all(&rendered, NoExpand(message));
    Ok(rendered.into_owned())
}
