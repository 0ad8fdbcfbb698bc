use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use thiserror::Error;

/// RFC 3986 unreserved characters pass through, everything else is escaped.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Write a message before sending")]
    EmptyMessage,
    #[error("\"{0}\" doesn't look like an email address")]
    InvalidReplyTo(String),
}

/// Contents of the contact form. Sending opens the visitor's mail client;
/// nothing is submitted anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    pub fn subject_line(&self) -> String {
        let subject = self.subject.trim();
        let name = self.name.trim();
        if !subject.is_empty() {
            subject.to_string()
        } else if !name.is_empty() {
            format!("Hello from {name}")
        } else {
            "Hello".to_string()
        }
    }

    pub fn body(&self) -> String {
        let name = self.name.trim();
        let email = self.email.trim();
        let signature = match (name.is_empty(), email.is_empty()) {
            (false, false) => Some(format!("From: {name} <{email}>")),
            (false, true) => Some(format!("From: {name}")),
            (true, false) => Some(format!("From: <{email}>")),
            (true, true) => None,
        };
        let message = self.message.trim();
        match signature {
            Some(sig) => format!("{message}\r\n\r\n{sig}"),
            None => message.to_string(),
        }
    }

    /// Builds the `mailto:` link addressed to `to`.
    pub fn mailto(&self, to: &str) -> Result<String, ContactError> {
        if self.message.trim().is_empty() {
            return Err(ContactError::EmptyMessage);
        }
        let email = self.email.trim();
        if !email.is_empty() && !looks_like_email(email) {
            return Err(ContactError::InvalidReplyTo(email.to_string()));
        }
        Ok(format!(
            "mailto:{to}?subject={}&body={}",
            utf8_percent_encode(&self.subject_line(), QUERY_VALUE),
            utf8_percent_encode(&self.body(), QUERY_VALUE),
        ))
    }
}

fn looks_like_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
