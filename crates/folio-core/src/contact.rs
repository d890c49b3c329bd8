//! Contact form validation.
//!
//! There is no backend; a valid form becomes a `mailto:` link that opens
//! the visitor's mail client with the message filled in.

use crate::error::ContactError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A validated, trimmed form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<ContactSubmission, ContactError> {
        let name = required("Name", &self.name)?;
        let email = required("Email", &self.email)?;
        let message = required("Message", &self.message)?;

        if !looks_like_email(email) {
            return Err(ContactError::InvalidEmail(email.to_string()));
        }

        Ok(ContactSubmission {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ContactError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ContactError::MissingField(field))
    } else {
        Ok(trimmed)
    }
}

/// `local@domain.tld`, no whitespace, one `@`, no empty domain labels.
fn looks_like_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.split('.').any(str::is_empty)
}

impl ContactSubmission {
    /// `mailto:` URL addressed to `to`.
    pub fn mailto(&self, to: &str) -> String {
        let subject = format!("Portfolio contact from {}", self.name);
        let body = format!("{}\n\n{} <{}>", self.message, self.name, self.email);
        format!(
            "mailto:{}?subject={}&body={}",
            to,
            urlencoding::encode(&subject),
            urlencoding::encode(&body)
        )
    }
}
