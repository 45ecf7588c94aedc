//! Contact form field validation.
//!
//! Each validator is a pure function of the field text. The same functions
//! back the on-blur feedback and the submit gate.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\p{L}\s]+$").expect("name pattern"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

const NAME_MIN_CHARS: usize = 2;
const MESSAGE_MIN_CHARS: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Name can only contain letters and spaces")]
    NameInvalidChars,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("Message is required")]
    MessageRequired,
    #[error("Message must be at least 10 characters")]
    MessageTooShort,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Element id of the form control.
    pub fn input_id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    /// Element id of the inline error container.
    pub fn error_id(self) -> &'static str {
        match self {
            Field::Name => "nameError",
            Field::Email => "emailError",
            Field::Message => "messageError",
        }
    }

    pub fn validate(self, value: &str) -> Result<(), FieldError> {
        match self {
            Field::Name => validate_name(value),
            Field::Email => validate_email(value),
            Field::Message => validate_message(value),
        }
    }
}

pub fn validate_name(value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::NameRequired);
    }
    if value.chars().count() < NAME_MIN_CHARS {
        return Err(FieldError::NameTooShort);
    }
    if !NAME_RE.is_match(value) {
        return Err(FieldError::NameInvalidChars);
    }
    Ok(())
}

pub fn validate_email(value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::EmailRequired);
    }
    if !EMAIL_RE.is_match(value) {
        return Err(FieldError::EmailInvalid);
    }
    Ok(())
}

pub fn validate_message(value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::MessageRequired);
    }
    if value.chars().count() < MESSAGE_MIN_CHARS {
        return Err(FieldError::MessageTooShort);
    }
    Ok(())
}

/// Current text of the three contact form fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Run every validator; all fields are checked even after a failure so
    /// each one gets its own inline message.
    pub fn validate(&self) -> FormReport {
        FormReport {
            results: Field::ALL.map(|field| (field, field.validate(self.value(field)))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormReport {
    pub results: [(Field, Result<(), FieldError>); 3],
}

impl FormReport {
    pub fn is_valid(&self) -> bool {
        self.results.iter().all(|(_, result)| result.is_ok())
    }

    pub fn errors(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.results
            .iter()
            .filter_map(|(field, result)| result.err().map(|err| (*field, err)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_rules() {
        assert_eq!(validate_name(""), Err(FieldError::NameRequired));
        assert_eq!(validate_name("   "), Err(FieldError::NameRequired));
        assert_eq!(validate_name("J"), Err(FieldError::NameTooShort));
        assert_eq!(validate_name("Jane2"), Err(FieldError::NameInvalidChars));
        assert_eq!(validate_name("R2D2 Droid"), Err(FieldError::NameInvalidChars));
        assert_eq!(validate_name("Jane Doe"), Ok(()));
        assert_eq!(validate_name("Zoë Ångström"), Ok(()));
    }

    #[test]
    fn email_rules() {
        assert_eq!(validate_email(""), Err(FieldError::EmailRequired));
        assert_eq!(validate_email("foo"), Err(FieldError::EmailInvalid));
        assert_eq!(validate_email("foo@bar"), Err(FieldError::EmailInvalid));
        assert_eq!(validate_email("foo bar@baz.com"), Err(FieldError::EmailInvalid));
        assert_eq!(validate_email("a@b.co"), Ok(()));
    }

    #[test]
    fn message_length_boundary() {
        assert_eq!(validate_message(""), Err(FieldError::MessageRequired));
        assert_eq!(validate_message("123456789"), Err(FieldError::MessageTooShort));
        assert_eq!(validate_message("1234567890"), Ok(()));
    }

    #[test]
    fn report_collects_every_failure() {
        let form = ContactForm {
            name: "J".into(),
            email: "a@b.co".into(),
            message: "short".into(),
        };
        let report = form.validate();
        assert!(!report.is_valid());
        let errors: Vec<_> = report.errors().collect();
        assert_eq!(
            errors,
            vec![
                (Field::Name, FieldError::NameTooShort),
                (Field::Message, FieldError::MessageTooShort),
            ]
        );
    }

    #[test]
    fn error_messages_are_user_facing() {
        assert_eq!(FieldError::EmailInvalid.to_string(), "Please enter a valid email address");
        assert_eq!(Field::Message.error_id(), "messageError");
    }
}
