//! Contact form validation
//!
//! Error messages are the user-facing strings shown under each input.

use thiserror::Error;

/// Minimum name length (characters)
pub const NAME_MIN_CHARS: usize = 2;
/// Minimum message length (characters)
pub const MESSAGE_MIN_CHARS: usize = 10;
/// How long the sending indicator shows before confirming (ms)
pub const SEND_DELAY_MS: i32 = 1500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Message];

    /// Element id of the input
    pub fn id(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Message => "message",
        }
    }

    pub fn validate(&self, value: &str) -> Result<(), FieldError> {
        match self {
            FormField::Name => validate_name(value),
            FormField::Email => validate_email(value),
            FormField::Message => validate_message(value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("请输入您的姓名")]
    NameMissing,
    #[error("姓名至少需要2个字符")]
    NameTooShort,
    #[error("请输入您的邮箱")]
    EmailMissing,
    #[error("请输入有效的邮箱地址")]
    EmailInvalid,
    #[error("请输入您的留言")]
    MessageMissing,
    #[error("留言内容至少需要10个字符")]
    MessageTooShort,
}

pub fn validate_name(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        Err(FieldError::NameMissing)
    } else if value.chars().count() < NAME_MIN_CHARS {
        Err(FieldError::NameTooShort)
    } else {
        Ok(())
    }
}

pub fn validate_email(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        Err(FieldError::EmailMissing)
    } else if !is_valid_email(value) {
        Err(FieldError::EmailInvalid)
    } else {
        Ok(())
    }
}

pub fn validate_message(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        Err(FieldError::MessageMissing)
    } else if value.chars().count() < MESSAGE_MIN_CHARS {
        Err(FieldError::MessageTooShort)
    } else {
        Ok(())
    }
}

/// `local@domain.tld` shape: no whitespace, exactly one `@`, non-empty local
/// part, and a dot in the domain with something on both sides of it
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Snapshot of the three contact inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    /// Every failing field, in form order
    pub fn errors(&self) -> Vec<(FormField, FieldError)> {
        FormField::ALL
            .iter()
            .filter_map(|field| self.error(*field).map(|e| (*field, e)))
            .collect()
    }

    /// Error for one field, if it fails
    pub fn error(&self, field: FormField) -> Option<FieldError> {
        field.validate(self.value(field)).err()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_rules() {
        assert_eq!(validate_name("   "), Err(FieldError::NameMissing));
        assert_eq!(validate_name("a"), Err(FieldError::NameTooShort));
        assert_eq!(validate_name("赵一"), Ok(()));
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("me@example.com"));
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("a@b.c.d"));
        assert!(!is_valid_email("me@example"));
        assert!(!is_valid_email("me@.com"));
        assert!(!is_valid_email("me@example."));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("me@@example.com"));
        assert!(!is_valid_email("me @example.com"));
        assert!(!is_valid_email("me.example.com"));

        assert_eq!(validate_email(""), Err(FieldError::EmailMissing));
        assert_eq!(validate_email("nope"), Err(FieldError::EmailInvalid));
    }

    #[test]
    fn test_message_rules() {
        assert_eq!(validate_message("\n"), Err(FieldError::MessageMissing));
        assert_eq!(validate_message("too short"), Err(FieldError::MessageTooShort));
        assert_eq!(validate_message("long enough!"), Ok(()));
    }

    #[test]
    fn test_form_collects_all_errors() {
        let form = ContactForm {
            name: "x".into(),
            email: "bad".into(),
            message: String::new(),
        };
        assert_eq!(
            form.errors(),
            vec![
                (FormField::Name, FieldError::NameTooShort),
                (FormField::Email, FieldError::EmailInvalid),
                (FormField::Message, FieldError::MessageMissing),
            ]
        );
        assert_eq!(form.error(FormField::Email), Some(FieldError::EmailInvalid));

        let form = ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hello there, nice work".into(),
        };
        assert!(form.errors().is_empty());
        assert_eq!(form.error(FormField::Message), None);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(FieldError::EmailInvalid.to_string(), "请输入有效的邮箱地址");
    }
}
