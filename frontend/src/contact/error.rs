use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Message => "Message",
        })
    }
}

/// Everything that can stop a contact request from being acknowledged.
///
/// All variants are shown inline next to the form; none of them discard the
/// draft.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(ContactField),
    #[error("\"{0}\" doesn't look like an email address")]
    InvalidEmail(String),
    #[error("Couldn't prepare your message: {0}")]
    Encoding(String),
    #[error("We couldn't reach our servers. Check your connection and try again. ({0})")]
    Network(String),
    #[error("{}", server_message(.status, .message))]
    Server { status: u16, message: Option<String> },
}

fn server_message(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(message) => format!("Something went wrong on our side ({status}): {message}"),
        None => format!("Something went wrong on our side ({status}). Please try again shortly."),
    }
}

impl ContactError {
    pub fn is_validation(&self) -> bool {
        matches!(self, ContactError::MissingField(_) | ContactError::InvalidEmail(_))
    }

    /// Field the error should be attached to, if any.
    pub fn field(&self) -> Option<ContactField> {
        match self {
            ContactError::MissingField(field) => Some(*field),
            ContactError::InvalidEmail(_) => Some(ContactField::Email),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_point_at_fields() {
        let missing = ContactError::MissingField(ContactField::Message);
        assert!(missing.is_validation());
        assert_eq!(missing.field(), Some(ContactField::Message));
        assert_eq!(missing.to_string(), "Message is required");

        let email = ContactError::InvalidEmail("bob".into());
        assert_eq!(email.field(), Some(ContactField::Email));
    }

    #[test]
    fn transport_errors_are_not_field_errors() {
        let network = ContactError::Network("timeout".into());
        assert!(!network.is_validation());
        assert_eq!(network.field(), None);

        let server = ContactError::Server { status: 502, message: None };
        assert!(!server.is_validation());
        assert!(server.to_string().contains("502"));
    }

    #[test]
    fn server_message_is_surfaced() {
        let server = ContactError::Server { status: 422, message: Some("Spam detected".into()) };
        assert_eq!(server.to_string(), "Something went wrong on our side (422): Spam detected");
    }
}
