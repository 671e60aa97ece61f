use serde::{Deserialize, Serialize};

use super::error::{ContactError, ContactField};

/// What the visitor has typed so far. Kept verbatim across failed attempts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

/// A validated, trimmed request ready to hand to a submitter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Ack {
    pub reference: String,
}

fn required(value: &str, field: ContactField) -> Result<String, ContactError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ContactError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !email.chars().any(char::is_whitespace)
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

impl ContactDraft {
    pub fn validate(&self) -> Result<ContactSubmission, ContactError> {
        let name = required(&self.name, ContactField::Name)?;
        let email = required(&self.email, ContactField::Email)?;
        if !looks_like_email(&email) {
            return Err(ContactError::InvalidEmail(email));
        }
        let message = required(&self.message, ContactField::Message)?;
        let company = Some(self.company.trim())
            .filter(|company| !company.is_empty())
            .map(str::to_string);

        Ok(ContactSubmission { name, email, company, message })
    }
}

/// Lifecycle of the form. `Failed` is editable again, with the error shown
/// inline until the next attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Editing,
    Submitting,
    Submitted(Ack),
    Failed(ContactError),
}

impl FormStatus {
    pub fn is_editable(&self) -> bool {
        matches!(self, FormStatus::Editing | FormStatus::Failed(_))
    }

    pub fn error(&self) -> Option<&ContactError> {
        match self {
            FormStatus::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Moves into `Submitting`. Returns false when a submission is already in
    /// flight or has been acknowledged.
    pub fn begin(&mut self) -> bool {
        if !self.is_editable() {
            return false;
        }
        *self = FormStatus::Submitting;
        true
    }

    pub fn finish(&mut self, result: Result<Ack, ContactError>) {
        *self = match result {
            Ok(ack) => FormStatus::Submitted(ack),
            Err(error) => FormStatus::Failed(error),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ContactDraft {
        ContactDraft {
            name: "  Ada Lovelace ".into(),
            email: "ada@analytical.engine".into(),
            company: "   ".into(),
            message: "We need a data platform.\n".into(),
        }
    }

    #[test]
    fn valid_draft_is_trimmed() {
        let submission = draft().validate().unwrap();
        assert_eq!(submission.name, "Ada Lovelace");
        assert_eq!(submission.company, None);
        assert_eq!(submission.message, "We need a data platform.");
    }

    #[test]
    fn company_is_kept_when_present() {
        let mut draft = draft();
        draft.company = " Analytical Engines Ltd ".into();
        assert_eq!(
            draft.validate().unwrap().company.as_deref(),
            Some("Analytical Engines Ltd")
        );
    }

    #[test]
    fn required_fields_are_enforced() {
        let mut missing_name = draft();
        missing_name.name = " ".into();
        assert_eq!(
            missing_name.validate(),
            Err(ContactError::MissingField(ContactField::Name))
        );

        let mut missing_message = draft();
        missing_message.message.clear();
        assert_eq!(
            missing_message.validate(),
            Err(ContactError::MissingField(ContactField::Message))
        );

        let mut missing_email = draft();
        missing_email.email.clear();
        assert_eq!(
            missing_email.validate(),
            Err(ContactError::MissingField(ContactField::Email))
        );
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for email in ["ada", "@engine.io", "ada@", "ada@engine", "ada@@engine.io", "ada@engine..io", "a da@engine.io"] {
            let mut draft = draft();
            draft.email = email.into();
            assert!(
                matches!(draft.validate(), Err(ContactError::InvalidEmail(_))),
                "{email} should be rejected"
            );
        }
    }

    #[test]
    fn company_is_omitted_from_payload_when_blank() {
        let json = serde_json::to_value(draft().validate().unwrap()).unwrap();
        assert!(json.get("company").is_none());
        assert_eq!(json["email"], "ada@analytical.engine");
    }

    #[test]
    fn failure_returns_to_editable() {
        let mut status = FormStatus::default();
        assert!(status.begin());
        assert!(!status.is_editable());
        assert!(!status.begin());

        status.finish(Err(ContactError::Network("offline".into())));
        assert!(status.is_editable());
        assert_eq!(status.error(), Some(&ContactError::Network("offline".into())));

        assert!(status.begin());
        status.finish(Ok(Ack { reference: "KRV-1".into() }));
        assert_eq!(status, FormStatus::Submitted(Ack { reference: "KRV-1".into() }));
        assert!(!status.begin());
    }
}
