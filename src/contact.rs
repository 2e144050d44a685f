use thiserror::Error;

pub const MIN_NAME_CHARS: usize = 2;
pub const MIN_MESSAGE_CHARS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactFormError {
    #[error("name must be at least {} characters", MIN_NAME_CHARS)]
    NameTooShort,
    #[error("email address is not valid")]
    InvalidEmail,
    #[error("message must be at least {} characters", MIN_MESSAGE_CHARS)]
    MessageTooShort,
}

/// Contents of the contact form. Phone and topic are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub topic: String,
    pub message: String,
}

/// An outgoing mail ready to hand to the browser's mail handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailDraft {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

/// Minimal `text@text.text` shape check.
pub fn email_looks_valid(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // needs a dot with at least one character on each side
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ContactFormError> {
        if self.name.trim().chars().count() < MIN_NAME_CHARS {
            return Err(ContactFormError::NameTooShort);
        }
        if !email_looks_valid(&self.email) {
            return Err(ContactFormError::InvalidEmail);
        }
        if self.message.trim().chars().count() < MIN_MESSAGE_CHARS {
            return Err(ContactFormError::MessageTooShort);
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn draft(&self, recipient: &str) -> MailDraft {
        let name = self.name.trim();
        let phone = self.phone.trim();
        let topic = self.topic.trim();

        let subject = if topic.is_empty() {
            format!("Website enquiry from {}", name)
        } else {
            format!("Appointment enquiry: {}", topic)
        };

        let mut body = format!("Name: {}\nEmail: {}\n", name, self.email.trim());
        if !phone.is_empty() {
            body.push_str(&format!("Phone: {}\n", phone));
        }
        if !topic.is_empty() {
            body.push_str(&format!("Topic: {}\n", topic));
        }
        body.push('\n');
        body.push_str(self.message.trim());

        MailDraft {
            recipient: recipient.to_string(),
            subject,
            body,
        }
    }
}

impl MailDraft {
    pub fn mailto_url(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Priya Shah".to_string(),
            email: "priya@example.com".to_string(),
            phone: String::new(),
            topic: String::new(),
            message: "I'd like to book a check-up please.".to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert_eq!(valid_form().validate(), Ok(()));
        assert!(valid_form().is_valid());
    }

    #[test]
    fn test_name_length_after_trim() {
        let mut form = valid_form();
        form.name = "  A  ".to_string();
        assert_eq!(form.validate(), Err(ContactFormError::NameTooShort));
        form.name = " Al ".to_string();
        assert!(form.is_valid());
        // characters, not bytes
        form.name = "É".to_string();
        assert_eq!(form.validate(), Err(ContactFormError::NameTooShort));
    }

    #[test]
    fn test_message_length_after_trim() {
        let mut form = valid_form();
        form.message = "   too short   ".to_string();
        assert_eq!(form.validate(), Err(ContactFormError::MessageTooShort));
        form.message = "0123456789".to_string();
        assert!(form.is_valid());
        form.message = "ééééééééé".to_string();
        assert_eq!(form.validate(), Err(ContactFormError::MessageTooShort));
    }

    #[test]
    fn test_email_shape() {
        for good in ["a@b.c", "first.last@mail.example.org", " spaced@trim.me "] {
            assert!(email_looks_valid(good), "{good}");
        }
        for bad in [
            "",
            "plain",
            "@b.c",
            "a@.c",
            "a@b.",
            "a@bc",
            "a@b@c.d",
            "a b@c.d",
            "a@b .c",
        ] {
            assert!(!email_looks_valid(bad), "{bad}");
        }
    }

    #[test]
    fn test_optional_fields_do_not_gate() {
        let mut form = valid_form();
        form.phone = "not a phone".to_string();
        form.topic = "   ".to_string();
        assert!(form.is_valid());
    }

    #[test]
    fn test_first_failing_rule_reported() {
        let form = ContactForm::default();
        assert_eq!(form.validate(), Err(ContactFormError::NameTooShort));
        let mut form = valid_form();
        form.email = "nope".to_string();
        form.message = String::new();
        assert_eq!(form.validate(), Err(ContactFormError::InvalidEmail));
    }

    #[test]
    fn test_draft_without_optional_fields() {
        let draft = valid_form().draft("hello@practice.test");
        assert_eq!(draft.recipient, "hello@practice.test");
        assert_eq!(draft.subject, "Website enquiry from Priya Shah");
        assert_eq!(
            draft.body,
            "Name: Priya Shah\nEmail: priya@example.com\n\nI'd like to book a check-up please."
        );
    }

    #[test]
    fn test_draft_with_optional_fields() {
        let mut form = valid_form();
        form.phone = " 07700 900123 ".to_string();
        form.topic = "Teeth whitening".to_string();
        let draft = form.draft("hello@practice.test");
        assert_eq!(draft.subject, "Appointment enquiry: Teeth whitening");
        assert!(draft.body.contains("Phone: 07700 900123\n"));
        assert!(draft.body.contains("Topic: Teeth whitening\n"));
    }

    #[test]
    fn test_mailto_url_is_encoded() {
        let draft = MailDraft {
            recipient: "hello@practice.test".to_string(),
            subject: "Hi there & more".to_string(),
            body: "Line one\nLine two".to_string(),
        };
        assert_eq!(
            draft.mailto_url(),
            "mailto:hello@practice.test?subject=Hi%20there%20%26%20more&body=Line%20one%0ALine%20two"
        );
    }
}
