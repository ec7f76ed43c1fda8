use serde::{Deserialize, Serialize};

use super::validate::{has_min_chars, is_blank, is_email};
use super::{FormErrors, FormKind, FormSchema, TemplateParams};

const MIN_MESSAGE_CHARS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn all() -> [ContactField; 3] {
        [Self::Name, Self::Email, Self::Message]
    }

    /// Form control name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

/// The general "get in touch" form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormSchema for ContactForm {
    type Field = ContactField;

    const KIND: FormKind = FormKind::Contact;

    fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    fn validate(&self) -> FormErrors<ContactField> {
        let mut errors = FormErrors::new();

        if is_blank(&self.name) {
            errors.insert(ContactField::Name, "Name is required");
        }

        if is_blank(&self.email) {
            errors.insert(ContactField::Email, "Email is required");
        } else if !is_email(&self.email) {
            errors.insert(ContactField::Email, "Please enter a valid email address");
        }

        if is_blank(&self.message) {
            errors.insert(ContactField::Message, "Message is required");
        } else if !has_min_chars(&self.message, MIN_MESSAGE_CHARS) {
            errors.insert(ContactField::Message, "Please provide more details");
        }

        errors
    }

    fn owner_params(&self) -> TemplateParams {
        TemplateParams::from([
            ("from_name", self.name.clone()),
            ("from_email", self.email.clone()),
            ("message", self.message.clone()),
        ])
    }

    fn ack_params(&self) -> TemplateParams {
        TemplateParams::from([
            ("to_name", self.name.clone()),
            ("user_email", self.email.clone()),
        ])
    }
}
