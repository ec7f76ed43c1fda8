mod contact;
mod machine;
mod request;
mod validate;

pub use contact::{ContactField, ContactForm};
pub use machine::{
    surface, FormMachine, Notice, Presentation, ResetTicket, SubmissionStatus, Surface,
    SUCCESS_RESET_DELAY,
};
pub use request::{RequestField, WebsiteRequest, BUDGET_RANGES, WEBSITE_TYPES};

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Flat variable mapping handed to an email template.
pub type TemplateParams = BTreeMap<&'static str, String>;

/// Which form a submission came from. Selects the email templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormKind {
    Contact,
    WebsiteRequest,
}

/// Field shape, validation rules and template mapping for one form.
pub trait FormSchema: Default + Clone + Send + Sync + 'static {
    type Field: Copy + Ord + Eq + Hash + Debug + Send + Sync + 'static;

    const KIND: FormKind;

    fn value(&self, field: Self::Field) -> &str;

    fn set(&mut self, field: Self::Field, value: String);

    /// Produce the complete error set for the current values.
    fn validate(&self) -> FormErrors<Self::Field>;

    /// Variables for the notification sent to the site owner.
    fn owner_params(&self) -> TemplateParams;

    /// Variables for the acknowledgement sent back to the submitter.
    fn ack_params(&self) -> TemplateParams;
}

/// A `(value, label)` pair for an enumerated field. The first entry of every
/// option list is the unselected sentinel with an empty value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

impl SelectOption {
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }
}

/// Returns `value` if it names one of `options`, otherwise the sentinel.
pub(crate) fn normalize_choice(options: &[SelectOption], value: String) -> String {
    if options.iter().any(|o| !o.value.is_empty() && o.value == value) {
        value
    } else {
        String::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormErrors<F: Ord> {
    errors: BTreeMap<F, &'static str>,
}

impl<F: Ord> Default for FormErrors<F> {
    fn default() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }
}

impl<F: Ord + Copy> FormErrors<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: F, message: &'static str) {
        self.errors.insert(field, message);
    }

    pub fn get(&self, field: F) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn clear(&mut self, field: F) {
        self.errors.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (F, &'static str)> + '_ {
        self.errors.iter().map(|(f, m)| (*f, *m))
    }
}

impl<F: Ord> FromIterator<(F, &'static str)> for FormErrors<F> {
    fn from_iter<T: IntoIterator<Item = (F, &'static str)>>(iter: T) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_choice() {
        let options = [
            SelectOption::new("", "Pick one"),
            SelectOption::new("a", "A"),
            SelectOption::new("b", "B"),
        ];
        assert_eq!(normalize_choice(&options, "b".to_string()), "b");
        assert_eq!(normalize_choice(&options, "c".to_string()), "");
        assert_eq!(normalize_choice(&options, String::new()), "");
    }

    #[test]
    fn test_form_errors_clear() {
        let mut errors: FormErrors<u8> = [(1, "one"), (2, "two")].into_iter().collect();
        assert_eq!(errors.len(), 2);
        errors.clear(1);
        assert_eq!(errors.get(1), None);
        assert_eq!(errors.get(2), Some("two"));
        errors.clear(2);
        assert!(errors.is_empty());
    }
}
