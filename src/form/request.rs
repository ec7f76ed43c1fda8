use serde::{Deserialize, Serialize};

use super::validate::{has_min_chars, is_blank, is_email, is_phone};
use super::{normalize_choice, FormErrors, FormKind, FormSchema, SelectOption, TemplateParams};

const MIN_DESCRIPTION_CHARS: usize = 20;

pub static WEBSITE_TYPES: &[SelectOption] = &[
    SelectOption::new("", "Select website type"),
    SelectOption::new("portfolio", "Portfolio / Personal"),
    SelectOption::new("business", "Business / Corporate"),
    SelectOption::new("ecommerce", "E-Commerce / Online Store"),
    SelectOption::new("blog", "Blog / Content Site"),
    SelectOption::new("webapp", "Web Application"),
    SelectOption::new("other", "Other"),
];

pub static BUDGET_RANGES: &[SelectOption] = &[
    SelectOption::new("", "Select budget range"),
    SelectOption::new("1000-2500", "$1,000 - $2,500"),
    SelectOption::new("2500-5000", "$2,500 - $5,000"),
    SelectOption::new("5000-10000", "$5,000 - $10,000"),
    SelectOption::new("10000-25000", "$10,000 - $25,000"),
    SelectOption::new("25000+", "$25,000+"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RequestField {
    FullName,
    Email,
    Phone,
    WebsiteType,
    Budget,
    Description,
}

impl RequestField {
    pub fn all() -> [RequestField; 6] {
        [
            Self::FullName,
            Self::Email,
            Self::Phone,
            Self::WebsiteType,
            Self::Budget,
            Self::Description,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::WebsiteType => "websiteType",
            Self::Budget => "budget",
            Self::Description => "description",
        }
    }

    /// Option list for enumerated fields.
    pub fn options(&self) -> Option<&'static [SelectOption]> {
        match self {
            Self::WebsiteType => Some(WEBSITE_TYPES),
            Self::Budget => Some(BUDGET_RANGES),
            _ => None,
        }
    }
}

/// The "get your website" lead-capture form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteRequest {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub website_type: String,
    pub budget: String,
    pub description: String,
}

impl FormSchema for WebsiteRequest {
    type Field = RequestField;

    const KIND: FormKind = FormKind::WebsiteRequest;

    fn value(&self, field: RequestField) -> &str {
        match field {
            RequestField::FullName => &self.full_name,
            RequestField::Email => &self.email,
            RequestField::Phone => &self.phone,
            RequestField::WebsiteType => &self.website_type,
            RequestField::Budget => &self.budget,
            RequestField::Description => &self.description,
        }
    }

    fn set(&mut self, field: RequestField, value: String) {
        match field {
            RequestField::FullName => self.full_name = value,
            RequestField::Email => self.email = value,
            RequestField::Phone => self.phone = value,
            RequestField::WebsiteType => {
                self.website_type = normalize_choice(WEBSITE_TYPES, value)
            }
            RequestField::Budget => self.budget = normalize_choice(BUDGET_RANGES, value),
            RequestField::Description => self.description = value,
        }
    }

    fn validate(&self) -> FormErrors<RequestField> {
        let mut errors = FormErrors::new();

        if is_blank(&self.full_name) {
            errors.insert(RequestField::FullName, "Full name is required");
        }

        if is_blank(&self.email) {
            errors.insert(RequestField::Email, "Email is required");
        } else if !is_email(&self.email) {
            errors.insert(RequestField::Email, "Please enter a valid email address");
        }

        if is_blank(&self.phone) {
            errors.insert(RequestField::Phone, "Phone number is required");
        } else if !is_phone(&self.phone) {
            errors.insert(RequestField::Phone, "Please enter a valid phone number");
        }

        if self.website_type.is_empty() {
            errors.insert(RequestField::WebsiteType, "Please select a website type");
        }

        if self.budget.is_empty() {
            errors.insert(RequestField::Budget, "Please select a budget range");
        }

        if is_blank(&self.description) {
            errors.insert(RequestField::Description, "Please describe your project");
        } else if !has_min_chars(&self.description, MIN_DESCRIPTION_CHARS) {
            errors.insert(
                RequestField::Description,
                "Please provide more details (at least 20 characters)",
            );
        }

        errors
    }

    fn owner_params(&self) -> TemplateParams {
        TemplateParams::from([
            ("from_name", self.full_name.clone()),
            ("from_email", self.email.clone()),
            ("phone", self.phone.clone()),
            ("website_type", self.website_type.clone()),
            ("budget", self.budget.clone()),
            ("description", self.description.clone()),
        ])
    }

    fn ack_params(&self) -> TemplateParams {
        TemplateParams::from([
            ("to_name", self.full_name.clone()),
            ("user_email", self.email.clone()),
            ("website_type", self.website_type.clone()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> WebsiteRequest {
        let mut form = WebsiteRequest::default();
        form.set(RequestField::FullName, "Grace Hopper".to_string());
        form.set(RequestField::Email, "grace@navy.mil".to_string());
        form.set(RequestField::Phone, "+1 (555) 123-4567".to_string());
        form.set(RequestField::WebsiteType, "business".to_string());
        form.set(RequestField::Budget, "5000-10000".to_string());
        form.set(
            RequestField::Description,
            "A company site with a blog and a booking page.".to_string(),
        );
        form
    }

    #[test]
    fn test_valid_request_has_no_errors() {
        let form = valid();
        assert_eq!(form.website_type, "business");
        assert_eq!(form.budget, "5000-10000");
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_empty_request_reports_every_field() {
        let errors = WebsiteRequest::default().validate();
        assert_eq!(errors.len(), RequestField::all().len());
        assert_eq!(errors.get(RequestField::FullName), Some("Full name is required"));
        assert_eq!(errors.get(RequestField::Email), Some("Email is required"));
        assert_eq!(errors.get(RequestField::Phone), Some("Phone number is required"));
        assert_eq!(
            errors.get(RequestField::WebsiteType),
            Some("Please select a website type")
        );
        assert_eq!(
            errors.get(RequestField::Budget),
            Some("Please select a budget range")
        );
        assert_eq!(
            errors.get(RequestField::Description),
            Some("Please describe your project")
        );
    }

    #[test]
    fn test_missing_field_reports_only_that_field() {
        for field in RequestField::all() {
            let mut form = valid();
            form.set(field, String::new());
            let errors = form.validate();
            assert_eq!(errors.len(), 1, "only {field:?} should be reported");
            assert!(errors.get(field).is_some());
        }
    }

    #[test]
    fn test_format_errors() {
        let mut form = valid();
        form.set(RequestField::Phone, "555-1234".to_string());
        form.set(RequestField::Description, "  short text  ".to_string());
        let errors = form.validate();
        assert_eq!(
            errors.get(RequestField::Phone),
            Some("Please enter a valid phone number")
        );
        assert_eq!(
            errors.get(RequestField::Description),
            Some("Please provide more details (at least 20 characters)")
        );
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_unknown_option_becomes_sentinel() {
        let mut form = valid();
        form.set(RequestField::Budget, "a million dollars".to_string());
        assert_eq!(form.budget, "");
        assert_eq!(
            form.validate().get(RequestField::Budget),
            Some("Please select a budget range")
        );
    }

    #[test]
    fn test_option_lists_start_with_sentinel() {
        for field in [RequestField::WebsiteType, RequestField::Budget] {
            let options = field.options().expect("enumerated field has options");
            assert_eq!(options[0].value, "");
            assert!(options[1..].iter().all(|o| !o.value.is_empty()));
        }
        assert!(RequestField::Phone.options().is_none());
    }

    #[test]
    fn test_template_params() {
        let form = valid();
        let owner = form.owner_params();
        assert_eq!(owner.len(), 6);
        assert_eq!(owner["from_name"], "Grace Hopper");
        assert_eq!(owner["budget"], "5000-10000");
        let ack = form.ack_params();
        assert_eq!(ack["to_name"], "Grace Hopper");
        assert_eq!(ack["user_email"], "grace@navy.mil");
        assert_eq!(ack["website_type"], "business");
    }

    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_value(valid()).expect("serializes");
        assert_eq!(json["fullName"], "Grace Hopper");
        assert_eq!(json["websiteType"], "business");
    }
}
