use thiserror::Error;

use crate::form::FormKind;

pub const DEFAULT_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),
}

/// Template pair for one form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Templates {
    pub owner: String,
    pub ack: String,
}

/// Credentials and template ids for the transactional email service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailConfig {
    pub api_url: String,
    pub service_id: String,
    pub public_key: String,
    pub private_key: Option<String>,
    pub contact: Templates,
    pub request: Templates,
}

impl EmailConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let required = |key: &'static str| optional(key).ok_or(ConfigError::Missing(key));

        Ok(Self {
            api_url: optional("EMAILJS_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            service_id: required("EMAILJS_SERVICE_ID")?,
            public_key: required("EMAILJS_PUBLIC_KEY")?,
            private_key: optional("EMAILJS_PRIVATE_KEY"),
            contact: Templates {
                owner: required("EMAILJS_CONTACT_TEMPLATE")?,
                ack: required("EMAILJS_CONTACT_REPLY_TEMPLATE")?,
            },
            request: Templates {
                owner: required("EMAILJS_REQUEST_TEMPLATE")?,
                ack: required("EMAILJS_REQUEST_REPLY_TEMPLATE")?,
            },
        })
    }

    pub fn templates(&self, kind: FormKind) -> &Templates {
        match kind {
            FormKind::Contact => &self.contact,
            FormKind::WebsiteRequest => &self.request,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env() -> HashMap<&'static str, String> {
        HashMap::from([
            ("EMAILJS_SERVICE_ID", "service_abc".to_string()),
            ("EMAILJS_PUBLIC_KEY", "pk_123".to_string()),
            ("EMAILJS_CONTACT_TEMPLATE", "template_contact".to_string()),
            ("EMAILJS_CONTACT_REPLY_TEMPLATE", "template_contact_reply".to_string()),
            ("EMAILJS_REQUEST_TEMPLATE", "template_request".to_string()),
            ("EMAILJS_REQUEST_REPLY_TEMPLATE", "template_request_reply".to_string()),
        ])
    }

    #[test]
    fn test_from_lookup() {
        let vars = env();
        let config = EmailConfig::from_lookup(|k| vars.get(k).cloned()).expect("complete config");
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.private_key, None);
        assert_eq!(config.templates(FormKind::Contact).owner, "template_contact");
        assert_eq!(
            config.templates(FormKind::WebsiteRequest).ack,
            "template_request_reply"
        );
    }

    #[test]
    fn test_missing_key() {
        let mut vars = env();
        vars.remove("EMAILJS_PUBLIC_KEY");
        let err = EmailConfig::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
        assert_eq!(err, ConfigError::Missing("EMAILJS_PUBLIC_KEY"));
    }

    #[test]
    fn test_blank_counts_as_missing() {
        let mut vars = env();
        vars.insert("EMAILJS_SERVICE_ID", "   ".to_string());
        vars.insert("EMAILJS_PRIVATE_KEY", "".to_string());
        let err = EmailConfig::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
        assert_eq!(err, ConfigError::Missing("EMAILJS_SERVICE_ID"));
    }

    #[test]
    fn test_optional_overrides() {
        let mut vars = env();
        vars.insert("EMAILJS_PRIVATE_KEY", "secret".to_string());
        vars.insert("EMAILJS_API_URL", "http://localhost:9000/send".to_string());
        let config = EmailConfig::from_lookup(|k| vars.get(k).cloned()).expect("complete config");
        assert_eq!(config.private_key.as_deref(), Some("secret"));
        assert_eq!(config.api_url, "http://localhost:9000/send");
    }
}
