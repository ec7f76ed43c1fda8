mod config;
#[cfg(feature = "ssr")]
mod emailjs;

pub use config::{ConfigError, EmailConfig, Templates};
#[cfg(feature = "ssr")]
pub use emailjs::EmailJsClient;

use std::future::Future;

use thiserror::Error;

use crate::form::{FormKind, FormSchema, TemplateParams};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("email delivery is not configured")]
    NotConfigured,
    #[error("email request failed: {0}")]
    Transport(String),
    #[error("email service rejected the request ({status}): {text}")]
    Rejected { status: u16, text: String },
}

/// The two deliveries a successful submission triggers.
pub trait EmailDispatch {
    fn send_owner_notification(
        &self,
        kind: FormKind,
        params: TemplateParams,
    ) -> impl Future<Output = Result<(), DispatchError>> + Send;

    fn send_submitter_ack(
        &self,
        kind: FormKind,
        params: TemplateParams,
    ) -> impl Future<Output = Result<(), DispatchError>> + Send;
}

/// Notify the owner, then acknowledge the submitter.
///
/// The acknowledgement is only issued once the notification has gone
/// through. The first failure ends the delivery; nothing is retried.
pub async fn deliver<S, D>(values: &S, dispatcher: &D) -> Result<(), DispatchError>
where
    S: FormSchema,
    D: EmailDispatch,
{
    dispatcher
        .send_owner_notification(S::KIND, values.owner_params())
        .await?;
    dispatcher
        .send_submitter_ack(S::KIND, values.ack_params())
        .await?;
    log::info!("{:?} submission delivered", S::KIND);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{ContactForm, FormMachine, RequestField, SubmissionStatus, WebsiteRequest};
    use std::sync::Mutex;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Call {
        Owner,
        Ack,
    }

    #[derive(Default)]
    struct MockDispatch {
        calls: Mutex<Vec<(Call, FormKind, TemplateParams)>>,
        fail_owner: bool,
        fail_ack: bool,
    }

    impl MockDispatch {
        fn failing_owner() -> Self {
            Self {
                fail_owner: true,
                ..Default::default()
            }
        }

        fn failing_ack() -> Self {
            Self {
                fail_ack: true,
                ..Default::default()
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls
                .lock()
                .expect("should be able to lock calls")
                .iter()
                .map(|(c, _, _)| *c)
                .collect()
        }

        fn record(
            &self,
            call: Call,
            kind: FormKind,
            params: TemplateParams,
            fail: bool,
        ) -> Result<(), DispatchError> {
            self.calls
                .lock()
                .expect("should be able to lock calls")
                .push((call, kind, params));
            if fail {
                Err(DispatchError::Rejected {
                    status: 400,
                    text: "The template ID is invalid".to_string(),
                })
            } else {
                Ok(())
            }
        }
    }

    impl EmailDispatch for MockDispatch {
        async fn send_owner_notification(
            &self,
            kind: FormKind,
            params: TemplateParams,
        ) -> Result<(), DispatchError> {
            self.record(Call::Owner, kind, params, self.fail_owner)
        }

        async fn send_submitter_ack(
            &self,
            kind: FormKind,
            params: TemplateParams,
        ) -> Result<(), DispatchError> {
            self.record(Call::Ack, kind, params, self.fail_ack)
        }
    }

    fn contact() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Tell me about your rates.".to_string(),
        }
    }

    #[tokio::test]
    async fn test_deliver_sends_owner_then_ack() {
        let mock = MockDispatch::default();
        deliver(&contact(), &mock).await.expect("delivery succeeds");
        assert_eq!(mock.calls(), vec![Call::Owner, Call::Ack]);

        let calls = mock.calls.lock().expect("should be able to lock calls");
        assert_eq!(calls[0].1, FormKind::Contact);
        assert_eq!(calls[0].2["from_email"], "ada@example.com");
        assert_eq!(calls[1].2["to_name"], "Ada");
    }

    #[tokio::test]
    async fn test_owner_failure_skips_ack() {
        let mock = MockDispatch::failing_owner();
        let err = deliver(&contact(), &mock).await.unwrap_err();
        assert!(matches!(err, DispatchError::Rejected { status: 400, .. }));
        assert_eq!(mock.calls(), vec![Call::Owner]);
    }

    #[tokio::test]
    async fn test_ack_failure_is_an_error() {
        let mock = MockDispatch::failing_ack();
        assert!(deliver(&contact(), &mock).await.is_err());
        assert_eq!(mock.calls(), vec![Call::Owner, Call::Ack]);
    }

    #[tokio::test]
    async fn test_submission_round_trip_success() {
        let mock = MockDispatch::default();
        let mut machine = FormMachine::<WebsiteRequest>::new();
        machine.update(RequestField::FullName, "Grace".to_string());
        machine.update(RequestField::Email, "grace@example.com".to_string());
        machine.update(RequestField::Phone, "555 123 4567".to_string());
        machine.update(RequestField::WebsiteType, "webapp".to_string());
        machine.update(RequestField::Budget, "25000+".to_string());
        machine.update(
            RequestField::Description,
            "Internal dashboard for our sales team".to_string(),
        );

        let snapshot = machine.begin_submit().expect("valid request");
        // a second trigger while in flight must not dispatch again
        assert!(machine.begin_submit().is_none());

        let ticket = machine.finish(deliver(&snapshot, &mock).await);
        assert_eq!(mock.calls(), vec![Call::Owner, Call::Ack]);
        assert_eq!(machine.status(), SubmissionStatus::Success);
        assert_eq!(machine.values(), &WebsiteRequest::default());

        machine.expire(ticket.expect("success issues a ticket"));
        assert_eq!(machine.status(), SubmissionStatus::Idle);
    }

    #[tokio::test]
    async fn test_submission_round_trip_failure() {
        let mock = MockDispatch::failing_owner();
        let mut machine = FormMachine::<ContactForm>::new();
        machine.update(crate::form::ContactField::Name, "Ada".to_string());
        machine.update(crate::form::ContactField::Email, "ada@example.com".to_string());
        machine.update(
            crate::form::ContactField::Message,
            "Tell me about your rates.".to_string(),
        );

        let snapshot = machine.begin_submit().expect("valid contact");
        assert!(machine.finish(deliver(&snapshot, &mock).await).is_none());
        assert_eq!(machine.status(), SubmissionStatus::Error);
        assert_eq!(machine.values(), &contact());
    }
}
