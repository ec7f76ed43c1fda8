use reqwest::Client;
use serde::Serialize;

use super::{DispatchError, EmailConfig, EmailDispatch};
use crate::form::{FormKind, TemplateParams};

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: &'a TemplateParams,
}

/// EmailJS REST client. One instance is shared by every request.
#[derive(Debug, Clone)]
pub struct EmailJsClient {
    http: Client,
    config: EmailConfig,
}

impl EmailJsClient {
    pub fn new(config: EmailConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    async fn send(&self, template_id: &str, params: &TemplateParams) -> Result<(), DispatchError> {
        let body = SendRequest {
            service_id: &self.config.service_id,
            template_id,
            user_id: &self.config.public_key,
            access_token: self.config.private_key.as_deref(),
            template_params: params,
        };
        let res = self
            .http
            .post(&self.config.api_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| DispatchError::Transport(e.to_string()))?;

        let status = res.status();
        if status.is_success() {
            tracing::debug!(template_id, "email accepted");
            return Ok(());
        }
        let text = res.text().await.unwrap_or_default();
        Err(DispatchError::Rejected {
            status: status.as_u16(),
            text,
        })
    }
}

impl EmailDispatch for EmailJsClient {
    async fn send_owner_notification(
        &self,
        kind: FormKind,
        params: TemplateParams,
    ) -> Result<(), DispatchError> {
        let template = &self.config.templates(kind).owner;
        self.send(template, &params).await
    }

    async fn send_submitter_ack(
        &self,
        kind: FormKind,
        params: TemplateParams,
    ) -> Result<(), DispatchError> {
        let template = &self.config.templates(kind).ack;
        self.send(template, &params).await
    }
}
