use serde::Serialize;
use thiserror::Error;

use crate::content::RECIPIENT_NAME;

pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DeliveryError {
    #[error("delivery service is not configured")]
    NotConfigured,
    #[error("delivery request failed: {0}")]
    Transport(String),
    #[error("delivery service rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Identifiers for the transactional email service. Missing values stay empty and make every
/// send fail with [`DeliveryError::NotConfigured`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeliveryConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub recipient_name: String,
    pub endpoint: String,
}

impl DeliveryConfig {
    /// Read at compile time; a static site has no runtime environment.
    pub fn from_build_env() -> Self {
        Self {
            service_id: option_env!("EMAILJS_SERVICE_ID").unwrap_or_default().to_string(),
            template_id: option_env!("EMAILJS_TEMPLATE_ID").unwrap_or_default().to_string(),
            public_key: option_env!("EMAILJS_PUBLIC_KEY").unwrap_or_default().to_string(),
            recipient_name: RECIPIENT_NAME.to_string(),
            endpoint: EMAILJS_ENDPOINT.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub name: String,
    pub from_name: String,
    pub from_email: String,
    pub email: String,
    pub title: String,
    pub message: String,
    pub to_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EmailRequest {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    pub template_params: TemplateParams,
}

impl EmailRequest {
    /// The template expects the sender under both `name`/`from_name` and
    /// `email`/`from_email`.
    pub fn new(config: &DeliveryConfig, name: &str, email: &str, title: &str, message: &str) -> Self {
        Self {
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            user_id: config.public_key.clone(),
            template_params: TemplateParams {
                name: name.to_string(),
                from_name: name.to_string(),
                from_email: email.to_string(),
                email: email.to_string(),
                title: title.to_string(),
                message: message.to_string(),
                to_name: config.recipient_name.clone(),
            },
        }
    }

    pub fn is_addressed(&self) -> bool {
        !self.service_id.is_empty() && !self.template_id.is_empty() && !self.user_id.is_empty()
    }
}

/// One attempt per call, no retry.
pub trait Mailer {
    async fn send(&self, request: &EmailRequest) -> Result<(), DeliveryError>;
}

#[cfg(target_arch = "wasm32")]
pub use emailjs::EmailJsMailer;

#[cfg(target_arch = "wasm32")]
mod emailjs {
    use super::{DeliveryError, EmailRequest, Mailer};
    use gloo_net::http::Request;

    #[derive(Clone, PartialEq)]
    pub struct EmailJsMailer {
        endpoint: String,
    }

    impl EmailJsMailer {
        pub fn new(endpoint: &str) -> Self {
            Self {
                endpoint: endpoint.to_string(),
            }
        }

        async fn post(&self, request: &EmailRequest) -> Result<(), DeliveryError> {
            if !request.is_addressed() {
                return Err(DeliveryError::NotConfigured);
            }

            let response = Request::post(&self.endpoint)
                .json(request)
                .map_err(|error| DeliveryError::Transport(error.to_string()))?
                .send()
                .await
                .map_err(|error| DeliveryError::Transport(error.to_string()))?;

            if response.ok() {
                return Ok(());
            }

            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(DeliveryError::Rejected { status, body })
        }
    }

    impl Mailer for EmailJsMailer {
        async fn send(&self, request: &EmailRequest) -> Result<(), DeliveryError> {
            let outcome = self.post(request).await;
            match &outcome {
                Ok(()) => gloo::console::log!("contact message sent"),
                Err(error) => gloo::console::error!("contact message failed:", error.to_string()),
            }
            outcome
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> DeliveryConfig {
        DeliveryConfig {
            service_id: "service_x".to_string(),
            template_id: "template_y".to_string(),
            public_key: "public_z".to_string(),
            recipient_name: "Soheb".to_string(),
            endpoint: EMAILJS_ENDPOINT.to_string(),
        }
    }

    #[test]
    fn request_duplicates_sender_fields_for_the_template() {
        let request = EmailRequest::new(&config(), "Ada", "ada@example.com", "Hi", "Hello there");

        assert_eq!(request.user_id, "public_z");
        assert_eq!(request.template_params.name, "Ada");
        assert_eq!(request.template_params.from_name, "Ada");
        assert_eq!(request.template_params.email, "ada@example.com");
        assert_eq!(request.template_params.from_email, "ada@example.com");
        assert_eq!(request.template_params.to_name, "Soheb");
        assert!(request.is_addressed());
    }

    #[test]
    fn missing_identifiers_leave_request_unaddressed() {
        let mut unconfigured = config();
        unconfigured.public_key.clear();

        let request = EmailRequest::new(&unconfigured, "Ada", "ada@example.com", "Hi", "Hello");
        assert!(!request.is_addressed());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn request_serializes_to_the_service_wire_shape() {
        let request = EmailRequest::new(&config(), "Ada", "ada@example.com", "Hi", "Hello");
        let value = serde_json::to_value(&request).expect("serializable");

        assert_eq!(value["service_id"], "service_x");
        assert_eq!(value["template_id"], "template_y");
        assert_eq!(value["user_id"], "public_z");
        assert_eq!(value["template_params"]["title"], "Hi");
        assert_eq!(value["template_params"]["message"], "Hello");
        assert_eq!(
            value["template_params"]
                .as_object()
                .map(|params| params.len()),
            Some(7)
        );
    }

    #[test]
    fn rejected_error_mentions_status() {
        let error = DeliveryError::Rejected {
            status: 412,
            body: "template not found".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "delivery service rejected the message (412): template not found"
        );
    }
}
