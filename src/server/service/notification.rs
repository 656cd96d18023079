//! Transactional email dispatch through the Brevo HTTP API.
//!
//! Without an API key the sender only logs what it would have sent, which keeps local setups
//! and tests free of outbound traffic.

use serde_json::json;

use crate::server::error::{internal::InternalError, AppError};

const BREVO_SEND_URL: &str = "https://api.brevo.com/v3/smtp/email";
const SENDER_NAME: &str = "Hoterra";

/// A single outgoing HTML email.
#[derive(Debug, Clone)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

#[derive(Clone)]
pub struct EmailSender {
    http_client: reqwest::Client,
    api_key: Option<String>,
    from: String,
    endpoint: String,
}

impl EmailSender {
    pub fn new(http_client: reqwest::Client, api_key: Option<String>, from: String) -> Self {
        Self {
            http_client,
            api_key,
            from,
            endpoint: BREVO_SEND_URL.to_string(),
        }
    }

    /// Points the sender at a different API endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Sends the email, or logs it when no API key is configured.
    ///
    /// # Returns
    /// - `Ok(())` - Accepted by the API, or logged
    /// - `Err(AppError::ReqwestErr)` - Request could not be made
    /// - `Err(AppError::InternalErr(EmailRejected))` - API answered with an error status
    pub async fn send(&self, email: OutgoingEmail) -> Result<(), AppError> {
        let Some(api_key) = &self.api_key else {
            tracing::info!(
                to = %email.to,
                subject = %email.subject,
                "Email delivery not configured, message logged only"
            );
            return Ok(());
        };

        let response = self
            .http_client
            .post(&self.endpoint)
            .header("api-key", api_key)
            .json(&json!({
                "sender": { "name": SENDER_NAME, "email": self.from },
                "to": [{ "email": email.to }],
                "subject": email.subject,
                "htmlContent": email.html,
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InternalError::EmailRejected {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        tracing::info!(to = %email.to, "Email sent");

        Ok(())
    }
}

/// The invitation email carrying the registration link.
pub fn invitation_email(to: &str, role: &str, registration_url: &str) -> OutgoingEmail {
    OutgoingEmail {
        to: to.to_string(),
        subject: "You've been invited to join Hoterra".to_string(),
        html: format!(
            r#"<html>
  <body style="font-family: Arial, sans-serif; line-height: 1.6;">
    <h2>Welcome to Hoterra!</h2>
    <p>You have been invited to join <strong>Hoterra</strong> as <strong>{role}</strong>.</p>
    <p><a href="{registration_url}">Register now</a></p>
    <p>This invitation expires in 7 days.</p>
  </body>
</html>"#
        ),
    }
}
