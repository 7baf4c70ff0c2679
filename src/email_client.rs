use std::time;

use anyhow::Context;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::domain::EmailAddress;
use crate::notification::OutgoingEmail;

/// Email client data
pub struct EmailClient {
    http_client: Client,
    endpoint: Url,
    sender: EmailAddress,
    authorization_token: SecretString,
}

/// Request body expected by Postmark's email API
#[derive(serde::Serialize)]
#[serde(rename_all = "PascalCase")]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html_body: &'a str,
    text_body: &'a str,
}

impl EmailClient {
    /// Build an email client for the transactional-mail API at `base_url`
    pub fn new(
        base_url: &Url,
        sender: EmailAddress,
        authorization_token: SecretString,
        timeout: time::Duration,
    ) -> anyhow::Result<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build the HTTP client for the email API")?;
        let endpoint = base_url
            .join("/email")
            .context("Failed to build the email API endpoint")?;
        Ok(Self {
            http_client,
            endpoint,
            sender,
            authorization_token,
        })
    }

    /// Send an email using Postmark's REST API
    /// <https://postmarkapp.com/developer/user-guide/send-email-with-api>
    ///
    /// Resolves once the API has accepted the message for delivery.
    #[tracing::instrument(
        name = "Sending email",
        skip(self, email),
        fields(recipient = %email.to, subject = %email.subject)
    )]
    pub async fn send_email(&self, email: &OutgoingEmail) -> Result<(), reqwest::Error> {
        let request_body = SendEmailRequest {
            from: self.sender.as_ref(),
            to: &email.to,
            subject: &email.subject,
            html_body: &email.html_body,
            text_body: &email.text_body,
        };
        self.http_client
            .post(self.endpoint.clone())
            .header(
                "X-Postmark-Server-Token",
                self.authorization_token.expose_secret(),
            )
            .json(&request_body)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
