use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use anyhow::Context;
use chrono::Utc;
use tracing::field::display;
use tracing::Span;

use crate::domain::{SubscriptionRequest, SubscriptionRequestBody, ValidationError};
use crate::email_client::EmailClient;
use crate::notification::subscription_notification;
use crate::routes::helpers::{error_chain_fmt, json_error, json_message};
use crate::startup::{ApplicationBaseUrl, OwnerEmail};

/// Subscription error
#[derive(thiserror::Error)]
pub enum SubscribeError {
    #[error("Email is required")]
    MissingEmail,
    #[error("Invalid email format")]
    InvalidEmail(#[source] ValidationError),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl From<ValidationError> for SubscribeError {
    fn from(e: ValidationError) -> Self {
        match e {
            ValidationError::MissingField(_) => Self::MissingEmail,
            ValidationError::InvalidFormat { .. } => Self::InvalidEmail(e),
        }
    }
}

impl fmt::Debug for SubscribeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for SubscribeError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingEmail | Self::InvalidEmail(_) => StatusCode::BAD_REQUEST,
            Self::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            Self::MissingEmail => "Email is required",
            Self::InvalidEmail(_) => "Invalid email format",
            Self::UnexpectedError(_) => "Failed to process subscription",
        };
        json_error(self.status_code(), error)
    }
}

/// Newsletter subscription handler
#[tracing::instrument(
    name = "Adding a new newsletter subscriber",
    skip(body, email_client, base_url, owner),
    fields(subscriber_email = tracing::field::Empty)
)]
pub async fn subscribe(
    body: web::Bytes,
    email_client: web::Data<EmailClient>,
    base_url: web::Data<ApplicationBaseUrl>,
    owner: web::Data<OwnerEmail>,
) -> Result<HttpResponse, SubscribeError> {
    // Parse and validate the submitted form
    let body: SubscriptionRequestBody =
        serde_json::from_slice(&body).context("Failed to parse the subscription body")?;
    let subscription = SubscriptionRequest::try_from(body)?;
    Span::current().record("subscriber_email", display(&subscription.email));

    // Compose and send both emails
    subscription_notification(&subscription, &owner.0, &base_url.0, Utc::now())
        .dispatch(&email_client)
        .await
        .context("Failed to send the subscription emails")?;

    Ok(json_message("Subscription successful"))
}
