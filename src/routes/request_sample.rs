use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use anyhow::Context;
use tracing::field::display;
use tracing::Span;

use crate::domain::{SampleRequest, SampleRequestBody, ValidationError};
use crate::email_client::EmailClient;
use crate::notification::sample_request_notification;
use crate::routes::helpers::{error_chain_fmt, json_error, json_message};
use crate::startup::{ApplicationBaseUrl, OwnerEmail};

/// Sample request error
#[derive(thiserror::Error)]
pub enum RequestSampleError {
    #[error("Missing required fields")]
    MissingFields(#[source] ValidationError),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl fmt::Debug for RequestSampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for RequestSampleError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingFields(_) => StatusCode::BAD_REQUEST,
            Self::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            Self::MissingFields(_) => "Missing required fields",
            Self::UnexpectedError(_) => "Failed to submit sample request",
        };
        json_error(self.status_code(), error)
    }
}

/// Sample request handler
///
/// Notifies the owner, then confirms to the customer. A failure of either
/// send is reported as a failed request, even when the owner was notified.
#[tracing::instrument(
    name = "Requesting flooring samples",
    skip(body, email_client, base_url, owner),
    fields(customer_email = tracing::field::Empty, product_name = tracing::field::Empty)
)]
pub async fn request_sample(
    body: web::Bytes,
    email_client: web::Data<EmailClient>,
    base_url: web::Data<ApplicationBaseUrl>,
    owner: web::Data<OwnerEmail>,
) -> Result<HttpResponse, RequestSampleError> {
    // Parse and validate the submitted form
    let body: SampleRequestBody =
        serde_json::from_slice(&body).context("Failed to parse the sample request body")?;
    let sample_request =
        SampleRequest::try_from(body).map_err(RequestSampleError::MissingFields)?;
    let span = Span::current();
    span.record("customer_email", display(&sample_request.email));
    if let Some(product_name) = &sample_request.product_name {
        span.record("product_name", display(product_name));
    }

    // Compose and send both emails
    sample_request_notification(&sample_request, &owner.0, &base_url.0)
        .dispatch(&email_client)
        .await
        .context("Failed to send the sample request emails")?;

    Ok(json_message("Sample request submitted successfully"))
}
