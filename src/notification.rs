//! Owner notifications and counterpart confirmations for each lead-capture flow
//!
//! Every value that came from a visitor is HTML-escaped before it lands in an
//! HTML body. None of the submitted fields may carry markup.

mod dispatch;
mod sample_request;
mod subscription;

pub use dispatch::*;
pub use sample_request::*;
pub use subscription::*;

/// Name the business signs its emails with
pub const BUSINESS_NAME: &str = "Livingston Craft";

/// A fully composed email, ready to be handed to the mail transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
}

/// The pair of emails produced by a single submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Internal summary for the business operator
    pub owner: OutgoingEmail,
    /// Acknowledgement sent back to the submitter
    pub confirmation: OutgoingEmail,
}

/// Escape a value for HTML text or a double-quoted attribute
fn escape(value: &str) -> String {
    htmlescape::encode_minimal(value)
}

/// Footer line linking the owner back to the site a submission came from
fn submitted_from_footer(kind: &str, site_url: &str) -> String {
    format!(
        r#"<p style="margin-top: 32px; color: #666; font-size: 14px;">This {kind} was submitted from your <a href="{url}">{BUSINESS_NAME} website</a>.</p>"#,
        url = escape(site_url),
    )
}
