use crate::domain::{EmailAddress, SampleRequest};
use crate::notification::{escape, submitted_from_footer, Notification, OutgoingEmail, BUSINESS_NAME};

/// Compose the emails for a sample request
pub fn sample_request_notification(
    request: &SampleRequest,
    owner: &EmailAddress,
    site_url: &str,
) -> Notification {
    Notification {
        owner: owner_notification(request, owner, site_url),
        confirmation: customer_confirmation(request),
    }
}

/// Table row used in the owner's summary of customer details
fn detail_row(label: &str, value: &str) -> String {
    format!(
        r#"<tr>
  <td style="padding: 8px 0; border-bottom: 1px solid #e3e3e3;"><strong>{label}:</strong></td>
  <td style="padding: 8px 0; border-bottom: 1px solid #e3e3e3;">{value}</td>
</tr>"#,
        value = escape(value),
    )
}

/// Shipping address as an HTML fragment
fn address_html(request: &SampleRequest) -> String {
    format!(
        "{}<br>\n{}, {} {}",
        escape(&request.address),
        escape(&request.city),
        escape(&request.state),
        escape(&request.zip),
    )
}

/// Shipping address as plain text
fn address_text(request: &SampleRequest) -> String {
    format!(
        "{}\n{}, {} {}",
        request.address, request.city, request.state, request.zip
    )
}

fn owner_notification(request: &SampleRequest, owner: &EmailAddress, site_url: &str) -> OutgoingEmail {
    let subject = request.product_name.as_ref().map_or_else(
        || "New Sample Request".to_string(),
        |product| format!("New Sample Request - {product}"),
    );

    let product_html = request
        .product_name
        .as_deref()
        .map(|p| format!("<p><strong>Product:</strong> {}</p>", escape(p)))
        .unwrap_or_default();
    let phone_row = request
        .phone
        .as_deref()
        .map(|p| detail_row("Phone", p))
        .unwrap_or_default();
    let message_html = request
        .message
        .as_deref()
        .map(|m| {
            format!(
                r#"<h3 style="color: #755344; margin-top: 24px;">Additional Notes</h3>
<p style="margin: 8px 0; padding: 12px; background-color: #f9f6f1; border-radius: 8px;">{}</p>"#,
                escape(m)
            )
        })
        .unwrap_or_default();

    let html_body = format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
<h2 style="color: #755344;">New Sample Request</h2>
{product_html}
<h3 style="color: #755344; margin-top: 24px;">Customer Information</h3>
<table style="width: 100%; border-collapse: collapse;">
{name_row}
{email_row}
{phone_row}
</table>
<h3 style="color: #755344; margin-top: 24px;">Shipping Address</h3>
<p style="margin: 8px 0;">{address}</p>
{message_html}
{footer}
</div>"#,
        name_row = detail_row("Name", &request.name),
        email_row = detail_row("Email", &request.email),
        address = address_html(request),
        footer = submitted_from_footer("request", site_url),
    );

    let mut text_body = String::from("New Sample Request\n\n");
    if let Some(product) = &request.product_name {
        text_body.push_str(&format!("Product: {product}\n\n"));
    }
    text_body.push_str(&format!("Name: {}\nEmail: {}\n", request.name, request.email));
    if let Some(phone) = &request.phone {
        text_body.push_str(&format!("Phone: {phone}\n"));
    }
    text_body.push_str(&format!("\nShipping Address:\n{}\n", address_text(request)));
    if let Some(message) = &request.message {
        text_body.push_str(&format!("\nAdditional Notes:\n{message}\n"));
    }
    text_body.push_str(&format!(
        "\nThis request was submitted from your {BUSINESS_NAME} website ({site_url})."
    ));

    OutgoingEmail {
        to: owner.to_string(),
        subject,
        html_body,
        text_body,
    }
}

fn customer_confirmation(request: &SampleRequest) -> OutgoingEmail {
    let of_product_html = request
        .product_name
        .as_deref()
        .map(|p| format!(" of {}", escape(p)))
        .unwrap_or_default();
    let of_product_text = request
        .product_name
        .as_deref()
        .map(|p| format!(" of {p}"))
        .unwrap_or_default();

    let html_body = format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
<h2 style="color: #755344;">Thank You for Your Interest!</h2>
<p>Hi {name},</p>
<p>We've received your request for free samples{of_product_html} and will be shipping them to:</p>
<div style="background-color: #f9f6f1; padding: 16px; border-radius: 8px; margin: 16px 0;">{address}</div>
<p>Your samples should arrive within 5-7 business days. If you have any questions in the meantime, feel free to reply to this email.</p>
<p style="margin-top: 24px;">Best regards,<br><strong>The {BUSINESS_NAME} Team</strong></p>
<hr style="margin: 32px 0; border: none; border-top: 1px solid #e3e3e3;">
<p style="color: #666; font-size: 14px;"><strong>{BUSINESS_NAME}</strong><br>Premium Flooring Solutions<br>Transform Your Space</p>
</div>"#,
        name = escape(&request.name),
        address = address_html(request),
    );

    let text_body = format!(
        "Hi {name},\n\n\
        We've received your request for free samples{of_product_text} and will be shipping them to:\n\n\
        {address}\n\n\
        Your samples should arrive within 5-7 business days. \
        If you have any questions in the meantime, feel free to reply to this email.\n\n\
        Best regards,\nThe {BUSINESS_NAME} Team",
        name = request.name,
        address = address_text(request),
    );

    OutgoingEmail {
        to: request.email.clone(),
        subject: format!("Thank You for Your Sample Request - {BUSINESS_NAME}"),
        html_body,
        text_body,
    }
}
