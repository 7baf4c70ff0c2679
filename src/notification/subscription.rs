use chrono::{DateTime, Utc};

use crate::domain::{EmailAddress, SubscriptionRequest};
use crate::notification::{escape, submitted_from_footer, Notification, OutgoingEmail, BUSINESS_NAME};

/// Things a subscriber can expect from the newsletter
const NEWSLETTER_PERKS: [&str; 4] = [
    "Exclusive offers and promotions",
    "New product launches",
    "Design inspiration and flooring tips",
    "Expert advice from our team",
];

/// Compose the emails for a newsletter subscription
pub fn subscription_notification(
    request: &SubscriptionRequest,
    owner: &EmailAddress,
    site_url: &str,
    subscribed_at: DateTime<Utc>,
) -> Notification {
    Notification {
        owner: owner_notification(request, owner, site_url, subscribed_at),
        confirmation: subscriber_welcome(request),
    }
}

fn owner_notification(
    request: &SubscriptionRequest,
    owner: &EmailAddress,
    site_url: &str,
    subscribed_at: DateTime<Utc>,
) -> OutgoingEmail {
    // e.g. "Thursday, October 15, 2026 at 03:04 PM UTC"
    let subscribed_on = subscribed_at.format("%A, %B %-d, %Y at %I:%M %p UTC");

    let html_body = format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
<h2 style="color: #755344;">New Newsletter Subscription</h2>
<div style="background-color: #f9f6f1; padding: 16px; border-radius: 8px; margin: 16px 0;">
<p style="margin: 0; font-size: 16px;"><strong>Email:</strong> {email}</p>
</div>
<p style="color: #666; font-size: 14px; margin-top: 24px;">Subscribed on: {subscribed_on}</p>
<hr style="margin: 24px 0; border: none; border-top: 1px solid #e3e3e3;">
{footer}
</div>"#,
        email = escape(request.email.as_ref()),
        footer = submitted_from_footer("subscription", site_url),
    );
    let text_body = format!(
        "New Newsletter Subscription\n\n\
        Email: {email}\n\
        Subscribed on: {subscribed_on}\n\n\
        This subscription was submitted from your {BUSINESS_NAME} website ({site_url}).",
        email = request.email,
    );

    OutgoingEmail {
        to: owner.to_string(),
        subject: format!("New Newsletter Subscription - {BUSINESS_NAME}"),
        html_body,
        text_body,
    }
}

fn subscriber_welcome(request: &SubscriptionRequest) -> OutgoingEmail {
    let perks_html: String = NEWSLETTER_PERKS
        .iter()
        .map(|perk| format!("<li>{perk}</li>"))
        .collect();
    let perks_text: String = NEWSLETTER_PERKS
        .iter()
        .map(|perk| format!("- {perk}\n"))
        .collect();

    let html_body = format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
<div style="background: linear-gradient(135deg, #755344 0%, #513c33 100%); padding: 40px 20px; text-align: center; border-radius: 8px 8px 0 0;">
<h1 style="color: #ffffff; margin: 0; font-size: 28px; font-weight: 300;">Welcome to {BUSINESS_NAME}</h1>
</div>
<div style="padding: 32px 20px;">
<p style="font-size: 18px; color: #333; margin-bottom: 20px;">Thank you for subscribing!</p>
<p style="color: #666; line-height: 1.6;">You're now part of the {BUSINESS_NAME} community. Get ready to receive:</p>
<ul style="color: #666; line-height: 1.8; margin: 20px 0;">{perks_html}</ul>
<div style="background-color: #f9f6f1; padding: 20px; border-radius: 8px; margin: 24px 0;">
<p style="margin: 0; color: #755344; font-weight: 600;">Pro Tip: Add us to your contacts to ensure you never miss our emails!</p>
</div>
<p style="color: #666; line-height: 1.6;">Questions? Simply reply to this email - we're here to help.</p>
<p style="margin-top: 32px; color: #666;">Best regards,<br><strong style="color: #755344;">The {BUSINESS_NAME} Team</strong></p>
</div>
<div style="background-color: #f9f6f1; padding: 20px; text-align: center; border-radius: 0 0 8px 8px;">
<p style="color: #666; font-size: 14px; margin: 0;"><strong>{BUSINESS_NAME}</strong><br>Premium Flooring Solutions</p>
<p style="color: #999; font-size: 12px; margin: 16px 0 0 0;">You're receiving this because you subscribed to our newsletter.<br>Don't want these emails? You can unsubscribe at any time.</p>
</div>
</div>"#
    );
    let text_body = format!(
        "Welcome to {BUSINESS_NAME}\n\n\
        Thank you for subscribing!\n\n\
        You're now part of the {BUSINESS_NAME} community. Get ready to receive:\n\
        {perks_text}\n\
        Questions? Simply reply to this email - we're here to help.\n\n\
        Best regards,\nThe {BUSINESS_NAME} Team"
    );

    OutgoingEmail {
        to: request.email.to_string(),
        subject: format!("Welcome to {BUSINESS_NAME} Newsletter!"),
        html_body,
        text_body,
    }
}
