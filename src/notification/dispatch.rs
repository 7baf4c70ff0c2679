use crate::email_client::EmailClient;
use crate::notification::Notification;

/// Dispatch failure, telling apart what had already gone out
///
/// Email cannot be unsent, so a failed confirmation after a delivered owner
/// notification is reported as such rather than rolled back.
#[derive(thiserror::Error, Debug)]
pub enum DispatchError {
    #[error("Failed to send the owner notification, no email was sent")]
    OwnerNotification(#[source] reqwest::Error),
    #[error("Failed to send the confirmation to {recipient}, the owner notification was already sent")]
    Confirmation {
        recipient: String,
        #[source]
        source: reqwest::Error,
    },
}

impl DispatchError {
    /// Whether the owner notification reached the mail transport before the failure
    pub const fn owner_notified(&self) -> bool {
        matches!(self, Self::Confirmation { .. })
    }
}

impl Notification {
    /// Send the owner notification, then the confirmation
    ///
    /// Sends are strictly sequential and nothing is retried: the first
    /// failure ends the dispatch.
    #[tracing::instrument(
        name = "Dispatching notification emails",
        skip(self, email_client),
        fields(recipient = %self.confirmation.to)
    )]
    pub async fn dispatch(&self, email_client: &EmailClient) -> Result<(), DispatchError> {
        email_client
            .send_email(&self.owner)
            .await
            .map_err(DispatchError::OwnerNotification)?;

        if let Err(source) = email_client.send_email(&self.confirmation).await {
            let e = DispatchError::Confirmation {
                recipient: self.confirmation.to.clone(),
                source,
            };
            tracing::warn!(
                owner_notified = e.owner_notified(),
                "Partial delivery: {e}"
            );
            return Err(e);
        }

        Ok(())
    }
}
