use serde_json::Value;

use crate::domain::validation_error::required;
use crate::domain::{EmailAddress, ValidationError};

/// Untyped newsletter subscription body
#[derive(Debug, Default, serde::Deserialize)]
pub struct SubscriptionRequestBody {
    pub email: Option<Value>,
}

/// Validated newsletter opt-in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionRequest {
    pub email: EmailAddress,
}

impl TryFrom<SubscriptionRequestBody> for SubscriptionRequest {
    type Error = ValidationError;

    fn try_from(value: SubscriptionRequestBody) -> Result<Self, Self::Error> {
        let email = required(value.email, "email")?;
        let email = EmailAddress::parse(email).map_err(|reason| ValidationError::InvalidFormat {
            field: "email",
            reason,
        })?;
        Ok(Self { email })
    }
}
