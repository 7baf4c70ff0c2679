use serde_json::Value;

use crate::domain::validation_error::{optional, required};
use crate::domain::ValidationError;

/// Untyped sample request body as posted by the site's sample request form
#[derive(Debug, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleRequestBody {
    pub name: Option<Value>,
    pub email: Option<Value>,
    pub phone: Option<Value>,
    pub address: Option<Value>,
    pub city: Option<Value>,
    pub state: Option<Value>,
    pub zip: Option<Value>,
    pub message: Option<Value>,
    pub product_name: Option<Value>,
}

/// Validated request for flooring samples to be shipped to a customer
///
/// Values are kept exactly as submitted: the email is not checked for
/// format and nothing is trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub message: Option<String>,
    pub product_name: Option<String>,
}

impl TryFrom<SampleRequestBody> for SampleRequest {
    type Error = ValidationError;

    fn try_from(value: SampleRequestBody) -> Result<Self, Self::Error> {
        Ok(Self {
            name: required(value.name, "name")?,
            email: required(value.email, "email")?,
            phone: optional(value.phone),
            address: required(value.address, "address")?,
            city: required(value.city, "city")?,
            state: required(value.state, "state")?,
            zip: required(value.zip, "zip")?,
            message: optional(value.message),
            product_name: optional(value.product_name),
        })
    }
}
