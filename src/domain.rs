mod email_address;
mod sample_request;
mod subscription_request;
mod validation_error;

pub use email_address::*;
pub use sample_request::*;
pub use subscription_request::*;
pub use validation_error::*;
