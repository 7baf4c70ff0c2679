mod health_check;
mod helpers;
mod request_sample;
mod subscribe;

pub use health_check::*;
pub use request_sample::*;
pub use subscribe::*;
