use std::{error, fmt};

use actix_web::http::StatusCode;
use actix_web::HttpResponse;

/// Provide a representation for any type that implements `Error`
pub fn error_chain_fmt(e: &impl error::Error, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "{e}\n")?;

    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{cause}")?;
        current = cause.source();
    }

    Ok(())
}

/// JSON body returned on success
#[derive(serde::Serialize)]
struct MessageBody<'a> {
    message: &'a str,
}

/// JSON body returned on failure
#[derive(serde::Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

/// Return a 200 with a `{"message": ...}` body
pub fn json_message(message: &str) -> HttpResponse {
    HttpResponse::Ok().json(MessageBody { message })
}

/// Return `status` with an `{"error": ...}` body
///
/// Only ever pass messages that are safe to show to visitors.
pub fn json_error(status: StatusCode, error: &str) -> HttpResponse {
    HttpResponse::build(status).json(ErrorBody { error })
}
