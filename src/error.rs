//! Error pages for the HTML routes

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

/// Errors a page handler can end with
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Page not found")]
    NotFound,

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// The server's own data is unusable, e.g. a catalog without tiers
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Template(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text shown to visitors; internal details stay in the log
    fn public_message(&self) -> &'static str {
        match self {
            AppError::NotFound => "We couldn't find that page.",
            AppError::Template(_) | AppError::Internal(_) => {
                "Something went wrong on our side. Please try again or message us on WhatsApp."
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        }

        let html = format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>{code} - Hamro Vacation</title></head>
<body style="font-family: sans-serif; text-align: center; padding: 50px;">
    <h1>{code}</h1>
    <p>{message}</p>
    <a href="/">Back to Hamro Vacation</a>
</body>
</html>"#,
            code = status.as_u16(),
            message = self.public_message(),
        );

        (status, Html(html)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
