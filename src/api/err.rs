use std::fmt::{self, Display};

use actix_web::{
    error::BlockingError,
    http::{header::ContentType, StatusCode},
    HttpResponse, ResponseError,
};

/// Error reason
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reason {
    InvalidArgument,
    NotFound,
    Store,
    Render,
    Internal,
}

impl Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Reason::InvalidArgument => "INVALID_ARGUMENT",
            Reason::NotFound => "NOT_FOUND",
            Reason::Store => "STORE",
            Reason::Render => "RENDER",
            Reason::Internal => "INTERNAL",
        };
        write!(f, "ERR_{name}")
    }
}

/// An Error
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct Error {
    reason: Reason,
    message: String,
}

impl Error {
    /// Create a new error
    pub fn new(reason: Reason, message: String) -> Self {
        Error { reason, message }
    }

    pub fn reason(&self) -> Reason {
        self.reason
    }
}

impl From<diesel::result::Error> for Error {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => Error::new(Reason::NotFound, err.to_string()),
            err => Error::new(Reason::Store, err.to_string()),
        }
    }
}

impl From<r2d2::Error> for Error {
    fn from(err: r2d2::Error) -> Self {
        Error::new(Reason::Store, err.to_string())
    }
}

impl From<tera::Error> for Error {
    fn from(err: tera::Error) -> Self {
        // tera keeps the useful part of the message in the source chain
        let mut message = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = std::error::Error::source(cause);
        }
        Error::new(Reason::Render, message)
    }
}

impl From<BlockingError> for Error {
    fn from(err: BlockingError) -> Self {
        Error::new(Reason::Internal, err.to_string())
    }
}

// Every failure is flattened into the same plain-text 500 page
impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        log::error!(target: "error", "{}: {}", self.reason(), self.message);
        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body(format!("Server encountered an error: {}", self.message))
    }
}
