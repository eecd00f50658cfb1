use actix_web::{HttpResponse, ResponseError};
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Db(rusqlite::Error),
    Pool(r2d2::Error),
    Session(String),
    Hash(String),
    /// Missing or malformed input, caught before any mutation.
    Validation(String),
    /// Role, date, or lifecycle-state precondition failed.
    PermissionDenied(String),
    /// A storage-layer uniqueness constraint rejected the write.
    Duplicate(&'static str),
    NotFound,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Db(e) => write!(f, "Database error: {e}"),
            AppError::Pool(e) => write!(f, "Pool error: {e}"),
            AppError::Session(e) => write!(f, "Session error: {e}"),
            AppError::Hash(e) => write!(f, "Hash error: {e}"),
            AppError::Validation(msg) => write!(f, "{msg}"),
            AppError::PermissionDenied(msg) => write!(f, "{msg}"),
            AppError::Duplicate(what) => write!(f, "A {what} already exists"),
            AppError::NotFound => write!(f, "Not found"),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let body = |msg: String| serde_json::json!({ "error": msg });
        match self {
            AppError::Validation(_) => HttpResponse::BadRequest().json(body(self.to_string())),
            AppError::PermissionDenied(_) => HttpResponse::Forbidden().json(body(self.to_string())),
            AppError::Duplicate(_) => HttpResponse::Conflict().json(body(self.to_string())),
            AppError::NotFound => HttpResponse::NotFound().json(body("Not found".into())),
            _ => {
                log::error!("{self}");
                HttpResponse::InternalServerError()
                    .json(body("Internal Server Error".into()))
            }
        }
    }
}

impl From<rusqlite::Error> for AppError {
    fn from(e: rusqlite::Error) -> Self {
        AppError::Db(e)
    }
}

impl From<r2d2::Error> for AppError {
    fn from(e: r2d2::Error) -> Self {
        AppError::Pool(e)
    }
}

/// Maps a constraint violation from an INSERT to `Duplicate(what)`,
/// leaving every other database error untouched.
pub fn duplicate_on_constraint(e: rusqlite::Error, what: &'static str) -> AppError {
    match &e {
        rusqlite::Error::SqliteFailure(err, _)
            if err.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            AppError::Duplicate(what)
        }
        _ => AppError::Db(e),
    }
}
