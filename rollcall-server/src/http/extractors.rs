//! Custom Axum extractors

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Form;

use super::error::ApiError;
use crate::models::{NewStudent, StudentForm, ValidationError};

/// Integer student id taken from the `{id}` path segment.
///
/// A segment that isn't an integer names no student, so it is a 404.
pub struct StudentId(pub i64);

impl<S> FromRequestParts<S> for StudentId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound {
                resource: "student",
                id: String::new(),
            })?;

        let id = raw.parse::<i64>().map_err(|_| ApiError::NotFound {
            resource: "student",
            id: raw.clone(),
        })?;

        Ok(Self(id))
    }
}

/// Form-encoded student fields, validated into a [`NewStudent`]
pub struct ValidStudentForm(pub NewStudent);

impl<S> FromRequest<S> for ValidStudentForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(form) = Form::<StudentForm>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!("form rejected: {}", rejection);
                ApiError::Validation(ValidationError::InvalidFormat {
                    field: "body",
                    reason: "expected a form-encoded body",
                })
            })?;

        Ok(Self(NewStudent::try_from(form)?))
    }
}
