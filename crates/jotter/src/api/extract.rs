//! Request body extraction for note creation.

use axum::async_trait;
use axum::extract::{FromRequest, Request};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};

use crate::note::Fields;

/// Note fields taken from either a JSON or an urlencoded form body.
///
/// Form bodies are flat: every value arrives as a string. Anything that is
/// not declared as a form goes through the JSON extractor, so a missing or
/// foreign content type is rejected with `415`.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteFields(pub Fields);

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"))
}

#[async_trait]
impl<S> FromRequest<S> for NoteFields
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(&req) {
            let Form(fields) = Form::<Fields>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            Ok(Self(fields))
        } else {
            let Json(fields) = Json::<Fields>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            Ok(Self(fields))
        }
    }
}
