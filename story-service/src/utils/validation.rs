use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use service_core::error::AppError;
use validator::Validate;

/// JSON extractor that runs `validator` rules after deserializing.
///
/// Unparseable bodies and failed validations are both surfaced as the
/// service's 400 error envelope rather than axum's default rejection.
pub struct ValidatedJson<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + 'static,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|_| AppError::BadRequest(anyhow::anyhow!("Invalid request. Send a valid JSON body.")))?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}
