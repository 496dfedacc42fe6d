//! Multipart image upload extractor
//!
//! Pulls a single file out of a `multipart/form-data` body. The part must
//! be named `image` and carry a filename; validation of the extension and
//! image contents happens in the service layer.

use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Request},
};

use crate::response::ApiError;

/// One uploaded image file
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// Filename as sent by the client
    pub filename: String,
    /// Raw file bytes
    pub data: Vec<u8>,
}

#[async_trait]
impl<S> FromRequest<S> for ImageUpload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| ApiError::invalid_body(e.to_string()))?;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::invalid_body(e.to_string()))?
        {
            if field.name() != Some("image") {
                continue;
            }

            let filename = field
                .file_name()
                .ok_or_else(|| ApiError::invalid_body("image part is missing a filename"))?
                .to_string();

            let data = field
                .bytes()
                .await
                .map_err(|e| ApiError::invalid_body(e.to_string()))?
                .to_vec();

            if data.is_empty() {
                return Err(ApiError::invalid_body("image part is empty"));
            }

            return Ok(ImageUpload { filename, data });
        }

        Err(ApiError::invalid_body("missing multipart part named 'image'"))
    }
}
