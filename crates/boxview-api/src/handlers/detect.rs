//! Upload-and-detect handler.
//!
//! One round trip per request: decode the uploaded file, re-encode it to
//! JPEG, base64 it over to the model service, and hand the annotated image
//! back to the page. Nothing is stored; repeated clicks repeat the whole
//! flow independently.

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;
use tracing::debug;

use boxview_models::{codec, UploadFormat, ACCEPTED_EXTENSIONS};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Detection response: the annotated image, base64-encoded.
#[derive(Serialize)]
pub struct DetectResponse {
    pub image: String,
    pub model_id: String,
}

/// Run object detection on an uploaded image.
pub async fn detect(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Json<DetectResponse>> {
    let mut upload = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Malformed upload: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request(format!("Could not read upload: {e}")))?;

        upload = Some((file_name, content_type, data));
        break;
    }

    let (file_name, content_type, data) =
        upload.ok_or_else(|| ApiError::bad_request("No file field in upload"))?;

    let format = file_name
        .as_deref()
        .and_then(UploadFormat::from_file_name)
        .or_else(|| content_type.as_deref().and_then(UploadFormat::from_mime_type))
        .ok_or_else(|| {
            ApiError::bad_request(format!(
                "Unsupported file type; accepted extensions: {}",
                ACCEPTED_EXTENSIONS.join(", ")
            ))
        })?;

    debug!(
        format = %format,
        size = data.len(),
        "Received upload"
    );

    // Container conversion for transport: whatever came in goes out as JPEG.
    let input_data = codec::transport_payload(&data)
        .map_err(|e| ApiError::bad_request(format!("Could not decode image: {e}")))?;

    let annotated = state.predict.predict(input_data).await?;

    // Fail loudly on an undecodable result rather than handing the page
    // garbage to render.
    codec::decode_base64(&annotated)
        .map_err(|e| ApiError::Predict(format!("annotated image is not valid base64: {e}")))?;

    Ok(Json(DetectResponse {
        image: annotated,
        model_id: state.predict.model_id().to_string(),
    }))
}
