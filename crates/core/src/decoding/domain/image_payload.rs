use crate::error::DetectionError;

const DATA_URL_PREFIX: &str = "data:image";

/// Strips a `data:image/...;base64,` prefix, splitting on the first comma.
/// Anything else is returned unchanged.
pub fn strip_data_url(payload: &str) -> Result<&str, DetectionError> {
    if !payload.starts_with(DATA_URL_PREFIX) {
        return Ok(payload);
    }
    payload
        .split_once(',')
        .map(|(_, body)| body)
        .ok_or(DetectionError::MalformedDataUrl)
}
