use std::fmt::Display;

use serde::Serialize;

use crate::detection::domain::face_location::FaceLocation;

pub const NO_FACES_MESSAGE: &str = "얼굴이 감지되지 않았습니다.";
pub const FAILURE_MESSAGE: &str = "얼굴 인식 중 오류가 발생했습니다.";
pub const USAGE_MESSAGE: &str = "이미지 데이터가 필요합니다.";
pub const USAGE_ERROR: &str = "Image data argument required";

/// The one JSON object printed per invocation.
///
/// `faces_detected` always equals `face_locations.len()`; failures carry
/// zero faces and an `error` string.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DetectionReport {
    pub success: bool,
    pub faces_detected: usize,
    pub face_locations: Vec<FaceLocation>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DetectionReport {
    pub fn found(face_locations: Vec<FaceLocation>) -> Self {
        Self {
            success: true,
            faces_detected: face_locations.len(),
            message: count_message(face_locations.len()),
            face_locations,
            error: None,
        }
    }

    /// Processing failure: bad payload, missing cascade, detector error.
    pub fn failed(error: impl Display) -> Self {
        Self::failure(FAILURE_MESSAGE, error.to_string())
    }

    /// Wrong command-line usage.
    pub fn usage(error: impl Display) -> Self {
        Self::failure(USAGE_MESSAGE, error.to_string())
    }

    fn failure(message: &str, error: String) -> Self {
        Self {
            success: false,
            faces_detected: 0,
            face_locations: Vec::new(),
            message: message.to_string(),
            error: Some(error),
        }
    }

    /// Single-line JSON; non-ASCII text is emitted as UTF-8, not escaped.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

fn count_message(count: usize) -> String {
    if count > 0 {
        format!("{count}개의 얼굴이 감지되었습니다.")
    } else {
        NO_FACES_MESSAGE.to_string()
    }
}
