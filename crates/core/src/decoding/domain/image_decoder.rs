use crate::error::DetectionError;
use crate::shared::frame::Frame;

/// Turns a textual image payload into an RGB frame.
pub trait ImageDecoder: Send {
    fn decode(&self, payload: &str) -> Result<Frame, DetectionError>;
}
