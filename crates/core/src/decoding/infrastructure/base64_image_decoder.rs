use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;

use crate::decoding::domain::image_decoder::ImageDecoder;
use crate::decoding::domain::image_payload::strip_data_url;
use crate::error::DetectionError;
use crate::shared::frame::Frame;

/// Standard alphabet; trailing `=` padding may be present or not.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decodes base64 (or `data:image/...;base64,` URLs) into RGB frames.
///
/// The image format is sniffed from the bytes; palette, grayscale, alpha
/// and 16-bit inputs are all normalized to 8-bit RGB.
#[derive(Default)]
pub struct Base64ImageDecoder;

impl Base64ImageDecoder {
    pub fn new() -> Self {
        Self
    }

    fn decode_bytes(&self, payload: &str) -> Result<Vec<u8>, DetectionError> {
        let body = strip_data_url(payload)?;
        // Line-wrapped payloads (MIME style) are common; whitespace carries no data
        let compact: String = body.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        PAYLOAD_ENGINE
            .decode(compact.as_bytes())
            .map_err(DetectionError::InvalidBase64)
    }
}

impl ImageDecoder for Base64ImageDecoder {
    fn decode(&self, payload: &str) -> Result<Frame, DetectionError> {
        let bytes = self.decode_bytes(payload)?;
        let rgb = image::load_from_memory(&bytes)
            .map_err(DetectionError::ImageDecode)?
            .to_rgb8();
        let (width, height) = rgb.dimensions();
        if width == 0 || height == 0 {
            return Err(DetectionError::EmptyImage { width, height });
        }
        log::debug!("Decoded {} payload bytes into {width}x{height} image", bytes.len());
        Ok(Frame::new(rgb.into_raw(), width, height, 3))
    }
}
