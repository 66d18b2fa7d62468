use thiserror::Error;

use crate::detection::infrastructure::cascade_resolver::CascadeResolveError;
use crate::detection::infrastructure::opencv_cascade_detector::CascadeLoadError;

/// Everything that can go wrong between receiving a payload and
/// producing face locations.
#[derive(Error, Debug)]
pub enum DetectionError {
    #[error("data URL has no comma before the payload")]
    MalformedDataUrl,

    #[error("invalid base64 payload: {0}")]
    InvalidBase64(#[source] base64::DecodeError),

    #[error("cannot decode image: {0}")]
    ImageDecode(#[source] image::ImageError),

    #[error("decoded image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error(transparent)]
    CascadeNotFound(#[from] CascadeResolveError),

    #[error(transparent)]
    CascadeLoad(#[from] CascadeLoadError),

    #[error("unsupported pixel layout: {0} channels")]
    UnsupportedChannels(u8),

    #[error("OpenCV error: {0}")]
    OpenCv(#[from] opencv::Error),

    #[error("invalid detector configuration: {0}")]
    InvalidConfig(String),
}
