use std::time::Instant;

use crate::decoding::domain::image_decoder::ImageDecoder;
use crate::detection::domain::face_detector::FaceDetector;
use crate::detection::domain::face_location::FaceLocation;
use crate::error::DetectionError;
use crate::pipeline::detection_report::DetectionReport;

/// Builds the detector on demand, after the payload has decoded.
///
/// Loading is deferred so that payload errors are reported before any
/// cascade lookup happens.
pub type DetectorLoader = Box<dyn FnMut() -> Result<Box<dyn FaceDetector>, DetectionError>>;

/// Single-image pipeline: decode → load detector → detect → remap.
pub struct DetectFacesUseCase {
    decoder: Box<dyn ImageDecoder>,
    load_detector: DetectorLoader,
}

impl DetectFacesUseCase {
    pub fn new(decoder: Box<dyn ImageDecoder>, load_detector: DetectorLoader) -> Self {
        Self {
            decoder,
            load_detector,
        }
    }

    /// Runs the pipeline, returning face boxes in detector order.
    pub fn execute(&mut self, payload: &str) -> Result<Vec<FaceLocation>, DetectionError> {
        let started = Instant::now();
        let frame = self.decoder.decode(payload)?;
        let decoded_at = Instant::now();

        let mut detector = (self.load_detector)()?;
        let loaded_at = Instant::now();

        let regions = detector.detect(&frame)?;
        let locations: Vec<FaceLocation> = regions
            .iter()
            .map(|r| FaceLocation::from_region(r, frame.width(), frame.height()))
            .collect();

        log::debug!(
            "decode {:.1}ms, load {:.1}ms, detect {:.1}ms",
            ms(decoded_at - started),
            ms(loaded_at - decoded_at),
            ms(loaded_at.elapsed())
        );
        log::info!(
            "{} face(s) in {}x{} image",
            locations.len(),
            frame.width(),
            frame.height()
        );
        Ok(locations)
    }

    /// Runs the pipeline and folds any error into a failure report.
    pub fn report(&mut self, payload: &str) -> DetectionReport {
        match self.execute(payload) {
            Ok(locations) => DetectionReport::found(locations),
            Err(e) => {
                log::warn!("Face detection failed: {e}");
                DetectionReport::failed(e)
            }
        }
    }
}

fn ms(d: std::time::Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}
