//! Haar cascade face detection through OpenCV's `CascadeClassifier`.
//!
//! The frame is converted to grayscale with `cvtColor` and handed to
//! `detectMultiScale`; window scanning, variance normalization and
//! neighbour grouping all happen inside OpenCV.
use std::path::{Path, PathBuf};
use std::time::Instant;

use opencv::core::{Mat, Rect, Size, Vector};
use opencv::imgproc;
use opencv::objdetect::CascadeClassifier;
use opencv::prelude::*;
use thiserror::Error;

use crate::detection::domain::detector_config::DetectorConfig;
use crate::detection::domain::face_detector::FaceDetector;
use crate::error::DetectionError;
use crate::shared::frame::Frame;
use crate::shared::region::Region;

use super::cascade_resolver;

#[derive(Error, Debug)]
pub enum CascadeLoadError {
    #[error("cascade path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),
    #[error("failed to load cascade {}: {source}", .path.display())]
    OpenCv {
        path: PathBuf,
        #[source]
        source: opencv::Error,
    },
    #[error("cascade {} is empty or not a cascade classifier", .0.display())]
    Empty(PathBuf),
}

pub struct OpenCvCascadeDetector {
    classifier: CascadeClassifier,
    config: DetectorConfig,
}

impl OpenCvCascadeDetector {
    pub fn load(path: &Path, config: DetectorConfig) -> Result<Self, DetectionError> {
        config.validate()?;
        let classifier = load_classifier(path)?;
        Ok(Self { classifier, config })
    }

    /// Resolve the cascade file from `candidates` (first existing wins)
    /// and load it.
    pub fn from_candidates(
        candidates: &[PathBuf],
        config: DetectorConfig,
    ) -> Result<Self, DetectionError> {
        let path = cascade_resolver::resolve(candidates)?;
        Self::load(&path, config)
    }
}

impl FaceDetector for OpenCvCascadeDetector {
    fn detect(&mut self, frame: &Frame) -> Result<Vec<Region>, DetectionError> {
        let started = Instant::now();
        let gray = to_gray(frame)?;

        let mut faces = Vector::<Rect>::new();
        self.classifier.detect_multi_scale(
            &gray,
            &mut faces,
            self.config.scale_factor,
            to_i32(self.config.min_neighbors),
            0,
            to_size(self.config.min_size),
            // 0x0 means "up to the image size"
            self.config.max_size.map_or_else(Size::default, to_size),
        )?;

        let regions: Vec<Region> = faces
            .iter()
            .map(|r| Region::new(r.x, r.y, r.width, r.height))
            .collect();
        log::debug!(
            "Cascade detection on {}x{}: {} faces in {:.1}ms",
            frame.width(),
            frame.height(),
            regions.len(),
            started.elapsed().as_secs_f64() * 1000.0
        );
        Ok(regions)
    }
}

fn load_classifier(path: &Path) -> Result<CascadeClassifier, CascadeLoadError> {
    let name = path
        .to_str()
        .ok_or_else(|| CascadeLoadError::NonUtf8Path(path.to_path_buf()))?;
    let opencv_err = |source| CascadeLoadError::OpenCv {
        path: path.to_path_buf(),
        source,
    };

    let classifier = CascadeClassifier::new(name).map_err(opencv_err)?;
    if classifier.empty().map_err(opencv_err)? {
        return Err(CascadeLoadError::Empty(path.to_path_buf()));
    }
    log::debug!("Loaded cascade {}", path.display());
    Ok(classifier)
}

/// Wraps the frame bytes without copying, then converts to one channel.
fn to_gray(frame: &Frame) -> Result<Mat, DetectionError> {
    let code = match frame.channels() {
        1 => None,
        3 => Some(imgproc::COLOR_RGB2GRAY),
        4 => Some(imgproc::COLOR_RGBA2GRAY),
        n => return Err(DetectionError::UnsupportedChannels(n)),
    };

    let flat = Mat::from_slice(frame.data())?;
    let pixels = flat.reshape(frame.channels() as i32, frame.height() as i32)?;
    let mut gray = Mat::default();
    match code {
        Some(code) => imgproc::cvt_color_def(&*pixels, &mut gray, code)?,
        None => pixels.copy_to(&mut gray)?,
    }
    Ok(gray)
}

fn to_size((width, height): (u32, u32)) -> Size {
    Size::new(to_i32(width), to_i32(height))
}

fn to_i32(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}
