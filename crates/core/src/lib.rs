//! Face detection over base64-encoded still images.
//!
//! The pipeline decodes a payload into a [`shared::frame::Frame`], runs
//! OpenCV's Haar cascade classifier over it and reports `(top, right, bottom, left)`
//! boxes as a [`pipeline::detection_report::DetectionReport`].
pub mod decoding;
pub mod detection;
pub mod error;
pub mod pipeline;
pub mod shared;
