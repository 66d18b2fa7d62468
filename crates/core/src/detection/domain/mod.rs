pub mod detector_config;
pub mod face_detector;
pub mod face_location;
