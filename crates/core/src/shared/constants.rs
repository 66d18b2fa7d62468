pub const CASCADE_FILE_NAME: &str = "haarcascade_frontalface_default.xml";

/// Directory name used under the platform data dir and next to the binary.
pub const APP_DIR_NAME: &str = "face-detect";
pub const CASCADE_SUBDIR: &str = "haarcascades";

/// System-wide OpenCV data directories, searched after the bundled locations.
pub const SYSTEM_CASCADE_DIRS: &[&str] = &[
    "/usr/share/opencv4/haarcascades",
    "/usr/share/opencv/haarcascades",
    "/usr/local/share/opencv4/haarcascades",
];

pub const DEFAULT_SCALE_FACTOR: f64 = 1.1;
pub const DEFAULT_MIN_NEIGHBORS: u32 = 5;
pub const DEFAULT_MIN_SIZE: (u32, u32) = (30, 30);
