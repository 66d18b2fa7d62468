use std::ffi::OsString;
use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::Parser;

use face_detect_core::decoding::infrastructure::base64_image_decoder::Base64ImageDecoder;
use face_detect_core::detection::domain::detector_config::DetectorConfig;
use face_detect_core::detection::domain::face_detector::FaceDetector;
use face_detect_core::detection::infrastructure::cascade_resolver::CascadeSource;
use face_detect_core::detection::infrastructure::opencv_cascade_detector::OpenCvCascadeDetector;
use face_detect_core::error::DetectionError;
use face_detect_core::pipeline::detect_faces_use_case::DetectFacesUseCase;
use face_detect_core::pipeline::detection_report::{DetectionReport, USAGE_ERROR};
use face_detect_core::shared::constants::{DEFAULT_MIN_NEIGHBORS, DEFAULT_SCALE_FACTOR};

/// Detect faces in a base64-encoded image and print a JSON report.
#[derive(Parser)]
#[command(name = "face-detect", version)]
struct Cli {
    /// Base64 image data, optionally as a `data:image/...;base64,` URL.
    #[arg(allow_hyphen_values = true)]
    image: String,

    /// Cascade XML file (skips the default search).
    #[arg(long, env = "FACE_DETECT_CASCADE")]
    cascade: Option<PathBuf>,

    /// Window growth factor between scales (> 1.0).
    #[arg(long, env = "FACE_DETECT_SCALE_FACTOR", default_value_t = DEFAULT_SCALE_FACTOR)]
    scale_factor: f64,

    /// Merged detections need more than this many raw hits (0 = no merging).
    #[arg(long, env = "FACE_DETECT_MIN_NEIGHBORS", default_value_t = DEFAULT_MIN_NEIGHBORS)]
    min_neighbors: u32,

    /// Smallest face size, `N` or `WxH`.
    #[arg(long, env = "FACE_DETECT_MIN_SIZE", default_value = "30", value_parser = parse_size)]
    min_size: (u32, u32),
}

fn main() {
    env_logger::init();

    let cli = match Cli::try_parse_from(payload_args(std::env::args_os().collect())) {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => usage_error(&usage_message(&e)),
        },
    };

    let config = DetectorConfig {
        scale_factor: cli.scale_factor,
        min_neighbors: cli.min_neighbors,
        min_size: cli.min_size,
        max_size: None,
    };
    if let Err(e) = config.validate() {
        usage_error(&e.to_string());
    }

    let source = CascadeSource::from_option(cli.cascade);
    let mut use_case = DetectFacesUseCase::new(
        Box::new(Base64ImageDecoder::new()),
        Box::new(move || -> Result<Box<dyn FaceDetector>, DetectionError> {
            let candidates = source.candidates();
            Ok(Box::new(OpenCvCascadeDetector::from_candidates(
                &candidates,
                config.clone(),
            )?))
        }),
    );

    let report = use_case.report(&cli.image);
    print_report(&report);
}

/// A lone argument is always the image payload, even when it looks like
/// a flag; `--help` and `--version` need at least one other argument.
fn payload_args(mut args: Vec<OsString>) -> Vec<OsString> {
    if args.len() == 2 {
        args.insert(1, OsString::from("--"));
    }
    args
}

/// Error text for an argument-parsing failure.
///
/// Count problems (missing or extra arguments) get the fixed usage error;
/// bad option values keep clap's own first line.
fn usage_message(e: &clap::Error) -> String {
    match e.kind() {
        ErrorKind::MissingRequiredArgument
        | ErrorKind::UnknownArgument
        | ErrorKind::TooManyValues
        | ErrorKind::WrongNumberOfValues => USAGE_ERROR.to_string(),
        _ => {
            let rendered = e.to_string();
            let first = rendered.lines().next().unwrap_or_default();
            first.trim_start_matches("error: ").to_string()
        }
    }
}

fn usage_error(error: &str) -> ! {
    log::warn!("Usage error: {error}");
    print_report(&DetectionReport::usage(error));
    process::exit(1);
}

fn print_report(report: &DetectionReport) {
    match report.to_json() {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

/// Parse `N` (square) or `WxH`.
fn parse_size(s: &str) -> Result<(u32, u32), String> {
    let parse = |v: &str| {
        v.trim()
            .parse::<u32>()
            .map_err(|_| format!("invalid size '{s}', expected N or WxH"))
    };
    match s.split_once(['x', 'X']) {
        Some((w, h)) => Ok((parse(w)?, parse(h)?)),
        None => {
            let n = parse(s)?;
            Ok((n, n))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size_square() {
        assert_eq!(parse_size("30"), Ok((30, 30)));
    }

    #[test]
    fn test_parse_size_pair() {
        assert_eq!(parse_size("30x40"), Ok((30, 40)));
        assert_eq!(parse_size("64X48"), Ok((64, 48)));
    }

    #[test]
    fn test_parse_size_rejects_garbage() {
        assert!(parse_size("abc").is_err());
        assert!(parse_size("30x").is_err());
        assert!(parse_size("-5").is_err());
    }

    #[test]
    fn test_missing_image_is_usage_error() {
        let err = Cli::try_parse_from(["face-detect"]).err().unwrap();
        assert_eq!(usage_message(&err), USAGE_ERROR);
    }

    #[test]
    fn test_extra_argument_is_usage_error() {
        let err = Cli::try_parse_from(["face-detect", "aaaa", "bbbb"]).err().unwrap();
        assert_eq!(usage_message(&err), USAGE_ERROR);
    }

    #[test]
    fn test_bad_option_value_keeps_clap_message() {
        let err = Cli::try_parse_from(["face-detect", "--scale-factor", "fast", "aaaa"])
            .err()
            .unwrap();
        let message = usage_message(&err);
        assert_ne!(message, USAGE_ERROR);
        assert!(message.contains("--scale-factor"));
    }

    #[test]
    fn test_unknown_flag_is_usage_error() {
        let err = Cli::try_parse_from(["face-detect", "--bogus", "aaaa"]).err().unwrap();
        assert_eq!(usage_message(&err), USAGE_ERROR);
    }

    #[test]
    fn test_lone_flag_like_argument_is_the_image() {
        for arg in ["--help", "-x", "--version", "-"] {
            let cli = Cli::try_parse_from(payload_args(vec![
                OsString::from("face-detect"),
                OsString::from(arg),
            ]))
            .unwrap();
            assert_eq!(cli.image, arg);
        }
    }

    #[test]
    fn test_payload_args_leaves_other_counts_alone() {
        let args: Vec<OsString> = ["face-detect", "--cascade", "c.xml", "aaaa"]
            .iter()
            .map(OsString::from)
            .collect();
        assert_eq!(payload_args(args.clone()), args);
        assert_eq!(
            payload_args(vec![OsString::from("face-detect")]),
            vec![OsString::from("face-detect")]
        );
    }

    #[test]
    fn test_hyphen_payload_after_options() {
        let cli = Cli::try_parse_from(["face-detect", "--min-neighbors", "3", "-x"]).unwrap();
        assert_eq!(cli.image, "-x");
        assert_eq!(cli.min_neighbors, 3);
    }

    #[test]
    fn test_help_still_available_with_other_arguments() {
        let err = Cli::try_parse_from(payload_args(
            ["face-detect", "--min-neighbors", "3", "--help"]
                .iter()
                .map(OsString::from)
                .collect(),
        ))
        .err()
        .unwrap();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["face-detect", "aaaa"]).unwrap();
        assert_eq!(cli.image, "aaaa");
        assert_eq!(cli.min_size, (30, 30));
        assert_eq!(cli.min_neighbors, 5);
    }
}
