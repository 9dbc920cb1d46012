pub mod duplicate_detector;

pub use duplicate_detector::IDuplicateDetector;
