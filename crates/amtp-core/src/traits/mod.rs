pub mod encoding_detector;
pub mod language_detector;

pub use encoding_detector::IEncodingDetector;
pub use language_detector::ILanguageDetector;
