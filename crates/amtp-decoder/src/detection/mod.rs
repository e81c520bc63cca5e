//! Default `IEncodingDetector` and `ILanguageDetector` implementations.

pub mod code_page;
pub mod script_ratio;

pub use code_page::CodePageDetector;
pub use script_ratio::{ScriptCounts, ScriptRatioDetector};
