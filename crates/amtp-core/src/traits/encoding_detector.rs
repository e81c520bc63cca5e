use crate::language::{LanguageId, TextEncoding};

/// Guesses how a byte buffer should be read when no language hint is given.
pub trait IEncodingDetector: Send + Sync {
    /// Suggest an encoding and the language id to map the decoded text with.
    fn detect(&self, data: &[u8]) -> (TextEncoding, LanguageId);
}
