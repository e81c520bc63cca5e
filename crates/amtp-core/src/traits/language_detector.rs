use crate::language::LanguageId;

/// Picks a language id for already-decoded text when no hint is given.
pub trait ILanguageDetector: Send + Sync {
    fn detect(&self, text: &str) -> LanguageId;
}
