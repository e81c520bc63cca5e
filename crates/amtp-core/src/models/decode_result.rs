use serde::{Deserialize, Serialize};

use super::{FieldSequence, ModuleState};
use crate::language::LanguageId;

/// Which mapping path produced a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecodeSource {
    /// Characters mapped through the language-aware mapper.
    Text,
    /// Bytes mapped one by one through the raw-byte mapper.
    Binary,
}

/// Complete output of a decode: the field sequence and its aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodeResult {
    pub internal: ModuleState,
    pub external: ModuleState,
    pub snapshot: ModuleState,
    pub sequence: FieldSequence,
    pub total_coherence: f64,
    /// Always >= 0.0.
    pub semantic_density: f64,
    /// Language the sequence was mapped with.
    pub language: LanguageId,
    pub source: DecodeSource,
}

impl DecodeResult {
    /// Number of mapped characters/bytes.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// True if the raw-binary fallback produced this result.
    pub fn is_binary(&self) -> bool {
        self.source == DecodeSource::Binary
    }
}
