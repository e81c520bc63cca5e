use serde::{Deserialize, Serialize};

/// One aggregate view (internal, external or snapshot) over a field sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModuleState {
    pub value: f64,
    pub energy: f64,
    /// Phase coherence, [0.0, 1.0].
    pub coherence: f64,
    pub stability: f64,
}

impl ModuleState {
    /// State reported for an empty sequence. No data counts as perfectly stable.
    pub const EMPTY: ModuleState = ModuleState {
        value: 0.0,
        energy: 0.0,
        coherence: 0.0,
        stability: 1.0,
    };
}

impl Default for ModuleState {
    fn default() -> Self {
        Self::EMPTY
    }
}
