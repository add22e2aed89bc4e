// Lookup direction for dictionary queries.

use serde::{Deserialize, Serialize};

/// Which lookup mode governs scoring and weighting rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Query is a headword; results are translations for it.
    HeadwordToTranslation,
    /// Query is a translation; results are headwords carrying it.
    TranslationToHeadword,
}

impl Direction {
    /// The opposite lookup direction.
    pub fn reversed(self) -> Self {
        match self {
            Direction::HeadwordToTranslation => Direction::TranslationToHeadword,
            Direction::TranslationToHeadword => Direction::HeadwordToTranslation,
        }
    }
}
