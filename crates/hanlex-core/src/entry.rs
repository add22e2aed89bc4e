// The dictionary entry model.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::normalize::{normalized_headword, normalized_translation, simplify_translation};

/// One dictionary entry: a headword and its translation field.
///
/// Equality and hashing are defined on *normalized* forms: the headword
/// lowercased, and the translation with parenthetical/bracketed content and
/// part-of-speech markers stripped, then lowercased. Two entries differing
/// only by annotation noise are therefore duplicates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    headword: String,
    translation: String,
}

impl Entry {
    pub fn new(headword: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            headword: headword.into(),
            translation: translation.into(),
        }
    }

    /// The source-language dictionary term, as stored.
    pub fn headword(&self) -> &str {
        &self.headword
    }

    /// The translation field, as stored (annotations included).
    pub fn translation(&self) -> &str {
        &self.translation
    }

    /// The lowercase form the headword is compared under.
    pub fn normalized_headword(&self) -> String {
        normalized_headword(&self.headword)
    }

    /// The translation with annotation noise stripped (case preserved).
    pub fn simplified_translation(&self) -> String {
        simplify_translation(&self.translation)
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        normalized_headword(&self.headword) == normalized_headword(&other.headword)
            && normalized_translation(&self.translation)
                == normalized_translation(&other.translation)
    }
}

impl Eq for Entry {}

impl Hash for Entry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        normalized_headword(&self.headword).hash(state);
        normalized_translation(&self.translation).hash(state);
    }
}
