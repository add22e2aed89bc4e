// In-memory entry collection and the common-word frequency set.

use hashbrown::HashSet;

use hanlex_core::Entry;

/// Ingestion validation failure. Malformed entries are rejected here so the
/// ranking engine can assume every stored entry is well-formed.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("entry has an empty headword")]
    EmptyHeadword,
    #[error("entry has an empty translation")]
    EmptyTranslation,
}

/// The in-memory entry collection.
///
/// Entries keep their insertion order; ranking ties are broken by it.
/// Removal and modification locate entries by normalized identity (the
/// `Entry` equality contract).
#[derive(Debug, Default)]
pub struct WordStore {
    entries: Vec<Entry>,
}

impl WordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append one entry.
    pub fn add(&mut self, entry: Entry) -> Result<(), StoreError> {
        validate(&entry)?;
        self.entries.push(entry);
        Ok(())
    }

    /// Validate and append a batch of entries. Fails on the first malformed
    /// entry without adding any of the batch.
    pub fn add_all(&mut self, entries: Vec<Entry>) -> Result<(), StoreError> {
        for entry in &entries {
            validate(entry)?;
        }
        self.entries.extend(entries);
        Ok(())
    }

    /// Remove the first entry equal (by normalized identity) to `entry`.
    /// Returns whether an entry was removed.
    pub fn remove(&mut self, entry: &Entry) -> bool {
        match self.entries.iter().position(|e| e == entry) {
            Some(i) => {
                self.entries.remove(i);
                true
            }
            None => false,
        }
    }

    /// Replace the first entry equal to `old` with `new`. Returns whether a
    /// replacement happened.
    pub fn modify(&mut self, old: &Entry, new: Entry) -> Result<bool, StoreError> {
        validate(&new)?;
        match self.entries.iter().position(|e| e == old) {
            Some(i) => {
                self.entries[i] = new;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Replace the whole collection.
    pub fn reload(&mut self, entries: Vec<Entry>) -> Result<(), StoreError> {
        for entry in &entries {
            validate(entry)?;
        }
        self.entries = entries;
        Ok(())
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate(entry: &Entry) -> Result<(), StoreError> {
    if entry.headword().trim().is_empty() {
        return Err(StoreError::EmptyHeadword);
    }
    if entry.translation().trim().is_empty() {
        return Err(StoreError::EmptyTranslation);
    }
    Ok(())
}

/// Frozen lowercase token set used for frequency weighting.
///
/// An empty set is valid: the common-word multiplier is simply never
/// applied.
#[derive(Debug, Default, Clone)]
pub struct CommonWordSet {
    words: HashSet<String>,
}

impl CommonWordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the set from tokens, lowercasing and trimming each.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = tokens
            .into_iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        Self { words }
    }

    /// Membership test; `word` must already be lowercase.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
