use std::fmt;

use crate::rng::shuffle;

pub const MIN_ENTRIES: usize = 2;
pub const MAX_ENTRIES: usize = 20;
pub const MAX_ENTRY_LEN: usize = 50;

pub const DEFAULT_ENTRIES: [&str; 8] = ["Yes", "No", "Yes", "No", "Yes", "No", "Yes", "No"];
pub const CLEARED_ENTRIES: [&str; 2] = ["Option 1", "Option 2"];

/// Ordered list of wheel options. Order decides both the angular slot and
/// the assigned color, so removal shifts everything after the gap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryList(Vec<String>);

impl EntryList {
    pub fn new() -> Self {
        Self(DEFAULT_ENTRIES.iter().map(|label| label.to_string()).collect())
    }

    /// Builds a list without the `add` validation rules. Callers own the
    /// invariant that at least `MIN_ENTRIES` labels are supplied.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(labels.into_iter().map(Into::into).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn contains(&self, text: &str) -> bool {
        self.0.iter().any(|existing| existing == text)
    }

    pub fn add(&mut self, text: &str) -> Result<(), EntryError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(EntryError::Empty);
        }
        if trimmed.chars().count() > MAX_ENTRY_LEN {
            return Err(EntryError::TooLong);
        }
        if self.0.len() >= MAX_ENTRIES {
            return Err(EntryError::Full);
        }
        if self.contains(trimmed) {
            return Err(EntryError::Duplicate);
        }
        self.0.push(trimmed.to_string());
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<String, EntryError> {
        if index >= self.0.len() {
            return Err(EntryError::BadIndex {
                index,
                len: self.0.len(),
            });
        }
        if self.0.len() <= MIN_ENTRIES {
            return Err(EntryError::AtMinimum);
        }
        Ok(self.0.remove(index))
    }

    /// Replaces the entry in place with the trimmed text. Input that trims
    /// to nothing is a silent no-op so live-editing a row down to empty
    /// never destroys the entry.
    pub fn update(&mut self, index: usize, text: &str) -> Result<(), EntryError> {
        let len = self.0.len();
        let slot = self
            .0
            .get_mut(index)
            .ok_or(EntryError::BadIndex { index, len })?;
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(());
        }
        *slot = trimmed.to_string();
        Ok(())
    }

    pub fn shuffle(&mut self, seed: u64) {
        shuffle(&mut self.0, seed);
    }

    pub fn clear(&mut self) {
        self.0 = CLEARED_ENTRIES.iter().map(|label| label.to_string()).collect();
    }
}

impl Default for EntryList {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    Empty,
    TooLong,
    Full,
    Duplicate,
    AtMinimum,
    BadIndex { index: usize, len: usize },
}

impl fmt::Display for EntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryError::Empty => write!(f, "Please enter a valid entry"),
            EntryError::TooLong => {
                write!(f, "Entries are limited to {MAX_ENTRY_LEN} characters")
            }
            EntryError::Full => write!(f, "Maximum {MAX_ENTRIES} entries allowed"),
            EntryError::Duplicate => write!(f, "This entry already exists"),
            EntryError::AtMinimum => {
                write!(f, "At least {MIN_ENTRIES} entries are required")
            }
            EntryError::BadIndex { index, len } => {
                write!(f, "no entry at index {index} (list has {len})")
            }
        }
    }
}

impl std::error::Error for EntryError {}
