//! Candidate models and the ordered catalog the fallback loop walks.

use serde::{Deserialize, Serialize};

/// Default candidate identifiers, newest first.
pub const DEFAULT_MODEL_IDS: [&str; 4] = [
    "gemini-2.5-flash",
    "gemini-2.5-flash-lite",
    "gemini-1.5-flash",
    "gemini-1.5-pro",
];

/// One named configuration of the provider (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelCandidate {
    identifier: String,
    priority: u32,
}

impl ModelCandidate {
    pub fn new(identifier: impl Into<String>, priority: u32) -> Self {
        Self {
            identifier: identifier.into(),
            priority,
        }
    }

    /// Get the string identifier sent to the provider
    pub fn as_str(&self) -> &str {
        &self.identifier
    }

    pub fn priority(&self) -> u32 {
        self.priority
    }
}

impl std::fmt::Display for ModelCandidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.identifier)
    }
}

/// Ordered list of candidate models.
///
/// Sorted by ascending priority at construction (ties keep insertion order)
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelCatalog {
    candidates: Vec<ModelCandidate>,
}

impl ModelCatalog {
    pub fn new(mut candidates: Vec<ModelCandidate>) -> Self {
        candidates.sort_by_key(|c| c.priority);
        Self { candidates }
    }

    /// Build a catalog whose priorities follow the given order.
    ///
    /// Blank identifiers are skipped.
    pub fn from_identifiers<I, S>(identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let candidates = identifiers
            .into_iter()
            .filter_map(|s| {
                let id = s.as_ref().trim();
                (!id.is_empty()).then(|| id.to_string())
            })
            .enumerate()
            .map(|(i, id)| ModelCandidate::new(id, i as u32))
            .collect();
        Self { candidates }
    }

    pub fn candidates(&self) -> &[ModelCandidate] {
        &self.candidates
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ModelCandidate> {
        self.candidates.iter()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn primary(&self) -> Option<&ModelCandidate> {
        self.candidates.first()
    }
}

impl Default for ModelCatalog {
    fn default() -> Self {
        Self::from_identifiers(DEFAULT_MODEL_IDS)
    }
}

impl<'a> IntoIterator for &'a ModelCatalog {
    type Item = &'a ModelCandidate;
    type IntoIter = std::slice::Iter<'a, ModelCandidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}
