use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Selects which unordered atom pairs `(i, j)`, `i < j`, contribute a distance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PairSelectionPolicy {
    /// Every pair, regardless of species.
    All,
    /// Only pairs where both atoms carry the given species label.
    SameSpecies(String),
    /// Only pairs whose two atoms carry different species labels.
    DifferentSpecies,
}

impl PairSelectionPolicy {
    pub fn same_species(label: impl Into<String>) -> Self {
        Self::SameSpecies(label.into())
    }

    /// The species label this policy filters on, if any.
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::SameSpecies(label) => Some(label.as_str()),
            _ => None,
        }
    }

    /// Whether the pair of species labels `(a, b)` is selected by this policy.
    #[inline]
    pub fn includes(&self, a: &str, b: &str) -> bool {
        match self {
            Self::All => true,
            Self::SameSpecies(label) => a == label.as_str() && b == label.as_str(),
            Self::DifferentSpecies => a != b,
        }
    }
}

impl fmt::Display for PairSelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::SameSpecies(label) => write!(f, "same:{}", label),
            Self::DifferentSpecies => write!(f, "different"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum PolicyParseError {
    #[error("Unknown pair selection policy: '{0}' (expected 'all', 'same:<label>' or 'different')")]
    Unknown(String),
    #[error("Species label is missing in '{0}'")]
    MissingLabel(String),
}

impl FromStr for PairSelectionPolicy {
    type Err = PolicyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some((keyword, label)) = trimmed.split_once(':') {
            if !keyword.trim().eq_ignore_ascii_case("same") {
                return Err(PolicyParseError::Unknown(s.to_string()));
            }
            let label = label.trim();
            if label.is_empty() {
                return Err(PolicyParseError::MissingLabel(s.to_string()));
            }
            return Ok(Self::SameSpecies(label.to_string()));
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "different" => Ok(Self::DifferentSpecies),
            "same" => Err(PolicyParseError::MissingLabel(s.to_string())),
            _ => Err(PolicyParseError::Unknown(s.to_string())),
        }
    }
}
