use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Chain group cannot be empty")]
    Empty,
    #[error("Invalid chain group '{0}'. Expected chain ids such as 'A' or 'A,C'.")]
    InvalidChains(String),
}

/// Host-side residue classification applied on top of a chain group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResidueFilter {
    /// Polymeric residues only (`::polymer_type>0`).
    Polymer,
    /// Protein residues only.
    Protein,
}

impl ResidueFilter {
    pub fn as_spec(&self) -> &'static str {
        match self {
            ResidueFilter::Polymer => "::polymer_type>0",
            ResidueFilter::Protein => "protein",
        }
    }
}

/// One side of an interface, addressed by chain id(s).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct ChainGroup {
    chains: String,
}

impl ChainGroup {
    pub fn new(chains: &str) -> Result<Self, SelectionError> {
        let chains = chains.trim().trim_start_matches('/');
        if chains.is_empty() {
            return Err(SelectionError::Empty);
        }
        let valid = chains
            .split(',')
            .all(|id| !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric()));
        if !valid {
            return Err(SelectionError::InvalidChains(chains.to_string()));
        }
        Ok(Self {
            chains: chains.to_string(),
        })
    }

    pub fn chains(&self) -> &str {
        &self.chains
    }

    /// Renders the atom specifier, e.g. `/A` or `/A & ::polymer_type>0`.
    pub fn spec(&self, filter: Option<ResidueFilter>) -> String {
        match filter {
            Some(f) => format!("/{} & {}", self.chains, f.as_spec()),
            None => format!("/{}", self.chains),
        }
    }
}

impl fmt::Display for ChainGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.chains)
    }
}

impl FromStr for ChainGroup {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ChainGroup {
    type Error = SelectionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

/// The pair of chain groups whose interface is analysed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupPair {
    pub a: ChainGroup,
    pub b: ChainGroup,
}

impl GroupPair {
    pub fn new(a: ChainGroup, b: ChainGroup) -> Self {
        Self { a, b }
    }

    /// The same pair seen from the other side.
    pub fn swapped(&self) -> Self {
        Self {
            a: self.b.clone(),
            b: self.a.clone(),
        }
    }
}

impl Default for GroupPair {
    fn default() -> Self {
        Self {
            a: ChainGroup {
                chains: "A".to_string(),
            },
            b: ChainGroup {
                chains: "B".to_string(),
            },
        }
    }
}
