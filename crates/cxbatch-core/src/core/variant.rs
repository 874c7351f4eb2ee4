use super::command::Command;
use super::selection::{GroupPair, ResidueFilter};
use phf::{Map, phf_map};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error(
    "Unknown analysis variant '{0}'. Expected 'interface-contact', 'hydrogen-bond' or 'no-minimum-area'."
)]
pub struct VariantError(pub String);

/// The built-in analysis command sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum AnalysisVariant {
    /// Interface residues of each group contacting the other.
    InterfaceContact,
    /// Hydrogen bonds between the protein residues of both groups.
    HydrogenBond,
    /// Interface residues restricted to polymers, with no contact-area cutoff.
    NoMinimumArea,
}

static VARIANT_ALIASES: Map<&'static str, AnalysisVariant> = phf_map! {
    "interface-contact" => AnalysisVariant::InterfaceContact,
    "interfaces" => AnalysisVariant::InterfaceContact,
    "contacts" => AnalysisVariant::InterfaceContact,
    "hydrogen-bond" => AnalysisVariant::HydrogenBond,
    "hbonds" => AnalysisVariant::HydrogenBond,
    "no-minimum-area" => AnalysisVariant::NoMinimumArea,
    "no-min-area" => AnalysisVariant::NoMinimumArea,
    "nominarea" => AnalysisVariant::NoMinimumArea,
};

impl AnalysisVariant {
    pub const ALL: [AnalysisVariant; 3] = [
        AnalysisVariant::InterfaceContact,
        AnalysisVariant::HydrogenBond,
        AnalysisVariant::NoMinimumArea,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AnalysisVariant::InterfaceContact => "interface-contact",
            AnalysisVariant::HydrogenBond => "hydrogen-bond",
            AnalysisVariant::NoMinimumArea => "no-minimum-area",
        }
    }

    /// Suffix appended to the input path to name the saved log.
    pub fn output_suffix(&self) -> &'static str {
        match self {
            AnalysisVariant::InterfaceContact => "_intResidues.txt",
            AnalysisVariant::HydrogenBond => "_intResidues_hbonds.txt",
            AnalysisVariant::NoMinimumArea => "_intResidues_noMinArea.txt",
        }
    }

    pub fn analysis_commands(&self, groups: &GroupPair) -> Vec<Command> {
        match self {
            AnalysisVariant::InterfaceContact => interface_commands(groups, None, None),
            AnalysisVariant::HydrogenBond => vec![Command::hbonds(
                &groups.a.spec(Some(ResidueFilter::Protein)),
                &groups.b.spec(Some(ResidueFilter::Protein)),
            )],
            AnalysisVariant::NoMinimumArea => {
                interface_commands(groups, Some(ResidueFilter::Polymer), Some(0.0))
            }
        }
    }
}

fn interface_commands(
    groups: &GroupPair,
    filter: Option<ResidueFilter>,
    area_cutoff: Option<f64>,
) -> Vec<Command> {
    [groups.clone(), groups.swapped()]
        .iter()
        .flat_map(|pair| {
            [
                Command::interfaces_select(
                    &pair.a.spec(filter),
                    &pair.b.spec(filter),
                    area_cutoff,
                ),
                Command::info_selection_residues(),
            ]
        })
        .collect()
}

impl fmt::Display for AnalysisVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AnalysisVariant {
    type Err = VariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        VARIANT_ALIASES
            .get(key.as_str())
            .copied()
            .ok_or_else(|| VariantError(s.to_string()))
    }
}

impl TryFrom<String> for AnalysisVariant {
    type Error = VariantError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
