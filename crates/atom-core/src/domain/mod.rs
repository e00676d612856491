pub mod errors;

pub use errors::{AtomError, AtomErrorCategory, AtomResult, TableResult};

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ParticleCounts {
    pub protons: u32,
    pub neutrons: u32,
    pub electrons: u32,
}

impl ParticleCounts {
    pub const VACUUM: Self = Self::new(0, 0, 0);

    pub const fn new(protons: u32, neutrons: u32, electrons: u32) -> Self {
        Self {
            protons,
            neutrons,
            electrons,
        }
    }

    /// Net charge in elementary units; positive for cations.
    pub const fn charge(&self) -> i64 {
        self.protons as i64 - self.electrons as i64
    }

    pub const fn mass_number(&self) -> u64 {
        self.protons as u64 + self.neutrons as u64
    }

    pub const fn get(&self, kind: ParticleKind) -> u32 {
        match kind {
            ParticleKind::Proton => self.protons,
            ParticleKind::Neutron => self.neutrons,
            ParticleKind::Electron => self.electrons,
        }
    }

    pub const fn with(mut self, kind: ParticleKind, count: u32) -> Self {
        match kind {
            ParticleKind::Proton => self.protons = count,
            ParticleKind::Neutron => self.neutrons = count,
            ParticleKind::Electron => self.electrons = count,
        }
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParticleKind {
    Proton,
    Neutron,
    Electron,
}

impl ParticleKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Proton => "protons",
            Self::Neutron => "neutrons",
            Self::Electron => "electrons",
        }
    }
}

impl Display for ParticleKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

/// Current particle counts together with the element name the user picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub name: String,
    pub counts: ParticleCounts,
}

impl Selection {
    pub fn new(name: impl Into<String>, counts: ParticleCounts) -> Self {
        Self {
            name: name.into(),
            counts,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StabilityClass {
    Stable,
    Unstable,
    IslandOfStability,
    DeformedStabilityPeninsula,
}

impl StabilityClass {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stable => "stable",
            Self::Unstable => "unstable",
            Self::IslandOfStability => "island_of_stability",
            Self::DeformedStabilityPeninsula => "deformed_stability_peninsula",
        }
    }

    /// Human label. Both heuristic regions still read as unstable.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Stable => "Stable",
            Self::Unstable | Self::IslandOfStability | Self::DeformedStabilityPeninsula => {
                "Unstable"
            }
        }
    }

    pub const fn is_stability_region(self) -> bool {
        matches!(
            self,
            Self::IslandOfStability | Self::DeformedStabilityPeninsula
        )
    }
}

impl Display for StabilityClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatterState {
    Gas,
    Liquid,
    Solid,
    #[default]
    #[serde(other)]
    Unknown,
}

impl MatterState {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gas => "gas",
            Self::Liquid => "liquid",
            Self::Solid => "solid",
            Self::Unknown => "unknown",
        }
    }
}

impl Display for MatterState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseTransitionKind {
    Melting,
    Boiling,
    Sublimation,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseTransition {
    #[serde(rename = "type")]
    pub kind: PhaseTransitionKind,
    #[serde(rename = "temperatureK")]
    pub temperature_kelvin: f64,
}

/// Display category for a particle triple. Zero-proton inputs never reach
/// ion/isotope wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticleCategory {
    EmptySpace,
    FreeNeutrons,
    FreeElectrons,
    NonAtomicMatter,
    CustomParticle,
    Atom,
}

impl ParticleCategory {
    pub const fn from_counts(counts: ParticleCounts, max_known_protons: u32) -> Self {
        if counts.protons == 0 {
            return match (counts.neutrons > 0, counts.electrons > 0) {
                (false, false) => Self::EmptySpace,
                (true, false) => Self::FreeNeutrons,
                (false, true) => Self::FreeElectrons,
                (true, true) => Self::NonAtomicMatter,
            };
        }
        if counts.protons > max_known_protons {
            Self::CustomParticle
        } else {
            Self::Atom
        }
    }

    pub const fn has_nucleus(self) -> bool {
        matches!(self, Self::CustomParticle | Self::Atom)
    }
}
