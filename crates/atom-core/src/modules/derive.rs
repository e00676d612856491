//! Element state derivation for arbitrary particle triples.

use super::stability::{StabilityInfo, classify_stability};
use super::table::BaseElementRecord;
use super::traits::ElementSource;
use crate::common::config;
use crate::common::constants::{
    CUSTOM_CONFIGURATION_TERM_LIMIT, CUSTOM_CONFIGURATION_TEXT, MAX_KNOWN_ATOMIC_NUMBER,
};
use crate::domain::{ParticleCategory, ParticleCounts, Selection};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordOrigin {
    Table,
    Placeholder,
}

/// A base record combined with the current particle counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedElementView {
    pub base: BaseElementRecord,
    pub origin: RecordOrigin,
    pub counts: ParticleCounts,
    pub shells: Vec<u32>,
    pub electron_configuration: String,
    pub unplaced_electrons: u32,
    pub is_isotope: bool,
    pub charge: i64,
    pub atomic_weight: f64,
    pub stability: StabilityInfo,
    pub default_neutrons: u32,
    pub category: ParticleCategory,
}

impl DerivedElementView {
    pub fn name(&self) -> &str {
        &self.base.name
    }

    pub fn symbol(&self) -> &str {
        &self.base.symbol
    }

    pub const fn is_placeholder(&self) -> bool {
        matches!(self.origin, RecordOrigin::Placeholder)
    }

    pub const fn is_ion(&self) -> bool {
        self.charge != 0
    }

    /// Isotope, ion or beyond the known table.
    pub const fn is_custom(&self) -> bool {
        self.is_isotope || self.is_ion() || self.counts.protons > MAX_KNOWN_ATOMIC_NUMBER
    }

    /// Effective weight rounded half away from zero.
    pub fn rounded_mass_number(&self) -> i64 {
        self.atomic_weight.round() as i64
    }
}

pub fn derive<S>(source: &S, selection: &Selection) -> DerivedElementView
where
    S: ElementSource + ?Sized,
{
    let counts = selection.counts;
    let lookup = source.resolve(&selection.name, counts.protons);
    let origin = if lookup.is_found() {
        RecordOrigin::Table
    } else {
        RecordOrigin::Placeholder
    };
    let base = lookup.into_owned();

    let neutral_known = origin == RecordOrigin::Table && counts.protons == counts.electrons;
    let (shells, electron_configuration, unplaced_electrons) = if neutral_known {
        (base.shells.clone(), base.electron_configuration.clone(), 0)
    } else {
        let computed = config::compute(counts.electrons);
        let text = if origin == RecordOrigin::Placeholder
            || computed.term_count() > CUSTOM_CONFIGURATION_TERM_LIMIT
        {
            CUSTOM_CONFIGURATION_TEXT.to_string()
        } else {
            computed.configuration_text.clone()
        };
        (computed.shells.clone(), text, computed.unplaced())
    };

    let is_isotope = counts.neutrons != base.neutrons;
    let atomic_weight = if is_isotope {
        counts.mass_number() as f64
    } else {
        base.atomic_weight
    };
    let stability = classify_stability(counts.protons, counts.neutrons, &base);
    let default_neutrons = base.neutrons;

    DerivedElementView {
        base,
        origin,
        counts,
        shells,
        electron_configuration,
        unplaced_electrons,
        is_isotope,
        charge: counts.charge(),
        atomic_weight,
        stability,
        default_neutrons,
        category: ParticleCategory::from_counts(counts, MAX_KNOWN_ATOMIC_NUMBER),
    }
}
