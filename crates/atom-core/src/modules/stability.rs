//! Nuclear stability classification.
//!
//! The superheavy regions are display heuristics rather than nuclear physics.
//! They live in [`STABILITY_REGIONS`] so they can be tuned or dropped without
//! touching [`classify_stability`].

use super::table::BaseElementRecord;
use crate::domain::StabilityClass;
use serde::Serialize;
use std::ops::RangeInclusive;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StabilityRegion {
    pub class: StabilityClass,
    pub protons: RangeInclusive<u32>,
    pub neutrons: RangeInclusive<u32>,
}

impl StabilityRegion {
    pub fn contains(&self, protons: u32, neutrons: u32) -> bool {
        self.protons.contains(&protons) && self.neutrons.contains(&neutrons)
    }
}

/// Heuristic regions in precedence order; the first match wins.
pub static STABILITY_REGIONS: [StabilityRegion; 2] = [
    StabilityRegion {
        class: StabilityClass::IslandOfStability,
        protons: 110..=120,
        neutrons: 170..=190,
    },
    StabilityRegion {
        class: StabilityClass::DeformedStabilityPeninsula,
        protons: 106..=110,
        neutrons: 160..=164,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StabilityInfo {
    #[serde(rename = "type")]
    pub class: StabilityClass,
    pub label: &'static str,
}

impl From<StabilityClass> for StabilityInfo {
    fn from(class: StabilityClass) -> Self {
        Self {
            class,
            label: class.label(),
        }
    }
}

pub fn stability_region(protons: u32, neutrons: u32) -> Option<&'static StabilityRegion> {
    STABILITY_REGIONS
        .iter()
        .find(|region| region.contains(protons, neutrons))
}

pub fn classify_stability(
    protons: u32,
    neutrons: u32,
    base_record: &BaseElementRecord,
) -> StabilityInfo {
    if let Some(region) = stability_region(protons, neutrons) {
        return region.class.into();
    }
    if base_record.is_stable_neutron_count(neutrons) {
        StabilityClass::Stable.into()
    } else {
        StabilityClass::Unstable.into()
    }
}
