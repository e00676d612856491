use crate::common::constants::{
    CUSTOM_CONFIGURATION_TEXT, NOT_APPLICABLE_COORDINATE, PLACEHOLDER_NAME, PLACEHOLDER_SYMBOL,
    PLACEHOLDER_TITLE,
};
use crate::domain::{MatterState, PhaseTransition, PhaseTransitionKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One periodic-table entry. Records are immutable once a table is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseElementRecord {
    pub name: String,
    pub symbol: String,
    pub protons: u32,
    pub neutrons: u32,
    pub atomic_weight: f64,
    #[serde(default)]
    pub stable_neutrons: BTreeSet<u32>,
    pub electron_configuration: String,
    #[serde(default)]
    pub shells: Vec<u32>,
    pub group: i32,
    pub period: i32,
    #[serde(default)]
    pub state_at_stp: MatterState,
    #[serde(default)]
    pub phase_transitions: Vec<PhaseTransition>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl BaseElementRecord {
    /// Stand-in for proton counts without a table entry.
    pub fn placeholder(protons: u32) -> Self {
        Self {
            name: PLACEHOLDER_NAME.to_string(),
            symbol: PLACEHOLDER_SYMBOL.to_string(),
            protons,
            neutrons: 0,
            atomic_weight: f64::from(protons),
            stable_neutrons: BTreeSet::new(),
            electron_configuration: CUSTOM_CONFIGURATION_TEXT.to_string(),
            shells: Vec::new(),
            group: NOT_APPLICABLE_COORDINATE,
            period: NOT_APPLICABLE_COORDINATE,
            state_at_stp: MatterState::Unknown,
            phase_transitions: Vec::new(),
            title: PLACEHOLDER_TITLE.to_string(),
            description: format!(
                "This is a hypothetical, undiscovered element with an atomic number of {}. \
                 You're exploring the boundaries of science!",
                protons
            ),
        }
    }

    /// Electron count of the neutral atom.
    pub const fn electrons(&self) -> u32 {
        self.protons
    }

    pub fn is_stable_neutron_count(&self, neutrons: u32) -> bool {
        self.stable_neutrons.contains(&neutrons)
    }

    pub fn phase_transition_kelvin(&self, kind: PhaseTransitionKind) -> Option<f64> {
        self.phase_transitions
            .iter()
            .find(|transition| transition.kind == kind)
            .map(|transition| transition.temperature_kelvin)
    }

    pub const fn has_group(&self) -> bool {
        self.group > 0
    }
}

/// Outcome of resolving a selection against a table.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementLookup<'a> {
    Found(&'a BaseElementRecord),
    Substituted(BaseElementRecord),
}

impl ElementLookup<'_> {
    pub fn record(&self) -> &BaseElementRecord {
        match self {
            Self::Found(record) => record,
            Self::Substituted(record) => record,
        }
    }

    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub const fn is_substituted(&self) -> bool {
        matches!(self, Self::Substituted(_))
    }

    pub fn into_owned(self) -> BaseElementRecord {
        match self {
            Self::Found(record) => record.clone(),
            Self::Substituted(record) => record,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BaseElementRecord, ElementLookup};
    use crate::domain::{MatterState, PhaseTransition, PhaseTransitionKind};
    use std::collections::BTreeSet;

    fn helium() -> BaseElementRecord {
        BaseElementRecord {
            name: "Helium".to_string(),
            symbol: "He".to_string(),
            protons: 2,
            neutrons: 2,
            atomic_weight: 4.0026,
            stable_neutrons: BTreeSet::from([1, 2]),
            electron_configuration: "1s2".to_string(),
            shells: vec![2],
            group: 18,
            period: 1,
            state_at_stp: MatterState::Gas,
            phase_transitions: vec![PhaseTransition {
                kind: PhaseTransitionKind::Boiling,
                temperature_kelvin: 4.22,
            }],
            title: "Helium (He)".to_string(),
            description: "Noble gas.".to_string(),
        }
    }

    #[test]
    fn placeholder_uses_sentinel_fields() {
        let placeholder = BaseElementRecord::placeholder(150);
        assert_eq!(placeholder.name, "Unknown");
        assert_eq!(placeholder.symbol, "X");
        assert_eq!(placeholder.protons, 150);
        assert_eq!(placeholder.neutrons, 0);
        assert_eq!(placeholder.electrons(), 150);
        assert_eq!(placeholder.atomic_weight, 150.0);
        assert!(placeholder.shells.is_empty());
        assert!(placeholder.stable_neutrons.is_empty());
        assert_eq!(placeholder.electron_configuration, "Custom");
        assert_eq!(placeholder.group, -1);
        assert_eq!(placeholder.period, -1);
        assert_eq!(placeholder.state_at_stp, MatterState::Unknown);
        assert!(!placeholder.has_group());
        assert!(placeholder.description.contains("atomic number of 150"));
    }

    #[test]
    fn phase_transition_lookup_is_kind_aware() {
        let record = helium();
        assert_eq!(
            record.phase_transition_kelvin(PhaseTransitionKind::Boiling),
            Some(4.22)
        );
        assert_eq!(
            record.phase_transition_kelvin(PhaseTransitionKind::Melting),
            None
        );
        assert!(record.is_stable_neutron_count(1));
        assert!(!record.is_stable_neutron_count(4));
    }

    #[test]
    fn lookup_exposes_discriminant() {
        let record = helium();
        let found = ElementLookup::Found(&record);
        assert!(found.is_found());
        assert_eq!(found.record().name, "Helium");

        let substituted = ElementLookup::Substituted(BaseElementRecord::placeholder(7));
        assert!(substituted.is_substituted());
        assert_eq!(substituted.into_owned().protons, 7);
    }

    #[test]
    fn record_serializes_with_table_field_names() {
        let json = serde_json::to_value(helium()).expect("record should serialize");
        assert_eq!(json["atomicWeight"], 4.0026);
        assert_eq!(json["stableNeutrons"], serde_json::json!([1, 2]));
        assert_eq!(json["stateAtStp"], "gas");
        assert_eq!(json["phaseTransitions"][0]["type"], "boiling");
    }
}
