//! Text model of the element information panel.

use super::derive::DerivedElementView;
use super::serialization::{format_ion_charge, format_value_with_unit};
use crate::common::constants::{MAX_KNOWN_ATOMIC_NUMBER, THEORETICAL_ATOMIC_NUMBER_LIMIT};
use crate::domain::{ParticleCategory, PhaseTransitionKind, StabilityClass};
use serde::Serialize;
use std::fmt::Write as _;

pub const ISLAND_OF_STABILITY_URL: &str = "https://en.wikipedia.org/wiki/Island_of_stability";

const NON_ATOMIC_MATTER_DESCRIPTION: &str = "Although this visualization shows an electron \
orbiting a neutron, in reality, such a stable system cannot be formed without the attractive \
force of a proton. This configuration does not represent an atom, but rather a transient cloud \
of coexisting particles, a state that might exist for a fleeting moment in extreme environments \
like the heart of a neutron star.";
const FREE_NEUTRONS_DESCRIPTION: &str = "This represents one or more free neutrons. A single \
neutron is a subatomic particle that decays outside of a nucleus, while a theoretical cluster of \
neutrons, known as a neutronium, is only stable under the immense gravity of a neutron star.";
const FREE_ELECTRONS_DESCRIPTION: &str = "This represents one or more free electrons. Without a \
positively charged nucleus to form an atom, these fundamental particles exist as a cloud of \
negative charge or a beam.";
const EMPTY_SPACE_DESCRIPTION: &str = "This represents a classical vacuum, a space devoid of any \
real particles. In quantum physics, however, the vacuum is a dynamic place, constantly fizzing \
with 'virtual' particle-antiparticle pairs that pop into and out of existence in an instant.";
const BEYOND_LIMIT_DESCRIPTION: &str = "This represents a particle beyond the theoretical limit \
of the periodic table (Z \u{2248} 173). According to physics, an atom with such an extreme \
nuclear charge would be fundamentally unstable, as its electric field would be strong enough to \
pull electron-positron pairs from the vacuum, making a stable electron structure impossible. \
You're probing the absolute limits of matter.";
const HYPOTHETICAL_DESCRIPTION: &str = "This is a hypothetical element beyond the currently known \
periodic table. Scientists are attempting to synthesize elements in this region, searching for a \
theoretical 'Island of Stability'. Even if found, they are expected to be exceptionally \
radioactive with extremely short half-lives.";
const PROTON_ONLY_DESCRIPTION: &str = "This nucleus, containing only protons and no neutrons, is \
exceptionally unstable. The lack of stabilizing neutrons means the intense electrostatic \
repulsion between protons causes it to fly apart almost instantaneously. For Z=2, this is known \
as a diproton.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IonChargeLine {
    pub charge: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreStabilityLine {
    pub label: String,
    pub is_stable: bool,
    pub shows_island_link: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IsotopeLine {
    pub isotope: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelProperty {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoPanel {
    pub title: String,
    pub description: String,
    pub ion_charge: Option<IonChargeLine>,
    pub core_stability: Option<CoreStabilityLine>,
    pub most_common_isotope: Option<IsotopeLine>,
    pub properties: Vec<PanelProperty>,
}

impl InfoPanel {
    pub fn from_view(view: &DerivedElementView) -> Self {
        Self {
            title: panel_title(view),
            description: panel_description(view),
            ion_charge: ion_charge_line(view),
            core_stability: core_stability_line(view),
            most_common_isotope: most_common_isotope_line(view),
            properties: property_grid(view),
        }
    }

    pub fn property(&self, label: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|property| property.label == label)
            .map(|property| property.value.as_str())
    }

    /// Plain-text rendering used by the command-line front end.
    pub fn render_text(&self) -> String {
        let mut text = String::new();
        let _ = writeln!(text, "{}", self.title);
        let _ = writeln!(text);
        let _ = writeln!(text, "{}", self.description);

        let mut details = Vec::new();
        if let Some(line) = &self.ion_charge {
            details.push(format!("ION CHARGE: {} {}", line.charge, line.detail));
        }
        if let Some(line) = &self.core_stability {
            let mut entry = format!("CORE STABILITY: {}", line.label);
            if line.shows_island_link {
                let _ = write!(entry, " (see {})", ISLAND_OF_STABILITY_URL);
            }
            details.push(entry);
        }
        if let Some(line) = &self.most_common_isotope {
            details.push(format!("MOST COMMON ISOTOPE: {} {}", line.isotope, line.detail));
        }
        details.extend(
            self.properties
                .iter()
                .map(|property| format!("{}: {}", property.label, property.value)),
        );

        if !details.is_empty() {
            let _ = writeln!(text);
            for line in details {
                let _ = writeln!(text, "{}", line);
            }
        }
        text
    }
}

pub fn panel_title(view: &DerivedElementView) -> String {
    match view.category {
        ParticleCategory::EmptySpace => "Empty Space".to_string(),
        ParticleCategory::FreeNeutrons => "Free Neutron(s)".to_string(),
        ParticleCategory::FreeElectrons => "Free Electron(s)".to_string(),
        ParticleCategory::NonAtomicMatter => "Non-Atomic Matter".to_string(),
        ParticleCategory::CustomParticle => "Custom particle".to_string(),
        ParticleCategory::Atom => {
            if view.is_isotope && view.is_ion() {
                format!("Ion Isotope: {}-{}", view.name(), view.rounded_mass_number())
            } else if view.is_isotope {
                format!("Isotope: {}-{}", view.name(), view.rounded_mass_number())
            } else if view.is_ion() {
                format!("Ion: {}", view.name())
            } else {
                view.base.title.clone()
            }
        }
    }
}

pub fn panel_description(view: &DerivedElementView) -> String {
    let counts = view.counts;
    match view.category {
        ParticleCategory::EmptySpace => return EMPTY_SPACE_DESCRIPTION.to_string(),
        ParticleCategory::FreeNeutrons => return FREE_NEUTRONS_DESCRIPTION.to_string(),
        ParticleCategory::FreeElectrons => return FREE_ELECTRONS_DESCRIPTION.to_string(),
        ParticleCategory::NonAtomicMatter => return NON_ATOMIC_MATTER_DESCRIPTION.to_string(),
        ParticleCategory::CustomParticle | ParticleCategory::Atom => {}
    }

    if counts.protons > THEORETICAL_ATOMIC_NUMBER_LIMIT {
        return BEYOND_LIMIT_DESCRIPTION.to_string();
    }
    if counts.protons > MAX_KNOWN_ATOMIC_NUMBER {
        return HYPOTHETICAL_DESCRIPTION.to_string();
    }
    if counts.neutrons == 0 && counts.protons > 1 {
        return PROTON_ONLY_DESCRIPTION.to_string();
    }

    let mass_number = view.rounded_mass_number();
    if view.is_isotope && view.is_ion() {
        let electron_change = if view.charge > 0 { "lost" } else { "gained" };
        return format!(
            "This is an ion of the isotope {}-{}. This charged isotope has {} electrons, \
             altering its chemical reactivity and bonding behavior compared to the neutral atom.",
            view.name(),
            mass_number,
            electron_change
        );
    }
    if view.is_isotope {
        return format!(
            "This is an isotope of {} with a mass number of {}. It contains the standard {} \
             protons, but has {} neutrons.",
            view.name(),
            mass_number,
            counts.protons,
            counts.neutrons
        );
    }
    if view.is_ion() {
        return format!(
            "This is an ion of {}. An ion is an atom that has a net electrical charge because \
             its number of electrons does not equal its number of protons.",
            view.name()
        );
    }
    view.base.description.clone()
}

fn ion_charge_line(view: &DerivedElementView) -> Option<IonChargeLine> {
    let protons = view.counts.protons;
    if !view.is_ion() || protons == 0 || protons > MAX_KNOWN_ATOMIC_NUMBER {
        return None;
    }
    Some(IonChargeLine {
        charge: format_ion_charge(view.charge),
        detail: format!("({} Protons, {} Electrons)", protons, view.counts.electrons),
    })
}

fn core_stability_line(view: &DerivedElementView) -> Option<CoreStabilityLine> {
    let protons = view.counts.protons;
    let neutral_isotope = view.is_isotope && !view.is_ion();
    if protons == 0 || !(neutral_isotope || protons > MAX_KNOWN_ATOMIC_NUMBER) {
        return None;
    }
    Some(CoreStabilityLine {
        label: view.stability.label.to_string(),
        is_stable: view.stability.class == StabilityClass::Stable,
        shows_island_link: view.stability.class.is_stability_region(),
    })
}

fn most_common_isotope_line(view: &DerivedElementView) -> Option<IsotopeLine> {
    if !view.is_isotope || view.is_ion() || view.is_placeholder() {
        return None;
    }
    let mass_number = u64::from(view.counts.protons) + u64::from(view.default_neutrons);
    Some(IsotopeLine {
        isotope: format!("{}-{}", view.name(), mass_number),
        detail: format!("({} Neutrons)", view.default_neutrons),
    })
}

fn property_grid(view: &DerivedElementView) -> Vec<PanelProperty> {
    if view.is_custom() || view.is_placeholder() {
        return Vec::new();
    }
    let base = &view.base;
    let group = if base.has_group() {
        base.group.to_string()
    } else {
        "N/A".to_string()
    };

    vec![
        PanelProperty {
            label: "ATOMIC NO.",
            value: view.counts.protons.to_string(),
        },
        PanelProperty {
            label: "ATOMIC MASS",
            value: format_value_with_unit(Some(view.atomic_weight), "u"),
        },
        PanelProperty {
            label: "GROUP",
            value: group,
        },
        PanelProperty {
            label: "PERIOD",
            value: base.period.to_string(),
        },
        PanelProperty {
            label: "E. CONFIGURATION",
            value: view.electron_configuration.clone(),
        },
        PanelProperty {
            label: "STATE (STP)",
            value: base.state_at_stp.to_string(),
        },
        PanelProperty {
            label: "MELTING PT.",
            value: format_value_with_unit(
                base.phase_transition_kelvin(PhaseTransitionKind::Melting),
                "K",
            ),
        },
        PanelProperty {
            label: "BOILING PT.",
            value: format_value_with_unit(
                base.phase_transition_kelvin(PhaseTransitionKind::Boiling),
                "K",
            ),
        },
    ]
}
