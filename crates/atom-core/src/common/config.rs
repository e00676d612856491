//! Electron configuration calculator.
//!
//! Electrons are placed subshell by subshell in the fixed fill order from
//! `config_data`, capped at each subshell's capacity. The result is a
//! simplification for display, not a physical model: exotic fills are not
//! corrected, and shells are reported as occupied principal shells only.
//!
//! The fill table holds [`fill_capacity`] electrons. Counts above that are
//! not placed; [`ElectronConfiguration::unplaced`] reports the remainder.

use super::config_data::{
    FILL_ORDER, MAX_PRINCIPAL_QUANTUM_NUMBER, NOBLE_GAS_CORES, Subshell,
};
use super::constants::NO_ELECTRONS_TEXT;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectronConfiguration {
    pub shells: Vec<u32>,
    pub configuration_text: String,
    unplaced: u32,
}

impl ElectronConfiguration {
    /// Electrons left over once the fill table was exhausted.
    pub const fn unplaced(&self) -> u32 {
        self.unplaced
    }

    pub fn placed(&self) -> u32 {
        self.shells.iter().sum()
    }

    pub fn term_count(&self) -> usize {
        term_count(&self.configuration_text)
    }
}

pub fn compute(electron_count: u32) -> ElectronConfiguration {
    if electron_count == 0 {
        return ElectronConfiguration {
            shells: Vec::new(),
            configuration_text: NO_ELECTRONS_TEXT.to_string(),
            unplaced: 0,
        };
    }

    let occupancy = fill_subshells(electron_count);

    let mut shell_totals = [0_u32; MAX_PRINCIPAL_QUANTUM_NUMBER];
    for (subshell, count) in &occupancy {
        shell_totals[usize::from(subshell.n) - 1] += count;
    }
    let placed: u32 = shell_totals.iter().sum();

    ElectronConfiguration {
        shells: shell_totals.into_iter().filter(|total| *total > 0).collect(),
        configuration_text: configuration_text(&occupancy, noble_gas_core(electron_count)),
        unplaced: electron_count - placed,
    }
}

/// Total electrons the fill table can hold.
pub fn fill_capacity() -> u32 {
    FILL_ORDER.iter().map(|subshell| subshell.capacity()).sum()
}

pub fn fill_order() -> &'static [Subshell] {
    &FILL_ORDER
}

/// Largest noble-gas core strictly below `electron_count`.
pub fn noble_gas_core(electron_count: u32) -> Option<(u32, &'static str)> {
    NOBLE_GAS_CORES
        .iter()
        .rev()
        .find(|(core, _)| electron_count > *core)
        .copied()
}

/// Per-subshell occupancy in fill order, stopping at the last occupied subshell.
pub fn subshell_occupancy(electron_count: u32) -> Vec<(Subshell, u32)> {
    fill_subshells(electron_count)
}

pub fn term_count(configuration_text: &str) -> usize {
    configuration_text.split_whitespace().count()
}

fn fill_subshells(electron_count: u32) -> Vec<(Subshell, u32)> {
    let mut remaining = electron_count;
    let mut occupancy = Vec::new();

    for subshell in FILL_ORDER {
        if remaining == 0 {
            break;
        }
        let placed = remaining.min(subshell.capacity());
        occupancy.push((subshell, placed));
        remaining -= placed;
    }

    occupancy
}

fn configuration_text(occupancy: &[(Subshell, u32)], core: Option<(u32, &'static str)>) -> String {
    let core_electrons = core.map_or(0, |(count, _)| count);

    // Every noble-gas core ends on a completely filled p subshell, so the
    // subshells inside the core are exactly those whose cumulative capacity
    // does not exceed it.
    let mut cumulative_capacity = 0;
    let mut terms = Vec::new();
    for (subshell, count) in occupancy {
        cumulative_capacity += subshell.capacity();
        if cumulative_capacity <= core_electrons {
            continue;
        }
        terms.push(format!("{}{}", subshell, count));
    }

    match core {
        Some((_, abbreviation)) if terms.is_empty() => abbreviation.to_string(),
        Some((_, abbreviation)) => format!("{} {}", abbreviation, terms.join(" ")),
        None => terms.join(" "),
    }
}
