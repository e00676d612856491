//! Owned interactive state: selected element, particle counters and the
//! animation speed slider.

use super::derive::{DerivedElementView, derive};
use super::table::{BaseElementRecord, ElementTable};
use crate::common::constants::{
    DEFAULT_ELEMENT_NAME, PARTICLE_LIMIT, SPEED_SLIDER_DEFAULT, SPEED_SLIDER_MAX,
    SPEED_SLIDER_MIDPOINT, SPEED_SLIDER_MIN,
};
use crate::domain::{ParticleCounts, ParticleKind, Selection};

/// Partial particle update; `None` keeps the current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParticleUpdate {
    pub protons: Option<u32>,
    pub neutrons: Option<u32>,
    pub electrons: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct AtomSession<'t> {
    table: &'t ElementTable,
    selection: Selection,
    speed_slider: u32,
}

impl<'t> AtomSession<'t> {
    /// Starts on the default element, or the first record when the table
    /// lacks it.
    pub fn new(table: &'t ElementTable) -> Self {
        let selection = table
            .by_name(DEFAULT_ELEMENT_NAME)
            .or_else(|| table.first())
            .map(canonical_selection)
            .unwrap_or_else(|| Selection::new(String::new(), ParticleCounts::VACUUM));

        Self {
            table,
            selection,
            speed_slider: SPEED_SLIDER_DEFAULT,
        }
    }

    pub fn table(&self) -> &'t ElementTable {
        self.table
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected_name(&self) -> &str {
        &self.selection.name
    }

    pub const fn counts(&self) -> ParticleCounts {
        self.selection.counts
    }

    pub const fn speed_slider(&self) -> u32 {
        self.speed_slider
    }

    /// Orbital speed factor: `(slider / 50)^2`.
    pub fn speed_multiplier(&self) -> f64 {
        let ratio = f64::from(self.speed_slider) / f64::from(SPEED_SLIDER_MIDPOINT);
        ratio * ratio
    }

    /// Selects a record by exact name. Unknown names leave the state alone.
    pub fn select(&mut self, name: &str) -> bool {
        match self.table.by_name(name) {
            Some(record) => {
                self.selection = canonical_selection(record);
                true
            }
            None => false,
        }
    }

    pub fn select_next(&mut self) {
        if let Some(record) = self.table.next_after(&self.selection.name) {
            self.selection = canonical_selection(record);
        }
    }

    pub fn select_previous(&mut self) {
        if let Some(record) = self.table.previous_before(&self.selection.name) {
            self.selection = canonical_selection(record);
        }
    }

    /// Applies a partial update. The selected name follows the proton count.
    pub fn set_particles(&mut self, update: ParticleUpdate) {
        let current = self.selection.counts;
        let counts = ParticleCounts::new(
            clamp_count(update.protons.unwrap_or(current.protons)),
            clamp_count(update.neutrons.unwrap_or(current.neutrons)),
            clamp_count(update.electrons.unwrap_or(current.electrons)),
        );
        let name = self.table.lookup_protons(counts.protons).record().name.clone();
        self.selection = Selection::new(name, counts);
    }

    pub fn set_count(&mut self, kind: ParticleKind, value: u32) -> u32 {
        let value = clamp_count(value);
        self.set_particles(update_for(kind, value));
        value
    }

    /// Steps one counter by `delta`, saturating at `0` and the particle limit.
    pub fn adjust(&mut self, kind: ParticleKind, delta: i64) -> u32 {
        let current = i64::from(self.selection.counts.get(kind));
        let target = current
            .saturating_add(delta)
            .clamp(0, i64::from(PARTICLE_LIMIT));
        let target = u32::try_from(target).unwrap_or(PARTICLE_LIMIT);
        if target == self.selection.counts.get(kind) {
            return target;
        }
        self.set_count(kind, target)
    }

    pub fn set_speed(&mut self, value: u32) -> u32 {
        self.speed_slider = value.clamp(SPEED_SLIDER_MIN, SPEED_SLIDER_MAX);
        self.speed_slider
    }

    /// Restores the slider and snaps to the heaviest record not heavier than
    /// the current proton count.
    pub fn reset_to_defaults(&mut self) {
        self.speed_slider = SPEED_SLIDER_DEFAULT;
        if let Some(record) = self.table.reset_target(self.selection.counts.protons) {
            self.selection = canonical_selection(record);
        }
    }

    pub fn derive(&self) -> DerivedElementView {
        derive(self.table, &self.selection)
    }
}

fn canonical_selection(record: &BaseElementRecord) -> Selection {
    Selection::new(
        record.name.clone(),
        ParticleCounts::new(record.protons, record.neutrons, record.electrons()),
    )
}

fn clamp_count(value: u32) -> u32 {
    value.min(PARTICLE_LIMIT)
}

fn update_for(kind: ParticleKind, value: u32) -> ParticleUpdate {
    match kind {
        ParticleKind::Proton => ParticleUpdate {
            protons: Some(value),
            ..ParticleUpdate::default()
        },
        ParticleKind::Neutron => ParticleUpdate {
            neutrons: Some(value),
            ..ParticleUpdate::default()
        },
        ParticleKind::Electron => ParticleUpdate {
            electrons: Some(value),
            ..ParticleUpdate::default()
        },
    }
}
