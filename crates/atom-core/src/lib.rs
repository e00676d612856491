//! Particle-count derivations for an interactive atom model: electron
//! configurations, isotope and ion classification, nuclear stability and the
//! element information panel.

pub mod common;
pub mod domain;
pub mod modules;
