//! Subshell fill order and noble-gas cores used by the configuration calculator.

use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrbitalLetter {
    S,
    P,
    D,
    F,
    G,
}

impl OrbitalLetter {
    pub const fn capacity(self) -> u32 {
        match self {
            Self::S => 2,
            Self::P => 6,
            Self::D => 10,
            Self::F => 14,
            Self::G => 18,
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            Self::S => 's',
            Self::P => 'p',
            Self::D => 'd',
            Self::F => 'f',
            Self::G => 'g',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subshell {
    pub n: u8,
    pub letter: OrbitalLetter,
}

impl Subshell {
    const fn new(n: u8, letter: OrbitalLetter) -> Self {
        Self { n, letter }
    }

    pub const fn capacity(self) -> u32 {
        self.letter.capacity()
    }
}

impl Display for Subshell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.n, self.letter.as_char())
    }
}

use OrbitalLetter::{D, F, G, P, S};

pub(crate) const SUBSHELL_COUNT: usize = 33;
pub(crate) const MAX_PRINCIPAL_QUANTUM_NUMBER: usize = 10;

/// Empirical (Madelung) filling order; not strict (n, l) order.
pub(crate) const FILL_ORDER: [Subshell; SUBSHELL_COUNT] = [
    Subshell::new(1, S),
    Subshell::new(2, S),
    Subshell::new(2, P),
    Subshell::new(3, S),
    Subshell::new(3, P),
    Subshell::new(4, S),
    Subshell::new(3, D),
    Subshell::new(4, P),
    Subshell::new(5, S),
    Subshell::new(4, D),
    Subshell::new(5, P),
    Subshell::new(6, S),
    Subshell::new(4, F),
    Subshell::new(5, D),
    Subshell::new(6, P),
    Subshell::new(7, S),
    Subshell::new(5, F),
    Subshell::new(6, D),
    Subshell::new(7, P),
    Subshell::new(8, S),
    Subshell::new(5, G),
    Subshell::new(6, F),
    Subshell::new(7, D),
    Subshell::new(8, P),
    Subshell::new(9, S),
    Subshell::new(6, G),
    Subshell::new(7, F),
    Subshell::new(8, D),
    Subshell::new(9, P),
    Subshell::new(10, S),
    Subshell::new(7, G),
    Subshell::new(8, F),
    Subshell::new(9, D),
];

pub(crate) const NOBLE_GAS_COUNT: usize = 7;

/// Electron count of each noble-gas core with its bracket abbreviation.
pub(crate) const NOBLE_GAS_CORES: [(u32, &str); NOBLE_GAS_COUNT] = [
    (2, "[He]"),
    (10, "[Ne]"),
    (18, "[Ar]"),
    (36, "[Kr]"),
    (54, "[Xe]"),
    (86, "[Rn]"),
    (118, "[Og]"),
];
