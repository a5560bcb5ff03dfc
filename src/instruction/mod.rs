//! Reboot steps: a target [`State`] applied to every lattice point of a
//! [`Region`].

mod error;
mod parse;

pub use error::ParseError;
pub use parse::parse_instructions;

use std::fmt::Display;

use crate::geometry::Region;

/// Target state of a toggle instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum State {
    On,
    Off,
}

impl State {
    pub const fn is_on(self) -> bool {
        matches!(self, State::On)
    }
}

impl Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            State::On => "on",
            State::Off => "off",
        })
    }
}

/// Sets every point of `region` to `state`, regardless of its prior state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instruction {
    state: State,
    region: Region,
}

impl Instruction {
    pub const fn new(state: State, region: Region) -> Self {
        Self { state, region }
    }

    /// Shorthand for `Instruction::new(State::On, region)`.
    pub const fn on(region: Region) -> Self {
        Self::new(State::On, region)
    }

    /// Shorthand for `Instruction::new(State::Off, region)`.
    pub const fn off(region: Region) -> Self {
        Self::new(State::Off, region)
    }

    pub const fn state(&self) -> State {
        self.state
    }

    pub const fn region(&self) -> Region {
        self.region
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.state, self.region)
    }
}
