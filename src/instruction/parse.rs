//! Text form of reboot steps.
//!
//! One instruction per line:
//!
//! ```text
//! on x=-20..26,y=-36..17,z=-47..7
//! off x=-48..-32,y=26..41,z=-47..-37
//! ```

use std::str::FromStr;

use super::error::ParseError;
use super::{Instruction, State};
use crate::geometry::{Interval, Region};
use crate::numeric::Coord;

impl FromStr for State {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "on" => Ok(State::On),
            "off" => Ok(State::Off),
            other => Err(ParseError::UnknownState(other.to_string())),
        }
    }
}

impl FromStr for Region {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseError::MalformedRegion(s.to_string());

        let mut axes = s.split(',');
        let (Some(x), Some(y), Some(z), None) = (axes.next(), axes.next(), axes.next(), axes.next())
        else {
            return Err(malformed());
        };

        let x = parse_axis(x, "x=").ok_or_else(malformed)??;
        let y = parse_axis(y, "y=").ok_or_else(malformed)??;
        let z = parse_axis(z, "z=").ok_or_else(malformed)??;
        Ok(Region::new(x, y, z))
    }
}

impl FromStr for Instruction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (state, region) = s
            .split_once(char::is_whitespace)
            .ok_or_else(|| ParseError::MalformedRegion(s.to_string()))?;
        Ok(Instruction::new(state.parse()?, region.trim().parse()?))
    }
}

/// Parses `<label><min>..<max>`.
///
/// Returns `None` when the shape is wrong, and `Some(Err(_))` when the shape is
/// right but a bound is not a valid coordinate or the range is inverted.
fn parse_axis(text: &str, label: &str) -> Option<Result<Interval, ParseError>> {
    let (min, max) = text.strip_prefix(label)?.split_once("..")?;
    Some(parse_bounds(min, max))
}

fn parse_bounds(min: &str, max: &str) -> Result<Interval, ParseError> {
    let min = parse_coord(min)?;
    let max = parse_coord(max)?;
    Ok(Interval::try_new(min, max)?)
}

fn parse_coord(text: &str) -> Result<Coord, ParseError> {
    text.parse().map_err(|source| ParseError::InvalidCoordinate {
        text: text.to_string(),
        source,
    })
}

/// Parses a multi-line listing of reboot steps, in file order.
///
/// Blank lines are skipped. The first failing line is reported with its
/// 1-based line number.
pub fn parse_instructions(text: &str) -> Result<Vec<Instruction>, ParseError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| line.parse::<Instruction>().map_err(|e| e.at_line(idx + 1)))
        .collect()
}
