//! Exact on-count for a sequence of toggle instructions.
//!
//! The [`VolumeEngine`] never enumerates lattice points. Instead it keeps an
//! append-only ledger of signed regions whose signed volume sum always equals
//! the number of points currently on (inclusion–exclusion):
//!
//! 1. For every entry already in the ledger that the incoming region overlaps,
//!    append the overlap with the opposite sign. This cancels whatever the
//!    ledger previously said about that overlap.
//! 2. If the instruction turns its region on, append the whole region with a
//!    positive sign. An `off` instruction appends nothing further.
//!
//! Step 1 only visits entries that existed before the call, so an instruction
//! never intersects its own corrections.
//!
//! # Complexity
//!
//! Each instruction costs one intersection test per existing entry. The ledger
//! grows by at most `k + 1` entries for a ledger of `k`, so `n` heavily
//! overlapping instructions need `O(n^2)` work and memory in the worst case.
//! The cost is independent of coordinate magnitude.
//!
//! # Module Structure
//!
//! - [`ledger`] - Signed ledger entries
//! - [`crate::grid`] - Dense-grid reference counter used to cross-check results

pub mod ledger;

#[cfg(test)]
mod tests;

use crate::geometry::Region;
use crate::instruction::Instruction;
use crate::numeric::Volume;

use ledger::{LedgerEntry, Sign};

/// Inclusion–exclusion ledger over toggle instructions.
///
/// Instructions must be applied in their intended order; each call depends on
/// everything recorded before it.
///
/// # Examples
///
/// ```
/// use lattice_toggle::engine::VolumeEngine;
/// use lattice_toggle::geometry::Region;
/// use lattice_toggle::instruction::Instruction;
///
/// let mut engine = VolumeEngine::new();
/// engine.apply(&Instruction::on(Region::cube(10, 12)));
/// engine.apply(&Instruction::on(Region::cube(11, 13)));
/// assert_eq!(engine.total_on(), 46);
///
/// engine.apply(&Instruction::off(Region::cube(9, 11)));
/// assert_eq!(engine.total_on(), 38);
/// ```
#[derive(Debug, Clone, Default)]
pub struct VolumeEngine {
    ledger: Vec<LedgerEntry>,
}

impl VolumeEngine {
    /// Creates an engine with an empty ledger (nothing is on).
    pub fn new() -> Self {
        Self { ledger: Vec::new() }
    }

    /// Applies one instruction on top of all previously applied ones.
    pub fn apply(&mut self, instruction: &Instruction) {
        let region = instruction.region();
        let snapshot = self.ledger.len();

        self.append_corrections(snapshot, &region);
        let corrections = self.ledger.len() - snapshot;

        if instruction.state().is_on() {
            self.ledger.push(LedgerEntry::new(Sign::Positive, region));
        }

        log::trace!(
            "applied `{}`: {} corrective entries, ledger size {}",
            instruction,
            corrections,
            self.ledger.len()
        );
    }

    #[cfg(not(feature = "parallel"))]
    fn append_corrections(&mut self, snapshot: usize, region: &Region) {
        for idx in 0..snapshot {
            if let Some(correction) = self.ledger[idx].correction(region) {
                self.ledger.push(correction);
            }
        }
    }

    #[cfg(feature = "parallel")]
    fn append_corrections(&mut self, snapshot: usize, region: &Region) {
        use rayon::prelude::*;

        // Collecting an indexed parallel iterator keeps snapshot order, so the
        // ledger matches the sequential build entry for entry.
        let corrections: Vec<LedgerEntry> = self.ledger[..snapshot]
            .par_iter()
            .filter_map(|entry| entry.correction(region))
            .collect();
        self.ledger.extend(corrections);
    }

    /// Number of lattice points currently on.
    pub fn total_on(&self) -> Volume {
        let total: Volume = self.ledger.iter().map(LedgerEntry::signed_volume).sum();
        debug_assert!(total >= 0, "ledger sum went negative: {total}");
        total
    }

    /// The recorded entries, in insertion order.
    pub fn ledger(&self) -> &[LedgerEntry] {
        &self.ledger
    }

    /// Number of ledger entries.
    pub fn len(&self) -> usize {
        self.ledger.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ledger.is_empty()
    }
}

impl Extend<Instruction> for VolumeEngine {
    fn extend<I: IntoIterator<Item = Instruction>>(&mut self, iter: I) {
        for instruction in iter {
            self.apply(&instruction);
        }
    }
}

impl<'a> Extend<&'a Instruction> for VolumeEngine {
    fn extend<I: IntoIterator<Item = &'a Instruction>>(&mut self, iter: I) {
        for instruction in iter {
            self.apply(instruction);
        }
    }
}

impl FromIterator<Instruction> for VolumeEngine {
    fn from_iter<I: IntoIterator<Item = Instruction>>(iter: I) -> Self {
        let mut engine = VolumeEngine::new();
        engine.extend(iter);
        engine
    }
}

/// Folds `instructions` through a fresh engine and returns the final on-count.
pub fn compute_on_count(instructions: &[Instruction]) -> Volume {
    let mut engine = VolumeEngine::new();
    engine.extend(instructions);
    let total = engine.total_on();
    log::debug!(
        "{} instructions folded into {} ledger entries: {} points on",
        instructions.len(),
        engine.len(),
        total
    );
    total
}

/// Like [`compute_on_count`], but only considers instructions whose region
/// lies entirely inside `window`.
///
/// [`Region::INIT_WINDOW`] is the window used by the restricted initialization
/// procedure.
pub fn compute_on_count_within(instructions: &[Instruction], window: &Region) -> Volume {
    let selected: Vec<Instruction> = instructions
        .iter()
        .filter(|instruction| window.contains_region(&instruction.region()))
        .copied()
        .collect();
    log::debug!(
        "{} of {} instructions lie within {}",
        selected.len(),
        instructions.len(),
        window
    );
    compute_on_count(&selected)
}
