//! Signed region entries recorded by the [`VolumeEngine`](super::VolumeEngine).

use std::ops::Neg;

use crate::geometry::Region;
use crate::numeric::Volume;

/// Whether a ledger entry adds or removes its volume from the running total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    /// Applies the sign to a non-negative volume.
    pub const fn apply(self, volume: Volume) -> Volume {
        match self {
            Sign::Positive => volume,
            Sign::Negative => -volume,
        }
    }
}

impl Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Sign {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }
}

/// One signed contribution to the inclusion–exclusion sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerEntry {
    sign: Sign,
    region: Region,
}

impl LedgerEntry {
    pub const fn new(sign: Sign, region: Region) -> Self {
        Self { sign, region }
    }

    pub const fn sign(&self) -> Sign {
        self.sign
    }

    pub const fn region(&self) -> Region {
        self.region
    }

    /// This entry's contribution to the on-count.
    pub const fn signed_volume(&self) -> Volume {
        self.sign.apply(self.region.volume())
    }

    /// The entry cancelling this one's contribution over the part of `region`
    /// it covers, or `None` if the two do not overlap.
    pub fn correction(&self, region: &Region) -> Option<LedgerEntry> {
        let overlap = self.region.intersection(region)?;
        Some(LedgerEntry::new(-self.sign, overlap))
    }
}
