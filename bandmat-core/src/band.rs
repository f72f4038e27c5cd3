//! Diagonal and bandwidth value types
//!
//! A [`Band`] names one diagonal by its offset `col - row`. [`Bandwidths`]
//! carries the lower/upper extent of the storable band and is the parameter
//! every factory accepts, either as two counts or as an inclusive diagonal
//! range `a..=b` (meaning `lower = -a`, `upper = b`).

use core::ops::RangeInclusive;
use core::str::FromStr;

use crate::validation::parsing::parse_band_range;
use crate::BandedError;

/// One diagonal of a matrix: 0 is the main diagonal, positive values are
/// super-diagonals and negative values are sub-diagonals
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Band(pub isize);

impl Band {
    /// Main diagonal
    pub const MAIN: Band = Band(0);

    /// Diagonal offset `col - row`
    #[inline]
    pub const fn index(self) -> isize {
        self.0
    }

    /// Diagonal that holds the logical position `(row, col)`
    #[inline]
    pub const fn of(row: usize, col: usize) -> Self {
        Band(col as isize - row as isize)
    }
}

impl From<isize> for Band {
    fn from(i: isize) -> Self {
        Band(i)
    }
}

/// Lower and upper bandwidths of a banded matrix
///
/// Position `(k, j)` is in band iff `-lower <= j - k <= upper`. Both values are
/// signed so that bands not touching the main diagonal can be described; the
/// physical buffer height is `max(lower + upper + 1, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bandwidths {
    pub lower: isize,
    pub upper: isize,
}

impl Bandwidths {
    pub const fn new(lower: isize, upper: isize) -> Self {
        Self { lower, upper }
    }

    /// Bandwidths of a diagonal matrix
    pub const fn diagonal() -> Self {
        Self::new(0, 0)
    }

    /// Height of the physical buffer, zero for the degenerate empty band
    #[inline]
    pub const fn storage_rows(&self) -> usize {
        let rows = self.lower + self.upper + 1;
        if rows < 0 {
            0
        } else {
            rows as usize
        }
    }

    /// True when no diagonal can be stored at all
    #[inline]
    pub const fn is_empty_band(&self) -> bool {
        -self.lower > self.upper
    }

    /// True when both bandwidths are non-negative
    #[inline]
    pub const fn is_nonnegative(&self) -> bool {
        self.lower >= 0 && self.upper >= 0
    }

    /// Whether diagonal `band` lies inside the storable band
    #[inline]
    pub const fn contains(&self, band: Band) -> bool {
        -self.lower <= band.0 && band.0 <= self.upper
    }

    /// Whether logical position `(row, col)` lies inside the storable band
    #[inline]
    pub const fn contains_position(&self, row: usize, col: usize) -> bool {
        self.contains(Band::of(row, col))
    }

    /// Bandwidths of the transposed matrix
    #[inline]
    pub const fn transposed(&self) -> Self {
        Self::new(self.upper, self.lower)
    }

    /// Elementwise minimum, the band of a Hadamard product
    pub fn min(self, other: Self) -> Self {
        Self::new(self.lower.min(other.lower), self.upper.min(other.upper))
    }

    /// Elementwise maximum, the band of a sum
    pub fn max(self, other: Self) -> Self {
        Self::new(self.lower.max(other.lower), self.upper.max(other.upper))
    }

    /// Bandwidths with negative values raised to zero
    pub fn clamped(self) -> Self {
        Self::new(self.lower.max(0), self.upper.max(0))
    }

    /// Bandwidths seen by a sub-view whose row range starts `shift` rows after
    /// its column range
    #[inline]
    pub const fn shifted(&self, shift: isize) -> Self {
        Self::new(self.lower - shift, self.upper + shift)
    }

    /// Diagonal range `-lower..=upper`
    pub fn diagonals(&self) -> RangeInclusive<isize> {
        -self.lower..=self.upper
    }
}

impl From<(usize, usize)> for Bandwidths {
    fn from((lower, upper): (usize, usize)) -> Self {
        Self::new(lower as isize, upper as isize)
    }
}

impl From<(isize, isize)> for Bandwidths {
    fn from((lower, upper): (isize, isize)) -> Self {
        Self::new(lower, upper)
    }
}

impl From<(i32, i32)> for Bandwidths {
    fn from((lower, upper): (i32, i32)) -> Self {
        Self::new(lower as isize, upper as isize)
    }
}

/// `a..=b` stores diagonals `a` through `b`, so `lower = -a` and `upper = b`
impl From<RangeInclusive<isize>> for Bandwidths {
    fn from(range: RangeInclusive<isize>) -> Self {
        Self::new(-*range.start(), *range.end())
    }
}

impl From<RangeInclusive<i32>> for Bandwidths {
    fn from(range: RangeInclusive<i32>) -> Self {
        Self::new(-(*range.start() as isize), *range.end() as isize)
    }
}

impl FromStr for Bandwidths {
    type Err = BandedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_band_range(s).map(Bandwidths::from)
    }
}

impl core::fmt::Display for Bandwidths {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.lower, self.upper)
    }
}
