//! Parsing utilities for textual band ranges
//!
//! This module provides pure parsing functions for the `"a:b"` notation
//! naming diagonals `a` through `b`.

use crate::BandedError;
use core::ops::RangeInclusive;

/// Parse a band range string in the format "start:end"
///
/// Both ends are signed diagonal offsets and `start <= end` is required.
/// Returns the inclusive diagonal range.
pub fn parse_band_range(range_str: &str) -> Result<RangeInclusive<isize>, BandedError> {
    let invalid = || BandedError::InvalidRange {
        input: range_str.to_string(),
    };

    let trimmed = range_str.trim();
    let colon_pos = trimmed.find(':').ok_or_else(invalid)?;

    let start = parse_isize(&trimmed[..colon_pos]).ok_or_else(invalid)?;
    let end = parse_isize(&trimmed[colon_pos + 1..]).ok_or_else(invalid)?;

    if start > end {
        return Err(invalid());
    }

    Ok(start..=end)
}

/// Parse an optionally signed decimal integer
fn parse_isize(s: &str) -> Option<isize> {
    s.trim().parse().ok()
}
