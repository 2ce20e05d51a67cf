use core::ops::{Bound, Range, RangeBounds};

use crate::error::{Error, Result};

/// Resolves a possibly negative position against `len`.
///
/// Negative positions count backward from the end, so `-1` is the last element.
/// Anything outside `[-len, len)` is rejected.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn resolve_index(index: isize, len: usize) -> Result<usize> {
    let absolute = absolute(index, len);
    if (0..len as i128).contains(&absolute) {
        return Ok(absolute as usize);
    }
    Err(Error::OutOfRange {
        index,
        len,
    })
}

/// Resolves a range of possibly negative positions to an absolute, half-open
/// range within `0..len`.
///
/// Both bounds are converted to absolute positions first. A start that
/// resolves past the end is malformed. Otherwise the range is clamped to the
/// list, so the parts that fall outside of it are empty.
pub(crate) fn resolve_range<R>(range: &R, len: usize) -> Result<Range<usize>>
where
    R: RangeBounds<isize>,
{
    let start = match range.start_bound() {
        Bound::Included(&start) => absolute(start, len),
        Bound::Excluded(&start) => absolute(start, len) + 1,
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&end) => absolute(end, len) + 1,
        Bound::Excluded(&end) => absolute(end, len),
        Bound::Unbounded => len as i128,
    };

    if start > end {
        return Err(Error::InvalidArgument {
            name: "range",
            reason: "start resolves past end",
        });
    }

    Ok(clamp(start, len)..clamp(end, len))
}

fn absolute(index: isize, len: usize) -> i128 {
    if index < 0 { index as i128 + len as i128 } else { index as i128 }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp(position: i128, len: usize) -> usize {
    position.clamp(0, len as i128) as usize
}
