mod tables;

use crate::prelude::*;

/// Evaluates the segment on either side of a shared boundary, ignoring
/// which of them the inclusivity rule would pick.
pub(crate) fn both_sides(profile: &TypeProfile, index: usize) -> (f64, f64) {
    let left = &profile.segments[index];
    let right = &profile.segments[index + 1];
    let boundary = left.range.high;

    (
        func::inverse(boundary, &left.coefficients),
        func::inverse(boundary, &right.coefficients),
    )
}
