//! Grid neighbourhood enumeration.
//!
//! A grid round looks at every combination of {-1, 0, +1} steps across the N
//! parameters. Instead of materialising the `3^N` tuples we count an index
//! through `0..3^N` and read it as an N-digit base-3 number:
//!
//! - coordinate 0 is the most significant digit
//! - digit `d` maps to the offset `d - 1`
//!
//! Index 0 is therefore the all-(-1) tuple, the middle index is the "hold"
//! tuple, and increasing indices walk the tuples in lexicographic order. That
//! order is what the grid driver's tie-break relies on.

/// Number of candidates in one grid round.
pub fn candidate_count(n: usize) -> usize {
    (0..n).fold(1usize, |acc, _| acc.saturating_mul(3))
}

/// Index of the all-zero (no change) tuple.
pub(crate) fn hold_index(n: usize) -> usize {
    (candidate_count(n) - 1) / 2
}

/// Write the candidate `center + tuple(index) * distance` into `out`.
///
/// # Panics
/// Panics if `out` is shorter than `center`. Callers size the buffer once per
/// fitting call.
#[inline]
pub fn fill_candidate(center: &[f64], index: usize, distance: f64, out: &mut [f64]) {
    let mut rest = index;
    for i in (0..center.len()).rev() {
        let digit = rest % 3;
        rest /= 3;
        out[i] = center[i] + (digit as f64 - 1.0) * distance;
    }
}

/// Decode `index` into its offset tuple.
#[cfg(test)]
fn offset_tuple(n: usize, index: usize) -> Vec<i8> {
    let mut tuple = vec![0i8; n];
    let mut rest = index;
    for slot in tuple.iter_mut().rev() {
        *slot = (rest % 3) as i8 - 1;
        rest /= 3;
    }
    tuple
}
