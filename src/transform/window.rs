//! Windowed filters over value sequences.
//!
//! Boundary convention: positions whose window extends past either end of
//! the sequence read reflected samples (half-sample symmetric, the edge
//! sample is repeated): `d c b a | a b c d | d c b a`.
//!
//! A window of size `w` at position `i` covers `i - w/2 ..= i - w/2 + w - 1`,
//! so even windows reach one sample further to the left than to the right.

use crate::utils::stats::upper_median;
use std::cmp::Ordering;

/// Map a possibly out-of-range position onto the sequence by reflection.
///
/// Offsets further than one sequence length away keep reflecting, so any
/// signed position resolves to a valid index when `len > 0`.
pub fn reflect_index(position: isize, len: usize) -> usize {
    let n = len as isize;
    let m = position.rem_euclid(2 * n);
    if m < n {
        m as usize
    } else {
        (2 * n - 1 - m) as usize
    }
}

/// Centered moving-median filter with reflected boundaries.
///
/// Returns a sequence of the same length as `series`. A `window` of 0 or 1
/// returns the input unchanged. Windows wider than the series keep
/// reflecting, so a window may cover the series several times over. For
/// even windows the upper of the two middle values is used, so every output
/// is a value of the input.
pub fn median_filter(series: &[f64], window: usize) -> Vec<f64> {
    let n = series.len();
    if n == 0 || window <= 1 {
        return series.to_vec();
    }

    // The reflected extension repeats every 2n positions and each repetition
    // holds every sample twice. A window therefore splits into `cycles` full
    // repetitions plus `partial` contiguous reflected positions.
    let period = 2 * n;
    let cycles = window / period;
    let partial = window % period;
    let rank = window / 2;

    let sorted_series = if cycles > 0 {
        let mut sorted = series.to_vec();
        sorted.sort_by(compare);
        sorted
    } else {
        Vec::new()
    };

    let mut buffer = Vec::with_capacity(partial);
    let mut result = Vec::with_capacity(n);

    for i in 0..n {
        let start = (i as i128 - rank as i128).rem_euclid(period as i128) as isize;
        buffer.clear();
        buffer.extend((0..partial as isize).map(|k| series[reflect_index(start + k, n)]));

        let median = if cycles == 0 {
            upper_median(&mut buffer)
        } else {
            buffer.sort_by(compare);
            select_weighted(&sorted_series, 2 * cycles, &buffer, rank)
        };
        result.push(median);
    }

    result
}

fn compare(a: &f64, b: &f64) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

/// Element of the given rank in the union of `repeated` (each element counted
/// `copies` times) and `extra`. Both slices must be sorted.
fn select_weighted(repeated: &[f64], copies: usize, extra: &[f64], mut rank: usize) -> f64 {
    let (mut a, mut b) = (0, 0);
    loop {
        let from_repeated = match (repeated.get(a), extra.get(b)) {
            (Some(x), Some(y)) => x <= y,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => return f64::NAN,
        };

        if from_repeated {
            if rank < copies {
                return repeated[a];
            }
            rank -= copies;
            a += 1;
        } else {
            if rank == 0 {
                return extra[b];
            }
            rank -= 1;
            b += 1;
        }
    }
}
