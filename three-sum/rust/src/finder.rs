use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::triplet::{Triplet, Triplets};

/// Finds every distinct combination of three values in `values` that sums to zero.
///
/// Sorts a private copy and sweeps two pointers inward for each distinct anchor,
/// so `values` is left untouched. Sums are computed as `i64`, values near the
/// ends of the `i32` range never wrap into a false match.
///
/// ```
/// use three_sum::find_zero_triplets;
///
/// let triplets = find_zero_triplets(&[-1, 0, 1, 2, -1, -4]);
/// assert_eq!(vec![vec![-1, -1, 2], vec![-1, 0, 1]], triplets.to_nested_vec());
/// ```
pub fn find_zero_triplets(values: &[i32]) -> Triplets {
    let mut results = Triplets::new();

    if values.len() < 3 {
        return results;
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let len = sorted.len();

    for i in 0..len - 2 {
        let anchor = sorted[i];
        if i > 0 && anchor == sorted[i - 1] {
            continue;
        }

        let target = -i64::from(anchor);
        let mut left = i + 1;
        let mut right = len - 1;

        while left < right {
            let sum = i64::from(sorted[left]) + i64::from(sorted[right]);

            match sum.cmp(&target) {
                Ordering::Less => left += 1,
                Ordering::Greater => right -= 1,
                Ordering::Equal => {
                    let triplet = Triplet::from_sorted(anchor, sorted[left], sorted[right]);
                    trace!(%triplet, "found triplet");
                    results.insert(triplet);

                    while left < right && sorted[left] == sorted[left + 1] {
                        left += 1;
                    }
                    while left < right && sorted[right] == sorted[right - 1] {
                        right -= 1;
                    }

                    left += 1;
                    right -= 1;
                }
            }
        }
    }

    debug!(input_len = len, triplets = results.len(), "three-sum complete");
    results
}
