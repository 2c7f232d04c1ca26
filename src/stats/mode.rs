use std::collections::HashMap;

use crate::stats::types::ModeSet;

/// Values occurring most often in `data`.
///
/// Ties are reported in the order each value first reaches the running
/// maximum during a single left-to-right scan, so `[1, 1, 2, 2, 3]` yields
/// `[1, 2]` and `[2, 2, 1, 1]` yields `[2, 1]`. Empty input yields an empty
/// vector.
pub fn mode(data: &[i32]) -> Vec<i32> {
    mode_with_frequency(data).values
}

/// Like [`mode`], also reporting the count the mode values reached.
pub fn mode_with_frequency(data: &[i32]) -> ModeSet {
    let mut counts: HashMap<i32, usize> = HashMap::new();
    let mut max_count = 0;
    let mut values = Vec::new();

    for &x in data {
        let count = counts.entry(x).or_insert(0);
        *count += 1;

        if *count > max_count {
            max_count = *count;
            values.clear();
            values.push(x);
        } else if *count == max_count {
            values.push(x);
        }
    }

    log::debug!(
        "mode over {} values: {:?} x{} ({} distinct)",
        data.len(),
        values,
        max_count,
        counts.len()
    );

    ModeSet {
        values,
        frequency: max_count,
    }
}

#[cfg(test)]
#[path = "mode_tests.rs"]
mod mode_tests;
