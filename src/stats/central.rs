use crate::error::StatsError;

/// Arithmetic mean of `data`.
///
/// Returns `0.0` for an empty slice. That value is a "no data" sentinel and
/// cannot be told apart from a genuine zero mean without checking the length.
pub fn mean(data: &[i32]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }

    let sum: i64 = data.iter().map(|&x| i64::from(x)).sum();
    sum as f64 / data.len() as f64
}

/// Median of `data`, or `0.0` for an empty slice.
///
/// If the scratch buffer for sorting cannot be allocated the failure is
/// logged and the `0.0` sentinel is returned.
pub fn median(data: &[i32]) -> f64 {
    match try_median(data) {
        Ok(value) => value,
        Err(e) => {
            log::error!("{}", e);
            0.0
        }
    }
}

/// Median of `data`, surfacing scratch allocation failure as an error.
pub fn try_median(data: &[i32]) -> Result<f64, StatsError> {
    if data.is_empty() {
        return Ok(0.0);
    }

    let sorted = sorted_copy(data)?;
    let n = sorted.len();
    let mid = n / 2;

    let value = if n % 2 == 0 {
        (f64::from(sorted[mid - 1]) + f64::from(sorted[mid])) / 2.0
    } else {
        f64::from(sorted[mid])
    };

    log::debug!("median of {} values: {}", n, value);
    Ok(value)
}

fn sorted_copy(data: &[i32]) -> Result<Vec<i32>, StatsError> {
    let mut scratch = Vec::new();
    scratch
        .try_reserve_exact(data.len())
        .map_err(|_| StatsError::AllocationFailed { len: data.len() })?;
    scratch.extend_from_slice(data);
    scratch.sort_unstable();
    Ok(scratch)
}

#[cfg(test)]
#[path = "central_tests.rs"]
mod central_tests;
