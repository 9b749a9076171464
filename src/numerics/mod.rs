use crate::Float;

pub mod pose;
pub mod statistics;
pub mod umeyama;

/**
 * Median of unsorted data. Even counts average the two middle values.
 */
pub fn median(data: &[Float]) -> Option<Float> {
    if data.is_empty() {
        return None;
    }
    let mut sorted_data = data.to_vec();
    sorted_data.sort_unstable_by(|a, b| a.total_cmp(b));
    let middle = sorted_data.len()/2;
    match sorted_data.len() % 2 {
        0 => Some(0.5*(sorted_data[middle-1] + sorted_data[middle])),
        _ => Some(sorted_data[middle])
    }
}

pub fn smallest_value_index(values: &[Float]) -> usize {
    values.iter().enumerate().fold(0, |min_idx, (idx, v)|
        match *v < values[min_idx] {
            true => idx,
            false => min_idx
        }
    )
}
