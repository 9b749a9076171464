use crate::Float;

#[derive(Debug,Clone,Copy)]
pub struct LoadingParameters {
    /// Factor applied to the raw timestamp column to obtain seconds
    pub timestamp_scale: Float
}

impl LoadingParameters {
    /// Ground truth timestamps are stored in nanoseconds
    pub fn nanoseconds() -> LoadingParameters {
        LoadingParameters { timestamp_scale: 1e-9 }
    }

    pub fn seconds() -> LoadingParameters {
        LoadingParameters { timestamp_scale: 1.0 }
    }
}
