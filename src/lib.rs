pub mod io;
pub mod numerics;
pub mod trajectory;
pub mod evaluation;
pub mod visualize;
pub mod config;

macro_rules! define_float {
    ($f:tt) => {
        pub use std::$f as float;
        pub type Float = $f;
    }
}

define_float!(f64);

/**
 * Default maximum time difference in seconds when associating reference and estimate poses
 */
pub const MAX_TIME_DIFFERENCE: Float = 0.1;
