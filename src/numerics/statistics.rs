use std::fmt;
use serde::{Serialize,Deserialize};
use crate::Float;
use crate::numerics::median;

/**
 * Summary of an error array
 */
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct Statistics {
    pub rmse: Float,
    pub mean: Float,
    pub median: Float,
    pub std: Float,
    pub min: Float,
    pub max: Float,
    pub sse: Float
}

impl Statistics {
    /// `None` for empty input
    pub fn from_errors(errors: &[Float]) -> Option<Statistics> {
        let n = errors.len() as Float;
        let median = median(errors)?;
        let sse = errors.iter().fold(0.0, |acc, e| acc + e*e);
        let mean = errors.iter().sum::<Float>()/n;
        let variance = errors.iter().fold(0.0, |acc, e| acc + (e-mean).powi(2))/n;
        let min = errors.iter().cloned().fold(Float::INFINITY, Float::min);
        let max = errors.iter().cloned().fold(Float::NEG_INFINITY, Float::max);

        Some(Statistics {
            rmse: (sse/n).sqrt(),
            mean,
            median,
            std: variance.sqrt(),
            min,
            max,
            sse
        })
    }

    pub fn named(&self) -> [(&'static str, Float); 7] {
        [("max", self.max),
         ("mean", self.mean),
         ("median", self.median),
         ("min", self.min),
         ("rmse", self.rmse),
         ("sse", self.sse),
         ("std", self.std)]
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let named = self.named();
        for (idx, (name, value)) in named.iter().enumerate() {
            write!(f, "{:>10}\t{:.6}", name, value)?;
            if idx < named.len()-1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
