use std::fmt;
use std::str::FromStr;
use serde::{Serialize,Deserialize};

pub mod plot;

/**
 * Projection used when plotting trajectories. `Xyz` plots each axis over time.
 */
#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlotMode {
    Xy,
    Xz,
    Yx,
    Yz,
    Zx,
    Zy,
    Xyz
}

impl PlotMode {
    /// Indices of the horizontal and vertical axis, `None` for `Xyz`
    pub fn axes(&self) -> Option<(usize,usize)> {
        match self {
            PlotMode::Xy => Some((0,1)),
            PlotMode::Xz => Some((0,2)),
            PlotMode::Yx => Some((1,0)),
            PlotMode::Yz => Some((1,2)),
            PlotMode::Zx => Some((2,0)),
            PlotMode::Zy => Some((2,1)),
            PlotMode::Xyz => None
        }
    }
}

impl Default for PlotMode {
    fn default() -> Self {
        PlotMode::Xy
    }
}

impl fmt::Display for PlotMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            PlotMode::Xy => "xy",
            PlotMode::Xz => "xz",
            PlotMode::Yx => "yx",
            PlotMode::Yz => "yz",
            PlotMode::Zx => "zx",
            PlotMode::Zy => "zy",
            PlotMode::Xyz => "xyz"
        };
        write!(f, "{}", name)
    }
}

impl FromStr for PlotMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "xy" => Ok(PlotMode::Xy),
            "xz" => Ok(PlotMode::Xz),
            "yx" => Ok(PlotMode::Yx),
            "yz" => Ok(PlotMode::Yz),
            "zx" => Ok(PlotMode::Zx),
            "zy" => Ok(PlotMode::Zy),
            "xyz" => Ok(PlotMode::Xyz),
            other => Err(format!("unknown plot mode: {}", other))
        }
    }
}

pub fn axis_name(axis: usize) -> &'static str {
    match axis {
        0 => "x",
        1 => "y",
        _ => "z"
    }
}
