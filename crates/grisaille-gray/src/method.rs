//! Gray method selection
//!
//! The reduction strategy is a closed enum, matched exhaustively by
//! the engine. Strings exist only at the configuration boundary:
//! [`GrayMethod::from_str`] maps the externally visible selector names
//! onto the enum, and anything unrecognized is rejected before a
//! single pixel is read.

use crate::error::GrayError;
use std::str::FromStr;

/// Per-pixel reduction strategy for RGB-to-gray conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrayMethod {
    /// Truncating mean of the three channels
    Average,
    /// The strictly largest channel; ties resolve to red (see
    /// [`crate::reduce_rgb`])
    Highest,
    /// Truncating mean of the two largest channels
    UpperAverage,
    /// Truncating mean of the largest and smallest channels. The
    /// middle value is excluded, despite the name.
    MiddleAverage,
}

impl GrayMethod {
    /// Every method, in declaration order.
    pub const ALL: [GrayMethod; 4] = [
        GrayMethod::Average,
        GrayMethod::Highest,
        GrayMethod::UpperAverage,
        GrayMethod::MiddleAverage,
    ];

    /// Get the canonical selector name for this method.
    pub fn name(self) -> &'static str {
        match self {
            GrayMethod::Average => "average",
            GrayMethod::Highest => "highest",
            GrayMethod::UpperAverage => "upper_average",
            GrayMethod::MiddleAverage => "middle_average",
        }
    }
}

impl FromStr for GrayMethod {
    type Err = GrayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "average" => Ok(GrayMethod::Average),
            "highest" => Ok(GrayMethod::Highest),
            "upper_average" => Ok(GrayMethod::UpperAverage),
            "middle_average" => Ok(GrayMethod::MiddleAverage),
            _ => Err(GrayError::UnknownMethod(s.to_string())),
        }
    }
}

impl std::fmt::Display for GrayMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
