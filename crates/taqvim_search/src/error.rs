//! Error types for solar-longitude searches.

use std::error::Error;
use std::fmt::{Display, Formatter};

use taqvim_time::FixedDate;

/// Errors from equinox / solstice search.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// Invalid search configuration.
    InvalidConfig(&'static str),
    /// Day-by-day refinement hit its cap without reaching the target.
    NoConvergence {
        target_deg: f64,
        start: FixedDate,
        steps: u32,
    },
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::NoConvergence {
                target_deg,
                start,
                steps,
            } => write!(
                f,
                "no convergence: solar longitude {target_deg} deg not reached within {steps} days of fixed date {start}"
            ),
        }
    }
}

impl Error for SearchError {}
