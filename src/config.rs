use crate::{
    error::{MetroError, Result},
    route::EdgeKind,
};

/// Minutes charged per edge kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteConfig {
    pub ride_minutes: f64,
    pub transfer_minutes: f64,
}

impl RouteConfig {
    /// Weights must be finite and non-negative for the search to stay exact.
    pub fn new(ride_minutes: f64, transfer_minutes: f64) -> Result<Self> {
        for (what, minutes) in [("ride", ride_minutes), ("transfer", transfer_minutes)] {
            if !minutes.is_finite() || minutes < 0.0 {
                return Err(MetroError::InvalidArgument(format!(
                    "{what} minutes must be finite and non-negative, got {minutes}"
                )));
            }
        }

        Ok(Self {
            ride_minutes,
            transfer_minutes,
        })
    }

    pub fn weight(&self, kind: EdgeKind) -> f64 {
        match kind {
            EdgeKind::Ride => self.ride_minutes,
            EdgeKind::Transfer => self.transfer_minutes,
        }
    }
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            ride_minutes: 2.5,
            transfer_minutes: 3.5,
        }
    }
}
