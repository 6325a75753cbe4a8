//! Optional device location, attached to a workout only when the user
//! opts in. Any failure here is swallowed: the workout is saved without it.

use crate::models::GeoPoint;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
    Undetermined,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LocationError {
    #[error("location unavailable")]
    Unavailable,
    #[error("invalid coordinates: {0}, {1}")]
    InvalidCoordinates(f64, f64),
}

pub trait LocationProvider {
    fn request_permission(&mut self) -> PermissionStatus;
    fn current_position(&mut self) -> Result<GeoPoint, LocationError>;
}

/// Ask for permission, then take a single reading.
pub fn try_locate(provider: &mut dyn LocationProvider) -> Option<GeoPoint> {
    let status = provider.request_permission();
    if status != PermissionStatus::Granted {
        debug!(?status, "location permission not granted, saving without location");
        return None;
    }
    match provider.current_position() {
        Ok(point) => Some(point),
        Err(e) => {
            warn!(error = %e, "could not read location, saving without location");
            None
        }
    }
}

/// Command-line stand-in for the device GPS: explicit coordinates first,
/// then the configured home location. With neither, permission is denied.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredLocation {
    explicit: Option<(f64, f64)>,
    home: Option<GeoPoint>,
}

impl ConfiguredLocation {
    pub fn new(lat: Option<f64>, lon: Option<f64>, home: Option<GeoPoint>) -> Self {
        let explicit = match (lat, lon) {
            (Some(a), Some(b)) => Some((a, b)),
            _ => None,
        };
        Self { explicit, home }
    }
}

impl LocationProvider for ConfiguredLocation {
    fn request_permission(&mut self) -> PermissionStatus {
        if self.explicit.is_some() || self.home.is_some() {
            PermissionStatus::Granted
        } else {
            PermissionStatus::Denied
        }
    }

    fn current_position(&mut self) -> Result<GeoPoint, LocationError> {
        match (self.explicit, self.home) {
            (Some((lat, lon)), _) => {
                GeoPoint::new(lat, lon).ok_or(LocationError::InvalidCoordinates(lat, lon))
            }
            (None, Some(home)) => Ok(home),
            (None, None) => Err(LocationError::Unavailable),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_coordinates_win() {
        let home = GeoPoint::new(1.0, 2.0);
        let mut p = ConfiguredLocation::new(Some(45.0), Some(9.0), home);
        assert_eq!(try_locate(&mut p), GeoPoint::new(45.0, 9.0));
    }

    #[test]
    fn falls_back_to_home() {
        let home = GeoPoint::new(1.0, 2.0);
        let mut p = ConfiguredLocation::new(Some(45.0), None, home);
        assert_eq!(try_locate(&mut p), home);
    }

    #[test]
    fn nothing_configured_means_denied() {
        let mut p = ConfiguredLocation::default();
        assert_eq!(p.request_permission(), PermissionStatus::Denied);
        assert_eq!(try_locate(&mut p), None);
    }

    #[test]
    fn invalid_reading_is_ignored() {
        let mut p = ConfiguredLocation::new(Some(123.0), Some(9.0), None);
        assert_eq!(try_locate(&mut p), None);
    }
}
