use crate::dynamics::state::State;

// ---------------------------------------------------------------------------
// Simulation events
// ---------------------------------------------------------------------------

/// Kinds of simulation events.
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    /// Radial maximum: radius stopped increasing.
    Apoapsis,
    /// Radial minimum: radius stopped decreasing.
    Periapsis,
    /// Radius dropped below the surface; terminates the run.
    Impact,
    Custom(String),
}

/// A discrete event that occurred during propagation.
#[derive(Debug, Clone)]
pub struct SimEvent {
    pub time: f64,
    pub kind: EventKind,
    pub state: State,
}

/// Trait for passive event detectors.
/// Implementations inspect consecutive states and report events.
pub trait EventDetector {
    fn check(&mut self, prev: &State, current: &State) -> Option<EventKind>;
}

/// Detects apsis passages from the sign of the radial velocity.
pub struct ApsisDetector;

impl EventDetector for ApsisDetector {
    fn check(&mut self, prev: &State, current: &State) -> Option<EventKind> {
        let before = prev.radial_speed();
        let after = current.radial_speed();
        if before > 0.0 && after <= 0.0 {
            Some(EventKind::Apoapsis)
        } else if before < 0.0 && after >= 0.0 {
            Some(EventKind::Periapsis)
        } else {
            None
        }
    }
}

/// Detects when altitude crosses a threshold (ascending or descending).
pub struct AltitudeDetector {
    pub altitude: f64,
    pub surface_radius: f64,
    pub ascending: bool,
    fired: bool,
}

impl AltitudeDetector {
    pub fn new(altitude: f64, surface_radius: f64, ascending: bool) -> Self {
        Self {
            altitude,
            surface_radius,
            ascending,
            fired: false,
        }
    }
}

impl EventDetector for AltitudeDetector {
    fn check(&mut self, prev: &State, current: &State) -> Option<EventKind> {
        if self.fired {
            return None;
        }
        let before = prev.altitude(self.surface_radius);
        let after = current.altitude(self.surface_radius);
        let crossed = if self.ascending {
            before < self.altitude && after >= self.altitude
        } else {
            before > self.altitude && after <= self.altitude
        };
        if crossed {
            self.fired = true;
            Some(EventKind::Custom(format!(
                "Altitude {:.0}m ({})",
                self.altitude,
                if self.ascending { "ascending" } else { "descending" }
            )))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector2;

    fn make_state(radius: f64, radial_vel: f64) -> State {
        State::new(
            Vector2::new(radius, 0.0),
            Vector2::new(radial_vel, 7_000.0),
        )
    }

    #[test]
    fn apoapsis_detected() {
        let mut det = ApsisDetector;
        let prev = make_state(7.0e6, 50.0);
        let curr = make_state(7.000_01e6, -1.0);
        assert_eq!(det.check(&prev, &curr), Some(EventKind::Apoapsis));
    }

    #[test]
    fn periapsis_detected() {
        let mut det = ApsisDetector;
        let prev = make_state(6.8e6, -50.0);
        let curr = make_state(6.8e6, 1.0);
        assert_eq!(det.check(&prev, &curr), Some(EventKind::Periapsis));
    }

    #[test]
    fn coasting_fires_nothing() {
        let mut det = ApsisDetector;
        let prev = make_state(7.0e6, 50.0);
        let curr = make_state(7.0001e6, 49.0);
        assert_eq!(det.check(&prev, &curr), None);
    }

    #[test]
    fn altitude_detector_fires_once() {
        let surface = 6.371e6;
        let mut det = AltitudeDetector::new(100_000.0, surface, true);
        let prev = make_state(surface + 90_000.0, 100.0);
        let curr = make_state(surface + 110_000.0, 100.0);
        assert!(det.check(&prev, &curr).is_some());
        assert!(det.check(&prev, &curr).is_none());
    }
}
