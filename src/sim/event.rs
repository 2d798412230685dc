use crate::dynamics::state::FlightState;
use crate::sim::integrator::AttitudeMode;

// ---------------------------------------------------------------------------
// Ascent phases and terminal classification
// ---------------------------------------------------------------------------

/// Non-terminal phase of a powered ascent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AscentPhase {
    /// From liftoff to the pitchover altitude; attitude free.
    VerticalAscent,
    /// After pitchover; attitude held at the commanded angle.
    PitchedOver,
}

impl AscentPhase {
    pub fn attitude_mode(self) -> AttitudeMode {
        match self {
            AscentPhase::VerticalAscent => AttitudeMode::Free,
            AscentPhase::PitchedOver => AttitudeMode::Held,
        }
    }
}

/// How a trial ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Burn time elapsed with the vehicle above ground.
    Burnout,
    /// Altitude went negative before burnout.
    GroundImpact,
}

impl Termination {
    pub fn label(self) -> &'static str {
        match self {
            Termination::Burnout => "burnout",
            Termination::GroundImpact => "ground impact",
        }
    }
}

/// Terminal result of one ascent trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AscentOutcome {
    pub termination: Termination,
    pub state: FlightState,
    /// Time of pitchover, if the pitchover altitude was reached.
    pub pitchover_time: Option<f64>,
}

impl AscentOutcome {
    pub fn is_ground_impact(&self) -> bool {
        self.termination == Termination::GroundImpact
    }

    /// Time at which the vehicle went below ground, if it did.
    pub fn impact_time(&self) -> Option<f64> {
        self.is_ground_impact().then_some(self.state.elapsed_time)
    }
}

// ---------------------------------------------------------------------------
// Recorded events
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Launch,
    Pitchover,
    Burnout,
    GroundImpact,
}

impl From<Termination> for EventKind {
    fn from(t: Termination) -> Self {
        match t {
            Termination::Burnout => EventKind::Burnout,
            Termination::GroundImpact => EventKind::GroundImpact,
        }
    }
}

/// A discrete event that occurred during a recorded ascent.
#[derive(Debug, Clone, Copy)]
pub struct AscentEvent {
    pub time: f64,
    pub kind: EventKind,
    pub state: FlightState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_map_to_attitude_modes() {
        assert_eq!(AscentPhase::VerticalAscent.attitude_mode(), AttitudeMode::Free);
        assert_eq!(AscentPhase::PitchedOver.attitude_mode(), AttitudeMode::Held);
    }

    #[test]
    fn impact_time_only_for_ground_impact() {
        let mut outcome = AscentOutcome {
            termination: Termination::Burnout,
            state: FlightState { elapsed_time: 12.5, ..FlightState::launch() },
            pitchover_time: None,
        };
        assert_eq!(outcome.impact_time(), None);
        outcome.termination = Termination::GroundImpact;
        assert_eq!(outcome.impact_time(), Some(12.5));
    }
}
