//! Core data types for the metro line.

use crate::identifiers::*;

// ============================================================================
// Data Structures
// ============================================================================

/// A rider on the train, travelling to a single destination.
///
/// Immutable once created. Names are not unique: two riders may share a name,
/// and even a name and destination.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Passenger {
    name: PassengerName,
    destination: StationIdentifier,
}

impl Passenger {
    pub fn new(name: impl Into<PassengerName>, destination: impl Into<StationIdentifier>) -> Self {
        Self {
            name: name.into(),
            destination: destination.into(),
        }
    }

    pub fn name(&self) -> &PassengerName {
        &self.name
    }

    pub fn destination(&self) -> &StationIdentifier {
        &self.destination
    }

    /// Whether this rider matches a forced-removal request
    pub(crate) fn matches(&self, name: &PassengerName, destination: &StationIdentifier) -> bool {
        &self.name == name && &self.destination == destination
    }
}

/// Read-only snapshot of the line: where the train is and who is aboard.
///
/// `passengers` holds one name per onboard rider, in boarding order, so a
/// shared name shows up once per rider.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineState {
    pub position: StationIdentifier,
    pub passengers: Vec<PassengerName>,
}

impl LineState {
    /// Whether at least one onboard rider has this name
    pub fn has_passenger(&self, name: &str) -> bool {
        self.passengers.iter().any(|p| p == name)
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum MetroError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid destination: {0}")]
    InvalidDestination(StationIdentifier),
}

pub type Result<T> = std::result::Result<T, MetroError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passenger_attributes() {
        let p = Passenger::new("Ana", "C");
        assert_eq!(p.name(), &PassengerName::new("Ana"));
        assert_eq!(p.destination(), &StationIdentifier::new("C"));
    }

    #[test]
    fn test_passenger_matches_name_and_destination() {
        let p = Passenger::new("Grace", "X");

        assert!(p.matches(&"Grace".into(), &"X".into()));
        assert!(!p.matches(&"Grace".into(), &"Y".into()));
        assert!(!p.matches(&"Grant".into(), &"X".into()));
    }

    #[test]
    fn test_line_state_has_passenger() {
        let state = LineState {
            position: "A".into(),
            passengers: vec!["Ana".into(), "Ana".into(), "Luis".into()],
        };

        assert!(state.has_passenger("Ana"));
        assert!(state.has_passenger("Luis"));
        assert!(!state.has_passenger("Juan"));
    }

    #[test]
    fn test_error_messages() {
        let err = MetroError::InvalidDestination("X".into());
        assert_eq!(err.to_string(), "Invalid destination: X");

        let err = MetroError::InvalidConfiguration("no stations".into());
        assert_eq!(err.to_string(), "Invalid configuration: no stations");
    }
}
