//! In-memory state machine for a single circular line.
//!
//! The train's position is an index into a fixed station list, and riders are
//! kept in boarding order. Moving the train and letting riders off are
//! separate steps: a caller that moves without calling
//! [`MetroSystem::get_offboarding_passengers`] leaves riders aboard past their
//! stop.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::identifiers::*;
use crate::models::types::*;

/// A train cycling through an ordered list of stations.
#[derive(Clone, Debug)]
pub struct MetroSystem {
    stations: Vec<StationIdentifier>,
    current_idx: usize,
    passengers: Vec<Passenger>,
}

impl MetroSystem {
    /// Create a line from its ordered stations.
    ///
    /// Returns `Err` if the list is empty or names a station twice.
    pub fn new<I, S>(stations: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<StationIdentifier>,
    {
        let stations: Vec<StationIdentifier> = stations.into_iter().map(Into::into).collect();

        if stations.is_empty() {
            return Err(MetroError::InvalidConfiguration(
                "there must be at least one station".into(),
            ));
        }

        {
            let mut seen = HashSet::with_capacity(stations.len());
            if let Some(dup) = stations.iter().find(|s| !seen.insert(*s)) {
                return Err(MetroError::InvalidConfiguration(format!(
                    "station {} appears more than once",
                    dup
                )));
            }
        }

        debug!(stations = stations.len(), "metro line created");

        Ok(Self {
            stations,
            current_idx: 0,
            passengers: Vec::new(),
        })
    }

    // ---- Mutations ----

    /// Send the train back to the first station and empty it
    pub fn reset(&mut self) {
        self.current_idx = 0;
        self.passengers.clear();
        debug!(station = %self.current_station(), "metro line reset");
    }

    /// Board a rider at the current station.
    ///
    /// Returns `Err` without touching the train if the destination is not on
    /// this line.
    pub fn add_passenger(&mut self, passenger: Passenger) -> Result<()> {
        if !self.contains_station(passenger.destination()) {
            warn!(
                name = %passenger.name(),
                destination = %passenger.destination(),
                "rejected boarding: unknown destination"
            );
            return Err(MetroError::InvalidDestination(passenger.destination().clone()));
        }

        debug!(
            name = %passenger.name(),
            station = %self.current_station(),
            destination = %passenger.destination(),
            "passenger boarded"
        );
        self.passengers.push(passenger);
        Ok(())
    }

    /// Advance one station, wrapping from the last back to the first
    pub fn move_to_next_station(&mut self) {
        self.current_idx = (self.current_idx + 1) % self.stations.len();
        debug!(station = %self.current_station(), "train moved");
    }

    /// Take off every rider whose destination is the current station.
    ///
    /// Both the returned riders and those left aboard keep their boarding
    /// order.
    pub fn get_offboarding_passengers(&mut self) -> Vec<Passenger> {
        let station = self.current_station().clone();

        let (offboarding, remaining): (Vec<_>, Vec<_>) = std::mem::take(&mut self.passengers)
            .into_iter()
            .partition(|p| p.destination() == &station);
        self.passengers = remaining;

        if !offboarding.is_empty() {
            debug!(%station, count = offboarding.len(), "passengers offboarded");
        }
        offboarding
    }

    /// Force every rider matching both `name` and destination `at_station` off
    /// the train, wherever it currently is.
    ///
    /// Riders sharing a name and destination cannot be told apart, so all of
    /// them go. Nothing happens if no rider matches.
    pub fn remove(&mut self, name: impl Into<PassengerName>, at_station: impl Into<StationIdentifier>) {
        let name = name.into();
        let at_station = at_station.into();

        let before = self.passengers.len();
        self.passengers.retain(|p| !p.matches(&name, &at_station));

        debug!(
            %name,
            %at_station,
            removed = before - self.passengers.len(),
            "forced removal"
        );
    }

    // ---- Queries ----

    pub fn current_station(&self) -> &StationIdentifier {
        &self.stations[self.current_idx]
    }

    pub fn current_index(&self) -> usize {
        self.current_idx
    }

    pub fn stations(&self) -> &[StationIdentifier] {
        &self.stations
    }

    /// Riders currently aboard, in boarding order
    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    pub fn contains_station(&self, station: &StationIdentifier) -> bool {
        self.stations.contains(station)
    }

    /// Snapshot of the current position and onboard rider names
    pub fn get_state(&self) -> LineState {
        LineState {
            position: self.current_station().clone(),
            passengers: self.passengers.iter().map(|p| p.name().clone()).collect(),
        }
    }
}
