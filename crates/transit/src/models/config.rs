//! Line configuration: the ordered stations a train cycles through.

use crate::identifiers::StationIdentifier;
use crate::models::types::Result;
use crate::system::MetroSystem;

/// Stations used when no configuration is supplied
pub const DEFAULT_STATIONS: [&str; 5] = ["A", "B", "C", "D", "E"];

/// Ordered station list for a circular line.
///
/// The list is validated only when the line is built; see [`LineConfig::build`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineConfig {
    pub stations: Vec<StationIdentifier>,
}

impl LineConfig {
    pub fn from_stations<I, S>(stations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<StationIdentifier>,
    {
        Self {
            stations: stations.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a fresh line: train at the first station, nobody aboard
    pub fn build(&self) -> Result<MetroSystem> {
        MetroSystem::new(self.stations.clone())
    }
}

impl Default for LineConfig {
    fn default() -> Self {
        Self::from_stations(DEFAULT_STATIONS)
    }
}
