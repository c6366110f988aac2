use std::io::Write;

use circle_line_transit::{LineState, MetroError, MetroSystem, Passenger};

/// Narrating front end for a [`MetroSystem`].
///
/// Every operation writes one human-readable line per event to `out`.
/// Rejected boardings are reported there too instead of being returned.
pub struct MetroConsole<W: Write> {
    metro: MetroSystem,
    out: W,
}

impl<W: Write> MetroConsole<W> {
    pub fn new(metro: MetroSystem, out: W) -> Self {
        Self { metro, out }
    }

    pub fn metro(&self) -> &MetroSystem {
        &self.metro
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn reset_state(&mut self) -> std::io::Result<()> {
        self.metro.reset();
        writeln!(
            self.out,
            "Metro system reset at station {}.",
            self.metro.current_station()
        )
    }

    pub fn add_passenger(&mut self, name: &str, destination: &str) -> std::io::Result<()> {
        match self.metro.add_passenger(Passenger::new(name, destination)) {
            Ok(()) => writeln!(
                self.out,
                "{} boards at {}, heading to {}.",
                name,
                self.metro.current_station(),
                destination
            ),
            Err(e @ MetroError::InvalidDestination(_)) => {
                writeln!(self.out, "Error adding passenger: {}", e)
            }
            Err(e) => Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e)),
        }
    }

    pub fn remove_passenger(&mut self, name: &str, at_station: &str) -> std::io::Result<()> {
        self.metro.remove(name, at_station);
        writeln!(self.out, "{} removed at {}.", name, at_station)
    }

    /// Advance one station and let off everyone who has arrived
    pub fn move_train(&mut self) -> std::io::Result<()> {
        self.metro.move_to_next_station();
        let off = self.metro.get_offboarding_passengers();
        let station = self.metro.current_station();

        writeln!(self.out, "Train moves to {}.", station)?;
        for p in &off {
            writeln!(self.out, "{} gets off at {}.", p.name(), station)?;
        }
        Ok(())
    }

    pub fn get_state(&mut self) -> std::io::Result<LineState> {
        let state = self.metro.get_state();

        writeln!(self.out, "Current station: {}", state.position)?;
        if state.passengers.is_empty() {
            writeln!(self.out, "Passengers on board: (none)")?;
        } else {
            let names: Vec<&str> = state.passengers.iter().map(|p| p.as_str()).collect();
            writeln!(self.out, "Passengers on board: {}", names.join(", "))?;
        }
        Ok(state)
    }

    /// Write a free-form line, for messages that belong to the caller
    pub fn say(&mut self, message: std::fmt::Arguments<'_>) -> std::io::Result<()> {
        self.out.write_fmt(message)?;
        writeln!(self.out)
    }
}
