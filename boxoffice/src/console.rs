//! Text front end helpers: command parsing and rendering.
//!
//! Holds no state. The binary reads a line, parses it into a [`Command`],
//! calls the session and renders what comes back.

use crate::error::SeatLabelError;
use crate::statistics::SalesSummary;
use crate::types::{row_label, Money, SeatMap, SeatPosition, Showtime};
use thiserror::Error;

/// A line of user input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Toggle selection of these seats
    Toggle(Vec<SeatPosition>),
    /// Book the selection
    Book,
    /// Cancel the selection
    Cancel,
    /// Reset every showtime (after confirmation)
    Reset,
    /// Switch showtime
    Showtime(String),
    /// List showtimes
    Showtimes,
    /// Sales statistics
    Stats,
    /// Render the active showtime
    Show,
    /// Usage
    Help,
    /// Leave
    Quit,
    /// Blank line
    Empty,
}

/// Input that is not a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// First word is not a known command
    #[error("Unknown command '{0}'. Type 'help' for a list of commands.")]
    Unknown(String),
    /// Command needs an argument
    #[error("'{0}' needs an argument. Type 'help' for usage.")]
    MissingArgument(&'static str),
    /// A seat label did not parse
    #[error(transparent)]
    Seat(#[from] SeatLabelError),
}

impl Command {
    /// Parse one line of input.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError`] for unknown commands, missing arguments and
    /// malformed seat labels.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(word, rest)| (word, rest.trim()));

        match word.to_ascii_lowercase().as_str() {
            "" => Ok(Self::Empty),
            "select" | "toggle" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument("select"));
                }
                let seats = rest
                    .split(|c: char| c.is_whitespace() || c == ',')
                    .filter(|label| !label.is_empty())
                    .map(str::parse)
                    .collect::<Result<Vec<SeatPosition>, _>>()?;
                Ok(Self::Toggle(seats))
            },
            "book" => Ok(Self::Book),
            "cancel" => Ok(Self::Cancel),
            "reset" => Ok(Self::Reset),
            "showtime" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument("showtime"));
                }
                Ok(Self::Showtime(rest.to_string()))
            },
            "showtimes" => Ok(Self::Showtimes),
            "stats" => Ok(Self::Stats),
            "show" => Ok(Self::Show),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            _ => Err(CommandError::Unknown(word.to_string())),
        }
    }
}

/// Returns `true` for a `y`/`yes` answer; anything else declines.
#[must_use]
pub fn is_confirmation(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Usage text
pub const HELP: &str = "\
Commands:
  select <seats>     toggle selection of seats, e.g. 'select A1 B3'
  book               book the selected seats
  cancel             cancel the selected seats
  reset              make every seat of every showtime available (asks first)
  showtime <label>   switch showtime, e.g. 'showtime 7:00 PM'
  showtimes          list showtimes
  stats              booked seats and revenue per showtime
  show               show the seat map again
  help               this text
  quit               leave";

/// Render the seat map of `showtime` with totals underneath.
///
/// ```text
/// Showtime: 10:00 AM
///    1 2 3
/// A  X S O
/// B  O O O
///
/// Total Booked Seats: 1
/// Total Revenue: $10
/// ```
#[must_use]
pub fn render_seat_map(
    showtime: &Showtime,
    seats: &SeatMap,
    total_booked: usize,
    total_revenue: Money,
) -> String {
    let label_width = row_label(seats.rows().saturating_sub(1)).len();
    let cell_width = seats.cols().to_string().len().max(1) + 1;

    let header: String = (1..=seats.cols())
        .map(|col| format!("{col:>cell_width$}"))
        .collect();

    let mut out = format!("Showtime: {showtime}\n{:label_width$} {header}\n", "");
    for (row, cells) in seats.iter_rows().enumerate() {
        out.push_str(&format!("{:<label_width$} ", row_label(row)));
        for cell in cells {
            out.push_str(&format!("{:>cell_width$}", cell.marker()));
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "\nTotal Booked Seats: {total_booked}\nTotal Revenue: {total_revenue}"
    ));
    out
}

/// Render the showtime list, marking the active one.
#[must_use]
pub fn render_showtimes(showtimes: &[Showtime], active: &Showtime) -> String {
    showtimes
        .iter()
        .map(|showtime| {
            let marker = if showtime == active { '*' } else { ' ' };
            format!("{marker} {showtime}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render sales statistics.
#[must_use]
pub fn render_summary(summary: &SalesSummary) -> String {
    let mut lines: Vec<String> = summary
        .showtimes
        .iter()
        .map(|sales| {
            format!(
                "{:<10} booked {:>3}/{:<3} revenue {}",
                sales.showtime.as_str(),
                sales.booked,
                sales.capacity,
                sales.revenue
            )
        })
        .collect();
    lines.push(format!("Total Booked Seats: {}", summary.total_booked));
    lines.push(format!("Total Revenue: {}", summary.total_revenue));
    lines.push(format!("Occupancy: {:.1}%", summary.occupancy() * 100.0));
    lines.join("\n")
}
