//! Cinema seat booking.
//!
//! Tracks seat reservations for a small hall across a fixed set of
//! showtimes. Each showtime has a grid of seats that are either available or
//! booked. A session lets a user select seats in one showtime, book or cancel
//! the selection, reset everything, and read booking counts and revenue.
//! Every change is written to a JSON file before it is considered done.
//!
//! - [`types`]: seats, grids, the dataset, money, session state
//! - [`config`]: hall layout, pricing and storage from the environment
//! - [`aggregates`]: the booking reducer
//! - [`store`]: the Booking Store and its JSON file backend
//! - [`session`]: the Booking Session API
//! - [`statistics`]: totals and per-showtime sales
//! - [`console`]: parsing and rendering for the terminal front end
//!
//! # Quick Start
//!
//! ```no_run
//! use boxoffice::{BookingSession, Config};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env()?;
//! let mut session = BookingSession::open(&config)?;
//!
//! session.toggle_select(0, 0)?;
//! session.toggle_select(0, 1)?;
//! let update = session.book_selected()?;
//!
//! for message in update.messages() {
//!     println!("{message}");
//! }
//! println!("Total Booked Seats: {}", session.total_booked());
//! println!("Total Revenue: {}", session.total_revenue());
//! # Ok(())
//! # }
//! ```

pub mod aggregates;
pub mod config;
pub mod console;
pub mod error;
pub mod pricing;
pub mod session;
pub mod statistics;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use aggregates::{BookingAction, BookingEnvironment, BookingReducer};
pub use config::{Config, HallConfig};
pub use error::{BookingError, ConfigError};
pub use pricing::PricingPolicy;
pub use session::{BookingSession, SessionUpdate};
pub use statistics::SalesSummary;
pub use store::{BookingStore, JsonFileStore};
pub use types::{
    BookingOutcome, Dataset, Grid, Money, SeatDisplay, SeatMap, SeatPosition, SeatState, Showtime,
};
