//! Aggregate reducers for the box office.
//!
//! - Booking: seat selection, booking, cancellation, reset and showtime
//!   switching for one session

pub mod booking;

pub use booking::{BookingAction, BookingEnvironment, BookingReducer};
