//! Sales statistics over the whole dataset.
//!
//! Everything is recomputed from the seat grids on demand; there are no
//! incremental counters that could drift from the persisted data.

use crate::pricing::PricingPolicy;
use crate::types::{Dataset, Grid, Money, Showtime};

/// Booked seats across all showtimes.
#[must_use]
pub fn total_booked(dataset: &Dataset) -> usize {
    dataset.total_booked()
}

/// Revenue of every booked seat across all showtimes.
#[must_use]
pub fn total_revenue(dataset: &Dataset, pricing: &PricingPolicy) -> Money {
    dataset
        .iter()
        .map(|(_, grid)| grid_revenue(grid, pricing))
        .sum()
}

fn grid_revenue(grid: &Grid, pricing: &PricingPolicy) -> Money {
    grid.booked_seats()
        .map(|seat| pricing.price_for_row(seat.row))
        .sum()
}

/// Sales metrics for one showtime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShowtimeSales {
    /// Showtime
    pub showtime: Showtime,
    /// Booked seats
    pub booked: usize,
    /// Revenue of the booked seats
    pub revenue: Money,
    /// Seats in the hall
    pub capacity: usize,
}

impl ShowtimeSales {
    /// Seats still free
    #[must_use]
    pub const fn available(&self) -> usize {
        self.capacity.saturating_sub(self.booked)
    }
}

/// Sales metrics for every showtime plus totals.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SalesSummary {
    /// Per-showtime metrics, in screening order
    pub showtimes: Vec<ShowtimeSales>,
    /// Booked seats across all showtimes
    pub total_booked: usize,
    /// Revenue across all showtimes
    pub total_revenue: Money,
    /// Seats across all showtimes
    pub capacity: usize,
}

impl SalesSummary {
    /// Computes the summary.
    ///
    /// Showtimes are listed in `order`; showtimes in `order` that have no grid
    /// are skipped.
    #[must_use]
    pub fn from_dataset(dataset: &Dataset, pricing: &PricingPolicy, order: &[Showtime]) -> Self {
        let showtimes: Vec<ShowtimeSales> = order
            .iter()
            .filter_map(|showtime| {
                let grid = dataset.grid(showtime)?;
                Some(ShowtimeSales {
                    showtime: showtime.clone(),
                    booked: grid.booked_count(),
                    revenue: grid_revenue(grid, pricing),
                    capacity: grid.capacity(),
                })
            })
            .collect();

        Self {
            total_booked: showtimes.iter().map(|s| s.booked).sum(),
            total_revenue: showtimes.iter().map(|s| s.revenue).sum(),
            capacity: showtimes.iter().map(|s| s.capacity).sum(),
            showtimes,
        }
    }

    /// Seats still free across all showtimes
    #[must_use]
    pub const fn available(&self) -> usize {
        self.capacity.saturating_sub(self.total_booked)
    }

    /// Share of booked seats, `0.0` for an empty hall
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Seat counts are far below 2^52
    pub fn occupancy(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        self.total_booked as f64 / self.capacity as f64
    }
}
