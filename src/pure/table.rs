//! A fixed capacity grouping of seats
use crate::pure::Seat;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Create a [Vec] of [Table]s from a list of seat capacities.
/// ```
/// # use openspace::tables;
/// let ts = tables!(4, 4, 4);
/// let uneven = tables!(2, 6);
/// ```
#[macro_export]
macro_rules! tables {
    ($($cap:expr),+ $(,)?) => { vec![$( $crate::pure::Table::new($cap) ),+] };
}

/// A fixed capacity, ordered collection of [Seat]s.
///
/// The seat count is set at construction and never changes; the only
/// mutation a table supports is assignment into its seats. Capacity
/// validity is checked when tables are handed to a
/// [Workspace][crate::pure::Workspace] rather than per table.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub(crate) seats: Vec<Seat>,
}

impl Default for Table {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

impl Table {
    /// The seat count used when no explicit capacity is given.
    pub const DEFAULT_CAPACITY: usize = 4;

    /// Create a new table with `capacity` free seats.
    pub fn new(capacity: usize) -> Self {
        Self {
            seats: vec![Seat::new(); capacity],
        }
    }

    /// The fixed number of seats at this table.
    pub fn capacity(&self) -> usize {
        self.seats.len()
    }

    /// The seats at this table, in seat order.
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// Whether at least one seat is currently free.
    pub fn has_free_spot(&self) -> bool {
        self.seats.iter().any(Seat::is_free)
    }

    /// The earliest free seat in seat order, if there is one.
    pub fn first_empty_seat(&mut self) -> Option<&mut Seat> {
        self.seats.iter_mut().find(|s| s.is_free())
    }

    /// Assign `name` to the first empty seat.
    ///
    /// Silently a no-op when the table is full: callers are expected to
    /// check [has_free_spot][Table::has_free_spot] first.
    pub fn assign_seat(&mut self, name: impl Into<String>) {
        if let Some(seat) = self.first_empty_seat() {
            seat.assign(name);
        }
    }

    /// The number of currently free seats.
    pub fn free_seat_count(&self) -> usize {
        self.seats.iter().filter(|s| s.is_free()).count()
    }

    /// The number of currently occupied seats.
    pub fn occupied_seat_count(&self) -> usize {
        self.seats.len() - self.free_seat_count()
    }
}
