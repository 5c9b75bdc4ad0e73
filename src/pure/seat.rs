//! An individually assignable occupancy slot
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A single assignable unit of seating capacity.
///
/// A seat is either free or occupied by exactly one named person. Seats are
/// created free by their owning [Table][crate::pure::Table] and are only
/// ever mutated through [assign][Seat::assign] and [vacate][Seat::vacate].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Seat {
    pub(crate) occupant: Option<String>,
}

impl Seat {
    /// The name reported by a seat with no occupant.
    pub const NO_ONE: &'static str = "No one";

    /// Create a new, free seat.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this seat is currently unoccupied.
    pub fn is_free(&self) -> bool {
        self.occupant.is_none()
    }

    /// The name of the current occupant, or [Seat::NO_ONE] if the seat
    /// is free.
    pub fn name(&self) -> &str {
        self.occupant.as_deref().unwrap_or(Self::NO_ONE)
    }

    /// The current occupant if there is one.
    pub fn occupant(&self) -> Option<&str> {
        self.occupant.as_deref()
    }

    /// Assign `name` to this seat if it is free.
    ///
    /// Assigning to an occupied seat is a no-op: the conflict is logged and
    /// the existing occupant is retained.
    pub fn assign(&mut self, name: impl Into<String>) {
        let name = name.into();

        match self.occupant {
            Some(ref current) => warn!(%current, attempted = %name, "seat already occupied"),
            None => self.occupant = Some(name),
        }
    }

    /// Remove the current occupant, leaving the seat free.
    ///
    /// A no-op if the seat is already free.
    pub fn vacate(&mut self) {
        self.occupant = None;
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.occupant {
            Some(ref name) => write!(f, "occupied by {name}"),
            None => write!(f, "free"),
        }
    }
}
