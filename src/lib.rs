//! openspace :: organising colleagues into seats in a shared open space
//!
//! An openspace [Workspace] seats a roster of named colleagues across a fixed
//! set of multi-seat [Table]s. Tables are filled strictly in sequence order
//! and seats within a table in seat order, but which name lands in which seat
//! is decided by drawing from the roster pool at random without replacement.
//! When the roster is larger than the configured seating a single default
//! capacity overflow table is appended; anyone still unseated after that is
//! reported back to the caller rather than raised as an error.
//!
//! ```no_run
//! use openspace::{roster, Result, Workspace};
//!
//! fn main() -> Result<()> {
//!     let names = roster::from_path("colleagues.csv")?;
//!
//!     let mut workspace = Workspace::default();
//!     let report = workspace.organize(names);
//!     if !report.is_complete() {
//!         eprintln!("unable to seat {} colleagues", report.unseated.len());
//!     }
//!
//!     workspace.display();
//!
//!     Ok(())
//! }
//! ```
#![warn(
    missing_debug_implementations,
    missing_docs,
    rust_2018_idioms
)]

pub mod pure;
pub mod roster;

#[doc(inline)]
pub use pure::{workspace::SeatingReport, Seat, Table, Workspace};

/// Error variants from the openspace library.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A roster source could not be read
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The tables in a workspace must share a single fixed capacity
    #[error("tables must share a uniform capacity: expected {expected}, found {found}")]
    MixedTableCapacities {
        /// The capacity of the first table in the supplied list
        expected: usize,
        /// The first differing capacity encountered
        found: usize,
    },

    /// A workspace can not be constructed without any tables
    #[error("a workspace requires at least one table")]
    NoTables,

    /// A table that can never seat anyone is not a valid configuration
    #[error("table {index} has a capacity of zero")]
    ZeroCapacityTable {
        /// Position of the offending table in the supplied list
        index: usize,
    },
}

/// A Result where the error type is an openspace [Error]
pub type Result<T> = std::result::Result<T, Error>;
