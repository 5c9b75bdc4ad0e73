//! Side effect free management of workspace seating state
pub mod seat;
pub mod table;
pub mod workspace;

#[doc(inline)]
pub use seat::Seat;
#[doc(inline)]
pub use table::Table;
#[doc(inline)]
pub use workspace::Workspace;
