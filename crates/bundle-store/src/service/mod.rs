//! Background services driving the store.

pub mod sweeper;

pub use sweeper::{Sweeper, SweeperHandle};
