//! Hours module - monthly totals from the `TIME.md` hours log

pub mod data;

pub use data::{HoursParser, HoursReport};
