//! Reminder module - decides whether today's reminder email goes out
//!
//! Dated todos are bucketed as overdue, due today or due tomorrow. An email is
//! sent when any bucket is non-empty or on Fridays, which also carry the hours review.

pub mod email;
pub mod schedule;

pub use email::Reminder;
