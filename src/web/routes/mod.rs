//! Request handlers, one module per page group.

pub mod finalize;
pub mod language;
pub mod steps;
pub mod uploads;
