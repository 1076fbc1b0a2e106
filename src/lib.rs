//! jan-membership - Multi-step membership registration portal
//!
//! A session-backed wizard over eight sequential form pages. Each step
//! stores its field set into the visitor's session; finalize turns the
//! accumulated state into one row in the members table. Uploaded
//! documents live in a flat directory under generated names.

pub mod config;
pub mod labels;
pub mod logging;
pub mod storage;
pub mod web;
pub mod wizard;
