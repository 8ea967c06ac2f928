//! Student Portfolio
//!
//! Manage a catalog of student project records kept in a local,
//! string-keyed storage file.

pub mod cli;
pub mod core;
pub mod entities;
