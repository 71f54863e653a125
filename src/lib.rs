//! Time & Earnings Calculation Engine.
//!
//! This crate provides the deterministic pipeline that turns a set of work
//! sessions plus a configuration of rates and thresholds into a categorization
//! of worked hours (regular / exempt overtime / paid overtime) and a full
//! period earnings statement under Portuguese labour-law-inspired rules.
//!
//! The engine is a pure library: it performs no I/O of its own beyond the
//! optional settings-file loader, carries no shared state across calls, and
//! always prefers producing a degraded-but-valid statement over failing a
//! report.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;

mod coerce;
