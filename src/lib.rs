//! Timecard Engine
//!
//! This crate turns raw attendance records (clock-in, clock-out and breaks)
//! into paid hours, overtime and estimated wages, and derives employment
//! tenure and milestone tiers from a hire date. The same calculation module
//! serves the clock-out write path and the timecard export read path.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
