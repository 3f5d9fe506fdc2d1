//! Monthly Payroll Computation Engine
//!
//! This crate computes each staff member's pay for an arbitrary calendar month
//! from in-memory snapshots of rosters, recurring shift patterns, pay records,
//! holiday entitlements, approved requests, and exchange rates. The engine is
//! a pure function of its inputs: persistence and external rate/holiday feeds
//! belong to the surrounding system.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod workflow;
