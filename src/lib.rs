//! Monthly position and compensation profile snapshots.
//!
//! This crate pages through the active-employee roster of an HR API,
//! resolves each employee's payroll grade, job title and reference rates,
//! and writes one snapshot per employee for the current month and one for
//! the previous month into a document store.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod lookup;
pub mod models;
pub mod pipeline;
pub mod resolution;
pub mod roster;
pub mod store;
pub mod telemetry;
