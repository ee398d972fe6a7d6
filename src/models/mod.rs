//! Core data models for the position snapshot job.
//!
//! This module contains the roster input records, the reference table rows,
//! the reporting periods and the snapshot documents written per employee.

mod employee;
mod period;
mod reference;
mod snapshot;

pub use employee::{
    CurrentPosition, EmployeeRecord, EmploymentStatus, GradeInfo, Level, NamedRef,
    RankHistoryEntry, SsoRole, UnitAssignment,
};
pub use period::{Period, RunContext};
pub use reference::{MealAllowance, RemunFilter, RemunerationRate, TaxRate};
pub use snapshot::SnapshotRecord;
