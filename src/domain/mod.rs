//! Domain layer containing timetable logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, portal cookie, errors)
//! - `schedule` - Day/time normalization, row state machine, session ordering

pub mod foundation;
pub mod schedule;
