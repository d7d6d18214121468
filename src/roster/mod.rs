//! Roster management for the payroll ledger.
//!
//! This module contains the [`Roster`] staff list and the positional line
//! codec used to load and save it.

mod codec;
mod ledger;

pub use codec::{LoadOptions, format_record, parse_record};
pub use ledger::Roster;
