//! Payroll ledger for salaried and hourly staff.
//!
//! This crate models a roster of full-time (salaried) and part-time (hourly)
//! employees, computes monthly pay, tracks sick days and prints pay stubs.
//! Rosters are persisted as flat comma-separated text files.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod models;
pub mod roster;
