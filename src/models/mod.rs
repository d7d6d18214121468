//! Core data models for the payroll ledger.
//!
//! This module contains the employee record and the pay stub built from it.

mod employee;
mod pay_stub;

pub use employee::{
    Compensation, Employee, EmploymentType, HOURS_PER_SICK_DAY, MONTHS_PER_YEAR,
    YEARLY_SICK_DAYS,
};
pub use pay_stub::{PayStub, format_number};
