//! Employee model and related types.
//!
//! This module defines the [`Employee`] record, the [`Compensation`] sum type
//! that distinguishes salaried from hourly staff, and the sick-day and pay
//! rules attached to each variant.

use std::fmt;
use std::io::{self, Write};

use serde::Serialize;

use super::pay_stub::PayStub;

/// Sick days a salaried employee is granted each year.
pub const YEARLY_SICK_DAYS: f64 = 20.0;

/// Pay periods per year for salaried employees.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Hours deducted from an hourly employee's pay for each sick day taken.
pub const HOURS_PER_SICK_DAY: f64 = 7.0;

/// Represents the type of employment arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    /// Full-time, paid a yearly salary.
    FullTime,
    /// Part-time, paid by the hour.
    PartTime,
}

impl EmploymentType {
    /// Returns the category tag used in roster files and descriptions.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_ledger::models::EmploymentType;
    ///
    /// assert_eq!(EmploymentType::FullTime.as_str(), "full-time");
    /// assert_eq!(EmploymentType::PartTime.as_str(), "part-time");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "full-time",
            EmploymentType::PartTime => "part-time",
        }
    }
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pay and sick-day state, by employment type.
///
/// The two variants track sick days with opposite meanings: salaried staff
/// count days *left* out of a yearly allowance, hourly staff count days
/// *taken* in the current pay period.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "category")]
pub enum Compensation {
    /// A full-time employee on a yearly salary.
    #[serde(rename = "full-time")]
    Salaried {
        /// Gross yearly salary.
        yearly_salary: f64,
        /// Sick days remaining this year.
        sick_days_left: f64,
    },
    /// A part-time employee paid by the hour.
    #[serde(rename = "part-time")]
    Hourly {
        /// Hours assigned for the pay period.
        hours_assigned: f64,
        /// Hourly wage.
        hourly_wage: f64,
        /// Sick days taken this pay period.
        sick_days_taken: f64,
    },
}

impl Compensation {
    /// Salaried compensation with the given sick-day balance.
    pub fn salaried(yearly_salary: f64, sick_days_left: f64) -> Self {
        Compensation::Salaried {
            yearly_salary,
            sick_days_left,
        }
    }

    /// Hourly compensation with the given sick days already taken.
    pub fn hourly(hours_assigned: f64, hourly_wage: f64, sick_days_taken: f64) -> Self {
        Compensation::Hourly {
            hours_assigned,
            hourly_wage,
            sick_days_taken,
        }
    }

    /// Returns the employment type this compensation belongs to.
    pub fn employment_type(&self) -> EmploymentType {
        match self {
            Compensation::Salaried { .. } => EmploymentType::FullTime,
            Compensation::Hourly { .. } => EmploymentType::PartTime,
        }
    }
}

/// Represents one employee on the roster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employee {
    /// Employee number; the roster lookup key.
    pub employee_number: String,
    /// Family name.
    pub last_name: String,
    /// Given name.
    pub first_name: String,
    /// Job title.
    pub job_title: String,
    /// Pay and sick-day state.
    #[serde(flatten)]
    pub compensation: Compensation,
}

impl Employee {
    /// Creates an employee from identity fields and compensation.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_ledger::models::{Compensation, Employee};
    ///
    /// let jane = Employee::new("E1", "Doe", "Jane", "Engineer", Compensation::salaried(60000.0, 20.0));
    /// assert_eq!(jane.pay(), 5000.0);
    /// ```
    pub fn new(
        employee_number: impl Into<String>,
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        job_title: impl Into<String>,
        compensation: Compensation,
    ) -> Self {
        Self {
            employee_number: employee_number.into(),
            last_name: last_name.into(),
            first_name: first_name.into(),
            job_title: job_title.into(),
            compensation,
        }
    }

    /// Creates a full-time employee on a yearly salary.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_ledger::models::{EmploymentType, Employee};
    ///
    /// let jane = Employee::salaried("E1", "Doe", "Jane", "Engineer", 60000.0, 20.0);
    /// assert_eq!(jane.employment_type(), EmploymentType::FullTime);
    /// assert_eq!(jane.sick_days(), 20.0);
    /// ```
    pub fn salaried(
        employee_number: impl Into<String>,
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        job_title: impl Into<String>,
        yearly_salary: f64,
        sick_days_left: f64,
    ) -> Self {
        Self::new(
            employee_number,
            last_name,
            first_name,
            job_title,
            Compensation::salaried(yearly_salary, sick_days_left),
        )
    }

    /// Creates a part-time employee paid by the hour.
    pub fn hourly(
        employee_number: impl Into<String>,
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        job_title: impl Into<String>,
        hours_assigned: f64,
        hourly_wage: f64,
        sick_days_taken: f64,
    ) -> Self {
        Self::new(
            employee_number,
            last_name,
            first_name,
            job_title,
            Compensation::hourly(hours_assigned, hourly_wage, sick_days_taken),
        )
    }

    /// Returns the employment type of this employee.
    pub fn employment_type(&self) -> EmploymentType {
        self.compensation.employment_type()
    }

    /// Returns true for salaried (full-time) employees.
    pub fn is_salaried(&self) -> bool {
        matches!(self.compensation, Compensation::Salaried { .. })
    }

    /// Returns true for hourly (part-time) employees.
    pub fn is_hourly(&self) -> bool {
        matches!(self.compensation, Compensation::Hourly { .. })
    }

    /// Returns this period's pay.
    ///
    /// Salaried staff receive a twelfth of their yearly salary. Hourly staff
    /// are paid for their assigned hours less [`HOURS_PER_SICK_DAY`] hours
    /// for every sick day taken. The hourly result is not floored, so a large
    /// sick-day count yields negative pay.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_ledger::models::{Compensation, Employee};
    ///
    /// let sam = Employee::new("E2", "Roe", "Sam", "Clerk", Compensation::hourly(80.0, 15.0, 2.0));
    /// assert_eq!(sam.pay(), 990.0);
    ///
    /// let absent = Employee::new("E3", "Poe", "Al", "Clerk", Compensation::hourly(80.0, 15.0, 20.0));
    /// assert_eq!(absent.pay(), -900.0);
    /// ```
    pub fn pay(&self) -> f64 {
        match self.compensation {
            Compensation::Salaried { yearly_salary, .. } => yearly_salary / MONTHS_PER_YEAR,
            Compensation::Hourly {
                hours_assigned,
                hourly_wage,
                sick_days_taken,
            } => {
                hours_assigned * hourly_wage - sick_days_taken * HOURS_PER_SICK_DAY * hourly_wage
            }
        }
    }

    /// Records sick days used.
    ///
    /// This overwrites rather than accumulates: a salaried employee's balance
    /// becomes `YEARLY_SICK_DAYS - amount`, an hourly employee's taken count
    /// becomes `amount`.
    pub fn use_sick_day(&mut self, amount: f64) {
        match &mut self.compensation {
            Compensation::Salaried { sick_days_left, .. } => {
                *sick_days_left = YEARLY_SICK_DAYS - amount;
            }
            Compensation::Hourly {
                sick_days_taken, ..
            } => {
                *sick_days_taken = amount;
            }
        }
    }

    /// Returns sick days left (salaried) or sick days taken (hourly).
    pub fn sick_days(&self) -> f64 {
        match self.compensation {
            Compensation::Salaried { sick_days_left, .. } => sick_days_left,
            Compensation::Hourly {
                sick_days_taken, ..
            } => sick_days_taken,
        }
    }

    /// Restores the yearly allowance (salaried) or clears days taken (hourly).
    pub fn reset_sick_days(&mut self) {
        match &mut self.compensation {
            Compensation::Salaried { sick_days_left, .. } => *sick_days_left = YEARLY_SICK_DAYS,
            Compensation::Hourly {
                sick_days_taken, ..
            } => *sick_days_taken = 0.0,
        }
    }

    /// Returns the one-line identity string, e.g.
    /// `Employee: E1, Jane Doe, Engineer, full-time`.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Builds this period's pay stub.
    pub fn pay_stub(&self) -> PayStub {
        PayStub::for_employee(self)
    }

    /// Writes the text pay stub to `out`.
    pub fn print_pay_stub<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self.pay_stub())
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Employee: {}, {} {}, {}, {}",
            self.employee_number,
            self.first_name,
            self.last_name,
            self.job_title,
            self.employment_type()
        )
    }
}
