//! Pay stub model.
//!
//! A [`PayStub`] is a snapshot of one employee's monthly pay. Its `Display`
//! implementation renders the fixed-width text stub; its `Serialize`
//! implementation backs JSON output.

use std::fmt;

use serde::Serialize;

use super::employee::{Compensation, Employee, EmploymentType};

const STUB_HEADER: &str = "--------------- PAY STUB ---------------";
const STUB_FOOTER: &str = "----------------------------------------";

/// One employee's pay stub for the current month.
///
/// # Example
///
/// ```
/// use payroll_ledger::models::{Compensation, Employee};
///
/// let sam = Employee::new("E2", "Roe", "Sam", "Clerk", Compensation::hourly(80.0, 15.0, 0.0));
/// let stub = sam.pay_stub();
///
/// assert_eq!(stub.monthly_pay, 1200.0);
/// assert!(stub.to_string().contains("Number of hours assigned: 80.0"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayStub {
    /// Employee number.
    pub employee_number: String,
    /// The employee's one-line description.
    pub description: String,
    /// Employment type.
    pub employment_type: EmploymentType,
    /// Pay and sick-day state at the time the stub was built.
    pub compensation: Compensation,
    /// Pay for the current month.
    pub monthly_pay: f64,
}

impl PayStub {
    /// Builds the stub for `employee`.
    pub fn for_employee(employee: &Employee) -> Self {
        Self {
            employee_number: employee.employee_number.clone(),
            description: employee.describe(),
            employment_type: employee.employment_type(),
            compensation: employee.compensation.clone(),
            monthly_pay: employee.pay(),
        }
    }
}

impl fmt::Display for PayStub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", STUB_HEADER)?;
        writeln!(f, "{}", self.description)?;
        match self.compensation {
            Compensation::Salaried {
                yearly_salary,
                sick_days_left,
            } => {
                writeln!(f, "Yearly Salary: ${:.2}", yearly_salary)?;
                writeln!(f, "Current Month pay: ${:.2}", self.monthly_pay)?;
                writeln!(f, "Sick days left: {}", format_number(sick_days_left))?;
            }
            Compensation::Hourly {
                hours_assigned,
                hourly_wage,
                sick_days_taken,
            } => {
                writeln!(f, "Hourly Wage: ${:.2}", hourly_wage)?;
                writeln!(
                    f,
                    "Number of hours assigned: {}",
                    format_number(hours_assigned)
                )?;
                writeln!(f, "Sick days taken: {}", format_number(sick_days_taken))?;
                writeln!(f, "Current Month pay: ${:.2}", self.monthly_pay)?;
            }
        }
        writeln!(f, "{}", STUB_FOOTER)
    }
}

/// Formats a day or hour count.
///
/// Whole numbers keep one decimal place (`20.0`); everything else uses the
/// shortest text that parses back to the same value.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}
