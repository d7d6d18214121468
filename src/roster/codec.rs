//! Positional line format for roster files.
//!
//! Each record is one comma-separated line with no header and no quoting:
//!
//! ```text
//! empNo,lastName,firstName,jobTitle,full-time,yearlySalary,sickDaysLeft
//! empNo,lastName,firstName,jobTitle,part-time,hoursAssigned,hourlyWage,sickDaysTaken
//! ```

use std::str::Split;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{Compensation, Employee, EmploymentType, format_number};

/// Controls how leniently roster lines are parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// When false, any category other than `full-time` is read as part-time.
    /// When true, only `full-time` and `part-time` are accepted.
    pub strict_categories: bool,
}

/// Walks the comma-separated fields of one line, naming each one it takes.
struct Fields<'a> {
    line: usize,
    parts: Split<'a, char>,
}

impl<'a> Fields<'a> {
    fn new(text: &'a str, line: usize) -> Self {
        Self {
            line,
            parts: text.split(','),
        }
    }

    fn text(&mut self, field: &'static str) -> PayrollResult<&'a str> {
        self.parts.next().ok_or(PayrollError::MissingField {
            line: self.line,
            field,
        })
    }

    fn number(&mut self, field: &'static str) -> PayrollResult<f64> {
        let raw = self.text(field)?;
        raw.trim()
            .parse::<f64>()
            .map_err(|_| PayrollError::InvalidNumber {
                line: self.line,
                field,
                value: raw.to_string(),
            })
    }
}

/// Parses one roster line into an employee.
///
/// `line` is the 1-based line number used in error messages. Fields past the
/// last one the category needs are ignored.
///
/// # Examples
///
/// ```
/// use payroll_ledger::roster::{LoadOptions, parse_record};
///
/// let employee = parse_record("E1,Doe,Jane,Engineer,full-time,60000,20", 1, &LoadOptions::default())?;
/// assert_eq!(employee.pay(), 5000.0);
/// # Ok::<(), payroll_ledger::error::PayrollError>(())
/// ```
pub fn parse_record(text: &str, line: usize, options: &LoadOptions) -> PayrollResult<Employee> {
    let mut fields = Fields::new(text, line);

    let employee_number = fields.text("employee_number")?;
    let last_name = fields.text("last_name")?;
    let first_name = fields.text("first_name")?;
    let job_title = fields.text("job_title")?;
    let category = fields.text("category")?;

    let employment_type = match category {
        "full-time" => EmploymentType::FullTime,
        "part-time" => EmploymentType::PartTime,
        other if options.strict_categories => {
            return Err(PayrollError::UnknownCategory {
                line,
                category: other.to_string(),
            });
        }
        _ => EmploymentType::PartTime,
    };

    let compensation = match employment_type {
        EmploymentType::FullTime => {
            let yearly_salary = fields.number("yearly_salary")?;
            let sick_days_left = fields.number("sick_days_left")?;
            Compensation::salaried(yearly_salary, sick_days_left)
        }
        EmploymentType::PartTime => {
            let hours_assigned = fields.number("hours_assigned")?;
            let hourly_wage = fields.number("hourly_wage")?;
            let sick_days_taken = fields.number("sick_days_taken")?;
            Compensation::hourly(hours_assigned, hourly_wage, sick_days_taken)
        }
    };

    Ok(Employee::new(
        employee_number,
        last_name,
        first_name,
        job_title,
        compensation,
    ))
}

/// Formats one employee as a roster line, without the trailing newline.
///
/// Numbers are written so that [`parse_record`] reads back the same value.
pub fn format_record(employee: &Employee) -> String {
    let numbers = match employee.compensation {
        Compensation::Salaried {
            yearly_salary,
            sick_days_left,
        } => format!(
            "{},{}",
            format_number(yearly_salary),
            format_number(sick_days_left)
        ),
        Compensation::Hourly {
            hours_assigned,
            hourly_wage,
            sick_days_taken,
        } => format!(
            "{},{},{}",
            format_number(hours_assigned),
            format_number(hourly_wage),
            format_number(sick_days_taken)
        ),
    };

    format!(
        "{},{},{},{},{},{}",
        employee.employee_number,
        employee.last_name,
        employee.first_name,
        employee.job_title,
        employee.employment_type(),
        numbers
    )
}
