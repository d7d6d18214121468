//! The [`Roster`] type: an ordered, in-memory staff list backed by a roster file.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{PayrollError, PayrollResult};
use crate::models::{Compensation, Employee, PayStub};

use super::codec::{LoadOptions, format_record, parse_record};

/// An ordered list of employees.
///
/// Order is insertion order, which for a loaded roster is file order.
/// Employee numbers are expected to be unique but this is not enforced;
/// lookups return the first match.
///
/// # Example
///
/// ```
/// use payroll_ledger::models::{Compensation, Employee};
/// use payroll_ledger::roster::Roster;
///
/// let mut roster = Roster::new();
/// roster.push(Employee::new("E1", "Doe", "Jane", "Engineer", Compensation::salaried(60000.0, 20.0)));
///
/// assert_eq!(roster.enter_sick_day("E1", 3.0), Some(17.0));
/// assert_eq!(roster.find("E1").map(|e| e.sick_days()), Some(17.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    staff: Vec<Employee>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a roster holding `staff` in the given order.
    pub fn from_employees(staff: Vec<Employee>) -> Self {
        Self { staff }
    }

    /// Parses a roster from any buffered reader.
    ///
    /// Reading stops at end of input or at the first blank line. Any
    /// malformed record fails the whole parse.
    pub fn from_reader<R: BufRead>(reader: R, options: &LoadOptions) -> PayrollResult<Self> {
        let staff = read_staff(reader, options, Path::new("<input>"))?;
        Ok(Self { staff })
    }

    /// Loads the roster file at `path` with lenient category parsing.
    ///
    /// See [`Roster::load_with`].
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> PayrollResult<()> {
        self.load_with(path, &LoadOptions::default())
    }

    /// Loads the roster file at `path`, replacing the current staff list.
    ///
    /// The file must be UTF-8; an undecodable line fails the load with
    /// [`PayrollError::Encoding`]. On any error the current staff list is
    /// left as it was.
    pub fn load_with<P: AsRef<Path>>(&mut self, path: P, options: &LoadOptions) -> PayrollResult<()> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| PayrollError::io(path, e))?;

        let staff = read_staff(BufReader::new(file), options, path)?;
        info!(path = %path.display(), count = staff.len(), "Loaded roster");
        self.staff = staff;
        Ok(())
    }

    /// Writes the roster to `path`, one line per employee in roster order.
    ///
    /// The file is truncated first; a failed write may leave it partial.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> PayrollResult<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| PayrollError::io(path, e))?;

        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)
            .and_then(|()| writer.flush())
            .map_err(|e| PayrollError::io(path, e))?;

        info!(path = %path.display(), count = self.staff.len(), "Saved roster");
        Ok(())
    }

    /// Writes every record in roster file format to `out`.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for employee in &self.staff {
            writeln!(out, "{}", format_record(employee))?;
        }
        Ok(())
    }

    /// Appends an employee to the end of the roster.
    pub fn push(&mut self, employee: Employee) {
        self.staff.push(employee);
    }

    /// Returns the number of employees.
    pub fn len(&self) -> usize {
        self.staff.len()
    }

    /// Returns true if the roster has no employees.
    pub fn is_empty(&self) -> bool {
        self.staff.is_empty()
    }

    /// Iterates over employees in roster order.
    pub fn iter(&self) -> std::slice::Iter<'_, Employee> {
        self.staff.iter()
    }

    /// Returns the employees in roster order.
    pub fn employees(&self) -> &[Employee] {
        &self.staff
    }

    /// Returns the description of every employee in roster order.
    pub fn list_all(&self) -> Vec<String> {
        self.staff.iter().map(Employee::describe).collect()
    }

    /// Writes the `All Employees:` listing to `out`.
    pub fn write_employee_list<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "All Employees:")?;
        for line in self.list_all() {
            writeln!(out, "{}", line)?;
        }
        writeln!(out)
    }

    /// Returns the first employee with the given number.
    ///
    /// A miss is logged as a warning.
    pub fn find(&self, id: &str) -> Option<&Employee> {
        let found = self.staff.iter().find(|e| e.employee_number == id);
        if found.is_none() {
            warn!(employee_number = %id, "Employee not found");
        }
        found
    }

    /// Mutable form of [`Roster::find`].
    pub fn find_mut(&mut self, id: &str) -> Option<&mut Employee> {
        let found = self.staff.iter_mut().find(|e| e.employee_number == id);
        if found.is_none() {
            warn!(employee_number = %id, "Employee not found");
        }
        found
    }

    /// Writes the pay stub of employee `id` to `out`.
    ///
    /// Returns `Ok(false)` without writing anything if no such employee exists.
    pub fn print_pay_stub<W: Write>(&self, id: &str, out: &mut W) -> io::Result<bool> {
        match self.find(id) {
            Some(employee) => {
                employee.print_pay_stub(out)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Writes every pay stub in roster order, each followed by a blank line.
    pub fn print_all_pay_stubs<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "All Employee Pay Stubs:")?;
        writeln!(out)?;
        for employee in &self.staff {
            employee.print_pay_stub(out)?;
            writeln!(out)?;
        }
        Ok(())
    }

    /// Builds every pay stub in roster order.
    pub fn pay_stubs(&self) -> Vec<PayStub> {
        self.staff.iter().map(Employee::pay_stub).collect()
    }

    /// Records sick days for employee `id` and returns the new
    /// [`Employee::sick_days`] value, or `None` if there is no such employee.
    pub fn enter_sick_day(&mut self, id: &str, amount: f64) -> Option<f64> {
        let employee = self.find_mut(id)?;
        employee.use_sick_day(amount);

        let sick_days = employee.sick_days();
        info!(
            employee_number = %id,
            amount,
            sick_days,
            category = %employee.employment_type(),
            "Recorded sick days"
        );
        Some(sick_days)
    }

    /// Restores the yearly sick-day allowance of every salaried employee.
    ///
    /// Hourly employees are untouched. Returns the number of records reset.
    pub fn yearly_sick_day_reset(&mut self) -> usize {
        let count = self.reset_where(|c| matches!(c, Compensation::Salaried { .. }));
        info!(count, "Yearly sick day reset");
        count
    }

    /// Clears the sick days taken by every hourly employee.
    ///
    /// Salaried employees are untouched. Returns the number of records reset.
    pub fn monthly_sick_day_reset(&mut self) -> usize {
        let count = self.reset_where(|c| matches!(c, Compensation::Hourly { .. }));
        info!(count, "Monthly sick day reset");
        count
    }

    fn reset_where(&mut self, select: impl Fn(&Compensation) -> bool) -> usize {
        let mut count = 0;
        for employee in self.staff.iter_mut().filter(|e| select(&e.compensation)) {
            employee.reset_sick_days();
            count += 1;
        }
        count
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Employee;
    type IntoIter = std::slice::Iter<'a, Employee>;

    fn into_iter(self) -> Self::IntoIter {
        self.staff.iter()
    }
}

fn read_staff<R: BufRead>(
    reader: R,
    options: &LoadOptions,
    source: &Path,
) -> PayrollResult<Vec<Employee>> {
    let mut staff = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| match e.kind() {
            io::ErrorKind::InvalidData => PayrollError::Encoding {
                path: source.display().to_string(),
                line: index + 1,
            },
            _ => PayrollError::io(source, e),
        })?;
        if line.is_empty() {
            debug!(line = index + 1, "Blank line ends roster");
            break;
        }
        staff.push(parse_record(&line, index + 1, options)?);
    }

    Ok(staff)
}
