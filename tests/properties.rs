//! Property tests for the pay and sick-day rules.

use proptest::prelude::*;

use payroll_ledger::models::{Compensation, Employee, HOURS_PER_SICK_DAY, YEARLY_SICK_DAYS};
use payroll_ledger::roster::{LoadOptions, Roster};

fn amount() -> impl Strategy<Value = f64> {
    0.0..1_000_000.0f64
}

fn days() -> impl Strategy<Value = f64> {
    0.0..40.0f64
}

fn salaried() -> impl Strategy<Value = Employee> {
    (amount(), days()).prop_map(|(salary, left)| {
        Employee::new("S1", "Doe", "Jane", "Engineer", Compensation::salaried(salary, left))
    })
}

fn hourly() -> impl Strategy<Value = Employee> {
    (0.0..300.0f64, 0.0..200.0f64, days()).prop_map(|(hours, wage, taken)| {
        Employee::new("H1", "Roe", "Sam", "Clerk", Compensation::hourly(hours, wage, taken))
    })
}

fn employee() -> impl Strategy<Value = Employee> {
    prop_oneof![salaried(), hourly()]
}

proptest! {
    #[test]
    fn salaried_pay_is_a_twelfth_regardless_of_sick_days(mut employee in salaried(), used in days()) {
        let Compensation::Salaried { yearly_salary, .. } = employee.compensation else {
            unreachable!()
        };
        prop_assert_eq!(employee.pay(), yearly_salary / 12.0);

        employee.use_sick_day(used);
        prop_assert_eq!(employee.pay(), yearly_salary / 12.0);
    }

    #[test]
    fn hourly_pay_deducts_sick_days(employee in hourly()) {
        let Compensation::Hourly { hours_assigned, hourly_wage, sick_days_taken } = employee.compensation else {
            unreachable!()
        };
        prop_assert_eq!(
            employee.pay(),
            hours_assigned * hourly_wage - sick_days_taken * HOURS_PER_SICK_DAY * hourly_wage
        );
    }

    #[test]
    fn use_sick_day_overwrites(mut employee in employee(), first in days(), second in days()) {
        employee.use_sick_day(first);
        employee.use_sick_day(second);

        let expected = if employee.is_salaried() { YEARLY_SICK_DAYS - second } else { second };
        prop_assert_eq!(employee.sick_days(), expected);
    }

    #[test]
    fn reset_restores_baseline(mut employee in employee()) {
        employee.reset_sick_days();

        let expected = if employee.is_salaried() { YEARLY_SICK_DAYS } else { 0.0 };
        prop_assert_eq!(employee.sick_days(), expected);
    }

    #[test]
    fn category_resets_leave_the_other_category_alone(staff in prop::collection::vec(employee(), 0..20)) {
        let original = Roster::from_employees(staff);

        let mut yearly = original.clone();
        yearly.yearly_sick_day_reset();
        for (before, after) in original.iter().zip(yearly.iter()) {
            if before.is_hourly() {
                prop_assert_eq!(before, after);
            }
        }

        let mut monthly = original.clone();
        monthly.monthly_sick_day_reset();
        for (before, after) in original.iter().zip(monthly.iter()) {
            if before.is_salaried() {
                prop_assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn saved_text_reloads_to_the_same_roster(staff in prop::collection::vec(employee(), 0..20)) {
        let roster = Roster::from_employees(staff);

        let mut text = Vec::new();
        roster.write_to(&mut text).unwrap();
        let reloaded = Roster::from_reader(text.as_slice(), &LoadOptions::default()).unwrap();

        prop_assert_eq!(reloaded, roster);
    }
}
