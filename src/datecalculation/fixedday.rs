use chrono::NaiveDate;
use serde::{
    Serialize,
    Deserialize
};

use super::datecalculation::DateCalculation;

/// A holiday that falls on the same day of the same month every year,
/// e.g. Independence Day on July 4th.
///
/// The day/month combination is not validated; the caller must supply a
/// combination that exists in every year it evaluates (day 29 of month 2
/// only exists in leap years).
#[derive(PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub struct FixedDay {
    month: u32,
    day: u32
}

impl FixedDay {
    pub fn new(day: u32, month: u32) -> FixedDay {
        FixedDay { month, day }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl DateCalculation for FixedDay {
    fn date_for_year(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.month, self.day).unwrap()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_the_same_day_every_year() {
        let calc = FixedDay::new(1, 1);

        assert_eq!(calc.date_for_year(2000), NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
        assert_eq!(calc.date_for_year(2019), NaiveDate::from_ymd_opt(2019, 1, 1).unwrap());
    }

    #[test]
    fn leap_day_resolves_in_leap_years() {
        let calc = FixedDay::new(29, 2);

        assert_eq!(calc.date_for_year(2000), NaiveDate::from_ymd_opt(2000, 2, 29).unwrap());
    }
}
