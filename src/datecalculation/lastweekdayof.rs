use chrono::{
    Datelike,
    Days,
    NaiveDate,
    Weekday
};
use serde::{
    Serialize,
    Deserialize
};

use super::datecalculation::DateCalculation;

/// The last occurrence of a weekday within a month, e.g. Memorial Day on
/// the last Monday of May. Handles months of varying length and leap-year
/// February without special-casing.
#[derive(PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub struct LastWeekdayOf {
    month: u32,
    weekday: Weekday
}

impl LastWeekdayOf {
    pub fn new(weekday: Weekday, month: u32) -> LastWeekdayOf {
        LastWeekdayOf { month, weekday }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }
}

impl DateCalculation for LastWeekdayOf {
    fn date_for_year(&self, year: i32) -> NaiveDate {
        let first_of_next_month = if self.month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap()
        } else {
            NaiveDate::from_ymd_opt(year, self.month + 1, 1).unwrap()
        };

        // Days to step back from the first of the next month to reach the
        // target weekday; stepping back zero days would leave the month, so
        // a same-weekday boundary means a full week back.
        let days_back = ((first_of_next_month.weekday().num_days_from_monday() as i32
                         - self.weekday.num_days_from_monday() as i32 + 7) % 7) as u64;
        let days_back = if days_back == 0 { 7 } else { days_back };

        first_of_next_month - Days::new(days_back)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_monday_of_january() {
        let calc = LastWeekdayOf::new(Weekday::Mon, 1);

        assert_eq!(calc.date_for_year(2000), NaiveDate::from_ymd_opt(2000, 1, 31).unwrap());
    }

    #[test]
    fn last_tuesday_of_a_leap_year_february() {
        let calc = LastWeekdayOf::new(Weekday::Tue, 2);

        assert_eq!(calc.date_for_year(2000), NaiveDate::from_ymd_opt(2000, 2, 29).unwrap());
    }

    #[test]
    fn last_weekday_of_december_stays_in_december() {
        let calc = LastWeekdayOf::new(Weekday::Fri, 12);

        assert_eq!(calc.date_for_year(2021), NaiveDate::from_ymd_opt(2021, 12, 31).unwrap());
    }
}
