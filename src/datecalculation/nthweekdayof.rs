use chrono::{
    NaiveDate,
    Weekday
};
use serde::{
    Serialize,
    Deserialize
};

use super::datecalculation::DateCalculation;

/// The n-th occurrence of a weekday within a month, e.g. the 4th Thursday
/// of November. `n` is 1-based; the caller must pick an `n` that resolves
/// to a real date in every evaluated year (a 5th occurrence exists only in
/// months long enough to hold it — prefer [`LastWeekdayOf`] for "the final
/// occurrence").
///
/// [`LastWeekdayOf`]: super::lastweekdayof::LastWeekdayOf
#[derive(PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub struct NthWeekdayOf {
    month: u32,
    n: u8,
    weekday: Weekday
}

impl NthWeekdayOf {
    pub fn new(n: u8, weekday: Weekday, month: u32) -> NthWeekdayOf {
        NthWeekdayOf { month, n, weekday }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn n(&self) -> u8 {
        self.n
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }
}

impl DateCalculation for NthWeekdayOf {
    fn date_for_year(&self, year: i32) -> NaiveDate {
        NaiveDate::from_weekday_of_month_opt(year, self.month, self.weekday, self.n).unwrap()
    }
}
