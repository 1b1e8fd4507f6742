use chrono::{
    Datelike,
    Days,
    NaiveDate,
    Weekday
};

use super::datecalculation::DateCalculation;

const ONE_DAY: Days = Days::new(1);

/// Decorates a [`DateCalculation`] with the US federal weekend-observance
/// convention: a Saturday occurrence is observed on the preceding Friday,
/// a Sunday occurrence on the following Monday.
///
/// The two shift switches are captured by value when the decorator is
/// built, so reconfiguring a calendar afterwards never changes holidays
/// that were already registered.
pub struct WeekendShift {
    inner: Box<dyn DateCalculation>,
    shift_saturday: bool,
    shift_sunday: bool
}

impl WeekendShift {
    pub fn new(inner: Box<dyn DateCalculation>,
               shift_saturday: bool,
               shift_sunday: bool) -> WeekendShift {
        WeekendShift { inner, shift_saturday, shift_sunday }
    }

    pub fn shift_saturday(&self) -> bool {
        self.shift_saturday
    }

    pub fn shift_sunday(&self) -> bool {
        self.shift_sunday
    }
}

impl DateCalculation for WeekendShift {
    fn date_for_year(&self, year: i32) -> NaiveDate {
        let date = self.inner.date_for_year(year);

        match date.weekday() {
            Weekday::Sat if self.shift_saturday => date - ONE_DAY,
            Weekday::Sun if self.shift_sunday => date + ONE_DAY,
            _ => date
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::datecalculation::fixedday::FixedDay;

    #[test]
    fn saturday_observed_on_the_preceding_friday() {
        // 2000-01-01 was a Saturday, shifting across the year boundary.
        let calc = WeekendShift::new(Box::new(FixedDay::new(1, 1)), true, true);

        assert_eq!(calc.date_for_year(2000), NaiveDate::from_ymd_opt(1999, 12, 31).unwrap());
    }

    #[test]
    fn sunday_observed_on_the_following_monday() {
        // 2000-12-31 was a Sunday.
        let calc = WeekendShift::new(Box::new(FixedDay::new(31, 12)), true, true);

        assert_eq!(calc.date_for_year(2000), NaiveDate::from_ymd_opt(2001, 1, 1).unwrap());
    }

    #[test]
    fn weekday_occurrences_are_untouched() {
        // 1999-01-01 was a Friday.
        let calc = WeekendShift::new(Box::new(FixedDay::new(1, 1)), true, true);

        assert_eq!(calc.date_for_year(1999), NaiveDate::from_ymd_opt(1999, 1, 1).unwrap());
    }

    #[test]
    fn disabled_saturday_shift_leaves_the_nominal_date() {
        let calc = WeekendShift::new(Box::new(FixedDay::new(1, 1)), false, true);

        assert_eq!(calc.date_for_year(2000), NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
    }

    #[test]
    fn disabled_sunday_shift_leaves_the_nominal_date() {
        let calc = WeekendShift::new(Box::new(FixedDay::new(31, 12)), true, false);

        assert_eq!(calc.date_for_year(2000), NaiveDate::from_ymd_opt(2000, 12, 31).unwrap());
    }
}
