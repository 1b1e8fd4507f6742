use chrono::Weekday;

use crate::calendar::calendar::Calendar;
use crate::datecalculation::fixedday::FixedDay;
use crate::datecalculation::lastweekdayof::LastWeekdayOf;
use crate::datecalculation::nthweekdayof::NthWeekdayOf;

/// Registers the ten US federal holidays.
///
/// New Year's Day is the only rule flagged for year-boundary spillover;
/// every other federal holiday sits far enough from Jan 1 / Dec 31 that a
/// one-day weekend shift cannot leave its year.
pub fn add_us_holidays(calendar: &Calendar) {
    calendar.add_holiday("New Years Day", FixedDay::new(1, 1), true);
    calendar.add_holiday("Martin Luther King Day", NthWeekdayOf::new(3, Weekday::Mon, 1), false);
    calendar.add_holiday("President's Day", NthWeekdayOf::new(3, Weekday::Mon, 2), false);
    calendar.add_holiday("Memorial Day", LastWeekdayOf::new(Weekday::Mon, 5), false);
    calendar.add_holiday("Independence Day", FixedDay::new(4, 7), false);
    calendar.add_holiday("Labor Day", NthWeekdayOf::new(1, Weekday::Mon, 9), false);
    calendar.add_holiday("Columbus Day", NthWeekdayOf::new(2, Weekday::Mon, 10), false);
    calendar.add_holiday("Veteran's Day", FixedDay::new(11, 11), false);
    calendar.add_holiday("Thanksgiving", NthWeekdayOf::new(4, Weekday::Thu, 11), false);
    calendar.add_holiday("Christmas Day", FixedDay::new(25, 12), false);
}
