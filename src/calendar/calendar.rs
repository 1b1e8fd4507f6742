use std::sync::RwLock;

use chrono::{
    Datelike,
    NaiveDate
};

use crate::datecalculation::datecalculation::DateCalculation;
use crate::datecalculation::weekendshift::WeekendShift;
use super::calendarerror::CalendarError;
use super::holiday::Holiday;

/// A registered holiday rule: the weekend-shifted calculation plus a flag
/// marking rules whose observed date can cross a year boundary.
struct HolidayDefinition {
    name: String,
    calculation: WeekendShift,
    check_for_year_shift: bool
}

#[derive(Default)]
struct CalendarState {
    disable_shift_saturday: bool,
    disable_shift_sunday: bool,
    holidays: Vec<HolidayDefinition>
}

/// Registry of named holiday rules with per-year query operations.
///
/// Holidays are registered through [`add_holiday`] and evaluated on demand;
/// nothing is persisted. The registry and the two shift-disable flags are
/// guarded as one unit by a single `RwLock`, so a `Calendar` can be shared
/// across threads: mutations take the write lock, queries the read lock.
///
/// [`add_holiday`]: Calendar::add_holiday
pub struct Calendar {
    state: RwLock<CalendarState>
}

impl Calendar {
    pub fn new() -> Calendar {
        Calendar { state: RwLock::new(CalendarState::default()) }
    }

    pub fn disable_shift_saturday(&self) -> bool {
        self.state.read().unwrap().disable_shift_saturday
    }

    /// Stops Saturday occurrences from being observed on the preceding
    /// Friday. Only affects holidays registered after the call; already
    /// registered holidays keep the flag value captured at registration.
    pub fn set_disable_shift_saturday(&self, disable: bool) {
        self.state.write().unwrap().disable_shift_saturday = disable;
    }

    pub fn disable_shift_sunday(&self) -> bool {
        self.state.read().unwrap().disable_shift_sunday
    }

    /// Stops Sunday occurrences from being observed on the following
    /// Monday. Same registration-time capture as the Saturday flag.
    pub fn set_disable_shift_sunday(&self, disable: bool) {
        self.state.write().unwrap().disable_shift_sunday = disable;
    }

    /// Registers a holiday rule under `name`, wrapping `calculation` with
    /// the weekend-shift decorator configured from the current flag values.
    ///
    /// Names are not deduplicated: registering the same name twice yields
    /// two independent entries, both evaluated on every query.
    ///
    /// `may_shift_year` must be set for rules anchored close enough to
    /// Jan 1 or Dec 31 that a weekend shift can move the observed date into
    /// the adjacent year; [`all_holidays_for_year`] misses such spillovers
    /// otherwise.
    ///
    /// [`all_holidays_for_year`]: Calendar::all_holidays_for_year
    pub fn add_holiday<C>(&self, name: &str, calculation: C, may_shift_year: bool)
    where
        C: DateCalculation + 'static
    {
        let mut state = self.state.write().unwrap();
        let shifted = WeekendShift::new(
            Box::new(calculation),
            !state.disable_shift_saturday,
            !state.disable_shift_sunday
        );
        state.holidays.push(HolidayDefinition {
            name: name.to_owned(),
            calculation: shifted,
            check_for_year_shift: may_shift_year
        });
    }

    /// Discards every registered holiday, returning to the empty state.
    pub fn clear_holidays(&self) {
        self.state.write().unwrap().holidays.clear();
    }

    /// Registered holiday names in registration order, duplicates included.
    pub fn list_holidays(&self) -> Vec<String> {
        let state = self.state.read().unwrap();
        state.holidays.iter().map(|def| def.name.clone()).collect()
    }

    /// All holidays observed within `year`, in registration order.
    ///
    /// Each rule is evaluated at `year` and kept only when the observed
    /// date still falls in `year`. Rules flagged with `may_shift_year` are
    /// additionally evaluated at the two adjacent years and any result
    /// landing in `year` is kept too, so a Jan 1 rule whose observance
    /// shifts back to Dec 31 is attributed to the earlier year. A single
    /// rule can therefore contribute zero, one, or two entries.
    pub fn all_holidays_for_year(&self, year: i32) -> Vec<Holiday> {
        let state = self.state.read().unwrap();
        let mut holidays = Vec::new();

        for def in state.holidays.iter() {
            let mut push_if_observed_in_year = |process_year: i32| {
                let date = def.calculation.date_for_year(process_year);
                if date.year() == year {
                    holidays.push(Holiday { name: def.name.clone(), date });
                }
            };

            push_if_observed_in_year(year);

            if def.check_for_year_shift {
                push_if_observed_in_year(year - 1);
                push_if_observed_in_year(year + 1);
            }
        }

        holidays
    }

    /// Observed dates of the holiday named `name` for each requested year,
    /// in the given order.
    ///
    /// Matching is case-sensitive and stops at the first registered entry;
    /// duplicates registered later are never consulted. Unlike
    /// [`all_holidays_for_year`] the dates are the raw per-year evaluations,
    /// without the year-boundary filter.
    ///
    /// [`all_holidays_for_year`]: Calendar::all_holidays_for_year
    pub fn holiday_date_for_years(&self,
                                  name: &str,
                                  years: &[i32]) -> Result<Vec<NaiveDate>, CalendarError> {
        let state = self.state.read().unwrap();
        let def = state.holidays.iter()
            .find(|def| def.name == name)
            .ok_or_else(|| CalendarError::HolidayNotFound(name.to_owned()))?;

        Ok(years.iter().map(|&year| def.calculation.date_for_year(year)).collect())
    }

    /// Whether `date` falls on any registered holiday as observed in its
    /// year. Comparison is by month and day; the year filter already
    /// happened in [`all_holidays_for_year`].
    ///
    /// [`all_holidays_for_year`]: Calendar::all_holidays_for_year
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.all_holidays_for_year(date.year())
            .iter()
            .any(|holiday| holiday.date.month() == date.month()
                        && holiday.date.day() == date.day())
    }
}

impl Default for Calendar {
    fn default() -> Calendar {
        Calendar::new()
    }
}
