use chrono::NaiveDate;


/// A recurrence rule resolved per year.
///
/// Implementations are pure: the same year always maps to the same date,
/// no state, no failure. `Send + Sync` so calculations can be shared
/// behind a `Calendar` used from multiple threads.
pub trait DateCalculation: Send + Sync {

    fn date_for_year(&self, year: i32) -> NaiveDate;
}
