pub mod calendar {
    pub mod calendar;
    pub mod calendarerror;
    pub mod holiday;
}

pub mod catalog {
    pub mod unitedstates;
}

pub mod datecalculation {
    pub mod datecalculation;
    pub mod fixedday;
    pub mod lastweekdayof;
    pub mod nthweekdayof;
    pub mod weekendshift;
}
