use chrono::NaiveDate;
use js_sys::Date;
use shared::Filter;

/// Number of past years offered by the year filter, besides the current one
pub const YEAR_OPTIONS_BACK: i32 = 5;

/// Today's date from the browser clock
pub fn today() -> NaiveDate {
    let now = Date::new_0();
    let year = now.get_full_year() as i32;
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub fn period_of(date: NaiveDate) -> Filter {
    use chrono::Datelike;
    Filter {
        month: date.month(),
        year: date.year(),
    }
}

/// Years listed in the filter: the current one first, then the previous five
pub fn year_options(current_year: i32) -> Vec<i32> {
    (0..=YEAR_OPTIONS_BACK).map(|back| current_year - back).collect()
}
