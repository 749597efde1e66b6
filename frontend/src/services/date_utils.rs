use chrono::NaiveDate;

/// Current calendar date from the browser clock, in the user's local time
/// zone. This is the "today" the calorie summary compares against.
pub fn today() -> NaiveDate {
    use js_sys::Date;
    let now = Date::new_0();
    let year = now.get_full_year() as i32;
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
