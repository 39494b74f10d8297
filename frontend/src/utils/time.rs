use chrono::{DateTime, Datelike, Local, TimeZone};

pub fn year_label<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    now.year().to_string()
}

pub fn current_year_label() -> String {
    year_label(&Local::now())
}
