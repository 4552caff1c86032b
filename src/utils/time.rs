use chrono::{NaiveDate, NaiveDateTime, Timelike};
use rust_i18n::t;

/// Parse time string in HH:MM format
pub fn parse_time(time_str: &str) -> Option<(u32, u32)> {
    let parts: Vec<&str> = time_str.trim().split(':').collect();
    if parts.len() != 2 {
        return None;
    }
    let hour = parts[0].parse::<u32>().ok()?;
    let minute = parts[1].parse::<u32>().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }
    Some((hour, minute))
}

/// Parse a whole-hour `HH:00` boundary, allowing `24:00` as end of day
pub fn parse_hour_boundary(time_str: &str) -> Option<u32> {
    if time_str.trim() == "24:00" {
        return Some(24);
    }
    match parse_time(time_str)? {
        (hour, 0) => Some(hour),
        _ => None,
    }
}

/// Part of the day a slot starts in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
}

impl TimeOfDay {
    pub fn of(instant: &NaiveDateTime) -> Self {
        if instant.hour() < 12 {
            TimeOfDay::Morning
        } else {
            TimeOfDay::Afternoon
        }
    }

    /// Localized qualifier used in generated subjects
    pub fn label(&self) -> String {
        match self {
            TimeOfDay::Morning => t!("time_of_day_morning"),
            TimeOfDay::Afternoon => t!("time_of_day_afternoon"),
        }
        .to_string()
    }
}

/// Human-readable label for a suggestion date relative to `today`
pub fn date_label(date: NaiveDate, today: NaiveDate) -> String {
    let formatted = date.format("%d.%m.").to_string();
    match (date - today).num_days() {
        0 => t!("date_label_today", date = formatted).to_string(),
        1 => t!("date_label_tomorrow", date = formatted).to_string(),
        _ => date.format("%a %d.%m.").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time() {
        // Valid cases
        assert_eq!(parse_time("00:00"), Some((0, 0)));
        assert_eq!(parse_time("12:30"), Some((12, 30)));
        assert_eq!(parse_time(" 09:00 "), Some((9, 0)));

        // Invalid cases
        assert_eq!(parse_time("24:00"), None); // Hour out of range
        assert_eq!(parse_time("12:60"), None); // Minute out of range
        assert_eq!(parse_time("12:30:45"), None); // Too many parts
        assert_eq!(parse_time("12"), None); // Too few parts
        assert_eq!(parse_time("ab:30"), None); // Invalid hour
    }

    #[test]
    fn test_parse_hour_boundary() {
        assert_eq!(parse_hour_boundary("09:00"), Some(9));
        assert_eq!(parse_hour_boundary("17:00"), Some(17));
        assert_eq!(parse_hour_boundary("24:00"), Some(24));
        assert_eq!(parse_hour_boundary("09:30"), None); // Slots are whole hours
        assert_eq!(parse_hour_boundary("nine"), None);
    }

    #[test]
    fn test_time_of_day() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        assert_eq!(TimeOfDay::of(&day.and_hms_opt(11, 59, 0).unwrap()), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::of(&day.and_hms_opt(12, 0, 0).unwrap()), TimeOfDay::Afternoon);
    }

    #[test]
    fn test_date_label_contains_date() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        let tomorrow = today.succ_opt().unwrap();

        assert!(date_label(today, today).contains("03.03."));
        assert!(date_label(tomorrow, today).contains("04.03."));
        assert_eq!(date_label(today + chrono::Duration::days(3), today), "Thu 06.03.");
    }
}
