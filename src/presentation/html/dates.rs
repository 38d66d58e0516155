use chrono::NaiveDate;

/// Short en-US display date, e.g. `Jan 15, 2024`.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_month_abbreviation_day_and_year() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(format_display_date(date), "Jan 15, 2024");
    }

    #[test]
    fn single_digit_days_are_not_padded() {
        let date = NaiveDate::from_ymd_opt(2023, 12, 5).unwrap();
        assert_eq!(format_display_date(date), "Dec 5, 2023");
    }
}
