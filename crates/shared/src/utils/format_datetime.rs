use chrono::NaiveDateTime;

/// Renders an author's creation timestamp the way the API exposes it,
/// e.g. `15.01.2020 10:30:00`.
pub fn format_author_created_at(created_at: &NaiveDateTime) -> String {
    created_at.format("%d.%m.%Y %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn formats_with_zero_padding() {
        let dt = NaiveDate::from_ymd_opt(2020, 1, 15)
            .unwrap()
            .and_hms_opt(9, 5, 3)
            .unwrap();

        assert_eq!(format_author_created_at(&dt), "15.01.2020 09:05:03");
    }
}
