use chrono::NaiveDate;
use tablepos::utils::range::parse_range;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn test_range_all() {
    assert_eq!(parse_range("all").unwrap(), None);
    assert_eq!(parse_range("ALL").unwrap(), None);
}

#[test]
fn test_range_single_periods() {
    assert_eq!(
        parse_range("2025").unwrap(),
        Some((d(2025, 1, 1), d(2025, 12, 31)))
    );
    assert_eq!(
        parse_range("2024-02").unwrap(),
        Some((d(2024, 2, 1), d(2024, 2, 29)))
    );
    assert_eq!(
        parse_range("2025-03-15").unwrap(),
        Some((d(2025, 3, 15), d(2025, 3, 15)))
    );
}

#[test]
fn test_range_spans() {
    assert_eq!(
        parse_range("2025-01:2025-03").unwrap(),
        Some((d(2025, 1, 1), d(2025, 3, 31)))
    );
    assert_eq!(
        parse_range("2025-03-01:2025-03-15").unwrap(),
        Some((d(2025, 3, 1), d(2025, 3, 15)))
    );
}

#[test]
fn test_range_invalid() {
    assert!(parse_range("2025-03:2025").is_err());
    assert!(parse_range("2025-04:2025-03").is_err());
    assert!(parse_range("25").is_err());
    assert!(parse_range("2025-13").is_err());
    assert!(parse_range("2025-02-30").is_err());
}
