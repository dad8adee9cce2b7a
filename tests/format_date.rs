use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use strategy_graph_wasm::domain::graph::{CalendarDate, format_date};

#[quickcheck]
fn valid_dates_are_zero_padded_iso(year: u16, month: u8, day: u8) -> bool {
    let year = 1000 + (year as i32 % 9000);
    let month = 1 + (month as u32 % 12);
    let day = 1 + (day as u32 % 28);

    let formatted = format_date(CalendarDate::from_ymd(year, month, day));
    let bytes = formatted.as_bytes();

    formatted.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit())
        && formatted == format!("{:04}-{:02}-{:02}", year, month, day)
}

#[quickcheck]
fn out_of_range_components_format_empty(year: i16, month: u8, day: u8) -> TestResult {
    let month = month as u32;
    let day = day as u32;
    if (1..=12).contains(&month) && (1..=28).contains(&day) {
        return TestResult::discard();
    }
    let date = CalendarDate::from_ymd(year as i32, month, day);
    if date.is_valid() {
        // 29..31 exist in some months
        return TestResult::discard();
    }
    TestResult::from_bool(format_date(date).is_empty())
}

#[quickcheck]
fn unparsable_input_formats_empty(input: String) -> TestResult {
    let date = CalendarDate::parse(&input);
    if date.is_valid() {
        return TestResult::discard();
    }
    TestResult::from_bool(format_date(date).is_empty())
}

#[test]
fn example_dates() {
    assert_eq!(format_date(CalendarDate::from_ymd(2024, 3, 7)), "2024-03-07");
    assert_eq!(format_date(CalendarDate::parse("2024-03-07")), "2024-03-07");
    assert_eq!(format_date(CalendarDate::parse("07.03.2024")), "");
    assert_eq!(format_date(CalendarDate::invalid()), "");
}
