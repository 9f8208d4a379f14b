use super::*;

#[test]
fn format_headcount_shows_the_number() {
    assert_eq!(format_headcount(Some(42)), "42");
    assert_eq!(format_headcount(Some(0)), "0");
}

#[test]
fn format_headcount_placeholder_when_unknown() {
    assert_eq!(format_headcount(None), "—");
}
