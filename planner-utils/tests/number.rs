use planner_utils::*;

#[test]
fn test_parse_whole_number() {
    assert_eq!(parse_whole_number("10"), Ok(10));
    assert_eq!(parse_whole_number(" 7 "), Ok(7));
    assert_eq!(parse_whole_number("+3"), Ok(3));
    assert_eq!(parse_whole_number("0"), Ok(0));
}

#[test]
fn test_parse_whole_number_rejects_non_integers() {
    assert!(parse_whole_number("").is_err());
    assert!(parse_whole_number("-1").is_err());
    assert!(parse_whole_number("2.5").is_err());
    assert!(parse_whole_number("Item Weight (Integer)").is_err());
    assert!(parse_whole_number("4294967296").is_err());
}

#[test]
fn test_parse_signed() {
    assert_eq!(parse_signed("-5"), Ok(-5));
    assert_eq!(parse_signed("18"), Ok(18));
    assert!(parse_signed("eighteen").is_err());
}

#[test]
fn test_ratio() {
    assert_eq!(ratio(60.0, 10), 6.0);
    assert_eq!(ratio(0.0, 4), 0.0);
    assert_eq!(ratio(5.0, 0), f64::INFINITY);
    assert_eq!(ratio(0.0, 0), f64::INFINITY);
}
