use iso8601_duration::{from_str, from_str_with_options, Duration, ErrorKind, ParseOptions};

fn assert_error(input: &str, kind: ErrorKind, column: usize) {
    match from_str(input) {
        Ok(duration) => panic!("{:?} parsed as {}", input, duration),
        Err(err) => {
            assert_eq!(err.kind(), kind, "kind for {:?}", input);
            assert_eq!(err.column(), column, "column for {:?}", input);
        }
    }
}

#[test]
fn test_error_cases() {
    assert_error("", ErrorKind::UnexpectedEof, 0);
    assert_error("P", ErrorKind::UnexpectedEof, 1);
    assert_error("+", ErrorKind::UnexpectedEof, 1);
    assert_error("è", ErrorKind::UnexpectedNonAsciiRune, 1);
    assert_error("P1", ErrorKind::MissingDesignator, 2);
    assert_error("P1A", ErrorKind::UnknownDesignator, 3);
    assert_error("P12D12D", ErrorKind::DuplicateDesignator, 7);
    assert_error("P1YD", ErrorKind::MissingNumber, 4);
    assert_error("Z", ErrorKind::MissingPDesignatorAtStart, 1);
}

#[test]
fn test_lowercase_is_rejected() {
    assert_error("p1d", ErrorKind::MissingPDesignatorAtStart, 1);
    assert_error("P1d", ErrorKind::UnknownDesignator, 3);
    assert_error("P1Dt1H", ErrorKind::MissingNumber, 4);
}

#[test]
fn test_whitespace_is_rejected() {
    assert_error(" P1D", ErrorKind::MissingPDesignatorAtStart, 1);
    assert_error("P1D ", ErrorKind::MissingNumber, 4);
    assert_error("P1 D", ErrorKind::UnknownDesignator, 3);
}

#[test]
fn test_fractions_are_rejected() {
    assert_error("PT0.5S", ErrorKind::UnknownDesignator, 4);
    assert_error("PT0,5S", ErrorKind::UnknownDesignator, 4);
}

#[test]
fn test_time_designators_need_t() {
    assert_error("P1H", ErrorKind::UnknownDesignator, 3);
    assert_error("P1S", ErrorKind::UnknownDesignator, 3);
}

#[test]
fn test_date_designators_after_t() {
    assert_error("PT1Y", ErrorKind::UnknownDesignator, 4);
    assert_error("PT1W", ErrorKind::UnknownDesignator, 4);
    assert_error("P1DT1H1D", ErrorKind::UnknownDesignator, 8);
}

#[test]
fn test_second_t() {
    assert_error("PT1HT1M", ErrorKind::MissingNumber, 5);
    assert_error("PTT", ErrorKind::MissingNumber, 3);
}

#[test]
fn test_sign_after_p() {
    assert_error("P-1D", ErrorKind::MissingNumber, 2);
    assert_error("P1D-", ErrorKind::MissingNumber, 4);
}

#[test]
fn test_duplicates_in_every_position() {
    for (input, column) in [
        ("P1Y2Y", 5),
        ("P1M2M", 5),
        ("P1W2W", 5),
        ("P1D2D", 5),
        ("PT1H2H", 6),
        ("PT1M2M", 6),
        ("PT1S2S", 6),
        ("P1Y1M1Y", 7),
    ] {
        assert_error(input, ErrorKind::DuplicateDesignator, column);
    }
}

#[test]
fn test_repeated_zero_is_still_duplicate() {
    assert_error("PT0S0S", ErrorKind::DuplicateDesignator, 6);
}

#[test]
fn test_overflow() {
    let max = format!("P{}D", u64::MAX);
    assert_eq!(from_str(&max).unwrap().days(), u64::MAX);

    let input = format!("P{}0D", u64::MAX);
    assert_error(&input, ErrorKind::DesignatorNumberTooLarge, input.len() - 1);

    let long = format!("PT{}", "9".repeat(40));
    assert_error(&long, ErrorKind::DesignatorNumberTooLarge, 22);
}

#[test]
fn test_long_zero_padding_is_fine() {
    let input = format!("P{}1D", "0".repeat(100));
    assert_eq!(from_str(&input).unwrap(), Duration::new().with_days(1));
}

#[test]
fn test_accepted_shapes() {
    let accepted = [
        ("PT", Duration::ZERO),
        ("P1YT", Duration::new().with_years(1)),
        ("P1W1D", Duration::new().with_weeks(1).with_days(1)),
        ("P1DT0S", Duration::new().with_days(1)),
        ("-+-P1D", Duration::new().with_days(1).with_negative(true)),
    ];
    for (input, expected) in accepted {
        assert_eq!(from_str(input).unwrap(), expected, "parsing {}", input);
    }
}

#[test]
fn test_strict_options() {
    let options = ParseOptions::strict();
    assert!(from_str_with_options("P12W", &options).is_ok());
    assert!(from_str_with_options("P12DT23H", &options).is_ok());

    let err = from_str_with_options("P1DT1H1W", &options).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownDesignator);

    let err = from_str_with_options("P2W1D", &options).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::WeeksMixedWithOtherDesignators);
    assert_eq!(err.column(), 5);

    let err = from_str_with_options("PT100S", &options).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TooManyDigitsForDesignator);
    assert_eq!(err.column(), 5);
}
