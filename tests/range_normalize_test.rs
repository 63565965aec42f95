use misrkit::time::format_catalog_timestamp;
use misrkit::{normalize, MisrKitError, PathId};

#[test]
fn test_out_of_order_request_normalizes_like_the_ordered_one() {
    let (paths, dates) = normalize(169, 168, "2010-01-31", "2010-01-01").unwrap();
    let ordered = normalize(168, 169, "2010-01-01", "2010-01-31").unwrap();

    assert_eq!((paths, dates), ordered);
    assert_eq!(paths.first(), PathId::new(168).unwrap());
    assert_eq!(paths.last(), PathId::new(169).unwrap());
    assert_eq!(
        format_catalog_timestamp(&dates.start()),
        "2010-01-01T00:00:00Z"
    );
    assert_eq!(
        format_catalog_timestamp(&dates.end()),
        "2010-01-31T23:59:59Z"
    );
}

#[test]
fn test_single_day_single_path_request() {
    let (paths, dates) = normalize(5, 5, "2010-06-15", "2010-06-15").unwrap();

    assert_eq!(paths.len(), 1);
    assert_eq!(paths.first(), paths.last());
    assert_eq!(
        format_catalog_timestamp(&dates.start()),
        "2010-06-15T00:00:00Z"
    );
    assert_eq!(
        format_catalog_timestamp(&dates.end()),
        "2010-06-15T23:59:59Z"
    );
}

#[test]
fn test_start_date_is_floored_to_the_mission_epoch() {
    let (_, dates) = normalize(1, 1, "1999-01-01", "2000-03-01").unwrap();

    assert_eq!(
        format_catalog_timestamp(&dates.start()),
        "2000-02-24T00:00:00Z"
    );
    assert_eq!(
        format_catalog_timestamp(&dates.end()),
        "2000-03-01T23:59:59Z"
    );
}

#[test]
fn test_window_entirely_before_the_epoch_collapses_to_the_epoch_day() {
    let (_, dates) = normalize(1, 1, "1999-06-01", "1999-01-01").unwrap();

    assert_eq!(
        format_catalog_timestamp(&dates.start()),
        "2000-02-24T00:00:00Z"
    );
    assert_eq!(
        format_catalog_timestamp(&dates.end()),
        "2000-02-24T23:59:59Z"
    );
}

#[test]
fn test_invalid_path_is_reported_before_dates_are_parsed() {
    let err = normalize(0, 168, "not-a-date", "2010-01-31").unwrap_err();
    assert!(matches!(err, MisrKitError::OutOfRange(_)));
}

#[test]
fn test_malformed_dates_are_rejected() {
    let err = normalize(168, 169, "2010/01/01", "2010-01-31").unwrap_err();
    assert!(matches!(err, MisrKitError::DateParsing(_)));

    let err = normalize(168, 169, "2010-01-01", "2010-02-31").unwrap_err();
    assert!(matches!(err, MisrKitError::DateParsing(_)));
}
