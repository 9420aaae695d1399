//! Unit tests for duration parsing

use crate::services::token::{parse_ttl, FALLBACK_TTL_SECONDS};

#[test]
fn test_parse_units() {
    assert_eq!(parse_ttl(Some("15m")), 900);
    assert_eq!(parse_ttl(Some("7d")), 604_800);
    assert_eq!(parse_ttl(Some("1h")), 3_600);
    assert_eq!(parse_ttl(Some("30s")), 30);
    assert_eq!(parse_ttl(Some("0s")), 0);
}

#[test]
fn test_units_are_case_insensitive() {
    assert_eq!(parse_ttl(Some("2H")), 7_200);
    assert_eq!(parse_ttl(Some("10M")), 600);
    assert_eq!(parse_ttl(Some("1D")), 86_400);
}

#[test]
fn test_fallback() {
    assert_eq!(FALLBACK_TTL_SECONDS, 900);
    assert_eq!(parse_ttl(Some("bogus")), 900);
    assert_eq!(parse_ttl(Some("")), 900);
    assert_eq!(parse_ttl(None), 900);
    assert_eq!(parse_ttl(Some("15")), 900);
    assert_eq!(parse_ttl(Some("m")), 900);
    assert_eq!(parse_ttl(Some("1w")), 900);
    assert_eq!(parse_ttl(Some("-5m")), 900);
    assert_eq!(parse_ttl(Some(" 15m")), 900);
    assert_eq!(parse_ttl(Some("1.5h")), 900);
}

#[test]
fn test_overflow_falls_back() {
    assert_eq!(parse_ttl(Some("99999999999999999999d")), 900);
    assert_eq!(parse_ttl(Some("9223372036854775807d")), 900);
}
