use orp_core::angle::{dec_to_decimal, dec_to_dms, ra_to_decimal, ra_to_hms, validate_ra};
use orp_core::{is_numeric, DecimalDegrees, Parsed};

// --- Fail-soft conversions ---

#[test]
fn ra_noon_and_a_half() {
    assert_eq!(ra_to_decimal("12:30:00").to_string(), "187.5000000000");
}

#[test]
fn dec_negative_and_default_sign() {
    assert_eq!(dec_to_decimal("-45:30:00").to_string(), "-45.5000000000");
    assert_eq!(dec_to_decimal("45:30:00").to_string(), "45.5000000000");
}

#[test]
fn non_matching_text_is_identity() {
    let inputs = [
        "",
        "M31",
        "12 30 00",
        "12h30m00s",
        "1:2:3:4",
        "abc:def",
        "١٢:٣٠:٠٠",
        "12:30:00\n",
    ];
    for input in inputs {
        assert_eq!(ra_to_decimal(input).to_string(), input);
        assert_eq!(dec_to_decimal(input).to_string(), input);
        assert!(ra_to_decimal(input).is_original());
        assert!(dec_to_decimal(input).is_original());
    }
}

#[test]
fn out_of_range_is_identity() {
    assert_eq!(ra_to_decimal("24:00:00"), Parsed::Original("24:00:00"));
    assert_eq!(dec_to_decimal("-91:00:00"), Parsed::Original("-91:00:00"));
}

#[test]
fn value_variant_exposes_degrees() {
    match ra_to_decimal("06:00") {
        Parsed::Value(DecimalDegrees(d)) => assert_eq!(d, 90.0),
        Parsed::Original(s) => panic!("unexpected pass-through of {s}"),
    }
}

// --- Numeric check ---

#[test]
fn numeric_check() {
    assert!(is_numeric("42"));
    assert!(!is_numeric("abc"));
    assert!(!is_numeric("Infinity"));
}

// --- Formatting and validation ---

#[test]
fn decimal_back_to_sexagesimal() {
    assert_eq!(ra_to_hms(187.5).unwrap(), "12:30:00.000");
    assert_eq!(dec_to_dms(-45.5).unwrap(), "-45:30:00.000");
}

#[test]
fn form_field_in_either_notation() {
    let a = validate_ra("83.875").unwrap();
    let b = validate_ra("05:35:30").unwrap();
    assert_eq!(a.sexagesimal, b.sexagesimal);
    assert!((a.degrees - b.degrees).abs() < 1e-10);
}

#[cfg(feature = "serde")]
#[test]
fn coordinate_serde() {
    let c = validate_ra("12:30:00").unwrap();
    let json = serde_json::to_string(&c).unwrap();
    assert_eq!(json, r#"{"degrees":187.5,"sexagesimal":"12:30:00.000"}"#);

    let d: DecimalDegrees = serde_json::from_str("187.5").unwrap();
    assert_eq!(d, DecimalDegrees(187.5));
}
