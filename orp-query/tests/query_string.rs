use orp_query::{QueryString, QueryValue};

#[test]
fn repeated_name_accumulates_in_order() {
    let q = QueryString::parse("a=1&a=2&a=3");
    assert_eq!(
        q.get("a"),
        Some(&QueryValue::Multiple(vec![
            "1".to_string(),
            "2".to_string(),
            "3".to_string()
        ]))
    );
}

#[test]
fn single_name_is_scalar() {
    let q = QueryString::parse("a=1");
    assert_eq!(q.get("a"), Some(&QueryValue::Single("1".to_string())));
    assert!(!q.get("a").unwrap().is_multiple());
}

#[test]
fn search_form_query() {
    let q = QueryString::parse(
        "?object_name=M%2031&ra_hms=00%3A42%3A44.3&dec_dms=%2B41%3A16%3A09&filter=V&filter=R&filter=I",
    );
    assert_eq!(q.first("object_name"), Some("M 31"));
    assert_eq!(q.first("ra_hms"), Some("00:42:44.3"));
    assert_eq!(q.first("dec_dms"), Some("+41:16:09"));
    assert_eq!(q.all("filter"), ["V", "R", "I"]);
    assert_eq!(q.len(), 4);
}

#[test]
fn url_and_bare_query_agree() {
    let a = QueryString::from_url("https://example.org/view?page=3&sort=id").unwrap();
    let b = QueryString::parse("page=3&sort=id");
    assert_eq!(a, b);
}

#[cfg(feature = "serde")]
#[test]
fn serializes_like_a_plain_object() {
    let q = QueryString::parse("a=1&a=2&a=3&b=x");
    let json = serde_json::to_string(&q).unwrap();
    assert_eq!(json, r#"{"a":["1","2","3"],"b":"x"}"#);

    let back: QueryString = serde_json::from_str(&json).unwrap();
    assert_eq!(back, q);
}
