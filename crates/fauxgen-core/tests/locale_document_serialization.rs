use std::collections::BTreeMap;

use fauxgen_core::{LocaleDocument, LocaleTag, LocaleValue};

#[test]
fn serializes_document_deterministically() {
    let mut internet = BTreeMap::new();
    internet.insert(
        "domain_suffix".to_string(),
        LocaleValue::List(vec!["com".to_string(), "org".to_string()]),
    );
    let mut data = BTreeMap::new();
    data.insert("internet".to_string(), LocaleValue::Table(internet));

    let document = LocaleDocument {
        document_version: "0.1".to_string(),
        locale: "en-US".to_string(),
        fallback: None,
        data,
    };

    let json = serde_json::to_string_pretty(&document).expect("serialize document");
    let expected = r#"{
  "document_version": "0.1",
  "locale": "en-US",
  "data": {
    "internet": {
      "domain_suffix": [
        "com",
        "org"
      ]
    }
  }
}"#;
    assert_eq!(json, expected);
}

#[test]
fn document_version_defaults_when_absent() {
    let document: LocaleDocument =
        serde_json::from_str(r#"{"locale": "en", "data": {}}"#).expect("parse document");
    assert_eq!(document.document_version, fauxgen_core::LOCALE_DOCUMENT_VERSION);
    assert!(document.fallback.is_none());
}

#[test]
fn locale_tag_round_trips_through_serde() {
    let tag: LocaleTag = serde_json::from_str(r#""en_us""#).expect("parse tag");
    assert_eq!(tag.as_str(), "en-US");
    assert_eq!(serde_json::to_string(&tag).expect("serialize tag"), r#""en-US""#);

    let err = serde_json::from_str::<LocaleTag>(r#""not a locale""#);
    assert!(err.is_err());
}
