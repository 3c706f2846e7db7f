use club_site::content::{
    ContentError, ContentSource, FieldShape, JsonFileContentSource, validate_entry,
};
use club_site::{ContentEntry, ContentType, ContentValue};
use serde_json::json;
use std::io::Write;
use tempfile::NamedTempFile;

fn rich(text: &str) -> serde_json::Value {
    json!({
        "nodeType": "document",
        "data": {},
        "content": [{"nodeType": "paragraph", "data": {}, "content": [
            {"nodeType": "text", "value": text, "marks": [], "data": {}}
        ]}]
    })
}

fn export_file() -> NamedTempFile {
    let export = json!({
        "items": [
            {
                "sys": {"id": "home", "contentType": {"sys": {"id": "homepage"}}},
                "fields": {"heroTitle": "Build things together", "heroSubtitle": rich("Weekly workshops for every skill level.")}
            },
            {
                "sys": {"id": "post-1", "contentType": {"sys": {"id": "blogPost"}}},
                "fields": {"title": "Fall kickoff", "slug": "fall-kickoff", "content": rich("We are back.")}
            },
            {
                "sys": {"id": "post-2", "contentType": {"sys": {"id": "blogPost"}}},
                "fields": {"title": "Draft", "slug": "draft", "content": "plain body"}
            },
            {
                "sys": {"id": "acme", "contentType": {"sys": {"id": "sponsor"}}},
                "fields": {"name": "Acme", "tier": "Gold", "website": null}
            }
        ]
    });
    let mut file = NamedTempFile::new().expect("create temp file");
    write!(file, "{}", export).unwrap();
    file
}

#[test]
fn fetch_filters_by_content_type() {
    let file = export_file();
    let source = JsonFileContentSource::new(file.path());

    let homes = source.fetch_entries(ContentType::Homepage).unwrap();
    assert_eq!(homes.len(), 1);
    assert_eq!(homes[0].text("heroTitle"), "Build things together");
    assert_eq!(
        homes[0].field("heroSubtitle").display_text(),
        "Weekly workshops for every skill level."
    );

    let sponsors = source.fetch_entries(ContentType::Sponsor).unwrap();
    assert_eq!(sponsors.len(), 1);
    assert!(sponsors[0].field("website").is_absent());

    assert!(source.fetch_entries(ContentType::Partner).unwrap().is_empty());
}

#[test]
fn lenient_source_skips_invalid_entries() {
    let file = export_file();
    let posts = JsonFileContentSource::new(file.path())
        .fetch_entries(ContentType::BlogPost)
        .unwrap();
    let ids: Vec<&str> = posts.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["post-1"]);
}

#[test]
fn strict_source_reports_schema_errors() {
    let file = export_file();
    let err = JsonFileContentSource::new(file.path())
        .strict(true)
        .fetch_entries(ContentType::BlogPost)
        .unwrap_err();
    match err {
        ContentError::Schema(schema) => {
            assert_eq!(schema.entry_id, "post-2");
            assert_eq!(schema.field, "content");
        }
        other => panic!("unexpected error {other}"),
    }
}

#[test]
fn missing_file_is_an_io_error() {
    let source = JsonFileContentSource::new("/definitely/not/here.json");
    assert!(matches!(
        source.fetch_entries(ContentType::Homepage),
        Err(ContentError::Io(_))
    ));
}

#[test]
fn malformed_file_is_a_serialization_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{ not json").unwrap();
    let source = JsonFileContentSource::new(file.path());
    assert!(matches!(
        source.fetch_entries(ContentType::Homepage),
        Err(ContentError::Serialization(_))
    ));
}

#[test]
fn required_fields_must_be_present() {
    let entry = ContentEntry::new("p1", ContentType::Partner).with_field("website", "https://example.org");
    let err = validate_entry(&entry).unwrap_err();
    assert_eq!(err.field, "name");
    assert!(err.to_string().contains("required"));
}

#[test]
fn text_or_rich_fields_accept_both_shapes() {
    let plain = ContentEntry::new("f1", ContentType::FeatureHighlight)
        .with_field("title", "Workshops")
        .with_field("description", "Every Friday");
    let rich_entry = ContentEntry::new("f2", ContentType::FeatureHighlight)
        .with_field("title", "Workshops")
        .with_field("description", ContentValue::from(rich("Every Friday")));
    assert!(validate_entry(&plain).is_ok());
    assert!(validate_entry(&rich_entry).is_ok());
    assert!(
        ContentType::FeatureHighlight
            .fields()
            .iter()
            .any(|field| field.name == "description" && field.shape == FieldShape::TextOrRich)
    );
}

#[test]
fn unsupported_values_fail_validation() {
    let entry = ContentEntry::new("s1", ContentType::Sponsor)
        .with_field("name", "Acme")
        .with_field("tier", ContentValue::from(json!(1)));
    let err = validate_entry(&entry).unwrap_err();
    assert_eq!(err.field, "tier");
}

#[test]
fn undeclared_fields_are_ignored() {
    let entry = ContentEntry::new("s1", ContentType::Sponsor)
        .with_field("name", "Acme")
        .with_field("logo", ContentValue::from(json!({"url": "//img"})));
    assert!(validate_entry(&entry).is_ok());
}
