use club_site::{ContentValue, Rendering, as_rich_document, classify, to_plain_text};
use proptest::prelude::*;
use serde_json::{Value, json};

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        any::<f64>()
            .prop_filter("finite", |f| f.is_finite())
            .prop_map(|f| json!(f)),
        ".*".prop_map(Value::String),
    ];
    leaf.prop_recursive(8, 64, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map("[a-zA-Z]{1,10}", inner.clone(), 0..6)
                .prop_map(|map| Value::Object(map.into_iter().collect())),
            (inner.clone(), any::<bool>()).prop_map(|(child, with_type)| {
                // objects carrying exactly one of the two discriminating fields
                if with_type {
                    json!({ "nodeType": "paragraph", "data": child })
                } else {
                    json!({ "content": [child] })
                }
            }),
        ]
    })
}

proptest! {
    #[test]
    fn strings_never_classify_and_pass_through(s in ".*") {
        let value = Value::String(s.clone());
        prop_assert!(!classify(&value));
        prop_assert_eq!(to_plain_text(&value), s);
    }

    #[test]
    fn any_node_type_with_array_content_classifies(node_type in ".*", children in prop::collection::vec(arb_json(), 0..4)) {
        let value = json!({ "nodeType": node_type, "content": children });
        prop_assert!(classify(&value));
        let document = as_rich_document(&value);
        prop_assert!(document.is_some());
    }

    #[test]
    fn normalizer_is_total(value in arb_json()) {
        let rich = classify(&value);
        let _text: String = to_plain_text(&value);
        prop_assert_eq!(as_rich_document(&value).is_some(), rich);
        let content = ContentValue::from_json(value.clone());
        prop_assert_eq!(content.is_rich(), rich);
        let _ = content.display_text();
        let _ = content.render();
    }

    #[test]
    fn resolved_values_convert_back_unchanged(value in arb_json()) {
        let content = ContentValue::from_json(value.clone());
        prop_assert_eq!(content.to_plain_text(), to_plain_text(&value));
        prop_assert_eq!(content.to_json(), value);
    }

    #[test]
    fn classify_is_idempotent(value in arb_json()) {
        let first = classify(&value);
        let second = classify(&value);
        prop_assert_eq!(first, second);
    }
}

#[test]
fn empty_document_classifies() {
    assert!(classify(&json!({"nodeType": "x", "content": []})));
}

#[test]
fn null_is_empty_text_and_not_rich() {
    assert!(!classify(&Value::Null));
    assert_eq!(to_plain_text(&Value::Null), "");
    assert_eq!(ContentValue::from_json(Value::Null).render(), Rendering::Nothing);
}

#[test]
fn deeply_nested_objects_do_not_overflow() {
    let mut value = json!({"nodeType": "text", "value": "leaf", "content": []});
    for _ in 0..100 {
        value = json!({"nodeType": "paragraph", "content": [value]});
    }
    assert!(classify(&value));
    let content = ContentValue::from_json(value);
    assert_eq!(content.display_text(), "leaf");
}

#[test]
fn arrays_and_scalars_render_as_text() {
    for (value, expected) in [
        (json!(3.5), "3.5"),
        (json!(false), "false"),
        (json!([1, 2]), "[1,2]"),
        (json!({"content": []}), r#"{"content":[]}"#),
    ] {
        assert!(!classify(&value));
        assert_eq!(to_plain_text(&value), expected);
        assert_eq!(
            ContentValue::from_json(value).render(),
            Rendering::Text(expected.to_string())
        );
    }
}
