//! Property-based tests for parsing, navigation and code generation
//!
//! Documents are generated as wire-format values so every property runs
//! through the real parser.

use akira_core::{parse, CodeSampleGenerator, Dialect, NavigationIndex};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

const METHODS: [&str; 8] = ["get", "put", "post", "delete", "options", "head", "patch", "trace"];

/// Strategy for generating a parameter object
fn parameter_strategy() -> impl Strategy<Value = Value> {
    (
        "[a-z][a-z_]{0,8}",
        prop_oneof![Just("query"), Just("header"), Just("path"), Just("cookie")],
        proptest::option::of(any::<bool>()),
        proptest::option::of(prop_oneof![
            (0i64..1000).prop_map(Value::from),
            "[a-z]{0,6}".prop_map(Value::from),
            any::<bool>().prop_map(Value::from),
        ]),
    )
        .prop_map(|(name, location, required, default)| {
            let mut schema = Map::new();
            schema.insert("type".into(), json!("string"));
            if let Some(default) = default {
                schema.insert("default".into(), default);
            }
            let mut param = json!({"name": name, "in": location, "schema": schema});
            if let Some(required) = required {
                param["required"] = json!(required);
            }
            param
        })
}

/// Strategy for generating an operation object
fn operation_strategy() -> impl Strategy<Value = Value> {
    (
        proptest::option::of("[A-Za-z ]{1,20}"),
        proptest::collection::vec(parameter_strategy(), 0..4),
        any::<bool>(),
        proptest::option::of(any::<bool>()),
    )
        .prop_map(|(summary, parameters, has_body, secured)| {
            let mut op = Map::new();
            if let Some(summary) = summary {
                op.insert("summary".into(), json!(summary));
            }
            if !parameters.is_empty() {
                op.insert("parameters".into(), Value::Array(parameters));
            }
            if has_body {
                op.insert(
                    "requestBody".into(),
                    json!({"content": {"application/json": {"schema": {"$ref": "#/components/schemas/Item"}}}}),
                );
            }
            match secured {
                Some(true) => {
                    op.insert("security".into(), json!([{"ApiKeyAuth": []}]));
                }
                Some(false) => {
                    op.insert("security".into(), json!([]));
                }
                None => {}
            }
            Value::Object(op)
        })
}

/// Strategy for generating a path item: distinct methods in random order
fn path_item_strategy() -> impl Strategy<Value = Vec<(&'static str, Value)>> {
    (
        Just(METHODS.to_vec()).prop_shuffle(),
        1usize..=4,
        proptest::collection::vec(operation_strategy(), 4),
    )
        .prop_map(|(methods, count, ops)| {
            methods.into_iter().take(count).zip(ops).collect()
        })
}

/// Strategy for generating whole documents with distinct paths
fn document_strategy() -> impl Strategy<Value = Value> {
    (
        proptest::collection::btree_set("/[a-z]{1,8}(/[a-z]{1,6}){0,2}", 1..5),
        proptest::collection::vec(path_item_strategy(), 5),
        any::<bool>(),
        proptest::option::of("https?://[a-z]{1,10}\\.example\\.com(/v[0-9])?"),
    )
        .prop_flat_map(|(paths, items, global_security, server)| {
            let paths: Vec<String> = paths.into_iter().collect();
            // Shuffle so declaration order differs from sorted order
            (Just(paths).prop_shuffle(), Just(items), Just(global_security), Just(server))
        })
        .prop_map(|(paths, items, global_security, server)| {
            let mut paths_obj = Map::new();
            for (path, item) in paths.into_iter().zip(items) {
                let ops: Map<String, Value> =
                    item.into_iter().map(|(m, op)| (m.to_string(), op)).collect();
                paths_obj.insert(path, Value::Object(ops));
            }

            let mut doc = json!({
                "info": {"title": "Generated", "version": "1.0"},
                "paths": paths_obj,
                "components": {
                    "schemas": {
                        "Item": {"type": "object", "properties": {"id": {"type": "integer"}}}
                    },
                    "securitySchemes": {
                        "ApiKeyAuth": {"type": "apiKey", "in": "header", "name": "X-API-Key"}
                    }
                }
            });
            if global_security {
                doc["security"] = json!([{"ApiKeyAuth": []}]);
            }
            if let Some(url) = server {
                doc["servers"] = json!([{"url": url}]);
            }
            doc
        })
}

/// Expected endpoint ids: paths in declaration order, then methods
fn declared_ids(doc: &Value) -> Vec<String> {
    let mut ids = Vec::new();
    if let Some(paths) = doc["paths"].as_object() {
        for (path, item) in paths {
            if let Some(ops) = item.as_object() {
                for method in ops.keys() {
                    ids.push(format!("{}-{}", method, path));
                }
            }
        }
    }
    ids
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_round_trip_is_idempotent(spec in document_strategy()) {
        let doc = parse(&spec.to_string()).unwrap();
        let reparsed = parse(&doc.to_json_pretty().unwrap()).unwrap();
        prop_assert_eq!(&doc, &reparsed);

        // A second pass is byte-identical
        prop_assert_eq!(doc.to_json_pretty().unwrap(), reparsed.to_json_pretty().unwrap());
    }

    #[test]
    fn prop_navigation_follows_declaration_order(spec in document_strategy()) {
        let doc = parse(&spec.to_string()).unwrap();
        let index = NavigationIndex::build(&doc);
        let ids: Vec<String> = index.ids().into_iter().map(String::from).collect();
        prop_assert_eq!(ids, declared_ids(&spec));
        prop_assert_eq!(&index, &NavigationIndex::build(&doc));
    }

    #[test]
    fn prop_generation_is_pure(spec in document_strategy(), dialect_idx in 0usize..3) {
        let doc = parse(&spec.to_string()).unwrap();
        let dialect = Dialect::ALL[dialect_idx];
        let generator = CodeSampleGenerator::default();

        for op in doc.operations() {
            let first = generator.generate_for(&doc, &op.id(), dialect);
            let second = generator.generate_for(&doc, &op.id(), dialect);
            prop_assert!(first.is_some());
            prop_assert_eq!(&first, &second);

            let sample = first.unwrap_or_default();
            prop_assert_eq!(sample.contains("X-API-Key"), op.request_body.is_some());
        }
    }

    #[test]
    fn prop_arbitrary_text_never_panics(text in "\\PC{0,200}") {
        let _ = parse(&text);
    }
}
