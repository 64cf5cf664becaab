//! End-to-end suite tests against real files

use confcheck::loader;
use confcheck::schema::SchemaNode;
use confcheck::suite::ConfigValidationSuite;
use confcheck::system::RealSystem;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn schema_from_json(text: &str) -> SchemaNode {
    SchemaNode::from_value(&loader::decode_json(text).unwrap())
}

#[test]
fn test_json_config_against_nested_schema() {
    let dir = TempDir::new().unwrap();
    let config = write_file(
        &dir,
        "service.json",
        r#"{
            "name": "billing",
            "port": 8080,
            "tags": ["prod", "eu"],
            "limits": {"memory": 512, "cpu": 2}
        }"#,
    );
    let schema = schema_from_json(
        r#"{
            "type": "object",
            "required": ["name", "port"],
            "properties": {
                "name": {"type": "string"},
                "port": {"type": "integer"},
                "tags": {"type": "array", "items": {"type": "string"}},
                "limits": {
                    "type": "object",
                    "properties": {
                        "memory": {"type": "integer"},
                        "cpu": {"type": "number"}
                    }
                }
            }
        }"#,
    );

    let suite = ConfigValidationSuite::new(true);
    let result = suite.validate(&RealSystem::new(), &config, Some(&schema));
    assert!(result.valid, "errors: {:?}", result.errors);
    assert_eq!(result.summary(), "Validation PASS");
}

#[test]
fn test_toml_config_with_multiple_findings() {
    let dir = TempDir::new().unwrap();
    let config = write_file(
        &dir,
        "service.toml",
        "port = \"eighty\"\nmode = \"turbo\"\n",
    );
    let schema = schema_from_json(
        r#"{
            "type": "object",
            "required": ["name"],
            "properties": {
                "port": {"type": "integer"},
                "mode": {"enum": ["fast", "slow"]}
            }
        }"#,
    );

    let suite = ConfigValidationSuite::new(false);
    let result = suite.validate(&RealSystem::new(), &config, Some(&schema));
    assert!(!result.valid);
    assert_eq!(
        result.errors,
        vec![
            "$: missing required key 'name'".to_owned(),
            "$.port: Expected type 'integer' but received value 'eighty'".to_owned(),
            "$.mode: value 'turbo' is not in allowed set ['fast', 'slow']".to_owned(),
        ]
    );
    assert_eq!(result.summary(), "Validation FAIL | Errors: 3");
}

#[test]
fn test_ini_config_round_trip() {
    let dir = TempDir::new().unwrap();
    let config = write_file(
        &dir,
        "service.ini",
        "[database]\nhost = db.internal\nport = 5432\n\n[cache]\nbackend = redis\n",
    );
    let schema = schema_from_json(
        r#"{
            "type": "object",
            "required": ["database"],
            "properties": {
                "database": {
                    "type": "object",
                    "required": ["host", "port"]
                },
                "cache": {
                    "type": "object",
                    "properties": {"backend": {"enum": ["redis", "memcached"]}}
                }
            }
        }"#,
    );

    let suite = ConfigValidationSuite::new(true);
    let result = suite.validate(&RealSystem::new(), &config, Some(&schema));
    assert!(result.valid, "errors: {:?}", result.errors);
}

#[test]
fn test_type_mismatch_suppresses_nested_checks() {
    let dir = TempDir::new().unwrap();
    let config = write_file(&dir, "service.json", r#""not an object""#);
    let schema = schema_from_json(r#"{"type": "object", "required": ["x"]}"#);

    let suite = ConfigValidationSuite::new(false);
    let result = suite.validate(&RealSystem::new(), &config, Some(&schema));
    assert_eq!(
        result.errors,
        vec!["$: Expected type 'object' but received value 'not an object'".to_owned()]
    );
}

#[test]
fn test_additional_properties_enforcement() {
    let dir = TempDir::new().unwrap();
    let config = write_file(&dir, "service.json", r#"{"a": "x", "b": 1}"#);
    let schema = schema_from_json(
        r#"{
            "type": "object",
            "properties": {"a": {"type": "string"}},
            "additionalProperties": false
        }"#,
    );

    let suite = ConfigValidationSuite::new(false);
    let result = suite.validate(&RealSystem::new(), &config, Some(&schema));
    assert_eq!(result.errors, vec!["$: unexpected key 'b'".to_owned()]);
}

#[test]
fn test_ensure_valid_escalation() {
    let dir = TempDir::new().unwrap();
    let config = write_file(&dir, "service.json", "{}");
    let schema = schema_from_json(r#"{"type": "object", "required": ["name"]}"#);

    let suite = ConfigValidationSuite::new(false);
    let result = suite.validate(&RealSystem::new(), &config, Some(&schema));
    let err = result.ensure_valid().unwrap_err();
    assert_eq!(err.exit_code(), 1);
    assert!(err.to_string().contains("missing required key 'name'"));
}
