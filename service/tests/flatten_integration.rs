//! Flattening schemas spread over several files

use pretty_assertions::assert_eq;
use schemaviz_core::config::{OutputConfig, TableFormat};
use schemaviz_core::types::{PropertyRecord, TABLE_COLUMNS};
use schemaviz_service::flatten::SchemaFlattener;
use schemaviz_service::output::write_table;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(dir: &Path, name: &str, content: &str) -> anyhow::Result<()> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

fn rows(records: &[PropertyRecord]) -> Vec<[&str; 5]> {
    records.iter().map(PropertyRecord::columns).collect()
}

fn course_schemas() -> anyhow::Result<TempDir> {
    let dir = tempfile::tempdir()?;
    write(
        dir.path(),
        "main.yaml",
        r##"
type: object
required: [course]
properties:
  course:
    $ref: "defs/course.yaml#/Course"
  teacher:
    $ref: "defs/course.yaml#/Person"
"##,
    )?;
    write(
        dir.path(),
        "defs/course.yaml",
        r##"
Course:
  type: object
  required: [code]
  properties:
    code:
      type: string
      description: Course code
    person:
      $ref: "#/Person"
Person:
  type: object
  properties:
    name:
      type: string
"##,
    )?;
    Ok(dir)
}

#[test]
fn test_references_across_files() -> anyhow::Result<()> {
    let dir = course_schemas()?;
    let mut flattener = SchemaFlattener::new(dir.path());
    let records = flattener.visualize("main.yaml");

    assert_eq!(
        rows(&records),
        vec![
            ["/", "course", "ref(defs/course.yaml#/Course)", "1..1", ""],
            ["/course", "code", "string", "1..1", "Course code"],
            ["/course", "person", "ref(#/Person)", "0..1", ""],
            ["/course/person", "name", "string", "0..1", ""],
            ["/", "teacher", "ref(defs/course.yaml#/Person)", "0..1", ""],
            ["/teacher", "name", "string", "0..1", ""],
        ]
    );
    Ok(())
}

#[test]
fn test_shared_file_is_parsed_once() -> anyhow::Result<()> {
    let dir = course_schemas()?;
    let mut flattener = SchemaFlattener::new(dir.path());
    flattener.visualize("main.yaml");

    let stats = flattener.loader_stats();
    assert_eq!(stats.parsed, 2);
    assert!(stats.cache_hits >= 1);
    assert_eq!(stats.failures, 0);

    // A second run starts from a clean cache
    flattener.visualize("main.yaml");
    assert_eq!(flattener.loader_stats().parsed, 2);
    Ok(())
}

#[test]
fn test_cycle_across_files_terminates() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    write(
        dir.path(),
        "a.yaml",
        r##"
$ref: "#/A"
A:
  type: object
  properties:
    partner:
      $ref: "b.yaml#/B"
"##,
    )?;
    write(
        dir.path(),
        "b.yaml",
        r##"
B:
  type: object
  properties:
    back:
      $ref: "a.yaml#/A"
"##,
    )?;

    let mut flattener = SchemaFlattener::new(dir.path());
    let records = flattener.visualize("a.yaml");

    assert_eq!(
        rows(&records),
        vec![
            ["/", "partner", "ref(b.yaml#/B)", "0..1", ""],
            ["/partner", "back", "ref(a.yaml#/A)", "0..1", ""],
        ]
    );
    assert_eq!(flattener.loader_stats().parsed, 2);
    Ok(())
}

#[test]
fn test_missing_referenced_file_is_a_leaf() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    write(
        dir.path(),
        "schema.json",
        r#"{"properties": {"lost": {"$ref": "missing.json#/Lost"}, "kept": {"type": "integer"}}}"#,
    )?;

    let mut flattener = SchemaFlattener::new(dir.path());
    let records = flattener.visualize("schema.json");

    assert_eq!(
        rows(&records),
        vec![
            ["/", "lost", "ref(missing.json#/Lost)", "0..1", ""],
            ["/", "kept", "integer", "0..1", ""],
        ]
    );
    assert_eq!(flattener.loader_stats().failures, 1);
    Ok(())
}

#[test]
fn test_missing_root_file_yields_no_records() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let mut flattener = SchemaFlattener::new(dir.path());
    assert!(flattener.visualize("nowhere.yaml").is_empty());
    Ok(())
}

#[test]
fn test_documented_examples() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    write(
        dir.path(),
        "tags.yaml",
        r"
type: object
required: [id]
properties:
  id: {type: string}
  tags: {type: array, items: {type: string}, minItems: 1}
",
    )?;
    write(
        dir.path(),
        "scalars.json",
        r#"{"oneOf": [{"type": "string"}, {"type": "integer"}]}"#,
    )?;

    let mut flattener = SchemaFlattener::new(dir.path());
    assert_eq!(
        rows(&flattener.visualize("tags.yaml")),
        vec![
            ["/", "id", "string", "1..1", ""],
            ["/", "tags", "array<string>", "0..1 (array)", ""],
        ]
    );
    assert!(flattener.visualize("scalars.json").is_empty());
    Ok(())
}

#[test]
fn test_flattened_table_written_as_tsv() -> anyhow::Result<()> {
    let dir = course_schemas()?;
    let records = SchemaFlattener::new(dir.path()).visualize("main.yaml");

    let output = dir.path().join("main.tsv");
    write_table(&records, &output, TableFormat::Tsv, &OutputConfig::default())?;

    let content = fs::read_to_string(&output)?;
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some(TABLE_COLUMNS.join("\t").as_str()));
    assert_eq!(lines.next(), Some("/\tcourse\tref(defs/course.yaml#/Course)\t1..1\t"));
    assert_eq!(content.lines().count(), records.len() + 1);
    Ok(())
}
