//! Unit tests for the YAML metadata adapters.

use super::fixtures::{CALENDAR_METADATA, DOCUMENTATION_METADATA};
use crate::catalog::{
    adapters::yaml::{NamedDocument, YamlDirectorySource, YamlDocumentSource, parse_agent_metadata},
    config::CatalogConfig,
    ports::{AgentSource, AgentSourceError},
};
use camino::Utf8PathBuf;
use rstest::rstest;
use std::fs;
use tempfile::TempDir;

fn write_agent(root: &TempDir, dir: &str, file: &str, content: &str) {
    let agent_dir = root.path().join(dir);
    fs::create_dir_all(&agent_dir).expect("create agent dir");
    fs::write(agent_dir.join(file), content).expect("write metadata");
}

fn utf8_root(root: &TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(root.path().to_path_buf()).expect("temp path is UTF-8")
}

// ── Document parsing ───────────────────────────────────────────────

#[rstest]
fn parses_a_complete_metadata_document() {
    let record = parse_agent_metadata(DOCUMENTATION_METADATA).expect("valid document");

    assert_eq!(record.id().as_str(), "documentation");
    assert_eq!(record.name(), "Documentation Agent");
    assert_eq!(record.version(), "1.2.0");
    assert!(
        record
            .long_description()
            .is_some_and(|text| text.starts_with("Looks up"))
    );
    assert_eq!(record.image().size_bytes(), 52_428_800);
    assert_eq!(record.image().display_size(), "50.0 MB");
    assert_eq!(
        record.image().oci_reference(),
        "ghcr.io/example/documentation-agent:1.2.0"
    );
    assert_eq!(record.author().url(), Some("https://example.com"));
    assert_eq!(record.categories(), ["productivity", "ai"]);
    assert_eq!(record.tags(), ["docs", "context7"]);
}

#[rstest]
fn optional_fields_may_be_omitted() {
    let record = parse_agent_metadata(CALENDAR_METADATA).expect("valid document");
    assert_eq!(record.long_description(), None);
    assert_eq!(record.author().url(), None);
}

#[rstest]
fn missing_categories_and_tags_default_to_empty() {
    let document = CALENDAR_METADATA
        .replace("categories:\n  - productivity\n", "")
        .replace("tags:\n  - calendar\n", "");
    let record = parse_agent_metadata(&document).expect("valid document");
    assert!(record.categories().is_empty());
    assert!(record.tags().is_empty());
}

#[rstest]
#[case("id: ''\nname: Agent\n")]
#[case("name: [unterminated\n")]
#[case("just a string")]
fn invalid_documents_are_rejected(#[case] document: &str) {
    assert!(parse_agent_metadata(document).is_err());
}

#[rstest]
fn blank_name_is_rejected_during_parsing() {
    let document = CALENDAR_METADATA.replace("name: Google Calendar", "name: ' '");
    let err = parse_agent_metadata(&document).expect_err("blank name");
    assert!(err.to_string().contains("agent name must not be empty"));
}

#[rstest]
fn records_serialise_with_document_field_names() {
    let record = parse_agent_metadata(DOCUMENTATION_METADATA).expect("valid document");
    let value = serde_json::to_value(&record).expect("serialise");
    assert!(value.get("longDescription").is_some());
    assert_eq!(value["image"]["size"], 52_428_800);
}

// ── Embedded documents ─────────────────────────────────────────────

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn document_source_keeps_declaration_order() {
    let source = YamlDocumentSource::new(vec![
        NamedDocument::new("documentation/metadata.yaml", DOCUMENTATION_METADATA),
        NamedDocument::new("google-calendar/metadata.yaml", CALENDAR_METADATA),
    ]);

    let records = source.load().await.expect("documents should parse");

    let ids: Vec<&str> = records.iter().map(|r| r.id().as_str()).collect();
    assert_eq!(ids, vec!["documentation", "google-calendar"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn document_source_names_the_malformed_document() {
    let source = YamlDocumentSource::new(vec![
        NamedDocument::new("documentation/metadata.yaml", DOCUMENTATION_METADATA),
        NamedDocument::new("broken/metadata.yaml", "id: [oops"),
    ]);

    let result = source.load().await;

    assert!(matches!(
        result,
        Err(AgentSourceError::Malformed { ref document, .. }) if document == "broken/metadata.yaml"
    ));
}

// ── Directory layout ───────────────────────────────────────────────

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn directory_source_reads_agents_in_name_order() {
    let root = TempDir::new().expect("temp dir");
    write_agent(&root, "google-calendar", "metadata.yaml", CALENDAR_METADATA);
    write_agent(&root, "documentation", "metadata.yaml", DOCUMENTATION_METADATA);
    write_agent(&root, "scratch", "notes.txt", "not an agent");
    fs::write(root.path().join("README.md"), "# agents").expect("write readme");

    let source = YamlDirectorySource::from_config(&CatalogConfig::with_root(utf8_root(&root)));
    let records = source.load().await.expect("directory should load");

    let ids: Vec<&str> = records.iter().map(|r| r.id().as_str()).collect();
    assert_eq!(ids, vec!["documentation", "google-calendar"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn directory_source_honours_the_metadata_file_name() {
    let root = TempDir::new().expect("temp dir");
    write_agent(&root, "documentation", "agent.yml", DOCUMENTATION_METADATA);

    let source = YamlDirectorySource::new(utf8_root(&root), "agent.yml");
    let records = source.load().await.expect("directory should load");

    assert_eq!(records.len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_root_is_a_read_error() {
    let root = TempDir::new().expect("temp dir");
    let missing = utf8_root(&root).join("does-not-exist");

    let result = YamlDirectorySource::new(missing, "metadata.yaml").load().await;

    assert!(matches!(result, Err(AgentSourceError::Read { .. })));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn malformed_file_is_reported_with_its_path() {
    let root = TempDir::new().expect("temp dir");
    write_agent(&root, "broken", "metadata.yaml", "id: [oops");

    let result = YamlDirectorySource::new(utf8_root(&root), "metadata.yaml")
        .load()
        .await;

    assert!(matches!(
        result,
        Err(AgentSourceError::Malformed { ref document, .. })
            if document.ends_with("broken/metadata.yaml")
    ));
}

// ── Configuration ──────────────────────────────────────────────────

#[rstest]
fn config_defaults_apply_to_missing_keys() {
    let config = CatalogConfig::from_yaml_str("agentsRoot: /srv/agents\n").expect("valid config");
    assert_eq!(config.agents_root.as_str(), "/srv/agents");
    assert_eq!(config.metadata_file, "metadata.yaml");
}

#[rstest]
fn config_reads_both_keys() {
    let config = CatalogConfig::from_yaml_str("agentsRoot: catalog\nmetadataFile: agent.yml\n")
        .expect("valid config");
    assert_eq!(config, CatalogConfig {
        agents_root: Utf8PathBuf::from("catalog"),
        metadata_file: "agent.yml".to_owned(),
    });
}
