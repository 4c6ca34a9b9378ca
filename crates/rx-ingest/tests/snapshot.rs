//! Tests for loading a full input directory.

use std::fs;
use std::path::Path;

use rx_ingest::{CLAIMS_DIR, IngestError, PHARMACIES_DIR, REVERTS_DIR, load_input};
use tempfile::TempDir;

fn write(root: &Path, dir: &str, name: &str, contents: &str) {
    let dir = root.join(dir);
    fs::create_dir_all(&dir).expect("create dir");
    fs::write(dir.join(name), contents).expect("write file");
}

fn seeded_root() -> TempDir {
    let root = TempDir::new().expect("temp dir");
    write(
        root.path(),
        PHARMACIES_DIR,
        "pharmacies.csv",
        "chain,npi\nhealth,p1\nsaint,p2\n",
    );
    write(
        root.path(),
        CLAIMS_DIR,
        "b.json",
        r#"[{"id":"c3","npi":"p2","ndc":"d2","price":7.5,"quantity":10,"timestamp":"t"}]"#,
    );
    write(
        root.path(),
        CLAIMS_DIR,
        "a.json",
        r#"[
            {"id":"c1","npi":"p1","ndc":"d1","price":10.0,"quantity":30,"timestamp":"t"},
            {"id":"c2","npi":"p9","ndc":"d1","price":12.0,"quantity":30,"timestamp":"t"}
        ]"#,
    );
    write(
        root.path(),
        REVERTS_DIR,
        "reverts.json",
        r#"[{"id":"r1","claim_id":"c2","timestamp":"t"}]"#,
    );
    root
}

#[test]
fn loads_all_collections_in_file_order() {
    let root = seeded_root();

    let snapshot = load_input(root.path()).expect("load input");

    assert_eq!(snapshot.pharmacies.len(), 2);
    let ids: Vec<&str> = snapshot.claims.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["c1", "c2", "c3"]);
    assert_eq!(snapshot.reverts.len(), 1);
    assert_eq!(snapshot.reverts[0].claim_id, "c2");
}

#[test]
fn ignores_files_with_other_extensions() {
    let root = seeded_root();
    write(root.path(), CLAIMS_DIR, "readme.txt", "not json");

    let snapshot = load_input(root.path()).expect("load input");

    assert_eq!(snapshot.claims.len(), 3);
}

#[test]
fn missing_reverts_directory_is_an_error() {
    let root = seeded_root();
    fs::remove_dir_all(root.path().join(REVERTS_DIR)).expect("remove reverts");

    let err = load_input(root.path()).unwrap_err();

    assert!(matches!(err, IngestError::DirectoryNotFound { .. }));
}

#[test]
fn malformed_record_aborts_the_load() {
    let root = seeded_root();
    write(
        root.path(),
        CLAIMS_DIR,
        "c.json",
        r#"[{"id":"c4","ndc":"d1","price":1.0,"timestamp":"t"}]"#,
    );

    let err = load_input(root.path()).unwrap_err();

    assert!(matches!(
        err,
        IngestError::MissingField {
            kind: "claim",
            field: "npi",
            index: 0,
            ..
        }
    ));
}
