//! End-to-end sync scenarios: fetch (in-memory), full mirror rebuild,
//! installed-set reconciliation.
#![cfg(unix)]

use std::fs;

use mirror_sync::{BundleSource, RemoteBundle, Result, SyncEngine};
use mirror_test_utils::{TestBundle, TestMirror};
use pretty_assertions::assert_eq;

const RELEASE: &str = "DSP8010_2025.2";

struct InMemorySource {
    bytes: Vec<u8>,
}

impl BundleSource for InMemorySource {
    fn fetch(&self, _release: &str) -> Result<RemoteBundle> {
        Ok(RemoteBundle::new(self.bytes.clone()))
    }
}

fn engine_for(mirror: &TestMirror, bundle: &TestBundle) -> SyncEngine {
    SyncEngine::new(
        mirror.layout().clone(),
        Box::new(InMemorySource {
            bytes: bundle.build(),
        }),
    )
}

#[test]
fn installed_family_follows_the_newest_version() {
    let mirror = TestMirror::new();
    mirror.seed_schema_installed("Thing.v1_0_0.json");

    let bundle = TestBundle::new(RELEASE)
        .schema("Thing.v1_0_0.json", b"{\"v\": \"1.0.0\"}")
        .schema("Thing.v1_2_0.json", b"{\"v\": \"1.2.0\"}")
        .schema("Thing.v1_10_0.json", b"{\"v\": \"1.10.0\"}");

    let report = engine_for(&mirror, &bundle).sync(RELEASE).unwrap();
    assert_eq!(report.schema_links, 1);

    let layout = mirror.layout();
    // The mirror holds only the newest version.
    assert_eq!(
        mirror.list(&layout.schema_dir()),
        vec!["Thing.v1_10_0.json"]
    );
    // Exactly one installed reference, named for and resolving to it.
    assert_eq!(
        mirror.list(&layout.schema_installed_dir()),
        vec!["Thing.v1_10_0.json"]
    );
    let link = layout.schema_installed_dir().join("Thing.v1_10_0.json");
    assert_eq!(
        fs::read_link(&link).unwrap(),
        std::path::PathBuf::from("../json-schema/Thing.v1_10_0.json")
    );
    assert_eq!(mirror.read(&link), b"{\"v\": \"1.10.0\"}".to_vec());
}

#[test]
fn obsolete_installed_family_is_dropped_and_run_succeeds() {
    let mirror = TestMirror::new();
    mirror.seed_schema_installed("Obsolete.v1_0_0.json");

    let bundle = TestBundle::new(RELEASE).schema("Thing.v1_0_0.json", b"{}");

    let report = engine_for(&mirror, &bundle).sync(RELEASE).unwrap();

    assert_eq!(report.dropped, vec!["Obsolete".to_string()]);
    assert!(mirror
        .list(&mirror.layout().schema_installed_dir())
        .is_empty());
}

#[test]
fn interface_definitions_relink_by_exact_filename() {
    let mirror = TestMirror::new();
    mirror.seed_interface_installed("Thing_v1.xml");

    let bundle = TestBundle::new(RELEASE)
        .interface("Thing_v1.xml", b"<edmx/>")
        .interface("Uncurated_v1.xml", b"<edmx/>");

    let report = engine_for(&mirror, &bundle).sync(RELEASE).unwrap();
    assert_eq!(report.interface_links, 1);

    let layout = mirror.layout();
    assert_eq!(
        mirror.list(&layout.interface_dir()),
        vec!["Thing_v1.xml", "Uncurated_v1.xml"]
    );
    // Only the curated file is linked.
    assert_eq!(
        mirror.list(&layout.interface_installed_dir()),
        vec!["Thing_v1.xml"]
    );
    assert_eq!(
        mirror.read(&layout.interface_installed_dir().join("Thing_v1.xml")),
        b"<edmx/>".to_vec()
    );
}

#[test]
fn crlf_content_lands_normalized_in_the_mirror() {
    let mirror = TestMirror::new();
    let bundle = TestBundle::new(RELEASE)
        .schema("Thing.v1_0_0.json", b"{\r\n  \"a\": 1\r\n}\r\n")
        .interface("Thing_v1.xml", b"<a>\r\n  <b/>\r\n</a>\r\n");

    engine_for(&mirror, &bundle).sync(RELEASE).unwrap();

    let layout = mirror.layout();
    assert_eq!(
        mirror.read(&layout.schema_dir().join("Thing.v1_0_0.json")),
        b"{\n  \"a\": 1\n}\n".to_vec()
    );
    assert_eq!(
        mirror.read(&layout.interface_dir().join("Thing_v1.xml")),
        b"<a>\n  <b/>\n</a>\n".to_vec()
    );
}

#[test]
fn installed_links_survive_successive_syncs() {
    let mirror = TestMirror::new();
    mirror.seed_schema_installed("Thing.v1_0_0.json");

    let first = TestBundle::new(RELEASE).schema("Thing.v1_0_0.json", b"{}");
    engine_for(&mirror, &first).sync(RELEASE).unwrap();

    // A later release ships a newer version; the curated link follows.
    let second = TestBundle::new("DSP8010_2026.1")
        .schema("Thing.v1_0_0.json", b"{}")
        .schema("Thing.v1_1_0.json", b"{\"v\": \"1.1.0\"}");
    engine_for(&mirror, &second).sync("DSP8010_2026.1").unwrap();

    let layout = mirror.layout();
    assert_eq!(
        mirror.list(&layout.schema_installed_dir()),
        vec!["Thing.v1_1_0.json"]
    );
    assert_eq!(
        mirror.read(&layout.schema_installed_dir().join("Thing.v1_1_0.json")),
        b"{\"v\": \"1.1.0\"}".to_vec()
    );
}

#[test]
fn unconsumed_categories_never_reach_the_mirror() {
    let mirror = TestMirror::new();
    let bundle = TestBundle::new(RELEASE)
        .schema("Thing.v1_0_0.json", b"{}")
        .raw(&format!("{RELEASE}/openapi/openapi.yaml"), b"openapi: 3.0")
        .raw(&format!("{RELEASE}/dictionaries/Thing.dict"), b"\x01\x02");

    engine_for(&mirror, &bundle).sync(RELEASE).unwrap();

    let layout = mirror.layout();
    assert_eq!(mirror.list(&layout.schema_dir()), vec!["Thing.v1_0_0.json"]);
    assert!(mirror.list(&layout.interface_dir()).is_empty());
    // Nothing else appears under the root.
    let mut top: Vec<String> = fs::read_dir(layout.root())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    top.sort();
    assert_eq!(
        top,
        vec!["csdl", "installed", "json-schema", "json-schema-installed"]
    );
}
