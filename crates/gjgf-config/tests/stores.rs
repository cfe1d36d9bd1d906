// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use gjgf_config::{
    ConfigError, ConfigService, ConfigStore, ConvertPrefs, FsConfigStore, MemoryConfigStore,
    CONVERT_PREFS_KEY,
};
use gjgf_convert::NormalizeOptions;

#[test]
fn fs_store_round_trips_prefs_as_json_files() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsConfigStore::at(dir.path().join("nested"));
    let service = ConfigService::new(store);

    assert_eq!(service.load::<ConvertPrefs>(CONVERT_PREFS_KEY).unwrap(), None);
    assert!(!dir.path().join("nested").exists());

    let prefs = ConvertPrefs {
        pretty: true,
        normalize: NormalizeOptions {
            max_file_bytes: Some(1024),
            ..NormalizeOptions::default()
        },
    };
    service.save(CONVERT_PREFS_KEY, &prefs).unwrap();

    let path = service.store().path_for(CONVERT_PREFS_KEY);
    assert!(path.ends_with("nested/convert.json"));
    let on_disk: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    assert_eq!(on_disk["pretty"], true);
    assert_eq!(on_disk["normalize"]["resolve_file_paths"], true);

    assert_eq!(
        service.load::<ConvertPrefs>(CONVERT_PREFS_KEY).unwrap(),
        Some(prefs)
    );
}

#[test]
fn partial_prefs_fill_in_defaults() {
    let store = MemoryConfigStore::new();
    store
        .save_raw(CONVERT_PREFS_KEY, br#"{"normalize": {"resolve_file_paths": false}}"#)
        .unwrap();
    let prefs: ConvertPrefs = ConfigService::new(store)
        .load_or_default(CONVERT_PREFS_KEY)
        .unwrap();
    assert!(!prefs.pretty);
    assert!(!prefs.normalize.resolve_file_paths);
    assert_eq!(prefs.normalize.max_file_bytes, None);
}

#[test]
fn corrupt_blobs_are_serde_errors() {
    let store = MemoryConfigStore::new();
    store.save_raw(CONVERT_PREFS_KEY, b"{not json").unwrap();
    let err = ConfigService::new(store)
        .load::<ConvertPrefs>(CONVERT_PREFS_KEY)
        .unwrap_err();
    assert!(matches!(err, ConfigError::Serde(_)));
}

#[test]
fn fs_store_reports_missing_keys_as_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsConfigStore::at(dir.path());
    assert!(matches!(store.load_raw("nope"), Err(ConfigError::NotFound)));
}
