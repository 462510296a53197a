// tests/config_integration.rs

//! Configuration file loading: TOML and JSON files on disk, normalization
//! and rewriting with the loaded map.

mod common;

use common::{LIBRARY, all_sources, bootstrap_import, rewrite};
use import_rewrite::{
    Casing, Error, FunctionRegistry, ImportSpecifier, Transform, load_import_map,
    parse_config_file,
};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn write_config(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_toml_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        &dir,
        "imports.toml",
        r#"
[modules."react-bootstrap"]
transform = "react-bootstrap/lib/${member}"
style = { name = "sty", ignore = ["kebab-other"] }
casing = "kebab"
"#,
    );

    let map = load_import_map(&path, &FunctionRegistry::new()).unwrap();
    let config = map.get(LIBRARY).unwrap();
    assert_eq!(config.casing, Casing::Kebab);
    assert!(matches!(config.transform, Some(Transform::Template(_))));

    let decl = bootstrap_import(vec![
        ImportSpecifier::named("KebabMe"),
        ImportSpecifier::named("KebabOther"),
    ]);
    let result = rewrite(&map, &decl).unwrap().unwrap();
    assert_eq!(
        all_sources(&result),
        vec![
            "react-bootstrap/lib/kebab-me",
            "react-bootstrap/lib/kebab-other",
            "react-bootstrap/lib/kebab-me/sty.css",
        ]
    );
}

#[test]
fn test_load_json_config_with_legacy_flags() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        &dir,
        "imports.json",
        r#"{
    "react-bootstrap": {
        "transform": "react-bootstrap/lib/${member}",
        "camelCase": true,
        "snakeCase": true,
        "preventFullImport": true
    }
}"#,
    );

    let map = load_import_map(&path, &FunctionRegistry::new()).unwrap();
    let config = map.get(LIBRARY).unwrap();
    // camel is checked first and wins
    assert_eq!(config.casing, Casing::Camel);
    assert!(config.prevent_full_import);

    let err = rewrite(
        &map,
        &bootstrap_import(vec![ImportSpecifier::default_import("Bootstrap")]),
    )
    .unwrap_err();
    assert!(matches!(err, Error::Policy { .. }));
}

#[test]
fn test_load_function_reference() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        &dir,
        "imports.toml",
        r#"
[modules."react-bootstrap"]
transform = "./transforms/Upper.JS"
"#,
    );

    let mut registry = FunctionRegistry::new();
    registry.register("./transforms/Upper.JS", |name, _| {
        format!("react-bootstrap/{}", name.to_uppercase())
    });
    let map = load_import_map(&path, &registry).unwrap();

    let result = rewrite(&map, &bootstrap_import(vec![ImportSpecifier::named("grid")]))
        .unwrap()
        .unwrap();
    assert_eq!(result.imports[0].source, "react-bootstrap/GRID");
}

#[test]
fn test_missing_transform_reported_on_use() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        &dir,
        "imports.toml",
        r#"
[modules."react-bootstrap"]
style = true
"#,
    );

    let map = load_import_map(&path, &FunctionRegistry::new()).unwrap();
    assert_eq!(map.missing_transforms(), vec![LIBRARY]);
    assert!(map.validate().is_err());

    let err = rewrite(&map, &bootstrap_import(vec![ImportSpecifier::named("Grid")])).unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_import_map(&dir.path().join("nope.toml"), &FunctionRegistry::new())
        .unwrap_err();
    assert!(matches!(err, Error::ConfigRead(_)));
}

#[test]
fn test_invalid_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[modules.lib]\ntransform = [1, 2]").unwrap();
    let err = parse_config_file(file.path()).unwrap_err();
    assert!(matches!(err, Error::ConfigParse(_)));
}

#[test]
fn test_unknown_top_level_key_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[module.lib]\ntransform = \"lib/${{member}}\"").unwrap();
    assert!(parse_config_file(file.path()).is_err());
}
