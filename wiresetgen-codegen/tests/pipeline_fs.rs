//! End-to-end runs against a real project directory.

use std::{fs, path::Path};

use tempfile::TempDir;
use wiresetgen_codegen::pipeline::Pipeline;
use wiresetgen_core::{Error, FsStore};

fn write(root: &Path, path: &str, content: impl AsRef<[u8]>) {
    let path = root.join(path);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Create a project with two colliding `repo` packages and one injector.
fn project() -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let root = temp.path();

    write(root, "go.mod", "module github.com/acme/app\n\ngo 1.22\n");
    write(
        root,
        "internal/user/repo/repo.go",
        "package repo\n\n// @WireSet(\"Repositories\")\nfunc NewUserRepo() *UserRepo {\n\treturn &UserRepo{}\n}\n",
    );
    write(
        root,
        "internal/order/repo/repo.go",
        "package repo\n\n// @WireSet(\"Repositories\")\nfunc NewOrderRepo() *OrderRepo {\n\treturn &OrderRepo{}\n}\n",
    );
    write(
        root,
        "internal/wire/wire.go",
        "//go:build wireinject\n// +build wireinject\n\npackage wire\n",
    );

    temp
}

fn run(root: &Path) -> wiresetgen_core::Result<()> {
    let store = FsStore::new(root);
    Pipeline::new().run(&store).map(|_| ())
}

fn generated(root: &Path) -> String {
    fs::read_to_string(root.join("internal/wire/wire_set_gen.go")).expect("generated file")
}

#[test]
fn test_generates_file_in_target_directory() {
    let temp = project();

    run(temp.path()).unwrap();

    let content = generated(temp.path());
    assert!(content.starts_with("// Code generated by wiresetgen. DO NOT EDIT.\n"));
    assert!(content.contains("\trepo \"github.com/acme/app/internal/order/repo\"\n"));
    assert!(content.contains("\trepo2 \"github.com/acme/app/internal/user/repo\"\n"));
    assert!(content.contains("\trepo.NewOrderRepo,\n\trepo2.NewUserRepo,\n"));
}

#[test]
fn test_regeneration_is_byte_identical() {
    let temp = project();

    run(temp.path()).unwrap();
    let first = generated(temp.path());
    run(temp.path()).unwrap();
    let second = generated(temp.path());

    assert_eq!(first, second);
}

#[test]
fn test_missing_go_mod() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "main.go", "package main\n");

    let err = run(temp.path()).unwrap_err();
    assert!(matches!(*err, Error::NotProjectRoot));
}

#[test]
fn test_project_without_targets_writes_nothing() {
    let temp = project();
    fs::remove_file(temp.path().join("internal/wire/wire.go")).unwrap();

    run(temp.path()).unwrap();

    assert!(!temp.path().join("internal/wire/wire_set_gen.go").exists());
}

#[test]
fn test_file_with_marker_and_annotation_is_only_a_target() {
    let temp = project();
    write(
        temp.path(),
        "cmd/server/wire.go",
        "//go:build wireinject\n\npackage main\n\n// @WireSet(\"Injectors\")\nfunc NewServer() *Server {\n",
    );

    run(temp.path()).unwrap();

    let content = fs::read_to_string(temp.path().join("cmd/server/wire_set_gen.go")).unwrap();
    assert!(content.contains("package main\n"));
    assert!(!content.contains("Injectors"));
    assert_eq!(
        content.replace("package main", "package wire"),
        generated(temp.path())
    );
}

#[test]
fn test_config_file_is_applied() {
    let temp = project();
    write(
        temp.path(),
        "wiresetgen.toml",
        "file_name = \"providers_gen.go\"\nmember_refs = \"package\"\n",
    );

    run(temp.path()).unwrap();

    let content =
        fs::read_to_string(temp.path().join("internal/wire/providers_gen.go")).unwrap();
    assert!(content.contains("\trepo.NewOrderRepo,\n\trepo.NewUserRepo,\n"));
}

#[test]
fn test_malformed_target_reports_path() {
    let temp = project();
    write(temp.path(), "internal/broken/wire.go", "//go:build wireinject\n");

    let err = run(temp.path()).unwrap_err();

    assert_eq!(
        err.to_string(),
        "no package in wiregen file: internal/broken/wire.go"
    );
    assert!(!temp.path().join("internal/wire/wire_set_gen.go").exists());
}

#[test]
fn test_non_utf8_source_does_not_abort_run() {
    let temp = project();
    write(temp.path(), "legacy/old.go", b"package legacy\n// caf\xe9\n");
    write(
        temp.path(),
        "legacy/new.go",
        b"package legacy\n// \xff\n// @WireSet(\"Legacy\")\nfunc NewLegacy() *Legacy {\n",
    );

    run(temp.path()).unwrap();

    let content = generated(temp.path());
    assert!(content.contains("\tlegacy \"github.com/acme/app/legacy\"\n"));
    assert!(content.contains("var Legacy = wire.NewSet(\n\tlegacy.NewLegacy,\n)\n"));
}

#[test]
fn test_malformed_config_outside_project_root() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "wiresetgen.toml", "file_name = 3\n");

    let err = run(temp.path()).unwrap_err();
    assert!(matches!(*err, Error::NotProjectRoot));
}
