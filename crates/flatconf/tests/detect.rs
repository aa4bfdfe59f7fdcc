use std::fs;

use flatconf::Environment;
use tempfile::tempdir;

fn install_module(root: &std::path::Path, name: &str) {
    let dir = root.join("node_modules").join(name);
    fs::create_dir_all(&dir).expect("create module dir");
    fs::write(dir.join("package.json"), "{}").expect("write manifest");
}

#[test]
fn detects_installed_modules() {
    let temp = tempdir().expect("tempdir");
    install_module(temp.path(), "typescript");
    install_module(temp.path(), "jest");

    let environment = Environment::detect(temp.path());
    assert!(environment.has_typescript);
    assert!(environment.has_jest);
    assert!(!environment.has_react);
}

#[test]
fn finds_modules_in_ancestor_directories() {
    let temp = tempdir().expect("tempdir");
    install_module(temp.path(), "react");

    let nested = temp.path().join("packages/app");
    fs::create_dir_all(&nested).expect("create nested dir");

    let environment = Environment::detect(&nested);
    assert!(environment.has_react);
}

#[test]
fn module_directory_without_manifest_is_absent() {
    let temp = tempdir().expect("tempdir");
    fs::create_dir_all(temp.path().join("node_modules/typescript")).expect("create module dir");

    let environment = Environment::detect(temp.path());
    assert!(!environment.has_typescript);
}
