// cstools: Fetch, build and clean helpers for C# workspaces
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::delete::{delete_matching, find_matching, split_literal_prefix, to_wax_component};
use super::walk::{WalkOptions, walk};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent");
    }
    std::fs::write(path, "").expect("write file");
}

fn relative(root: &Path, paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|p| {
            p.strip_prefix(root)
                .expect("under root")
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

#[test]
fn test_walk_is_sorted_and_includes_hidden() {
    let temp = temp_dir();
    touch(temp.path(), "b.txt");
    touch(temp.path(), "a/z.txt");
    touch(temp.path(), ".hidden/config");

    let result = walk(temp.path(), &WalkOptions::default());

    assert_eq!(
        relative(temp.path(), result.files()),
        vec![".hidden/config", "a/z.txt", "b.txt"]
    );
    assert_eq!(relative(temp.path(), result.directories()), vec![".hidden", "a"]);
    assert_eq!(result.error_count(), 0);
}

#[test]
fn test_walk_ignores_gitignore_by_default() {
    let temp = temp_dir();
    touch(temp.path(), "obj/out.dll");
    std::fs::write(temp.path().join(".gitignore"), "obj/\n").expect("write gitignore");

    let result = walk(temp.path(), &WalkOptions::default());
    assert!(relative(temp.path(), result.files()).contains(&"obj/out.dll".to_string()));
}

#[test]
fn test_walk_skip_dirs_prunes_subtree() {
    let temp = temp_dir();
    touch(temp.path(), ".git/HEAD");
    touch(temp.path(), "src/packages.config");

    let options = WalkOptions::builder()
        .with_skip_dirs(vec![".git".to_string()])
        .build();
    let result = walk(temp.path(), &options);

    assert_eq!(
        relative(temp.path(), result.files()),
        vec!["src/packages.config"]
    );
}

#[test]
fn test_walk_skip_paths_matches_full_path_only() {
    let temp = temp_dir();
    touch(temp.path(), "vendor/packages.config");
    touch(temp.path(), "src/vendor/packages.config");

    let options = WalkOptions::builder()
        .with_skip_paths(vec![temp.path().join("vendor")])
        .build();
    let result = walk(temp.path(), &options);

    assert_eq!(
        relative(temp.path(), result.files()),
        vec!["src/vendor/packages.config"]
    );
}

#[test]
fn test_walk_no_descend_yields_directory_only() {
    let temp = temp_dir();
    touch(temp.path(), "Proj/bin/Debug/app.exe");
    touch(temp.path(), "Proj/Main.cs");

    let options = WalkOptions::builder()
        .with_no_descend(vec!["bin".to_string()])
        .build();
    let result = walk(temp.path(), &options);

    assert_eq!(relative(temp.path(), result.files()), vec!["Proj/Main.cs"]);
    assert_eq!(
        relative(temp.path(), result.directories()),
        vec!["Proj", "Proj/bin"]
    );
}

#[test]
fn test_walk_missing_root() {
    let temp = temp_dir();
    let result = walk(temp.path().join("absent"), &WalkOptions::default());
    assert!(result.files().is_empty());
    assert!(result.directories().is_empty());
}

#[test]
fn test_split_literal_prefix() {
    let splits: Vec<(String, String)> = ["packages", "*.speccache", "build/**/*.pdb", "a/b/c?.txt"]
        .into_iter()
        .map(|p| {
            let (prefix, rest) = split_literal_prefix(p);
            (prefix.to_string_lossy().into_owned(), rest)
        })
        .collect();

    assert_eq!(
        splits,
        vec![
            (String::new(), "packages".to_string()),
            (String::new(), "*.speccache".to_string()),
            ("build".to_string(), "**/*.pdb".to_string()),
            ("a/b".to_string(), "c?.txt".to_string()),
        ]
    );
}

#[test]
fn test_delete_no_matches_is_noop() {
    let temp = temp_dir();
    touch(temp.path(), "keep.txt");

    let removed = delete_matching(temp.path(), "*.speccache").expect("delete");
    assert!(removed.is_empty());
    assert!(temp.path().join("keep.txt").exists());

    let removed = delete_matching(temp.path(), "missing/*.txt").expect("delete");
    assert!(removed.is_empty());
}

#[test]
fn test_delete_top_level_pattern() {
    let temp = temp_dir();
    touch(temp.path(), "Linux.speccache");
    touch(temp.path(), "Windows.speccache");
    touch(temp.path(), "nested/Deep.speccache");

    let removed = delete_matching(temp.path(), "*.speccache").expect("delete");

    assert_eq!(
        relative(temp.path(), &removed),
        vec!["Linux.speccache", "Windows.speccache"]
    );
    assert!(temp.path().join("nested/Deep.speccache").exists());
}

#[test]
fn test_delete_literal_directory() {
    let temp = temp_dir();
    touch(temp.path(), "packages/Newtonsoft.Json/lib.dll");
    touch(temp.path(), "packages.config");

    let removed = delete_matching(temp.path(), "packages").expect("delete");

    assert_eq!(relative(temp.path(), &removed), vec!["packages"]);
    assert!(!temp.path().join("packages").exists());
    assert!(temp.path().join("packages.config").exists());
}

#[test]
fn test_delete_recursive_pattern_skips_nested_matches() {
    let temp = temp_dir();
    touch(temp.path(), "a/obj/x.o");
    touch(temp.path(), "a/obj/obj/y.o");
    touch(temp.path(), "b/obj/z.o");

    let found = find_matching(temp.path(), "**/obj").expect("find");
    assert_eq!(relative(temp.path(), &found), vec!["a/obj", "b/obj"]);

    delete_matching(temp.path(), "**/obj").expect("delete");
    assert!(!temp.path().join("a/obj").exists());
    assert!(!temp.path().join("b/obj").exists());
    assert!(temp.path().join("a").exists());
}

#[test]
fn test_shell_components_become_wax() {
    let expressions: Vec<String> = [
        "*.speccache",
        "Foo (1).speccache",
        "a,b{c}",
        "**",
        "a**b",
        "lib[0-9].dll",
        "[!.]*",
        "x[-a].txt",
        "unclosed[.txt",
    ]
    .into_iter()
    .map(to_wax_component)
    .collect();

    insta::assert_snapshot!(expressions.join("\n"), @r"
    *.speccache
    Foo \(1\).speccache
    a\,b\{c\}
    **
    a*b
    lib[0-9].dll
    [!.]*
    x[\-a].txt
    unclosed\[.txt
    ");
}

#[test]
fn test_delete_literal_name_with_wax_syntax() {
    let temp = temp_dir();
    touch(temp.path(), "Foo (1).speccache");
    touch(temp.path(), "a,b");
    touch(temp.path(), "Foo.speccache");

    let removed = delete_matching(temp.path(), "Foo (1).speccache").expect("delete");
    assert_eq!(relative(temp.path(), &removed), vec!["Foo (1).speccache"]);

    delete_matching(temp.path(), "a,b").expect("delete");
    assert!(!temp.path().join("a,b").exists());
    assert!(temp.path().join("Foo.speccache").exists());
}

#[test]
fn test_wildcard_matches_names_with_wax_syntax() {
    let temp = temp_dir();
    touch(temp.path(), "Foo (1).speccache");
    touch(temp.path(), "Linux.speccache");
    touch(temp.path(), "keep.txt");

    let removed = delete_matching(temp.path(), "*.speccache").expect("delete");
    assert_eq!(
        relative(temp.path(), &removed),
        vec!["Foo (1).speccache", "Linux.speccache"]
    );

    touch(temp.path(), "Foo (1).speccache");
    let found = find_matching(temp.path(), "Foo (?).speccache").expect("find");
    assert_eq!(relative(temp.path(), &found), vec!["Foo (1).speccache"]);
}

#[test]
fn test_delete_literal_file_named_like_a_directory() {
    let temp = temp_dir();
    std::fs::write(temp.path().join("packages"), "not a directory").expect("write");

    let removed = delete_matching(temp.path(), "packages").expect("delete");
    assert_eq!(relative(temp.path(), &removed), vec!["packages"]);
    assert!(!temp.path().join("packages").exists());
}
