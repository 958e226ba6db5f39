// Integration tests for src/util/file_list.rs: `-r` input expansion.

use std::fs;
use std::path::{Path, PathBuf};

use cchf::util::create_file_list;
use tempfile::TempDir;

fn names(list: &[PathBuf], root: &Path) -> Vec<String> {
    list.iter()
        .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
        .collect()
}

#[test]
fn walks_nested_directories_in_name_order() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("b/inner")).unwrap();
    fs::write(root.join("b/inner/z.txt"), b"z").unwrap();
    fs::write(root.join("b/a.txt"), b"a").unwrap();
    fs::write(root.join("c.txt"), b"c").unwrap();

    let list = create_file_list(&[root], None).unwrap();
    assert_eq!(names(&list, root), ["b/a.txt", "b/inner/z.txt", "c.txt"]);
}

#[test]
fn suffix_filter_only_applies_inside_directories() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    fs::create_dir(root.join("d")).unwrap();
    fs::write(root.join("d/keep.txt"), b"k").unwrap();
    fs::write(root.join("d/skip.txt.cchf"), b"s").unwrap();
    let direct = root.join("direct.cchf");
    fs::write(&direct, b"x").unwrap();

    let list = create_file_list(&[root.join("d").as_path(), direct.as_path()], Some(".cchf")).unwrap();
    assert_eq!(names(&list, root), ["d/keep.txt", "direct.cchf"]);
}

#[test]
fn missing_paths_pass_through() {
    let p = Path::new("definitely/not/here.txt");
    let list = create_file_list(&[p], None).unwrap();
    assert_eq!(list, [p.to_path_buf()]);
}
