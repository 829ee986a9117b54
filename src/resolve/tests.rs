use super::*;

fn folders(paths: &[&str]) -> Vec<PathBuf> {
    paths.iter().map(PathBuf::from).collect()
}

#[test]
fn test_workspace_folder_prefers_most_specific() {
    let open = folders(&["/a", "/a/b"]);
    let folder = workspace_folder(Path::new("/a/b/src/main.x"), &open);
    assert_eq!(folder, PathBuf::from("/a/b"));
}

#[test]
fn test_workspace_folder_order_independent() {
    let open = folders(&["/a/b", "/a"]);
    let folder = workspace_folder(Path::new("/a/b/c.txt"), &open);
    assert_eq!(folder, PathBuf::from("/a/b"));
}

#[test]
fn test_workspace_folder_falls_back_to_parent() {
    let open = folders(&["/elsewhere"]);
    let folder = workspace_folder(Path::new("/home/u/notes/todo.md"), &open);
    assert_eq!(folder, PathBuf::from("/home/u/notes"));
}

#[test]
fn test_workspace_folder_ignores_sibling_with_common_prefix() {
    let open = folders(&["/a/b"]);
    let folder = workspace_folder(Path::new("/a/bc/file.txt"), &open);
    assert_eq!(folder, PathBuf::from("/a/bc"));
}

#[test]
fn test_pick_sidebar_wins_over_everything() {
    let c = Candidates {
        explicit: Some("/explicit".into()),
        sidebar: Some(folders(&["/side/one", "/side/two"])),
        active_file: Some("/a/file.txt".into()),
        open_folders: folders(&["/a"]),
    };
    assert_eq!(c.pick(), Some(PathBuf::from("/side/one")));
}

#[test]
fn test_pick_explicit_before_active_file() {
    let c = Candidates {
        explicit: Some("/explicit".into()),
        sidebar: Some(Vec::new()),
        active_file: Some("/a/file.txt".into()),
        open_folders: folders(&["/a"]),
    };
    assert_eq!(c.pick(), Some(PathBuf::from("/explicit")));
}

#[test]
fn test_pick_empty_explicit_is_ignored() {
    let c = Candidates {
        explicit: Some(PathBuf::new()),
        active_file: Some("/a/file.txt".into()),
        open_folders: folders(&["/a"]),
        ..Candidates::default()
    };
    assert_eq!(c.pick(), Some(PathBuf::from("/a")));
}

#[test]
fn test_pick_nothing() {
    assert_eq!(Candidates::default().pick(), None);
}

#[test]
fn test_resolve_nothing_gives_home() {
    let home = tempfile::tempdir().unwrap();
    let dir = resolve(&Candidates::default(), MissingDirectory::Abort, Some(home.path())).unwrap();
    assert_eq!(dir, home.path());
}

#[test]
fn test_resolve_nothing_without_home() {
    let err = resolve(&Candidates::default(), MissingDirectory::Home, None).unwrap_err();
    assert!(matches!(err, ResolveError::NoHomeDirectory));
}

#[test]
fn test_resolve_sidebar_file_uses_parent() {
    let tmp = tempfile::tempdir().unwrap();
    let file = tmp.path().join("Cargo.toml");
    std::fs::write(&file, "").unwrap();
    let c = Candidates {
        explicit: Some("/does/not/matter".into()),
        sidebar: Some(vec![file]),
        ..Candidates::default()
    };
    let dir = resolve(&c, MissingDirectory::Abort, None).unwrap();
    assert_eq!(dir, tmp.path());
}

#[test]
fn test_resolve_sidebar_directory_kept() {
    let tmp = tempfile::tempdir().unwrap();
    let sub = tmp.path().join("sub");
    std::fs::create_dir(&sub).unwrap();
    let c = Candidates {
        sidebar: Some(vec![sub.clone()]),
        active_file: Some(tmp.path().join("x.rs")),
        open_folders: vec![tmp.path().to_path_buf()],
        ..Candidates::default()
    };
    assert_eq!(resolve(&c, MissingDirectory::Home, None).unwrap(), sub);
}

#[test]
fn test_resolve_missing_falls_back_to_home() {
    let home = tempfile::tempdir().unwrap();
    let c = Candidates {
        explicit: Some(home.path().join("gone")),
        ..Candidates::default()
    };
    let dir = resolve(&c, MissingDirectory::Home, Some(home.path())).unwrap();
    assert_eq!(dir, home.path());
}

#[test]
fn test_resolve_missing_aborts() {
    let home = tempfile::tempdir().unwrap();
    let missing = home.path().join("gone");
    let c = Candidates {
        explicit: Some(missing.clone()),
        ..Candidates::default()
    };
    let err = resolve(&c, MissingDirectory::Abort, Some(home.path())).unwrap_err();
    match err {
        ResolveError::NotADirectory(path) => assert_eq!(path, missing),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_not_a_directory_message() {
    let err = ResolveError::NotADirectory(PathBuf::from("/nope"));
    assert_eq!(err.to_string(), format!("'{}' is not a directory!", Path::new("/nope").display()));
}

#[test]
fn test_missing_directory_from_str() {
    assert_eq!("home".parse::<MissingDirectory>().unwrap(), MissingDirectory::Home);
    assert_eq!("abort".parse::<MissingDirectory>().unwrap(), MissingDirectory::Abort);
    assert!("ignore".parse::<MissingDirectory>().is_err());
}
