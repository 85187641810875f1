use dagri_server::config::load_or_generate_seed;

#[test]
fn generates_seed_on_first_run_and_reloads_it() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("signing.key");

    let first = load_or_generate_seed(&path).unwrap();
    assert!(path.exists());

    let second = load_or_generate_seed(&path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn rejects_key_file_of_wrong_length() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("short.key");
    std::fs::write(&path, [1u8; 7]).unwrap();

    assert!(load_or_generate_seed(&path).is_err());
}

#[test]
fn distinct_paths_get_distinct_seeds() {
    let dir = tempfile::tempdir().unwrap();
    let a = load_or_generate_seed(&dir.path().join("a.key")).unwrap();
    let b = load_or_generate_seed(&dir.path().join("b.key")).unwrap();
    assert_ne!(a, b);
}
