//! End-to-end tests for the relic engine: add, commit, walk, diff

use relic_core::{
    commit::{create_commit, read_commit},
    diff::{diff, DiffKind},
    HistoryWalker, RepoError, Repository,
};

type Result<T> = std::result::Result<T, RepoError>;

/// Stage a file the way the CLI's `add` does: store content, record entry.
fn add_file(repo: &Repository, path: &str, content: &[u8]) -> Result<()> {
    let hash = repo.store().put(content)?;
    repo.index().stage(path, hash)
}

#[test]
fn test_full_lifecycle() -> Result<()> {
    let temp = tempfile::tempdir().unwrap();
    let repo = Repository::init(temp.path())?;

    // Stage and commit a first version
    add_file(&repo, "notes.txt", b"first line\n")?;
    let first = create_commit(&repo, "initial import")?;
    assert!(first.parent.is_none());
    assert!(repo.index().load()?.is_empty());

    // Stage and commit a second version of the same path
    add_file(&repo, "notes.txt", b"first line\nsecond line\n")?;
    let second = create_commit(&repo, "append a line")?;
    assert_eq!(second.parent, Some(first.hash));

    // History is newest-first and complete
    let history: Vec<_> = HistoryWalker::from_head(&repo)?.collect::<Result<Vec<_>>>()?;
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].hash, second.hash);
    assert_eq!(history[1].hash, first.hash);

    // Diff the two stored versions the way `show` does
    let target = read_commit(&repo, &second.hash)?;
    let entry = &target.files[0];
    let new_content = String::from_utf8(repo.store().get(&entry.hash)?).unwrap();

    let parent = read_commit(&repo, &target.parent.unwrap())?;
    let parent_entry = parent.files.iter().find(|e| e.path == entry.path).unwrap();
    let old_content = String::from_utf8(repo.store().get(&parent_entry.hash)?).unwrap();

    let chunks = diff(&old_content, &new_content);
    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].kind, DiffKind::Unchanged);
    assert_eq!(chunks[0].text, "first line\n");
    assert_eq!(chunks[1].kind, DiffKind::Added);
    assert_eq!(chunks[1].text, "second line\n");

    Ok(())
}

#[test]
fn test_identical_content_stored_once() -> Result<()> {
    let temp = tempfile::tempdir().unwrap();
    let repo = Repository::init(temp.path())?;

    add_file(&repo, "a.txt", b"shared bytes\n")?;
    add_file(&repo, "b.txt", b"shared bytes\n")?;

    let entries = repo.index().load()?;
    assert_eq!(entries[0].hash, entries[1].hash);

    // Exactly one object on disk for the shared content
    let object_count = std::fs::read_dir(temp.path().join(".relic/objects"))?.count();
    assert_eq!(object_count, 1);

    Ok(())
}

#[test]
fn test_file_new_in_commit_is_absent_from_parent() -> Result<()> {
    let temp = tempfile::tempdir().unwrap();
    let repo = Repository::init(temp.path())?;

    add_file(&repo, "old.txt", b"old\n")?;
    create_commit(&repo, "one file")?;

    add_file(&repo, "new.txt", b"new\n")?;
    let second = create_commit(&repo, "another file")?;

    // The show algorithm reports this path as new rather than diffing
    let parent = read_commit(&repo, &second.parent.unwrap())?;
    assert!(parent.files.iter().all(|e| e.path != "new.txt"));

    Ok(())
}

#[test]
fn test_stored_commits_are_never_rewritten() -> Result<()> {
    let temp = tempfile::tempdir().unwrap();
    let repo = Repository::init(temp.path())?;

    let first = create_commit(&repo, "root")?;
    let bytes_before = repo.store().get(&first.hash)?;

    create_commit(&repo, "next")?;
    create_commit(&repo, "another")?;

    assert_eq!(repo.store().get(&first.hash)?, bytes_before);
    Ok(())
}

#[test]
fn test_reopen_preserves_head_and_history() -> Result<()> {
    let temp = tempfile::tempdir().unwrap();

    let head = {
        let repo = Repository::init(temp.path())?;
        add_file(&repo, "f.txt", b"persisted\n")?;
        create_commit(&repo, "persisted commit")?.hash
    };

    let reopened = Repository::open(temp.path())?;
    assert_eq!(reopened.head()?, Some(head));

    let history: Vec<_> = HistoryWalker::from_head(&reopened)?.collect::<Result<Vec<_>>>()?;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].message, "persisted commit");

    Ok(())
}
