use crate::common::command::{populated_workspace_dir, run_tinygit_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use predicates::prelude::PredicateBooleanExt;
use rstest::rstest;

#[rstest]
fn commit_with_missing_file_fails(
    populated_workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = populated_workspace_dir;

    run_tinygit_command(
        repository_dir.path(),
        &[
            "commit",
            "-m",
            "test commit message",
            "invalid_path1.txt",
            "invalid_path2.txt",
        ],
    )
    .assert()
    .failure()
    .stdout(predicate::str::is_empty())
    .stderr(predicate::str::contains(
        "invalid_path1.txt is not a valid file path",
    ))
    .stderr(predicate::str::contains("invalid_path2.txt").not());

    assert!(!repository_dir.path().join("invalid_path1.txt").exists());
    assert!(!repository_dir.path().join("invalid_path2.txt").exists());

    Ok(())
}

#[rstest]
fn commit_stops_at_the_first_missing_file(
    populated_workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = populated_workspace_dir;

    run_tinygit_command(
        repository_dir.path(),
        &[
            "commit",
            "-m",
            "partial",
            "test_file1.txt",
            "gone.txt",
            "test_file2.txt",
        ],
    )
    .assert()
    .failure()
    .stdout(predicate::str::is_empty())
    .stderr(predicate::str::contains("gone.txt is not a valid file path"));

    Ok(())
}

#[rstest]
fn commit_with_empty_path_fails(
    populated_workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_tinygit_command(
        populated_workspace_dir.path(),
        &["commit", "-m", "x", "test_file1.txt", ""],
    )
    .assert()
    .failure()
    .stdout(predicate::str::is_empty())
    .stderr(predicate::str::contains("Error:  is not a valid file path"));

    Ok(())
}
