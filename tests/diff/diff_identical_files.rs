use crate::common::command::{populated_workspace_dir, stdout_of};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn diff_identical_files(
    populated_workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let actual_output = stdout_of(
        populated_workspace_dir.path(),
        &["diff", "test_file1.txt", "test_file1_copy.txt"],
    )?;

    assert_eq!(actual_output, "Files are identical\n");

    Ok(())
}

#[rstest]
fn diff_identical_binary_files_in_different_directories(
    populated_workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = populated_workspace_dir;
    let content = (0..=255u8).cycle().take(10_000).collect::<Vec<_>>();
    write_file(&FileSpec::new(
        repository_dir.path().join("a").join("blob.bin"),
        content.clone(),
    ));
    write_file(&FileSpec::new(
        repository_dir.path().join("b").join("c").join("blob.bin"),
        content,
    ));

    let actual_output = stdout_of(
        repository_dir.path(),
        &["diff", "a/blob.bin", "b/c/blob.bin"],
    )?;

    assert_eq!(actual_output, "Files are identical\n");

    Ok(())
}
