use crate::common::command::{
    identical_documents_dir, run_docdiff_command, workspace_dir, write_config,
};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn compare_with_missing_document_fails_without_report(identical_documents_dir: TempDir) {
    let dir = identical_documents_dir;
    // the first pair is fine, the second one is not: nothing may be printed
    let config = write_config(
        dir.path(),
        r#"[
            {"file1": "docs/a.docx", "file2": "docs/b.docx", "mistakeType": "During Implementation"},
            {"file1": "docs/a.docx", "file2": "docs/missing.docx", "mistakeType": "After Implementation"}
        ]"#,
    );

    run_docdiff_command(dir.path(), &["--config", &config])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("failed to read document"))
        .stderr(predicate::str::contains("missing.docx"));
}

#[rstest]
fn compare_without_docs_directory_fails_with_default_pairs(workspace_dir: TempDir) {
    run_docdiff_command(workspace_dir.path(), &[])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Client Doc.docx"));
}
