use crate::common::command::{identical_documents_dir, run_docdiff_command, write_config};
use crate::common::document::{DocumentSpec, write_docx};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn compare_multiple_pairs_preserves_configuration_order(
    identical_documents_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = identical_documents_dir;
    std::fs::write(dir.path().join("docs").join("notes.txt"), "alpha\nbeta\n")?;
    std::fs::write(dir.path().join("docs").join("notes v2.txt"), "alpha\nbeta\n")?;
    write_docx(DocumentSpec::from_lines(
        dir.path().join("docs").join("c.docx"),
        &["only paragraph"],
    ));
    let config = write_config(
        dir.path(),
        r#"[
            {"file1": "docs/notes.txt", "file2": "docs/notes v2.txt", "mistakeType": "Notes", "label": "z: notes"},
            {"file1": "docs/a.docx", "file2": "docs/b.docx", "mistakeType": "After Implementation"},
            {"file1": "docs/c.docx", "file2": "docs/c.docx", "mistakeType": "After Implementation", "label": "a: self"}
        ]"#,
    );

    let output = run_docdiff_command(dir.path(), &["--config", &config])
        .assert()
        .success();
    let actual_output = String::from_utf8(output.get_output().stdout.clone())?;

    assert_eq!(
        actual_output,
        "{\n  \"z: notes\": [],\n  \"a vs b\": [],\n  \"a: self\": []\n}\n"
    );

    Ok(())
}
