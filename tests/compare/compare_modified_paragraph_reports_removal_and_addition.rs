use crate::common::command::{run_docdiff_command, single_pair_config, workspace_dir, write_config};
use crate::common::document::{DocumentSpec, write_docx};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn compare_modified_paragraph_reports_removal_and_addition(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let docs = workspace_dir.path().join("docs");
    write_docx(DocumentSpec::from_lines(
        docs.join("a.docx"),
        &["line1", "line2", "line3"],
    ));
    write_docx(DocumentSpec::from_lines(
        docs.join("b.docx"),
        &["line1", "lineX", "line3"],
    ));
    let config = write_config(
        workspace_dir.path(),
        &single_pair_config("docs/a.docx", "docs/b.docx", "During Implementation"),
    );

    // paragraphs are separated by blank lines, so "line2" sits on line 3
    let expected_output = r#"{
  "a vs b": [
    {
      "file1": "docs/a.docx",
      "file2": "docs/b.docx",
      "lineNumber": 3,
      "characterNumber": 1,
      "text": "line2",
      "mistakeType": "During Implementation"
    },
    {
      "file1": "docs/a.docx",
      "file2": "docs/b.docx",
      "lineNumber": 4,
      "characterNumber": 0,
      "text": "lineX",
      "mistakeType": "During Implementation"
    }
  ]
}
"#;
    let output = run_docdiff_command(workspace_dir.path(), &["-c", &config])
        .assert()
        .success();
    let actual_output = String::from_utf8(output.get_output().stdout.clone())?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}
