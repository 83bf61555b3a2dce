use anyhow::{Context, bail};
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DURING_IMPLEMENTATION: &str = "During Implementation";
pub const AFTER_IMPLEMENTATION: &str = "After Implementation";

/// A pair of documents to compare and the mistake type their differences get.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub file1: String,
    pub file2: String,
    pub mistake_type: String,
    #[new(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Comparison {
    /// The report key of this pair, `"<stem1> vs <stem2>"` unless overridden.
    pub fn label(&self) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => format!("{} vs {}", file_stem(&self.file1), file_stem(&self.file2)),
        }
    }
}

fn file_stem(file: &str) -> String {
    Path::new(file)
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_else(|| file.to_string())
}

/// The pairs compared when no configuration file is given.
pub fn default_comparisons() -> Vec<Comparison> {
    vec![
        Comparison::new(
            "./docs/Client Doc.docx".to_string(),
            "./docs/Conditional Coupon Doc.docx".to_string(),
            DURING_IMPLEMENTATION.to_string(),
        ),
        Comparison::new(
            "./docs/Guaranteed Coupon Doc.docx".to_string(),
            "./docs/Latest Guaranteed Coupon Doc.docx".to_string(),
            AFTER_IMPLEMENTATION.to_string(),
        ),
    ]
}

pub fn parse_comparisons(json: &str) -> anyhow::Result<Vec<Comparison>> {
    let comparisons: Vec<Comparison> =
        serde_json::from_str(json).context("Invalid comparison list")?;

    if comparisons.is_empty() {
        bail!("The comparison list is empty");
    }

    Ok(comparisons)
}

pub fn load_comparisons(path: &Path) -> anyhow::Result<Vec<Comparison>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file {:?}", path))?;

    parse_comparisons(&json).with_context(|| format!("Failed to load {:?}", path))
}
