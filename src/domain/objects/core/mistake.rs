use crate::domain::objects::diff::DiffSegment;
use derive_new::new;
use serde::Serialize;
use thiserror::Error;

/// One reported discrepancy between two documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, new)]
#[serde(rename_all = "camelCase")]
pub struct MistakeRecord {
    file1: String,
    file2: String,
    line_number: usize,
    character_number: usize,
    text: String,
    mistake_type: String,
}

impl MistakeRecord {
    pub fn file1(&self) -> &str {
        &self.file1
    }

    pub fn file2(&self) -> &str {
        &self.file2
    }

    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn character_number(&self) -> usize {
        self.character_number
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn mistake_type(&self) -> &str {
        &self.mistake_type
    }
}

/// What to do when the line counter points past the end of the first file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LookupPolicy {
    /// Report the mistake with a character number of 0.
    #[default]
    Lenient,
    /// Abort the comparison with [`MistakeError::IndexLookupFault`].
    Strict,
}

#[derive(Debug, Error)]
pub enum MistakeError {
    #[error("line {line_number} is out of range for a document of {line_count} lines")]
    IndexLookupFault {
        line_number: usize,
        line_count: usize,
    },
}

/// Turns diff segments into mistake records for one pair of documents.
///
/// The line counter tracks the first document: unchanged runs advance it by
/// their length, and every added or removed line advances it by one. Additions
/// are looked up against the first document's lines as well, so positions past
/// a pure insertion are approximate.
#[derive(Debug, Clone, new)]
pub struct MistakeMapper<'m> {
    file1: &'m str,
    file2: &'m str,
    mistake_type: &'m str,
    policy: LookupPolicy,
}

impl MistakeMapper<'_> {
    pub fn map(
        &self,
        segments: &[DiffSegment],
        lines_of_file_a: &[&str],
    ) -> Result<Vec<MistakeRecord>, MistakeError> {
        let mut mistakes = Vec::new();
        let mut line_number = 1;

        for segment in segments {
            if !segment.kind().is_change() {
                line_number += segment.line_count();
                continue;
            }

            for change in split_changed_lines(segment.text()) {
                let character_number =
                    self.character_number(lines_of_file_a, line_number, change)?;

                mistakes.push(MistakeRecord::new(
                    self.file1.to_string(),
                    self.file2.to_string(),
                    line_number,
                    character_number,
                    change.to_string(),
                    self.mistake_type.to_string(),
                ));
                line_number += 1;
            }
        }

        Ok(mistakes)
    }

    fn character_number(
        &self,
        lines_of_file_a: &[&str],
        line_number: usize,
        change: &str,
    ) -> Result<usize, MistakeError> {
        match lines_of_file_a.get(line_number - 1) {
            Some(original) => Ok(find_char_index(original, change).map_or(0, |index| index + 1)),
            None if self.policy == LookupPolicy::Strict => Err(MistakeError::IndexLookupFault {
                line_number,
                line_count: lines_of_file_a.len(),
            }),
            None => {
                log::warn!(
                    "{} vs {}: line {} is past the end of the first document ({} lines)",
                    self.file1,
                    self.file2,
                    line_number,
                    lines_of_file_a.len()
                );
                Ok(0)
            }
        }
    }
}

// The empty piece after a final newline is not a line.
fn split_changed_lines(text: &str) -> Vec<&str> {
    let mut lines = text.split('\n').collect::<Vec<_>>();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

// Character (not byte) index of the first occurrence of `needle`.
fn find_char_index(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .find(needle)
        .map(|byte_index| haystack[..byte_index].chars().count())
}
