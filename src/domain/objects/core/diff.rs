use derive_new::new;
use similar::{ChangeTag, TextDiff};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Unchanged,
    Added,
    Removed,
}

impl SegmentKind {
    pub fn is_change(&self) -> bool {
        !matches!(self, SegmentKind::Unchanged)
    }
}

impl From<ChangeTag> for SegmentKind {
    fn from(tag: ChangeTag) -> Self {
        match tag {
            ChangeTag::Equal => SegmentKind::Unchanged,
            ChangeTag::Insert => SegmentKind::Added,
            ChangeTag::Delete => SegmentKind::Removed,
        }
    }
}

/// A run of consecutive lines that share the same classification.
///
/// `text` keeps every line terminator of the run, so concatenating the
/// segments of one side gives back that side's text verbatim.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct DiffSegment {
    kind: SegmentKind,
    text: String,
    line_count: usize,
}

impl DiffSegment {
    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }

    fn push_line(&mut self, line: &str) {
        self.text.push_str(line);
        self.line_count += 1;
    }
}

/// Line-level diff of two texts, grouped into segments.
///
/// Lines keep their terminator, so a last line without `\n` never equals the
/// same line with one. Removals of a change region come before its additions.
pub fn diff_lines(text_a: &str, text_b: &str) -> Vec<DiffSegment> {
    let diff = TextDiff::from_lines(text_a, text_b);
    let mut segments = Vec::<DiffSegment>::new();

    for change in diff.iter_all_changes() {
        let kind = SegmentKind::from(change.tag());
        match segments.last_mut() {
            Some(segment) if segment.kind == kind => segment.push_line(change.value()),
            _ => segments.push(DiffSegment::new(kind, change.value().to_string(), 1)),
        }
    }

    segments
}
