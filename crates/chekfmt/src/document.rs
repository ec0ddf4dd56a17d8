//! The styled document value produced by formatting.
//!
//! A [`StyledDocument`] is an ordered stream of text runs and explicit line
//! breaks. It carries no rendering technology: a terminal backend turns bold
//! runs into ANSI codes, a GUI backend turns them into its own text runs.
//! Documents are append-only while the formatter builds them and immutable
//! once returned.

use serde::{Deserialize, Serialize};

/// One element of a styled document: a text run or a line break.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    /// A fragment of text with a bold/plain style attribute.
    Run { text: String, bold: bool },
    /// An explicit line break between runs.
    LineBreak,
}

/// An ordered sequence of styled runs interleaved with line breaks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledDocument {
    segments: Vec<Segment>,
}

impl StyledDocument {
    /// The document's segments in emission order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// True when the document holds no segments at all.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments (runs and line breaks both count).
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Number of line breaks emitted, i.e. the number of rendered lines.
    pub fn line_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|segment| matches!(segment, Segment::LineBreak))
            .count()
    }

    /// Concatenates all run text with `\n` at each line break.
    ///
    /// This is the style-free rendition: padding survives, bold does not.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Run { text, .. } => out.push_str(text),
                Segment::LineBreak => out.push('\n'),
            }
        }
        out
    }

    pub(crate) fn push_run(&mut self, text: impl Into<String>) {
        self.segments.push(Segment::Run {
            text: text.into(),
            bold: false,
        });
    }

    pub(crate) fn push_bold(&mut self, text: impl Into<String>) {
        self.segments.push(Segment::Run {
            text: text.into(),
            bold: true,
        });
    }

    pub(crate) fn push_break(&mut self) {
        self.segments.push(Segment::LineBreak);
    }
}

impl<'a> IntoIterator for &'a StyledDocument {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
