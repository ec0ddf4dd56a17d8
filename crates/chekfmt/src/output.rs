//! Output backends for styled documents.
//!
//! The formatter produces an abstract [`StyledDocument`]; this module turns
//! it into something a caller can actually print or ship: ANSI-styled
//! terminal text, plain text, debug markup with visible `[bold]` tags, or
//! JSON for structured consumers.

use console::Style;

use crate::document::{Segment, StyledDocument};
use crate::error::RenderError;

/// Controls how a document is rendered.
///
/// # Variants
///
/// - `Auto` - Detect terminal capabilities (TTY → Term, pipe → Text)
/// - `Term` - Always apply terminal styling
/// - `Text` - Never apply styling
/// - `TermDebug` - Keep style names visible as `[bold]text[/bold]` tags
/// - `Json` - Serialize the document structure directly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Auto-detect: TTY gets Term, pipe gets Text.
    #[default]
    Auto,
    /// Always use terminal styling.
    Term,
    /// Never use styling (plain text).
    Text,
    /// Debug mode: render style names as bracket tags.
    TermDebug,
    /// Serialize the document as JSON.
    Json,
}

impl OutputMode {
    /// Returns true if this mode serializes the document structure rather
    /// than rendering text.
    pub fn is_structured(&self) -> bool {
        matches!(self, OutputMode::Json)
    }

    /// Resolves `Auto` to concrete `Term` or `Text` based on TTY detection.
    ///
    /// Non-Auto modes are returned unchanged.
    pub fn resolve_auto(&self) -> OutputMode {
        match self {
            OutputMode::Auto => {
                if console::user_attended() {
                    OutputMode::Term
                } else {
                    OutputMode::Text
                }
            }
            other => *other,
        }
    }
}

/// Renders styled documents into strings for a given [`OutputMode`].
///
/// The bold style defaults to `Style::new().bold()`, which follows the
/// terminal's own color support detection; override it with
/// [`bold_style`](Self::bold_style) to force or suppress ANSI output.
#[derive(Debug, Clone)]
pub struct DocumentRenderer {
    mode: OutputMode,
    bold: Style,
}

impl DocumentRenderer {
    /// Creates a renderer for the given mode with the default bold style.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            bold: Style::new().bold(),
        }
    }

    /// Replaces the style applied to bold runs in `Term` mode.
    pub fn bold_style(mut self, style: Style) -> Self {
        self.bold = style;
        self
    }

    /// Renders the document according to the configured mode.
    ///
    /// Only the JSON arm can fail; the text arms are total.
    pub fn render(&self, doc: &StyledDocument) -> Result<String, RenderError> {
        match self.mode.resolve_auto() {
            OutputMode::Term => Ok(self.render_term(doc)),
            OutputMode::Text => Ok(doc.to_plain_text()),
            OutputMode::TermDebug => Ok(render_debug(doc)),
            OutputMode::Json => Ok(serde_json::to_string_pretty(doc)?),
            OutputMode::Auto => unreachable!("resolve_auto should have resolved Auto"),
        }
    }

    fn render_term(&self, doc: &StyledDocument) -> String {
        let mut out = String::new();
        for segment in doc {
            match segment {
                Segment::Run { text, bold: true } => {
                    out.push_str(&self.bold.apply_to(text.as_str()).to_string());
                }
                Segment::Run { text, bold: false } => out.push_str(text),
                Segment::LineBreak => out.push('\n'),
            }
        }
        out
    }
}

fn render_debug(doc: &StyledDocument) -> String {
    let mut out = String::new();
    for segment in doc {
        match segment {
            Segment::Run { text, bold: true } => {
                out.push_str("[bold]");
                out.push_str(text);
                out.push_str("[/bold]");
            }
            Segment::Run { text, bold: false } => out.push_str(text),
            Segment::LineBreak => out.push('\n'),
        }
    }
    out
}

/// Convenience wrapper: renders `doc` with a default renderer for `mode`.
pub fn render(doc: &StyledDocument, mode: OutputMode) -> Result<String, RenderError> {
    DocumentRenderer::new(mode).render(doc)
}
