//! # chekfmt - Receipt Description Formatting
//!
//! `chekfmt` renders the semicolon/newline-delimited receipt micro-format
//! used in transaction descriptions into a column-aligned, selectively-bold
//! text block. Parsing lives in the companion `chekfmt-scan` crate; this
//! crate owns the two-pass formatter and the output backends.
//!
//! ## Core Concepts
//!
//! - [`format`]: the whole pipeline — tokenize, measure, render — as a pure
//!   function from a raw string to a [`StyledDocument`]
//! - [`StyledDocument`]: ordered bold/plain runs interleaved with line
//!   breaks, independent of any rendering technology
//! - [`OutputMode`]: control output formatting (Auto/Term/Text/TermDebug/Json)
//! - [`DocumentRenderer`]: turn a document into a printable string
//!
//! ## Quick Start
//!
//! ```rust
//! use chekfmt::{format, render, OutputMode};
//!
//! let doc = format("Savdo:;Non - 2x1500=3000;Olma - 1x2000=2000;Jami: 5000");
//! let text = render(&doc, OutputMode::Text).unwrap();
//! assert_eq!(text, "\
//! Savdo:
//! Non  - 2x1500 = 3000
//! Olma - 1x2000 = 2000
//! Jami: 5000
//! ");
//! ```
//!
//! ## The micro-format
//!
//! Lines are separated by `;`, `\n`, or `\r`. A line whose last `-` comes
//! before its first `=` is a product row (`name - calc = sum [discount]`).
//! A `Savdo:` prefix opens a sale block; `Jami:`/`Chegirma:` headers close
//! it. Within an open block, rows need no repeated marker. Everything else
//! renders verbatim: the formatter is total and never loses input content.
//!
//! Field columns are padded to the widest occurrence across the *entire*
//! input, not per sale block, matching how the receipts were always printed.

mod document;
mod error;
mod format;
mod output;

pub use document::{Segment, StyledDocument};
pub use error::RenderError;
pub use format::{flatten_description, format, ColumnWidths};
pub use output::{render, DocumentRenderer, OutputMode};

// Re-export the scanner surface so callers needing raw tokenization do not
// have to depend on chekfmt-scan directly.
pub use chekfmt_scan::{
    has_marker, has_product_shape, logical_lines, strip_marker, ProductLine, DISCOUNT_MARKER,
    SALE_MARKER, TOTAL_MARKER,
};
