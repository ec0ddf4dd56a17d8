//! The two-pass column formatter.
//!
//! Pass one scans every logical line for the product-row pattern and records
//! the widest name, calc, and sum fields across the whole input. Pass two
//! walks the lines again, tracking whether a sale block is open, and emits
//! padded styled runs against those global widths. Widths are deliberately
//! global rather than per-block: that is how receipts have always aligned,
//! even when one input carries several sale blocks.

use console::{measure_text_width, pad_str, Alignment};

use chekfmt_scan::{
    has_marker, has_product_shape, logical_lines, strip_marker, ProductLine, DISCOUNT_MARKER,
    SALE_MARKER, TOTAL_MARKER,
};

use crate::document::StyledDocument;

/// Maximum display widths of the three product-row fields across an input.
///
/// Computed once before rendering and never mutated afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnWidths {
    /// Widest product name.
    pub name: usize,
    /// Widest computation expression.
    pub calc: usize,
    /// Widest monetary total.
    pub sum: usize,
}

impl ColumnWidths {
    /// Measures all product-pattern lines in `lines`.
    ///
    /// A leading `Savdo:` marker is stripped (case-insensitively) before the
    /// pattern test, so an inline `Savdo: Non - 2x1500=3000` row measures the
    /// same as a bare one. Non-matching lines contribute nothing.
    pub fn measure(lines: &[&str]) -> Self {
        let mut widths = ColumnWidths::default();
        for line in lines {
            let line = match strip_marker(line, SALE_MARKER) {
                Some(rest) => rest.trim(),
                None => line,
            };
            if let Some(row) = ProductLine::parse(line) {
                widths.name = widths.name.max(measure_text_width(row.name));
                widths.calc = widths.calc.max(measure_text_width(row.calc));
                widths.sum = widths.sum.max(measure_text_width(row.sum));
            }
        }
        widths
    }
}

/// Formats a raw transaction description into a styled document.
///
/// Total on its input domain: any string produces a document, and malformed
/// product-like lines degrade to verbatim plain runs rather than being
/// dropped. Empty or whitespace-only input (callers holding an
/// `Option<String>` pass `desc.as_deref().unwrap_or_default()`) yields an
/// empty document.
///
/// # Example
///
/// ```rust
/// use chekfmt::format;
///
/// let doc = format("Savdo:\nNon - 2x1500=3000\nJami: 3000");
/// assert_eq!(doc.to_plain_text(), "Savdo:\nNon - 2x1500 = 3000\nJami: 3000\n");
///
/// assert!(format("").is_empty());
/// ```
pub fn format(raw: &str) -> StyledDocument {
    let lines = logical_lines(raw);
    let mut doc = StyledDocument::default();
    if lines.is_empty() {
        return doc;
    }

    let widths = ColumnWidths::measure(&lines);
    let mut inside_sale = false;

    for line in lines {
        if let Some(rest) = strip_marker(line, SALE_MARKER) {
            inside_sale = true;
            // Canonical casing, whatever the input used.
            doc.push_bold(SALE_MARKER);

            let remainder = rest.trim();
            if remainder.is_empty() {
                doc.push_break();
            } else if has_product_shape(remainder) {
                doc.push_break();
                render_product_line(&mut doc, remainder, widths);
            } else {
                // Trailing text attached to the header, not a product row.
                doc.push_run(format!(" {}", remainder));
                doc.push_break();
            }
        } else if inside_sale && has_product_shape(line) {
            // Rows in an open sale block need no repeated marker.
            render_product_line(&mut doc, line, widths);
        } else if let Some(colon) = line.find(':') {
            doc.push_bold(&line[..colon + 1]);
            doc.push_run(&line[colon + 1..]);
            doc.push_break();
            // Totals and discounts terminate the sale section.
            if has_marker(line, TOTAL_MARKER) || has_marker(line, DISCOUNT_MARKER) {
                inside_sale = false;
            }
        } else {
            doc.push_run(line);
            doc.push_break();
        }
    }

    doc
}

/// Renders one product row padded to the global column widths.
///
/// Pads on the right only, never truncates. Lines that fail the full
/// positional pattern (the caller only checked for the rough dash/equals
/// shape) fall back to a verbatim plain run.
fn render_product_line(doc: &mut StyledDocument, line: &str, widths: ColumnWidths) {
    match ProductLine::parse(line) {
        Some(row) => {
            doc.push_bold(pad_right(row.name, widths.name));
            doc.push_run(" - ");
            doc.push_run(pad_right(row.calc, widths.calc));
            doc.push_run(" = ");
            doc.push_bold(pad_right(row.sum, widths.sum));
            if let Some(discount) = row.discount {
                doc.push_run(format!(" {}", discount));
            }
        }
        None => doc.push_run(line),
    }
    doc.push_break();
}

fn pad_right(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Left, None).into_owned()
}

/// Collapses a raw description into a plain one-column summary.
///
/// Splits on `;` only (newlines inside a segment are kept as-is), trims each
/// segment, drops empties, and joins with `\n`. This is the lightweight
/// rendition for surfaces that cannot take styled runs at all.
pub fn flatten_description(raw: &str) -> String {
    raw.split(';')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
