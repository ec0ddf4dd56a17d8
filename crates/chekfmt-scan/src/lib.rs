//! Tokenizer and line classifier for the receipt description micro-format.
//!
//! Transaction descriptions arrive as a single loosely structured string:
//! product rows, totals, and free text separated by semicolons or newlines.
//! This crate splits that string into logical lines and recognizes the
//! product-row pattern without ever failing — anything that does not match
//! is simply not a product row.
//!
//! # Example
//!
//! ```rust
//! use chekfmt_scan::{logical_lines, ProductLine};
//!
//! let lines = logical_lines("Savdo:; Non - 2x1500=3000 ;Jami: 3000");
//! assert_eq!(lines, vec!["Savdo:", "Non - 2x1500=3000", "Jami: 3000"]);
//!
//! let row = ProductLine::parse("Non - 2x1500=3000").unwrap();
//! assert_eq!(row.name, "Non");
//! assert_eq!(row.calc, "2x1500");
//! assert_eq!(row.sum, "3000");
//! assert_eq!(row.discount, None);
//! ```
//!
//! # Line grammar
//!
//! A logical line is any `;`/`\n`/`\r`-delimited segment that is non-empty
//! after trimming. A line is a product row iff its last `-` occurs strictly
//! before its first `=`:
//!
//! ```text
//! name - calc = sum [discount]
//! ```
//!
//! The bracketed discount is optional and kept verbatim, brackets included.

/// Marker opening a sale block. Matched case-insensitively as a line prefix.
pub const SALE_MARKER: &str = "Savdo:";

/// Header closing a sale block with the running total.
pub const TOTAL_MARKER: &str = "Jami:";

/// Header closing a sale block with a discount summary.
pub const DISCOUNT_MARKER: &str = "Chegirma:";

/// Splits a raw description into trimmed, non-empty logical lines.
///
/// Splits on any of `;`, `\n`, `\r`, so both semicolon-packed single-line
/// descriptions and CRLF multi-line ones tokenize the same way. Order is
/// preserved. This never fails; empty or whitespace-only input yields an
/// empty vector.
pub fn logical_lines(raw: &str) -> Vec<&str> {
    raw.split([';', '\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Returns true if the line has the rough shape of a product row.
///
/// This is the cheap pre-check (contains both `-` and `=`) used to decide
/// whether a line inside an open sale block should be handed to the product
/// renderer. [`ProductLine::parse`] applies the full positional rule.
pub fn has_product_shape(line: &str) -> bool {
    line.contains('-') && line.contains('=')
}

/// Strips `marker` from the front of `line`, ASCII case-insensitively.
///
/// Returns the untrimmed remainder on a match, `None` otherwise. The
/// comparison is locale-independent: only ASCII letters fold, which is all
/// the markers contain.
pub fn strip_marker<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    let head = line.get(..marker.len())?;
    if head.eq_ignore_ascii_case(marker) {
        Some(&line[marker.len()..])
    } else {
        None
    }
}

/// Returns true if `line` starts with `marker`, ASCII case-insensitively.
pub fn has_marker(line: &str, marker: &str) -> bool {
    strip_marker(line, marker).is_some()
}

/// Fields of a line matching the product-row pattern.
///
/// All fields borrow from the scanned line and are whitespace-trimmed.
/// `discount` keeps its surrounding brackets verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductLine<'a> {
    /// Product name, everything before the last `-`.
    pub name: &'a str,
    /// Quantity/computation expression between the last `-` and first `=`.
    pub calc: &'a str,
    /// Monetary total after the `=`, up to the discount bracket if any.
    pub sum: &'a str,
    /// Bracketed discount annotation, e.g. `[10% chegirma]`.
    pub discount: Option<&'a str>,
}

impl<'a> ProductLine<'a> {
    /// Parses a logical line against the product-row pattern.
    ///
    /// Matches iff the line contains a `-` and a `=` with the last `-`
    /// strictly before the first `=`. A `[` is only treated as the discount
    /// opener when it appears after the `=`; an earlier bracket is just part
    /// of the sum text. Returns `None` for everything else — non-matching
    /// lines are rendered verbatim downstream, never rejected.
    pub fn parse(line: &'a str) -> Option<Self> {
        let last_dash = line.rfind('-')?;
        let first_equal = line.find('=')?;
        if first_equal <= last_dash {
            return None;
        }

        let name = line[..last_dash].trim();
        let calc = line[last_dash + 1..first_equal].trim();

        let (sum, discount) = match line.find('[') {
            Some(bracket) if bracket > first_equal => (
                line[first_equal + 1..bracket].trim(),
                Some(line[bracket..].trim()),
            ),
            _ => (line[first_equal + 1..].trim(), None),
        };

        Some(ProductLine {
            name,
            calc,
            sum,
            discount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod lines {
        use super::*;

        #[test]
        fn empty_input() {
            assert!(logical_lines("").is_empty());
        }

        #[test]
        fn whitespace_only() {
            assert!(logical_lines("   \n\t  ;;  \r\n").is_empty());
        }

        #[test]
        fn semicolon_delimited() {
            assert_eq!(logical_lines("a; b ;c"), vec!["a", "b", "c"]);
        }

        #[test]
        fn newline_delimited() {
            assert_eq!(logical_lines("a\nb\r\nc"), vec!["a", "b", "c"]);
        }

        #[test]
        fn mixed_delimiters() {
            assert_eq!(
                logical_lines("Savdo:;Non - 2x1500=3000\nJami: 3000"),
                vec!["Savdo:", "Non - 2x1500=3000", "Jami: 3000"]
            );
        }

        #[test]
        fn order_preserved() {
            assert_eq!(logical_lines("c;a;b"), vec!["c", "a", "b"]);
        }
    }

    mod markers {
        use super::*;

        #[test]
        fn exact_case() {
            assert_eq!(strip_marker("Savdo: rest", SALE_MARKER), Some(" rest"));
        }

        #[test]
        fn case_insensitive() {
            assert!(has_marker("savdo: x", SALE_MARKER));
            assert!(has_marker("SAVDO:", SALE_MARKER));
            assert!(has_marker("JAMI: 500", TOTAL_MARKER));
            assert!(has_marker("chegirma: 500", DISCOUNT_MARKER));
        }

        #[test]
        fn no_match() {
            assert_eq!(strip_marker("Savd: x", SALE_MARKER), None);
            assert!(!has_marker("xSavdo:", SALE_MARKER));
        }

        #[test]
        fn marker_longer_than_line() {
            assert_eq!(strip_marker("Sav", SALE_MARKER), None);
        }

        #[test]
        fn empty_remainder() {
            assert_eq!(strip_marker("Savdo:", SALE_MARKER), Some(""));
        }

        #[test]
        fn multibyte_prefix_is_not_a_match() {
            // The 6-byte slice lands mid-codepoint; must not panic.
            assert_eq!(strip_marker("Савдо: x", SALE_MARKER), None);
        }
    }

    mod product_pattern {
        use super::*;

        #[test]
        fn basic_row() {
            let row = ProductLine::parse("Non - 2x1500=3000").unwrap();
            assert_eq!(row.name, "Non");
            assert_eq!(row.calc, "2x1500");
            assert_eq!(row.sum, "3000");
            assert_eq!(row.discount, None);
        }

        #[test]
        fn with_discount() {
            let row = ProductLine::parse("Olma - 3x1000=3000[10% chegirma]").unwrap();
            assert_eq!(row.name, "Olma");
            assert_eq!(row.calc, "3x1000");
            assert_eq!(row.sum, "3000");
            assert_eq!(row.discount, Some("[10% chegirma]"));
        }

        #[test]
        fn name_may_contain_dashes() {
            // Only the LAST dash separates name from calc.
            let row = ProductLine::parse("Non-patir - 2x100=200").unwrap();
            assert_eq!(row.name, "Non-patir");
            assert_eq!(row.calc, "2x100");
        }

        #[test]
        fn fields_are_trimmed() {
            let row = ProductLine::parse("  A  -  1x2  =  2  ").unwrap();
            assert_eq!(row.name, "A");
            assert_eq!(row.calc, "1x2");
            assert_eq!(row.sum, "2");
        }

        #[test]
        fn no_dash_no_match() {
            assert_eq!(ProductLine::parse("Jami: 3000"), None);
        }

        #[test]
        fn no_equal_no_match() {
            assert_eq!(ProductLine::parse("Non - 2x1500"), None);
        }

        #[test]
        fn dash_after_equal_no_match() {
            // Last '-' must come strictly before the first '='.
            assert_eq!(ProductLine::parse("total = 10 - 2"), None);
        }

        #[test]
        fn bracket_before_equal_is_not_a_discount() {
            let row = ProductLine::parse("A[2] - 1=5").unwrap();
            assert_eq!(row.name, "A[2]");
            assert_eq!(row.sum, "5");
            assert_eq!(row.discount, None);
        }

        #[test]
        fn empty_fields_still_match() {
            let row = ProductLine::parse("-=").unwrap();
            assert_eq!(row.name, "");
            assert_eq!(row.calc, "");
            assert_eq!(row.sum, "");
        }

        #[test]
        fn parse_is_deterministic() {
            let line = "Non - 2x1500=3000[chegirma]";
            assert_eq!(ProductLine::parse(line), ProductLine::parse(line));
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn logical_lines_never_panics(raw in ".*") {
            let _ = logical_lines(&raw);
        }

        #[test]
        fn logical_lines_are_trimmed_and_delimiter_free(raw in ".*") {
            for line in logical_lines(&raw) {
                prop_assert!(!line.is_empty());
                prop_assert_eq!(line, line.trim());
                prop_assert!(!line.contains(';'));
                prop_assert!(!line.contains('\n'));
                prop_assert!(!line.contains('\r'));
            }
        }

        #[test]
        fn parse_never_panics(line in ".*") {
            let _ = ProductLine::parse(&line);
        }

        #[test]
        fn parse_requires_dash_before_equal(line in "[^=-]*") {
            // Without both delimiters there is never a match.
            prop_assert_eq!(ProductLine::parse(&line), None);
        }

        #[test]
        fn well_formed_rows_always_match(
            name in "[a-zA-Z][a-zA-Z ]{0,10}",
            calc in "[0-9]{1,3}x[0-9]{1,5}",
            sum in "[0-9]{1,7}",
        ) {
            let line = format!("{} - {}={}", name, calc, sum);
            let row = ProductLine::parse(&line).unwrap();
            prop_assert_eq!(row.name, name.trim());
            prop_assert_eq!(row.calc, calc.as_str());
            prop_assert_eq!(row.sum, sum.as_str());
            prop_assert_eq!(row.discount, None);
        }

        #[test]
        fn discount_tail_is_kept_verbatim(
            sum in "[0-9]{1,7}",
            note in "[a-z0-9% ]{0,12}",
        ) {
            let line = format!("A - 1={}[{}]", sum, note);
            let row = ProductLine::parse(&line).unwrap();
            let expected = format!("[{}]", note);
            prop_assert_eq!(row.discount, Some(expected.as_str()));
        }

        #[test]
        fn marker_match_ignores_ascii_case(rest in "[a-z0-9 :=-]{0,20}") {
            let upper = format!("{}{}", SALE_MARKER.to_ascii_uppercase(), rest);
            let lower = format!("{}{}", SALE_MARKER.to_ascii_lowercase(), rest);
            prop_assert!(has_marker(&upper, SALE_MARKER));
            prop_assert!(has_marker(&lower, SALE_MARKER));
            prop_assert_eq!(strip_marker(&upper, SALE_MARKER), Some(rest.as_str()));
        }
    }
}
