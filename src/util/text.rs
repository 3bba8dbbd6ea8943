// src/util/text.rs
use regex::Regex;

/// Replace every run of two-or-more forward slashes with a newline.
///
/// This is the authoring shorthand for line breaks: `a // b` becomes
/// `a \n b`, and longer runs (`////`) still produce a single newline.
pub fn replace_line_breaks(text: &str) -> String {
    let break_re = Regex::new(r"/{2,}").unwrap();
    break_re.replace_all(text, "\n").into_owned()
}

/// Rewrite every inline `$...$` span to `$\displaystyle ...$`.
///
/// An inline span is delimited by single dollar signs that are not part of a
/// `$$` pair on either side, with the shortest possible non-empty content,
/// which may span lines. Block delimiters (`$$...$$`, `\[...\]`) pass through
/// untouched. Unbalanced dollars are left as-is; rendering tolerance is the
/// renderer's job.
///
/// The scan works on bytes: `$` is ASCII, so it can never appear inside a
/// multi-byte UTF-8 sequence and slicing at its positions is safe.
pub fn add_display_style(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len() + 16);
    let mut last = 0;
    let mut i = 0;

    while i < bytes.len() {
        if is_single_dollar(bytes, i) {
            if let Some(end) = find_closing_dollar(bytes, i + 1) {
                out.push_str(&text[last..i]);
                out.push_str("$\\displaystyle ");
                out.push_str(&text[i + 1..end]);
                out.push('$');
                i = end + 1;
                last = i;
                continue;
            }
        }
        i += 1;
    }

    out.push_str(&text[last..]);
    out
}

/// A `$` that is neither preceded nor followed by another `$`.
fn is_single_dollar(bytes: &[u8], i: usize) -> bool {
    bytes[i] == b'$'
        && (i == 0 || bytes[i - 1] != b'$')
        && (i + 1 >= bytes.len() || bytes[i + 1] != b'$')
}

/// First single `$` at or after `from`. Starting the search one past the
/// opener makes empty spans impossible: at that position the preceding byte
/// is the opener itself.
fn find_closing_dollar(bytes: &[u8], from: usize) -> Option<usize> {
    (from..bytes.len()).find(|&j| is_single_dollar(bytes, j))
}

/// Full authoring-to-markup pipeline: line-break shorthand first, then the
/// display-style rewrite.
pub fn preprocess(text: &str) -> String {
    add_display_style(&replace_line_breaks(text))
}
