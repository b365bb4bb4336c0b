//! CSV line tokenizer for generator output
//!
//! Generator output is not trusted to be well-formed CSV, so this tokenizer
//! is deliberately hand-rolled: a single left-to-right scan that honors
//! quoted spans and doubled-quote escapes, and returns whatever it has
//! accumulated on malformed input rather than erroring.

/// Split one line of text into its ordered field values
///
/// Rules:
/// - Fields are separated by `,` outside of quoted spans.
/// - A field may be wrapped in `"…"`; inside such a span a doubled quote
///   `""` is one literal quote and commas lose their separator meaning.
/// - Each field is trimmed after unquoting.
/// - Malformed quoting (e.g., an unterminated span) is not an error; the
///   scan terminates at end of line with whatever it has collected.
pub fn tokenize_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    // Escaped quote: emit one literal quote, consume both
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }

    fields.push(current.trim().to_string());
    fields
}

/// Escape a value for CSV output when it needs quoting
///
/// Quotes the value if it contains a comma, a quote, or a newline, doubling
/// internal quotes. Values that need no quoting pass through unchanged.
pub fn to_csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Quote a value for CSV output unconditionally, doubling internal quotes
///
/// Used for free-text columns that the plain CSV export always wraps in
/// quotes regardless of content.
pub fn to_quoted_csv_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}
