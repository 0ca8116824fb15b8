//! Row splitting for the comma-delimited inputs.
//!
//! The inputs are split naively on the delimiter with no quote handling; the
//! tag list literal in the metadata table relies on that and is reassembled
//! by [`crate::parsing::tags`].

/// Field delimiter used by every input table
pub const DELIMITER: char = ',';

/// Split text into rows of fields.
///
/// Empty lines are skipped (including the one produced by a trailing newline)
/// and a trailing `\r` is removed from every line.
#[must_use]
pub fn split_rows(text: &str, delimiter: char) -> Vec<Vec<String>> {
    text.lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .map(|line| split_fields(line, delimiter))
        .collect()
}

/// Split a single line into fields
#[must_use]
pub fn split_fields(line: &str, delimiter: char) -> Vec<String> {
    line.split(delimiter).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_rows() {
        let text = ",a,b\na,1.0,0.5\nb,0.5,1.0\n";
        let rows = split_rows(text, DELIMITER);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], vec!["", "a", "b"]);
        assert_eq!(rows[2], vec!["b", "0.5", "1.0"]);
    }

    #[test]
    fn test_split_rows_crlf_and_blank_lines() {
        let text = "h1,h2\r\n\r\nx,y\r\n\n";
        let rows = split_rows(text, DELIMITER);
        assert_eq!(rows, vec![vec!["h1", "h2"], vec!["x", "y"]]);
    }

    #[test]
    fn test_split_rows_keeps_empty_fields() {
        let rows = split_rows("a,,c\n", DELIMITER);
        assert_eq!(rows[0], vec!["a", "", "c"]);
    }

    #[test]
    fn test_split_rows_empty_text() {
        assert!(split_rows("", DELIMITER).is_empty());
        assert!(split_rows("\n\n", DELIMITER).is_empty());
    }
}
