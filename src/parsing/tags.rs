//! Parser for stringified tag list literals.
//!
//! The metadata table stores tags as a Python-style list literal such as
//! `"['Array', 'Hash Table']"`. Because rows are split on commas, a literal
//! with k tags arrives as k fields: the first carries the opening `[` (and
//! any surrounding quote), the last carries the closing `]`. This parser
//! strips that decoration field by field and returns the clean tags.

/// Quote characters that may wrap a whole field or a single tag
const QUOTES: [char; 2] = ['\'', '"'];

/// Parse the fields of one tag list literal into clean tag strings.
///
/// Empty tags (including the single field of an empty list `[]`) are
/// dropped. Order and duplicates are preserved.
#[must_use]
pub fn parse_tag_fields<S: AsRef<str>>(fields: &[S]) -> Vec<String> {
    let last = fields.len().saturating_sub(1);

    fields
        .iter()
        .enumerate()
        .filter_map(|(i, field)| {
            let mut tag = field.as_ref().trim();
            if i == 0 {
                tag = strip_list_open(tag);
            }
            if i == last {
                tag = strip_list_close(tag);
            }
            let tag = strip_quotes(tag);
            (!tag.is_empty()).then(|| tag.to_string())
        })
        .collect()
}

/// Remove a leading field quote, the opening bracket, and whitespace after it
fn strip_list_open(field: &str) -> &str {
    let field = field.trim_start_matches('"').trim_start();
    field.strip_prefix('[').unwrap_or(field).trim_start()
}

/// Remove a trailing field quote, the closing bracket, and whitespace before it
fn strip_list_close(field: &str) -> &str {
    let field = field.trim_end_matches('"').trim_end();
    field.strip_suffix(']').unwrap_or(field).trim_end()
}

/// Remove one layer of per-tag quoting
fn strip_quotes(tag: &str) -> &str {
    let tag = tag.trim();
    let tag = tag.strip_prefix(QUOTES).unwrap_or(tag);
    let tag = tag.strip_suffix(QUOTES).unwrap_or(tag);
    tag.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quoted_list_split_on_commas() {
        let fields = ["\"['Array'", " 'Hash Table']\""];
        assert_eq!(parse_tag_fields(&fields), vec!["Array", "Hash Table"]);
    }

    #[test]
    fn test_parse_unquoted_list() {
        let fields = ["['Array'", " 'Two Pointers'", " 'Sorting']"];
        assert_eq!(
            parse_tag_fields(&fields),
            vec!["Array", "Two Pointers", "Sorting"]
        );
    }

    #[test]
    fn test_parse_single_tag() {
        assert_eq!(parse_tag_fields(&["['Math']"]), vec!["Math"]);
        assert_eq!(parse_tag_fields(&["\"[ 'Math' ]\""]), vec!["Math"]);
    }

    #[test]
    fn test_parse_empty_list() {
        assert!(parse_tag_fields(&["[]"]).is_empty());
        assert!(parse_tag_fields(&["\"[]\""]).is_empty());
        assert!(parse_tag_fields::<&str>(&[]).is_empty());
    }

    #[test]
    fn test_parse_drops_empty_tags() {
        let fields = ["['Array'", " ''", " 'Graph']"];
        assert_eq!(parse_tag_fields(&fields), vec!["Array", "Graph"]);
    }

    #[test]
    fn test_parse_keeps_duplicates_and_order() {
        let fields = ["['Graph'", " 'Array'", " 'Graph']"];
        assert_eq!(parse_tag_fields(&fields), vec!["Graph", "Array", "Graph"]);
    }
}
