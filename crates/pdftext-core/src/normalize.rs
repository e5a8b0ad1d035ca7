use once_cell::sync::Lazy;
use regex::Regex;

/// Runs of three or more newlines, collapsed to one blank line.
static BLANK_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Expand common typographic ligatures found in PDFs.
pub fn expand_ligatures(text: &str) -> String {
    text.replace('\u{FB00}', "ff")
        .replace('\u{FB01}', "fi")
        .replace('\u{FB02}', "fl")
        .replace('\u{FB03}', "ffi")
        .replace('\u{FB04}', "ffl")
        .replace(['\u{FB05}', '\u{FB06}'], "st")
}

/// Normalize extracted text for readable, diff-stable output.
///
/// Per line, internal whitespace runs (spaces, tabs) collapse to single
/// spaces and the line is trimmed. Blank lines survive as paragraph
/// breaks, but any run of them collapses to a single one. Idempotent;
/// empty input yields the empty string.
pub fn normalize_text(text: &str) -> String {
    let collapsed: Vec<String> = text
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect();
    let joined = collapsed.join("\n");
    BLANK_RUN.replace_all(&joined, "\n\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_ligatures() {
        assert_eq!(expand_ligatures("ﬁnding ﬂow"), "finding flow");
        assert_eq!(expand_ligatures("eﬃcient oﬄine"), "efficient offline");
        assert_eq!(expand_ligatures("no ligatures here"), "no ligatures here");
    }

    #[test]
    fn collapses_internal_whitespace() {
        assert_eq!(normalize_text("x   y\tz"), "x y z");
        assert_eq!(normalize_text("  leading and trailing  "), "leading and trailing");
    }

    #[test]
    fn collapses_blank_line_runs() {
        assert_eq!(normalize_text("a\n\n\n\nb"), "a\n\nb");
        assert_eq!(normalize_text("a\n\nb"), "a\n\nb");
    }

    #[test]
    fn whitespace_only_lines_become_blank() {
        assert_eq!(normalize_text("a\n \t \n   \nb"), "a\n\nb");
    }

    #[test]
    fn idempotent() {
        let once = normalize_text("  a  b \n\n\n\n c\td \n");
        assert_eq!(normalize_text(&once), once);
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert_eq!(normalize_text(""), "");
        assert_eq!(normalize_text("   \n\n \t"), "");
    }
}
