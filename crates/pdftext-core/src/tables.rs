//! Table-row detection for layout-aware extraction output.
//!
//! None of the available Rust PDF libraries expose table geometry, so
//! rows are recovered from the text layer instead: a line whose cells are
//! separated by tabs or runs of two-plus spaces is a candidate row, and a
//! run of consecutive candidate rows is reported as one table. PDFs whose
//! text layer does not preserve positional spacing simply yield no tables.

use once_cell::sync::Lazy;
use regex::Regex;

/// Cell separators: tabs, or runs of two or more spaces.
static CELL_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\t+| {2,}").unwrap());

/// One detected table: rows of cell values.
pub type Table = Vec<Vec<String>>;

/// Detect table-like regions in one page's text.
pub fn detect_tables(page_text: &str) -> Vec<Table> {
    let mut tables = Vec::new();
    let mut current: Table = Vec::new();
    for line in page_text.lines() {
        match split_row(line) {
            Some(cells) => current.push(cells),
            None => flush(&mut current, &mut tables),
        }
    }
    flush(&mut current, &mut tables);
    tables
}

/// Render detected tables the way the API reports them: a `Table m:`
/// header per table, one line per row, cells joined with ` | `.
pub fn render_tables(tables: &[Table]) -> String {
    let mut out = String::new();
    for (index, table) in tables.iter().enumerate() {
        out.push_str(&format!("\nTable {}:\n", index + 1));
        for row in table {
            out.push_str(&row.join(" | "));
            out.push('\n');
        }
    }
    out
}

fn split_row(line: &str) -> Option<Vec<String>> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let cells: Vec<String> = CELL_SEPARATOR
        .split(trimmed)
        .map(|cell| cell.trim().to_string())
        .filter(|cell| !cell.is_empty())
        .collect();
    (cells.len() >= 2).then_some(cells)
}

/// A lone candidate row is indistinguishable from oddly spaced prose, so
/// only runs of two or more rows count as a table.
fn flush(current: &mut Table, tables: &mut Vec<Table>) {
    if current.len() >= 2 {
        tables.push(std::mem::take(current));
    } else {
        current.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prose_yields_no_tables() {
        let text = "This is an ordinary paragraph.\nIt has single spaces only.\n";
        assert!(detect_tables(text).is_empty());
    }

    #[test]
    fn aligned_columns_become_rows() {
        let text = "Segment   Diameter   Status\n42        300mm      cured\n43        250mm      pending\n";
        let tables = detect_tables(text);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].len(), 3);
        assert_eq!(tables[0][0], vec!["Segment", "Diameter", "Status"]);
        assert_eq!(tables[0][1], vec!["42", "300mm", "cured"]);
    }

    #[test]
    fn tab_separated_cells() {
        let text = "name\tvalue\nfoo\t1\n";
        let tables = detect_tables(text);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0][1], vec!["foo", "1"]);
    }

    #[test]
    fn single_candidate_line_is_ignored() {
        let text = "A heading  with odd spacing\nfollowed by normal prose here.\n";
        assert!(detect_tables(text).is_empty());
    }

    #[test]
    fn blank_line_splits_tables() {
        let text = "a  b\nc  d\n\ne  f\ng  h\n";
        let tables = detect_tables(text);
        assert_eq!(tables.len(), 2);
    }

    #[test]
    fn renders_pipe_delimited_rows() {
        let tables = vec![vec![
            vec!["a".to_string(), "b".to_string()],
            vec!["c".to_string(), "d".to_string()],
        ]];
        assert_eq!(render_tables(&tables), "\nTable 1:\na | b\nc | d\n");
    }
}
