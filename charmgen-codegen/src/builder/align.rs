//! Column alignment in the style of `text/tabwriter` with a padding of one.

/// Align rows of cells into columns.
///
/// Every cell except the last one of its row is padded with spaces to the
/// widest cell of its column plus one. The last cell of a row is never padded,
/// and a row does not widen a column it ends in. Widths count characters.
///
/// ```
/// use charmgen_codegen::builder::align_columns;
///
/// let lines = align_columns(&[
///     vec!["Port", "int", "`env:\"APP_PORT\"`"],
///     vec!["BaseURL", "string", "`env:\"APP_BASE_URL\"`"],
/// ]);
///
/// assert_eq!(lines[0], "Port    int    `env:\"APP_PORT\"`");
/// assert_eq!(lines[1], "BaseURL string `env:\"APP_BASE_URL\"`");
/// ```
pub fn align_columns<S: AsRef<str>>(rows: &[Vec<S>]) -> Vec<String> {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0usize; columns];
    for row in rows {
        // The last cell does not take part in alignment
        for (col, cell) in row.iter().enumerate().take(row.len().saturating_sub(1)) {
            widths[col] = widths[col].max(cell.as_ref().chars().count());
        }
    }

    rows.iter()
        .map(|row| {
            let mut line = String::new();
            for (col, cell) in row.iter().enumerate() {
                let cell = cell.as_ref();
                line.push_str(cell);
                if col + 1 < row.len() {
                    let pad = widths[col] - cell.chars().count() + 1;
                    line.extend(std::iter::repeat_n(' ', pad));
                }
            }
            line
        })
        .collect()
}
