use std::fs;
use std::path::Path;

use crate::cell::Cell;
use crate::safe::Safe;

/// Parse a textual safe description.
///
/// Format: a header line `rows cols`, then `rows` lines of whitespace
/// separated cell tokens: `.` empty, `X` unconstrained pillar, `0`..`4`
/// numbered pillar. Lines beyond the grid body are ignored (safe files may
/// carry a trailing command script for the console). Lasers and beams never
/// appear in a loaded safe; they only arise from placement.
pub fn parse_safe(text: &str) -> Result<Safe, String> {
    let mut lines = text.lines();
    let header = lines
        .next()
        .ok_or_else(|| "Safe description is empty".to_string())?;

    let dims: Vec<&str> = header.split_whitespace().collect();
    if dims.len() != 2 {
        return Err(format!(
            "Invalid header '{header}': expected 'rows cols'"
        ));
    }
    let rows: usize = dims[0]
        .parse()
        .map_err(|e| format!("Invalid row count '{}': {e}", dims[0]))?;
    let cols: usize = dims[1]
        .parse()
        .map_err(|e| format!("Invalid column count '{}': {e}", dims[1]))?;
    if rows == 0 || cols == 0 {
        return Err(format!("Degenerate dimensions {rows} x {cols}"));
    }

    let mut cells: Vec<Cell> = Vec::with_capacity(rows * cols);
    for r in 0..rows {
        let line = lines
            .next()
            .ok_or_else(|| format!("Missing row {r}: expected {rows} rows"))?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != cols {
            return Err(format!(
                "Row {r} has {} cells, expected {cols}",
                tokens.len()
            ));
        }
        for (c, token) in tokens.iter().enumerate() {
            cells.push(parse_cell(token, r, c)?);
        }
    }

    Ok(Safe::from_cells(rows, cols, cells))
}

fn parse_cell(token: &str, r: usize, c: usize) -> Result<Cell, String> {
    match token {
        "." => Ok(Cell::empty()),
        "X" => Ok(Cell::pillar(None)),
        "0" | "1" | "2" | "3" | "4" => {
            // Single ASCII digit by construction
            let required = token.as_bytes()[0] - b'0';
            Ok(Cell::pillar(Some(required)))
        }
        other => Err(format!("Unknown cell token '{other}' at ({r}, {c})")),
    }
}

/// Load a safe from a file on disk (runtime).
pub fn load_safe_from_file<P: AsRef<Path>>(path: P) -> Result<Safe, String> {
    let text = fs::read_to_string(path.as_ref())
        .map_err(|e| format!("Failed to read safe file: {e}"))?;
    parse_safe(&text)
}
