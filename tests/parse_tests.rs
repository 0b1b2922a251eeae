use safecracker::{parse_safe, CellKind};

#[test]
fn parses_dimensions_and_cell_kinds() {
    let safe = parse_safe("2 3\n. X 2\n0 . .\n").expect("valid safe");
    assert_eq!(safe.rows(), 2);
    assert_eq!(safe.cols(), 3);
    assert_eq!(safe.cell(0, 0).unwrap().kind(), CellKind::Empty);
    assert_eq!(safe.cell(0, 1).unwrap().kind(), CellKind::Pillar(None));
    assert_eq!(safe.cell(0, 2).unwrap().kind(), CellKind::Pillar(Some(2)));
    assert_eq!(safe.cell(1, 0).unwrap().kind(), CellKind::Pillar(Some(0)));
}

#[test]
fn loaded_safes_carry_no_lasers_or_beams() {
    let safe = parse_safe("2 2\n. .\nX 1\n").expect("valid safe");
    assert_eq!(safe.laser_count(), 0);
    for r in 0..2 {
        for c in 0..2 {
            assert_eq!(safe.cell(r, c).unwrap().beams(), 0);
        }
    }
}

#[test]
fn trailing_lines_are_ignored() {
    // Safe files may carry a command script after the grid body
    let safe = parse_safe("1 1\n.\na 0 0\nv\n").expect("valid safe");
    assert_eq!(safe.rows(), 1);
    assert_eq!(safe.cols(), 1);
}

#[test]
fn rejects_empty_input() {
    assert!(parse_safe("").is_err());
}

#[test]
fn rejects_malformed_header() {
    assert!(parse_safe("3\n. . .\n").is_err());
    assert!(parse_safe("a b\n").is_err());
    assert!(parse_safe("0 4\n").is_err(), "degenerate dimensions");
}

#[test]
fn rejects_row_length_mismatch() {
    let err = parse_safe("1 3\n. .\n").expect_err("short row");
    assert!(err.contains("expected 3"), "unexpected message: {err}");
}

#[test]
fn rejects_missing_rows() {
    assert!(parse_safe("2 2\n. .\n").is_err());
}

#[test]
fn rejects_unknown_tokens() {
    let err = parse_safe("1 2\n. 5\n").expect_err("capacity above four");
    assert!(
        err.contains("Unknown cell token"),
        "unexpected message: {err}"
    );
    assert!(parse_safe("1 1\nL\n").is_err(), "lasers never appear in files");
}
