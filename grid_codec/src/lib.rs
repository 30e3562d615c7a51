// lib.rs - Text form of a grid: one line per row, one symbol per cell
//
//   .  Empty      O  AliveA      o  AliveB      X  AliveC      x  AliveD

use std::fs;
use std::path::Path;

use rnumber_engine::{Cell, Grid};
use tracing::debug;

pub mod error;

pub use error::{CodecError, CodecResult};

pub const SYMBOLS: [(char, Cell); 5] = [
    ('.', Cell::Empty),
    ('O', Cell::AliveA),
    ('o', Cell::AliveB),
    ('X', Cell::AliveC),
    ('x', Cell::AliveD),
];

pub fn symbol_of(cell: Cell) -> char {
    match cell {
        Cell::Empty  => '.',
        Cell::AliveA => 'O',
        Cell::AliveB => 'o',
        Cell::AliveC => 'X',
        Cell::AliveD => 'x',
    }
}

pub fn cell_of(symbol: char) -> Option<Cell> {
    SYMBOLS.iter().find(|&&(s, _)| s == symbol).map(|&(_, cell)| cell)
}

/// Parses grid text.
///
/// Lines end at `\n`, `\r\n` or a bare `\r`. They are trimmed and blank
/// lines skipped. Every remaining line must be as long as the first, and
/// every character must be one of [`SYMBOLS`]. Line and column numbers in
/// errors are 1-based and count the raw input.
pub fn decode(text: &str) -> CodecResult<Grid> {
    let mut rows: Vec<Vec<Cell>> = Vec::new();
    let mut width = 0;

    let lines = text.lines().flat_map(|line| line.split('\r'));
    for (index, raw) in lines.enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let row = line
            .chars()
            .enumerate()
            .map(|(column, symbol)| {
                cell_of(symbol).ok_or(CodecError::IllegalSymbol { line: index + 1, column: column + 1, symbol })
            })
            .collect::<CodecResult<Vec<Cell>>>()?;

        if rows.is_empty() {
            width = row.len();
        } else if row.len() != width {
            return Err(CodecError::RaggedRow { line: index + 1, expected: width, found: row.len() });
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(CodecError::Empty);
    }
    Ok(Grid::from_rows(rows)?)
}

/// Renders one newline-terminated line per row.
pub fn encode(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.rows() * (grid.cols() + 1));
    for row in grid.iter_rows() {
        out.extend(row.iter().map(|&cell| symbol_of(cell)));
        out.push('\n');
    }
    out
}

pub fn read_grid(path: impl AsRef<Path>) -> CodecResult<Grid> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| CodecError::Io { path: path.to_path_buf(), source })?;
    let grid = decode(&text)?;
    debug!(path = %path.display(), rows = grid.rows(), cols = grid.cols(), "grid loaded");
    Ok(grid)
}

pub fn write_grid(path: impl AsRef<Path>, grid: &Grid) -> CodecResult<()> {
    let path = path.as_ref();
    fs::write(path, encode(grid)).map_err(|source| CodecError::Io { path: path.to_path_buf(), source })?;
    debug!(path = %path.display(), rows = grid.rows(), cols = grid.cols(), "grid written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn symbols_map_both_ways() {
        for (symbol, cell) in SYMBOLS {
            assert_eq!(symbol_of(cell), symbol);
            assert_eq!(cell_of(symbol), Some(cell));
        }
        assert_eq!(cell_of('#'), None);
    }

    #[test]
    fn decodes_rows_in_order() {
        let grid = decode(".Oo\nXx.\n").unwrap();
        assert_eq!((grid.rows(), grid.cols()), (2, 3));
        assert_eq!(grid.row(0), &[Cell::Empty, Cell::AliveA, Cell::AliveB]);
        assert_eq!(grid.row(1), &[Cell::AliveC, Cell::AliveD, Cell::Empty]);
    }

    #[test]
    fn trims_lines_and_skips_blank_ones() {
        let grid = decode("\n  .O  \r\n\n\to.\n   \n").unwrap();
        assert_eq!(encode(&grid), ".O\no.\n");
    }

    #[test]
    fn accepts_bare_carriage_returns() {
        let grid = decode(".O\ro.\rXx\r").unwrap();
        assert_eq!(encode(&grid), ".O\no.\nXx\n");

        match decode("..\r.#\r") {
            Err(CodecError::IllegalSymbol { line, column, .. }) => assert_eq!((line, column), (2, 2)),
            other => panic!("expected IllegalSymbol, got {other:?}"),
        }
        assert_eq!(encode(&decode(".O\r\no.\r\n").unwrap()), ".O\no.\n");
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(decode(""), Err(CodecError::Empty)));
        assert!(matches!(decode(" \n\n\t\n"), Err(CodecError::Empty)));
    }

    #[test]
    fn rejects_ragged_rows() {
        match decode("...\n..\n...\n") {
            Err(CodecError::RaggedRow { line, expected, found }) => {
                assert_eq!((line, expected, found), (2, 3, 2));
            }
            other => panic!("expected RaggedRow, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_symbols() {
        match decode("..\n.#\n") {
            Err(CodecError::IllegalSymbol { line, column, symbol }) => {
                assert_eq!((line, column, symbol), (2, 2, '#'));
            }
            other => panic!("expected IllegalSymbol, got {other:?}"),
        }
        // interior whitespace is not part of the alphabet
        assert!(matches!(decode(". O\n"), Err(CodecError::IllegalSymbol { symbol: ' ', .. })));
    }

    #[test]
    fn encode_terminates_every_line() {
        let grid = Grid::from_rows(vec![vec![Cell::AliveA], vec![Cell::AliveD]]).unwrap();
        assert_eq!(encode(&grid), "O\nx\n");
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.txt");
        let output = dir.path().join("out.txt");

        let mut file = fs::File::create(&input).unwrap();
        writeln!(file, "oOx").unwrap();
        writeln!(file, "X.o").unwrap();
        drop(file);

        let grid = read_grid(&input).unwrap();
        write_grid(&output, &grid).unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "oOx\nX.o\n");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_grid(dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, CodecError::Io { .. }));
    }
}
