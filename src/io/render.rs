//! Text output of solution counts and solved boards

use std::io::Write;

use crate::io::error::Result;
use crate::spatial::Board;

/// Header line announcing how many solutions were found
pub fn solution_header(count: usize) -> String {
    match count {
        0 => "No solutions found".to_string(),
        1 => "1 solution found:".to_string(),
        n => format!("{n} solutions found:"),
    }
}

/// Single summary line used when boards are not printed
pub fn count_summary(count: usize) -> String {
    format!("{count} solution(s) found.")
}

/// Write the header followed by every board, each preceded by a blank line
///
/// # Errors
///
/// Returns an error if writing to `out` fails
pub fn write_solutions<W: Write>(out: &mut W, solutions: &[Board], background: char) -> Result<()> {
    writeln!(out, "{}", solution_header(solutions.len()))?;
    for board in solutions {
        writeln!(out)?;
        write!(out, "{}", board.display(background))?;
    }
    out.flush()?;
    Ok(())
}

/// Write only the solution count
///
/// # Errors
///
/// Returns an error if writing to `out` fails
pub fn write_count<W: Write>(out: &mut W, count: usize) -> Result<()> {
    writeln!(out, "{}", count_summary(count))?;
    out.flush()?;
    Ok(())
}
