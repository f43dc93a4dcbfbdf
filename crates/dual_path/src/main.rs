use std::io::{self, Read, Write};
use std::process::ExitCode;

use dual_path::{Grid, GridResult, max_dual_path_value_rolling};

/// Printed when no pair of disjoint routes exists.
const UNREACHABLE: i64 = -1;

/// Reads `n m` and the cells from `input`, writes the best total and a
/// newline to `output`.
fn run<R: Read, W: Write>(mut input: R, mut output: W) -> GridResult<()> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    let grid = Grid::parse(&text)?;
    let value = max_dual_path_value_rolling(&grid)?;
    writeln!(output, "{}", value.unwrap_or(UNREACHABLE))?;
    Ok(())
}

fn main() -> ExitCode {
    match run(io::stdin().lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
