use log::debug;

use crate::error::GridResult;
use crate::grid::Grid;
use crate::table::{alloc_states, fill_layer};

/// Same answer as [`crate::max_dual_path_value`] keeping two layers only.
pub fn max_dual_path_value_rolling(grid: &Grid) -> GridResult<Option<i64>> {
    let n = grid.rows();
    let m = grid.cols();
    if n < 2 || m < 2 {
        return Ok(None);
    }
    debug!("rolling dual path: {n}x{m} grid");

    let mut prev = alloc_states(grid, n.checked_mul(n))?;
    let mut cur = prev.clone();
    prev[0] = Some(0);

    let last = n + m - 3;
    for step in 1..=last {
        cur.fill(None);
        fill_layer(grid, step, &prev, &mut cur);
        std::mem::swap(&mut prev, &mut cur);
    }
    Ok(prev[(n - 2) * n + (n - 1)])
}
