use crate::error::GridResult;
use crate::grid::Grid;
use crate::table::{DualPathTable, predecessors};

/// One optimal pair of routes, as `(row, col)` cells from start to finish.
///
/// `upper` stays on the smaller row at every intermediate step.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DualRoute {
    pub value: i64,
    pub upper: Vec<(usize, usize)>,
    pub lower: Vec<(usize, usize)>,
}

impl DualPathTable {
    /// Walks back from the terminal state, picking at each step a
    /// predecessor whose value accounts for the cells gained.
    pub fn routes(&self, grid: &Grid) -> Option<DualRoute> {
        let (last, mut j, mut k) = self.terminal_state()?;
        let value = self.value_at(last, j, k)?;

        let finish = (grid.rows() - 1, grid.cols() - 1);
        let mut upper = vec![finish];
        let mut lower = vec![finish];
        let mut current = value;
        for step in (1..=last).rev() {
            upper.push((j, step - j));
            lower.push((k, step - k));
            let before = current - grid.cell(j, step - j) - grid.cell(k, step - k);
            let (pj, pk) = predecessors(j, k)
                .into_iter()
                .flatten()
                .find(|&(pj, pk)| self.value_at(step - 1, pj, pk) == Some(before))?;
            j = pj;
            k = pk;
            current = before;
        }
        debug_assert_eq!((j, k, current), (0, 0, 0));
        upper.push((0, 0));
        lower.push((0, 0));

        upper.reverse();
        lower.reverse();
        Some(DualRoute {
            value,
            upper,
            lower,
        })
    }
}

pub fn max_dual_path_routes(grid: &Grid) -> GridResult<Option<DualRoute>> {
    Ok(DualPathTable::build(grid)?.routes(grid))
}
