use log::{debug, trace};

use crate::error::{GridError, GridResult};
use crate::grid::Grid;

/// Upper bound on the number of DP states a single call may allocate.
pub const MAX_TABLE_STATES: usize = 1 << 26;

/// `count` unreachable states, or `InvalidInput` when that exceeds
/// [`MAX_TABLE_STATES`].
pub(crate) fn alloc_states(grid: &Grid, count: Option<usize>) -> GridResult<Vec<Option<i64>>> {
    match count {
        Some(count) if count <= MAX_TABLE_STATES => Ok(vec![None; count]),
        _ => Err(GridError::InvalidInput(format!(
            "{}x{} grid needs more than {MAX_TABLE_STATES} DP states",
            grid.rows(),
            grid.cols()
        ))),
    }
}

/// Fills one anti-diagonal layer from the previous one.
///
/// Both layers are `n * n` row-pair tables: entry `j * n + k` is the best
/// total with the travellers on rows `j < k` of anti-diagonal `step`, or
/// `None` when that pair of cells cannot be reached. Entries outside the
/// grid are left untouched.
pub(crate) fn fill_layer(
    grid: &Grid,
    step: usize,
    prev: &[Option<i64>],
    cur: &mut [Option<i64>],
) {
    let n = grid.rows();
    let m = grid.cols();
    debug_assert!(step > 0);
    debug_assert_eq!(prev.len(), n * n);
    debug_assert_eq!(cur.len(), n * n);

    // Row `j` sits at column `step - j`; it must be in `[0, m)`.
    let k_end = n.min(step + 1);
    for j in 0..k_end {
        let col_j = step - j;
        if col_j >= m {
            continue;
        }
        // `k > j` implies `step - k < col_j < m`.
        for k in (j + 1)..k_end {
            let Some(best) = best_predecessor(prev, n, j, k) else {
                continue;
            };
            cur[j * n + k] = Some(best + grid.cell(j, col_j) + grid.cell(k, step - k));
        }
    }
}

/// Best reachable state among `(j-1, k-1)`, `(j, k-1)`, `(j-1, k)`, `(j, k)`.
#[inline]
pub(crate) fn best_predecessor(
    prev: &[Option<i64>],
    n: usize,
    j: usize,
    k: usize,
) -> Option<i64> {
    predecessors(j, k)
        .into_iter()
        .flatten()
        .filter_map(|(pj, pk)| prev[pj * n + pk])
        .max()
}

#[inline]
pub(crate) fn predecessors(j: usize, k: usize) -> [Option<(usize, usize)>; 4] {
    let up_j = j.checked_sub(1);
    let up_k = k.checked_sub(1);
    [
        up_j.zip(up_k),
        up_k.map(|pk| (j, pk)),
        up_j.map(|pj| (pj, k)),
        Some((j, k)),
    ]
}

/// Every layer of the two-traveller DP, kept for inspection and route
/// recovery.
#[derive(Clone, Debug)]
pub struct DualPathTable {
    rows: usize,
    cols: usize,
    steps: usize,
    values: Vec<Option<i64>>,
}

impl DualPathTable {
    /// Fills every layer. Grids with a single row or column have no
    /// terminal state and get an empty table without any work.
    pub fn build(grid: &Grid) -> GridResult<Self> {
        let n = grid.rows();
        let m = grid.cols();
        let steps = n + m - 1;
        if n < 2 || m < 2 {
            return Ok(Self {
                rows: n,
                cols: m,
                steps,
                values: Vec::new(),
            });
        }

        let states = n.checked_mul(n).and_then(|layer| layer.checked_mul(steps));
        let mut values = alloc_states(grid, states)?;
        let layer = n * n;
        debug!("dual path table: {n}x{m} grid, {steps} layers of {layer} states");
        values[0] = Some(0);

        // The last anti-diagonal is the shared finish cell; it is never filled.
        for step in 1..steps.saturating_sub(1) {
            let (done, rest) = values.split_at_mut(step * layer);
            fill_layer(grid, step, &done[(step - 1) * layer..], &mut rest[..layer]);
        }

        Ok(Self {
            rows: n,
            cols: m,
            steps,
            values,
        })
    }

    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// State value for anti-diagonal `step` with the travellers on rows `j`
    /// and `k`. Out-of-range coordinates are unreachable.
    pub fn value_at(&self, step: usize, j: usize, k: usize) -> Option<i64> {
        let n = self.rows;
        if step >= self.steps || j >= n || k >= n {
            return None;
        }
        self.values.get((step * n + j) * n + k).copied().flatten()
    }

    /// Row pair and anti-diagonal of the state the answer is read from:
    /// the two cells next to the finish, on the diagonal just before it.
    pub fn terminal_state(&self) -> Option<(usize, usize, usize)> {
        if self.rows < 2 || self.cols < 2 {
            return None;
        }
        Some((self.rows + self.cols - 3, self.rows - 2, self.rows - 1))
    }

    pub fn terminal_value(&self) -> Option<i64> {
        let (step, j, k) = self.terminal_state()?;
        let value = self.value_at(step, j, k);
        trace!("terminal state ({step}, {j}, {k}) = {value:?}");
        value
    }
}
