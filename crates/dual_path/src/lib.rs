//! Two travellers walk from the top-left to the bottom-right cell of a grid,
//! each moving right or down, one step at a time in lockstep. They may not
//! share any cell except the start and the finish. [`max_dual_path_value`]
//! returns the largest total of the cells they visit in between.
//!
//! Travellers on the same anti-diagonal are identified by their rows `j < k`;
//! the strict ordering both rules out collisions and removes the symmetric
//! duplicate of every state.

mod error;
mod grid;
mod rolling;
mod route;
mod table;

pub use error::{GridError, GridResult};
pub use grid::Grid;
pub use rolling::max_dual_path_value_rolling;
pub use route::{DualRoute, max_dual_path_routes};
pub use table::{DualPathTable, MAX_TABLE_STATES};

/// Best total over all pairs of disjoint routes, excluding the shared start
/// and finish cells. `None` when the grid has a single row or column, since
/// two disjoint routes cannot exist there.
///
/// Fails with [`GridError::InvalidInput`] when the table would exceed
/// [`MAX_TABLE_STATES`].
pub fn max_dual_path_value(grid: &Grid) -> GridResult<Option<i64>> {
    Ok(DualPathTable::build(grid)?.terminal_value())
}

#[cfg(test)]
mod tests {
    use rand::Rng;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::{
        Grid, GridError, max_dual_path_routes, max_dual_path_value, max_dual_path_value_rolling,
    };

    fn all_routes(rows: usize, cols: usize) -> Vec<Vec<(usize, usize)>> {
        fn walk(
            rows: usize,
            cols: usize,
            path: &mut Vec<(usize, usize)>,
            out: &mut Vec<Vec<(usize, usize)>>,
        ) {
            let (r, c) = *path.last().unwrap();
            if (r, c) == (rows - 1, cols - 1) {
                out.push(path.clone());
                return;
            }
            if c + 1 < cols {
                path.push((r, c + 1));
                walk(rows, cols, path, out);
                path.pop();
            }
            if r + 1 < rows {
                path.push((r + 1, c));
                walk(rows, cols, path, out);
                path.pop();
            }
        }

        let mut out = Vec::new();
        walk(rows, cols, &mut vec![(0, 0)], &mut out);
        out
    }

    fn cell(grid: &Grid, (row, col): (usize, usize)) -> i64 {
        i64::from(grid.get(row, col).unwrap())
    }

    fn brute_force(grid: &Grid) -> Option<i64> {
        let routes = all_routes(grid.rows(), grid.cols());
        let mut best = None;
        for a in &routes {
            for b in &routes {
                let len = a.len();
                if (1..len - 1).any(|t| a[t] == b[t]) {
                    continue;
                }
                let total = (1..len - 1)
                    .map(|t| cell(grid, a[t]) + cell(grid, b[t]))
                    .sum::<i64>();
                if len > 2 && best.is_none_or(|best| total > best) {
                    best = Some(total);
                }
            }
        }
        best
    }

    /// Direct rendition of the `-1`-sentinel formulation, 1-based, with the
    /// grid zero-padded past its right edge. Only valid for non-negative
    /// cells, where the sentinel cannot collide with a real total.
    fn sentinel_formulation(grid: &Grid) -> i64 {
        let (n, m) = (grid.rows(), grid.cols());
        let width = n + m + 2;
        let mut a = vec![vec![0_i64; width]; n + 2];
        for i in 1..=n {
            for j in 1..=m {
                a[i][j] = cell(grid, (i - 1, j - 1));
            }
        }

        let mut f = vec![vec![vec![-1_i64; n + 2]; n + 2]; n + m + 2];
        f[2][1][1] = 0;
        for i in 3..n + m {
            for j in 1..n {
                for k in (j + 1)..=n {
                    let mut best = f[i][j][k];
                    best = best.max(f[i - 1][j - 1][k - 1]);
                    best = best.max(f[i - 1][j][k - 1]);
                    best = best.max(f[i - 1][j - 1][k]);
                    best = best.max(f[i - 1][j][k]);
                    if best == -1 {
                        continue;
                    }
                    f[i][j][k] = best + a[j][i - j] + a[k][i - k];
                }
            }
        }
        f[n + m - 1][n - 1][n]
    }

    fn random_grid(rng: &mut StdRng, rows: usize, cols: usize, lo: i32, hi: i32) -> Grid {
        let cells = (0..rows * cols)
            .map(|_| rng.random_range(lo..=hi))
            .collect::<Vec<_>>();
        Grid::new(rows, cols, cells).unwrap()
    }

    #[test]
    fn passing_notes_sample() {
        let grid = Grid::parse("3 3\n0 3 9\n2 8 5\n5 7 0\n").unwrap();
        assert_eq!(max_dual_path_value(&grid).unwrap(), Some(34));
        assert_eq!(max_dual_path_value_rolling(&grid).unwrap(), Some(34));
    }

    #[test]
    fn uniform_two_by_two() {
        for v in [0_i32, 1, 7, -3] {
            let grid = Grid::from_rows(&[[v, v], [v, v]]).unwrap();
            assert_eq!(max_dual_path_value(&grid).unwrap(), Some(2 * i64::from(v)));
        }
    }

    #[test]
    fn single_row_or_column_is_unreachable() {
        for (rows, cols) in [(1, 1), (1, 5), (5, 1)] {
            let grid = Grid::new(rows, cols, vec![4; rows * cols]).unwrap();
            assert_eq!(max_dual_path_value(&grid).unwrap(), None);
            assert_eq!(max_dual_path_value_rolling(&grid).unwrap(), None);
            assert_eq!(max_dual_path_routes(&grid).unwrap(), None);
        }
    }

    #[test]
    fn tall_single_column_needs_no_table() {
        let rows = 1 << 21;
        let grid = Grid::new(rows, 1, vec![0; rows]).unwrap();
        assert_eq!(max_dual_path_value(&grid).unwrap(), None);
        assert_eq!(max_dual_path_value_rolling(&grid).unwrap(), None);
        assert_eq!(max_dual_path_routes(&grid).unwrap(), None);

        let wide = Grid::new(1, rows, vec![0; rows]).unwrap();
        assert_eq!(max_dual_path_value(&wide).unwrap(), None);
    }

    #[test]
    fn oversized_tables_are_rejected() {
        let rows = 1 << 21;
        let grid = Grid::new(rows, 2, vec![0; rows * 2]).unwrap();
        for result in [
            max_dual_path_value(&grid),
            max_dual_path_value_rolling(&grid),
            max_dual_path_routes(&grid).map(|route| route.map(|route| route.value)),
        ] {
            assert!(matches!(result, Err(GridError::InvalidInput(_))));
        }

        // Fits two layers, but not every layer.
        let grid = Grid::new(500, 2, vec![1; 1_000]).unwrap();
        assert!(matches!(
            max_dual_path_value(&grid),
            Err(GridError::InvalidInput(_))
        ));
        assert_eq!(max_dual_path_value_rolling(&grid).unwrap(), Some(2 * 500 - 2));
    }

    #[test]
    fn extreme_cells_do_not_overflow() {
        let grid = Grid::from_rows(&[[0, i32::MAX], [i32::MAX, 0]]).unwrap();
        let max = i64::from(i32::MAX);
        assert_eq!(max_dual_path_value(&grid).unwrap(), Some(2 * max));

        let grid = Grid::new(6, 7, vec![i32::MAX; 42]).unwrap();
        assert_eq!(max_dual_path_value_rolling(&grid).unwrap(), Some(2 * 10 * max));
        let grid = Grid::new(6, 7, vec![i32::MIN; 42]).unwrap();
        assert_eq!(max_dual_path_value(&grid).unwrap(), Some(2 * 10 * i64::from(i32::MIN)));

        let err = Grid::parse("2 2 0 9223372036854775807 9223372036854775807 0").unwrap_err();
        assert!(matches!(err, GridError::InvalidInput(_)));
    }

    #[test]
    fn start_and_finish_are_not_counted() {
        let grid = Grid::from_rows(&[[100_i32, 1, 1], [1, 1, 1], [1, 1, 100]]).unwrap();
        assert_eq!(max_dual_path_value(&grid).unwrap(), Some(6));
    }

    #[test]
    fn negative_cells_are_not_confused_with_unreachable() {
        let grid = Grid::from_rows(&[[0_i32, -1], [-1, 0]]).unwrap();
        assert_eq!(max_dual_path_value(&grid).unwrap(), Some(-2));
        let grid = Grid::from_rows(&[[0_i32, -5, -5], [-5, -5, -5], [-5, -5, 0]]).unwrap();
        assert_eq!(max_dual_path_value(&grid).unwrap(), Some(-30));
    }

    #[test]
    fn random_cases_match_bruteforce() {
        let mut rng = StdRng::seed_from_u64(0xD0A1_0000);

        for rows in 1..=4 {
            for cols in 1..=4 {
                for _ in 0..6 {
                    let grid = random_grid(&mut rng, rows, cols, -5, 9);
                    let expected = brute_force(&grid);
                    assert_eq!(max_dual_path_value(&grid).unwrap(), expected, "grid={grid:?}");
                    assert_eq!(
                        max_dual_path_value_rolling(&grid).unwrap(),
                        expected,
                        "grid={grid:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn random_cases_match_sentinel_formulation() {
        let mut rng = StdRng::seed_from_u64(0x5E27_1E10);

        for rows in 1..=9 {
            for cols in 1..=9 {
                let grid = random_grid(&mut rng, rows, cols, 0, 50);
                let expected = sentinel_formulation(&grid);
                let got = max_dual_path_value(&grid).unwrap().unwrap_or(-1);
                assert_eq!(got, expected, "rows={rows} cols={cols}");
            }
        }
    }

    #[test]
    fn recovered_routes_are_disjoint_and_optimal() {
        let mut rng = StdRng::seed_from_u64(0x2047_E5);

        for _ in 0..40 {
            let rows = rng.random_range(2..=7);
            let cols = rng.random_range(2..=7);
            let grid = random_grid(&mut rng, rows, cols, -20, 20);
            let route = max_dual_path_routes(&grid).unwrap().unwrap();

            assert_eq!(Some(route.value), max_dual_path_value(&grid).unwrap());
            assert_eq!(route.upper.len(), rows + cols - 1);
            assert_eq!(route.lower.len(), rows + cols - 1);
            assert_eq!(route.upper[0], (0, 0));
            assert_eq!(*route.lower.last().unwrap(), (rows - 1, cols - 1));

            let mut total = 0;
            for t in 1..route.upper.len() - 1 {
                let (ur, uc) = route.upper[t];
                let (lr, lc) = route.lower[t];
                assert!(ur < lr, "t={t}");
                assert_eq!(ur + uc, t);
                assert_eq!(lr + lc, t);
                total += cell(&grid, (ur, uc)) + cell(&grid, (lr, lc));
            }
            assert_eq!(total, route.value);

            for path in [&route.upper, &route.lower] {
                for pair in path.windows(2) {
                    let (r0, c0) = pair[0];
                    let (r1, c1) = pair[1];
                    assert!((r1, c1) == (r0 + 1, c0) || (r1, c1) == (r0, c0 + 1));
                }
            }
        }
    }
}
