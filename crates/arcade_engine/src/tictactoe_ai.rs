//! Fixed-priority tic-tac-toe opponent.
//!
//! Win, else block, else center, else a random free corner, else any random
//! free cell. This is not a full minimax and can be led into lost lines.

use arcade_core::{Cell, Grid, Mark};
use rand::Rng;
use rand::seq::SliceRandom;

/// Why the opponent picked its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    Win,
    Block,
    Center,
    Corner,
    Random,
}

/// Pick the opponent's cell. `None` only when the grid is full.
pub fn choose_cell<R: Rng + ?Sized>(grid: &Grid, mark: Mark, rng: &mut R) -> Option<Cell> {
    choose_cell_with_reason(grid, mark, rng).map(|(cell, _)| cell)
}

pub fn choose_cell_with_reason<R: Rng + ?Sized>(grid: &Grid, mark: Mark, rng: &mut R) -> Option<(Cell, Reason)> {
    if let Some(cell) = grid.completing_cell(mark) {
        return Some((cell, Reason::Win));
    }
    if let Some(cell) = grid.completing_cell(mark.opponent()) {
        return Some((cell, Reason::Block));
    }
    if grid.is_empty(Cell::CENTER) {
        return Some((Cell::CENTER, Reason::Center));
    }

    let corners: Vec<Cell> = Cell::CORNERS.iter().copied().filter(|&c| grid.is_empty(c)).collect();
    if let Some(&corner) = corners.choose(rng) {
        return Some((corner, Reason::Corner));
    }

    grid.empty_cells().choose(rng).map(|&cell| (cell, Reason::Random))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::game_rng;
    use proptest::prelude::*;

    #[test]
    fn takes_the_win_over_the_block() {
        let grid = Grid::from_rows(["XX.", "OO.", "X.."]);
        let mut rng = game_rng(Some(0));
        assert_eq!(
            choose_cell_with_reason(&grid, Mark::O, &mut rng),
            Some((Cell { row: 1, col: 2 }, Reason::Win))
        );
    }

    #[test]
    fn blocks_the_player() {
        let grid = Grid::from_rows(["X.X", ".O.", "..."]);
        let mut rng = game_rng(Some(0));
        assert_eq!(
            choose_cell_with_reason(&grid, Mark::O, &mut rng),
            Some((Cell { row: 0, col: 1 }, Reason::Block))
        );
    }

    #[test]
    fn prefers_center() {
        let grid = Grid::from_rows(["X..", "...", "..."]);
        let mut rng = game_rng(Some(0));
        assert_eq!(choose_cell(&grid, Mark::O, &mut rng), Some(Cell::CENTER));
    }

    #[test]
    fn falls_back_to_a_free_corner() {
        let grid = Grid::from_rows(["X..", ".X.", "..O"]);
        for seed in 0..20 {
            let mut rng = game_rng(Some(seed));
            let (cell, reason) = choose_cell_with_reason(&grid, Mark::O, &mut rng).unwrap();
            assert_eq!(reason, Reason::Corner);
            assert!(cell == Cell { row: 0, col: 2 } || cell == Cell { row: 2, col: 0 });
        }
    }

    #[test]
    fn last_free_corner() {
        let grid = Grid::from_rows(["XOX", "XOO", "OX."]);
        let mut rng = game_rng(Some(3));
        assert_eq!(
            choose_cell_with_reason(&grid, Mark::O, &mut rng),
            Some((Cell { row: 2, col: 2 }, Reason::Corner))
        );
    }

    #[test]
    fn edges_once_corners_are_gone() {
        let grid = Grid::from_rows(["XOX", ".X.", "OXO"]);
        for seed in 0..20 {
            let mut rng = game_rng(Some(seed));
            let (cell, reason) = choose_cell_with_reason(&grid, Mark::O, &mut rng).unwrap();
            assert_eq!(reason, Reason::Random);
            assert!(cell == Cell { row: 1, col: 0 } || cell == Cell { row: 1, col: 2 });
        }
    }

    #[test]
    fn full_grid_has_no_choice() {
        let grid = Grid::from_rows(["XOX", "XOO", "OXX"]);
        assert!(choose_cell(&grid, Mark::O, &mut game_rng(Some(0))).is_none());
    }

    #[test]
    fn win_beats_block_with_column_threat() {
        let grid = Grid::from_rows(["XO.", "X..", ".O."]);
        let (cell, reason) = choose_cell_with_reason(&grid, Mark::O, &mut game_rng(Some(0))).unwrap();
        assert_eq!((cell, reason), (Cell::CENTER, Reason::Win));
        let mut after = grid.clone();
        after.place(cell, Mark::O).unwrap();
        assert_eq!(after.winner(), Some(Mark::O));
    }

    #[test]
    fn same_seed_same_choice() {
        let grid = Grid::from_rows(["...", ".X.", "..."]);
        let a = choose_cell(&grid, Mark::O, &mut game_rng(Some(9)));
        let b = choose_cell(&grid, Mark::O, &mut game_rng(Some(9)));
        assert_eq!(a, b);
    }

    fn arb_grid() -> impl Strategy<Value = Grid> {
        let mark = prop_oneof![Just(None), Just(Some(Mark::X)), Just(Some(Mark::O))];
        prop::collection::vec(mark, 9).prop_map(|cells| {
            let mut grid = Grid::new();
            for (cell, mark) in Cell::all().zip(cells) {
                if let Some(mark) = mark {
                    let _ = grid.place(cell, mark);
                }
            }
            grid
        })
    }

    // Grids a real round can be in: nobody has three in a row yet
    fn arb_open_grid() -> impl Strategy<Value = Grid> {
        arb_grid().prop_filter("undecided", |g| g.winner().is_none())
    }

    proptest! {
        #[test]
        fn wins_whenever_possible(grid in arb_open_grid(), seed in any::<u64>()) {
            if let Some(winning) = grid.completing_cell(Mark::O) {
                let chosen = choose_cell(&grid, Mark::O, &mut game_rng(Some(seed))).unwrap();
                let mut after = grid.clone();
                after.place(chosen, Mark::O).unwrap();
                prop_assert_eq!(after.winner(), Some(Mark::O));
                prop_assert_eq!(chosen, winning);
            }
        }

        #[test]
        fn blocks_when_no_win(grid in arb_open_grid(), seed in any::<u64>()) {
            if grid.completing_cell(Mark::O).is_none() {
                if let Some(threat) = grid.completing_cell(Mark::X) {
                    let chosen = choose_cell(&grid, Mark::O, &mut game_rng(Some(seed)));
                    prop_assert_eq!(chosen, Some(threat));
                }
            }
        }

        #[test]
        fn always_picks_an_empty_cell(grid in arb_grid(), seed in any::<u64>()) {
            match choose_cell(&grid, Mark::O, &mut game_rng(Some(seed))) {
                Some(cell) => prop_assert!(grid.is_empty(cell)),
                None => prop_assert!(grid.is_full()),
            }
        }
    }
}
