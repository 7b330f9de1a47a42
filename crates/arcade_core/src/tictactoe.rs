//! 3x3 grid for tic-tac-toe.
//!
//! Cells are indexed row-major:
//!
//! ```text
//! (0,0)=0  (0,1)=1  (0,2)=2
//! (1,0)=3  (1,1)=4  (1,2)=5
//! (2,0)=6  (2,1)=7  (2,2)=8
//! ```

use std::fmt;
use crate::{RulesError, RulesResult};

/// The eight three-in-a-row lines: rows, columns, diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: u8,
    pub col: u8,
}

impl Cell {
    pub const CENTER: Cell = Cell { row: 1, col: 1 };
    pub const CORNERS: [Cell; 4] = [
        Cell { row: 0, col: 0 },
        Cell { row: 0, col: 2 },
        Cell { row: 2, col: 0 },
        Cell { row: 2, col: 2 },
    ];

    pub fn new(row: u8, col: u8) -> RulesResult<Self> {
        if row < 3 && col < 3 {
            Ok(Self { row, col })
        } else {
            Err(RulesError::OffGrid { row, col })
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        (index < 9).then(|| Self { row: (index / 3) as u8, col: (index % 3) as u8 })
    }

    pub fn index(self) -> usize {
        self.row as usize * 3 + self.col as usize
    }

    pub fn all() -> impl Iterator<Item = Cell> {
        (0..9).filter_map(Cell::from_index)
    }
}

/// How a finished grid ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridOutcome {
    Won(Mark),
    Draw,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    cells: [Option<Mark>; 9],
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a grid from three rows of `X`, `O` and anything else for empty.
    pub fn from_rows(rows: [&str; 3]) -> Self {
        let mut grid = Self::new();
        for (row, line) in rows.iter().enumerate() {
            for (col, symbol) in line.chars().take(3).enumerate() {
                grid.cells[row * 3 + col] = match symbol {
                    'X' | 'x' => Some(Mark::X),
                    'O' | 'o' => Some(Mark::O),
                    _ => None,
                };
            }
        }
        grid
    }

    pub fn get(&self, cell: Cell) -> Option<Mark> {
        self.cells[cell.index()]
    }

    pub fn is_empty(&self, cell: Cell) -> bool {
        self.get(cell).is_none()
    }

    pub fn place(&mut self, cell: Cell, mark: Mark) -> RulesResult<()> {
        let slot = &mut self.cells[cell.index()];
        if slot.is_some() {
            return Err(RulesError::CellOccupied { row: cell.row, col: cell.col });
        }
        *slot = Some(mark);
        Ok(())
    }

    pub fn empty_cells(&self) -> Vec<Cell> {
        Cell::all().filter(|&cell| self.is_empty(cell)).collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Returns Some(winner) if a line is complete.
    pub fn winner(&self) -> Option<Mark> {
        WINNING_LINES.iter().find_map(|&[a, b, c]| {
            let mark = self.cells[a]?;
            (self.cells[b] == Some(mark) && self.cells[c] == Some(mark)).then_some(mark)
        })
    }

    pub fn outcome(&self) -> Option<GridOutcome> {
        match self.winner() {
            Some(mark) => Some(GridOutcome::Won(mark)),
            None if self.is_full() => Some(GridOutcome::Draw),
            None => None,
        }
    }

    /// First empty cell (in line order) that would give `mark` three in a row.
    pub fn completing_cell(&self, mark: Mark) -> Option<Cell> {
        WINNING_LINES.iter().find_map(|line| {
            let owned = line.iter().filter(|&&i| self.cells[i] == Some(mark)).count();
            let empty = line.iter().copied().find(|&i| self.cells[i].is_none());
            match (owned, empty) {
                (2, Some(i)) => Cell::from_index(i),
                _ => None,
            }
        })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            let line: Vec<String> = (0..3)
                .map(|col| self.cells[row * 3 + col].map_or_else(|| ".".to_string(), |m| m.to_string()))
                .collect();
            write!(f, "{}", line.join(" "))?;
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
