use std::fmt;

use itertools::Itertools;

use super::Cell;

/// An immutable tuple of cells flowing through a partition.
///
/// The evaluator reads two of the cells and never changes any of them, the
/// only mutation allowed is appending a computed column at the end.
#[derive(Clone, PartialEq)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    pub fn get_cell(&self, i: usize) -> Option<&Cell> {
        self.cells.get(i)
    }

    pub fn get_cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Consume the row and return it with `cell` appended as the last column.
    pub fn append(mut self, cell: Cell) -> Self {
        self.cells.push(cell);
        self
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{{}}}", self.cells.iter().join(", "))
    }
}

impl fmt::Debug for Row {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}
