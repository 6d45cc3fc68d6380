use crate::graph::Weight;
use std::ops::{Index, IndexMut};

/// A dense `n × n` table of distances, stored row by row.
///
/// `matrix[i][j]` is the best known distance from `i` to `j`,
/// or [Weight::INFINITY] if none is known.
#[derive(Clone, PartialEq)]
pub struct Matrix<W> {
    size: usize,
    cells: Vec<W>,
}

impl<W: Weight> Matrix<W> {
    /// `ZERO` on the diagonal and `INFINITY` everywhere else.
    pub fn new(size: usize) -> Self {
        let mut res = Self {
            size,
            cells: vec![W::INFINITY; size * size],
        };
        for i in 0..size {
            res[i][i] = W::ZERO;
        }
        res
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, i: usize, j: usize) -> Option<W> {
        if i < self.size && j < self.size {
            Some(self.cells[i * self.size + j])
        } else {
            None
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[W]> + '_ {
        // `max(1)` keeps `chunks` happy on the empty matrix.
        self.cells.chunks(self.size.max(1))
    }

    /// Whether some vertex reaches itself at negative cost.
    ///
    /// Meaningful once all pairs have been relaxed.
    pub fn has_negative_cycle(&self) -> bool {
        (0..self.size).any(|i| self[i][i].is_negative())
    }
}

impl<W> Index<usize> for Matrix<W> {
    type Output = [W];

    fn index(&self, row: usize) -> &[W] {
        let start = row * self.size;
        &self.cells[start..start + self.size]
    }
}

impl<W> IndexMut<usize> for Matrix<W> {
    fn index_mut(&mut self, row: usize) -> &mut [W] {
        let start = row * self.size;
        &mut self.cells[start..start + self.size]
    }
}

impl<W: Weight> std::fmt::Debug for Matrix<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_list();
        for row in self.rows() {
            list.entry(&row);
        }
        list.finish()
    }
}
