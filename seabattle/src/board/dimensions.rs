// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Rectangular bounds of a grid and the coordinates used to address its tiles.
use std::fmt;

/// The coordinates of a tile in the grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Coordinate {
    /// Vertical position of the tile, counted from the top.
    pub row: usize,
    /// Horizontal position of the tile, counted from the left.
    pub col: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `row` and `col`.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(row, col)` pair.
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coordinate> for (usize, usize) {
    /// Convert the [`Coordinate`] into a `(row, col)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.col)
    }
}

impl fmt::Display for Coordinate {
    /// Formats as `[col,row]`, the order players type coordinates in.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{},{}]", self.col, self.row)
    }
}

/// Simple rectangular dimensions.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RectDimensions {
    /// Width of the board. This cooresponds to the `col` of a [`Coordinate`].
    width: usize,
    /// Height of the board. This cooresponds to the `row` of a [`Coordinate`].
    height: usize,
}

impl RectDimensions {
    /// Create new [`RectDimensions`] with the specified width and height.
    /// Panics if `width * height` exceeds `usize::max_value()` or if `width` or `height` is 0.
    pub fn new(width: usize, height: usize) -> Self {
        match Self::try_new(width, height) {
            Some(dim) => dim,
            None => {
                if width == 0 || height == 0 {
                    panic!("RectDimensions must be nonzero, got {}x{}", width, height);
                } else {
                    panic!(
                        "RectDimensions too large: {} * {} > {}",
                        width,
                        height,
                        usize::max_value()
                    );
                }
            }
        }
    }

    /// Create new [`RectDimensions`] with the specified width and height.
    /// Returns `None` if `width * height` exceeds `usize::max_value()` or if `width` or `height`
    /// is 0.
    pub fn try_new(width: usize, height: usize) -> Option<Self> {
        if width == 0 || height == 0 {
            None
        } else {
            width
                .checked_mul(height)
                .map(|_| Self { width, height })
        }
    }

    /// Get the width of these [`RectDimensions`].
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height of these [`RectDimensions`].
    pub fn height(&self) -> usize {
        self.height
    }

    /// Compute the number of tiles covered by these dimensions.
    pub fn total_size(&self) -> usize {
        self.width * self.height
    }

    /// Returns true if the coordinate lies inside these dimensions.
    pub fn contains(&self, coord: &Coordinate) -> bool {
        coord.col < self.width && coord.row < self.height
    }

    /// Convert a coordinate to a linear index within this dimension.
    /// Returns `None` if the coordinate is out of range for the dimension.
    pub fn try_linearize(&self, coord: &Coordinate) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.row * self.width + coord.col)
        } else {
            None
        }
    }

    /// Convert a coordinate to a linear index within this dimension.
    /// Panics if the coordinate is out of range for the dimension.
    pub fn linearize(&self, coord: &Coordinate) -> usize {
        match self.try_linearize(coord) {
            Some(v) => v,
            None => panic!("{:?} is out of bounds for {:?}", coord, self),
        }
    }

    /// Convert a linear index back into a [`Coordinate`].
    pub fn un_linearize(&self, idx: usize) -> Coordinate {
        Coordinate {
            row: idx / self.width,
            col: idx % self.width,
        }
    }

    /// Get an iterator over rows of this grid. Each row is an iterator over the coordinates of
    /// that row.
    pub fn iter_rows(&self) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        let width = self.width;
        (0..self.height).map(move |row| (0..width).map(move |col| Coordinate { row, col }))
    }

    /// Get an iterator over every coordinate of this grid in row-major order.
    pub fn iter_coordinates(&self) -> impl Iterator<Item = Coordinate> {
        let dim = *self;
        (0..self.total_size()).map(move |idx| dim.un_linearize(idx))
    }
}

impl Default for RectDimensions {
    /// Construct the default rectangular dimensions, a 10x10 board.
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linearize_round_trips() {
        let dim = RectDimensions::new(7, 3);
        for coord in dim.iter_coordinates() {
            assert_eq!(dim.un_linearize(dim.linearize(&coord)), coord);
        }
        assert_eq!(dim.iter_coordinates().count(), 21);
    }

    #[test]
    fn out_of_bounds_is_rejected() {
        let dim = RectDimensions::default();
        assert_eq!(dim.try_linearize(&Coordinate::new(0, 10)), None);
        assert_eq!(dim.try_linearize(&Coordinate::new(10, 0)), None);
        assert_eq!(dim.try_linearize(&Coordinate::new(9, 9)), Some(99));
    }

    #[test]
    fn zero_sized_dimensions_are_invalid() {
        assert!(RectDimensions::try_new(0, 4).is_none());
        assert!(RectDimensions::try_new(4, 0).is_none());
        assert!(RectDimensions::try_new(usize::max_value(), 2).is_none());
    }
}
