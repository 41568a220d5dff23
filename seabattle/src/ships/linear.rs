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
use crate::{
    board::{Coordinate, RectDimensions},
    ships::Orientation,
};

/// Projection of a shape onto the grid from a particular origin. This is a simple typedef
/// of a `Vec`; the first entry is always the origin.
pub type ShapeProjection = Vec<Coordinate>;

/// A linear ship shape, with a given length.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Line(usize);

impl Line {
    /// Construct a linear ship with the specified length. Panics if len is 0.
    pub fn new(len: usize) -> Self {
        assert!(len > 0);
        Line(len)
    }

    /// Get the length of this ship.
    pub fn len(&self) -> usize {
        self.0
    }

    /// Lay this line onto `dim` starting at `origin` and extending along `orientation`.
    /// Returns `None` if any segment would fall outside the grid. Does not in any way
    /// account for whether cells are already occupied or not.
    pub fn project(
        &self,
        origin: Coordinate,
        orientation: Orientation,
        dim: &RectDimensions,
    ) -> Option<ShapeProjection> {
        let (drow, dcol) = orientation.step();
        let mut route = Vec::with_capacity(self.len());
        for i in 0..self.len() {
            let coord = Coordinate::new(
                origin.row.checked_add(drow * i)?,
                origin.col.checked_add(dcol * i)?,
            );
            if !dim.contains(&coord) {
                return None;
            }
            route.push(coord);
        }
        Some(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_projection_walks_columns() {
        let dim = RectDimensions::default();
        let route = Line::new(3)
            .project(Coordinate::new(4, 2), Orientation::Horizontal, &dim)
            .unwrap();
        assert_eq!(
            route,
            vec![
                Coordinate::new(4, 2),
                Coordinate::new(4, 3),
                Coordinate::new(4, 4)
            ]
        );
    }

    #[test]
    fn vertical_projection_walks_rows() {
        let dim = RectDimensions::default();
        let route = Line::new(2)
            .project(Coordinate::new(8, 0), Orientation::Vertical, &dim)
            .unwrap();
        assert_eq!(route, vec![Coordinate::new(8, 0), Coordinate::new(9, 0)]);
    }

    #[test]
    fn projection_off_the_edge_fails() {
        let dim = RectDimensions::default();
        let line = Line::new(4);
        assert!(line
            .project(Coordinate::new(0, 8), Orientation::Horizontal, &dim)
            .is_none());
        assert!(line
            .project(Coordinate::new(7, 0), Orientation::Vertical, &dim)
            .is_none());
        assert!(line
            .project(Coordinate::new(usize::max_value(), 0), Orientation::Vertical, &dim)
            .is_none());
    }
}
