use super::CellQuery;
use crate::gridsnake::{models::BoardState, types::Coord};

/// A borrowed view over the host's snake body and food cell, answering
/// occupancy queries without copying or mutating either. The view cannot
/// outlive the snapshot it reads.
#[derive(Clone, Copy, Debug)]
pub struct BoardOccupancy<'a> {
    snake: &'a [Coord],
    food:  Coord,
}

impl<'a> BoardOccupancy<'a> {
    #[must_use]
    pub const fn new(snake: &'a [Coord], food: Coord) -> Self {
        Self { snake, food }
    }
}

impl<'a> From<&'a BoardState> for BoardOccupancy<'a> {
    fn from(state: &'a BoardState) -> Self {
        Self::new(&state.snake, state.food)
    }
}

impl CellQuery for BoardOccupancy<'_> {
    fn is_snake(&self, x: i64, y: i64) -> bool {
        self.snake
            .iter()
            .any(|segment| segment.x == x && segment.y == y)
    }

    fn is_food(&self, x: i64, y: i64) -> bool {
        self.food.x == x && self.food.y == y
    }
}
