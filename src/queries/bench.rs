use rand::Rng;

use crate::gridsnake::{models::BoardState, types::Coord};

/// Builds a snapshot with a serpentine body of `num_segments` cells starting
/// at the origin, and food on a random cell the body does not cover.
#[must_use]
pub fn make_state(
    num_segments: i64,
    board_width: i64,
    board_height: i64,
) -> BoardState {
    assert!(
        num_segments < board_width * board_height,
        "the body must leave at least one cell free for food"
    );

    let snake: Vec<Coord> = (0..num_segments)
        .map(|i| {
            let row = i / board_width;
            let col = i % board_width;
            // alternate row direction so the body stays connected
            let x = if row % 2 == 0 {
                col
            } else {
                board_width - 1 - col
            };
            Coord { x, y: row }
        })
        .collect();

    let mut rng = rand::thread_rng();
    let food = loop {
        let candidate = Coord {
            x: rng.gen_range(0..board_width),
            y: rng.gen_range(0..board_height),
        };
        if !snake.contains(&candidate) {
            break candidate;
        }
    };

    BoardState::new(snake, food)
}
