use std::{error::Error, fmt};

use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::gridsnake::types::Coord;

/// Malformed host records are rejected outright instead of decoding to a
/// default coordinate and answering a silently wrong boolean later.
#[derive(Debug)]
pub enum StateError {
    InvalidArgument(String),
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidArgument(reason) => {
                write!(f, "invalid board record: {reason}")
            }
        }
    }
}

impl Error for StateError {}

/// One consistent per-tick snapshot of the externally owned game state:
/// the snake's body segments and the current food cell. The host creates,
/// resizes, and repositions both; this crate only reads them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    pub snake: Vec<Coord>,
    pub food:  Coord,
}

impl BoardState {
    #[must_use]
    pub const fn new(snake: Vec<Coord>, food: Coord) -> Self {
        Self { snake, food }
    }

    /// Decodes a snapshot from the JSON record shape the host holds:
    /// `{"snake": [{"x":2,"y":3}, ...], "food": {"x":7,"y":1}}`.
    ///
    /// # Errors
    ///
    /// Any malformed record (missing coordinate fields, non-integer values,
    /// trailing garbage) comes back as [`StateError::InvalidArgument`].
    pub fn from_json(raw: &str) -> Result<Self, StateError> {
        let state = serde_json::from_str::<Self>(raw)
            .map_err(|err| StateError::InvalidArgument(err.to_string()))?;

        debug!(
            "decoded board snapshot: snake [{}], food {}",
            state.snake.iter().join(", "),
            state.food,
        );

        Ok(state)
    }
}
