use std::io;
use thiserror::Error;

use crate::grid::Point;

/// Les erreurs fatales du labyrinthe.
///
/// L'absence de solution n'en fait pas partie: les recherches renvoient
/// `None` dans ce cas, et l'appelant décide quoi en faire.
#[derive(Debug, Error)]
pub enum MazeError {
    #[error("Invalid character found in the maze: \"{character}\" at {position:?}!")]
    InvalidCharacter { character: char, position: Point },

    #[error(
        "A second start character found in the maze at {0:?}! \
         Only one start character is allowed per maze!"
    )]
    DuplicateStart(Point),

    #[error("No start character found in the maze!")]
    MissingStart,

    #[error("All lines must have the same length! Line {line} has {found} characters, expected {expected}.")]
    InconsistentRowLength {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Unknown file extension for maze: {0}")]
    UnknownExtension(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}
