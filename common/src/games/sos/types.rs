use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Letter {
    S,
    O,
}

impl Letter {
    pub fn as_char(self) -> char {
        match self {
            Letter::S => 'S',
            Letter::O => 'O',
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerColor {
    Blue,
    Red,
}

impl PlayerColor {
    pub fn opponent(self) -> PlayerColor {
        match self {
            PlayerColor::Blue => PlayerColor::Red,
            PlayerColor::Red => PlayerColor::Blue,
        }
    }
}

impl fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerColor::Blue => write!(f, "Blue"),
            PlayerColor::Red => write!(f, "Red"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    Simple,
    General,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    BlueWon,
    RedWon,
    Draw,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FirstPlayerMode {
    Blue,
    Random,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub letter: Letter,
}

impl Placement {
    pub fn new(row: usize, col: usize, letter: Letter) -> Self {
        Self { row, col, letter }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SosLine {
    pub color: PlayerColor,
    pub start: Position,
    pub end: Position,
}

impl SosLine {
    pub fn new(color: PlayerColor, start: Position, end: Position) -> Self {
        Self { color, start, end }
    }
}
