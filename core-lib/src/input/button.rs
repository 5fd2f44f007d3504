//! Controller button definitions and name parsing
//
//! This module provides a type-safe enum for the 12 pad buttons and helpers for mapping.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error returned when a string names no button
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown button name: {0:?}")]
pub struct ParseButtonError(pub String);

/// Pad buttons, in serial read order (B, Y, Select, Start, Up, Down, Left, Right, A, X, L, R)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// Button B
    B = 0,
    /// Button Y
    Y = 1,
    /// Button Select
    Select = 2,
    /// Button Start
    Start = 3,
    /// D-Pad Up
    Up = 4,
    /// D-Pad Down
    Down = 5,
    /// D-Pad Left
    Left = 6,
    /// D-Pad Right
    Right = 7,
    /// Button A
    A = 8,
    /// Button X
    X = 9,
    /// Left shoulder
    L = 10,
    /// Right shoulder
    R = 11,
}

impl Button {
    /// Every button, in serial read order
    pub const ALL: [Self; 12] = [
        Self::B,
        Self::Y,
        Self::Select,
        Self::Start,
        Self::Up,
        Self::Down,
        Self::Left,
        Self::Right,
        Self::A,
        Self::X,
        Self::L,
        Self::R,
    ];

    /// Convert from a serial index (0-11) to a `Button`, if valid.
    pub const fn from_index(idx: usize) -> Option<Self> {
        if idx < Self::ALL.len() {
            Some(Self::ALL[idx])
        } else {
            None
        }
    }

    /// Convert from a `Button` to its serial index (0-11)
    pub const fn to_index(self) -> usize {
        self as usize
    }

    pub(crate) const fn mask(self) -> u16 {
        1 << self.to_index()
    }

    /// Lowercase name accepted by [`Button::from_str`]
    pub const fn name(self) -> &'static str {
        match self {
            Self::B => "b",
            Self::Y => "y",
            Self::Select => "select",
            Self::Start => "start",
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
            Self::A => "a",
            Self::X => "x",
            Self::L => "l",
            Self::R => "r",
        }
    }
}

impl FromStr for Button {
    type Err = ParseButtonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|button| button.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseButtonError(s.to_string()))
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
