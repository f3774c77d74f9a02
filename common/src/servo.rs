use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Wire value the firmware maps to the servo's home position.
pub const UNKNOWN_WIRE_VALUE: u8 = 9;

/// Sorting bins for the color classifier.
#[derive(Debug, Display, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorCategory {
    Red,
    Yellow,
    Green,
}

/// Sorting bins for the shape classifier.
#[derive(Debug, Display, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeCategory {
    Triangle,
    Square,
    Circle,
}

/// Sorting bins for the size classifier.
#[derive(Debug, Display, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeCategory {
    Small,
    Medium,
    Large,
}

impl ColorCategory {
    pub fn slot(&self) -> u8 {
        match self {
            ColorCategory::Red => 0,
            ColorCategory::Yellow => 1,
            ColorCategory::Green => 2,
        }
    }
}

impl ShapeCategory {
    pub fn slot(&self) -> u8 {
        match self {
            ShapeCategory::Triangle => 0,
            ShapeCategory::Square => 1,
            ShapeCategory::Circle => 2,
        }
    }
}

impl SizeCategory {
    pub fn slot(&self) -> u8 {
        match self {
            SizeCategory::Small => 0,
            SizeCategory::Medium => 1,
            SizeCategory::Large => 2,
        }
    }
}

/// Where the servo should route the object currently on the belt.
///
/// The firmware only knows three bins plus home, so every classifier family
/// shares the same three wire slots. The family is kept in the variant and
/// dropped only by [`ServoCode::wire_value`], which means a `Red` is never
/// equal to a `Triangle` even though both travel as `0`.
#[derive(Debug, Default, Display, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServoCode {
    Color(ColorCategory),
    Shape(ShapeCategory),
    Size(SizeCategory),
    #[default]
    Unknown,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServoCodeError {
    #[error("Unknown servo code name '{0}'")]
    UnknownName(String),
}

impl ServoCode {
    pub const RED: ServoCode = ServoCode::Color(ColorCategory::Red);
    pub const YELLOW: ServoCode = ServoCode::Color(ColorCategory::Yellow);
    pub const GREEN: ServoCode = ServoCode::Color(ColorCategory::Green);
    pub const TRIANGLE: ServoCode = ServoCode::Shape(ShapeCategory::Triangle);
    pub const SQUARE: ServoCode = ServoCode::Shape(ShapeCategory::Square);
    pub const CIRCLE: ServoCode = ServoCode::Shape(ShapeCategory::Circle);
    pub const SMALL: ServoCode = ServoCode::Size(SizeCategory::Small);
    pub const MEDIUM: ServoCode = ServoCode::Size(SizeCategory::Medium);
    pub const LARGE: ServoCode = ServoCode::Size(SizeCategory::Large);

    /// Project the code onto the single integer the firmware understands.
    pub fn wire_value(&self) -> u8 {
        match self {
            ServoCode::Color(category) => category.slot(),
            ServoCode::Shape(category) => category.slot(),
            ServoCode::Size(category) => category.slot(),
            ServoCode::Unknown => UNKNOWN_WIRE_VALUE,
        }
    }
}

impl FromStr for ServoCode {
    type Err = ServoCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = match s.trim().to_ascii_lowercase().as_str() {
            "red" => ServoCode::RED,
            "yellow" => ServoCode::YELLOW,
            "green" => ServoCode::GREEN,
            "triangle" => ServoCode::TRIANGLE,
            "square" => ServoCode::SQUARE,
            "circle" => ServoCode::CIRCLE,
            "small" => ServoCode::SMALL,
            "medium" => ServoCode::MEDIUM,
            "large" => ServoCode::LARGE,
            "unknown" => ServoCode::Unknown,
            _ => return Err(ServoCodeError::UnknownName(s.to_string())),
        };
        Ok(code)
    }
}
