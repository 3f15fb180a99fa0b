use common::shapes::Rectangle;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PlaceIndexError {
    #[error("place ({x}, {y}) lies outside the index bounds {bounds:?}")]
    OutOfBounds { x: i32, y: i32, bounds: Rectangle },
    #[error("index bounds {bounds:?} extend past the i32 coordinate range")]
    InvalidBounds { bounds: Rectangle },
    #[error("circle radius must be non-negative (radius: {radius})")]
    InvalidCircleRadius { radius: f64 },
}

pub type PlaceIndexResult<T> = Result<T, PlaceIndexError>;
