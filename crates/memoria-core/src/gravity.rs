//! Crop-gravity inference from detected face geometry
//!
//! The largest detected face wins. Its center is snapped to a 3×3 grid of
//! named compass anchors, which downstream consumers feed to their cropper.

use serde::{Deserialize, Serialize};

use crate::models::FaceBox;

/// Named crop anchor, one of the nine compass points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GravityAnchor {
    NorthWest,
    North,
    NorthEast,
    West,
    #[default]
    Center,
    East,
    SouthWest,
    South,
    SouthEast,
}

impl GravityAnchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            GravityAnchor::NorthWest => "NorthWest",
            GravityAnchor::North => "North",
            GravityAnchor::NorthEast => "NorthEast",
            GravityAnchor::West => "West",
            GravityAnchor::Center => "Center",
            GravityAnchor::East => "East",
            GravityAnchor::SouthWest => "SouthWest",
            GravityAnchor::South => "South",
            GravityAnchor::SouthEast => "SouthEast",
        }
    }

    pub const ALL: [GravityAnchor; 9] = [
        GravityAnchor::NorthWest,
        GravityAnchor::North,
        GravityAnchor::NorthEast,
        GravityAnchor::West,
        GravityAnchor::Center,
        GravityAnchor::East,
        GravityAnchor::SouthWest,
        GravityAnchor::South,
        GravityAnchor::SouthEast,
    ];
}

impl std::fmt::Display for GravityAnchor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Round to the nearest 0.5.
fn nearest_fifth(n: f32) -> f32 {
    (n * 2.0).round() / 2.0
}

/// Derive the crop anchor from detected face boxes.
///
/// The face with the largest area is used; no faces means `Center`. The face
/// center along each axis is clamped to [0, 1] before snapping, so detector
/// noise (negative offsets, boxes running past the frame) still lands on the
/// grid.
pub fn infer_gravity(boxes: &[FaceBox]) -> GravityAnchor {
    let Some(largest) = boxes.iter().max_by(|a, b| a.area().total_cmp(&b.area())) else {
        return GravityAnchor::Center;
    };

    let x = nearest_fifth((largest.width / 2.0 + largest.left.max(0.0)).clamp(0.0, 1.0));
    let y = nearest_fifth((largest.height / 2.0 + largest.top.max(0.0)).clamp(0.0, 1.0));

    // x and y are exactly 0.0, 0.5, or 1.0 here; index in half-steps.
    match ((x * 2.0) as u8, (y * 2.0) as u8) {
        (0, 0) => GravityAnchor::NorthWest,
        (0, 1) => GravityAnchor::West,
        (0, 2) => GravityAnchor::SouthWest,
        (1, 0) => GravityAnchor::North,
        (1, 1) => GravityAnchor::Center,
        (1, 2) => GravityAnchor::South,
        (2, 0) => GravityAnchor::NorthEast,
        (2, 1) => GravityAnchor::East,
        _ => GravityAnchor::SouthEast,
    }
}
