/// Relative geometry of a detected face.
///
/// All fields are fractions of the image dimensions. Detectors occasionally
/// report values outside [0, 1] (faces clipped at the frame edge); gravity
/// inference tolerates that noise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceBox {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl FaceBox {
    pub fn area(&self) -> f32 {
        self.width * self.height
    }
}
