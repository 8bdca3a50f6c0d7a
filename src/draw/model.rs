#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgba_array(color: [u8; 4]) -> Self {
        Self::rgba(color[0], color[1], color[2], color[3])
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub width: f32,
    pub color: Color,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            width: 3.0,
            color: Color::rgba(255, 221, 0, 255),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub style: StrokeStyle,
    pub points: Vec<(f32, f32)>,
}
