//! Fill colors for 2D rendering

/// A packed 0xRRGGBB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u32);

impl Color {
    /// CSS hex form for canvas fill styles
    pub fn to_css(self) -> String {
        format!("#{:06x}", self.0 & 0xff_ffff)
    }
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const GROUND: Color = Color(0x33aa33);
    pub const OBSTACLE: Color = Color(0x964b00);
    pub const PLAYER: Color = Color(0xee3333);
}
