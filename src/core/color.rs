// Flat RGB colours used by content tables and the renderer

/// 8-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 100, 255);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const PURPLE: Color = Color::rgb(128, 0, 128);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);
    pub const PINK: Color = Color::rgb(255, 192, 203);
    pub const BROWN: Color = Color::rgb(139, 69, 19);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const DARK_PURPLE: Color = Color::rgb(75, 0, 130);
    pub const GOLD: Color = Color::rgb(255, 215, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Normalized RGBA for GPU vertex data
    pub fn to_rgba(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            1.0,
        ]
    }

    /// Darken every channel by a factor in `0.0..=1.0`
    pub fn shade(self, factor: f32) -> Self {
        let factor = factor.clamp(0.0, 1.0);
        let scale = |c: u8| (c as f32 * factor).round() as u8;
        Self::rgb(scale(self.r), scale(self.g), scale(self.b))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_to_rgba() {
        let [r, g, b, a] = Color::WHITE.to_rgba();
        assert_relative_eq!(r, 1.0);
        assert_relative_eq!(g, 1.0);
        assert_relative_eq!(b, 1.0);
        assert_relative_eq!(a, 1.0);

        assert_eq!(Color::BLACK.to_rgba(), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_shade() {
        assert_eq!(Color::rgb(200, 100, 50).shade(0.5), Color::rgb(100, 50, 25));
        assert_eq!(Color::WHITE.shade(2.0), Color::WHITE);
    }
}
