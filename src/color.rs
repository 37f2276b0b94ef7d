///
/// Representation of a colour
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Color {
    Rgba(f32, f32, f32, f32)
}

impl Color {
    pub const BLACK: Color      = Color::Rgba(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color      = Color::Rgba(1.0, 1.0, 1.0, 1.0);
    pub const RED: Color        = Color::Rgba(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Color      = Color::Rgba(0.0, 0.6, 0.0, 1.0);
    pub const BLUE: Color       = Color::Rgba(0.0, 0.0, 1.0, 1.0);
    pub const BROWN: Color      = Color::Rgba(0.55, 0.27, 0.07, 1.0);
    pub const CHARCOAL: Color   = Color::Rgba(0.21, 0.27, 0.31, 1.0);

    ///
    /// Returns this colour as RGBA components
    ///
    pub fn to_rgba(&self) -> (f32, f32, f32, f32) {
        match self {
            &Color::Rgba(r, g, b, a) => (r, g, b, a)
        }
    }

    ///
    /// Returns this colour as 8-bit RGB channel values, as used by raster surfaces
    ///
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        let (r, g, b, _) = self.to_rgba();

        (to_channel8(r), to_channel8(g), to_channel8(b))
    }

    ///
    /// Returns a new colour that's the same as this one except with a different alpha value
    ///
    pub fn with_alpha(&self, new_alpha: f32) -> Color {
        match self {
            &Color::Rgba(r, g, b, _) => Color::Rgba(r, g, b, new_alpha)
        }
    }
}

///
/// Maps a colour component in the range 0.0-1.0 to a 8-bit channel value
///
fn to_channel8(component: f32) -> u8 {
    let component = if component < 0.0 { 0.0 } else if component > 1.0 { 1.0 } else { component };

    (component * 255.0).round() as u8
}
