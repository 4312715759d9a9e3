/// Flat-colored surface material
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Linear RGB in [0, 1]
    pub color: [f32; 3],
}

impl Material {
    pub fn new(color: [f32; 3]) -> Self {
        Self { color }
    }

    /// Build a material from a packed 0xRRGGBB color
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xff) as f32 / 255.0;
        let g = ((hex >> 8) & 0xff) as f32 / 255.0;
        let b = (hex & 0xff) as f32 / 255.0;
        Self { color: [r, g, b] }
    }
}
