//! RGBA color used by bricks, particles and draw lists

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Linear RGBA color, each channel 0-1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Random opaque color, each channel drawn independently between black and white
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::rgb(rng.random(), rng.random(), rng.random())
    }

    /// Scale RGB by `rgb` and alpha by `alpha`
    pub fn scale(self, rgb: f32, alpha: f32) -> Self {
        Self::new(self.r * rgb, self.g * rgb, self.b * rgb, self.a * alpha)
    }

    /// Fully transparent colors are skipped by the renderer
    pub fn is_visible(&self) -> bool {
        self.a > 0.0
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_scale_fades_alpha() {
        let c = Color::rgb(0.2, 0.4, 0.6).scale(1.0, 0.0);
        assert_eq!(c, Color::new(0.2, 0.4, 0.6, 0.0));
        assert!(!c.is_visible());
    }

    #[test]
    fn test_random_is_opaque_and_in_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..100 {
            let c = Color::random(&mut rng);
            assert_eq!(c.a, 1.0);
            for ch in [c.r, c.g, c.b] {
                assert!((0.0..1.0).contains(&ch));
            }
        }
    }
}
