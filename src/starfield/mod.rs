//! Procedural starfield generation.
//!
//! A fixed point cloud generated once at startup: every coordinate is an
//! independent uniform draw, scaled to a box that is wider than it is tall
//! (a flattened sky-dome look, intentionally not a sphere).

use rand::Rng;

/// Number of stars
pub const STAR_COUNT: usize = 1000;

/// Full extent of the star box on each axis
pub const SPREAD: [f32; 3] = [70.0, 50.0, 70.0];

/// Static star positions, generated once and immutable thereafter.
pub struct StarfieldPoints {
    positions: Vec<[f32; 3]>,
}

impl StarfieldPoints {
    /// Generate `count` stars inside the given box extents.
    pub fn generate<R: Rng>(rng: &mut R, count: usize, spread: [f32; 3]) -> Self {
        let mut positions = Vec::with_capacity(count);
        for _ in 0..count {
            positions.push([
                (rng.r#gen::<f32>() - 0.5) * spread[0],
                (rng.r#gen::<f32>() - 0.5) * spread[1],
                (rng.r#gen::<f32>() - 0.5) * spread[2],
            ]);
        }
        Self { positions }
    }

    /// Generate the default starfield.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self::generate(rng, STAR_COUNT, SPREAD)
    }

    /// Star positions
    #[inline]
    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    /// Number of stars
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the field is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
