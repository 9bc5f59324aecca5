//! Points and orientations
//!
//! # Termination
//!
//! `in_unit_circle` and `in_unit_sphere` use rejection sampling: they draw
//! from the enclosing square/cube until a point lands inside. The expected
//! number of attempts is about 1.27 (circle) and 1.91 (sphere), but a
//! degenerate source that keeps returning a word mapping outside the unit
//! region never terminates. Don't call them on constant test doubles.

use std::f32::consts::TAU;

use glam::{Quat, Vec2, Vec3};

use crate::rng::EntropySource;

use super::RandomGenerator;

/// Equal weights for the 4 edges of a square
const SQUARE_EDGES: [u32; 4] = [1; 4];

/// Equal weights for the 6 faces of a cube
const CUBE_FACES: [u32; 6] = [1; 6];

impl<S: EntropySource> RandomGenerator<S> {
    /// Point on the unit circle, `(sin a, cos a)` for a uniform angle `a`
    pub fn on_unit_circle(&mut self) -> Vec2 {
        let angle = self.float01() * TAU;
        Vec2::new(angle.sin(), angle.cos())
    }

    /// Point inside the unit circle (rejection sampled)
    pub fn in_unit_circle(&mut self) -> Vec2 {
        loop {
            let x = self.float_range(-1.0, 1.0);
            let y = self.float_range(-1.0, 1.0);
            let v = Vec2::new(x, y);
            if v.length_squared() <= 1.0 {
                return v;
            }
        }
    }

    /// Point inside the unit square [0, 1)²
    pub fn in_unit_square(&mut self) -> Vec2 {
        let x = self.float01();
        let y = self.float01();
        Vec2::new(x, y)
    }

    /// Point on an edge of the unit square, every edge equally likely
    pub fn on_unit_square(&mut self) -> Vec2 {
        match self.weighted_index(&SQUARE_EDGES, SQUARE_EDGES.len() as u64) {
            0 => Vec2::new(0.0, self.float01()),
            1 => Vec2::new(1.0, self.float01()),
            2 => Vec2::new(self.float01(), 0.0),
            _ => Vec2::new(self.float01(), 1.0),
        }
    }

    /// Point inside the unit sphere (rejection sampled)
    pub fn in_unit_sphere(&mut self) -> Vec3 {
        loop {
            let x = self.float_range(-1.0, 1.0);
            let y = self.float_range(-1.0, 1.0);
            let z = self.float_range(-1.0, 1.0);
            let v = Vec3::new(x, y, z);
            if v.length_squared() <= 1.0 {
                return v;
            }
        }
    }

    /// Point on the unit sphere
    ///
    /// Rotates the forward vector (`Vec3::Z`) by a uniform `quaternion()`,
    /// so it consumes exactly three draws.
    pub fn on_unit_sphere(&mut self) -> Vec3 {
        self.quaternion() * Vec3::Z
    }

    /// Point inside the unit cube [0, 1)³
    pub fn in_unit_cube(&mut self) -> Vec3 {
        let x = self.float01();
        let y = self.float01();
        let z = self.float01();
        Vec3::new(x, y, z)
    }

    /// Point on a face of the unit cube, every face equally likely
    pub fn on_unit_cube(&mut self) -> Vec3 {
        let face = self.weighted_index(&CUBE_FACES, CUBE_FACES.len() as u64);
        let fixed = if face % 2 == 0 { 0.0 } else { 1.0 };
        let a = self.float01();
        let b = self.float01();
        match face / 2 {
            0 => Vec3::new(fixed, a, b),
            1 => Vec3::new(a, fixed, b),
            _ => Vec3::new(a, b, fixed),
        }
    }

    /// Uniformly distributed rotation
    ///
    /// Shoemake's method as described by Kuffner ("Effective Sampling and
    /// Distance Metrics for 3D Rigid Body Path Planning", 2004), from three
    /// draws `s`, `θ1`, `θ2`.
    pub fn quaternion(&mut self) -> Quat {
        let s = self.float01();
        let sigma1 = (1.0 - s).sqrt();
        let sigma2 = s.sqrt();
        let theta1 = TAU * self.float01();
        let theta2 = TAU * self.float01();
        Quat::from_xyzw(
            theta2.cos() * sigma2,
            theta1.sin() * sigma1,
            theta1.cos() * sigma1,
            theta2.sin() * sigma2,
        )
    }
}
