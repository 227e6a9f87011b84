//! Spatial types

use std::ops::Add;

/// A 3D vector
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn to_array(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_componentwise() {
        let v = Vec3::new(1.0, 2.0, 3.0) + Vec3::new(0.5, -2.0, 1.0);
        assert_eq!(v, Vec3::new(1.5, 0.0, 4.0));
    }

    #[test]
    fn to_array_order() {
        assert_eq!(Vec3::new(1.0, -2.5, 3.0).to_array(), [1.0, -2.5, 3.0]);
    }
}
