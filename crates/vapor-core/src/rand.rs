//! Lightweight xorshift32 PRNG — no external crate needed

use crate::types::Vec3;

pub struct SmokeRng {
    state: u32,
}

impl SmokeRng {
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Returns a float in [0, 1)
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u32() as f32) / (u32::MAX as f32)
    }

    /// Returns a float in [min, max)
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }

    /// Returns an index in [0, len)
    pub fn index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        ((self.next_f32() * len as f32) as usize).min(len - 1)
    }

    /// Returns a uniform point inside a ball of the given radius
    pub fn in_ball(&mut self, radius: f32) -> Vec3 {
        // Rejection sampling in the unit cube
        loop {
            let x = self.range(-1.0, 1.0);
            let y = self.range(-1.0, 1.0);
            let z = self.range(-1.0, 1.0);
            if x * x + y * y + z * z <= 1.0 {
                return Vec3::new(x * radius, y * radius, z * radius);
            }
        }
    }
}
