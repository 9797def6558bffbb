//! Scrolling background stars
//!
//! Stars are recycled: one that falls off the bottom wraps back to the top
//! with a new x, so the field never reallocates after initialization.

use glam::Vec2;
use rand::Rng;
use serde::Serialize;

use crate::consts::*;

/// A decorative background star
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Star {
    pub pos: Vec2,
    /// Pixels per tick before the difficulty multiplier
    pub base_speed: f32,
    /// Cosmetic
    pub size: f32,
    /// Cosmetic
    pub opacity: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Starfield {
    stars: Vec<Star>,
    width: f32,
    height: f32,
}

impl Starfield {
    /// Create `count` stars positioned above the visible area
    pub fn initialize<R: Rng>(count: usize, width: f32, height: f32, rng: &mut R) -> Self {
        let stars = (0..count)
            .map(|_| Star {
                pos: Vec2::new(rng.random_range(0.0..width), rng.random_range(-height..0.0)),
                base_speed: rng.random_range(STAR_MIN_SPEED..STAR_MAX_SPEED),
                size: rng.random_range(1.0..3.0),
                opacity: rng.random_range(0.5..1.0),
            })
            .collect();
        Self {
            stars,
            width,
            height,
        }
    }

    /// Spread every star across the visible height
    pub fn scatter<R: Rng>(&mut self, rng: &mut R) {
        for star in &mut self.stars {
            star.pos.y = rng.random_range(0.0..self.height);
        }
    }

    /// Move all stars down, wrapping those that passed the bottom edge
    pub fn tick<R: Rng>(&mut self, multiplier: f32, rng: &mut R) {
        let wrap_below = self.height + STAR_WRAP_MARGIN;
        for star in &mut self.stars {
            star.pos.y += star.base_speed * multiplier;
            if star.pos.y > wrap_below {
                star.pos.y = -STAR_WRAP_MARGIN;
                star.pos.x = rng.random_range(0.0..self.width);
            }
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_initialize_ranges() {
        let mut rng = Pcg32::seed_from_u64(7);
        let field = Starfield::initialize(STAR_COUNT, 800.0, 600.0, &mut rng);
        assert_eq!(field.len(), STAR_COUNT);
        for star in field.stars() {
            assert!((0.0..800.0).contains(&star.pos.x));
            assert!((-600.0..0.0).contains(&star.pos.y));
            assert!((STAR_MIN_SPEED..STAR_MAX_SPEED).contains(&star.base_speed));
            assert!((0.5..1.0).contains(&star.opacity));
        }
    }

    #[test]
    fn test_scatter_fills_visible_area() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut field = Starfield::initialize(50, 800.0, 600.0, &mut rng);
        field.scatter(&mut rng);
        assert!(field.stars().iter().all(|s| (0.0..600.0).contains(&s.pos.y)));
    }

    #[test]
    fn test_tick_applies_multiplier() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut field = Starfield::initialize(10, 800.0, 600.0, &mut rng);
        let before: Vec<Star> = field.stars().to_vec();
        field.tick(2.2, &mut rng);
        for (old, new) in before.iter().zip(field.stars()) {
            assert!((new.pos.y - (old.pos.y + old.base_speed * 2.2)).abs() < 0.0001);
            assert_eq!(new.pos.x, old.pos.x);
        }
    }

    #[test]
    fn test_star_wraps_to_top() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut field = Starfield::initialize(1, 800.0, 600.0, &mut rng);
        field.stars[0].pos.y = 609.5;
        field.stars[0].base_speed = 1.0;
        field.tick(1.0, &mut rng);
        assert_eq!(field.stars()[0].pos.y, -STAR_WRAP_MARGIN);
        assert!((0.0..800.0).contains(&field.stars()[0].pos.x));
        assert_eq!(field.len(), 1);
    }

    #[test]
    fn test_star_at_margin_does_not_wrap() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut field = Starfield::initialize(1, 800.0, 600.0, &mut rng);
        field.stars[0].pos.y = 609.0;
        field.stars[0].base_speed = 1.0;
        field.tick(1.0, &mut rng);
        assert_eq!(field.stars()[0].pos.y, 610.0);
    }
}
