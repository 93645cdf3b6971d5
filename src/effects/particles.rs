use fastrand::Rng;

pub const DEFAULT_PARTICLE_COUNT: usize = 50;

/// One decorative dot in the hero background.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub left_pct: f64,
    pub top_pct: f64,
    pub size_px: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl Particle {
    pub fn random(rng: &mut Rng) -> Self {
        Self {
            left_pct: rng.f64() * 100.0,
            top_pct: rng.f64() * 100.0,
            size_px: rng.f64() * 4.0 + 2.0,
            duration_s: rng.f64() * 20.0 + 10.0,
            delay_s: rng.f64() * 5.0,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "left: {:.3}%; top: {:.3}%; width: {size:.3}px; height: {size:.3}px; animation-duration: {:.3}s; animation-delay: {:.3}s;",
            self.left_pct,
            self.top_pct,
            self.duration_s,
            self.delay_s,
            size = self.size_px,
        )
    }
}

pub fn generate(count: usize, rng: &mut Rng) -> Vec<Particle> {
    (0..count).map(|_| Particle::random(rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_count() {
        let mut rng = Rng::with_seed(7);
        assert_eq!(generate(DEFAULT_PARTICLE_COUNT, &mut rng).len(), 50);
        assert!(generate(0, &mut rng).is_empty());
    }

    #[test]
    fn test_particle_ranges() {
        let mut rng = Rng::with_seed(42);
        for p in generate(500, &mut rng) {
            assert!((0.0..100.0).contains(&p.left_pct));
            assert!((0.0..100.0).contains(&p.top_pct));
            assert!((2.0..6.0).contains(&p.size_px));
            assert!((10.0..30.0).contains(&p.duration_s));
            assert!((0.0..5.0).contains(&p.delay_s));
        }
    }

    #[test]
    fn test_same_seed_same_particles() {
        let a = generate(10, &mut Rng::with_seed(3));
        let b = generate(10, &mut Rng::with_seed(3));
        assert_eq!(a, b);
    }

    #[test]
    fn test_style_is_square() {
        let p = Particle {
            left_pct: 12.5,
            top_pct: 50.0,
            size_px: 3.0,
            duration_s: 15.0,
            delay_s: 1.25,
        };
        assert_eq!(
            p.style(),
            "left: 12.500%; top: 50.000%; width: 3.000px; height: 3.000px; animation-duration: 15.000s; animation-delay: 1.250s;"
        );
    }
}
