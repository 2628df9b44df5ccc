use crate::random::Entropy;

pub const PARTICLE_COUNT: usize = 50;

const BASE_STYLE: &str = "position:absolute;width:2px;height:2px;background:var(--primary-color);border-radius:50%;pointer-events:none;opacity:0.6;animation:particle-float 10s infinite linear;";

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleSpec {
    pub left_percent: f64,
    pub top_percent: f64,
    pub delay_seconds: f64,
    pub duration_seconds: f64,
}

impl ParticleSpec {
    pub fn sample(rng: &mut impl Entropy) -> Self {
        Self {
            left_percent: rng.next_unit() * 100.0,
            top_percent: rng.next_unit() * 100.0,
            delay_seconds: rng.next_unit() * 10.0,
            duration_seconds: rng.next_unit() * 10.0 + 10.0,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "{BASE_STYLE}left:{}%;top:{}%;animation-delay:{}s;animation-duration:{}s;",
            self.left_percent, self.top_percent, self.delay_seconds, self.duration_seconds
        )
    }
}

pub fn spawn(count: usize, rng: &mut impl Entropy) -> Vec<ParticleSpec> {
    (0..count).map(|_| ParticleSpec::sample(rng)).collect()
}
