/// Source of uniform samples in `[0, 1)`.
pub trait Entropy {
    fn next_unit(&mut self) -> f64;
}

#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Default)]
pub struct MathRandom;

#[cfg(target_arch = "wasm32")]
impl Entropy for MathRandom {
    fn next_unit(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

/// Replays a fixed list of samples, cycling when exhausted.
#[cfg(test)]
pub struct Scripted {
    samples: Vec<f64>,
    cursor: usize,
}

#[cfg(test)]
impl Scripted {
    pub fn new(samples: &[f64]) -> Self {
        assert!(!samples.is_empty());
        Self {
            samples: samples.to_vec(),
            cursor: 0,
        }
    }

    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

#[cfg(test)]
impl Entropy for Scripted {
    fn next_unit(&mut self) -> f64 {
        let value = self.samples[self.cursor % self.samples.len()];
        self.cursor += 1;
        value
    }
}
