//! Single-channel signal filters.
//!
//! A filter is fed one sample at a time together with the time step since the
//! previous sample.

pub trait Filter {
    fn name(&self) -> &str;

    fn process(&mut self, step: f64, input: f64) -> f64;

    /// Runs every sample of `input` through the filter with a fixed step.
    fn run(&mut self, step: f64, input: &[f64]) -> Vec<f64> {
        input.iter().map(|x| self.process(step, *x)).collect()
    }
}

/// Finite-difference derivative. The first sample yields 0.
#[derive(Debug, Default, Clone)]
pub struct Derive {
    prev: Option<f64>,
}

impl Derive {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Filter for Derive {
    fn name(&self) -> &str {
        "Derive filter"
    }

    fn process(&mut self, step: f64, input: f64) -> f64 {
        match self.prev.replace(input) {
            Some(prev) => (input - prev) / step,
            None => 0.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Mult {
    coeff: f64,
}

impl Mult {
    pub fn new(coeff: f64) -> Self {
        Self { coeff }
    }
}

impl Filter for Mult {
    fn name(&self) -> &str {
        "Mult filter"
    }

    fn process(&mut self, _step: f64, input: f64) -> f64 {
        input * self.coeff
    }
}

/// Rectangle-rule running integral starting at `start`.
#[derive(Debug, Clone)]
pub struct Integrate {
    value: f64,
}

impl Integrate {
    pub fn new(start: f64) -> Self {
        Self { value: start }
    }
}

impl Filter for Integrate {
    fn name(&self) -> &str {
        "Integrate filter"
    }

    fn process(&mut self, step: f64, input: f64) -> f64 {
        self.value += input * step;
        self.value
    }
}

#[derive(Debug, Clone)]
pub struct Bias {
    bias: f64,
}

impl Bias {
    pub fn new(bias: f64) -> Self {
        Self { bias }
    }
}

impl Filter for Bias {
    fn name(&self) -> &str {
        "Bias filter"
    }

    fn process(&mut self, _step: f64, input: f64) -> f64 {
        input + self.bias
    }
}

/// Feeds each sample through its filters in insertion order.
#[derive(Default)]
pub struct Chain {
    filters: Vec<Box<dyn Filter>>,
}

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<F: Filter + 'static>(mut self, f: F) -> Self {
        self.filters.push(Box::new(f));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl Filter for Chain {
    fn name(&self) -> &str {
        "Chain filter"
    }

    fn process(&mut self, step: f64, input: f64) -> f64 {
        self.filters
            .iter_mut()
            .fold(input, |x, f| f.process(step, x))
    }
}
