//! Uniform random template selection

use std::sync::Mutex;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{Template, TemplateSet};

/// Draws templates uniformly at random from a fixed set.
///
/// The generator is owned by the selector and guarded by a mutex, so a single
/// selector can be shared between threads. Each draw is independent.
#[derive(Debug)]
pub struct TemplateSelector<R = StdRng> {
    templates: TemplateSet,
    rng: Mutex<R>,
}

impl TemplateSelector<StdRng> {
    /// Create a selector seeded from the current time
    pub fn new(templates: TemplateSet) -> Self {
        Self::with_seed(templates, time_seed())
    }

    /// Create a selector with a fixed seed for reproducible draws
    pub fn with_seed(templates: TemplateSet, seed: u64) -> Self {
        Self::with_rng(templates, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> TemplateSelector<R> {
    /// Create a selector around an arbitrary generator
    pub fn with_rng(templates: TemplateSet, rng: R) -> Self {
        Self {
            templates,
            rng: Mutex::new(rng),
        }
    }

    /// Pick one template uniformly at random
    pub fn pick(&self) -> &Template {
        self.pick_indexed().1
    }

    /// Pick one template, also returning its position in the set
    pub fn pick_indexed(&self) -> (usize, &Template) {
        let templates = self.templates.as_slice();
        let index = {
            // Generator state stays valid across a poisoned lock
            let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            rng.random_range(0..templates.len())
        };

        (index, &templates[index])
    }

    pub fn templates(&self) -> &TemplateSet {
        &self.templates
    }
}

/// Seed derived from the wall clock so successive runs differ
fn time_seed() -> u64 {
    let now = Utc::now();
    now.timestamp_nanos_opt()
        .map(|nanos| nanos as u64)
        .unwrap_or_else(|| now.timestamp_micros() as u64)
}
