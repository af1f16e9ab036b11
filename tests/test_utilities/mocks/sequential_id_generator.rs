use oscal_component_gen::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Deterministic IdGenerator handing out `id-0`, `id-1`, ...
#[derive(Default)]
pub struct SequentialIdGenerator {
    next: AtomicUsize,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issued(&self) -> usize {
        self.next.load(Ordering::SeqCst)
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate(&self) -> String {
        format!("id-{}", self.next.fetch_add(1, Ordering::SeqCst))
    }
}
