//! Element identifier generation.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use crate::error::WaveResult;

/// Source of `id` values for elements rendered without one.
///
/// Implementations must be safe to call from concurrent renders. A failed
/// call never aborts a render; the element is emitted without an id.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> WaveResult<String>;
}

/// Time-ordered UUID v7 identifiers. The default generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV7Ids;

impl IdGenerator for UuidV7Ids {
    fn generate(&self) -> WaveResult<String> {
        Ok(Uuid::now_v7().to_string())
    }
}

/// Deterministic `{prefix}{n}` identifiers, counting from 1.
///
/// Useful for snapshot tests and reproducible output.
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("wave-")
    }
}

impl IdGenerator for SequentialIds {
    fn generate(&self) -> WaveResult<String> {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        Ok(format!("{}{}", self.prefix, n))
    }
}
