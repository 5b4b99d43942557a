//! Shared helpers for integration tests.

use std::sync::Arc;

use logtree::{MemoryChannel, SharedChannel};

/// A recording channel plus the same channel as a shareable trait object.
#[allow(dead_code)]
pub fn recording_channel() -> (Arc<MemoryChannel>, SharedChannel) {
    let memory = Arc::new(MemoryChannel::new());
    let shared: SharedChannel = memory.clone();
    (memory, shared)
}

/// True when both handles point at the same channel instance.
#[allow(dead_code)]
pub fn same_channel(a: &SharedChannel, b: &SharedChannel) -> bool {
    Arc::ptr_eq(a, b)
}

/// A unique scratch path under the system temp dir.
#[allow(dead_code)]
pub fn scratch_path(stem: &str, ext: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("logtree-{}-{}.{}", stem, std::process::id(), ext))
}
