// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and environment-dependent tests.
//!
//! Re-exports the `approx` assertion macros, and serializes tests that touch
//! the config directory environment variable.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

use crate::config::paths::ENV_CONFIG_DIR;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

/// Default epsilon for f32 comparisons.
pub const F32_EPSILON: f32 = 1e-6;

// Tests run in parallel threads but share one process environment.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Locks the process environment for the lifetime of the guard.
pub fn lock_env() -> MutexGuard<'static, ()> {
    ENV_MUTEX
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// Runs `f` with the config directory pointed at a fresh temporary directory.
pub fn with_temp_config_dir<R>(f: impl FnOnce(&Path) -> R) -> R {
    let _lock = lock_env();
    let dir = tempfile::tempdir().expect("create temp config dir");
    std::env::set_var(ENV_CONFIG_DIR, dir.path());
    let result = f(dir.path());
    std::env::remove_var(ENV_CONFIG_DIR);
    result
}
