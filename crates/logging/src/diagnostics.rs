//! crates/logging/src/diagnostics.rs
//!
//! Internal tracing events for the buffer pool, the tag registry and
//! process-wide installation.
//!
//! Every event is conditionally compiled behind the `tracing` feature flag and
//! becomes a no-op inline function when the feature is disabled. Suppressed
//! log lines never produce an event here.

use std::fmt;

/// Target name for pool events.
#[cfg(feature = "tracing")]
const POOL_TARGET: &str = "taglog::pool";

/// Target name for registry and installation events.
#[cfg(feature = "tracing")]
const REGISTRY_TARGET: &str = "taglog::registry";

// ============================================================================
// Pool
// ============================================================================

/// Traces a buffer dropped because its capacity exceeds the retention limit.
///
/// # Arguments
///
/// * `capacity` - Capacity of the dropped buffer
/// * `limit` - The pool's retained-capacity limit
#[cfg(feature = "tracing")]
#[inline]
pub fn oversized_buffer_dropped(capacity: usize, limit: usize) {
    tracing::trace!(
        target: POOL_TARGET,
        capacity = capacity,
        limit = limit,
        "pool: dropping oversized buffer"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub const fn oversized_buffer_dropped(_capacity: usize, _limit: usize) {}

// ============================================================================
// Registry
// ============================================================================

/// Traces a registration refused because the key is already taken.
#[cfg(feature = "tracing")]
#[inline]
pub fn duplicate_registration(key: &dyn fmt::Debug) {
    tracing::debug!(
        target: REGISTRY_TARGET,
        key = ?key,
        "registry: key already registered, keeping existing tag"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn duplicate_registration(_key: &dyn fmt::Debug) {}

/// Traces a lookup that fell back to the unknown tag.
#[cfg(feature = "tracing")]
#[inline]
pub fn unknown_key(key: &dyn fmt::Debug) {
    tracing::trace!(
        target: REGISTRY_TARGET,
        key = ?key,
        "registry: unknown key, using fallback tag"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn unknown_key(_key: &dyn fmt::Debug) {}

// ============================================================================
// Installation
// ============================================================================

/// Traces the outcome of [`install`](crate::install).
#[cfg(feature = "tracing")]
#[inline]
pub fn composer_installed(accepted: bool) {
    if accepted {
        tracing::debug!(target: REGISTRY_TARGET, "install: composer installed");
    } else {
        tracing::debug!(
            target: REGISTRY_TARGET,
            "install: a composer is already installed, keeping it"
        );
    }
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub const fn composer_installed(_accepted: bool) {}
