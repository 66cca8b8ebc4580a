//! crates/logging/src/pool.rs
//!
//! Thread-safe pool of reusable text buffers.
//!
//! Composing a line appends several short renderings into one buffer. The
//! [`BufferPool`] keeps cleared `String`s around so steady-state logging does
//! not allocate a fresh buffer per call.
//!
//! # Design
//!
//! Buffers are kept on a stack: released buffers are pushed, acquisitions pop
//! the most recently released one. The stack lives behind a [`Mutex`] that is
//! held only for the push or pop itself.
//!
//! # Capacity
//!
//! Two limits keep memory bounded:
//!
//! - a buffer whose capacity exceeds [`max_retained_capacity`](BufferPool::max_retained_capacity)
//!   is never kept, neither on release nor when found on the stack;
//! - at most [`max_buffers`](BufferPool::max_buffers) buffers are retained.
//!
//! # Poisoning
//!
//! A panic while the stack lock is held cannot leave a partially written
//! buffer behind, since buffers are cleared before they are pushed. A poisoned
//! lock is therefore recovered instead of propagated.

use std::num::NonZeroUsize;
use std::ops::{Deref, DerefMut};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};
use std::thread;

use crate::diagnostics;

/// Capacity requested for a composition buffer.
pub const DEFAULT_CAPACITY: usize = 128;

/// Largest buffer capacity the pool retains.
pub const MAX_RETAINED_CAPACITY: usize = 4096;

const MIN_RETAINED_BUFFERS: usize = 4;
const BUFFERS_PER_THREAD: usize = 4;

/// A thread-safe pool of reusable `String` buffers.
///
/// When the pool is empty, acquiring allocates. When the pool is full,
/// releasing drops the buffer.
///
/// # Examples
///
/// ```
/// use logging::BufferPool;
///
/// let pool = BufferPool::new(4);
/// {
///     let mut buffer = pool.rent(64);
///     buffer.push_str("hello");
/// }
/// assert_eq!(pool.available(), 1);
/// assert!(pool.acquire(0).is_empty());
/// ```
#[derive(Debug)]
pub struct BufferPool {
    /// Stack of cleared buffers.
    buffers: Mutex<Vec<String>>,
    /// Maximum number of buffers to retain.
    max_buffers: usize,
    /// Capacity above which a buffer is dropped instead of retained.
    max_retained_capacity: usize,
}

impl BufferPool {
    /// Creates a pool retaining at most `max_buffers` buffers of at most
    /// [`MAX_RETAINED_CAPACITY`] bytes.
    #[must_use]
    pub fn new(max_buffers: usize) -> Self {
        Self::with_max_retained_capacity(max_buffers, MAX_RETAINED_CAPACITY)
    }

    /// Creates a pool with a custom retained-capacity limit.
    ///
    /// # Arguments
    ///
    /// * `max_buffers` - Maximum number of buffers to retain.
    /// * `max_retained_capacity` - Buffers with a larger capacity are dropped.
    #[must_use]
    pub fn with_max_retained_capacity(max_buffers: usize, max_retained_capacity: usize) -> Self {
        Self {
            buffers: Mutex::new(Vec::with_capacity(max_buffers)),
            max_buffers,
            max_retained_capacity,
        }
    }

    /// Returns the process-wide pool used by composers that are not given one.
    #[must_use]
    pub fn shared() -> Arc<Self> {
        static SHARED: OnceLock<Arc<BufferPool>> = OnceLock::new();
        Arc::clone(SHARED.get_or_init(|| Arc::new(Self::default())))
    }

    /// Takes an empty buffer with at least `min_capacity` bytes of capacity.
    ///
    /// A pooled buffer is reused when available. A pooled buffer that grew
    /// beyond the retained-capacity limit is discarded and a fresh one is
    /// allocated in its place.
    #[must_use]
    pub fn acquire(&self, min_capacity: usize) -> String {
        let popped = self.lock().pop();

        match popped {
            Some(buffer) if buffer.capacity() > self.max_retained_capacity => {
                diagnostics::oversized_buffer_dropped(
                    buffer.capacity(),
                    self.max_retained_capacity,
                );
                String::with_capacity(min_capacity)
            }
            Some(mut buffer) => {
                buffer.reserve(min_capacity.saturating_sub(buffer.len()));
                buffer
            }
            None => String::with_capacity(min_capacity),
        }
    }

    /// Returns a buffer to the pool.
    ///
    /// The contents are cleared and the capacity is kept. Oversized buffers
    /// and buffers released into a full pool are dropped.
    pub fn release(&self, mut buffer: String) {
        if buffer.capacity() > self.max_retained_capacity {
            diagnostics::oversized_buffer_dropped(buffer.capacity(), self.max_retained_capacity);
            return;
        }

        buffer.clear();

        let mut buffers = self.lock();
        if buffers.len() < self.max_buffers {
            buffers.push(buffer);
        }
    }

    /// Acquires a buffer wrapped in a guard that releases it when dropped.
    ///
    /// The guard releases on every exit path, including early returns and
    /// unwinding.
    #[must_use]
    pub fn rent(&self, min_capacity: usize) -> BufferGuard<'_> {
        BufferGuard {
            buffer: Some(self.acquire(min_capacity)),
            pool: self,
        }
    }

    /// Returns the number of buffers currently in the pool.
    #[must_use]
    pub fn available(&self) -> usize {
        self.lock().len()
    }

    /// Returns the maximum number of buffers the pool will retain.
    #[must_use]
    pub const fn max_buffers(&self) -> usize {
        self.max_buffers
    }

    /// Returns the capacity above which buffers are dropped.
    #[must_use]
    pub const fn max_retained_capacity(&self) -> usize {
        self.max_retained_capacity
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.buffers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for BufferPool {
    /// Creates a pool sized from the available parallelism.
    fn default() -> Self {
        let threads = thread::available_parallelism().map_or(1, NonZeroUsize::get);
        Self::new(
            threads
                .saturating_mul(BUFFERS_PER_THREAD)
                .max(MIN_RETAINED_BUFFERS),
        )
    }
}

/// RAII guard that returns its buffer to the pool on drop.
///
/// Dereferences to the underlying `String`, so it can be appended to and read
/// like one.
#[derive(Debug)]
pub struct BufferGuard<'a> {
    /// The buffer, wrapped in Option for take-on-drop.
    buffer: Option<String>,
    /// Pool the buffer returns to.
    pool: &'a BufferPool,
}

impl Deref for BufferGuard<'_> {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        self.buffer.as_ref().expect("buffer already taken")
    }
}

impl DerefMut for BufferGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.buffer.as_mut().expect("buffer already taken")
    }
}

impl Drop for BufferGuard<'_> {
    fn drop(&mut self) {
        if let Some(buffer) = self.buffer.take() {
            self.pool.release(buffer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt::Write as _;
    use std::panic::{self, AssertUnwindSafe};
    use std::sync::Arc;

    #[test]
    fn acquire_meets_min_capacity() {
        let pool = BufferPool::new(4);
        let buffer = pool.acquire(300);
        assert!(buffer.capacity() >= 300);
        assert!(buffer.is_empty());
    }

    #[test]
    fn released_buffer_is_reused() {
        let pool = BufferPool::new(4);
        let mut buffer = pool.acquire(DEFAULT_CAPACITY);
        buffer.push_str("marker");
        let address = buffer.as_ptr();
        pool.release(buffer);

        assert_eq!(pool.available(), 1);

        let buffer = pool.acquire(DEFAULT_CAPACITY);
        assert_eq!(pool.available(), 0);
        assert_eq!(buffer.as_ptr(), address);
        assert!(buffer.is_empty());
    }

    #[test]
    fn reused_buffer_grows_to_request() {
        let pool = BufferPool::new(4);
        pool.release(String::with_capacity(16));

        let buffer = pool.acquire(1024);
        assert!(buffer.capacity() >= 1024);
        assert!(buffer.capacity() <= MAX_RETAINED_CAPACITY);
    }

    #[test]
    fn oversized_buffer_is_not_retained() {
        let pool = BufferPool::new(4);
        let buffer = pool.acquire(MAX_RETAINED_CAPACITY + 256);
        pool.release(buffer);

        assert_eq!(pool.available(), 0);
        let buffer = pool.acquire(DEFAULT_CAPACITY);
        assert!(buffer.capacity() <= MAX_RETAINED_CAPACITY);
    }

    #[test]
    fn buffer_grown_while_rented_is_dropped() {
        let pool = BufferPool::new(4);
        {
            let mut buffer = pool.rent(DEFAULT_CAPACITY);
            buffer.push_str(&"x".repeat(MAX_RETAINED_CAPACITY * 2));
        }
        assert_eq!(pool.available(), 0);
    }

    #[test]
    fn pool_count_limit() {
        let pool = BufferPool::new(2);

        let first = pool.acquire(8);
        let second = pool.acquire(8);
        let third = pool.acquire(8);

        pool.release(first);
        pool.release(second);
        pool.release(third);

        assert_eq!(pool.available(), 2);
    }

    #[test]
    fn custom_retained_capacity() {
        let pool = BufferPool::with_max_retained_capacity(4, 64);
        assert_eq!(pool.max_retained_capacity(), 64);

        pool.release(String::with_capacity(65));
        assert_eq!(pool.available(), 0);

        pool.release(String::with_capacity(32));
        assert_eq!(pool.available(), 1);
    }

    #[test]
    fn guard_releases_on_drop() {
        let pool = BufferPool::new(4);
        {
            let mut guard = pool.rent(DEFAULT_CAPACITY);
            guard.push_str("abc");
            assert_eq!(guard.as_str(), "abc");
            assert_eq!(pool.available(), 0);
        }
        assert_eq!(pool.available(), 1);
        assert!(pool.acquire(0).is_empty());
    }

    #[test]
    fn guard_releases_on_unwind() {
        let pool = BufferPool::new(4);

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let mut guard = pool.rent(DEFAULT_CAPACITY);
            guard.push_str("partial");
            panic!("composition aborted");
        }));

        assert!(result.is_err());
        assert_eq!(pool.available(), 1);
        assert!(pool.acquire(0).is_empty());
    }

    #[test]
    fn concurrent_access() {
        let pool = Arc::new(BufferPool::new(8));
        let mut handles = vec![];

        for id in 0..16 {
            let pool = Arc::clone(&pool);
            handles.push(thread::spawn(move || {
                for round in 0..100 {
                    let mut buffer = pool.rent(DEFAULT_CAPACITY);
                    assert!(buffer.is_empty());
                    write!(buffer, "{id}:{round}").expect("writing to a String cannot fail");
                }
            }));
        }

        for handle in handles {
            handle.join().expect("thread panicked");
        }

        assert!(pool.available() <= 8);
    }

    #[test]
    fn poisoned_lock_is_recovered() {
        let pool = Arc::new(BufferPool::new(4));
        pool.release(String::with_capacity(8));

        let poisoner = Arc::clone(&pool);
        let _ = thread::spawn(move || {
            let _held = poisoner.buffers.lock().expect("fresh lock");
            panic!("poison the pool");
        })
        .join();

        assert!(pool.buffers.is_poisoned());
        assert_eq!(pool.available(), 1);
        let buffer = pool.acquire(8);
        pool.release(buffer);
        assert_eq!(pool.available(), 1);
    }

    #[test]
    fn default_pool() {
        let pool = BufferPool::default();
        assert!(pool.max_buffers() >= MIN_RETAINED_BUFFERS);
        assert_eq!(pool.max_retained_capacity(), MAX_RETAINED_CAPACITY);
    }

    #[test]
    fn shared_pool_is_one_instance() {
        assert!(Arc::ptr_eq(&BufferPool::shared(), &BufferPool::shared()));
    }
}
