//! crates/logging/src/composer.rs
//!
//! The composition algorithm: filter tags, concatenate their renderings into a
//! pooled buffer, aggregate severity, hand the line to a sink.

use std::sync::Arc;

use tags::{Severity, Tag};

use crate::pool::{BufferPool, DEFAULT_CAPACITY};
use crate::settings::Settings;
use crate::sink::Sink;

/// A composed line and the highest severity among its tags.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Composition {
    /// Aggregated severity.
    pub severity: Severity,
    /// Concatenated renderings.
    pub text: String,
}

/// Composes tag sequences into lines and delivers them to a [`Sink`].
///
/// The composer owns its [`Settings`]; they cannot change underneath a running
/// composition. One composer may be shared across threads, and every call
/// works in its own pooled buffer.
///
/// # Examples
///
/// ```
/// use logging::{Composer, MemorySink, Settings, presets};
/// use tags::Severity;
///
/// let composer = Composer::new(Settings::default(), MemorySink::new());
/// let settings = composer.settings().clone();
///
/// composer.log([&presets::warning(), &settings.text(" disk almost full")]);
///
/// let line = composer.sink().last().expect("one line");
/// assert_eq!(line.severity, Severity::Warning);
/// assert!(line.text.starts_with("<color=#C8C8C8FF>[DEBUG]</color>"));
/// ```
#[derive(Debug)]
pub struct Composer<S> {
    settings: Settings,
    pool: Arc<BufferPool>,
    sink: S,
}

impl<S> Composer<S> {
    /// Creates a composer drawing buffers from [`BufferPool::shared`].
    #[must_use]
    pub fn new(settings: Settings, sink: S) -> Self {
        Self::with_pool(settings, BufferPool::shared(), sink)
    }

    /// Creates a composer drawing buffers from `pool`.
    #[must_use]
    pub const fn with_pool(settings: Settings, pool: Arc<BufferPool>, sink: S) -> Self {
        Self {
            settings,
            pool,
            sink,
        }
    }

    /// The settings this composer was built with.
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The pool buffers are drawn from.
    #[must_use]
    pub const fn pool(&self) -> &Arc<BufferPool> {
        &self.pool
    }

    /// The sink lines are delivered to.
    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Unwraps the sink.
    #[must_use]
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Replaces the sink, keeping settings and pool.
    #[must_use]
    pub fn map_sink<T>(self, f: impl FnOnce(S) -> T) -> Composer<T> {
        Composer {
            settings: self.settings,
            pool: self.pool,
            sink: f(self.sink),
        }
    }

    /// Composes `tags` into a line without delivering it.
    ///
    /// Items are `&Tag` or `Option<&Tag>`; `None` stands for an absent tag and
    /// is treated like a disabled one. Returns `None` when logging is disabled
    /// or the line is suppressed.
    ///
    /// # Rules
    ///
    /// 1. With `debug_enabled == false` nothing happens.
    /// 2. With `prefix_default_tag`, the default tag is rendered first. Its
    ///    severity does not count.
    /// 3. Each enabled tag is appended in order and raises the line severity to
    ///    its own. An absent or disabled tag either suppresses the whole line
    ///    (`suppress_on_disabled_tag`) or is skipped.
    pub fn compose<'t, I>(&self, tags: I) -> Option<Composition>
    where
        I: IntoIterator,
        I::Item: Into<Option<&'t Tag>>,
    {
        if !self.settings.debug_enabled {
            return None;
        }

        let suppress = self.settings.suppress_on_disabled_tag;
        let mut buffer = self.pool.rent(DEFAULT_CAPACITY);

        if self.settings.prefix_default_tag {
            match self.settings.default_tag.as_ref().filter(|tag| tag.is_enabled()) {
                Some(prefix) => buffer.push_str(prefix.rendered()),
                None if suppress => return None,
                None => {}
            }
        }

        let mut severity = Severity::Info;
        for item in tags {
            let tag: Option<&Tag> = item.into();
            match tag.filter(|tag| tag.is_enabled()) {
                Some(tag) => {
                    buffer.push_str(tag.rendered());
                    if !severity.is_max() {
                        severity = severity.max(tag.severity());
                    }
                }
                None if suppress => return None,
                None => {}
            }
        }

        Some(Composition {
            severity,
            text: buffer.as_str().to_owned(),
        })
    }
}

impl<S: Sink> Composer<S> {
    /// Composes `tags` and delivers the line to the sink.
    ///
    /// The sink is called at most once. See [`compose`](Self::compose) for the
    /// composition rules.
    pub fn log<'t, I>(&self, tags: I)
    where
        I: IntoIterator,
        I::Item: Into<Option<&'t Tag>>,
    {
        if let Some(Composition { severity, text }) = self.compose(tags) {
            self.sink.emit(severity, text);
        }
    }
}
