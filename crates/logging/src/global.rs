//! crates/logging/src/global.rs
//!
//! Process-wide composer for hosts that log from code with no composer in
//! reach.
//!
//! The installed composer is set once and never replaced. Its settings are
//! immutable like any other composer's, so there is no global mutable
//! configuration.

use std::sync::OnceLock;

use tags::Tag;
use thiserror::Error;

use crate::composer::Composer;
use crate::diagnostics;
use crate::sink::Sink;

/// The type of the installed composer.
pub type GlobalComposer = Composer<Box<dyn Sink>>;

static INSTALLED: OnceLock<GlobalComposer> = OnceLock::new();

/// Returned by [`install`] when a composer is already installed.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("a composer is already installed for this process")]
pub struct AlreadyInstalled;

/// Installs `composer` as the process-wide composer.
///
/// # Errors
///
/// Returns [`AlreadyInstalled`] if a composer was installed earlier; the
/// earlier one stays in place and `composer` is dropped.
pub fn install<S>(composer: Composer<S>) -> Result<(), AlreadyInstalled>
where
    S: Sink + 'static,
{
    let boxed = composer.map_sink(|sink| Box::new(sink) as Box<dyn Sink>);
    let result = INSTALLED.set(boxed).map_err(|_| AlreadyInstalled);
    diagnostics::composer_installed(result.is_ok());
    result
}

/// Returns the installed composer, if any.
#[must_use]
pub fn installed() -> Option<&'static GlobalComposer> {
    INSTALLED.get()
}

/// Logs `tags` through the installed composer.
///
/// Does nothing when no composer is installed.
pub fn log<'t, I>(tags: I)
where
    I: IntoIterator,
    I::Item: Into<Option<&'t Tag>>,
{
    if let Some(composer) = INSTALLED.get() {
        composer.log(tags);
    }
}

/// Logs a slice of tags through the installed composer.
///
/// Backs the [`taglog!`](crate::taglog) macro.
pub fn log_slice(tags: &[&Tag]) {
    log(tags.iter().copied());
}

/// Logs tags through the process-wide composer.
///
/// Each argument is an expression evaluating to a [`Tag`]; it is borrowed for
/// the duration of the call.
///
/// ```
/// use logging::{Composer, MemorySink, Settings, install, presets, taglog};
/// use std::sync::Arc;
///
/// let sink = Arc::new(MemorySink::new());
/// install(Composer::new(Settings::default(), Arc::clone(&sink))).expect("first install");
///
/// let settings = Settings::default();
/// taglog!(presets::ok(), settings.text(" cache warmed"));
///
/// assert_eq!(sink.len(), 1);
/// ```
#[macro_export]
macro_rules! taglog {
    ($($tag:expr),* $(,)?) => {
        $crate::log_slice(&[$(&$tag),*])
    };
}
