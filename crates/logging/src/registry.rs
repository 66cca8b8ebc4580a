//! crates/logging/src/registry.rs
//!
//! Keyed lookup of shared tags.
//!
//! Hosts that refer to tags by an identifier (an enum, a string, a numeric
//! code) register them once in a [`TagRegistry`] and look them up when
//! composing. A lookup never fails: unknown keys resolve to a designated
//! fallback tag.

use std::borrow::Borrow;
use std::collections::hash_map::Entry;
use std::fmt;
use std::hash::Hash;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use rustc_hash::FxHashMap;
use tags::{Rgba8, Tag};

use crate::diagnostics;
use crate::presets;
use crate::settings::Settings;

/// Thread-safe map from keys to shared [`Tag`]s.
///
/// Registration is first-come: [`register`](Self::register) never replaces an
/// existing entry.
///
/// # Examples
///
/// ```
/// use logging::{TagRegistry, presets};
/// use tags::Tag;
///
/// let registry = TagRegistry::new(presets::unknown());
/// assert!(registry.register("net", Tag::new("NET")));
/// assert!(!registry.register("net", Tag::new("OTHER")));
///
/// assert_eq!(registry.get("net").text(), "NET");
/// assert_eq!(registry.get("disk").text(), "UNKNOWN");
/// ```
pub struct TagRegistry<K> {
    tags: RwLock<FxHashMap<K, Arc<Tag>>>,
    unknown: Arc<Tag>,
}

impl<K> TagRegistry<K>
where
    K: Eq + Hash + fmt::Debug,
{
    /// Creates an empty registry that resolves unknown keys to `unknown`.
    #[must_use]
    pub fn new(unknown: Tag) -> Self {
        Self {
            tags: RwLock::new(FxHashMap::default()),
            unknown: Arc::new(unknown),
        }
    }

    /// Associates `tag` with `key`.
    ///
    /// Returns `false`, leaving the existing tag in place, when `key` is
    /// already registered.
    pub fn register(&self, key: K, tag: Tag) -> bool {
        match self.write().entry(key) {
            Entry::Occupied(entry) => {
                diagnostics::duplicate_registration(entry.key());
                false
            }
            Entry::Vacant(entry) => {
                entry.insert(Arc::new(tag));
                true
            }
        }
    }

    /// Returns the tag registered for `key`, or the [unknown](Self::unknown)
    /// tag when there is none.
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Arc<Tag>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + fmt::Debug + ?Sized,
    {
        self.try_get(key).unwrap_or_else(|| {
            diagnostics::unknown_key(&key);
            Arc::clone(&self.unknown)
        })
    }

    /// Returns the tag registered for `key`, if any.
    #[must_use]
    pub fn try_get<Q>(&self, key: &Q) -> Option<Arc<Tag>>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.read().get(key).cloned()
    }

    /// Reports whether `key` is registered.
    #[must_use]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.read().contains_key(key)
    }

    /// The fallback tag for unknown keys.
    #[must_use]
    pub fn unknown(&self) -> Arc<Tag> {
        Arc::clone(&self.unknown)
    }

    /// Number of registered keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns `true` when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, FxHashMap<K, Arc<Tag>>> {
        self.tags.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, FxHashMap<K, Arc<Tag>>> {
        self.tags.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<K> fmt::Debug for TagRegistry<K>
where
    K: Eq + Hash + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagRegistry")
            .field("tags", &*self.read())
            .field("unknown", &self.unknown)
            .finish()
    }
}

/// Keys of the built-in tag set.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LegacyTag {
    /// Placeholder for "no tag"; registered disabled, so it is skipped or
    /// suppresses the line according to the settings.
    None,
    /// `[DEBUG]`.
    Debug,
    /// `[OK]`.
    Ok,
    /// `[WARNING]`.
    Warning,
    /// `[ERROR]`.
    Error,
    /// The configured line prefix.
    Prefix,
    /// The fallback for unregistered keys.
    Unknown,
}

impl LegacyTag {
    /// Every built-in key.
    pub const ALL: [Self; 7] = [
        Self::None,
        Self::Debug,
        Self::Ok,
        Self::Warning,
        Self::Error,
        Self::Prefix,
        Self::Unknown,
    ];
}

impl TagRegistry<LegacyTag> {
    /// Creates a registry pre-populated with every [`LegacyTag`].
    ///
    /// Tags that follow the prefix shape are built from `settings`, so a
    /// customised default tag carries over to `Debug` and `Prefix`.
    #[must_use]
    pub fn with_builtin(settings: &Settings) -> Self {
        let unknown = settings
            .tag(presets::UNKNOWN_TEXT)
            .with_color(Rgba8::ORANGE);
        let registry = Self::new(unknown.clone());

        for key in LegacyTag::ALL {
            let tag = match key {
                LegacyTag::None => Tag::empty().with_enabled(false),
                LegacyTag::Debug => settings.tag(presets::PREFIX_TEXT),
                LegacyTag::Ok => presets::ok(),
                LegacyTag::Warning => presets::warning(),
                LegacyTag::Error => presets::error(),
                LegacyTag::Prefix => settings
                    .default_tag
                    .clone()
                    .unwrap_or_else(presets::prefix),
                LegacyTag::Unknown => unknown.clone(),
            };
            registry.register(key, tag);
        }

        registry
    }
}
