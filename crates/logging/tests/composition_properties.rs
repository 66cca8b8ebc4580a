//! Property tests for line composition.
//!
//! Random tag sequences, with random enabled flags and absent entries, are
//! composed and compared against a straightforward fold over the same input.

use std::sync::Arc;

use logging::{BufferPool, Composer, MemorySink, Settings, presets};
use proptest::prelude::*;
use tags::{Severity, Tag};

fn severity() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Info),
        Just(Severity::Warning),
        Just(Severity::Error),
    ]
}

fn tag() -> impl Strategy<Value = Tag> {
    ("[a-z ]{0,8}", severity(), any::<bool>()).prop_map(|(text, severity, enabled)| {
        Tag::new(text)
            .with_severity(severity)
            .with_enabled(enabled)
    })
}

fn sequence() -> impl Strategy<Value = Vec<Option<Tag>>> {
    prop::collection::vec(prop::option::weighted(0.9, tag()), 0..12)
}

fn composer(settings: Settings) -> Composer<MemorySink> {
    Composer::with_pool(settings, Arc::new(BufferPool::new(2)), MemorySink::new())
}

/// Text and severity a line should carry, or `None` when it is suppressed.
fn expected(settings: &Settings, tags: &[Option<Tag>]) -> Option<(String, Severity)> {
    let mut text = String::new();
    if settings.prefix_default_tag {
        match settings.default_tag.as_ref().filter(|tag| tag.is_enabled()) {
            Some(prefix) => text.push_str(prefix.rendered()),
            None if settings.suppress_on_disabled_tag => return None,
            None => {}
        }
    }

    let mut severity = Severity::Info;
    for tag in tags {
        match tag.as_ref().filter(|tag| tag.is_enabled()) {
            Some(tag) => {
                text.push_str(tag.rendered());
                severity = severity.max(tag.severity());
            }
            None if settings.suppress_on_disabled_tag => return None,
            None => {}
        }
    }
    Some((text, severity))
}

proptest! {
    /// Verifies composed lines match a reference fold over the input.
    #[test]
    fn composition_matches_reference(
        tags in sequence(),
        prefix in any::<bool>(),
        prefix_enabled in any::<bool>(),
        suppress in any::<bool>(),
    ) {
        let settings = Settings::default()
            .with_prefix_default_tag(prefix)
            .with_suppress_on_disabled_tag(suppress)
            .with_default_tag(Some(presets::prefix().with_enabled(prefix_enabled)));
        let composer = composer(settings.clone());

        composer.log(tags.iter().map(Option::as_ref));

        let records = composer.sink().records();
        match expected(&settings, &tags) {
            Some((text, severity)) => {
                prop_assert_eq!(records.len(), 1);
                prop_assert_eq!(&records[0].text, &text);
                prop_assert_eq!(records[0].severity, severity);
            }
            None => prop_assert!(records.is_empty()),
        }
        prop_assert_eq!(composer.pool().available(), 1);
    }

    /// Verifies the prefix severity never reaches the line.
    #[test]
    fn prefix_severity_is_ignored(prefix_severity in severity(), tags in sequence()) {
        let settings = Settings::default()
            .with_default_tag(Some(presets::prefix().with_severity(prefix_severity)));
        let composer = composer(settings);

        let line = composer
            .compose(tags.iter().map(Option::as_ref))
            .expect("soft suppression always yields a line");

        let highest = tags
            .iter()
            .flatten()
            .filter(|tag| tag.is_enabled())
            .map(Tag::severity)
            .max()
            .unwrap_or(Severity::Info);
        prop_assert_eq!(line.severity, highest);
    }
}
