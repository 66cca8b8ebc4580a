//! Property tests for tag rendering.
//!
//! These tests check that rendering is a deterministic function of the five
//! visible fields and that the memo never drifts from a fresh rendering.

use proptest::prelude::*;
use tags::{Brackets, Rgba8, Severity, Spacer, Tag, TextStyle, render};

fn text_style() -> impl Strategy<Value = TextStyle> {
    prop_oneof![
        Just(TextStyle::Regular),
        Just(TextStyle::Bold),
        Just(TextStyle::Italic),
        Just(TextStyle::BoldItalic),
    ]
}

fn brackets() -> impl Strategy<Value = Brackets> {
    prop_oneof![
        Just(Brackets::Square),
        Just(Brackets::Round),
        Just(Brackets::Curly),
        Just(Brackets::Space),
        Just(Brackets::None),
    ]
}

fn spacer() -> impl Strategy<Value = Spacer> {
    prop_oneof![
        Just(Spacer::Space),
        Just(Spacer::Dot),
        Just(Spacer::Comma),
        Just(Spacer::Colon),
        Just(Spacer::Ellipsis),
        Just(Spacer::Dash),
        Just(Spacer::None),
    ]
}

fn severity() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Info),
        Just(Severity::Warning),
        Just(Severity::Error),
    ]
}

fn tag() -> impl Strategy<Value = Tag> {
    (
        ".{0,24}",
        any::<[u8; 4]>(),
        text_style(),
        brackets(),
        spacer(),
        severity(),
        any::<bool>(),
    )
        .prop_map(|(text, rgba, style, brackets, spacer, severity, enabled)| {
            Tag::builder()
                .text(text)
                .color(Rgba8::from(rgba))
                .text_style(style)
                .brackets(brackets)
                .spacer(spacer)
                .severity(severity)
                .enabled(enabled)
                .build()
        })
}

proptest! {
    #[test]
    fn render_is_deterministic(tag in tag()) {
        let first = render(tag.text(), tag.color(), tag.text_style(), tag.brackets(), tag.spacer());
        let second = render(tag.text(), tag.color(), tag.text_style(), tag.brackets(), tag.spacer());
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(tag.rendered(), first.as_str());
        prop_assert_eq!(tag.rendered(), tag.rendered());
    }

    #[test]
    fn rendering_contains_text_and_hex(tag in tag()) {
        let rendered = tag.rendered();
        prop_assert!(rendered.contains(tag.text()));
        let hex = tag.color().to_string();
        let expected_color = format!("<color={hex}>");
        prop_assert!(rendered.contains(&expected_color));
        prop_assert!(rendered.ends_with(tag.spacer().as_str()));
    }

    #[test]
    fn clone_is_independent(tag in tag(), replacement in "[A-Z]{1,8}") {
        let expected = tag.rendered().to_owned();
        let mut clone = tag.clone();
        prop_assert_eq!(clone.rendered(), expected.as_str());

        clone.set_text(format!("{replacement}\n"));
        prop_assert_eq!(tag.rendered(), expected.as_str());
        prop_assert_ne!(clone.rendered(), expected.as_str());
    }

    #[test]
    fn memo_survives_policy_changes(tag in tag(), severity in severity(), enabled in any::<bool>()) {
        let mut tag = tag;
        let expected = tag.rendered().to_owned();
        tag.set_severity(severity);
        tag.set_enabled(enabled);
        prop_assert!(tag.is_rendered());
        prop_assert_eq!(tag.rendered(), expected.as_str());
    }

    #[test]
    fn memo_follows_visible_changes(tag in tag(), style in text_style(), spacer in spacer()) {
        let mut tag = tag;
        let _ = tag.rendered();
        tag.set_text_style(style);
        tag.set_spacer(spacer);
        let fresh = render(tag.text(), tag.color(), style, tag.brackets(), spacer);
        prop_assert_eq!(tag.rendered(), fresh.as_str());
    }
}
