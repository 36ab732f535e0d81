//! Classification scenarios against a fake structural context.
//!
//! Page: 2000 px wide, interline 10 px. Pixel thresholds are therefore
//! right 20, center 300, short 350, tiny 20, staff dy 70, title height 30.

mod common;

use common::FakeContext;
use pretty_assertions::assert_eq;
use textrole::{
    CreatorType, PixelPoint, PixelRect, RoleClassifier, RoleError, RoleInfo, Scale, Slant,
    StaffPosition, TextRole,
};

fn classify(bounds: PixelRect, context: &FakeContext, slant: Slant) -> RoleInfo {
    RoleClassifier::default()
        .classify(&bounds, context, &Scale::new(10), slant)
        .expect("valid bounds should classify")
}

// ─── Above the staves ───────────────────────────────────────────────

#[test]
fn above_first_system_left_of_staves_is_lyricist() {
    let ctx = FakeContext::new(StaffPosition::Above);
    let role = classify(PixelRect::new(100, 100, 300, 40), &ctx, Slant::Unknown);
    assert_eq!(role, RoleInfo::creator(CreatorType::Lyricist));
}

#[test]
fn above_first_system_right_aligned_is_composer() {
    let ctx = FakeContext::new(StaffPosition::Above);
    let role = classify(PixelRect::new(1500, 100, 300, 40), &ctx, Slant::Unknown);
    assert_eq!(role, RoleInfo::creator(CreatorType::Composer));
}

#[test]
fn above_first_system_centered_tall_is_title() {
    let ctx = FakeContext::new(StaffPosition::Above);
    let role = classify(PixelRect::new(800, 100, 400, 40), &ctx, Slant::Unknown);
    assert_eq!(role, RoleInfo::new(TextRole::Title));
}

#[test]
fn above_first_system_centered_low_is_number() {
    let ctx = FakeContext::new(StaffPosition::Above);
    let role = classify(PixelRect::new(800, 100, 400, 20), &ctx, Slant::Unknown);
    assert_eq!(role, RoleInfo::new(TextRole::Number));
}

#[test]
fn above_first_system_close_to_staff_is_direction() {
    let ctx = FakeContext::new(StaffPosition::Above);
    // Centered too, but closeness is checked first.
    let role = classify(PixelRect::new(800, 440, 400, 40), &ctx, Slant::Unknown);
    assert_eq!(role, RoleInfo::new(TextRole::Direction));
}

#[test]
fn above_first_system_without_cue_is_unknown() {
    let ctx = FakeContext::new(StaffPosition::Above);
    let role = classify(PixelRect::new(300, 100, 200, 40), &ctx, Slant::Unknown);
    assert_eq!(role, RoleInfo::unknown());
}

#[test]
fn above_later_system_is_direction() {
    let ctx = FakeContext::new(StaffPosition::Above).in_system(2, 3);
    let role = classify(PixelRect::new(800, 100, 400, 40), &ctx, Slant::Unknown);
    assert_eq!(role, RoleInfo::new(TextRole::Direction));
}

#[test]
fn above_tiny_block_is_unknown() {
    let ctx = FakeContext::new(StaffPosition::Above);
    // Left of staves and near the page center would otherwise count.
    let role = classify(PixelRect::new(150, 100, 20, 40), &ctx, Slant::Unknown);
    assert_eq!(role, RoleInfo::unknown());
}

// ─── Within the staves ──────────────────────────────────────────────

#[test]
fn within_below_part_unknown_slant_is_lyrics() {
    let ctx = FakeContext::new(StaffPosition::Within).with_part_position(StaffPosition::Below);
    let role = classify(PixelRect::new(500, 700, 600, 25), &ctx, Slant::Unknown);
    assert_eq!(role, RoleInfo::new(TextRole::Lyrics));
}

#[test]
fn within_below_part_slanted_is_direction() {
    let ctx = FakeContext::new(StaffPosition::Within).with_part_position(StaffPosition::Below);
    let role = classify(PixelRect::new(500, 700, 600, 25), &ctx, Slant::Slanted);
    assert_eq!(role, RoleInfo::new(TextRole::Direction));
}

#[test]
fn within_left_of_staves_is_name() {
    let ctx = FakeContext::new(StaffPosition::Within).with_part_position(StaffPosition::Below);
    let role = classify(PixelRect::new(40, 700, 120, 25), &ctx, Slant::Upright);
    assert_eq!(role, RoleInfo::new(TextRole::Name));
}

#[test]
fn within_inside_part_is_direction() {
    let ctx = FakeContext::new(StaffPosition::Within).with_part_position(StaffPosition::Within);
    let role = classify(PixelRect::new(500, 700, 10, 25), &ctx, Slant::Upright);
    assert_eq!(role, RoleInfo::new(TextRole::Direction));
}

// ─── Below the staves ───────────────────────────────────────────────

#[test]
fn below_last_system_centered_short_is_rights() {
    let ctx = FakeContext::new(StaffPosition::Below).in_system(2, 2);
    let role = classify(PixelRect::new(900, 1900, 200, 20), &ctx, Slant::Unknown);
    assert_eq!(role, RoleInfo::new(TextRole::Rights));
}

#[test]
fn below_not_last_system_is_unknown() {
    let ctx = FakeContext::new(StaffPosition::Below).in_system(1, 2);
    let role = classify(PixelRect::new(900, 1900, 200, 20), &ctx, Slant::Unknown);
    assert_eq!(role, RoleInfo::unknown());
}

#[test]
fn below_long_block_is_unknown() {
    let ctx = FakeContext::new(StaffPosition::Below).in_system(2, 2);
    let role = classify(PixelRect::new(800, 1900, 400, 20), &ctx, Slant::Unknown);
    assert_eq!(role, RoleInfo::unknown());
}

// ─── Inputs ─────────────────────────────────────────────────────────

#[test]
fn queries_use_left_edge_at_mid_height() {
    let ctx = FakeContext::new(StaffPosition::Above);
    classify(PixelRect::new(800, 100, 400, 41), &ctx, Slant::Unknown);

    let queried = ctx.queried.borrow();
    assert!(!queried.is_empty());
    assert!(queried.iter().all(|p| *p == PixelPoint::new(800, 120)), "{queried:?}");
}

#[test]
fn degenerate_bounds_are_rejected() {
    let ctx = FakeContext::new(StaffPosition::Above);
    let classifier = RoleClassifier::default();
    for bounds in [PixelRect::new(10, 10, 0, 10), PixelRect::new(10, 10, 10, -3)] {
        let err = classifier
            .classify(&bounds, &ctx, &Scale::new(10), Slant::Unknown)
            .unwrap_err();
        assert!(matches!(err, RoleError::InvalidInput { .. }), "got {err:?}");
    }
    assert!(ctx.queried.borrow().is_empty(), "no context query for rejected bounds");
}

#[test]
fn features_are_reported_for_audit() {
    let ctx = FakeContext::new(StaffPosition::Above);
    let features = RoleClassifier::default()
        .features(&PixelRect::new(800, 100, 400, 40), &ctx, &Scale::new(10), Slant::Unknown)
        .unwrap();
    assert!(features.first_system);
    assert!(!features.last_system);
    assert!(features.page_centered);
    assert!(features.tall_block);
    assert_eq!(features.staff_dy, 400);
    assert_eq!(RoleClassifier::decide(&features), RoleInfo::new(TextRole::Title));

    let json = serde_json::to_value(features).unwrap();
    assert_eq!(json["system_position"], "above");
    assert_eq!(json["slant"], "unknown");
}
