//! The rule table: one ordered list per vertical position, first match wins.

use super::features::TextFeatures;
use crate::context::StaffPosition;
use crate::role::{CreatorType, RoleInfo, TextRole};

/// A named predicate and the role it yields when it holds.
pub(super) struct Rule {
    pub(super) name: &'static str,
    pub(super) applies: fn(&TextFeatures) -> bool,
    pub(super) outcome: fn(&TextFeatures) -> RoleInfo,
}

// ── Above the staves: Title, Number, Creator, Direction ─────────────

pub(super) const ABOVE_RULES: &[Rule] = &[
    Rule {
        name: "above/tiny",
        applies: |f| f.tiny_block,
        outcome: |_| RoleInfo::unknown(),
    },
    Rule {
        name: "above/not-first-system",
        applies: |f| !f.first_system,
        outcome: |_| RoleInfo::new(TextRole::Direction),
    },
    Rule {
        name: "above/left-of-staves",
        applies: |f| f.left_of_staves,
        outcome: |_| RoleInfo::creator(CreatorType::Lyricist),
    },
    Rule {
        name: "above/right-aligned",
        applies: |f| f.right_aligned,
        outcome: |_| RoleInfo::creator(CreatorType::Composer),
    },
    Rule {
        name: "above/close-to-staff",
        applies: |f| f.close_to_staff,
        outcome: |_| RoleInfo::new(TextRole::Direction),
    },
    Rule {
        name: "above/page-centered",
        applies: |f| f.page_centered,
        outcome: |f| {
            if f.tall_block {
                RoleInfo::new(TextRole::Title)
            } else {
                RoleInfo::new(TextRole::Number)
            }
        },
    },
    // Nothing else: a first-system block off the page center falls through.
];

// ── Within the staves: Name, Lyrics, Direction ──────────────────────

pub(super) const WITHIN_RULES: &[Rule] = &[
    Rule {
        name: "within/left-of-staves",
        applies: |f| f.left_of_staves,
        outcome: |_| RoleInfo::new(TextRole::Name),
    },
    Rule {
        name: "within/below-part-upright",
        applies: |f| f.part_position == StaffPosition::Below && !f.slant.is_slanted(),
        outcome: |_| RoleInfo::new(TextRole::Lyrics),
    },
    Rule {
        name: "within/otherwise",
        applies: |_| true,
        outcome: |_| RoleInfo::new(TextRole::Direction),
    },
];

// ── Below the staves: Rights ────────────────────────────────────────

pub(super) const BELOW_RULES: &[Rule] = &[
    Rule {
        name: "below/tiny",
        applies: |f| f.tiny_block,
        outcome: |_| RoleInfo::unknown(),
    },
    Rule {
        name: "below/centered-short-last-system",
        applies: |f| f.page_centered && f.short_block && f.last_system,
        outcome: |_| RoleInfo::new(TextRole::Rights),
    },
];

pub(super) fn rules_for(position: StaffPosition) -> &'static [Rule] {
    match position {
        StaffPosition::Above => ABOVE_RULES,
        StaffPosition::Within => WITHIN_RULES,
        StaffPosition::Below => BELOW_RULES,
    }
}

/// Evaluate the table for `features`, returning the winning rule name if any.
pub(super) fn evaluate(features: &TextFeatures) -> (RoleInfo, Option<&'static str>) {
    rules_for(features.system_position)
        .iter()
        .find(|rule| (rule.applies)(features))
        .map(|rule| ((rule.outcome)(features), Some(rule.name)))
        .unwrap_or((RoleInfo::unknown(), None))
}
