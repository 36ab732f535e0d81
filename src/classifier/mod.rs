//! Text role classifier.
//!
//! A block of text is located with respect to the system it belongs to:
//! above, within or below its staves. Each of these three positions has its
//! own ordered rule list (see `rules`), evaluated on features measured in
//! pixels for the current page scale (see `features` and `thresholds`).
//!
//! The classifier holds nothing but its thresholds, so a single instance can
//! be shared between threads and pages.

pub mod features;
mod rules;
pub mod thresholds;

pub use features::{Slant, TextFeatures};
pub use thresholds::{PixelThresholds, ThresholdConfig};

use crate::context::StructuralContext;
use crate::error::RoleError;
use crate::geometry::PixelRect;
use crate::role::RoleInfo;
use crate::scale::PageScale;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoleClassifier {
    config: ThresholdConfig,
}

impl RoleClassifier {
    pub fn new(config: ThresholdConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ThresholdConfig {
        &self.config
    }

    /// Infer the role of a text block from its location within the page.
    ///
    /// `context` must be resolved for the block's left edge at mid-height, and
    /// `scale` must be the scale of that same page.
    pub fn classify<C, S>(
        &self,
        bounds: &PixelRect,
        context: &C,
        scale: &S,
        slant: Slant,
    ) -> Result<RoleInfo, RoleError>
    where
        C: StructuralContext + ?Sized,
        S: PageScale + ?Sized,
    {
        let features = self.features(bounds, context, scale, slant)?;
        Ok(Self::decide(&features))
    }

    /// Same as [`classify`](Self::classify), for callers whose bounds may be missing.
    pub fn guess_role<C, S>(
        &self,
        bounds: Option<&PixelRect>,
        context: &C,
        scale: &S,
        slant: Slant,
    ) -> Result<RoleInfo, RoleError>
    where
        C: StructuralContext + ?Sized,
        S: PageScale + ?Sized,
    {
        let bounds = bounds.ok_or_else(|| RoleError::invalid_input("missing bounds"))?;
        self.classify(bounds, context, scale, slant)
    }

    /// Measure the features the rule table works on.
    pub fn features<C, S>(
        &self,
        bounds: &PixelRect,
        context: &C,
        scale: &S,
        slant: Slant,
    ) -> Result<TextFeatures, RoleError>
    where
        C: StructuralContext + ?Sized,
        S: PageScale + ?Sized,
    {
        let thresholds = self.config.to_pixels(scale);
        let features = TextFeatures::derive(bounds, context, &thresholds, slant)?;

        tracing::debug!(
            bounds = ?features.bounds,
            first_system = features.first_system,
            last_system = features.last_system,
            system_position = %features.system_position,
            part_position = %features.part_position,
            close_to_staff = features.close_to_staff,
            left_of_staves = features.left_of_staves,
            page_centered = features.page_centered,
            right_aligned = features.right_aligned,
            short_block = features.short_block,
            tiny_block = features.tiny_block,
            tall_block = features.tall_block,
            slant = ?features.slant,
            "text features"
        );

        Ok(features)
    }

    /// Apply the rule table. Total: always yields a role, `Unknown` included.
    pub fn decide(features: &TextFeatures) -> RoleInfo {
        let (role, rule) = rules::evaluate(features);
        tracing::trace!(rule = rule.unwrap_or("default"), %role, "role decided");
        role
    }
}
