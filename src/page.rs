//! Page-level classification: every text block of a page in one call.
//!
//! Blocks are independent, so they are classified in parallel. Results come
//! back in block order, one per block; a block that cannot be classified
//! yields its own error without affecting the others.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::classifier::{RoleClassifier, Slant, ThresholdConfig};
use crate::error::RoleError;
use crate::geometry::PixelRect;
use crate::layout::PageLayout;
use crate::role::RoleInfo;

/// A detected block of text awaiting classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    pub bounds: Option<PixelRect>,
    #[serde(default)]
    pub slant: Slant,
}

impl TextBlock {
    pub fn new(bounds: PixelRect, slant: Slant) -> Self {
        Self {
            bounds: Some(bounds),
            slant,
        }
    }
}

/// Classify one block against its page.
pub fn classify_block(
    classifier: &RoleClassifier,
    layout: &PageLayout,
    block: &TextBlock,
) -> Result<RoleInfo, RoleError> {
    let bounds = block
        .bounds
        .as_ref()
        .ok_or_else(|| RoleError::invalid_input("missing bounds"))?;
    bounds.validate()?;
    let context = layout.context_for(bounds)?;
    classifier.classify(bounds, &context, &layout.scale(), block.slant)
}

/// Classify all blocks of a page, preserving their order.
pub fn classify_page(
    classifier: &RoleClassifier,
    layout: &PageLayout,
    blocks: &[TextBlock],
) -> Result<Vec<Result<RoleInfo, RoleError>>, RoleError> {
    layout.validate()?;

    let _span = tracing::debug_span!("classify_page", blocks = blocks.len()).entered();
    let results: Vec<_> = blocks
        .par_iter()
        .map(|block| classify_block(classifier, layout, block))
        .collect();

    let failed = results.iter().filter(|r| r.is_err()).count();
    if failed > 0 {
        tracing::debug!(failed, "some text blocks could not be classified");
    }
    Ok(results)
}

// ── JSON surface ────────────────────────────────────────────────────

/// A page to classify, as exchanged over FFI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRequest {
    pub layout: PageLayout,
    pub blocks: Vec<TextBlock>,
    /// Overrides for the default thresholds.
    #[serde(default)]
    pub thresholds: Option<ThresholdConfig>,
}

/// Result for one block: its role, or why it has none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlockOutcome {
    Role(RoleInfo),
    Error { error: String },
}

impl From<Result<RoleInfo, RoleError>> for BlockOutcome {
    fn from(result: Result<RoleInfo, RoleError>) -> Self {
        match result {
            Ok(role) => BlockOutcome::Role(role),
            Err(e) => BlockOutcome::Error {
                error: e.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResponse {
    pub results: Vec<BlockOutcome>,
}

/// Run a [`PageRequest`] and return the [`PageResponse`].
pub fn run_request(request: &PageRequest) -> Result<PageResponse, RoleError> {
    let config = request.thresholds.unwrap_or_default();
    config.validate()?;
    let classifier = RoleClassifier::new(config);
    let results = classify_page(&classifier, &request.layout, &request.blocks)?;
    Ok(PageResponse {
        results: results.into_iter().map(BlockOutcome::from).collect(),
    })
}

/// Classify a JSON page request and return the JSON response.
pub fn classify_page_json(json: &str) -> Result<String, RoleError> {
    let request: PageRequest = serde_json::from_str(json)?;
    let response = run_request(&request)?;
    Ok(serde_json::to_string(&response)?)
}
