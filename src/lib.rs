//! textrole — rule-based text role classification for scanned music score pages.
//!
//! Given the bounds of a block of text and the system of staves it sits in,
//! the classifier decides whether the text is a title, a creator credit,
//! lyrics, a direction, a part name, a copyright notice, and so on.
//!
//! # Example
//! ```
//! use textrole::layout::{PageLayout, PartLayout, StaffLayout, SystemLayout};
//! use textrole::{PixelRect, RoleClassifier, RoleInfo, Slant, TextRole};
//!
//! let page = PageLayout {
//!     width: 1000,
//!     height: 1400,
//!     interline: 10,
//!     systems: vec![SystemLayout::new(vec![PartLayout::new(vec![
//!         StaffLayout::new(100, 300, 800, 40),
//!     ])])],
//! };
//!
//! let title = PixelRect::new(300, 100, 400, 60);
//! let context = page.context_for(&title).unwrap();
//! let role = RoleClassifier::default()
//!     .classify(&title, &context, &page.scale(), Slant::Unknown)
//!     .unwrap();
//! assert_eq!(role, RoleInfo::new(TextRole::Title));
//! ```

pub mod classifier;
pub mod context;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod page;
pub mod role;
pub mod scale;

pub use classifier::{RoleClassifier, Slant, TextFeatures, ThresholdConfig};
pub use context::{StaffPosition, StructuralContext};
pub use error::RoleError;
pub use geometry::{PixelPoint, PixelRect};
pub use page::{classify_page, classify_page_json, PageRequest, PageResponse, TextBlock};
pub use role::{CreatorType, RoleInfo, TextRole};
pub use scale::{PageScale, Scale};

// ═══════════════════════════════════════════════════════════════════════
// C FFI — JSON page requests for native hosts
// ═══════════════════════════════════════════════════════════════════════

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Classify a JSON page request and return the JSON response as a C string.
/// The caller must free the returned string with `textrole_free_string`.
///
/// Returns null if the request is not valid UTF-8, not a valid request, or
/// its layout is invalid. Per-block failures are reported inside the response.
///
/// # Safety
/// `request` must be a valid null-terminated C string.
#[no_mangle]
pub unsafe extern "C" fn textrole_classify_page_json(request: *const c_char) -> *mut c_char {
    if request.is_null() {
        return std::ptr::null_mut();
    }
    let c_str = unsafe { CStr::from_ptr(request) };
    let json = match c_str.to_str() {
        Ok(s) => s,
        Err(_) => return std::ptr::null_mut(),
    };

    // A panic must not unwind into the host.
    let outcome = std::panic::catch_unwind(|| classify_page_json(json));
    match outcome {
        Ok(Ok(response)) => CString::new(response).unwrap_or_default().into_raw(),
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "page request rejected");
            std::ptr::null_mut()
        }
        Err(_) => {
            tracing::error!("page request panicked");
            std::ptr::null_mut()
        }
    }
}

/// Free a string previously returned by textrole functions.
///
/// # Safety
/// `ptr` must be a string previously returned by a textrole function, or null.
#[no_mangle]
pub unsafe extern "C" fn textrole_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}
