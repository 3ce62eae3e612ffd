//! Crate-wide constants.
//!
//! Centralizes marker attribute names and key identifiers so the normalizer,
//! resolver and settings agree on them.

// ============================================================================
// Marker Attributes
// ============================================================================

/// Opt-in for mousedown/mouseup/contextmenu normalization (and clicks)
pub const INTERACTIVE_ATTR: &str = "data-interactive";

/// Opt-in for drag synthesis
pub const DRAGGABLE_ATTR: &str = "data-draggable";

/// Opt-in for drag-enter/over/leave and drop
pub const DROPZONE_ATTR: &str = "data-dropzone";

/// Free-form id copied onto `NormalizedTarget::id`
pub const ID_ATTR: &str = "data-id";

/// Free-form type copied onto `NormalizedTarget::kind`
pub const TYPE_ATTR: &str = "data-type";

/// Marks the editor's root; keyboard events are only normalized while it has focus
pub const ROOT_ATTR: &str = "data-editor-root";

// ============================================================================
// Keyboard
// ============================================================================

/// `KeyboardEvent.key` for backspace
pub const KEY_BACKSPACE: &str = "Backspace";

/// `KeyboardEvent.key` for select-all when combined with the mod key
pub const KEY_SELECT_ALL: &str = "a";

// ============================================================================
// Profiling
// ============================================================================

/// Handlers slower than this are reported when profiling is enabled
pub const HANDLER_BUDGET_MS: f64 = 4.0;
