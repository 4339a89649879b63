// Page wiring constants: element ids, CSS classes and render defaults.
//
// Every id listed here must exist in the page; startup fails otherwise.
// Scroll UI
pub const ID_PROGRESS_FILL: &str = "progress-bar-fill";
pub const ID_PROGRESS_TEXT: &str = "progress-text";
pub const ID_SCARCITY_TEXT: &str = "scarcity-text";
pub const ID_INTRO_TEXT: &str = "intro-text";
pub const ID_SECRET_TOAST: &str = "secret-toast";
pub const ID_SECRET_TOAST_TEXT: &str = "secret-toast-text";
pub const ID_GALLERY_HUD: &str = "gallery-hud";
pub const ID_TESTIMONIAL_HUD: &str = "testimonial-hud";

// Modal
pub const ID_MODAL: &str = "modal";
pub const ID_MODAL_CONTENT: &str = "modal-content";
pub const ID_ENTER_SANCTUARY: &str = "enter-sanctuary";
pub const ID_CLOSE_MODAL: &str = "close-modal";
pub const ID_CLAIM: &str = "claim-btn";

// Canvas host
pub const ID_WEBGL_CONTAINER: &str = "webgl-container";

// Utility classes toggled on the page
pub const CLASS_HIDDEN: &str = "opacity-0";
pub const CLASS_NO_POINTER: &str = "pointer-events-none";
pub const CLASS_SCALE_CLOSED: &str = "scale-95";
pub const CLASS_SCALE_OPEN: &str = "scale-100";

