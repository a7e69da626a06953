use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Header
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;
pub const SCROLL_THROTTLE_MS: f64 = 100.0;

// Scroll-spy band starts this far above the section, below the header
pub const SPY_OFFSET_PX: f64 = 100.0;

// Reveal observer
pub const REVEAL_SELECTORS: &str = ".section-header, .about-text, .about-stats, .stat-item, \
    .service-card, .product-card, .contact-item, .contact-form-wrapper";
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_THRESHOLD: f64 = 0.1;

pub const STAGGER_SELECTORS: &str = ".service-card, .product-card, .stat-item, .contact-item";

// Contact form
pub const SUBMIT_DELAY_MS: u32 = 1500;
pub const MSG_MISSING_FIELDS: &str = "请填写所有必填项";
pub const MSG_SENDING: &str = "发送中...";
pub const MSG_THANKS: &str = "感谢您的留言，我们会尽快与您联系！";

// Notifications
pub const NOTIFICATION_DURATION_MS: u32 = 5000;
pub const NOTIFICATION_EXIT_MS: u32 = 300;
pub const NOTIFICATION_STYLES_ID: &str = "notification-styles";
pub const COLOR_INFO: &str = "#0066FF";
pub const COLOR_SUCCESS: &str = "#10B981";
pub const COLOR_ERROR: &str = "#EF4444";

// Shared class names
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_SCROLLED: &str = "scrolled";
pub const CLASS_REVEAL: &str = "reveal";
