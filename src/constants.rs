// DOM names and media queries used by the browser wiring.

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Class toggled on <html> while ceiling mode is active
pub const CEILING_CLASS: &str = "ceiling";

// Favicon link and serialization
pub const FAVICON_REL: &str = "icon";
pub const FAVICON_MIME: &str = "image/png";

// Orientation permission lookup on `window`
pub const ORIENTATION_EVENT_CTOR: &str = "DeviceOrientationEvent";
pub const ORIENTATION_REQUEST_FN: &str = "requestPermission";
pub const PERMISSION_GRANTED: &str = "granted";

// Event names
pub const EV_FIRST_INTERACTION: &str = "click";
pub const EV_POINTER_MOVE: &str = "pointermove";
pub const EV_CLICK: &str = "click";
pub const EV_ORIENTATION: &str = "deviceorientation";
pub const EV_WHEEL: &str = "wheel";
pub const EV_SCROLL: &str = "scroll";
pub const EV_MEDIA_CHANGE: &str = "change";
