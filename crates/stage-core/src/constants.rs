// Shared tuning constants used by both the core math and the web frontend.

// Inertial scrolling
pub const SMOOTH_TAU_SEC: f32 = 0.12; // exponential approach time constant
pub const SNAP_EPSILON_PX: f64 = 0.5; // snap to target when this close

// Wheel delta normalization (WheelEvent.delta_mode units -> pixels)
pub const WHEEL_LINE_PX: f64 = 16.0;
pub const WHEEL_PAGE_PX: f64 = 800.0;

// Touch drag scaled up so a swipe covers about one section
pub const TOUCH_DRAG_MULTIPLIER: f64 = 2.0;

// Section entry motion
pub const ENTRY_DRIFT_PX: f32 = 40.0; // translateY at the very start of entry
pub const ENTRY_SCALE: f32 = 1.05; // scale at the very start of entry

// Stacking order while two sections blend
pub const ACTIVE_Z_INDEX: i32 = 2;
pub const BLEND_Z_INDEX: i32 = 1;
pub const HIDDEN_Z_INDEX: i32 = 0;
