// Overlay window margins (pixels)
pub const PAD_L: i32 = 32;
pub const PAD_R: i32 = 32;
pub const PAD_B: i32 = 32;
pub const PAD_T: i32 = 128;                   // Leaves the first terminal lines readable

// Input bytes
pub const KEY_NEXT: u8 = b'n';
pub const KEY_PREV: u8 = b'N';
pub const KEY_CTRL_C: u8 = 0x03;

// Countdown
pub const COUNTDOWN_MINUTES: u32 = 5;
pub const WARNING_THRESHOLD_SECS: i64 = 60;   // At or below this the label turns red
pub const COUNTDOWN_FG: u8 = 250;             // xterm-256 grey
pub const WARNING_FG: u8 = 231;               // xterm-256 white
pub const WARNING_BG: u8 = 196;               // xterm-256 red
