use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use fugit::MillisDurationU32;

pub const COLOR_BACKGROUND: Rgb565 = Rgb565::BLACK;
pub const COLOR_DIAL: Rgb565 = Rgb565::WHITE;
pub const COLOR_HAND: Rgb565 = Rgb565::WHITE;
pub const COLOR_PANEL: Rgb565 = Rgb565::WHITE;
pub const COLOR_PANEL_TEXT: Rgb565 = Rgb565::BLACK;
pub const COLOR_BATTERY: Rgb565 = Rgb565::BLACK;

pub const TICK_WIDTH: i32 = 2;
pub const TICK_LENGTH: i32 = 15;
/// Ticks per dial, 0 and 12 o'clock / 0 and 60 minutes included.
pub const TICK_COUNT: i32 = 13;

pub const HOUR_LABELS: [&str; 8] = ["1", "2", "4", "5", "7", "8", "10", "11"];
pub const MINUTE_LABELS: [&str; 8] = ["5", "10", "20", "25", "35", "40", "50", "55"];

/// Wait after a Bluetooth reconnect before forcing a refresh, the phone may
/// still be pushing a new time zone.
pub const SETTLE_DELAY: MillisDurationU32 = MillisDurationU32::millis(10_000);

/// The date panel is only meant to change at midnight, but it has always been
/// redrawn on every minute tick. Keep it that way.
pub const REDRAW_DATE_EVERY_MINUTE: bool = true;
