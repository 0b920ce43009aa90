use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::clock::twelve_hour_index;
use crate::config::{TICK_COUNT, TICK_WIDTH};

/// Dial spacing derived from the display height. Computed once per face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub space: i32,
    pub margin: i32,
}

impl Geometry {
    pub fn new(display: Size) -> Self {
        let h = display.height as i32;
        let space = (h - TICK_COUNT * TICK_WIDTH - 4 * TICK_WIDTH) / TICK_COUNT;
        let margin = (h - 4 * TICK_WIDTH - (space + TICK_WIDTH) * (TICK_COUNT - 1) - TICK_WIDTH) / 2
            + 2 * TICK_WIDTH;
        Self { space, margin }
    }

    pub fn pitch(&self) -> i32 {
        self.space + TICK_WIDTH
    }

    /// Top edge of tick `index`, counted upward from the bottom of a region
    /// `height` pixels tall.
    pub fn tick_y(&self, height: i32, index: i32) -> i32 {
        height - self.pitch() * index - self.margin - TICK_WIDTH
    }

    /// Hour hand tip, centered on the tick for the hour. 12-periodic.
    pub fn hour_hand_y(&self, height: i32, hour: u8) -> i32 {
        self.tick_y(height, twelve_hour_index(hour) as i32) + 1
    }

    /// Minute hand tip, sliding linearly from `minute_hand_y(h, 0)` at the
    /// bottom to `minute_hand_y(h, 60)` at the top.
    pub fn minute_hand_y(&self, height: i32, minute: u8) -> i32 {
        height - (height - 2 * self.margin) * minute as i32 / 60 - self.margin - 1
    }
}

/// Frames of every region in display coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceLayout {
    pub geometry: Geometry,
    pub date_panel: Rectangle,
    pub battery_bar: Rectangle,
    pub left_dial: Rectangle,
    pub right_dial: Rectangle,
    pub hands: Rectangle,
}

impl FaceLayout {
    pub fn new(display: Size) -> Self {
        let w = display.width as i32;
        let h = display.height as i32;
        let quarter = w / 4;
        let half = 2 * w / 4;
        let column = |x: i32, width: i32| {
            Rectangle::new(Point::new(x, 0), Size::new(width.max(0) as u32, h as u32))
        };

        let date_panel = column(quarter, half);
        let battery_bar = Rectangle::new(
            date_panel.top_left + Point::new(8, panel_text_top(h) + 65),
            Size::new((half - 16).max(0) as u32, 1),
        );

        Self {
            geometry: Geometry::new(display),
            date_panel,
            battery_bar,
            left_dial: column(0, quarter),
            right_dial: column(3 * quarter, quarter),
            hands: column(quarter - 15, 2 * quarter + 30),
        }
    }
}

/// First text line of the date panel; the battery bar hangs below it.
pub fn panel_text_top(height: i32) -> i32 {
    (height - 60) / 2 - 5
}
