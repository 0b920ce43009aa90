use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::primitives::Rectangle;
use u8g2_fonts::types::{FontColor, HorizontalAlignment, VerticalPosition};

use super::{Readings, Region, RegionId};
use crate::config::{self as cfg, TICK_COUNT, TICK_LENGTH, TICK_WIDTH};
use crate::error::Error;
use crate::fonts::TINY_FONT;
use crate::layout::Geometry;
use crate::AppDrawTarget;

const LABEL_BOX: i32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Hour scale, ticks hug the right edge.
    Left,
    /// Minute scale, ticks hug the left edge.
    Right,
}

pub struct DialRegion {
    frame: Rectangle,
    geometry: Geometry,
    side: Side,
}

impl DialRegion {
    pub fn new(frame: Rectangle, geometry: Geometry, side: Side) -> Self {
        Self {
            frame,
            geometry,
            side,
        }
    }

    fn labels(&self) -> &'static [&'static str; 8] {
        match self.side {
            Side::Left => &cfg::HOUR_LABELS,
            Side::Right => &cfg::MINUTE_LABELS,
        }
    }
}

/// Every quarter of the scale gets a double length tick.
pub fn is_major_tick(index: i32) -> bool {
    index % ((TICK_COUNT - 1) / 4) == 0
}

impl Region for DialRegion {
    fn id(&self) -> RegionId {
        match self.side {
            Side::Left => RegionId::LeftDial,
            Side::Right => RegionId::RightDial,
        }
    }

    fn frame(&self) -> Rectangle {
        self.frame
    }

    fn draw<D: AppDrawTarget<E>, E>(
        &self,
        display: &mut D,
        _readings: &Readings,
    ) -> Result<(), Error<E>> {
        let width = display.bounding_box().size.width as i32;
        let height = display.bounding_box().size.height as i32;

        for i in 0..TICK_COUNT {
            let length = if is_major_tick(i) {
                2 * TICK_LENGTH
            } else {
                TICK_LENGTH
            };
            let x = match self.side {
                Side::Left => width - length,
                Side::Right => 0,
            };
            display
                .fill_solid(
                    &Rectangle::new(
                        Point::new(x, self.geometry.tick_y(height, i)),
                        Size::new(length as u32, TICK_WIDTH as u32),
                    ),
                    cfg::COLOR_DIAL,
                )
                .map_err(Error::Display)?;
        }

        let x = match self.side {
            Side::Left => 6,
            Side::Right => width - TICK_WIDTH - 18,
        };
        for (i, label) in (2..TICK_COUNT - 3).zip(self.labels()) {
            // odd rows sit a little lower to stay clear of the ticks
            let y = height - 18 * i + 4 - (1 - i % 2) * 4;
            TINY_FONT.render_aligned(
                *label,
                Point::new(x + LABEL_BOX / 2, y),
                VerticalPosition::Top,
                HorizontalAlignment::Center,
                FontColor::Transparent(cfg::COLOR_DIAL),
                display,
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::draw_target::DrawTargetExt;
    use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

    use super::*;
    use crate::layout::FaceLayout;
    use crate::regions::testing::{self, at};

    fn draw(side: Side) -> testing::Pixels {
        let layout = FaceLayout::new(testing::SIZE);
        let frame = match side {
            Side::Left => layout.left_dial,
            Side::Right => layout.right_dial,
        };
        let region = DialRegion::new(frame, layout.geometry, side);
        let mut pixels = testing::pixels(Rgb565::BLACK);
        let mut canvas = testing::canvas(&mut pixels);
        region
            .draw(&mut canvas.cropped(&frame), &testing::readings())
            .unwrap();
        pixels
    }

    #[test]
    fn majors_every_three_ticks() {
        let majors: Vec<i32> = (0..TICK_COUNT).filter(|i| is_major_tick(*i)).collect();
        assert_eq!(majors, vec![0, 3, 6, 9, 12]);
    }

    #[test]
    fn left_dial_ticks_hug_right_edge() {
        let mut pixels = draw(Side::Left);
        let canvas = testing::canvas(&mut pixels);
        // tick 0 is major, 30 px long ending at x = 35
        assert_eq!(at(&canvas, 35, 155), Rgb565::WHITE);
        assert_eq!(at(&canvas, 6, 155), Rgb565::WHITE);
        assert_eq!(at(&canvas, 5, 155), Rgb565::BLACK);
        assert_eq!(at(&canvas, 6, 157), Rgb565::BLACK);
        // tick 1 is minor, 15 px long
        assert_eq!(at(&canvas, 21, 143), Rgb565::WHITE);
        assert_eq!(at(&canvas, 20, 143), Rgb565::BLACK);
        // nothing leaks into the date panel
        assert_eq!(at(&canvas, 36, 155), Rgb565::BLACK);
    }

    #[test]
    fn right_dial_ticks_hug_left_edge() {
        let mut pixels = draw(Side::Right);
        let canvas = testing::canvas(&mut pixels);
        assert_eq!(at(&canvas, 108, 155), Rgb565::WHITE);
        assert_eq!(at(&canvas, 137, 155), Rgb565::WHITE);
        assert_eq!(at(&canvas, 138, 155), Rgb565::BLACK);
        assert_eq!(at(&canvas, 122, 143), Rgb565::WHITE);
        assert_eq!(at(&canvas, 123, 143), Rgb565::BLACK);
        assert_eq!(at(&canvas, 107, 155), Rgb565::BLACK);
    }

    const HOURS: [&str; 8] = ["1", "2", "4", "5", "7", "8", "10", "11"];
    const MINUTES: [&str; 8] = ["5", "10", "20", "25", "35", "40", "50", "55"];

    fn frame(side: Side) -> Rectangle {
        let layout = FaceLayout::new(testing::SIZE);
        match side {
            Side::Left => layout.left_dial,
            Side::Right => layout.right_dial,
        }
    }

    /// Label origin inside a 36 x 168 dial.
    fn label_origin(side: Side, i: i32) -> Point {
        let x = match side {
            Side::Left => 6,
            Side::Right => 36 - 2 - 18,
        };
        Point::new(x, 168 - 18 * i + 4 - (1 - i % 2) * 4)
    }

    /// Only the labels, drawn straight from the font.
    fn labels_only(side: Side, labels: [&str; 8]) -> testing::Pixels {
        let frame = frame(side);
        let mut pixels = testing::pixels(Rgb565::BLACK);
        let mut canvas = testing::canvas(&mut pixels);
        let mut target = canvas.cropped(&frame);
        for (i, label) in (2..10).zip(labels) {
            let origin = label_origin(side, i);
            TINY_FONT
                .render_aligned(
                    label,
                    origin + Point::new(LABEL_BOX / 2, 0),
                    VerticalPosition::Top,
                    HorizontalAlignment::Center,
                    FontColor::Transparent(Rgb565::WHITE),
                    &mut target,
                )
                .unwrap();
        }
        pixels
    }

    fn off_tick_rows(y: &i32) -> bool {
        !matches!(y % 12, 11 | 0)
    }

    fn assert_labels(side: Side, labels: [&str; 8]) {
        let frame = frame(side);
        let mut drawn = draw(side);
        let mut expected = labels_only(side, labels);
        let drawn = testing::canvas(&mut drawn);
        let expected = testing::canvas(&mut expected);
        let x0 = frame.top_left.x;
        for y in (0..168).filter(off_tick_rows) {
            for x in x0..x0 + 36 {
                assert_eq!(at(&drawn, x, y), at(&expected, x, y), "({x}, {y})");
            }
        }
    }

    #[test]
    fn each_side_reads_its_own_table() {
        let layout = FaceLayout::new(testing::SIZE);
        let left = DialRegion::new(layout.left_dial, layout.geometry, Side::Left);
        let right = DialRegion::new(layout.right_dial, layout.geometry, Side::Right);
        assert_eq!(left.labels(), &HOURS);
        assert_eq!(right.labels(), &MINUTES);
    }

    #[test]
    fn every_label_box_has_ink() {
        for side in [Side::Left, Side::Right] {
            let x0 = frame(side).top_left.x;
            let mut pixels = draw(side);
            let canvas = testing::canvas(&mut pixels);
            for i in 2..10 {
                let origin = label_origin(side, i) + Point::new(x0, 0);
                let lit = (origin.y..origin.y + LABEL_BOX)
                    .filter(off_tick_rows)
                    .flat_map(|y| (origin.x..origin.x + LABEL_BOX).map(move |x| (x, y)))
                    .filter(|&(x, y)| at(&canvas, x, y) == Rgb565::WHITE)
                    .count();
                assert!(lit > 0, "{side:?} label {i} at {origin:?}");
            }
        }
    }

    #[test]
    fn hour_labels_on_left_dial() {
        assert_labels(Side::Left, HOURS);
    }

    #[test]
    fn minute_labels_on_right_dial() {
        assert_labels(Side::Right, MINUTES);
    }

    #[test]
    fn tables_are_told_apart() {
        let mut hours = labels_only(Side::Left, HOURS);
        let mut minutes = labels_only(Side::Left, MINUTES);
        let hours = testing::canvas(&mut hours);
        let minutes = testing::canvas(&mut minutes);
        let differs = (0..168)
            .filter(off_tick_rows)
            .any(|y| (0..36).any(|x| at(&hours, x, y) != at(&minutes, x, y)));
        assert!(differs);
    }
}
