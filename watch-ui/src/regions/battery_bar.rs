use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use super::{Readings, Region, RegionId};
use crate::battery::battery_fill_width;
use crate::config as cfg;
use crate::error::Error;
use crate::AppDrawTarget;

/// Thin gauge under the date lines, drawn over the date panel background.
pub struct BatteryBarRegion {
    frame: Rectangle,
}

impl BatteryBarRegion {
    pub fn new(frame: Rectangle) -> Self {
        Self { frame }
    }
}

impl Region for BatteryBarRegion {
    fn id(&self) -> RegionId {
        RegionId::BatteryBar
    }

    fn frame(&self) -> Rectangle {
        self.frame
    }

    fn draw<D: AppDrawTarget<E>, E>(
        &self,
        display: &mut D,
        readings: &Readings,
    ) -> Result<(), Error<E>> {
        let size = display.bounding_box().size;
        let width = battery_fill_width(size.width, readings.battery.percent());

        display
            .fill_solid(
                &Rectangle::new(Point::zero(), Size::new(width, size.height)),
                cfg::COLOR_BATTERY,
            )
            .map_err(Error::Display)
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::draw_target::DrawTargetExt;
    use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

    use super::*;
    use crate::battery::BatteryReading;
    use crate::layout::FaceLayout;
    use crate::regions::testing::{self, at};

    fn filled_pixels(percent: u8) -> usize {
        let frame = FaceLayout::new(testing::SIZE).battery_bar;
        let bar = BatteryBarRegion::new(frame);
        let mut readings = testing::readings();
        readings.battery = BatteryReading::new(percent);

        let mut pixels = testing::pixels(Rgb565::WHITE);
        let mut canvas = testing::canvas(&mut pixels);
        bar.draw(&mut canvas.cropped(&frame), &readings).unwrap();

        // nothing outside the bar row
        assert_eq!(at(&canvas, frame.top_left.x, frame.top_left.y - 1), Rgb565::WHITE);
        assert_eq!(at(&canvas, frame.top_left.x, frame.top_left.y + 1), Rgb565::WHITE);

        (0..testing::WIDTH as i32)
            .filter(|&x| at(&canvas, x, frame.top_left.y) == Rgb565::BLACK)
            .count()
    }

    #[test]
    fn fill_tracks_charge() {
        assert_eq!(filled_pixels(0), 0);
        assert_eq!(filled_pixels(50), 28);
        assert_eq!(filled_pixels(100), 56);
        assert_eq!(filled_pixels(200), 56);
    }
}
