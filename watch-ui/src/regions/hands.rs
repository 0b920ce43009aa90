use embedded_graphics::geometry::Point;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::Drawable;

use super::{Readings, Region, RegionId};
use crate::config as cfg;
use crate::error::Error;
use crate::layout::Geometry;
use crate::primitives::{Facing, Wedge};
use crate::AppDrawTarget;

/// Hour and minute markers sliding along the dials. Transparent apart from
/// the two wedges.
pub struct HandsRegion {
    frame: Rectangle,
    geometry: Geometry,
}

impl HandsRegion {
    pub fn new(frame: Rectangle, geometry: Geometry) -> Self {
        Self { frame, geometry }
    }

    pub fn hour_anchor(&self, hour: u8) -> Point {
        let height = self.frame.size.height as i32;
        Point::new(-1, self.geometry.hour_hand_y(height, hour))
    }

    pub fn minute_anchor(&self, minute: u8) -> Point {
        let height = self.frame.size.height as i32;
        Point::new(
            self.frame.size.width as i32,
            self.geometry.minute_hand_y(height, minute),
        )
    }
}

impl Region for HandsRegion {
    fn id(&self) -> RegionId {
        RegionId::Hands
    }

    fn frame(&self) -> Rectangle {
        self.frame
    }

    fn draw<D: AppDrawTarget<E>, E>(
        &self,
        display: &mut D,
        readings: &Readings,
    ) -> Result<(), Error<E>> {
        let clock = &readings.clock;

        Wedge::new(self.hour_anchor(clock.hour), Facing::Right, cfg::COLOR_HAND)
            .draw(display)
            .map_err(Error::Display)?;
        Wedge::new(
            self.minute_anchor(clock.minute),
            Facing::Left,
            cfg::COLOR_HAND,
        )
        .draw(display)
        .map_err(Error::Display)?;

        Ok(())
    }
}
