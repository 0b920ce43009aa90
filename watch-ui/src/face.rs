use embedded_graphics::draw_target::DrawTargetExt;
use embedded_graphics::geometry::Size;
use log::{debug, info};

use crate::config as cfg;
use crate::dispatcher::{Deferred, Dispatcher, Event, Vibes};
use crate::error::Error;
use crate::layout::FaceLayout;
use crate::regions::{
    BatteryBarRegion, DatePanelRegion, DialRegion, HandsRegion, Readings, Region, RegionSet,
    Regions, Side,
};
use crate::AppDrawTarget;

/// Owns every region of the face together with the event state. Created
/// once at startup, dropped at shutdown.
pub struct WatchFace {
    layout: FaceLayout,
    /// Bottom to top.
    regions: [Regions; 5],
    dispatcher: Dispatcher,
    dirty: RegionSet,
}

impl WatchFace {
    /// `display` is read once here; `connected` is the current link state.
    pub fn new(display: Size, connected: bool) -> Self {
        let layout = FaceLayout::new(display);
        let geometry = layout.geometry;
        info!(
            "watch face {}x{}, tick space {} margin {}",
            display.width, display.height, geometry.space, geometry.margin
        );

        Self {
            regions: [
                DatePanelRegion::new(layout.date_panel).into(),
                BatteryBarRegion::new(layout.battery_bar).into(),
                DialRegion::new(layout.left_dial, geometry, Side::Left).into(),
                DialRegion::new(layout.right_dial, geometry, Side::Right).into(),
                HandsRegion::new(layout.hands, geometry).into(),
            ],
            layout,
            dispatcher: Dispatcher::new(connected),
            dirty: RegionSet::all(),
        }
    }

    pub fn layout(&self) -> &FaceLayout {
        &self.layout
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn dirty(&self) -> RegionSet {
        self.dirty
    }

    /// Feeds a host event through the dispatcher. A returned request must be
    /// scheduled by the host, see `settle`.
    pub fn handle<V: Vibes>(&mut self, event: Event, vibes: &mut V) -> Option<Deferred> {
        let reaction = self.dispatcher.handle(event, vibes);
        self.dirty.extend(reaction.dirty);
        reaction.deferred
    }

    /// Repaints dirty regions. Each dirty frame is cleared to the background
    /// and every region overlapping it is painted again, clipped to it.
    pub fn render<D: AppDrawTarget<E>, E>(
        &mut self,
        display: &mut D,
        readings: &Readings,
    ) -> Result<(), Error<E>> {
        let dirty = core::mem::take(&mut self.dirty);
        if dirty.is_empty() {
            return Ok(());
        }

        let result = self.paint(display, readings, dirty);
        if result.is_err() {
            self.dirty.extend(dirty);
        }
        result
    }

    fn paint<D: AppDrawTarget<E>, E>(
        &self,
        display: &mut D,
        readings: &Readings,
        dirty: RegionSet,
    ) -> Result<(), Error<E>> {
        for damaged in self.regions.iter().filter(|r| dirty.contains(r.id())) {
            let damage = damaged.frame();
            debug!("redraw {:?} at {:?}", damaged.id(), damage);

            display
                .fill_solid(&damage, cfg::COLOR_BACKGROUND)
                .map_err(Error::Display)?;

            let mut clipped = display.clipped(&damage);
            for layer in self.regions.iter() {
                let frame = layer.frame();
                if frame.intersection(&damage).is_zero_sized() {
                    continue;
                }
                layer.draw(&mut clipped.cropped(&frame), readings)?;
            }
        }
        Ok(())
    }
}

impl Drop for WatchFace {
    fn drop(&mut self) {
        info!("watch face torn down");
    }
}
