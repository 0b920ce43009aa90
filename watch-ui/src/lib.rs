//! Vertical Dials: an hour scale on the left, a minute scale on the right and
//! a date panel in between. The hands slide along the scales instead of
//! turning.
//!
//! The crate only paints and keeps event state. A host owns the display, the
//! event sources and the timer, and drives a [`WatchFace`]:
//!
//! 1. `WatchFace::new` once, with the display size and current link state;
//! 2. `WatchFace::handle` for every tick, Bluetooth or battery event, and
//!    schedule any returned [`Deferred`] request (see [`settle`]);
//! 3. `WatchFace::render` with fresh [`Readings`] whenever regions are dirty.
#![cfg_attr(not(any(test, feature = "std")), no_std)]

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::pixelcolor::Rgb565;

mod battery;
mod clock;
pub mod config;
mod dispatcher;
mod error;
mod face;
pub mod fonts;
mod format;
mod layout;
mod primitives;
mod regions;
#[cfg(any(test, feature = "std"))]
mod util;

pub trait AppDrawTarget<E>: DrawTarget<Color = Rgb565, Error = E> {}
impl<E, D: DrawTarget<Color = Rgb565, Error = E>> AppDrawTarget<E> for D {}

pub use battery::{battery_fill_width, BatteryReading};
pub use clock::{twelve_hour_index, ClockReading, TimeUnits, MONTH_NAMES, WEEKDAY_NAMES};
pub use dispatcher::{Deferred, Dispatcher, Event, Reaction, Vibes};
pub use error::{DateField, Error};
pub use face::WatchFace;
pub use format::{day_digits, format_day_year, year_digits, DayYearText};
pub use layout::{FaceLayout, Geometry};
pub use primitives::{Facing, Wedge};
pub use regions::{
    BatteryBarRegion, DatePanelRegion, DialRegion, HandsRegion, Readings, Region, RegionId,
    RegionSet, Regions, Side,
};
#[cfg(any(test, feature = "std"))]
pub use util::{delay_ms, settle, settle_into};
