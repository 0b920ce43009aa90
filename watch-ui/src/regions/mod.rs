mod battery_bar;
mod date_panel;
mod dial;
mod hands;

pub use battery_bar::BatteryBarRegion;
pub use date_panel::DatePanelRegion;
pub use dial::{DialRegion, Side};
use embedded_graphics::primitives::Rectangle;
use enum_dispatch::enum_dispatch;
pub use hands::HandsRegion;

use crate::battery::BatteryReading;
use crate::clock::ClockReading;
use crate::error::Error;
use crate::AppDrawTarget;

/// Everything a region may read while painting. The host samples it right
/// before `WatchFace::render`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Readings {
    pub clock: ClockReading,
    pub battery: BatteryReading,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionId {
    DatePanel,
    BatteryBar,
    LeftDial,
    RightDial,
    Hands,
}

impl RegionId {
    /// Paint order, bottom first.
    pub const ALL: [RegionId; 5] = [
        RegionId::DatePanel,
        RegionId::BatteryBar,
        RegionId::LeftDial,
        RegionId::RightDial,
        RegionId::Hands,
    ];

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Regions waiting for the next render pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegionSet(u8);

impl RegionSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn all() -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < RegionId::ALL.len() {
            bits |= RegionId::ALL[i].bit();
            i += 1;
        }
        Self(bits)
    }

    pub fn insert(&mut self, id: RegionId) {
        self.0 |= id.bit();
    }

    pub fn extend(&mut self, other: RegionSet) {
        self.0 |= other.0;
    }

    pub const fn contains(&self, id: RegionId) -> bool {
        self.0 & id.bit() != 0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(self) -> impl Iterator<Item = RegionId> {
        RegionId::ALL.into_iter().filter(move |id| self.contains(*id))
    }
}

impl From<RegionId> for RegionSet {
    fn from(id: RegionId) -> Self {
        Self(id.bit())
    }
}

/// A layer of the face. `draw` receives a target cropped to `frame()`, so
/// coordinates are local to the region.
#[enum_dispatch]
pub trait Region {
    fn id(&self) -> RegionId;
    fn frame(&self) -> Rectangle;
    fn draw<D: AppDrawTarget<E>, E>(
        &self,
        display: &mut D,
        readings: &Readings,
    ) -> Result<(), Error<E>>;
}

#[enum_dispatch(Region)]
pub enum Regions {
    Dial(DialRegion),
    Hands(HandsRegion),
    DatePanel(DatePanelRegion),
    BatteryBar(BatteryBarRegion),
}
