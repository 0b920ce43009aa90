use fugit::MillisDurationU32;
use log::{debug, info, warn};

use crate::battery::BatteryReading;
use crate::clock::{ClockReading, TimeUnits};
use crate::config as cfg;
use crate::regions::{RegionId, RegionSet};

/// Notifications delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    MinuteTick { units: TimeUnits },
    Bluetooth(bool),
    Battery(BatteryReading),
}

impl Event {
    /// Tick fed back once the clock has settled after a reconnect.
    pub const fn refresh() -> Self {
        Event::MinuteTick {
            units: TimeUnits::DAY,
        }
    }

    /// Tick for a host that polls the clock. Any changed unit counts, so an
    /// hour jump after a time zone change still moves the hands.
    pub fn tick_between(previous: &ClockReading, current: &ClockReading) -> Option<Self> {
        let units = TimeUnits::between(previous, current);
        if units.is_empty() {
            None
        } else {
            Some(Event::MinuteTick { units })
        }
    }
}

/// Haptic feedback provided by the host.
pub trait Vibes {
    fn long_pulse(&mut self);
    fn double_pulse(&mut self);
}

/// Work the host must schedule on its own timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    /// Feed `Event::refresh()` back after `after` has elapsed.
    Refresh { after: MillisDurationU32 },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reaction {
    pub dirty: RegionSet,
    pub deferred: Option<Deferred>,
}

pub struct Dispatcher {
    was_connected: bool,
    setup: bool,
}

impl Dispatcher {
    /// `connected` is the link state peeked from the host at startup.
    pub fn new(connected: bool) -> Self {
        Self {
            was_connected: connected,
            setup: false,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.was_connected
    }

    /// True once a minute tick has scheduled the date panel.
    pub fn is_set_up(&self) -> bool {
        self.setup
    }

    pub fn handle<V: Vibes>(&mut self, event: Event, vibes: &mut V) -> Reaction {
        let mut reaction = Reaction::default();

        match event {
            Event::MinuteTick { units } => {
                reaction.dirty.insert(RegionId::Hands);
                if units.contains(TimeUnits::DAY) || cfg::REDRAW_DATE_EVERY_MINUTE {
                    reaction.dirty.insert(RegionId::DatePanel);
                    self.setup = true;
                }
            }
            Event::Bluetooth(connected) if connected == self.was_connected => {
                debug!("bluetooth still {}", if connected { "up" } else { "down" });
            }
            Event::Bluetooth(false) => {
                info!("bluetooth disconnected");
                self.was_connected = false;
                vibes.long_pulse();
            }
            Event::Bluetooth(true) => {
                info!(
                    "bluetooth connected, refreshing in {} ms",
                    cfg::SETTLE_DELAY.to_millis()
                );
                self.was_connected = true;
                vibes.double_pulse();
                reaction.deferred = Some(Deferred::Refresh {
                    after: cfg::SETTLE_DELAY,
                });
            }
            Event::Battery(battery) => {
                if battery.is_overfull() {
                    warn!("battery reported {}%, clamping", battery.charge_percent);
                }
                reaction.dirty.insert(RegionId::BatteryBar);
            }
        }

        debug!("{:?} -> {:?}", event, reaction);
        reaction
    }
}
