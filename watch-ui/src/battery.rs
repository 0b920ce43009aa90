#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatteryReading {
    pub charge_percent: u8,
}

impl BatteryReading {
    pub fn new(charge_percent: u8) -> Self {
        Self { charge_percent }
    }

    pub fn is_overfull(&self) -> bool {
        self.charge_percent > 100
    }

    /// Charge in `0..=100`; anything above is reported as full.
    pub fn percent(&self) -> u8 {
        self.charge_percent.min(100)
    }
}

/// Width of the gauge fill for a bar `width` pixels wide.
pub fn battery_fill_width(width: u32, percent: u8) -> u32 {
    width * u32::from(percent.min(100)) / 100
}
