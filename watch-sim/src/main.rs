use std::env;
use std::time::Duration;

use chrono::Local;
use embedded_graphics::geometry::Size;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window,
};
use log::{error, info, warn};
use tokio::sync::mpsc;
use watch_ui::{
    settle_into, BatteryReading, ClockReading, Event, Readings, TimeUnits, Vibes, WatchFace,
};

const DEFAULT_SIZE: Size = Size::new(144, 168);

/// No motor on a desktop.
struct LoggedVibes;

impl Vibes for LoggedVibes {
    fn long_pulse(&mut self) {
        info!("vibe: long pulse");
    }

    fn double_pulse(&mut self) {
        info!("vibe: double pulse");
    }
}

/// `WATCH_SIM_SIZE=WxH`, falls back to the Pebble screen.
fn display_size() -> Size {
    let Ok(value) = env::var("WATCH_SIM_SIZE") else {
        return DEFAULT_SIZE;
    };
    let parsed = value
        .split_once('x')
        .and_then(|(w, h)| Some(Size::new(w.parse().ok()?, h.parse().ok()?)));
    match parsed {
        Some(size) if size.width >= 64 && size.height >= 64 => size,
        _ => {
            warn!("ignoring WATCH_SIM_SIZE={value:?}, expected WxH of at least 64x64");
            DEFAULT_SIZE
        }
    }
}

fn read_clock() -> ClockReading {
    ClockReading::from_datetime(&Local::now())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();

    let size = display_size();
    let mut display = SimulatorDisplay::<Rgb565>::new(size);

    let mut connected = true;
    let mut battery = BatteryReading::new(80);
    let mut face = WatchFace::new(size, connected);
    let mut vibes = LoggedVibes;

    // refreshes coming back from the settle timer
    let (refresh_tx, mut refresh_rx) = mpsc::unbounded_channel();

    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut w = Window::new("Vertical Dials", &output_settings);
    let mut last_clock = read_clock();

    info!("B: bluetooth, Up/Down: battery, T: minute tick");

    'outer: loop {
        let readings = Readings {
            clock: read_clock(),
            battery,
        };
        if let Err(e) = face.render(&mut display, &readings) {
            error!("render failed: {e}");
        }
        w.update(&display);

        let mut events = Vec::new();

        for e in w.events() {
            match e {
                SimulatorEvent::Quit => {
                    break 'outer;
                }
                SimulatorEvent::KeyUp { keycode, .. } => match keycode {
                    Keycode::B => {
                        connected = !connected;
                        events.push(Event::Bluetooth(connected));
                    }
                    Keycode::Up => {
                        battery.charge_percent = battery.charge_percent.saturating_add(10).min(100);
                        events.push(Event::Battery(battery));
                    }
                    Keycode::Down => {
                        battery.charge_percent = battery.charge_percent.saturating_sub(10);
                        events.push(Event::Battery(battery));
                    }
                    Keycode::T => events.push(Event::MinuteTick {
                        units: TimeUnits::MINUTE,
                    }),
                    _ => (),
                },
                _ => (),
            }
        }

        let clock = read_clock();
        if let Some(tick) = Event::tick_between(&last_clock, &clock) {
            events.push(tick);
            last_clock = clock;
        }

        while let Ok(event) = refresh_rx.try_recv() {
            events.push(event);
        }

        for event in events {
            if let Some(deferred) = face.handle(event, &mut vibes) {
                let tx = refresh_tx.clone();
                tokio::spawn(settle_into(deferred, move |event| tx.send(event)));
            }
        }

        tokio::time::sleep(Duration::from_millis(20)).await;
    }
}
