use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::Drawable;
use embedded_text::alignment::HorizontalAlignment;
use embedded_text::style::{HeightMode, TextBoxStyleBuilder};
use embedded_text::TextBox;
use u8g2_fonts::U8g2TextStyle;

use super::{Readings, Region, RegionId};
use crate::config as cfg;
use crate::error::Error;
use crate::fonts::TinierFont;
use crate::format::format_day_year;
use crate::layout::panel_text_top;
use crate::AppDrawTarget;

const LINE_PITCH: i32 = 20;

pub struct DatePanelRegion {
    frame: Rectangle,
}

impl DatePanelRegion {
    pub fn new(frame: Rectangle) -> Self {
        Self { frame }
    }
}

impl Region for DatePanelRegion {
    fn id(&self) -> RegionId {
        RegionId::DatePanel
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
        // validate before touching the panel so a bad reading leaves it intact
        let weekday = clock.weekday_name()?;
        let month = clock.month_name()?;
        let day_year = format_day_year(clock.day, clock.year)?;

        let bounds = display.bounding_box();
        display
            .fill_solid(&bounds, cfg::COLOR_PANEL)
            .map_err(Error::Display)?;

        let top = panel_text_top(bounds.size.height as i32);
        for (row, line) in [weekday, month, day_year.as_str()].into_iter().enumerate() {
            let origin = Point::new(0, top + row as i32 * LINE_PITCH);
            let character_style = U8g2TextStyle::new(TinierFont {}, cfg::COLOR_PANEL_TEXT);
            let textbox_style = TextBoxStyleBuilder::new()
                .height_mode(HeightMode::FitToText)
                .alignment(HorizontalAlignment::Center)
                .build();
            TextBox::with_textbox_style(
                line,
                Rectangle::new(origin, Size::new(bounds.size.width, 10)),
                character_style,
                textbox_style,
            )
            .draw(display)
            .map_err(Error::Display)?;
        }

        Ok(())
    }
}
