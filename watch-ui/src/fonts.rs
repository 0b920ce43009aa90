use u8g2_fonts::fonts::{u8g2_font_profont15_mr, u8g2_font_profont17_mr};
use u8g2_fonts::FontRenderer;

pub type TinyFont = u8g2_font_profont17_mr;
pub type TinierFont = u8g2_font_profont15_mr;
pub const TINY_FONT: FontRenderer = FontRenderer::new::<TinyFont>();
