use core::fmt;

/// A calendar value that has no slot in the name tables or the date pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Weekday(u8),
    Month(u8),
    Day(u8),
    Year(i32),
}

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateField::Weekday(v) => write!(f, "weekday {v} not in 0..=6"),
            DateField::Month(v) => write!(f, "month {v} not in 0..=11"),
            DateField::Day(v) => write!(f, "day {v} not in 1..=31"),
            DateField::Year(v) => write!(f, "year {v} not in 0..=9999"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    InvalidDate(DateField),
    Display(E),
    MissingGlyph(char),
    UnsupportedFontColor,
}

impl<E> From<DateField> for Error<E> {
    fn from(field: DateField) -> Self {
        Error::InvalidDate(field)
    }
}

impl<E> From<u8g2_fonts::Error<E>> for Error<E> {
    fn from(e: u8g2_fonts::Error<E>) -> Self {
        match e {
            u8g2_fonts::Error::DisplayError(e) => Error::Display(e),
            u8g2_fonts::Error::GlyphNotFound(c) => Error::MissingGlyph(c),
            u8g2_fonts::Error::BackgroundColorNotSupported => Error::UnsupportedFontColor,
        }
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDate(field) => write!(f, "invalid date: {field}"),
            Error::Display(e) => write!(f, "display error: {e:?}"),
            Error::MissingGlyph(c) => write!(f, "font has no glyph for {c:?}"),
            Error::UnsupportedFontColor => f.write_str("font does not support a background color"),
        }
    }
}
