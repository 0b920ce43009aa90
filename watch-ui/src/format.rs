use heapless::String;

use crate::error::DateField;

/// `DD, YYYY`
pub type DayYearText = String<8>;

pub fn day_digits(day: u8) -> Result<[u8; 2], DateField> {
    if !(1..=31).contains(&day) {
        return Err(DateField::Day(day));
    }
    Ok([day / 10, day % 10])
}

pub fn year_digits(year: i32) -> Result<[u8; 4], DateField> {
    if !(0..=9999).contains(&year) {
        return Err(DateField::Year(year));
    }
    Ok([
        (year / 1000) as u8,
        (year / 100 % 10) as u8,
        (year / 10 % 10) as u8,
        (year % 10) as u8,
    ])
}

/// Builds the day/year line one digit at a time so nothing can spill past
/// the eight characters.
pub fn format_day_year(day: u8, year: i32) -> Result<DayYearText, DateField> {
    let [d1, d0] = day_digits(day)?;
    let [y3, y2, y1, y0] = year_digits(year)?;
    let digit = |d: u8| char::from(b'0' + d);

    Ok([
        digit(d1),
        digit(d0),
        ',',
        ' ',
        digit(y3),
        digit(y2),
        digit(y1),
        digit(y0),
    ]
    .into_iter()
    .collect())
}
