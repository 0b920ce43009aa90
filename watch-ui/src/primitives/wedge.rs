use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::Point;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::primitives::{Primitive, PrimitiveStyle, Styled, Triangle};
use embedded_graphics::Drawable;

/// Half height of the wedge base.
pub const WEDGE_HALF_BASE: i32 = 5;
pub const WEDGE_LENGTH: i32 = 17;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Right,
    /// Right-facing shape turned half a revolution.
    Left,
}

/// Filled triangular hand: base on `anchor`, tip `WEDGE_LENGTH` pixels away.
pub struct Wedge {
    triangle: Styled<Triangle, PrimitiveStyle<Rgb565>>,
}

impl Wedge {
    pub fn new(anchor: Point, facing: Facing, color: Rgb565) -> Self {
        let sx = match facing {
            Facing::Right => 1,
            Facing::Left => -1,
        };

        Self {
            triangle: Triangle::new(
                anchor + Point::new(0, -WEDGE_HALF_BASE * sx),
                anchor + Point::new(WEDGE_LENGTH * sx, 0),
                anchor + Point::new(0, WEDGE_HALF_BASE * sx),
            )
            .into_styled(PrimitiveStyle::with_fill(color)),
        }
    }

    pub fn tip(&self) -> Point {
        self.triangle.primitive.vertices[1]
    }
}

impl Drawable for Wedge {
    type Color = Rgb565;
    type Output = ();

    fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        self.triangle.draw(target)?;
        Ok(())
    }
}
