mod wedge;

pub use wedge::{Facing, Wedge};
