//! Built-in demo deck.

mod outline;
mod painted;

pub use outline::OutlineSlide;
pub use painted::PaintedSlide;

use crate::slide::Slide;

pub fn deck() -> Vec<Box<dyn Slide>> {
    vec![
        Box::new(PaintedSlide::new(1)),
        Box::new(OutlineSlide),
        Box::new(PaintedSlide::new(2)),
    ]
}
