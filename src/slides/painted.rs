use rand::Rng;

use crate::canvas::{Point, Rgba, Shape};
use crate::engine::StepSequence;
use crate::slide::Slide;

const LINE_COUNT: usize = 42;
const LINE_WIDTH: f32 = 8.0;

/// Title, then a burst of random strokes, then a footer line.
pub struct PaintedSlide {
    name: String,
}

impl PaintedSlide {
    pub fn new(number: usize) -> Self {
        Self {
            name: format!("slide #{}", number),
        }
    }
}

impl Slide for PaintedSlide {
    fn name(&self) -> &str {
        &self.name
    }

    fn steps(&self) -> StepSequence {
        let title = self.name.clone();
        StepSequence::new()
            .then(move |stage| stage.write(&title))
            .then(|stage| {
                let w = stage.canvas.width();
                let h = stage.canvas.height();
                let mut rng = rand::rng();
                for _ in 0..LINE_COUNT {
                    let from = Point::new(rng.random_range(0.0..=w), rng.random_range(0.0..=h));
                    let to = Point::new(rng.random_range(0.0..=w), rng.random_range(0.0..=h));
                    // Blue-green tints
                    let color = Rgba::rgb(
                        0x20,
                        rng.random_range(64..=192),
                        rng.random_range(128..=255),
                    );
                    stage.canvas.draw(Shape::Line {
                        from,
                        to,
                        width: LINE_WIDTH,
                        color,
                    });
                }
                stage.canvas.update()
            })
            .then(|stage| stage.write("\r\n\nsopa de cebola"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Progress;
    use crate::testing::Fixture;

    #[test]
    fn reveals_title_strokes_then_footer() {
        let mut fx = Fixture::new(b"");
        let slide = PaintedSlide::new(3);
        let mut run = slide.steps();

        assert_eq!(run.advance(&mut fx.stage).unwrap(), Progress::Suspended);
        assert_eq!(fx.out.contents(), "slide #3");
        assert!(fx.canvas.shapes().is_empty());

        assert_eq!(run.advance(&mut fx.stage).unwrap(), Progress::Suspended);
        let shapes = fx.canvas.shapes();
        assert_eq!(shapes.len(), LINE_COUNT);
        assert_eq!(fx.canvas.frames(), 1);
        for shape in &shapes {
            let Shape::Line { from, to, width, color } = shape else {
                panic!("expected a line, got {shape:?}");
            };
            assert_eq!(*width, LINE_WIDTH);
            assert_eq!(color.r, 0x20);
            assert!((64..=192).contains(&color.g));
            assert!(color.b >= 128);
            for p in [*from, *to] {
                assert!((0.0..=800.0).contains(&p.x));
                assert!((0.0..=600.0).contains(&p.y));
            }
        }

        assert_eq!(run.advance(&mut fx.stage).unwrap(), Progress::Completed);
        assert!(fx.out.contents().ends_with("\r\n\nsopa de cebola"));
    }
}
