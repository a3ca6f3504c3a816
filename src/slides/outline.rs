use crate::canvas::{Point, Rgba, Shape};
use crate::engine::StepSequence;
use crate::error::Error;
use crate::projection::{GeoBounds, Projection};
use crate::slide::Slide;

const MARGIN: f32 = 48.0;
const COAST: Rgba = Rgba::rgb(0x20, 0xb0, 0xe0);
const CITY: Rgba = Rgba::rgb(0xf0, 0xc0, 0x30);

// Coarse mainland Portugal outline, (lon, lat)
const OUTLINE: &[(f64, f64)] = &[
    (-8.87, 41.87),
    (-8.17, 42.15),
    (-6.59, 41.95),
    (-6.19, 41.58),
    (-6.93, 41.01),
    (-6.86, 40.27),
    (-7.01, 39.67),
    (-7.54, 39.66),
    (-7.04, 38.88),
    (-7.30, 38.43),
    (-6.95, 38.20),
    (-7.50, 37.57),
    (-7.40, 37.18),
    (-8.99, 37.02),
    (-8.79, 37.95),
    (-9.19, 38.42),
    (-9.50, 38.78),
    (-9.35, 39.36),
    (-8.90, 40.20),
    (-8.65, 41.15),
];

const CITIES: &[(&str, f64, f64)] = &[
    ("Porto", -8.61, 41.15),
    ("Coimbra", -8.43, 40.21),
    ("Lisboa", -9.14, 38.72),
    ("Faro", -7.93, 37.02),
];

/// Map outline first, then the cities on top of it.
pub struct OutlineSlide;

fn projection(width: f32, height: f32) -> Result<Projection, Error> {
    let bounds = GeoBounds::of(OUTLINE)
        .ok_or_else(|| Error::Overlay("empty outline".to_string()))?;
    Ok(Projection::fit(bounds, width, height, MARGIN))
}

impl Slide for OutlineSlide {
    fn name(&self) -> &str {
        "outline"
    }

    fn steps(&self) -> StepSequence {
        StepSequence::new()
            .then(|stage| stage.write("Portugal continental"))
            .then(|stage| {
                let proj = projection(stage.canvas.width(), stage.canvas.height())?;
                stage.canvas.draw(Shape::Polygon {
                    points: proj.project_all(OUTLINE),
                    width: 3.0,
                    color: COAST,
                });
                stage.canvas.update()
            })
            .then(|stage| {
                let proj = projection(stage.canvas.width(), stage.canvas.height())?;
                for &(name, lon, lat) in CITIES {
                    let at = proj.project(lon, lat);
                    stage.canvas.draw(Shape::Point {
                        at,
                        radius: 6.0,
                        color: CITY,
                    });
                    stage.canvas.draw(Shape::Text {
                        at: Point::new(at.x + 10.0, at.y - 10.0),
                        text: name.to_string(),
                        size: 20,
                        color: Rgba::WHITE,
                    });
                }
                stage.canvas.update()?;
                stage.write(&format!("\r\n\n{} cities", CITIES.len()))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Progress;
    use crate::testing::Fixture;

    #[test]
    fn outline_then_cities_inside_margins() {
        let mut fx = Fixture::new(b"");
        let mut run = OutlineSlide.steps();

        assert_eq!(run.advance(&mut fx.stage).unwrap(), Progress::Suspended);
        assert_eq!(run.advance(&mut fx.stage).unwrap(), Progress::Suspended);
        let shapes = fx.canvas.shapes();
        assert_eq!(shapes.len(), 1);
        let Shape::Polygon { points, .. } = &shapes[0] else {
            panic!("expected the outline polygon");
        };
        assert_eq!(points.len(), OUTLINE.len());
        for p in points {
            assert!(p.x >= MARGIN - 0.01 && p.x <= 800.0 - MARGIN + 0.01);
            assert!(p.y >= MARGIN - 0.01 && p.y <= 600.0 - MARGIN + 0.01);
        }

        assert_eq!(run.advance(&mut fx.stage).unwrap(), Progress::Completed);
        assert_eq!(fx.canvas.shapes().len(), 1 + 2 * CITIES.len());
        assert_eq!(fx.canvas.frames(), 2);
        assert!(fx.out.contents().ends_with("4 cities"));
    }
}
