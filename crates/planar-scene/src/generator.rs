//! ---
//! planar_section: "03-scene-synthesis"
//! planar_subsection: "module"
//! planar_type: "source"
//! planar_scope: "code"
//! planar_description: "Randomized scene synthesis."
//! planar_version: "v0.1.0"
//! planar_owner: "tbd"
//! ---
use planar_core::{
    Circle, GeometryError, Line, Point2, Rectangle, RegularPolygon, Shape, Triangle,
};
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Coordinate and size ranges the generator draws from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GeneratorRanges {
    pub min_coord: f64,
    pub max_coord: f64,
    pub min_size: f64,
    pub max_size: f64,
}

impl Default for GeneratorRanges {
    fn default() -> Self {
        Self {
            min_coord: -100.0,
            max_coord: 100.0,
            min_size: 1.0,
            max_size: 20.0,
        }
    }
}

/// Deterministic random shape source. Identical seeds and ranges produce
/// identical scenes.
#[derive(Debug)]
pub struct ShapeGenerator {
    rng: StdRng,
    coord: Uniform<f64>,
    size: Uniform<f64>,
    sides: Uniform<u32>,
    kind: Uniform<u32>,
}

impl ShapeGenerator {
    pub fn new(ranges: GeneratorRanges, seed: u64) -> Result<Self, GeometryError> {
        if ranges.min_coord >= ranges.max_coord {
            return Err(GeometryError::InvalidInput("coordinate range is empty"));
        }
        if ranges.min_size >= ranges.max_size {
            return Err(GeometryError::InvalidInput("size range is empty"));
        }

        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            coord: Uniform::new(ranges.min_coord, ranges.max_coord),
            size: Uniform::new(ranges.min_size, ranges.max_size),
            sides: Uniform::new_inclusive(3, 12),
            kind: Uniform::new_inclusive(0, 4),
        })
    }

    pub fn next_shape(&mut self) -> Shape {
        let anchor = Point2::new(self.coord.sample(&mut self.rng), self.coord.sample(&mut self.rng));
        let size = self.size.sample(&mut self.rng);

        match self.kind.sample(&mut self.rng) {
            0 => Shape::Line(Line::new(
                anchor,
                Point2::new(anchor.x + size, anchor.y + size),
            )),
            1 => Shape::Triangle(Triangle::new(
                anchor,
                Point2::new(anchor.x + size, anchor.y),
                Point2::new(anchor.x + size / 2.0, anchor.y + size),
            )),
            2 => Shape::Rectangle(Rectangle::new(anchor, size, size * 0.8)),
            3 => {
                let sides = self.sides.sample(&mut self.rng);
                Shape::RegularPolygon(RegularPolygon::new(anchor, size, sides))
            }
            _ => Shape::Circle(Circle::new(anchor, size)),
        }
    }

    pub fn generate(&mut self, count: usize) -> Vec<Shape> {
        let shapes = (0..count).map(|_| self.next_shape()).collect::<Vec<_>>();
        debug!(count = shapes.len(), "scene generated");
        shapes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_seeds_produce_identical_scenes() {
        let ranges = GeneratorRanges::default();
        let mut first = ShapeGenerator::new(ranges, 20).unwrap();
        let mut second = ShapeGenerator::new(ranges, 20).unwrap();
        assert_eq!(first.generate(25), second.generate(25));
    }

    #[test]
    fn different_seeds_diverge() {
        let ranges = GeneratorRanges::default();
        let mut first = ShapeGenerator::new(ranges, 1).unwrap();
        let mut second = ShapeGenerator::new(ranges, 2).unwrap();
        assert_ne!(first.generate(25), second.generate(25));
    }

    #[test]
    fn shapes_respect_the_coordinate_range() {
        let ranges = GeneratorRanges {
            min_coord: -50.0,
            max_coord: 50.0,
            min_size: 5.0,
            max_size: 25.0,
        };
        let mut generator = ShapeGenerator::new(ranges, 7).unwrap();
        for shape in generator.generate(50) {
            let bbox = shape.bounding_box();
            // Anchors stay in range; extents may stick out by one size.
            assert!(bbox.min_x >= ranges.min_coord - ranges.max_size);
            assert!(bbox.max_x <= ranges.max_coord + ranges.max_size);
        }
    }

    #[test]
    fn empty_ranges_are_rejected() {
        let mut ranges = GeneratorRanges::default();
        ranges.max_coord = ranges.min_coord;
        assert_eq!(
            ShapeGenerator::new(ranges, 0).unwrap_err(),
            GeometryError::InvalidInput("coordinate range is empty")
        );

        let mut ranges = GeneratorRanges::default();
        ranges.max_size = 0.0;
        assert!(ShapeGenerator::new(ranges, 0).is_err());
    }

    #[test]
    fn generator_covers_every_shape_kind() {
        let mut generator = ShapeGenerator::new(GeneratorRanges::default(), 1234).unwrap();
        let shapes = generator.generate(200);
        for kind in ["line", "triangle", "rectangle", "regular-polygon", "circle"] {
            assert!(
                shapes.iter().any(|s| s.kind() == kind),
                "missing kind {kind}"
            );
        }
    }
}
