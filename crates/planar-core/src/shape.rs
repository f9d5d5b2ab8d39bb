//! ---
//! planar_section: "01-geometry-core"
//! planar_subsection: "module"
//! planar_type: "source"
//! planar_scope: "code"
//! planar_description: "Geometric primitives and shape model."
//! planar_version: "v0.1.0"
//! planar_owner: "tbd"
//! ---
use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bbox::BoundingBox;
use crate::point::Point2;

/// Column-separated vertex coordinates for line plotting. Closed outlines
/// repeat their first vertex at the end so consecutive pairs form the full
/// boundary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Polyline {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            x: Vec::with_capacity(n),
            y: Vec::with_capacity(n),
        }
    }

    pub fn push(&mut self, p: Point2) {
        self.x.push(p.x);
        self.y.push(p.y);
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = Point2> + '_ {
        self.x
            .iter()
            .zip(self.y.iter())
            .map(|(&x, &y)| Point2::new(x, y))
    }
}

fn closed_polyline(vertices: &[Point2]) -> Polyline {
    let mut line = Polyline::with_capacity(vertices.len() + 1);
    for &v in vertices {
        line.push(v);
    }
    if let Some(&first) = vertices.first() {
        line.push(first);
    }
    line
}

fn wrap_edges(vertices: &[Point2]) -> Vec<Line> {
    if vertices.len() < 2 {
        return Vec::new();
    }
    let mut edges = Vec::with_capacity(vertices.len());
    let mut j = vertices.len() - 1;
    for (i, &v) in vertices.iter().enumerate() {
        edges.push(Line::new(vertices[j], v));
        j = i;
    }
    edges
}

/// A line segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Point2,
    pub end: Point2,
}

impl Line {
    pub const fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(self.end)
    }

    pub fn direction(&self) -> Point2 {
        self.end - self.start
    }

    pub fn center(&self) -> Point2 {
        (self.start + self.end) / 2.0
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(
            self.start.x.min(self.end.x),
            self.start.y.min(self.end.y),
            self.start.x.max(self.end.x),
            self.start.y.max(self.end.y),
        )
    }

    pub fn vertices(&self) -> [Point2; 2] {
        [self.start, self.end]
    }

    pub fn polyline(&self) -> Polyline {
        let mut line = Polyline::with_capacity(2);
        line.push(self.start);
        line.push(self.end);
        line
    }
}

/// A triangle given by its three vertices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub a: Point2,
    pub b: Point2,
    pub c: Point2,
}

impl Triangle {
    pub const fn new(a: Point2, b: Point2, c: Point2) -> Self {
        Self { a, b, c }
    }

    pub fn area(&self) -> f64 {
        ((self.b - self.a).cross(self.c - self.a) / 2.0).abs()
    }

    pub fn center(&self) -> Point2 {
        (self.a + self.b + self.c) / 3.0
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(self.vertices()).expect("triangle has vertices")
    }

    pub fn vertices(&self) -> [Point2; 3] {
        [self.a, self.b, self.c]
    }

    pub fn edges(&self) -> [Line; 3] {
        [
            Line::new(self.a, self.b),
            Line::new(self.b, self.c),
            Line::new(self.c, self.a),
        ]
    }

    pub fn polyline(&self) -> Polyline {
        closed_polyline(&self.vertices())
    }
}

/// An axis-aligned rectangle anchored at its bottom-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub bottom_left: Point2,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub const fn new(bottom_left: Point2, width: f64, height: f64) -> Self {
        Self {
            bottom_left,
            width,
            height,
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn center(&self) -> Point2 {
        self.bottom_left + Point2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(
            self.bottom_left.x,
            self.bottom_left.y,
            self.bottom_left.x + self.width,
            self.bottom_left.y + self.height,
        )
    }

    /// Corners in counter-clockwise order starting at the anchor.
    pub fn vertices(&self) -> [Point2; 4] {
        let bl = self.bottom_left;
        [
            bl,
            bl + Point2::new(self.width, 0.0),
            bl + Point2::new(self.width, self.height),
            bl + Point2::new(0.0, self.height),
        ]
    }

    pub fn edges(&self) -> [Line; 4] {
        let [a, b, c, d] = self.vertices();
        [
            Line::new(a, b),
            Line::new(b, c),
            Line::new(c, d),
            Line::new(d, a),
        ]
    }

    pub fn polyline(&self) -> Polyline {
        closed_polyline(&self.vertices())
    }
}

/// A regular polygon inscribed in a circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegularPolygon {
    pub center: Point2,
    pub radius: f64,
    pub sides: u32,
}

impl RegularPolygon {
    pub const fn new(center: Point2, radius: f64, sides: u32) -> Self {
        Self {
            center,
            radius,
            sides,
        }
    }

    pub fn center(&self) -> Point2 {
        self.center
    }

    /// Vertices at angles `2*pi*i/sides` starting from angle zero.
    pub fn vertices(&self) -> Vec<Point2> {
        sample_circle(self.center, self.radius, self.sides as usize)
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(self.vertices())
            .unwrap_or_else(|| BoundingBox::from_points([self.center]).expect("center point"))
    }

    pub fn edges(&self) -> Vec<Line> {
        wrap_edges(&self.vertices())
    }

    pub fn polyline(&self) -> Polyline {
        closed_polyline(&self.vertices())
    }
}

/// A circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point2,
    pub radius: f64,
}

impl Circle {
    pub const DEFAULT_VERTEX_SAMPLES: usize = 30;
    pub const DEFAULT_OUTLINE_SAMPLES: usize = 100;

    pub const fn new(center: Point2, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn center(&self) -> Point2 {
        self.center
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.center.x + self.radius,
            self.center.y + self.radius,
        )
    }

    /// Boundary sampled like a regular polygon with `n` sides.
    pub fn vertices(&self, n: usize) -> Vec<Point2> {
        sample_circle(self.center, self.radius, n)
    }

    pub fn polyline(&self, n: usize) -> Polyline {
        closed_polyline(&self.vertices(n))
    }
}

fn sample_circle(center: Point2, radius: f64, n: usize) -> Vec<Point2> {
    let mut points = Vec::with_capacity(n);
    for i in 0..n {
        let angle = 2.0 * PI * i as f64 / n as f64;
        points.push(Point2::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        ));
    }
    points
}

/// An arbitrary polygon. The bounding box is computed once at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Point2>", into = "Vec<Point2>")]
pub struct Polygon {
    points: Vec<Point2>,
    bbox: BoundingBox,
}

impl Polygon {
    pub fn new(points: Vec<Point2>) -> Self {
        let bbox = BoundingBox::from_points(points.iter().copied()).unwrap_or_default();
        Self { points, bbox }
    }

    /// Vertex mean; the origin for an empty polygon.
    pub fn center(&self) -> Point2 {
        if self.points.is_empty() {
            return Point2::default();
        }
        let sum = self
            .points
            .iter()
            .fold(Point2::default(), |acc, &p| acc + p);
        sum / self.points.len() as f64
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.bbox
    }

    pub fn vertices(&self) -> &[Point2] {
        &self.points
    }

    pub fn edges(&self) -> Vec<Line> {
        wrap_edges(&self.points)
    }

    pub fn polyline(&self) -> Polyline {
        closed_polyline(&self.points)
    }
}

impl From<Vec<Point2>> for Polygon {
    fn from(points: Vec<Point2>) -> Self {
        Polygon::new(points)
    }
}

impl From<Polygon> for Vec<Point2> {
    fn from(polygon: Polygon) -> Self {
        polygon.points
    }
}

/// Sum type over every supported shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Line(Line),
    Triangle(Triangle),
    Rectangle(Rectangle),
    RegularPolygon(RegularPolygon),
    Circle(Circle),
    Polygon(Polygon),
}

impl Shape {
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Line(_) => "line",
            Shape::Triangle(_) => "triangle",
            Shape::Rectangle(_) => "rectangle",
            Shape::RegularPolygon(_) => "regular-polygon",
            Shape::Circle(_) => "circle",
            Shape::Polygon(_) => "polygon",
        }
    }

    pub fn center(&self) -> Point2 {
        match self {
            Shape::Line(line) => line.center(),
            Shape::Triangle(tri) => tri.center(),
            Shape::Rectangle(rect) => rect.center(),
            Shape::RegularPolygon(poly) => poly.center(),
            Shape::Circle(circle) => circle.center(),
            Shape::Polygon(poly) => poly.center(),
        }
    }

    pub fn bounding_box(&self) -> BoundingBox {
        match self {
            Shape::Line(line) => line.bounding_box(),
            Shape::Triangle(tri) => tri.bounding_box(),
            Shape::Rectangle(rect) => rect.bounding_box(),
            Shape::RegularPolygon(poly) => poly.bounding_box(),
            Shape::Circle(circle) => circle.bounding_box(),
            Shape::Polygon(poly) => poly.bounding_box(),
        }
    }

    pub fn vertices(&self) -> Vec<Point2> {
        match self {
            Shape::Line(line) => line.vertices().to_vec(),
            Shape::Triangle(tri) => tri.vertices().to_vec(),
            Shape::Rectangle(rect) => rect.vertices().to_vec(),
            Shape::RegularPolygon(poly) => poly.vertices(),
            Shape::Circle(circle) => circle.vertices(Circle::DEFAULT_VERTEX_SAMPLES),
            Shape::Polygon(poly) => poly.vertices().to_vec(),
        }
    }

    pub fn polyline(&self) -> Polyline {
        match self {
            Shape::Line(line) => line.polyline(),
            Shape::Triangle(tri) => tri.polyline(),
            Shape::Rectangle(rect) => rect.polyline(),
            Shape::RegularPolygon(poly) => poly.polyline(),
            Shape::Circle(circle) => circle.polyline(Circle::DEFAULT_OUTLINE_SAMPLES),
            Shape::Polygon(poly) => poly.polyline(),
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line({}, {})", self.start, self.end)
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Triangle({}, {}, {})", self.a, self.b, self.c)
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rectangle(bottom_left={}, w={:.2}, h={:.2})",
            self.bottom_left, self.width, self.height
        )
    }
}

impl fmt::Display for RegularPolygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RegularPolygon(center={}, r={:.2}, sides={})",
            self.center, self.radius, self.sides
        )
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle(center={}, r={:.2})", self.center, self.radius)
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polygon[{} points]: [", self.points.len())?;
        for p in &self.points {
            write!(f, "{} ", p)?;
        }
        write!(f, "]")
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Line(line) => line.fmt(f),
            Shape::Triangle(tri) => tri.fmt(f),
            Shape::Rectangle(rect) => rect.fmt(f),
            Shape::RegularPolygon(poly) => poly.fmt(f),
            Shape::Circle(circle) => circle.fmt(f),
            Shape::Polygon(poly) => poly.fmt(f),
        }
    }
}
