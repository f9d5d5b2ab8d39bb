//! ---
//! planar_section: "01-geometry-core"
//! planar_subsection: "tests"
//! planar_type: "source"
//! planar_scope: "test"
//! planar_description: "Shape model behavior tests."
//! planar_version: "v0.1.0"
//! planar_owner: "tbd"
//! ---
use planar_core::{
    BoundingBox, Circle, Line, Point2, Polygon, Rectangle, RegularPolygon, Shape, Triangle,
};

#[test]
fn line_measurements() {
    let line = Line::new(Point2::new(1.0, 1.0), Point2::new(3.0, 3.0));

    assert_eq!(line.length(), 8.0_f64.sqrt());
    assert_eq!(line.direction(), Point2::new(2.0, 2.0));
    assert_eq!(line.bounding_box(), BoundingBox::new(1.0, 1.0, 3.0, 3.0));
    assert_eq!(line.bounding_box().height(), 2.0);
    assert_eq!(line.center(), Point2::new(2.0, 2.0));
    assert_eq!(line.vertices(), [line.start, line.end]);
}

#[test]
fn rectangle_measurements() {
    let rect = Rectangle::new(Point2::new(0.0, 0.0), 10.0, 20.0);

    assert_eq!(rect.area(), 200.0);
    assert_eq!(rect.bounding_box(), BoundingBox::new(0.0, 0.0, 10.0, 20.0));
    assert_eq!(rect.bounding_box().height(), 20.0);
    assert_eq!(rect.center(), Point2::new(5.0, 10.0));
    assert_eq!(
        rect.vertices(),
        [
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 20.0),
            Point2::new(0.0, 20.0),
        ]
    );
}

#[test]
fn triangle_measurements() {
    let tri = Triangle::new(
        Point2::new(0.0, 0.0),
        Point2::new(2.0, 0.0),
        Point2::new(1.0, 1.0),
    );

    assert_eq!(tri.area(), 1.0);
    assert_eq!(tri.bounding_box(), BoundingBox::new(0.0, 0.0, 2.0, 1.0));
    assert_eq!(tri.bounding_box().height(), 1.0);
    assert_eq!(tri.center(), Point2::new(1.0, 1.0 / 3.0));
}

#[test]
fn regular_polygon_vertices_start_on_positive_x_axis() {
    let poly = RegularPolygon::new(Point2::new(0.0, 0.0), 2.0, 4);
    let vertices = poly.vertices();
    assert_eq!(vertices.len(), 4);
    assert!((vertices[0].x - 2.0).abs() < 1e-12);
    assert!(vertices[0].y.abs() < 1e-12);
    // Every vertex sits on the circumscribed circle.
    for v in &vertices {
        assert!((v.length() - 2.0).abs() < 1e-12);
    }
}

#[test]
fn circle_bounding_box_spans_diameter() {
    let circle = Circle::new(Point2::new(30.0, 30.0), 10.0);
    assert_eq!(
        circle.bounding_box(),
        BoundingBox::new(20.0, 20.0, 40.0, 40.0)
    );
    assert_eq!(circle.bounding_box().height(), 20.0);
}

#[test]
fn shape_accessors_dispatch() {
    let shapes = vec![
        Shape::Line(Line::new(Point2::new(0.0, 0.0), Point2::new(2.0, 2.0))),
        Shape::Circle(Circle::new(Point2::new(0.0, 0.0), 1.0)),
        Shape::Polygon(Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(2.0, 3.0),
        ])),
    ];

    assert_eq!(shapes[0].kind(), "line");
    assert_eq!(shapes[1].kind(), "circle");
    assert_eq!(shapes[2].kind(), "polygon");
    assert_eq!(shapes[2].center(), Point2::new(2.0, 1.0));
    assert_eq!(shapes[1].vertices().len(), Circle::DEFAULT_VERTEX_SAMPLES);
}

#[test]
fn scene_roundtrips_through_json() {
    let scene = vec![
        Shape::Triangle(Triangle::new(
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(1.0, 1.0),
        )),
        Shape::RegularPolygon(RegularPolygon::new(Point2::new(5.0, 5.0), 3.0, 6)),
        Shape::Rectangle(Rectangle::new(Point2::new(-1.0, -1.0), 2.0, 2.0)),
    ];
    let json = serde_json::to_string_pretty(&scene).unwrap();
    let back: Vec<Shape> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, scene);
}
