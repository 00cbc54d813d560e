pub mod circle;
pub mod polygon;

pub use circle::Circle;
pub use polygon::Polygon;

/// Local-space geometry of a collider.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Polygon(Polygon),
}
