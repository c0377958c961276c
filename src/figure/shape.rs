//! Figure kinds, their attributes, extents and markup

use std::fmt;

use crate::term::{Function, Symbol};

use super::error::FigureError;
use super::geometry::{BoundingBox, Point};

/// An attribute value: the single argument of a term like `fill("red")` or `r(3)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scalar {
    Text(String),
    Number(i32),
}

impl Scalar {
    /// Convert a solver symbol, rejecting anything but strings and numbers
    pub fn from_symbol(symbol: &Symbol) -> Option<Self> {
        match symbol {
            Symbol::String(s) => Some(Scalar::Text(s.clone())),
            Symbol::Number(n) => Some(Scalar::Number(*n)),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => write!(f, "{}", s),
            Scalar::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Named attribute values in first-insertion order
///
/// Inserting a name that is already present replaces its value but keeps
/// its original position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Attributes {
    entries: Vec<(String, Scalar)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Scalar) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Scalar> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Scalar)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }
}

/// The registered figure kinds
///
/// The name of each kind is both the shape name expected in draw facts and
/// the SVG element it is emitted as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Rect,
    Line,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Rect, ShapeKind::Line];

    /// Look up the figure kind for a shape name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Rect => "rect",
            ShapeKind::Line => "line",
        }
    }
}

/// Validated geometry of a figure, one case per kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Geometry {
    Circle { cx: i64, cy: i64, r: i64 },
    Rect { x: i64, y: i64, width: i64, height: i64 },
    Line { x1: i64, y1: i64, x2: i64, y2: i64 },
}

impl Geometry {
    /// Read the geometry of `kind` out of its attributes
    pub fn from_attributes(kind: ShapeKind, attributes: &Attributes) -> Result<Self, FigureError> {
        let get = |name: &str| number(kind, attributes, name);
        Ok(match kind {
            ShapeKind::Circle => Geometry::Circle {
                cx: get("cx")?,
                cy: get("cy")?,
                r: get("r")?,
            },
            ShapeKind::Rect => Geometry::Rect {
                x: get("x")?,
                y: get("y")?,
                width: get("width")?,
                height: get("height")?,
            },
            ShapeKind::Line => Geometry::Line {
                x1: get("x1")?,
                y1: get("y1")?,
                x2: get("x2")?,
                y2: get("y2")?,
            },
        })
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Geometry::Circle { .. } => ShapeKind::Circle,
            Geometry::Rect { .. } => ShapeKind::Rect,
            Geometry::Line { .. } => ShapeKind::Line,
        }
    }

    pub fn bounding_box(&self) -> BoundingBox {
        match *self {
            Geometry::Circle { cx, cy, r } => {
                BoundingBox::new(Point::new(cx - r, cy - r), Point::new(cx + r, cy + r))
            }
            Geometry::Rect {
                x,
                y,
                width,
                height,
            } => BoundingBox::new(Point::new(x, y), Point::new(x + width, y + height)),
            Geometry::Line { x1, y1, x2, y2 } => BoundingBox::new(
                Point::new(x1.min(x2), y1.min(y2)),
                Point::new(x1.max(x2), y1.max(y2)),
            ),
        }
    }
}

fn number(kind: ShapeKind, attributes: &Attributes, name: &str) -> Result<i64, FigureError> {
    match attributes.get(name) {
        Some(Scalar::Number(n)) => Ok(i64::from(*n)),
        Some(Scalar::Text(s)) => Err(FigureError::NotANumber {
            shape: kind.name().to_string(),
            attribute: name.to_string(),
            value: s.clone(),
        }),
        None => Err(FigureError::missing(kind.name(), name)),
    }
}

/// A drawable figure: its validated geometry plus every attribute it was given
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub geometry: Geometry,
    pub attributes: Attributes,
}

impl Figure {
    /// Build a figure from attributes, failing if the kind's geometry is incomplete
    pub fn new(kind: ShapeKind, attributes: Attributes) -> Result<Self, FigureError> {
        let geometry = Geometry::from_attributes(kind, &attributes)?;
        Ok(Self {
            geometry,
            attributes,
        })
    }

    /// Build a figure from a shape term like `circle(cx(5),cy(5),r(2),fill("red"))`
    pub fn from_symbol(symbol: &Symbol) -> Result<Self, FigureError> {
        let shape = symbol.as_function().ok_or_else(|| FigureError::NotAShape {
            symbol: symbol.to_string(),
        })?;
        let kind =
            ShapeKind::from_name(&shape.name).ok_or_else(|| FigureError::unknown_shape(&shape.name))?;
        let attributes = read_attributes(shape)?;
        Self::new(kind, attributes)
    }

    pub fn kind(&self) -> ShapeKind {
        self.geometry.kind()
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.geometry.bounding_box()
    }

    /// Self-closing SVG element carrying every attribute
    ///
    /// Values are written verbatim, without XML escaping.
    pub fn to_svg(&self) -> String {
        let attrs = self
            .attributes
            .iter()
            .map(|(name, value)| format!(r#"{}="{}""#, name, value))
            .collect::<Vec<_>>()
            .join(" ");
        format!("<{} {}/>", self.kind().name(), attrs)
    }
}

fn read_attributes(shape: &Function) -> Result<Attributes, FigureError> {
    let mut attributes = Attributes::new();
    for arg in &shape.arguments {
        let attr = match arg.as_function() {
            Some(f) if f.arguments.len() == 1 => f,
            _ => {
                return Err(FigureError::MalformedAttribute {
                    shape: shape.name.clone(),
                    argument: arg.to_string(),
                })
            }
        };
        let value =
            Scalar::from_symbol(&attr.arguments[0]).ok_or_else(|| FigureError::NonScalarAttribute {
                shape: shape.name.clone(),
                attribute: attr.name.clone(),
                value: attr.arguments[0].to_string(),
            })?;
        attributes.insert(attr.name.clone(), value);
    }
    Ok(attributes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::parse_symbol;

    fn figure(text: &str) -> Result<Figure, FigureError> {
        Figure::from_symbol(&parse_symbol(text).expect("Should parse"))
    }

    fn bbox(x0: i64, y0: i64, x1: i64, y1: i64) -> BoundingBox {
        BoundingBox::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    #[test]
    fn test_circle_bounding_box() {
        let fig = figure("circle(cx(5),cy(5),r(3))").unwrap();
        assert_eq!(fig.kind(), ShapeKind::Circle);
        assert_eq!(fig.bounding_box(), bbox(2, 2, 8, 8));
        assert_eq!(fig.bounding_box().view_box(), "2 2 6 6");
    }

    #[test]
    fn test_rect_bounding_box() {
        let fig = figure("rect(x(0),y(0),width(10),height(4))").unwrap();
        assert_eq!(fig.bounding_box(), bbox(0, 0, 10, 4));
    }

    #[test]
    fn test_line_bounding_box_is_symmetric() {
        let a = figure("line(x1(0),y1(5),x2(5),y2(0))").unwrap();
        let b = figure("line(x1(5),y1(0),x2(0),y2(5))").unwrap();
        assert_eq!(a.bounding_box(), bbox(0, 0, 5, 5));
        assert_eq!(b.bounding_box(), bbox(0, 0, 5, 5));
    }

    #[test]
    fn test_extreme_coordinates() {
        let circle = figure("circle(cx(2147483647),cy(-2147483648),r(2147483647))").unwrap();
        assert_eq!(
            circle.bounding_box(),
            bbox(0, -4294967295, 4294967294, -1)
        );

        let line = figure("line(x1(-2147483648),y1(0),x2(2147483647),y2(0))").unwrap();
        assert_eq!(line.bounding_box().width(), 4294967295);
        assert_eq!(line.bounding_box().view_box(), "-2147483648 0 4294967295 0");

        let rect = figure("rect(x(2147483647),y(2147483647),width(2147483647),height(1))").unwrap();
        assert_eq!(rect.bounding_box(), bbox(2147483647, 2147483647, 4294967294, 2147483648));
    }

    #[test]
    fn test_svg_keeps_attribute_order_and_extras() {
        let fig = figure(r#"circle(cx(5),cy(5),r(2),fill("red"))"#).unwrap();
        assert_eq!(fig.to_svg(), r#"<circle cx="5" cy="5" r="2" fill="red"/>"#);
    }

    #[test]
    fn test_svg_does_not_escape() {
        let fig = figure(r#"rect(x(0),y(0),width(1),height(1),title("a<b&c"))"#).unwrap();
        assert!(fig.to_svg().contains(r#"title="a<b&c""#));
    }

    #[test]
    fn test_repeated_attribute_keeps_first_position() {
        let fig = figure("rect(x(9),y(0),width(1),height(1),x(2))").unwrap();
        assert_eq!(
            fig.to_svg(),
            r#"<rect x="2" y="0" width="1" height="1"/>"#
        );
        assert_eq!(fig.bounding_box(), bbox(2, 0, 3, 1));
    }

    #[test]
    fn test_unknown_shape() {
        let err = figure("polygon(points(\"0,0 1,1\"))").unwrap_err();
        assert_eq!(err, FigureError::unknown_shape("polygon"));
    }

    #[test]
    fn test_missing_attribute() {
        let err = figure("circle(cx(5),cy(5))").unwrap_err();
        assert_eq!(err, FigureError::missing("circle", "r"));
        assert!(err.is_lookup());
    }

    #[test]
    fn test_non_scalar_attribute() {
        let err = figure("circle(cx(pos(1)),cy(5),r(1))").unwrap_err();
        assert!(matches!(
            err,
            FigureError::NonScalarAttribute { ref attribute, .. } if attribute == "cx"
        ));
    }

    #[test]
    fn test_text_where_number_required() {
        let err = figure(r#"circle(cx("5"),cy(5),r(1))"#).unwrap_err();
        assert!(matches!(err, FigureError::NotANumber { .. }));
    }

    #[test]
    fn test_malformed_attribute() {
        let err = figure("line(x1(0),y1(0),x2(1),y2(1),7)").unwrap_err();
        assert!(matches!(err, FigureError::MalformedAttribute { .. }));
        let err = figure("line(x1(0,1),y1(0),x2(1),y2(1))").unwrap_err();
        assert!(matches!(err, FigureError::MalformedAttribute { .. }));
    }

    #[test]
    fn test_text_attributes_allowed_outside_geometry() {
        let fig = figure(r#"line(x1(0),y1(0),x2(3),y2(4),stroke("black"))"#).unwrap();
        assert_eq!(
            fig.attributes.get("stroke"),
            Some(&Scalar::Text("black".to_string()))
        );
    }

    #[test]
    fn test_kind_table_round_trips_names() {
        for kind in ShapeKind::ALL {
            assert_eq!(ShapeKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(ShapeKind::from_name("rectangle"), None);
    }
}
