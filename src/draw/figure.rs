//! Figure definitions: the seven drawable shape kinds and their bounding boxes.

use super::color::Color;
use super::outline::{self, Outline};
use crate::error::{DrawError, DrawResult};
use crate::util::Rect;
use kurbo::{BezPath, Ellipse, Line, Point};
use std::fmt;
use std::str::FromStr;

/// Side length of the square probe used by [`Figure::contains`].
pub const PROBE_SIZE: f64 = 2.0;

/// Padding added around a figure's box when reporting damage, covering the stroke.
const STROKE_PADDING: f64 = 3.0;

/// The kind of shape a [`Figure`] draws inside its bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FigureKind {
    /// Straight segment from the anchor across the (signed) box diagonal
    Line,
    /// Axis-aligned rectangle
    Rectangle,
    /// Ellipse inscribed in the box
    Ellipse,
    /// Both box diagonals
    DiagonalCross,
    /// Two cubic lobes meeting at a bottom point
    Heart,
    /// Isosceles triangle with its apex on the top edge
    Triangle,
    /// Crescent formed by two opposing curves
    Moon,
}

impl FigureKind {
    /// Every supported kind, in toolbar order.
    pub const ALL: [FigureKind; 7] = [
        FigureKind::Line,
        FigureKind::Rectangle,
        FigureKind::Ellipse,
        FigureKind::DiagonalCross,
        FigureKind::Triangle,
        FigureKind::Heart,
        FigureKind::Moon,
    ];

    /// Tool name used by the options toolbar and the config file.
    pub fn name(self) -> &'static str {
        match self {
            FigureKind::Line => "line",
            FigureKind::Rectangle => "rectangle",
            FigureKind::Ellipse => "ellipse",
            FigureKind::DiagonalCross => "cross",
            FigureKind::Heart => "heart",
            FigureKind::Triangle => "triangle",
            FigureKind::Moon => "moon",
        }
    }

    /// Whether the kind needs a positive width and height to be hit at all.
    fn needs_positive_extent(self) -> bool {
        matches!(self, FigureKind::Rectangle | FigureKind::Ellipse)
    }
}

impl fmt::Display for FigureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FigureKind {
    type Err = DrawError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FigureKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| DrawError::UnsupportedType(s.to_string()))
    }
}

/// A single drawable shape: a kind, a bounding box, a color and a fill flag.
///
/// The anchor `(x, y)` is the top-left corner of the box and is never negative.
/// `width` and `height` are signed; a negative extent grows the box left or up
/// from the anchor. All fields are plain values, so a clone shares nothing with
/// the original.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Figure {
    kind: FigureKind,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    color: Color,
    fill: bool,
}

/// Converts a device coordinate to the nearest representable pixel.
fn to_pixel(value: f64) -> i32 {
    value.clamp(i32::MIN as f64, i32::MAX as f64) as i32
}

fn check_anchor(x: f64, y: f64) -> DrawResult<()> {
    if x >= 0.0 && y >= 0.0 {
        Ok(())
    } else {
        Err(DrawError::InvalidArgument(format!(
            "anchor ({x}, {y}) must be non-negative"
        )))
    }
}

impl Figure {
    /// Creates a zero-sized figure anchored at `(x, y)`.
    ///
    /// # Errors
    /// Returns [`DrawError::InvalidArgument`] if either coordinate is negative.
    pub fn new(kind: FigureKind, x: f64, y: f64, color: Color, fill: bool) -> DrawResult<Self> {
        check_anchor(x, y)?;
        Ok(Self {
            kind,
            x,
            y,
            width: 0.0,
            height: 0.0,
            color,
            fill,
        })
    }

    /// Replaces the whole bounding box.
    ///
    /// # Errors
    /// Returns [`DrawError::InvalidArgument`] if the new anchor is negative; the
    /// figure is left untouched in that case.
    pub fn update_bound(&mut self, x: f64, y: f64, width: f64, height: f64) -> DrawResult<()> {
        check_anchor(x, y)?;
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Resizes the box, keeping the anchor.
    pub fn update_area(&mut self, width: f64, height: f64) -> DrawResult<()> {
        self.update_bound(self.x, self.y, width, height)
    }

    /// Moves the anchor, keeping the size.
    pub fn update_anchor(&mut self, x: f64, y: f64) -> DrawResult<()> {
        self.update_bound(x, y, self.width, self.height)
    }

    pub fn update_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn update_fill(&mut self, fill: bool) {
        self.fill = fill;
    }

    /// Translates the anchor by `(dx, dy)`.
    ///
    /// # Errors
    /// Returns [`DrawError::InvalidArgument`] unless `dx >= -x` and `dy >= -y`.
    pub fn shift(&mut self, dx: f64, dy: f64) -> DrawResult<()> {
        if dx >= -self.x && dy >= -self.y {
            self.x += dx;
            self.y += dy;
            Ok(())
        } else {
            Err(DrawError::InvalidArgument(format!(
                "shift ({dx}, {dy}) would move anchor ({}, {}) off-canvas; need dx >= {} and dy >= {}",
                self.x, self.y, -self.x, -self.y
            )))
        }
    }

    /// Builds the concrete outline for the current box.
    pub fn outline(&self) -> Outline {
        let Figure {
            x,
            y,
            width: w,
            height: h,
            ..
        } = *self;

        match self.kind {
            FigureKind::Line => Outline::Segment(Line::new((x, y), (x + w, y + h))),
            FigureKind::Rectangle => Outline::Rect(kurbo::Rect::from_origin_size((x, y), (w, h))),
            FigureKind::Ellipse => Outline::Ellipse(Ellipse::from_rect(
                kurbo::Rect::from_origin_size((x, y), (w, h)),
            )),
            FigureKind::DiagonalCross => Outline::Cross([
                Line::new((x, y), (x + w, y + h)),
                Line::new((x + w, y), (x, y + h)),
            ]),
            FigureKind::Triangle => {
                let mut path = BezPath::new();
                path.move_to((x + w / 2.0, y));
                path.line_to((x, y + h));
                path.line_to((x + w, y + h));
                path.close_path();
                Outline::Path(path)
            }
            FigureKind::Heart => {
                let mid_x = x + w / 2.0;
                let right = x + w;
                let shoulder = y + h / 2.5;
                let mut path = BezPath::new();
                path.move_to((x, shoulder));
                path.curve_to((x, y), (mid_x, y), (mid_x, shoulder));
                path.curve_to((mid_x, y), (right, y), (right, shoulder));
                path.line_to((mid_x, y + h));
                path.line_to((x, shoulder));
                path.close_path();
                Outline::Path(path)
            }
            FigureKind::Moon => {
                let mid_x = x + w / 2.0;
                let right = x + w;
                let bottom = y + h;
                let mut path = BezPath::new();
                path.move_to((right, y));
                path.curve_to((x, y), (x, bottom), (right, bottom));
                path.curve_to((mid_x, bottom), (mid_x, y), (right, y));
                path.close_path();
                Outline::Path(path)
            }
        }
    }

    /// Returns true if the outline meets the 2×2 probe square whose corner is `(px, py)`.
    ///
    /// Closed kinds test their filled region; lines and crosses test their strokes.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        self.contains_with_tolerance(px, py, outline::DEFAULT_TOLERANCE)
    }

    /// Same as [`Figure::contains`] with an explicit curve flattening tolerance.
    pub fn contains_with_tolerance(&self, px: f64, py: f64, tolerance: f64) -> bool {
        if self.kind.needs_positive_extent() && !(self.width > 0.0 && self.height > 0.0) {
            return false;
        }
        let probe = kurbo::Rect::from_origin_size(Point::new(px, py), (PROBE_SIZE, PROBE_SIZE));
        self.outline().intersects(probe, tolerance)
    }

    /// Damage rectangle covering the box plus stroke padding.
    pub fn bounding_box(&self) -> Option<Rect> {
        let x2 = self.x + self.width;
        let y2 = self.y + self.height;
        Rect::from_min_max(
            to_pixel((self.x.min(x2) - STROKE_PADDING).floor()),
            to_pixel((self.y.min(y2) - STROKE_PADDING).floor()),
            to_pixel((self.x.max(x2) + STROKE_PADDING).ceil()),
            to_pixel((self.y.max(y2) + STROKE_PADDING).ceil()),
        )
    }

    pub fn kind(&self) -> FigureKind {
        self.kind
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn fill(&self) -> bool {
        self.fill
    }

    /// All editable attributes as `(x, y, width, height, color, fill)`.
    pub fn attributes(&self) -> (f64, f64, f64, f64, Color, bool) {
        (
            self.x,
            self.y,
            self.width,
            self.height,
            self.color,
            self.fill,
        )
    }
}
