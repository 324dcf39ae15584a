//! Concrete figure outlines and probe-square hit-testing.
//!
//! Every figure resolves to one of a handful of kurbo primitives. Hit-testing
//! asks whether a small probe square meets the outline: closed outlines are
//! tested against their filled region (nonzero winding), open outlines against
//! their strokes only. A plain segment counts when it touches the probe's
//! border; every other outline must reach the probe's interior.

use kurbo::{BezPath, Ellipse, Line, PathEl, Point, Rect, Shape};

/// Curve flattening tolerance used when callers do not supply one.
pub const DEFAULT_TOLERANCE: f64 = 0.05;

/// Margin below which a point counts as lying on the probe border.
const BORDER_EPSILON: f64 = 1e-9;

/// The drawable geometry of a figure.
#[derive(Debug, Clone, PartialEq)]
pub enum Outline {
    /// Open segment
    Segment(Line),
    /// Two open segments (diagonal cross)
    Cross([Line; 2]),
    /// Axis-aligned filled box
    Rect(Rect),
    /// Filled ellipse
    Ellipse(Ellipse),
    /// Closed filled path (triangle, heart, moon)
    Path(BezPath),
}

impl Outline {
    /// Whether this outline encloses a fillable region.
    pub fn is_closed(&self) -> bool {
        !matches!(self, Outline::Segment(_) | Outline::Cross(_))
    }

    /// Converts the outline into a single Bézier path for rendering.
    pub fn to_path(&self, tolerance: f64) -> BezPath {
        match self {
            Outline::Segment(line) => line.to_path(tolerance),
            Outline::Cross(lines) => {
                let mut path = BezPath::new();
                for line in lines {
                    path.move_to(line.p0);
                    path.line_to(line.p1);
                }
                path
            }
            Outline::Rect(rect) => rect.to_path(tolerance),
            Outline::Ellipse(ellipse) => ellipse.to_path(tolerance),
            Outline::Path(path) => path.clone(),
        }
    }

    /// Returns true if the outline meets the interior of `probe`.
    pub fn intersects(&self, probe: Rect, tolerance: f64) -> bool {
        let probe = probe.abs();
        match self {
            Outline::Segment(line) => segment_touches(line.p0, line.p1, &probe),
            Outline::Cross(lines) => lines
                .iter()
                .any(|line| segment_enters(line.p0, line.p1, &probe)),
            Outline::Rect(rect) => {
                rect.width() > 0.0
                    && rect.height() > 0.0
                    && rect.x0 < probe.x1
                    && probe.x0 < rect.x1
                    && rect.y0 < probe.y1
                    && probe.y0 < rect.y1
            }
            Outline::Ellipse(ellipse) => ellipse_meets(ellipse, &probe),
            Outline::Path(path) => region_meets(path, &probe, tolerance),
        }
    }
}

/// Tests a filled ellipse against an open box using the box point nearest its center.
fn ellipse_meets(ellipse: &Ellipse, probe: &Rect) -> bool {
    let center = ellipse.center();
    let radii = ellipse.radii();
    if radii.x <= 0.0 || radii.y <= 0.0 {
        return false;
    }
    let nearest_x = center.x.clamp(probe.x0, probe.x1);
    let nearest_y = center.y.clamp(probe.y0, probe.y1);
    let nx = (nearest_x - center.x) / radii.x;
    let ny = (nearest_y - center.y) / radii.y;
    nx * nx + ny * ny < 1.0
}

/// Tests a closed path's filled region against an open box.
///
/// If no flattened edge passes through the box interior, the interior lies
/// wholly inside or wholly outside the region, so the probe center decides.
fn region_meets(path: &BezPath, probe: &Rect, tolerance: f64) -> bool {
    let mut crossed = false;
    let mut start = Point::ZERO;
    let mut last = Point::ZERO;
    kurbo::flatten(path.iter(), tolerance, |el| {
        if crossed {
            return;
        }
        match el {
            PathEl::MoveTo(p) => {
                start = p;
                last = p;
            }
            PathEl::LineTo(p) => {
                crossed = segment_enters(last, p, probe);
                last = p;
            }
            PathEl::ClosePath => {
                crossed = segment_enters(last, start, probe);
                last = start;
            }
            // flatten only emits the three variants above
            PathEl::QuadTo(..) | PathEl::CurveTo(..) => {}
        }
    });

    crossed || path.winding(probe.center()) != 0
}

/// Clips segment `a -> b` to the closed box `probe`, returning the part inside.
///
/// Liang–Barsky clipping; points on the box border count as inside.
fn clip_segment(a: Point, b: Point, probe: &Rect) -> Option<(Point, Point)> {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;

    let bounds = [
        (-dx, a.x - probe.x0),
        (dx, probe.x1 - a.x),
        (-dy, a.y - probe.y0),
        (dy, probe.y1 - a.y),
    ];
    for (p, q) in bounds {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    let at = |t: f64| Point::new(a.x + dx * t, a.y + dy * t);
    Some((at(t0), at(t1)))
}

/// Returns true if segment `a -> b` meets `probe`, border included.
fn segment_touches(a: Point, b: Point, probe: &Rect) -> bool {
    clip_segment(a, b, probe).is_some()
}

/// Returns true if segment `a -> b` has a point strictly inside `probe`.
///
/// The clipped part reaches the interior exactly when its midpoint does.
fn segment_enters(a: Point, b: Point, probe: &Rect) -> bool {
    let Some((p0, p1)) = clip_segment(a, b, probe) else {
        return false;
    };
    let mid = p0.midpoint(p1);
    mid.x > probe.x0 + BORDER_EPSILON
        && mid.x < probe.x1 - BORDER_EPSILON
        && mid.y > probe.y0 + BORDER_EPSILON
        && mid.y < probe.y1 - BORDER_EPSILON
}
