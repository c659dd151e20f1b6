//! Control icons drawn as vector strokes from 24×24 path data.

use egui::{pos2, Color32, Painter, Pos2, Rect, Shape, Stroke, Vec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Left,
    Right,
    Maximize,
    Minimize,
    Play,
    Pause,
}

struct ViewBox {
    x: f32,
    y: f32,
    w: f32,
    h: f32,
}

const FULL: ViewBox = ViewBox {
    x: 0.0,
    y: 0.0,
    w: 24.0,
    h: 24.0,
};
// chevrons use a narrow box so they stretch tall
const NARROW: ViewBox = ViewBox {
    x: 6.0,
    y: 0.0,
    w: 12.0,
    h: 24.0,
};

enum Path {
    Open(&'static [(f32, f32)]),
    Closed(&'static [(f32, f32)]),
}

impl Icon {
    fn view_box(self) -> ViewBox {
        match self {
            Icon::Left | Icon::Right => NARROW,
            _ => FULL,
        }
    }

    /// Stroke width in view-box units.
    fn weight(self) -> f32 {
        match self {
            Icon::Left | Icon::Right => 1.0,
            _ => 2.0,
        }
    }

    fn paths(self) -> &'static [Path] {
        match self {
            Icon::Left => &[Path::Open(&[(15.0, 18.0), (9.0, 12.0), (15.0, 6.0)])],
            Icon::Right => &[Path::Open(&[(9.0, 18.0), (15.0, 12.0), (9.0, 6.0)])],
            Icon::Maximize => &[
                Path::Open(&[(8.0, 3.0), (5.0, 3.0), (3.0, 5.0), (3.0, 8.0)]),
                Path::Open(&[(21.0, 8.0), (21.0, 5.0), (19.0, 3.0), (16.0, 3.0)]),
                Path::Open(&[(16.0, 21.0), (19.0, 21.0), (21.0, 19.0), (21.0, 16.0)]),
                Path::Open(&[(3.0, 16.0), (3.0, 19.0), (5.0, 21.0), (8.0, 21.0)]),
            ],
            Icon::Minimize => &[
                Path::Open(&[(8.0, 3.0), (8.0, 6.0), (6.0, 8.0), (3.0, 8.0)]),
                Path::Open(&[(21.0, 8.0), (18.0, 8.0), (16.0, 6.0), (16.0, 3.0)]),
                Path::Open(&[(16.0, 21.0), (16.0, 18.0), (18.0, 16.0), (21.0, 16.0)]),
                Path::Open(&[(3.0, 16.0), (6.0, 16.0), (8.0, 18.0), (8.0, 21.0)]),
            ],
            Icon::Play => &[Path::Closed(&[(5.0, 3.0), (19.0, 12.0), (5.0, 21.0)])],
            Icon::Pause => &[
                Path::Closed(&[(6.0, 4.0), (10.0, 4.0), (10.0, 20.0), (6.0, 20.0)]),
                Path::Closed(&[(14.0, 4.0), (18.0, 4.0), (18.0, 20.0), (14.0, 20.0)]),
            ],
        }
    }
}

/// Maps a view-box point into `rect`, keeping the aspect ratio.
fn project(view: &ViewBox, rect: Rect, (x, y): (f32, f32)) -> Pos2 {
    let scale = (rect.width() / view.w).min(rect.height() / view.h);
    let drawn = Vec2::new(view.w, view.h) * scale;
    let origin = rect.center() - drawn / 2.0;
    pos2(
        origin.x + (x - view.x) * scale,
        origin.y + (y - view.y) * scale,
    )
}

fn shapes(rect: Rect, icon: Icon, color: Color32) -> Vec<Shape> {
    let view = icon.view_box();
    let scale = (rect.width() / view.w).min(rect.height() / view.h);
    let stroke = Stroke::new(icon.weight() * scale, color);
    icon.paths()
        .iter()
        .map(|path| match path {
            Path::Open(points) => Shape::line(
                points.iter().map(|p| project(&view, rect, *p)).collect(),
                stroke,
            ),
            Path::Closed(points) => Shape::closed_line(
                points.iter().map(|p| project(&view, rect, *p)).collect(),
                stroke,
            ),
        })
        .collect()
}

/// Paints `icon` inside `rect` with a soft drop shadow underneath.
pub fn paint_icon(painter: &Painter, rect: Rect, icon: Icon, color: Color32, shadow: Color32) {
    let offset = Vec2::splat((rect.height() / 24.0).max(1.0));
    if shadow.a() > 0 {
        painter.extend(shapes(rect.translate(offset), icon, shadow));
    }
    painter.extend(shapes(rect, icon, color));
}
