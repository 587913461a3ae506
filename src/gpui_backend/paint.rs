use gpui::{App, PathBuilder, Pixels, TextRun, Window, font, point, px};

use crate::geom::Point;
use crate::path::Path;
use crate::render::{Color, RenderCommand, RenderList, ShapeStyle, TextStyle};

pub(crate) fn paint_list(list: &RenderList, window: &mut Window, cx: &mut App) {
    for command in list.commands() {
        match command {
            RenderCommand::Path { path, style } => paint_path(window, path, *style),
            RenderCommand::Text {
                position,
                text,
                style,
                ..
            } => paint_text(window, cx, *position, text, style),
        }
    }
}

fn paint_path(window: &mut Window, path: &Path, style: ShapeStyle) {
    let subpaths = path.flatten();
    if subpaths.is_empty() {
        return;
    }
    if style.fill.a > 0.0 {
        let mut builder = PathBuilder::fill();
        trace_subpaths(&mut builder, &subpaths);
        if let Ok(path) = builder.build() {
            window.paint_path(path, to_rgba(style.fill));
        }
    }
    if style.stroke.a > 0.0 && style.stroke_width > 0.0 {
        let mut builder = PathBuilder::stroke(px(style.stroke_width.max(0.5)));
        trace_subpaths(&mut builder, &subpaths);
        if let Ok(path) = builder.build() {
            window.paint_path(path, to_rgba(style.stroke));
        }
    }
}

fn trace_subpaths(builder: &mut PathBuilder, subpaths: &[Vec<Point>]) {
    for subpath in subpaths {
        let mut points = subpath.iter();
        let Some(first) = points.next() else {
            continue;
        };
        builder.move_to(to_point(*first));
        for pt in points {
            builder.line_to(to_point(*pt));
        }
    }
}

// Rotated labels are drawn upright; GPUI text runs have no transform.
fn paint_text(window: &mut Window, cx: &mut App, center: Point, text: &str, style: &TextStyle) {
    if text.is_empty() {
        return;
    }
    let run = TextRun {
        len: text.len(),
        font: font(".SystemUIFont"),
        color: to_hsla(style.color),
        background_color: None,
        underline: None,
        strikethrough: None,
    };
    let shaped = window
        .text_system()
        .shape_line(text.to_string().into(), px(style.size), &[run], None);
    let line_height = shaped.ascent + shaped.descent;
    let origin = point(
        px(center.x as f32) - shaped.width / 2.0,
        px(center.y as f32) - line_height / 2.0,
    );
    let _ = shaped.paint(origin, line_height, window, cx);
}

fn to_point(pt: Point) -> gpui::Point<Pixels> {
    point(px(pt.x as f32), px(pt.y as f32))
}

fn to_rgba(color: Color) -> gpui::Rgba {
    gpui::Rgba {
        r: color.r,
        g: color.g,
        b: color.b,
        a: color.a,
    }
}

pub(crate) fn to_hsla(color: Color) -> gpui::Hsla {
    gpui::Hsla::from(to_rgba(color))
}
