use eframe::egui::{Color32, Painter, Pos2, Rect, Stroke, StrokeKind, Vec2, vec2};

use crate::controller::Backdrop;

pub(super) const NODE_COLOR: Color32 = Color32::from_rgb(104, 170, 214);
pub(super) const SELECTED_COLOR: Color32 = Color32::from_rgb(245, 206, 93);
pub(super) const HOVER_COLOR: Color32 = Color32::from_rgb(255, 164, 101);
pub(super) const MATCH_COLOR: Color32 = Color32::from_rgb(103, 196, 255);

pub(super) fn blend_color(base: Color32, overlay: Color32, amount: f32) -> Color32 {
    let amount = amount.clamp(0.0, 1.0);
    let inverse = 1.0 - amount;

    Color32::from_rgba_unmultiplied(
        ((base.r() as f32 * inverse) + (overlay.r() as f32 * amount)) as u8,
        ((base.g() as f32 * inverse) + (overlay.g() as f32 * amount)) as u8,
        ((base.b() as f32 * inverse) + (overlay.b() as f32 * amount)) as u8,
        ((base.a() as f32 * inverse) + (overlay.a() as f32 * amount)) as u8,
    )
}

pub(super) fn dim_color(color: Color32, factor: f32) -> Color32 {
    let factor = factor.clamp(0.0, 1.0);
    Color32::from_rgba_unmultiplied(
        (color.r() as f32 * factor) as u8,
        (color.g() as f32 * factor) as u8,
        (color.b() as f32 * factor) as u8,
        (color.a() as f32 * (0.45 + (factor * 0.55))) as u8,
    )
}

/// Fills the whole view and paints the grid the universe floats on.
pub(super) fn draw_background(painter: &Painter, rect: Rect) {
    painter.rect_filled(rect, 0.0, Color32::from_rgb(19, 23, 29));

    let step = 56.0;
    let stroke = Stroke::new(1.0, Color32::from_rgba_unmultiplied(60, 70, 80, 70));

    let mut x = rect.left() + step;
    while x < rect.right() {
        painter.line_segment([Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())], stroke);
        x += step;
    }

    let mut y = rect.top() + step;
    while y < rect.bottom() {
        painter.line_segment([Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)], stroke);
        y += step;
    }
}

pub(super) fn draw_backdrop(painter: &Painter, origin: Pos2, backdrop: Backdrop) {
    match backdrop {
        Backdrop::Planet { center, radius } => {
            let center = local_to_screen(origin, center);
            painter.circle_filled(center, radius, Color32::from_rgb(30, 58, 84));
            painter.circle_stroke(
                center,
                radius,
                Stroke::new(2.0, Color32::from_rgb(72, 118, 152)),
            );
        }
        Backdrop::Background { size } => {
            let rect = Rect::from_min_size(origin, size);
            painter.rect_stroke(
                rect,
                0.0,
                Stroke::new(1.0, Color32::from_rgba_unmultiplied(90, 104, 120, 90)),
                StrokeKind::Inside,
            );
        }
    }
}

pub(super) fn local_to_screen(origin: Pos2, local: Pos2) -> Pos2 {
    origin + local.to_vec2()
}

pub(super) fn screen_to_local(origin: Pos2, screen: Pos2) -> Pos2 {
    (screen - origin).to_pos2()
}

/// Offset that centers a label of `size` on its anchor.
pub(super) fn centered_label_offset(size: Vec2) -> Vec2 {
    vec2(-size.x * 0.5, -size.y * 0.5)
}
