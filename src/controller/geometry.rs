use eframe::egui::{Pos2, Rect, Vec2, pos2};

/// Region a node center may occupy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Containment {
    Circle { center: Pos2, radius: f32 },
    Rect { size: Vec2 },
}

impl Containment {
    /// Projects `pos` back into the region, keeping a whole circle of
    /// `item_radius` inside it.
    pub fn clamp(self, pos: Pos2, item_radius: f32) -> Pos2 {
        match self {
            Self::Circle { center, radius } => clamp_to_circle(pos, center, radius, item_radius),
            Self::Rect { size } => clamp_to_rect(pos, size, item_radius),
        }
    }
}

pub fn clamp_to_circle(pos: Pos2, center: Pos2, radius: f32, item_radius: f32) -> Pos2 {
    let limit = (radius - item_radius).max(0.0);
    let offset = pos - center;
    let length = offset.length();

    if length <= limit {
        return pos;
    }
    if length <= f32::EPSILON {
        return center;
    }

    center + offset * (limit / length)
}

pub fn clamp_to_rect(pos: Pos2, size: Vec2, item_radius: f32) -> Pos2 {
    pos2(
        clamp_axis(pos.x, size.x, item_radius),
        clamp_axis(pos.y, size.y, item_radius),
    )
}

fn clamp_axis(value: f32, extent: f32, item_radius: f32) -> f32 {
    let low = item_radius;
    let high = extent - item_radius;
    if high < low {
        return extent * 0.5;
    }
    value.clamp(low, high)
}

/// Square of side `side` centered horizontally and vertically in `container`.
pub fn centered_square(container: Rect, side: f32) -> Rect {
    Rect::from_center_size(container.center(), Vec2::splat(side))
}

#[cfg(test)]
mod tests {
    use eframe::egui::vec2;
    use proptest::prelude::*;

    use super::*;

    const EPSILON: f32 = 1.0e-3;

    #[test]
    fn circle_clamp_leaves_inside_points_alone() {
        let center = pos2(100.0, 100.0);
        assert_eq!(
            clamp_to_circle(pos2(120.0, 90.0), center, 100.0, 15.0),
            pos2(120.0, 90.0)
        );
    }

    #[test]
    fn circle_clamp_projects_onto_inner_boundary() {
        let center = pos2(100.0, 100.0);
        let clamped = clamp_to_circle(pos2(300.0, 100.0), center, 100.0, 15.0);
        assert!((clamped.x - 185.0).abs() < EPSILON);
        assert!((clamped.y - 100.0).abs() < EPSILON);
    }

    #[test]
    fn circle_clamp_with_oversized_item_collapses_to_center() {
        let center = pos2(50.0, 50.0);
        assert_eq!(clamp_to_circle(pos2(80.0, 50.0), center, 10.0, 15.0), center);
    }

    #[test]
    fn rect_clamp_insets_each_axis() {
        let size = vec2(400.0, 300.0);
        assert_eq!(clamp_to_rect(pos2(-10.0, 500.0), size, 50.0), pos2(50.0, 250.0));
        assert_eq!(clamp_to_rect(pos2(200.0, 120.0), size, 50.0), pos2(200.0, 120.0));
    }

    #[test]
    fn rect_clamp_on_narrow_extent_centers_the_axis() {
        assert_eq!(
            clamp_to_rect(pos2(0.0, 0.0), vec2(60.0, 300.0), 50.0),
            pos2(30.0, 50.0)
        );
    }

    proptest! {
        #[test]
        fn circle_clamp_lands_on_boundary_and_keeps_direction(
            x in -2_000.0f32..2_000.0,
            y in -2_000.0f32..2_000.0,
            radius in 20.0f32..500.0,
            item_radius in 1.0f32..19.0,
        ) {
            let center = pos2(250.0, 250.0);
            let pos = pos2(x, y);
            let limit = radius - item_radius;
            let offset = pos - center;
            prop_assume!(offset.length() > limit + 1.0e-2);

            let clamped = clamp_to_circle(pos, center, radius, item_radius);
            let clamped_offset = clamped - center;

            prop_assert!((clamped_offset.length() - limit).abs() < EPSILON * limit.max(1.0));
            let cross = offset.x * clamped_offset.y - offset.y * clamped_offset.x;
            prop_assert!(cross.abs() <= 1.0e-3 * offset.length() * clamped_offset.length());
            prop_assert!(offset.dot(clamped_offset) > 0.0);
        }

        #[test]
        fn rect_clamp_stays_inside_inset(
            x in -2_000.0f32..2_000.0,
            y in -2_000.0f32..2_000.0,
            width in 120.0f32..1_600.0,
            height in 120.0f32..1_600.0,
            item_radius in 0.0f32..60.0,
        ) {
            let clamped = clamp_to_rect(pos2(x, y), vec2(width, height), item_radius);
            prop_assert!(clamped.x >= item_radius && clamped.x <= width - item_radius);
            prop_assert!(clamped.y >= item_radius && clamped.y <= height - item_radius);
        }
    }
}
