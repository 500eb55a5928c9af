use std::f32::consts::TAU;

use eframe::egui::{Vec2, vec2};

use super::quadtree::QuadNode;

/// Unit vector from `from` toward `to` for two points that sit on top of
/// each other. Opposite for the swapped pair.
fn coincident_direction(from: usize, to: usize) -> Vec2 {
    let (low, high) = (from.min(to), from.max(to));
    let angle = ((low as f32) * 0.618_034 + (high as f32) * 0.414_214) * TAU;
    let direction = vec2(angle.cos(), angle.sin());
    if from < to { direction } else { -direction }
}

#[derive(Clone, Copy)]
pub(super) struct ChargeParams {
    /// `alpha * charge`; negative repels.
    pub(super) strength: f32,
    pub(super) theta_sq: f32,
    pub(super) max_distance_sq: f32,
}

/// Charge felt by `index`, expressed as the shift to apply to its previous
/// position (the verlet integrator turns that into velocity).
pub(super) fn accumulate_charge(
    node: &QuadNode,
    index: usize,
    positions: &[Vec2],
    params: ChargeParams,
    shift: &mut Vec2,
) {
    if node.count == 0 {
        return;
    }

    let point = positions[index];

    if node.is_leaf() {
        for &other in &node.points {
            if other == index {
                continue;
            }

            let mut delta = positions[other] - point;
            let mut distance_sq = delta.length_sq();
            if distance_sq < 1.0e-6 {
                delta = coincident_direction(index, other);
                distance_sq = 1.0;
            }
            if distance_sq < params.max_distance_sq {
                *shift += delta * (params.strength / distance_sq);
            }
        }
        return;
    }

    let delta = node.centroid - point;
    let distance_sq = delta.length_sq().max(1.0e-6);
    let side = node.cell.side();
    let far_enough = !node.cell.contains(point) && side * side / params.theta_sq < distance_sq;

    if far_enough {
        if distance_sq < params.max_distance_sq {
            *shift += delta * (params.strength * node.count as f32 / distance_sq);
        }
        return;
    }

    for child in node.children() {
        accumulate_charge(child, index, positions, params, shift);
    }
}

/// Pushes `index` out of every circle of `min_distance` around its
/// neighbours, shifting its previous position like the charge does.
pub(super) fn accumulate_collision(
    node: &QuadNode,
    index: usize,
    positions: &[Vec2],
    min_distance: f32,
    strength: f32,
    shift: &mut Vec2,
) {
    let point = positions[index];
    if node.cell.distance_sq_to_point(point) > min_distance * min_distance {
        return;
    }

    if !node.is_leaf() {
        for child in node.children() {
            accumulate_collision(child, index, positions, min_distance, strength, shift);
        }
        return;
    }

    for &other in &node.points {
        if other == index {
            continue;
        }

        let delta = point - positions[other];
        let distance = delta.length();
        if distance >= min_distance {
            continue;
        }

        let direction = if distance > 1.0e-4 {
            delta / distance
        } else {
            -coincident_direction(index, other)
        };
        let overlap = min_distance - distance;
        *shift += direction * (overlap * 0.5 * strength);
    }
}
