//! Force layout in the style of d3's `force()`: gravity toward the middle of
//! the container, Barnes–Hut charge between nodes, optional collision
//! separation and position-verlet integration with friction. The simulation
//! cools every tick and stops by itself once `alpha` drops below a floor.

mod forces;
mod quadtree;

use eframe::egui::{Pos2, Vec2, pos2};
use rand::Rng;

use crate::thoughts::Node;
use forces::{ChargeParams, accumulate_charge, accumulate_collision};
pub use quadtree::QuadtreeCell;
use quadtree::{QuadNode, flatten};

/// Alpha a (re)started simulation begins with.
pub const INITIAL_ALPHA: f32 = 0.1;
const ALPHA_DECAY: f32 = 0.99;
const ALPHA_FLOOR: f32 = 0.005;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ForceParams {
    /// Pull toward the container center, scaled by alpha.
    pub gravity: f32,
    /// Per-node charge; negative repels.
    pub charge: f32,
    /// Velocity retained per tick.
    pub friction: f32,
    /// Barnes–Hut opening angle.
    pub theta: f32,
    pub charge_distance: f32,
    /// Minimum center distance kept between two nodes; `0.0` disables collisions.
    pub collision_distance: f32,
    pub collision_strength: f32,
}

impl Default for ForceParams {
    fn default() -> Self {
        Self {
            gravity: 0.1,
            charge: -30.0,
            friction: 0.9,
            theta: 0.8,
            charge_distance: f32::INFINITY,
            collision_distance: 0.0,
            collision_strength: 0.5,
        }
    }
}

#[derive(Default)]
struct Scratch {
    positions: Vec<Vec2>,
    shifts: Vec<Vec2>,
}

pub struct ForceLayout {
    params: ForceParams,
    size: Vec2,
    alpha: f32,
    scratch: Scratch,
}

impl ForceLayout {
    pub fn new(params: ForceParams, size: Vec2) -> Self {
        Self {
            params,
            size,
            alpha: 0.0,
            scratch: Scratch::default(),
        }
    }

    pub fn set_size(&mut self, size: Vec2) {
        self.size = size;
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn is_running(&self) -> bool {
        self.alpha > 0.0
    }

    /// Gives every node that has never been positioned a random spawn point
    /// inside the container, then re-heats the simulation.
    pub fn start(&mut self, nodes: &mut [Node]) {
        let mut rng = rand::thread_rng();
        for node in nodes.iter_mut().filter(|node| !node.is_placed()) {
            let spawn = self.spawn_point(&mut rng);
            node.place(spawn);
        }
        self.resume();
    }

    /// Re-heats the simulation without touching positions.
    pub fn resume(&mut self) {
        self.alpha = INITIAL_ALPHA;
    }

    fn spawn_point(&self, rng: &mut impl Rng) -> Pos2 {
        pos2(
            rng.gen_range(0.0..=1.0) * self.size.x,
            rng.gen_range(0.0..=1.0) * self.size.y,
        )
    }

    /// Advances the layout by one tick. Returns `false` once the simulation
    /// has cooled down and no tick happened.
    pub fn step(&mut self, nodes: &mut [Node]) -> bool {
        if self.alpha <= 0.0 {
            return false;
        }

        self.alpha *= ALPHA_DECAY;
        if self.alpha < ALPHA_FLOOR {
            self.alpha = 0.0;
            return false;
        }

        let alpha = self.alpha;
        let params = self.params;

        let pull = alpha * params.gravity;
        if pull != 0.0 {
            let center = self.size * 0.5;
            for node in nodes.iter_mut() {
                node.x += (center.x - node.x) * pull;
                node.y += (center.y - node.y) * pull;
            }
        }

        let scratch = &mut self.scratch;
        scratch.positions.clear();
        scratch.positions.extend(nodes.iter().map(|node| node.pos().to_vec2()));
        scratch.shifts.clear();
        scratch.shifts.resize(nodes.len(), Vec2::ZERO);

        let needs_tree = params.charge != 0.0 || params.collision_distance > 0.0;
        if needs_tree && let Some(tree) = QuadNode::build(&scratch.positions) {
            let charge = ChargeParams {
                strength: alpha * params.charge,
                theta_sq: params.theta * params.theta,
                max_distance_sq: params.charge_distance * params.charge_distance,
            };

            for (index, shift) in scratch.shifts.iter_mut().enumerate() {
                if params.charge != 0.0 {
                    accumulate_charge(&tree, index, &scratch.positions, charge, shift);
                }
                if params.collision_distance > 0.0 {
                    accumulate_collision(
                        &tree,
                        index,
                        &scratch.positions,
                        params.collision_distance,
                        params.collision_strength,
                        shift,
                    );
                }
            }
        }

        for (node, shift) in nodes.iter_mut().zip(&scratch.shifts) {
            if node.fixed {
                node.x = node.px;
                node.y = node.py;
                continue;
            }

            node.px -= shift.x;
            node.py -= shift.y;
            let velocity_x = (node.x - node.px) * params.friction;
            let velocity_y = (node.y - node.py) * params.friction;
            node.px = node.x;
            node.py = node.y;
            node.x += velocity_x;
            node.y += velocity_y;
        }

        true
    }
}

/// Cells of the charge quadtree for the current positions.
pub fn quadtree_cells(nodes: &[Node], cells: &mut Vec<QuadtreeCell>) {
    cells.clear();
    let positions = nodes
        .iter()
        .map(|node| node.pos().to_vec2())
        .collect::<Vec<_>>();
    if let Some(tree) = QuadNode::build(&positions) {
        flatten(&tree, 0, cells);
    }
}
