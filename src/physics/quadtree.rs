use eframe::egui::{Vec2, vec2};

const LEAF_CAPACITY: usize = 8;
const MAX_DEPTH: usize = 12;

/// Axis-aligned square cell.
#[derive(Clone, Copy, Debug)]
pub(super) struct Cell {
    pub(super) center: Vec2,
    pub(super) half_extent: f32,
}

impl Cell {
    fn enclosing(points: &[Vec2]) -> Option<Self> {
        let (min, max) = points.iter().fold(
            (
                vec2(f32::INFINITY, f32::INFINITY),
                vec2(f32::NEG_INFINITY, f32::NEG_INFINITY),
            ),
            |(min, max), point| (min.min(*point), max.max(*point)),
        );

        if !(min.x.is_finite() && min.y.is_finite() && max.x.is_finite() && max.y.is_finite()) {
            return None;
        }

        let span = (max - min).max_elem().max(1.0);
        Some(Self {
            center: (min + max) * 0.5,
            half_extent: span * 0.5 + 1.0,
        })
    }

    pub(super) fn contains(self, point: Vec2) -> bool {
        (point.x - self.center.x).abs() <= self.half_extent
            && (point.y - self.center.y).abs() <= self.half_extent
    }

    pub(super) fn side(self) -> f32 {
        self.half_extent * 2.0
    }

    /// Squared distance from `point` to the closest point of the cell.
    pub(super) fn distance_sq_to_point(self, point: Vec2) -> f32 {
        let dx = ((point.x - self.center.x).abs() - self.half_extent).max(0.0);
        let dy = ((point.y - self.center.y).abs() - self.half_extent).max(0.0);
        dx * dx + dy * dy
    }

    fn quadrant(self, index: usize) -> Self {
        let quarter = self.half_extent * 0.5;
        let offset = match index {
            0 => vec2(-quarter, -quarter),
            1 => vec2(quarter, -quarter),
            2 => vec2(-quarter, quarter),
            _ => vec2(quarter, quarter),
        };
        Self {
            center: self.center + offset,
            half_extent: quarter,
        }
    }

    fn quadrant_of(self, point: Vec2) -> usize {
        usize::from(point.x >= self.center.x) + 2 * usize::from(point.y >= self.center.y)
    }
}

/// Barnes–Hut quadtree over node positions. Every node carries the same
/// charge, so a cell's weight is just the number of points below it.
pub(super) struct QuadNode {
    pub(super) cell: Cell,
    pub(super) centroid: Vec2,
    pub(super) count: usize,
    pub(super) points: Vec<usize>,
    pub(super) children: [Option<Box<QuadNode>>; 4],
}

impl QuadNode {
    pub(super) fn build(positions: &[Vec2]) -> Option<Self> {
        let cell = Cell::enclosing(positions)?;
        Some(Self::subdivide(cell, (0..positions.len()).collect(), positions, 0))
    }

    fn subdivide(cell: Cell, points: Vec<usize>, positions: &[Vec2], depth: usize) -> Self {
        let count = points.len();
        let centroid = if count > 0 {
            points
                .iter()
                .fold(Vec2::ZERO, |sum, &index| sum + positions[index])
                / count as f32
        } else {
            cell.center
        };

        let mut node = Self {
            cell,
            centroid,
            count,
            points,
            children: std::array::from_fn(|_| None),
        };

        if depth >= MAX_DEPTH || node.points.len() <= LEAF_CAPACITY {
            return node;
        }

        let mut buckets: [Vec<usize>; 4] = std::array::from_fn(|_| Vec::new());
        for &index in &node.points {
            buckets[cell.quadrant_of(positions[index])].push(index);
        }

        if buckets.iter().filter(|bucket| !bucket.is_empty()).count() <= 1 {
            return node;
        }

        for (quadrant, bucket) in buckets.into_iter().enumerate() {
            if !bucket.is_empty() {
                node.children[quadrant] = Some(Box::new(Self::subdivide(
                    cell.quadrant(quadrant),
                    bucket,
                    positions,
                    depth + 1,
                )));
            }
        }
        node.points.clear();
        node
    }

    pub(super) fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }

    pub(super) fn children(&self) -> impl Iterator<Item = &QuadNode> {
        self.children.iter().filter_map(|child| child.as_deref())
    }
}

/// Flattened cell used by the debug overlay.
#[derive(Clone, Copy, Debug)]
pub struct QuadtreeCell {
    pub center: Vec2,
    pub half_extent: f32,
    pub depth: usize,
    pub is_leaf: bool,
}

pub(super) fn flatten(node: &QuadNode, depth: usize, cells: &mut Vec<QuadtreeCell>) {
    cells.push(QuadtreeCell {
        center: node.cell.center,
        half_extent: node.cell.half_extent,
        depth,
        is_leaf: node.is_leaf(),
    });
    for child in node.children() {
        flatten(child, depth + 1, cells);
    }
}
