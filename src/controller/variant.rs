use std::fmt;

use clap::ValueEnum;
use eframe::egui::{Vec2, pos2, vec2};

use super::geometry::Containment;
use super::scene::Backdrop;
use crate::physics::ForceParams;

/// Which visualization to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    /// Thoughts orbit inside a circular planet.
    #[default]
    Planet,
    /// Labelled planets float freely in a rectangular universe.
    Universe,
}

impl Variant {
    pub fn label(self) -> &'static str {
        match self {
            Self::Planet => "planet",
            Self::Universe => "universe",
        }
    }

    pub fn config(self) -> VariantConfig {
        match self {
            Self::Planet => VariantConfig {
                item_radius: 15.0,
                forces: ForceParams {
                    gravity: 0.05,
                    charge: -50.0,
                    friction: 0.9,
                    collision_distance: 30.0,
                    ..ForceParams::default()
                },
                draggable: false,
                labels: false,
            },
            Self::Universe => VariantConfig {
                item_radius: 50.0,
                forces: ForceParams {
                    gravity: 0.0,
                    charge: 0.0,
                    friction: 0.9,
                    ..ForceParams::default()
                },
                draggable: true,
                labels: true,
            },
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VariantConfig {
    pub item_radius: f32,
    pub forces: ForceParams,
    pub draggable: bool,
    /// Whether circles carry their thought as a label.
    pub labels: bool,
}

/// Geometry derived from the container for one variant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) struct Bounds {
    pub(super) size: Vec2,
    pub(super) backdrop: Backdrop,
    pub(super) containment: Containment,
}

impl Bounds {
    pub(super) fn measure(variant: Variant, container: Vec2) -> Self {
        match variant {
            Variant::Planet => {
                let side = container.x.min(container.y);
                let center = pos2(side * 0.5, side * 0.5);
                let radius = side * 0.5;
                Self {
                    size: vec2(side, side),
                    backdrop: Backdrop::Planet { center, radius },
                    containment: Containment::Circle { center, radius },
                }
            }
            Variant::Universe => Self {
                size: container,
                backdrop: Backdrop::Background { size: container },
                containment: Containment::Rect { size: container },
            },
        }
    }
}
