use std::collections::HashSet;

use eframe::egui::{pos2, vec2};
use proptest::prelude::*;

use super::*;

fn seeds() -> Vec<ThoughtSeed> {
    vec![
        ThoughtSeed::new("1", "first thought", &["x"]),
        ThoughtSeed::new("2", "second thought", &["y"]),
        ThoughtSeed::new("3", "third thought", &["x", "y"]),
    ]
}

fn controller(variant: Variant) -> LayoutController {
    LayoutController::new(
        variant,
        vec2(600.0, 400.0),
        seeds(),
        Location::for_view(variant.label()).unwrap(),
    )
    .unwrap()
}

fn node_ids(controller: &LayoutController) -> HashSet<NodeId> {
    controller.nodes().iter().map(|node| node.id.clone()).collect()
}

fn circle_ids(controller: &LayoutController) -> HashSet<NodeId> {
    controller.scene().ids().cloned().collect()
}

fn selected(controller: &LayoutController) -> HashSet<&str> {
    controller
        .scene()
        .selected_ids()
        .map(NodeId::as_str)
        .collect()
}

#[test]
fn initialize_creates_one_circle_per_seed() {
    let controller = controller(Variant::Planet);
    assert_eq!(circle_ids(&controller), node_ids(&controller));
    assert_eq!(controller.scene().len(), 3);
    assert!(controller.is_running());
    assert!(!controller.panel().is_visible());
}

#[test]
fn planet_is_a_square_fitted_to_the_container() {
    let controller = controller(Variant::Planet);
    assert_eq!(controller.scene().size(), vec2(400.0, 400.0));
    assert_eq!(
        controller.scene().backdrop(),
        Backdrop::Planet {
            center: pos2(200.0, 200.0),
            radius: 200.0
        }
    );
}

#[test]
fn universe_fills_the_container() {
    let controller = controller(Variant::Universe);
    assert_eq!(controller.scene().size(), vec2(600.0, 400.0));
    assert_eq!(
        controller.containment(),
        Containment::Rect {
            size: vec2(600.0, 400.0)
        }
    );
}

#[test]
fn empty_container_is_a_configuration_error() {
    let result = LayoutController::new(
        Variant::Planet,
        vec2(0.0, 300.0),
        seeds(),
        Location::for_view("planet").unwrap(),
    );
    assert!(matches!(result, Err(LayoutError::EmptyContainer { .. })));
}

#[test]
fn duplicate_seed_ids_are_rejected() {
    let mut seeds = seeds();
    seeds.push(ThoughtSeed::new("2", "again", &[]));
    let result = LayoutController::new(
        Variant::Universe,
        vec2(600.0, 400.0),
        seeds,
        Location::for_view("universe").unwrap(),
    );
    assert_eq!(result.err(), Some(LayoutError::DuplicateId("2".to_owned())));
}

#[test]
fn ids_that_cannot_round_trip_the_fragment_are_rejected() {
    for bad in [" 7", "7 ", ""] {
        let result = LayoutController::new(
            Variant::Planet,
            vec2(600.0, 400.0),
            vec![
                ThoughtSeed::new(bad, "padded", &[]),
                ThoughtSeed::new("7", "plain", &[]),
            ],
            Location::for_view("planet").unwrap(),
        );
        assert_eq!(
            result.err(),
            Some(LayoutError::UnaddressableId(bad.to_owned()))
        );
    }
}

#[test]
fn seeds_without_ids_or_tags_are_filled_in() {
    let controller = LayoutController::new(
        Variant::Planet,
        vec2(300.0, 300.0),
        vec![
            ThoughtSeed {
                id: None,
                thought: Some("a #dream".to_owned()),
                tags: None,
            },
            ThoughtSeed::default(),
        ],
        Location::for_view("planet").unwrap(),
    )
    .unwrap();

    let nodes = controller.nodes();
    assert_ne!(nodes[0].id, nodes[1].id);
    assert!(nodes[0].has_tag("#dream"));
    assert!(nodes[1].tags.is_empty());
    assert_eq!(nodes[1].text(), "");
}

#[test]
fn synchronize_is_idempotent() {
    let mut controller = controller(Variant::Planet);
    let first = controller.synchronize();
    let second = controller.synchronize();
    assert!(first.is_noop());
    assert!(second.is_noop());
    assert_eq!(circle_ids(&controller), node_ids(&controller));
}

#[test]
fn add_keeps_existing_positions() {
    let mut controller = controller(Variant::Planet);
    for _ in 0..5 {
        controller.tick();
    }
    let before = controller
        .nodes()
        .iter()
        .map(|node| (node.id.clone(), node.pos()))
        .collect::<Vec<_>>();

    let id = controller.add_thought("new one", None);

    for (id, pos) in before {
        assert_eq!(controller.node(id.as_str()).unwrap().pos(), pos);
    }
    assert!(controller.node(id.as_str()).unwrap().is_placed());
    assert!(controller.scene().contains(&id));
}

#[test]
fn add_then_remove_restores_the_scene() {
    let mut controller = controller(Variant::Universe);
    let before = circle_ids(&controller);

    let id = controller.add_thought("temporary #tag", None);
    assert_eq!(id.as_str().len(), crate::util::ID_DIGITS);
    assert!(controller.node(id.as_str()).unwrap().has_tag("#tag"));
    assert!(controller.remove_thought(id.as_str()));

    assert_eq!(circle_ids(&controller), before);
}

#[test]
fn removing_unknown_id_is_a_noop() {
    let mut controller = controller(Variant::Planet);
    assert!(!controller.remove_thought("missing"));
    assert_eq!(controller.nodes().len(), 3);
    assert_eq!(controller.scene().len(), 3);
}

#[test]
fn tick_keeps_planet_nodes_inside_the_planet() {
    let mut controller = controller(Variant::Planet);
    let limit = 200.0 - controller.config().item_radius;
    for _ in 0..400 {
        controller.tick();
    }
    for node in controller.nodes() {
        assert!(node.pos().distance(pos2(200.0, 200.0)) <= limit + 1.0e-3);
        let circle = controller.scene().circle(&node.id).unwrap();
        assert_eq!(circle.center, node.pos());
    }
}

#[test]
fn on_tick_projects_escaped_nodes_back() {
    let mut controller = controller(Variant::Universe);
    controller.nodes[0].project(pos2(-500.0, 9_000.0));

    controller.on_tick();

    let node = controller.node("1").unwrap();
    assert_eq!(node.pos(), pos2(50.0, 350.0));
    assert_eq!(controller.scene().circle(&node.id).unwrap().center, node.pos());
}

#[test]
fn select_writes_the_fragment_and_shows_text() {
    let mut controller = controller(Variant::Planet);
    controller.on_select("2");

    assert_eq!(controller.location().fragment(), "2");
    assert_eq!(controller.panel().text(), Some("second thought"));
    assert_eq!(selected(&controller), HashSet::from(["2"]));

    controller.on_select("3");
    assert_eq!(selected(&controller), HashSet::from(["3"]));
    assert_eq!(controller.panel().text(), Some("third thought"));
}

#[test]
fn fragment_round_trip_matches_direct_selection() {
    let mut controller = controller(Variant::Planet);
    controller.on_select("3");
    let direct = controller.panel().text().map(str::to_owned);
    let fragment = controller.location().fragment().to_owned();

    controller.on_clear();
    assert!(!controller.panel().is_visible());

    controller.navigate(&fragment);
    assert_eq!(controller.panel().text().map(str::to_owned), direct);
    assert_eq!(selected(&controller), HashSet::from(["3"]));
}

#[test]
fn selecting_unknown_id_behaves_like_clear() {
    let mut controller = controller(Variant::Planet);
    controller.on_select("1");
    controller.on_select("nope");

    assert!(!controller.panel().is_visible());
    assert_eq!(controller.location().fragment(), "");
    assert!(selected(&controller).is_empty());
}

#[test]
fn stale_fragment_hides_the_panel() {
    let mut controller = controller(Variant::Planet);
    controller.on_select("1");
    controller.navigate("#gone");

    assert!(!controller.panel().is_visible());
    assert!(!controller.is_selected());
    assert!(selected(&controller).is_empty());
}

#[test]
fn deep_link_is_honored_at_startup() {
    let mut location = Location::for_view("planet").unwrap();
    location.select("2");
    let controller =
        LayoutController::new(Variant::Planet, vec2(500.0, 500.0), seeds(), location).unwrap();

    assert_eq!(controller.panel().text(), Some("second thought"));
    assert_eq!(selected(&controller), HashSet::from(["2"]));
}

#[test]
fn encoded_ids_survive_the_fragment() {
    let mut controller = LayoutController::new(
        Variant::Universe,
        vec2(500.0, 500.0),
        vec![ThoughtSeed::new("a b/ü", "odd id", &[])],
        Location::for_view("universe").unwrap(),
    )
    .unwrap();

    controller.on_select("a b/ü");
    assert_eq!(controller.location().fragment(), "a%20b%2F%C3%BC");
    assert_eq!(controller.panel().text(), Some("odd id"));
}

#[test]
fn clear_resets_fragment_and_hides() {
    let mut controller = controller(Variant::Planet);
    controller.on_select("1");
    controller.on_clear();

    assert_eq!(controller.location().href(), "thoughts://planet/#");
    assert!(!controller.panel().is_visible());
    assert!(selected(&controller).is_empty());
}

#[test]
fn hover_shows_text_only_without_selection() {
    let mut controller = controller(Variant::Planet);
    controller.on_hover("1");
    assert_eq!(controller.panel().text(), Some("first thought"));
    assert_eq!(controller.scene().hovered_id().map(NodeId::as_str), Some("1"));

    controller.on_hover_end();
    assert!(!controller.panel().is_visible());
    assert_eq!(controller.scene().hovered_id(), None);
}

#[test]
fn hover_is_suppressed_while_selected() {
    let mut controller = controller(Variant::Planet);
    controller.on_select("1");

    controller.on_hover("2");
    assert_eq!(controller.panel().text(), Some("first thought"));
    assert_eq!(controller.scene().hovered_id().map(NodeId::as_str), Some("2"));

    controller.on_hover_end();
    assert_eq!(controller.panel().text(), Some("first thought"));

    controller.on_hover("1");
    assert_eq!(controller.panel().text(), Some("first thought"));
}

#[test]
fn removing_the_selected_thought_clears_the_panel() {
    let mut controller = controller(Variant::Planet);
    controller.on_select("2");
    controller.remove_thought("2");

    assert!(!controller.panel().is_visible());
    assert!(!controller.is_selected());
}

#[test]
fn removing_the_hovered_thought_ends_the_hover() {
    let mut controller = controller(Variant::Planet);
    controller.on_hover("3");
    controller.remove_thought("3");

    assert_eq!(controller.hovered(), None);
    assert!(!controller.panel().is_visible());
}

#[test]
fn highlight_by_tag_marks_exactly_the_tagged() {
    let mut controller = controller(Variant::Planet);

    assert_eq!(controller.highlight_by_tag("x"), 2);
    assert_eq!(selected(&controller), HashSet::from(["1", "3"]));

    controller.highlight_by_tag("y");
    assert_eq!(selected(&controller), HashSet::from(["2", "3"]));

    assert_eq!(controller.highlight_by_tag("z"), 0);
    assert!(selected(&controller).is_empty());
}

#[test]
fn tag_cloud_and_search_cover_the_collection() {
    let controller = controller(Variant::Planet);
    assert_eq!(
        controller.tag_cloud(),
        vec![("x".to_owned(), 2), ("y".to_owned(), 2)]
    );
    assert_eq!(
        controller.search("third"),
        HashSet::from([NodeId::new("3")])
    );
}

#[test]
fn resize_preserves_positions_and_resumes() {
    let mut controller = controller(Variant::Universe);
    while controller.tick() {}
    assert!(!controller.is_running());
    let before = controller
        .nodes()
        .iter()
        .map(|node| node.pos())
        .collect::<Vec<_>>();

    controller.on_resize(vec2(900.0, 700.0));

    assert!(controller.is_running());
    assert_eq!(controller.scene().size(), vec2(900.0, 700.0));
    let after = controller
        .nodes()
        .iter()
        .map(|node| node.pos())
        .collect::<Vec<_>>();
    assert_eq!(before, after);
}

#[test]
fn degenerate_resize_is_ignored() {
    let mut controller = controller(Variant::Planet);
    controller.on_resize(vec2(0.0, 0.0));
    assert_eq!(controller.container(), vec2(600.0, 400.0));
}

#[test]
fn shrinking_the_planet_pulls_nodes_inside() {
    let mut controller = controller(Variant::Planet);
    controller.on_resize(vec2(100.0, 100.0));

    let limit = 50.0 - controller.config().item_radius;
    for node in controller.nodes() {
        assert!(node.pos().distance(pos2(50.0, 50.0)) <= limit + 1.0e-3);
    }
}

#[test]
fn dragging_moves_universe_nodes_only() {
    let mut planet = controller(Variant::Planet);
    assert!(!planet.drag_start("1"));

    let mut universe = controller(Variant::Universe);
    assert!(universe.drag_start("1"));
    universe.drag_to("1", pos2(120.0, 140.0));
    universe.tick();
    assert_eq!(universe.node("1").unwrap().pos(), pos2(120.0, 140.0));

    universe.drag_to("1", pos2(5_000.0, 140.0));
    assert_eq!(universe.node("1").unwrap().pos(), pos2(550.0, 140.0));

    universe.drag_end("1");
    assert!(!universe.node("1").unwrap().fixed);
}

#[test]
fn label_offsets_are_cached_per_node() {
    let mut controller = controller(Variant::Universe);
    controller.set_label_offset("2", vec2(-20.0, 6.0));
    assert_eq!(
        controller.node("2").unwrap().label_offset,
        Some(vec2(-20.0, 6.0))
    );
    controller.set_label_offset("missing", vec2(1.0, 1.0));
}

#[derive(Clone, Debug)]
enum Op {
    Add,
    Remove(usize),
    Tick,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Add),
        (0usize..16).prop_map(Op::Remove),
        Just(Op::Tick),
    ]
}

proptest! {
    #[test]
    fn circles_track_nodes_through_any_sequence(ops in proptest::collection::vec(op(), 0..40)) {
        let mut controller = controller(Variant::Planet);

        for op in ops {
            match op {
                Op::Add => {
                    controller.add_thought("generated", None);
                }
                Op::Remove(slot) => {
                    let id = controller
                        .nodes()
                        .get(slot)
                        .map(|node| node.id.to_string())
                        .unwrap_or_else(|| "absent".to_owned());
                    controller.remove_thought(&id);
                }
                Op::Tick => {
                    controller.tick();
                }
            }

            prop_assert_eq!(circle_ids(&controller), node_ids(&controller));
            prop_assert_eq!(controller.nodes().len(), node_ids(&controller).len());
            prop_assert!(controller.synchronize().is_noop());
        }
    }
}
