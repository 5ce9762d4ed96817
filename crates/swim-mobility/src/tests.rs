//! Unit tests for swim-mobility.

use swim_core::{CellId, JavaRng, NodeId, Point, SimTime, SwimConfig};
use swim_spatial::CellGrid;

use crate::contact::{self, Segment};
use crate::{CellWeightModel, MobilityEngine, MotionState, NodeState};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn config(node_count: usize) -> SwimConfig {
    SwimConfig { node_count, ..SwimConfig::default() }
}

fn engine(homes: &[Point]) -> MobilityEngine {
    MobilityEngine::new(&config(homes.len()), homes).unwrap()
}

/// A node moving from `from` to `to`, departing at `t0` at `speed`.
fn moving(id: u32, from: Point, to: Point, t0: f64, speed: f64) -> NodeState {
    let grid = CellGrid::new(0.1).unwrap();
    let mut n = NodeState::new(NodeId(id), from, grid.cell_index(from), grid.cell_count());
    n.position_time = SimTime(t0);
    n.destination = to;
    n.speed = speed;
    n.state = MotionState::Moving;
    n
}

/// A node resting at `at` from `t0` for `wait` seconds.
fn waiting(id: u32, at: Point, t0: f64, wait: f64) -> NodeState {
    let grid = CellGrid::new(0.1).unwrap();
    let mut n = NodeState::new(NodeId(id), at, grid.cell_index(at), grid.cell_count());
    n.position_time = SimTime(t0);
    n.wait_time = wait;
    n.state = MotionState::Waiting;
    n
}

// ── NodeState ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod node_state {
    use super::*;

    #[test]
    fn new_node_rests_at_home() {
        let n = NodeState::new(NodeId(3), Point::new(0.2, 0.4), CellId(5), 9);
        assert_eq!(n.state, MotionState::New);
        assert_eq!(n.position, n.home);
        assert_eq!(n.destination, n.home);
        assert_eq!(n.speed, 0.0);
        assert_eq!(n.travel_time(), 0.0);
        assert_eq!(n.visit_counts, vec![0; 9]);
        assert_eq!(n.cell_weights, vec![0.0; 9]);
    }

    #[test]
    fn travel_time_by_state() {
        let m = moving(0, Point::new(0.0, 0.0), Point::new(0.3, 0.4), 2.0, 0.5);
        assert!((m.travel_time() - 1.0).abs() < 1e-12);
        assert!((m.segment_end().secs() - 3.0).abs() < 1e-12);

        let w = waiting(1, Point::new(0.5, 0.5), 1.0, 7.5);
        assert_eq!(w.travel_time(), 7.5);
        assert_eq!(w.segment_end(), SimTime(8.5));
    }

    #[test]
    fn position_before_fix_is_fix() {
        let m = moving(0, Point::new(0.1, 0.1), Point::new(0.9, 0.1), 5.0, 0.8);
        assert_eq!(m.position_at(SimTime(5.0)), Point::new(0.1, 0.1));
        assert_eq!(m.position_at(SimTime(1.0)), Point::new(0.1, 0.1));
    }

    #[test]
    fn position_interpolates_linearly() {
        let m = moving(0, Point::new(0.1, 0.2), Point::new(0.9, 0.2), 0.0, 0.8);
        let p = m.position_at(SimTime(0.5));
        assert!((p.x - 0.5).abs() < 1e-12);
        assert!((p.y - 0.2).abs() < 1e-12);
    }

    #[test]
    fn position_stops_at_destination() {
        let m = moving(0, Point::new(0.1, 0.2), Point::new(0.9, 0.2), 0.0, 0.8);
        assert_eq!(m.position_at(SimTime(1.0)), Point::new(0.9, 0.2));
        assert_eq!(m.position_at(SimTime(50.0)), Point::new(0.9, 0.2));
    }

    #[test]
    fn waiting_node_does_not_move() {
        let w = waiting(0, Point::new(0.3, 0.3), 0.0, 4.0);
        assert_eq!(w.position_at(SimTime(2.0)), Point::new(0.3, 0.3));
    }
}

// ── Cell weights ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod cell_weights {
    use super::*;

    fn setup() -> (CellGrid, CellWeightModel, NodeState) {
        let grid = CellGrid::new(0.1).unwrap();
        let model = CellWeightModel::new(0.1, 10, 0.5);
        let home = Point::new(0.5, 0.5);
        let node = NodeState::new(NodeId(0), home, grid.cell_index(home), grid.cell_count());
        (grid, model, node)
    }

    #[test]
    fn density_is_pi_r2_n() {
        let model = CellWeightModel::new(0.1, 10, 0.5);
        assert!((model.density - std::f64::consts::PI * 0.01 * 10.0).abs() < 1e-12);
    }

    #[test]
    fn home_cell_has_top_distance_score() {
        let (grid, model, node) = setup();
        let home_cell = grid.cell_index(node.home);
        assert_eq!(model.distance_score(&node, &grid, home_cell), 1.0);
        for cell in grid.cells() {
            let s = model.distance_score(&node, &grid, cell);
            assert!(s > 0.0 && s <= 1.0);
        }
        let far = model.distance_score(&node, &grid, CellId(0));
        assert!(far < 0.2, "corner should score low, got {far}");
    }

    #[test]
    fn unvisited_cells_get_uniform_prior() {
        let (grid, model, node) = setup();
        let s = model.novelty_score(&node, &grid, CellId(17));
        assert_eq!(s, 1.0 / grid.cell_count() as f64);
    }

    #[test]
    fn most_visited_cell_scores_one() {
        let (grid, model, mut node) = setup();
        node.visit_counts[3] = 4;
        node.visit_counts[8] = 1;
        assert_eq!(model.novelty_score(&node, &grid, CellId(3)), 1.0);
        let low = model.novelty_score(&node, &grid, CellId(8));
        assert!(low < 1.0 && low > 0.0);
    }

    #[test]
    fn weight_blends_scores() {
        let (grid, _, node) = setup();
        let cell = CellId(40);
        let pure_distance = CellWeightModel::new(0.1, 10, 1.0);
        let pure_novelty = CellWeightModel::new(0.1, 10, 0.0);
        let half = CellWeightModel::new(0.1, 10, 0.5);
        let d = pure_distance.weight(&node, &grid, cell);
        let n = pure_novelty.weight(&node, &grid, cell);
        assert_eq!(d, pure_distance.distance_score(&node, &grid, cell));
        assert_eq!(n, pure_novelty.novelty_score(&node, &grid, cell));
        assert!((half.weight(&node, &grid, cell) - 0.5 * (d + n)).abs() < 1e-12);
    }

    #[test]
    fn refresh_accumulates_and_caches() {
        let (grid, model, mut node) = setup();
        let cell = CellId(12);
        model.refresh(&mut node, &grid, cell, 2);
        model.refresh(&mut node, &grid, cell, 3);
        assert_eq!(node.visit_counts[12], 5);
        assert_eq!(node.cell_weights[12], model.weight(&node, &grid, cell));
        assert!(node.cell_weights.iter().enumerate().all(|(i, &w)| i == 12 || w == 0.0));
    }

    #[test]
    fn all_zero_weights_pick_first_other_cell() {
        let (_, model, mut node) = setup();
        let mut rng = JavaRng::new(0);
        node.current_cell = CellId(0);
        assert_eq!(model.choose_destination_cell(&node, &mut rng), CellId(1));
        node.current_cell = CellId(4);
        assert_eq!(model.choose_destination_cell(&node, &mut rng), CellId(0));
    }

    #[test]
    fn single_weighted_cell_always_wins() {
        let (_, model, mut node) = setup();
        node.current_cell = CellId(0);
        node.cell_weights[9] = 0.7;
        let mut rng = JavaRng::new(99);
        for _ in 0..50 {
            assert_eq!(model.choose_destination_cell(&node, &mut rng), CellId(9));
        }
    }

    #[test]
    fn current_cell_weight_is_ignored() {
        let (_, model, mut node) = setup();
        node.current_cell = CellId(2);
        node.cell_weights[2] = 1_000.0;
        node.cell_weights[6] = 1.0;
        let mut rng = JavaRng::new(1);
        for _ in 0..50 {
            assert_eq!(model.choose_destination_cell(&node, &mut rng), CellId(6));
        }
    }

    #[test]
    fn single_cell_grid_falls_back_to_current() {
        let grid = CellGrid::new(2.0).unwrap();
        let model = CellWeightModel::new(2.0, 1, 0.5);
        let node = NodeState::new(NodeId(0), Point::new(0.5, 0.5), CellId(0), grid.cell_count());
        let mut rng = JavaRng::new(0);
        assert_eq!(model.choose_destination_cell(&node, &mut rng), CellId(0));
    }
}

// ── Contact geometry ──────────────────────────────────────────────────────────

#[cfg(test)]
mod contact_geometry {
    use super::*;

    const R: f64 = 0.1;

    #[test]
    fn static_overlap_is_strict() {
        assert!(contact::circles_overlap(Point::new(0.0, 0.0), R, Point::new(0.05, 0.0), R));
        assert!(!contact::circles_overlap(Point::new(0.0, 0.0), R, Point::new(0.25, 0.0), R));
    }

    #[test]
    fn far_boxes_skip_narrow_phase() {
        let a = Segment::new(Point::new(0.0, 0.0), Point::new(0.1, 0.0));
        let b = Segment::new(Point::new(0.8, 0.8), Point::new(0.9, 0.8));
        assert!(!contact::swept_boxes_overlap(a, R, b, R));
        assert!(contact::moving_circles(a, R, b, R).is_none());
    }

    #[test]
    fn head_on_approach_meets_and_leaves() {
        // A moves right across a stationary B; contact distance 0.2.
        let a = Segment::new(Point::new(0.0, 0.5), Point::new(1.0, 0.5));
        let b = Segment::stationary(Point::new(0.5, 0.5));
        let f = contact::moving_circles(a, R, b, R);
        assert!((f.meet.unwrap() - 0.3).abs() < 1e-12);
        assert!((f.leave.unwrap() - 0.7).abs() < 1e-12);
    }

    #[test]
    fn both_moving_uses_relative_velocity() {
        // Gap 1.0 closes by 1.0 over the window; contact at gap 0.2.
        let a = Segment::new(Point::new(0.0, 0.5), Point::new(0.5, 0.5));
        let b = Segment::new(Point::new(1.0, 0.5), Point::new(0.5, 0.5));
        let f = contact::moving_circles(a, R, b, R);
        assert!((f.meet.unwrap() - 0.8).abs() < 1e-12);
        assert!(f.leave.is_none(), "exit happens after the window");
    }

    #[test]
    fn start_inside_reports_only_leave() {
        let a = Segment::new(Point::new(0.5, 0.5), Point::new(1.0, 0.5));
        let b = Segment::stationary(Point::new(0.45, 0.5));
        let f = contact::moving_circles(a, R, b, R);
        assert!(f.meet.is_none());
        assert!((f.leave.unwrap() - 0.3).abs() < 1e-12);
    }

    #[test]
    fn miss_reports_nothing() {
        let a = Segment::new(Point::new(0.0, 0.1), Point::new(1.0, 0.1));
        let b = Segment::stationary(Point::new(0.5, 0.5));
        assert!(contact::moving_circles(a, R, b, R).is_none());
    }

    #[test]
    fn tangency_counts_as_contact() {
        // Closest approach is exactly 0.25 from B with combined radius 0.25.
        let a = Segment::new(Point::new(0.0, 0.25), Point::new(1.0, 0.25));
        let b = Segment::stationary(Point::new(0.5, 0.0));
        let f = contact::moving_circles(a, 0.125, b, 0.125);
        assert_eq!(f.meet, Some(0.5));
        assert_eq!(f.leave, Some(0.5));
    }

    #[test]
    fn parallel_paths_same_velocity_held_contact() {
        let a = Segment::new(Point::new(0.25, 0.5), Point::new(0.75, 0.5));
        let b = Segment::new(Point::new(0.375, 0.5), Point::new(0.875, 0.5));
        let f = contact::moving_circles(a, R, b, R);
        assert_eq!(f.meet, Some(0.0));
        assert_eq!(f.leave, Some(1.0));
    }

    #[test]
    fn parallel_paths_same_velocity_far_apart_never_meet() {
        // Diagonal gap 0.156·√2 ≈ 0.221 > 0.2, but the swept boxes overlap.
        let a = Segment::new(Point::new(0.25, 0.25), Point::new(0.5, 0.25));
        let b = Segment::new(Point::new(0.40625, 0.40625), Point::new(0.65625, 0.40625));
        assert!(contact::swept_boxes_overlap(a, R, b, R));
        let f = contact::moving_circles(a, R, b, R);
        assert!(f.meet.is_none());
        assert!(f.leave.is_none());
    }

    #[test]
    fn coincident_stationary_nodes_held_contact() {
        let p = Point::new(0.4, 0.4);
        let f = contact::moving_circles(Segment::stationary(p), R, Segment::stationary(p), R);
        assert_eq!(f.meet, Some(0.0));
        assert_eq!(f.leave, Some(1.0));
    }

    #[test]
    fn predict_uses_common_window() {
        // A moves 0 → 1 along y = 0.5 during [0, 1]; B waits at x = 0.5 during [0, 2].
        let a = moving(0, Point::new(0.0, 0.5), Point::new(1.0, 0.5), 0.0, 1.0);
        let b = waiting(1, Point::new(0.5, 0.5), 0.0, 2.0);
        let p = contact::predict_contact(&a, &b, R, SimTime(0.0)).unwrap();
        assert_eq!(p.node, NodeId(0));
        assert_eq!(p.other, NodeId(1));
        assert!((p.meet.unwrap().secs() - 0.3).abs() < 1e-12);
        assert!((p.leave.unwrap().secs() - 0.7).abs() < 1e-12);
    }

    #[test]
    fn predict_offsets_by_now() {
        let a = moving(0, Point::new(0.0, 0.5), Point::new(1.0, 0.5), 10.0, 1.0);
        let b = waiting(1, Point::new(0.5, 0.5), 4.0, 20.0);
        let p = contact::predict_contact(&a, &b, R, SimTime(10.0)).unwrap();
        assert!((p.meet.unwrap().secs() - 10.3).abs() < 1e-9);
    }

    #[test]
    fn empty_window_skips_check() {
        let a = moving(0, Point::new(0.0, 0.5), Point::new(1.0, 0.5), 5.0, 1.0);
        let b = waiting(1, Point::new(0.5, 0.5), 0.0, 5.0);
        assert!(contact::predict_contact(&a, &b, R, SimTime(5.0)).is_none());

        let fresh = NodeState::new(NodeId(2), Point::new(0.5, 0.5), CellId(0), 4);
        assert!(contact::predict_contact(&a, &fresh, R, SimTime(5.0)).is_none());
    }
}

// ── MobilityEngine ────────────────────────────────────────────────────────────

#[cfg(test)]
mod mobility_engine {
    use super::*;

    #[test]
    fn rejects_invalid_config() {
        let cfg = SwimConfig { node_radius: 0.0, ..config(1) };
        assert!(MobilityEngine::new(&cfg, &[Point::new(0.5, 0.5)]).is_err());
    }

    #[test]
    fn start_waiting_settles_node() {
        let mut e = engine(&[Point::new(0.3, 0.3)]);
        let mut rng = JavaRng::new(0);
        let wake = e.start_waiting(NodeId(0), SimTime(2.0), &mut rng).unwrap();
        let n = &e.store.nodes[0];
        assert_eq!(n.state, MotionState::Waiting);
        assert_eq!(n.speed, 0.0);
        assert_eq!(n.position_time, SimTime(2.0));
        assert!(n.wait_time >= 1.0 && n.wait_time <= 100.0);
        assert_eq!(wake, SimTime(2.0) + n.wait_time);
    }

    #[test]
    fn waiting_time_matches_formula() {
        let e = engine(&[Point::new(0.3, 0.3)]);
        let mut rng = JavaRng::new(0);
        let u = 0.730967787376657f64;
        let expected = (1.0 - u).powf(1.0 / (1.0 - 1.45)).min(100.0);
        assert_eq!(e.draw_waiting_time(&mut rng), expected);
    }

    #[test]
    fn unknown_node_draws_nothing() {
        let mut e = engine(&[Point::new(0.3, 0.3)]);
        let mut rng = JavaRng::new(0);
        let before = rng.clone();
        assert!(e.start_waiting(NodeId(4), SimTime(1.0), &mut rng).is_err());
        assert!(e.start_moving(NodeId(4), SimTime(1.0), &mut rng).is_err());
        assert_eq!(rng, before);
    }

    #[test]
    fn first_trip_golden_destination() {
        // Seed 0: draw 1 is the wait, draw 2 the cell (zero total, so cell 0),
        // draws 3 and 4 the x then y offset inside cell 0.
        let mut e = engine(&[Point::new(0.3, 0.3)]);
        let mut rng = JavaRng::new(0);
        let wake = e.start_waiting(NodeId(0), SimTime::ZERO, &mut rng).unwrap();
        e.start_moving(NodeId(0), wake, &mut rng).unwrap();

        let n = &e.store.nodes[0];
        assert_eq!(n.current_cell, CellId(64));
        assert_eq!(n.destination_cell, CellId(0));
        assert_eq!(n.destination, Point::new(0.04507221839115315, 0.03892177389346933));

        let mut fresh = JavaRng::new(0);
        for _ in 0..4 {
            fresh.next_double();
        }
        assert_eq!(rng, fresh);
    }

    #[test]
    fn waiting_time_is_truncated() {
        let mut e = engine(&[Point::new(0.3, 0.3)]);
        e.waiting_time_upper_bound = 1.0;
        let mut rng = JavaRng::new(5);
        for _ in 0..20 {
            assert_eq!(e.draw_waiting_time(&mut rng), 1.0);
        }
    }

    #[test]
    fn start_moving_leaves_current_cell() {
        let mut e = engine(&[Point::new(0.52, 0.47), Point::new(0.1, 0.9)]);
        let mut rng = JavaRng::new(3);
        e.start_waiting(NodeId(0), SimTime(0.0), &mut rng).unwrap();
        let current = e.store.nodes[0].current_cell;

        let arrival = e.start_moving(NodeId(0), SimTime(1.0), &mut rng).unwrap();
        let n = &e.store.nodes[0];
        assert_eq!(n.state, MotionState::Moving);
        assert_ne!(n.destination_cell, current);
        assert!(n.destination.in_unit_square());
        assert!(n.speed > 0.0);
        // Trip duration is 1 / speed_multiplier.
        assert!((arrival.secs() - 2.0).abs() < 1e-9);
        // Departed cell got re-scored; nothing else did.
        assert!(n.cell_weights[current.index()] > 0.0);
        assert_eq!(n.cell_weights.iter().filter(|&&w| w > 0.0).count(), 1);
    }

    #[test]
    fn full_cycle_updates_current_cell() {
        let mut e = engine(&[Point::new(0.5, 0.5)]);
        let mut rng = JavaRng::new(8);
        e.start_waiting(NodeId(0), SimTime(0.0), &mut rng).unwrap();
        let arrival = e.start_moving(NodeId(0), SimTime(1.0), &mut rng).unwrap();
        let target = e.store.nodes[0].destination_cell;
        e.start_waiting(NodeId(0), arrival, &mut rng).unwrap();
        let n = &e.store.nodes[0];
        assert_eq!(n.current_cell, target);
        assert_eq!(n.position, n.destination);
    }

    #[test]
    fn unknown_node_is_an_error() {
        let mut e = engine(&[Point::new(0.5, 0.5)]);
        let mut rng = JavaRng::new(0);
        assert!(e.start_moving(NodeId(9), SimTime(0.0), &mut rng).is_err());
        assert!(e.position_at(NodeId(9), SimTime(0.0)).is_err());
        assert!(e.predict_contacts(NodeId(9), SimTime(0.0)).is_err());
    }

    #[test]
    fn overlapping_pairs_at_placement() {
        let e = engine(&[Point::new(0.0, 0.0), Point::new(0.05, 0.0), Point::new(0.9, 0.9)]);
        assert_eq!(e.overlapping_pairs(), vec![(NodeId(0), NodeId(1))]);
    }

    #[test]
    fn predict_contacts_skips_self_and_orders_by_id() {
        let mut e = engine(&[Point::new(0.5, 0.5), Point::new(0.52, 0.5), Point::new(0.48, 0.5)]);
        let mut rng = JavaRng::new(0);
        for i in 0..3 {
            e.start_waiting(NodeId(i), SimTime(0.0), &mut rng).unwrap();
        }
        let preds = e.predict_contacts(NodeId(1), SimTime(0.0)).unwrap();
        let others: Vec<NodeId> = preds.iter().map(|p| p.other).collect();
        assert_eq!(others, vec![NodeId(0), NodeId(2)]);
        assert!(preds.iter().all(|p| p.meet == Some(SimTime(0.0))));
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn destination_is_never_current_cell(
            weights in proptest::collection::vec(0.0f64..5.0, 225),
            current in 0u32..225,
            seed in 0u64..10_000,
        ) {
            let grid = CellGrid::new(0.1).unwrap();
            let model = CellWeightModel::new(0.1, 10, 0.5);
            let mut node = NodeState::new(NodeId(0), Point::new(0.5, 0.5), CellId(current), grid.cell_count());
            node.cell_weights = weights;
            let mut rng = JavaRng::new(seed);
            let chosen = model.choose_destination_cell(&node, &mut rng);
            prop_assert_ne!(chosen, CellId(current));
        }

        #[test]
        fn contact_fractions_stay_in_window(
            ax in 0.0f64..1.0, ay in 0.0f64..1.0, bx in 0.0f64..1.0, by in 0.0f64..1.0,
            cx in 0.0f64..1.0, cy in 0.0f64..1.0,
        ) {
            let a = Segment::new(Point::new(ax, ay), Point::new(bx, by));
            let b = Segment::stationary(Point::new(cx, cy));
            let f = contact::moving_circles(a, 0.1, b, 0.1);
            for frac in f.meet.into_iter().chain(f.leave) {
                prop_assert!((0.0..=1.0 + 1e-9).contains(&frac));
            }
            if let (Some(m), Some(l)) = (f.meet, f.leave) {
                prop_assert!(m <= l + 1e-12);
            }
        }
    }
}
