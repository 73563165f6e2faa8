use jigcut::geom::{Point, point};
use jigcut::synth::{peak_factor, swell_reach};
use jigcut::{
    CutParams, EdgeProperty, KnobType, Segment, Shape, Strategy, SubPath, Synthesizer, Traversal,
};

fn knob(shape: Shape, knob_type: Option<KnobType>) -> EdgeProperty {
    EdgeProperty {
        shape,
        depth_multiplier: 1.17,
        offset_multiplier: 1.23,
        waviness: Some(1.4),
        knob_type,
        traversal: Traversal::Forward,
    }
}

fn variants(strategy: Strategy) -> Vec<EdgeProperty> {
    let kinds: Vec<Option<KnobType>> = if strategy == Strategy::Educa {
        KnobType::ALL.into_iter().map(Some).collect()
    } else {
        vec![None]
    };
    kinds
        .into_iter()
        .flat_map(|k| [knob(Shape::Positive, k), knob(Shape::Negative, k)])
        .collect()
}

fn segments() -> [(Point, Point); 3] {
    [
        (point(37.0, 120.0), point(161.0, 120.0)),
        (point(161.0, 40.0), point(161.0, 131.0)),
        (point(12.5, 7.25), point(88.0, 61.0)),
    ]
}

fn synth(strategy: Strategy) -> Synthesizer {
    Synthesizer::new(strategy, CutParams::preset(strategy), 60.0)
}

#[test]
fn mirrored_edges_trace_the_same_curve_backwards() {
    for strategy in Strategy::ALL {
        let synth = synth(strategy);
        for edge in variants(strategy) {
            for (p, q) in segments() {
                let forward = synth.edge_path(p, q, &edge);
                let backward = synth.edge_path(q, p, &edge.mirror_of());
                assert_eq!(
                    backward,
                    forward.reversed(),
                    "{strategy} {:?} {:?} from {p:?} to {q:?}",
                    edge.shape,
                    edge.knob_type
                );
            }
        }
    }
}

#[test]
fn symmetric_profiles_interlock_under_plain_shape_negation() {
    for strategy in [Strategy::Ribbon, Strategy::Ravensburger, Strategy::Strip, Strategy::Laser] {
        let synth = synth(strategy);
        let edge = knob(Shape::Positive, None);
        let negated = EdgeProperty {
            shape: Shape::Negative,
            ..edge
        };
        for (p, q) in segments() {
            let forward = synth.edge_path(p, q, &edge).reversed();
            let backward = synth.edge_path(q, p, &negated);
            assert_eq!(forward.segments.len(), backward.segments.len(), "{strategy}");
            for (a, b) in forward.segments.iter().zip(&backward.segments) {
                assert_same_segment(a, b, strategy);
            }
        }
    }
}

#[test]
fn flow_needs_the_traversal_flag_to_interlock() {
    let synth = synth(Strategy::Flow);
    let edge = knob(Shape::Positive, None);
    let (p, q) = segments()[0];
    let forward = synth.edge_path(p, q, &edge).reversed();
    let naive = synth.edge_path(
        q,
        p,
        &EdgeProperty {
            shape: Shape::Negative,
            ..edge
        },
    );
    assert_ne!(forward, naive);
    assert_eq!(synth.edge_path(q, p, &edge.mirror_of()), forward);
}

#[test]
fn every_strategy_ends_exactly_on_the_target_point() {
    for strategy in Strategy::ALL {
        let synth = synth(strategy);
        for edge in variants(strategy) {
            for (p, q) in segments() {
                let sub = synth.edge_path(p, q, &edge);
                assert_eq!(sub.end_point(), q, "{strategy} {:?}", edge.knob_type);
                let sub = synth.edge_path(q, p, &edge.mirror_of());
                assert_eq!(sub.end_point(), p, "{strategy} mirrored {:?}", edge.knob_type);
            }
        }
    }
}

#[test]
fn laser_cuts_are_straight_lines_only() {
    let synth = synth(Strategy::Laser);
    for edge in variants(Strategy::Laser) {
        let sub = synth.edge_path(point(0.0, 0.0), point(100.0, 0.0), &edge);
        assert_eq!(sub.segments.len(), 5);
        assert!(!sub.has_curves());
    }
}

#[test]
fn curved_strategies_emit_curves() {
    for strategy in Strategy::ALL.into_iter().filter(|s| *s != Strategy::Laser) {
        let sub = synth(strategy).edge_path(
            point(0.0, 0.0),
            point(100.0, 0.0),
            &knob(Shape::Positive, Some(KnobType::Oval)),
        );
        assert!(sub.has_curves(), "{strategy}");
    }
}

#[test]
fn knob_side_follows_the_shape_sign() {
    // Walking left to right, the unit normal points down (+y).
    for strategy in Strategy::ALL {
        let synth = synth(strategy);
        let (p, q) = (point(0.0, 0.0), point(100.0, 0.0));
        let down = synth.edge_path(p, q, &knob(Shape::Positive, Some(KnobType::Classic)));
        let up = synth.edge_path(p, q, &knob(Shape::Negative, Some(KnobType::Classic)));
        let deepest = |sub: &SubPath| {
            sub.segments
                .iter()
                .flat_map(|s| match *s {
                    Segment::Line { to } => vec![to.y],
                    Segment::Quadratic { ctrl, to } => vec![ctrl.y, to.y],
                    Segment::Cubic { ctrl1, ctrl2, to } => vec![ctrl1.y, ctrl2.y, to.y],
                })
                .fold(0.0_f64, |acc, y| if y.abs() > acc.abs() { y } else { acc })
        };
        assert!(deepest(&down) > 0.0, "{strategy}");
        assert!(deepest(&up) < 0.0, "{strategy}");
    }
}

#[test]
fn knob_and_swell_never_exceed_the_excursion_bound() {
    let params = CutParams {
        knob_depth: 0.35,
        knob_width: 2.0,
        curve_swell: 0.3,
        organic_jitter: 0.1,
        ..CutParams::default()
    };
    for strategy in Strategy::ALL {
        let synth = Synthesizer::new(strategy, params, 25.0);
        for edge in variants(strategy) {
            for len in [10.0, 100.0, 1000.0] {
                let reach = synth.excursion(&edge, len);
                let used = reach.depth.abs() * peak_factor(strategy, &edge)
                    + swell_reach(strategy, &edge, &params, len) * reach.swell_scale;
                assert!(used <= 25.0 + 1e-9, "{strategy} len {len}: {used}");
                assert!((0.0..=1.0).contains(&reach.swell_scale), "{strategy}");
                assert_eq!(reach.depth.signum(), edge.shape.sign(), "{strategy}");
            }
        }
    }
}

fn assert_same_segment(a: &Segment, b: &Segment, strategy: Strategy) {
    let close = |p: Point, q: Point| (p - q).length() < 1e-9;
    let ok = match (*a, *b) {
        (Segment::Line { to: t1 }, Segment::Line { to: t2 }) => close(t1, t2),
        (Segment::Quadratic { ctrl: c1, to: t1 }, Segment::Quadratic { ctrl: c2, to: t2 }) => {
            close(c1, c2) && close(t1, t2)
        }
        (
            Segment::Cubic {
                ctrl1: a1,
                ctrl2: a2,
                to: t1,
            },
            Segment::Cubic {
                ctrl1: b1,
                ctrl2: b2,
                to: t2,
            },
        ) => close(a1, b1) && close(a2, b2) && close(t1, t2),
        _ => false,
    };
    assert!(ok, "{strategy}: {a:?} != {b:?}");
}
