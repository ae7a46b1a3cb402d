use lsystem_turtle::{DrawOp, Expander, Grammar, LSystemError, Rules};
use std::sync::Arc;

fn expander(axiom: &str, rules: &[(char, &str)]) -> Expander {
    let rules: Rules = rules.iter().map(|&(c, r)| (c, r.to_string())).collect();
    Expander::new(Arc::new(Grammar::new(axiom, rules, 4)))
}

#[test]
fn test_no_rules_keeps_axiom() {
    let mut e = expander("A", &[]);
    assert_eq!(e.get_str(0).unwrap(), "A");
    assert_eq!(e.get_str(5).unwrap(), "A");
    assert!(e.get_draw_ops(5).unwrap().is_empty());
}

#[test]
fn test_axiom_without_rules_keeps_its_ops() {
    let mut e = expander("F+F", &[('X', "XX")]);
    for n in 0..4 {
        assert_eq!(e.get_str(n).unwrap(), "F+F");
        assert_eq!(
            e.get_draw_ops(n).unwrap(),
            &[DrawOp::DrawRel, DrawOp::TurnRightRel, DrawOp::DrawRel]
        );
    }
}

#[test]
fn test_algae() {
    let mut e = expander("A", &[('A', "AB"), ('B', "A")]);
    assert_eq!(e.get_str(0).unwrap(), "A");
    assert_eq!(e.get_str(5).unwrap(), "ABAABABAABAAB");
    assert!(e.get_draw_ops(5).unwrap().is_empty());
}

#[test]
fn test_dragon() {
    let mut e = expander("FX", &[('X', "X+YF+"), ('Y', "-FX-Y")]);
    assert_eq!(e.get_str(2).unwrap(), "FX+YF++-FX-YF+");

    use DrawOp::*;
    assert_eq!(
        e.get_draw_ops(2).unwrap(),
        &[
            DrawRel,      // F
            TurnRightRel, // +
            DrawRel,      // F
            TurnRightRel, // +
            TurnRightRel, // +
            TurnLeftRel,  // -
            DrawRel,      // F
            TurnLeftRel,  // -
            DrawRel,      // F
            TurnRightRel, // +
        ]
    );
}

#[test]
fn test_negative_order_is_rejected() {
    let mut e = expander("F", &[('F', "FF")]);
    assert_eq!(
        e.get_str(-1).unwrap_err(),
        LSystemError::InvalidOrder { order: -1 }
    );
    assert!(matches!(
        e.get_draw_ops(-3),
        Err(LSystemError::InvalidOrder { order: -3 })
    ));
    // Nothing was expanded.
    assert_eq!(e.cached_orders(), 1);
}

#[test]
fn test_expansion_is_memoized() {
    let mut e = expander("F", &[('F', "F+F")]);

    let first = e.get_str(4).unwrap().to_string();
    assert_eq!(e.cached_orders(), 5);

    // Lower and repeated orders come from the cache.
    assert_eq!(e.get_str(4).unwrap(), first);
    assert_eq!(e.get_str(2).unwrap(), "F+F+F+F+F+F+F");
    assert_eq!(e.cached_orders(), 5);

    // A higher order extends the cache by exactly the missing steps.
    e.get_str(6).unwrap();
    assert_eq!(e.cached_orders(), 7);

    let ops = e.get_draw_ops(4).unwrap().to_vec();
    assert_eq!(ops.len(), first.len());
    assert_eq!(e.get_draw_ops(4).unwrap(), ops.as_slice());
}

#[test]
fn test_malformed_number_in_expansion() {
    let mut e = expander("A", &[('A', "F@x")]);
    assert!(e.get_draw_ops(0).unwrap().is_empty());
    assert!(matches!(
        e.get_draw_ops(1),
        Err(LSystemError::MalformedNumber { op: '@', .. })
    ));
}
