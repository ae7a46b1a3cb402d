use lsystem_turtle::{DrawOp, LSystemError, OpKind, tokenize};

#[test]
fn test_empty_and_unknown_input() {
    assert!(tokenize("").unwrap().is_empty());
    assert!(tokenize("qwerty").unwrap().is_empty());
    assert!(tokenize("XYZ AB 123 .").unwrap().is_empty());
}

#[test]
fn test_scale_modifiers() {
    assert_eq!(
        tokenize("@4  @i.25  @q16  @qi0.0625").unwrap(),
        vec![DrawOp::Scale(4.0); 4]
    );
}

#[test]
fn test_branch_with_modified_scale() {
    let ops = tokenize("F+f[@iq2.0|]").unwrap();
    assert_eq!(ops.len(), 7);
    assert_eq!(ops[..4], [DrawOp::DrawRel, DrawOp::TurnRightRel, DrawOp::DrawRel, DrawOp::Push]);
    let DrawOp::Scale(s) = ops[4] else {
        panic!("expected a scale, got {:?}", ops[4]);
    };
    assert!((s - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-6);
    assert_eq!(ops[5..], [DrawOp::Turn180, DrawOp::Pop]);
}

#[test]
fn test_full_operator_table() {
    use DrawOp::*;
    assert_eq!(
        tokenize(r"FG-+DM\90/270!|@5<1>2C99[]").unwrap(),
        vec![
            DrawRel,
            MoveRel,
            TurnLeftRel,
            TurnRightRel,
            DrawAbs,
            MoveAbs,
            TurnLeftAbs(90.0),
            TurnRightAbs(270.0),
            InvertTurns,
            Turn180,
            Scale(5.0),
            DecrementColour(1.0),
            IncrementColour(2.0),
            SetColour(99.0),
            Push,
            Pop,
        ]
    );
}

#[test]
fn test_case_insensitive_operators() {
    assert_eq!(tokenize("fgdmc7").unwrap(), tokenize("FGDMC7").unwrap());
    assert_eq!(tokenize("@Q16").unwrap(), vec![DrawOp::Scale(4.0)]);
}

#[test]
fn test_only_six_kinds_carry_values() {
    let with_values: Vec<OpKind> = OpKind::ALL.into_iter().filter(|k| k.takes_value()).collect();
    assert_eq!(
        with_values,
        [
            OpKind::TurnLeftAbs,
            OpKind::TurnRightAbs,
            OpKind::Scale,
            OpKind::DecrementColour,
            OpKind::IncrementColour,
            OpKind::SetColour,
        ]
    );

    for op in tokenize("FG-+DM!|[]").unwrap() {
        assert_eq!(op.value(), None, "{op:?} should carry no value");
    }
    for kind in OpKind::ALL {
        assert_eq!(OpKind::from_char(kind.symbol()), Some(kind));
        assert_eq!(kind.with_value(1.0).kind(), kind);
    }
}

#[test]
fn test_literal_is_not_rescanned() {
    // `C` after a literal is an operator again.
    assert_eq!(
        tokenize("C1.5C2").unwrap(),
        vec![DrawOp::SetColour(1.5), DrawOp::SetColour(2.0)]
    );
    assert_eq!(tokenize("@2.F").unwrap(), vec![DrawOp::Scale(2.0), DrawOp::DrawRel]);
}

#[test]
fn test_malformed_number() {
    let err = tokenize("F>x1").unwrap_err();
    assert_eq!(
        err,
        LSystemError::MalformedNumber {
            op: '>',
            text: String::new(),
            position: 1,
            remaining: "x1".to_string(),
        }
    );

    match tokenize("FFc.").unwrap_err() {
        LSystemError::MalformedNumber { op, text, position, .. } => {
            assert_eq!(op, 'c');
            assert_eq!(text, ".");
            assert_eq!(position, 2);
        }
        other => panic!("unexpected error {other:?}"),
    }

    // Modifiers alone are not a number.
    assert!(tokenize("@qi").is_err());
}

#[test]
fn test_reciprocal_of_zero_is_malformed() {
    for input in ["@i0", "F@qi0.0", "/I.0"] {
        assert!(
            matches!(tokenize(input), Err(LSystemError::MalformedNumber { .. })),
            "{input:?} should not tokenize"
        );
    }
    assert_eq!(tokenize("@0").unwrap(), vec![DrawOp::Scale(0.0)]);
}
