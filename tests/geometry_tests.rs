//! Geometry tests - positions, bounds, rectangles and side containment

use tui_terrain::types::{
    Bounds, Bounds2D, Direction, Inclusion, Position, Rectangle, Sides, TerrainError,
};

fn rect(x: i32, y: i32, w: i32, h: i32) -> Rectangle {
    Rectangle::new(Position::new(x, y), w, h)
}

#[test]
fn test_top_edge_of_a_strip_is_inside_a_larger_square() {
    let strip = rect(0, 0, 4, 1);
    let square = rect(0, 0, 10, 10);
    assert!(strip.side_in(&square, Direction::Up, Inclusion::BothInclusive));
    assert!(!strip.side_in(&square, Direction::Left, Inclusion::BothExclusive));
}

#[test]
fn test_fully_inside_implies_every_side() {
    let inner = rect(2, 3, 4, 2);
    let outer = rect(0, 0, 10, 10);
    for inclusion in Inclusion::ALL {
        if inner.fully_inside(&outer, inclusion) {
            assert_eq!(inner.inside(&outer, true, inclusion), Sides::all());
            for side in Direction::ALL {
                assert!(inner.side_in(&outer, side, inclusion), "{side:?} {inclusion:?}");
            }
        }
    }
    assert!(inner.fully_inside(&outer, Inclusion::BothExclusive));
}

#[test]
fn test_overhanging_rectangle_reports_partial_sides() {
    let outer = rect(0, 0, 10, 10);
    let hanging = rect(7, 2, 5, 3);
    let sides = hanging.inside(&outer, false, Inclusion::BothInclusive);
    assert!(sides.contains(Sides::LEFT));
    assert!(!sides.contains(Sides::RIGHT));
    assert!(!hanging.fully_inside(&outer, Inclusion::BothInclusive));
}

#[test]
fn test_point_containment_matches_the_axis_ranges() {
    let r = rect(-2, 1, 5, 3);
    for y in -1..6 {
        for x in -4..5 {
            let p = Position::new(x, y);
            let expected = (r.x()..=r.right()).contains(&x) && (r.y()..=r.bottom()).contains(&y);
            assert_eq!(p.inside_rectangle(&r), expected, "{p:?}");
        }
    }
}

#[test]
fn test_relative_positions_follow_screen_axes() {
    let p = Position::new(5, 5);
    assert_eq!(p.relative(Direction::Up, 2), Position::new(5, 3));
    assert_eq!(p.relative(Direction::Down, 1), Position::new(5, 6));
    assert_eq!(p.relative(Direction::Left, 3), Position::new(2, 5));
    for d in Direction::ALL {
        assert_eq!(p.relative(d, 4).relative(d.opposite(), 4), p);
    }
}

#[test]
fn test_inclusion_modes_on_bounds() {
    let b = Bounds::new(0, 4);
    assert!(b.contains(0, Inclusion::OnlyLeftInclusive));
    assert!(!b.contains(4, Inclusion::OnlyLeftInclusive));
    assert!(b.contains(4, Inclusion::OnlyRightInclusive));
    assert!(!b.contains(0, Inclusion::BothExclusive));
    assert!(b.contains(2, Inclusion::BothExclusive));
}

#[test]
fn test_shifting_bounds_moves_only_the_named_axis() {
    let mut b = Bounds2D::from_scalars(0, 9, 0, 4);
    b.shift(Direction::Left, 3);
    assert_eq!(b, Bounds2D::from_scalars(-3, 6, 0, 4));
    b.shift(Direction::Down, 2);
    assert_eq!(b, Bounds2D::from_scalars(-3, 6, 2, 6));
}

#[test]
fn test_enum_values_parse_at_the_boundary() {
    assert_eq!("left".parse::<Direction>(), Ok(Direction::Left));
    assert_eq!("both-exclusive".parse::<Inclusion>(), Ok(Inclusion::BothExclusive));
    assert!(matches!(
        "sideways".parse::<Direction>(),
        Err(TerrainError::InvalidEnumValue { .. })
    ));
    assert!(Rectangle::try_new(Position::ZERO, 0, 3).is_err());
}
