mod common;
use common::*;

#[cfg(test)]
mod geometry
{
    use std::collections::HashSet;

    use hexchess::prelude::*;

    use super::*;

    #[test]
    fn cube_invariant_is_enforced()
    {
        let _setup = setup::setup();
        assert!(Hex::new(1, -2, 1).is_ok());

        let err = Hex::new(1, 1, 1).unwrap_err();
        assert_eq!(err.kind, Kind::InvalidCoordinate);
        assert!(!err.fatal());
    }

    #[test]
    fn components_stay_within_the_limit()
    {
        let _setup = setup::setup();
        assert_eq!(Hex::checked_axial(LIMIT, -LIMIT).unwrap(), Hex::axial(LIMIT, -LIMIT));
        assert_eq!(Hex::checked_axial(LIMIT, 1).unwrap_err().kind, Kind::InvalidCoordinate);
        assert_eq!(Hex::checked_axial(i32::MAX, 2).unwrap_err().kind, Kind::InvalidCoordinate);
        assert_eq!(Hex::checked_axial(i32::MIN, 0).unwrap_err().kind, Kind::InvalidCoordinate);
        assert!(Hex::new(i32::MAX, i32::MIN + 1, 0).is_err());

        let err = "(2147483647,2)".parse::<Hex>().unwrap_err();
        assert_eq!(err.kind, Kind::ParseError);
        assert!("(-2147483648,0)".parse::<Hex>().is_err());
        assert!("(2000000,-2000000,0)".parse::<Hex>().is_err());
        assert!("(99999999999,0)".parse::<Hex>().is_err());
    }

    #[test]
    fn sentinel_is_not_a_coordinate()
    {
        let _setup = setup::setup();
        assert!(Hex::NONE.is_none());
        assert!(!Hex::ORIGIN.is_none());
        assert!(!hex::map(4).contains(&Hex::NONE));
        assert!(Move::NONE.is_none());
    }

    #[test]
    fn arithmetic()
    {
        let _setup = setup::setup();
        let a = Hex::axial(2, -1);
        let b = Hex::axial(-1, 3);

        assert_eq!(a + b, Hex::axial(1, 2));
        assert_eq!(a - b, Hex::axial(3, -4));
        assert_eq!(a * 3, Hex::axial(6, -3));
        assert_eq!(-a, Hex::axial(-2, 1));
        assert_eq!((a + b).s(), -3);
        assert_eq!(a.distance(b), 4);
        assert_eq!(Hex::axial(3, -1).length(), 3);
    }

    #[test]
    fn unit_vectors()
    {
        let _setup = setup::setup();

        for vector in ORTHOGONALS
        {
            assert_eq!(vector.length(), 1);
            assert!(vector.is_straight_vector());
            assert!(!vector.is_diagonal_vector());
        }

        for vector in DIAGONALS
        {
            assert_eq!(vector.length(), 2);
            assert!(vector.is_diagonal_vector());
            assert!(!vector.is_straight_vector());
        }

        let knights = KNIGHT_OFFSETS.iter().copied().collect::<HashSet<Hex>>();
        assert_eq!(knights.len(), 12);
        for vector in KNIGHT_OFFSETS
        {
            assert_eq!(vector.length(), 3);
            assert!(!vector.is_straight_vector());
            assert!(!vector.is_diagonal_vector());
        }
    }

    #[test]
    fn vector_classification()
    {
        let _setup = setup::setup();

        assert!(Hex::axial(2, -1).is_diagonal_vector());
        assert!(Hex::axial(4, -2).is_diagonal_vector());
        assert!(Hex::axial(-3, -3).is_diagonal_vector());
        assert!(!Hex::axial(3, -1).is_diagonal_vector());
        assert!(!Hex::ORIGIN.is_diagonal_vector());

        assert!(Hex::axial(0, 3).is_straight_vector());
        assert!(Hex::axial(-4, 4).is_straight_vector());
        assert!(!Hex::axial(2, 1).is_straight_vector());
    }

    #[test]
    fn directions_turn_consistently()
    {
        let _setup = setup::setup();

        for direction in Direction::all()
        {
            assert_eq!(direction.clockwise().counterclockwise(), direction);
            assert_eq!(direction.inverse().vector(), -direction.vector());
            assert_eq!(Direction::to(Hex::ORIGIN, direction.vector()), Some(direction));
        }

        for diagonal in Diagonal::all()
        {
            assert_eq!(diagonal.inverse().vector(), -diagonal.vector());
        }

        assert_eq!(Direction::North.clockwise(), Direction::Northeast);
        assert_eq!(Color::White.forward(), Direction::North);
        assert_eq!(Color::Black.forward(), Direction::South);
        assert_eq!(Color::White.pawn_captures(), [Hex::axial(-1, 1), Hex::axial(1, 0)]);
        assert_eq!(Color::Black.pawn_captures(), [Hex::axial(1, -1), Hex::axial(-1, 0)]);
    }

    #[test]
    fn neighbours()
    {
        let _setup = setup::setup();
        let centre = Hex::axial(1, 1);

        let around = hex::neighbours(centre);
        assert_eq!(around[0], Hex::axial(1, 2));
        for neighbour in around
        {
            assert_eq!(centre.distance(neighbour), 1);
        }

        assert_eq!(centre.diagonal_neighbour(Diagonal::all()[0]), Hex::axial(2, 2));
        assert_eq!(centre.neighbour(Direction::South), Hex::axial(1, 0));
    }

    #[test]
    fn map_sizes()
    {
        let _setup = setup::setup();

        assert_eq!(hex::map(0), vec![Hex::ORIGIN]);
        assert_eq!(hex::map(1).len(), 7);
        assert_eq!(hex::map(4).len(), 61);
        assert!(hex::map(4).iter().all(|hex| hex.length() <= 4));
        assert!(hex::map(-2).len() == 1);
    }

    #[test]
    fn tile_kinds_never_touch()
    {
        let _setup = setup::setup();

        for tile in hex::map(3)
        {
            for neighbour in hex::neighbours(tile)
            {
                assert_ne!(tile.tile_kind(), neighbour.tile_kind());
            }
        }
    }

    #[test]
    fn pixels_round_trip()
    {
        let _setup = setup::setup();

        for tile in hex::map(4)
        {
            let centre = tile.to_pixel();
            assert_eq!(Hex::from_pixel(centre).unwrap(), tile);

            let nudged = Point::new(centre.x + 0.2, centre.y - 0.15);
            assert_eq!(Hex::from_pixel(nudged).unwrap(), tile);
        }
    }

    #[test]
    fn pixels_far_off_the_grid()
    {
        let _setup = setup::setup();

        for point in [
            Point::new(1e30, 1e30),
            Point::new(-1e30, 0.0),
            Point::new(f32::NAN, 0.0),
            Point::new(0.0, f32::INFINITY),
        ]
        {
            let err = Hex::from_pixel(point).unwrap_err();
            assert_eq!(err.kind, Kind::InvalidCoordinate);
            assert!(!err.fatal());
        }
    }

    #[test]
    fn notation()
    {
        let _setup = setup::setup();

        assert_eq!(templates::hex("(1,-1)"), Hex::axial(1, -1));
        assert_eq!(templates::hex("( 2, 1, -3 )"), Hex::axial(2, 1));
        assert_eq!(Hex::axial(1, -1).to_string(), "(1,-1,0)");
        assert_eq!(Hex::NONE.to_string(), "(none)");

        assert_eq!("(1,1,1)".parse::<Hex>().unwrap_err().kind, Kind::ParseError);
        assert!("1,1".parse::<Hex>().is_err());
        assert!("(a,1)".parse::<Hex>().is_err());
    }
}
