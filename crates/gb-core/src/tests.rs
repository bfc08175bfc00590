//! Unit tests for gb-core primitives.

#[cfg(test)]
mod algorithm {
    use crate::Algorithm;

    #[test]
    fn all_in_report_order() {
        let labels: Vec<_> = Algorithm::ALL.iter().map(|a| a.label()).collect();
        assert_eq!(labels, ["Dijkstra", "A*", "A*(alt)", "Greedy"]);
    }

    #[test]
    fn index_matches_position() {
        for (i, a) in Algorithm::ALL.iter().enumerate() {
            assert_eq!(a.index(), i);
        }
    }

    #[test]
    fn only_dijkstra_is_reference() {
        assert!(Algorithm::Dijkstra.is_reference());
        assert!(!Algorithm::AStar.is_reference());
        assert!(!Algorithm::AStarAlt.is_reference());
        assert!(!Algorithm::Greedy.is_reference());
    }

    #[test]
    fn parse_by_id_and_label() {
        assert_eq!("astar".parse::<Algorithm>().unwrap(), Algorithm::AStar);
        assert_eq!("A*(alt)".parse::<Algorithm>().unwrap(), Algorithm::AStarAlt);
        assert_eq!(" Greedy ".parse::<Algorithm>().unwrap(), Algorithm::Greedy);
        assert!("bfs".parse::<Algorithm>().is_err());
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(Algorithm::AStarAlt.to_string(), "A*(alt)");
    }
}

#[cfg(test)]
mod rng {
    use crate::GridRng;

    #[test]
    fn same_seed_same_sequence() {
        let pool = [1, 3, 5, 7, 9, -1];
        let mut a = GridRng::new(7);
        let mut b = GridRng::new(7);
        let xs: Vec<i32> = (0..64).map(|_| *a.choose(&pool).unwrap()).collect();
        let ys: Vec<i32> = (0..64).map(|_| *b.choose(&pool).unwrap()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = GridRng::new(1);
        let empty: [i32; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn entropy_seeded_draws_from_slice() {
        let pool = [2, 4, 6];
        let mut rng = GridRng::from_seed_opt(None);
        for _ in 0..1_000 {
            assert!(pool.contains(rng.choose(&pool).unwrap()));
        }
    }
}

#[cfg(test)]
mod error {
    use crate::GbError;

    #[test]
    fn schema_violation_message_names_line() {
        let e = GbError::schema(4, "expected 12 fields, found 11");
        assert_eq!(e.to_string(), "schema violation at line 4: expected 12 fields, found 11");
    }

    #[test]
    fn io_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let e: GbError = io.into();
        assert!(matches!(e, GbError::Io(_)));
    }
}
