//! Integration tests for rect-anneal.

use rect_anneal::geometry::{overlap_area, total_intersection_area, Field, Rect};
use rect_anneal::input::parse_input;
use rect_anneal::placement::PlacementProblem;
use rect_anneal::sa::{SaConfig, Termination};

mod scenario_tests {
    use super::*;

    const SAMPLE: &str = "2\n6\n6\n2\n3\n4\n1\n3\n4\n5\n2\n";

    #[test]
    fn test_sample_instance_terminates_inside_field() {
        let problem = parse_input(SAMPLE).unwrap().into_problem().unwrap();
        let initial_area = problem.initial_intersection_area();
        assert_eq!(initial_area, 1);

        for seed in 0..20 {
            let result = problem.solve(&SaConfig::default().with_seed(seed)).unwrap();

            assert_eq!(result.rectangles.len(), 2);
            for rect in &result.rectangles {
                assert!(
                    problem.field().contains(rect),
                    "seed {seed}: {rect} outside the field"
                );
            }
            assert!(result.intersection_area <= initial_area);
            assert_eq!(
                result.intersection_area,
                total_intersection_area(&result.rectangles)
            );
        }
    }

    #[test]
    fn test_sample_instance_finds_zero_overlap() {
        // Two 2x2 squares in a 6x6 field overlap on roughly a quarter of
        // random draws, so nearly every run exits on a clean layout.
        let problem = parse_input(SAMPLE).unwrap().into_problem().unwrap();

        let found = (0..10).any(|seed| {
            let result = problem.solve(&SaConfig::default().with_seed(seed)).unwrap();
            result.termination == Termination::TargetReached && result.intersection_area == 0
        });
        assert!(found);
    }

    #[test]
    fn test_same_seed_same_layout() {
        let problem = parse_input(SAMPLE).unwrap().into_problem().unwrap();
        let config = SaConfig::default().with_seed(1234);

        let a = problem.solve(&config).unwrap();
        let b = problem.solve(&config).unwrap();

        assert_eq!(a.rectangles, b.rectangles);
        assert_eq!(a.iterations, b.iterations);
    }

    #[test]
    fn test_many_small_rects_reduce_overlap() {
        // Six 2x2 squares stacked on one spot; a 10x10 field has room for all.
        let rects = vec![Rect::new(0, 2, 2, 0); 6];
        let problem = PlacementProblem::new(Field::new(10, 10), rects).unwrap();

        let result = problem.solve(&SaConfig::default().with_seed(8)).unwrap();

        assert!(result.intersection_area < problem.initial_intersection_area());
        for rect in &result.rectangles {
            assert!(problem.field().contains(rect));
            assert_eq!(rect.area(), 4);
        }
    }
}

mod geometry_tests {
    use super::*;

    #[test]
    fn test_identical_rects_sum_over_pairs() {
        let r = Rect::new(0, 3, 5, 0);
        let rects = vec![r; 4];
        // C(4, 2) = 6
        assert_eq!(total_intersection_area(&rects), 6 * 15);
    }

    #[test]
    fn test_overlap_symmetric_on_sample() {
        let a = Rect::new(2, 3, 4, 1);
        let b = Rect::new(3, 4, 5, 2);
        assert_eq!(overlap_area(&a, &b), overlap_area(&b, &a));
    }
}

#[cfg(feature = "serde")]
mod serde_tests {
    use super::*;

    #[test]
    fn test_config_and_layout_json() {
        let config = SaConfig::default().with_seed(5);
        let json = serde_json::to_string(&config).unwrap();
        let back: SaConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);

        let rect: Rect = serde_json::from_str(r#"{"x1":2,"y1":3,"x2":4,"y2":1}"#).unwrap();
        assert_eq!(rect, Rect::new(2, 3, 4, 1));
        let field: Field = serde_json::from_str(r#"{"width":6,"height":6}"#).unwrap();
        assert_eq!(field, Field::new(6, 6));
    }
}
