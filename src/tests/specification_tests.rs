#[cfg(test)]
mod tests {
    use crate::models::common::{ ComparisonType, OptimizationDirection };
    use crate::models::family::HoleFamily;
    use crate::models::specification::Specification;
    use crate::errors::SpecError;
    use crate::tests::{ constraint, objective, setup };
    use crate::traits::family::Family;

    #[test]
    fn test_formula_batch_order() {
        setup();
        let spec = Specification::new(
            vec![constraint(ComparisonType::LessEqual, 0.2), constraint(ComparisonType::GreaterEqual, 0.7)],
            Some(objective(OptimizationDirection::Maximize, 0.0))
        );

        assert!(spec.has_optimality());
        assert_eq!(spec.num_properties(), 3);
        assert_eq!(spec.all_constraint_indices(), vec![0, 1]);

        let texts: Vec<String> = spec.properties().iter().map(|f| f.to_string()).collect();
        assert_eq!(texts, vec!["P<=0.2 [F \"goal\"]", "P>=0.7 [F \"goal\"]", "Rmax=? [F \"goal\"]"]);

        let directions: Vec<_> = spec.formulae().iter().map(|f| f.direction).collect();
        assert_eq!(
            directions,
            vec![
                Some(OptimizationDirection::Minimize),
                Some(OptimizationDirection::Maximize),
                Some(OptimizationDirection::Maximize)
            ]
        );
        let alt: Vec<_> = spec.formulae_alt().iter().map(|f| f.direction).collect();
        assert_eq!(
            alt,
            vec![
                Some(OptimizationDirection::Maximize),
                Some(OptimizationDirection::Minimize),
                Some(OptimizationDirection::Minimize)
            ]
        );
    }

    #[test]
    fn test_display() {
        setup();
        let empty = Specification::new(vec![], None);
        assert_eq!(empty.to_string(), "constraints: none, optimality objective: none");
        assert!(empty.formulae().is_empty());

        let spec = Specification::new(
            vec![constraint(ComparisonType::Less, 0.1), constraint(ComparisonType::Greater, 0.9)],
            Some(objective(OptimizationDirection::Minimize, 0.05))
        );
        assert_eq!(
            spec.to_string(),
            "constraints: P<0.1 [F \"goal\"],P>0.9 [F \"goal\"], optimality objective: Rmin=? [F \"goal\"] [eps = 0.05]"
        );
    }

    #[test]
    fn test_optimum_is_owned_by_specification() {
        setup();
        let mut spec = Specification::new(vec![], Some(objective(OptimizationDirection::Minimize, 0.0)));
        spec.optimality_mut().unwrap().update_optimum(4.0).unwrap();
        assert_eq!(spec.optimality().unwrap().optimum, Some(4.0));
        assert!(Specification::new(vec![], None).optimality_mut().is_none());
    }

    #[test]
    fn test_hole_family() {
        setup();
        let family = HoleFamily::new(vec![vec![3, 4, 5], vec![1], vec![0, 2]]).unwrap();
        assert_eq!(family.num_holes(), 3);
        assert_eq!(family.size(), 6);
        assert_eq!(family.hole_options(0), Some(&[3, 4, 5][..]));
        assert_eq!(family.pick_any(), vec![3, 1, 0]);

        assert_eq!(HoleFamily::new(vec![vec![1], vec![]]), Err(SpecError::EmptyHole(1)));
    }

    #[test]
    fn test_hole_family_deserialization_is_validated() {
        setup();
        let family: HoleFamily = serde_yaml::from_str("[[1, 2], [3]]").unwrap();
        assert_eq!(family.pick_any(), vec![1, 3]);
        assert_eq!(serde_yaml::to_string(&family).unwrap(), serde_yaml::to_string(&vec![vec![1u64, 2], vec![3]]).unwrap());

        let err = serde_yaml::from_str::<HoleFamily>("[[1], []]").unwrap_err();
        assert!(err.to_string().contains("Hole 1 has no remaining options"));
        assert!(serde_yaml::from_str::<HoleFamily>("options: [[1], []]").is_err());
    }
}
