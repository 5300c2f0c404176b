#[cfg(test)]
mod tests {
    use crate::config::{ ConfigError, FamilyConfig, SpecificationConfig };
    use crate::config::CandidatesConfig;
    use crate::errors::SpecError;
    use crate::models::common::{ ComparisonType, Feasibility, OptimizationDirection };
    use crate::tests::setup;
    use crate::traits::family::Family;

    const SPEC: &str = r#"
constraints:
  - formula: 'P>=0.9 [F "done"]'
    comparison: ">="
    threshold: 0.9
  - formula: 'R{"cost"}<=20 [F "done"]'
    comparison: "<="
    threshold: 20
    reward: true
optimality:
  formula: 'R{"steps"}min=? [F "done"]'
  direction: minimize
  reward: true
  epsilon: 0.05
"#;

    #[test]
    fn test_build_specification() {
        setup();
        let spec = SpecificationConfig::from_yaml_str(SPEC).unwrap().build().unwrap();
        assert_eq!(spec.constraints.len(), 2);
        assert_eq!(spec.constraints[0].op, ComparisonType::GreaterEqual);
        assert!(!spec.constraints[0].is_reward());
        assert!(spec.constraints[1].is_reward());
        assert_eq!(spec.constraints[1].threshold, 20.0);

        let opt = spec.optimality().unwrap();
        assert!(opt.minimizing);
        assert_eq!(opt.epsilon, 0.05);
        assert_eq!(opt.formula.direction, Some(OptimizationDirection::Minimize));
    }

    #[test]
    fn test_optimality_is_optional() {
        setup();
        let yaml = "constraints:\n  - formula: P<0.1\n    comparison: '<'\n    threshold: 0.1\n";
        let spec = SpecificationConfig::from_yaml_str(yaml).unwrap().build().unwrap();
        assert!(!spec.has_optimality());

        let yaml = "optimality:\n  formula: Pmax=?\n  direction: max\n";
        let spec = SpecificationConfig::from_yaml_str(yaml).unwrap().build().unwrap();
        assert!(spec.constraints.is_empty());
        assert_eq!(spec.optimality().unwrap().epsilon, 0.0);
    }

    #[test]
    fn test_invalid_specification_is_rejected() {
        setup();
        let yaml = "constraints:\n  - formula: P<inf\n    comparison: '<'\n    threshold: .inf\n";
        let err = SpecificationConfig::from_yaml_str(yaml).unwrap().build().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSpecification(SpecError::InvalidThreshold(_))));

        let yaml = "optimality:\n  formula: Rmin=?\n  direction: minimize\n  epsilon: -1\n";
        let err = SpecificationConfig::from_yaml_str(yaml).unwrap().build().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSpecification(SpecError::InvalidEpsilon(_))));

        assert!(matches!(SpecificationConfig::from_yaml_str("constraints: 3"), Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_candidates_drive_the_optimum() {
        setup();
        let mut spec = SpecificationConfig::from_yaml_str(SPEC).unwrap().build().unwrap();
        let candidates: CandidatesConfig = serde_yaml::from_str(
            r#"
candidates:
  - name: first
    constraints: [0.95, 12.0]
    optimality: 30.0
  - name: skipped
    constraints: [0.5, null]
    optimality: 10.0
  - name: better
    constraints: [0.91, .inf]
    optimality: 20.0
  - name: best
    constraints: [0.99, 19.0]
    optimality: 20.0
"#
        ).unwrap();

        let mut accepted = Vec::new();
        for candidate in &candidates.candidates {
            let result = candidate.evaluate(&spec).unwrap();
            if let Some(value) = result.improving_value() {
                spec.optimality_mut().unwrap().update_optimum(value).unwrap();
                accepted.push(candidate.name.clone().unwrap());
            }
        }

        // "better" has an infinite expected cost, "skipped" violates the first constraint
        assert_eq!(accepted, vec!["first", "best"]);
        assert_eq!(spec.optimality().unwrap().optimum, Some(20.0));
    }

    #[test]
    fn test_candidate_with_wrong_arity() {
        setup();
        let spec = SpecificationConfig::from_yaml_str(SPEC).unwrap().build().unwrap();
        let candidates: CandidatesConfig = serde_yaml::from_str(
            "candidates:\n  - constraints: [0.95, 1.0, 2.0]\n  - constraints: [0.95]\n"
        ).unwrap();
        for candidate in &candidates.candidates {
            let err = candidate.evaluate(&spec).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidSpecification(SpecError::ResultCountMismatch { expected: 2, .. })));
        }
    }

    #[test]
    fn test_family_evaluation() {
        setup();
        let spec = SpecificationConfig::from_yaml_str(SPEC).unwrap().build().unwrap();
        let config = FamilyConfig::from_yaml_str(
            r#"
holes: [[0, 1], [2, 3, 4]]
constraints:
  - primary: 0.97
    secondary: 0.85
  - primary: 5.0
    secondary: 15.0
    feasibility: satisfied
optimality:
  primary: 11.0
  secondary: 40.0
  can_improve: true
"#
        ).unwrap();

        let family = config.family().unwrap();
        assert_eq!(family.size(), 6);
        assert_eq!(family.pick_any(), vec![0, 2]);

        let result = config.evaluate(&spec).unwrap();
        assert_eq!(result.constraints_result.feasibility, Feasibility::Undecided);
        assert_eq!(result.constraints_result.undecided_constraints, vec![0]);

        let improving = result.improving(&family);
        assert_eq!(improving.assignment, None);
        assert!(improving.can_improve);
        assert_eq!(result.undecided_result().unwrap().primary, 11.0);
    }

    #[test]
    fn test_family_with_empty_hole() {
        setup();
        let config = FamilyConfig::from_yaml_str("holes: [[1], []]\n").unwrap();
        assert!(matches!(config.family(), Err(ConfigError::InvalidSpecification(SpecError::EmptyHole(1)))));
    }
}
