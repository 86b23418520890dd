#[cfg(test)]
mod verify {
    use std::collections::HashMap;

    use simplebcs::config::Parameters;
    use simplebcs::language::*;
    use simplebcs::registry::{Call, Driver, Phase, Recorder, TableCache};
    use simplebcs::table::{build, Entry, Source};

    fn registry() -> HashMap<String, GroupId> {
        let mut known = HashMap::new();
        known.insert("ADMBase::lapse".to_string(), GroupId(3));
        known.insert("ADMBase::shift".to_string(), GroupId(4));
        known.insert("HydroBase::rho".to_string(), GroupId(9));
        known
    }

    fn slots(entries: &[(&str, &str)], capacity: usize) -> Vec<Entry> {
        let mut result: Vec<Entry> = entries
            .iter()
            .map(|(name, group_list)| Entry::new(*name, *group_list))
            .collect();
        result.resize(capacity, Entry::default());
        result
    }

    #[test]
    fn horizon_entry() {
        let entries = slots(&[("horizon", "ADMBase::lapse  ADMBase::shift")], 10);
        let (table, errors) = build(&entries, &registry());

        assert!(errors.is_empty());
        assert_eq!(table.len(), 1);

        let horizon = table
            .get("horizon")
            .unwrap();
        assert_eq!(horizon.variables().len(), 2);
        assert!(horizon
            .variables()
            .iter()
            .all(|variable| variable.is_resolved()));
    }

    #[test]
    fn nameless_entry() {
        let entries = slots(&[("flat", "HydroBase::rho"), ("", "ADMBase::lapse")], 10);
        let (table, errors) = build(&entries, &registry());

        assert_eq!(table.len(), 1);
        assert_eq!(errors, vec![ValidationError::MissingName { entry: 1 }]);
        assert_eq!(errors[0].entry(), 1);
    }

    #[test]
    fn empty_group_list() {
        let entries = slots(&[("bad", "")], 10);
        let (table, errors) = build(&entries, &registry());

        assert!(table.is_empty());
        assert!(errors.is_empty());
    }

    #[test]
    fn every_problem_is_reported() {
        let entries = slots(
            &[
                ("flat", "ADMBase::lapse Typo::lapse"),
                ("", "Missing::thing"),
                ("radiative", "HydroBase::rho"),
            ],
            5,
        );
        let (table, errors) = build(&entries, &registry());

        assert_eq!(
            errors,
            vec![
                ValidationError::UnknownVariable {
                    entry: 0,
                    name: "Typo::lapse".to_string()
                },
                ValidationError::UnknownVariable {
                    entry: 1,
                    name: "Missing::thing".to_string()
                },
                ValidationError::MissingName { entry: 1 },
            ]
        );

        let names: Vec<&str> = table
            .groups()
            .iter()
            .map(|group| group.name())
            .collect();
        assert_eq!(names, vec!["flat", "radiative"]);
    }

    #[test]
    fn reference_count_matches_group_list() {
        let entries = slots(
            &[
                ("flat", "ADMBase::lapse Nope::a ADMBase::lapse"),
                ("zero", " HydroBase::rho "),
            ],
            3,
        );
        let (table, _) = build(&entries, &registry());

        for (group, entry) in table
            .groups()
            .iter()
            .zip(entries.iter())
        {
            assert_eq!(
                group
                    .variables()
                    .len(),
                entry
                    .group_list
                    .split_whitespace()
                    .count()
            );
        }
    }

    #[test]
    fn parameter_file_through_to_selection() {
        let parameters = Parameters::from_toml(
            r#"
verbose = true

[[bcs]]
name = "flat"
group_list = "ADMBase::lapse ADMBase::shift"

[[bcs]]
name = "none"
group_list = "HydroBase::rho"

[variables]
"ADMBase::lapse" = 3
"ADMBase::shift" = 4
"HydroBase::rho" = 9
            "#,
        )
        .unwrap();

        let registry = parameters.registry();
        let cache = TableCache::new();

        let table = cache
            .get_or_build(|| {
                parameters
                    .source()
                    .construct(&registry)
                    .map(|outcome| outcome.table)
            })
            .unwrap();

        let mut host = Recorder::new();
        let driver = Driver::new(parameters.verbose);

        assert_eq!(driver.run(Phase::Local, table, &registry, &mut host), Ok(3));
        assert_eq!(driver.run(Phase::Level, table, &registry, &mut host), Ok(3));
        assert_eq!(
            &host.calls[3..],
            &[
                Call::Sync { group: GroupId(3) },
                Call::Sync { group: GroupId(4) },
                Call::Sync { group: GroupId(9) },
            ]
        );
    }

    #[test]
    fn string_source_ignores_resolver() {
        let source = Source::String("flat: Unknown::thing".to_string());
        let outcome = source
            .construct(&registry())
            .unwrap();

        assert!(outcome
            .problems
            .is_empty());
        assert_eq!(outcome.table.len(), 2);
    }

    #[test]
    fn illegal_character_reaches_the_cache() {
        let parameters = Parameters::from_toml("bc_string = \"flat: a::b @\"").unwrap();
        let cache = TableCache::new();

        let result = cache.get_or_build(|| {
            parameters
                .source()
                .construct(&parameters.registry())
                .map(|outcome| outcome.table)
        });

        assert_eq!(result, Err(ParsingError::IllegalCharacter(11, '@')));
        assert!(!cache.is_built());

        let fixed = Parameters::from_toml("bc_string = \"flat: a::b\"").unwrap();
        let table = cache
            .get_or_build(|| {
                fixed
                    .source()
                    .construct(&fixed.registry())
                    .map(|outcome| outcome.table)
            })
            .unwrap();
        assert_eq!(table.len(), 2);
    }
}
