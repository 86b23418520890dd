#[cfg(test)]
mod verify {
    use simplebcs::language::*;
    use simplebcs::parsing::{self, reduce, tokenize};

    fn table(content: &str) -> BoundaryTable {
        reduce(&tokenize(content).unwrap())
    }

    #[test]
    fn explicit_none_header() {
        assert_eq!(
            table("none: , a::b"),
            BoundaryTable::from_groups(vec![
                BoundaryGroup::new("none"),
                BoundaryGroup::with_variables("none", vec![VariableRef::qualified("a", "b")]),
            ])
        );
    }

    #[test]
    fn single_group() {
        assert_eq!(
            table("flat: aa::bb c::dd"),
            BoundaryTable::from_groups(vec![
                BoundaryGroup::new("none"),
                BoundaryGroup::with_variables(
                    "flat",
                    vec![
                        VariableRef::qualified("aa", "bb"),
                        VariableRef::qualified("c", "dd"),
                    ]
                ),
            ])
        );
    }

    #[test]
    fn several_groups_keep_order() {
        let result = table("zero: a::b flat: c::d radiative: e::f flat: g::h");
        let names: Vec<&str> = result
            .groups()
            .iter()
            .map(|group| group.name())
            .collect();

        assert_eq!(names, vec!["none", "zero", "flat", "radiative", "flat"]);
        assert_eq!(
            result.groups()[4].variables(),
            &[VariableRef::qualified("g", "h")]
        );
    }

    #[test]
    fn empty_string_gives_only_none() {
        let result = table("");
        assert_eq!(result.len(), 1);
        assert_eq!(result.groups()[0].name(), "none");
        assert!(result.groups()[0].is_empty());
    }

    #[test]
    fn trailing_fragments_are_dropped() {
        let parsed = parsing::parse("flat: aa::bb cc::").unwrap();

        assert_eq!(
            parsed.table,
            BoundaryTable::from_groups(vec![
                BoundaryGroup::new("none"),
                BoundaryGroup::with_variables("flat", vec![VariableRef::qualified("aa", "bb")]),
            ])
        );
        assert_eq!(
            parsed.warnings,
            vec![
                ParsingWarning {
                    offset: 13,
                    token: Token::Identifier("cc".to_string())
                },
                ParsingWarning {
                    offset: 15,
                    token: Token::DoubleColon
                },
            ]
        );
    }

    #[test]
    fn references_are_fully_qualified() {
        let result = table("flat: ADMBase::lapse");
        let lapse = &result.groups()[1].variables()[0];

        assert_eq!(lapse.thorn(), Some("ADMBase"));
        assert_eq!(lapse.local_name(), "lapse");
        assert_eq!(lapse.full_name(), "ADMBase::lapse");
    }
}
