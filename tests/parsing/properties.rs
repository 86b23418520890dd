#[cfg(test)]
mod verify {
    use proptest::prelude::*;
    use std::collections::HashMap;

    use simplebcs::formatting::{render, Identity};
    use simplebcs::language::GroupId;
    use simplebcs::parsing::{self, reduce, tokenize};
    use simplebcs::table::{build, Entry};

    fn registry() -> HashMap<String, GroupId> {
        let mut known = HashMap::new();
        known.insert("a::b".to_string(), GroupId(1));
        known.insert("c::d".to_string(), GroupId(2));
        known
    }

    proptest! {
        #[test]
        fn legal_alphabet_always_tokenizes(content in "[A-Za-z0-9_:, \t\r\n]{0,64}") {
            prop_assert!(tokenize(&content).is_ok());
        }

        #[test]
        fn illegal_character_always_fails(
            before in "[a-z: ]{0,16}",
            bad in "[@#.;!-]",
            after in "[a-z: ]{0,16}",
        ) {
            let content = format!("{}{}{}", before, bad, after);
            prop_assert!(tokenize(&content).is_err());
        }

        #[test]
        fn reducing_is_repeatable(content in "[a-z:, ]{0,64}") {
            let tokens = tokenize(&content).unwrap();
            prop_assert_eq!(reduce(&tokens), reduce(&tokens));
        }

        #[test]
        fn implicit_group_comes_first(content in "[a-z:, ]{0,64}") {
            let table = reduce(&tokenize(&content).unwrap());
            prop_assert_eq!(table.groups()[0].name(), "none");
        }

        #[test]
        fn canonical_form_reparses_identically(content in "[a-z_:, \n]{0,64}") {
            let table = parsing::parse(&content).unwrap().table;
            let canonical = render(&Identity, &table);
            let again = parsing::parse(&canonical).unwrap();

            prop_assert_eq!(again.table, table);
            prop_assert!(again.warnings.is_empty());
        }

        #[test]
        fn building_is_repeatable(
            names in proptest::collection::vec("[a-z]{0,4}", 0..10),
            lists in proptest::collection::vec("(a::b|c::d|e::f| ){0,6}", 0..10),
        ) {
            let entries: Vec<Entry> = names
                .iter()
                .zip(lists.iter())
                .map(|(name, list)| Entry::new(name.as_str(), list.as_str()))
                .collect();

            let first = build(&entries, &registry());
            let second = build(&entries, &registry());
            prop_assert_eq!(&first, &second);

            let (table, _) = first;
            for group in table.groups() {
                prop_assert!(!group.is_empty());
            }
        }
    }
}
