#[cfg(test)]
mod verify {
    use simplebcs::language::*;
    use simplebcs::parsing::{scan, tokenize};

    fn ident(text: &str) -> Token {
        Token::Identifier(text.to_string())
    }

    #[test]
    fn empty_string() {
        assert_eq!(tokenize(""), Ok(vec![]));
    }

    #[test]
    fn header_with_stray_comma() {
        assert_eq!(
            tokenize("none: , a::b"),
            Ok(vec![
                ident("none"),
                Token::SingleColon,
                ident("a"),
                Token::DoubleColon,
                ident("b"),
            ])
        );
    }

    #[test]
    fn multiline_configuration() {
        let content = r#"
flat:
    ADMBase::lapse,
    ADMBase::shift
radiative:	Hydro::rho
        "#;

        assert_eq!(
            tokenize(content),
            Ok(vec![
                ident("flat"),
                Token::SingleColon,
                ident("ADMBase"),
                Token::DoubleColon,
                ident("lapse"),
                ident("ADMBase"),
                Token::DoubleColon,
                ident("shift"),
                ident("radiative"),
                Token::SingleColon,
                ident("Hydro"),
                Token::DoubleColon,
                ident("rho"),
            ])
        );
    }

    #[test]
    fn case_is_preserved() {
        assert_eq!(
            tokenize("Flat: ADM_Base::Lapse2"),
            Ok(vec![
                ident("Flat"),
                Token::SingleColon,
                ident("ADM_Base"),
                Token::DoubleColon,
                ident("Lapse2"),
            ])
        );
    }

    #[test]
    fn at_sign_is_illegal() {
        let result = tokenize("flat: a::b@");
        assert_eq!(result, Err(ParsingError::IllegalCharacter(10, '@')));

        let error = result.unwrap_err();
        assert_eq!(error.offset(), 10);
        assert_eq!(error.to_string(), "illegal character in input: '@'");
    }

    #[test]
    fn first_illegal_character_wins() {
        assert_eq!(
            tokenize("a.b;c"),
            Err(ParsingError::IllegalCharacter(1, '.'))
        );
    }

    #[test]
    fn offsets_after_newlines() {
        let lexemes = scan("a:\n b::c").unwrap();
        let offsets: Vec<usize> = lexemes
            .iter()
            .map(|lexeme| lexeme.offset)
            .collect();
        assert_eq!(offsets, vec![0, 1, 4, 5, 7]);
    }
}
