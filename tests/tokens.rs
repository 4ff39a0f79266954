use basix::interpreter::lexer::{Keyword, TokenKind, TypeName, tokenize};

fn kinds(src: &str) -> Vec<TokenKind> {
    tokenize(src).unwrap_or_else(|e| panic!("'{src}' failed to tokenize: {e}"))
                 .into_iter()
                 .map(|token| token.kind)
                 .collect()
}

#[test]
fn every_token_kind_is_recognized() {
    assert_eq!(kinds("1 2.5 foo int goto true + - * / ^ = ( ) == != < > <= >="),
               vec![TokenKind::Int(1),
                    TokenKind::Float(2.5),
                    TokenKind::Identifier("foo".to_string()),
                    TokenKind::Type(TypeName::Int),
                    TokenKind::Keyword(Keyword::Goto),
                    TokenKind::Bool(true),
                    TokenKind::Plus,
                    TokenKind::Minus,
                    TokenKind::Mul,
                    TokenKind::Div,
                    TokenKind::Pow,
                    TokenKind::Assign,
                    TokenKind::LParen,
                    TokenKind::RParen,
                    TokenKind::Eq,
                    TokenKind::NotEq,
                    TokenKind::Lt,
                    TokenKind::Gt,
                    TokenKind::Lte,
                    TokenKind::Gte,
                    TokenKind::EndOfInput]);
}

#[test]
fn keywords_win_over_identifiers_but_not_inside_them() {
    assert_eq!(kinds("if")[0], TokenKind::Keyword(Keyword::If));
    assert_eq!(kinds("iffy")[0], TokenKind::Identifier("iffy".to_string()));
    assert_eq!(kinds("floaty")[0], TokenKind::Identifier("floaty".to_string()));
}

#[test]
fn a_trailing_dot_is_still_a_float() {
    assert_eq!(kinds("12.")[0], TokenKind::Float(12.0));
    assert_eq!(kinds("12.5")[0], TokenKind::Float(12.5));
}

#[test]
fn quoted_literal_length_decides_char_versus_string() {
    // Either quote style; only the unescaped length matters.
    assert_eq!(kinds("\"x\"")[0], TokenKind::Char('x'));
    assert_eq!(kinds("'x'")[0], TokenKind::Char('x'));
    assert_eq!(kinds("'ab'")[0], TokenKind::String("ab".to_string()));
    assert_eq!(kinds("\"\"")[0], TokenKind::String(String::new()));
}

#[test]
fn only_newline_and_tab_escapes_are_special() {
    assert_eq!(kinds(r"'\n'")[0], TokenKind::Char('\n'));
    assert_eq!(kinds(r"'\t'")[0], TokenKind::Char('\t'));
    assert_eq!(kinds(r#""a\tb""#)[0], TokenKind::String("a\tb".to_string()));
    // Any other escaped rune stands for itself, so this collapses to one rune.
    assert_eq!(kinds(r#""\q""#)[0], TokenKind::Char('q'));
    assert_eq!(kinds(r#""\"""#)[0], TokenKind::Char('"'));
}

#[test]
fn tokens_carry_their_source_span() {
    let tokens = tokenize("10 + 2").unwrap();
    assert_eq!(tokens[0].start.offset, 0);
    assert_eq!(tokens[0].end.offset, 2);
    assert_eq!(tokens[1].start.offset, 3);
    assert_eq!(tokens[1].start.column, 3);
    assert_eq!(tokens[1].start.line, 0);
    assert_eq!(tokens[2].start.offset, 5);

    // The terminator sits just past the last byte.
    assert_eq!(tokens[3].kind, TokenKind::EndOfInput);
    assert_eq!(tokens[3].start.offset, 6);
}

#[test]
fn printed_tokens_retokenize_to_the_same_kinds() {
    let src = "1 + 2.5 * (x - 3) / foo ^ 2 <= 4 == true 'a' \"ab\" '\\n'";
    let original = kinds(src);

    let printed: Vec<String> = tokenize(src).unwrap()
                                            .iter()
                                            .map(ToString::to_string)
                                            .collect();
    let reread = kinds(printed.join(" ").trim_end());

    assert_eq!(original, reread);
}
