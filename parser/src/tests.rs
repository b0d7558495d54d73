//! FILENAME: parser/src/tests.rs
//! PURPOSE: Consolidated unit tests for the parser crate.

use crate::lexer::{tokenize, Lexer, TokenizeError};
use crate::params::{EmptyParams, ParamRow, ParamTypes};
use crate::parser::{parse, SyntaxError};
use crate::stack::TokenStack;
use crate::token::{Token, TokenKind, ValueType};

fn types() -> ParamTypes {
    let mut types = ParamTypes::default();
    types.insert("s2001".to_string(), ValueType::Number);
    types.insert("s6004".to_string(), ValueType::Number);
    types.insert("bool_param".to_string(), ValueType::Bool);
    types
}

fn lex(input: &str) -> Vec<Token> {
    tokenize(input, &types()).unwrap()
}

fn texts(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|t| t.kind).collect()
}

// ========================================
// LEXER TESTS
// ========================================

#[test]
fn lexer_tokenizes_simple_comparison_chain() {
    let tokens = lex("1=2 AND 1=1");

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Number,
            TokenKind::CompOp,
            TokenKind::Number,
            TokenKind::LogOp,
            TokenKind::Number,
            TokenKind::CompOp,
            TokenKind::Number,
        ]
    );
    assert_eq!(texts(&tokens), vec!["1", "=", "2", "AND", "1", "=", "1"]);
    assert_eq!(tokens[0].value_type, ValueType::Number);
}

#[test]
fn lexer_tokenizes_comparison_operators() {
    let tokens = lex("> < >= <= = !=");

    assert!(tokens.iter().all(|t| t.kind == TokenKind::CompOp));
    assert_eq!(texts(&tokens), vec![">", "<", ">=", "<=", "=", "!="]);
}

#[test]
fn lexer_reads_comparisons_without_spaces() {
    let tokens = lex("s2001>=10");
    assert_eq!(texts(&tokens), vec!["s2001", ">=", "10"]);
}

#[test]
fn lexer_tokenizes_arithmetic_and_brackets() {
    let types = ParamTypes::default();
    let mut lexer = Lexer::new("(1+2)*3/4-5", &types);

    assert_eq!(lexer.next_token(), Ok(Some(Token::symbol(TokenKind::LParen, "("))));
    assert_eq!(lexer.next_token(), Ok(Some(Token::number_literal("1"))));
    assert_eq!(lexer.next_token(), Ok(Some(Token::symbol(TokenKind::ArithOp, "+"))));
    assert_eq!(lexer.next_token(), Ok(Some(Token::number_literal("2"))));
    assert_eq!(lexer.next_token(), Ok(Some(Token::symbol(TokenKind::RParen, ")"))));
    assert_eq!(lexer.next_token(), Ok(Some(Token::symbol(TokenKind::ArithOp, "*"))));
    assert_eq!(lexer.next_token(), Ok(Some(Token::number_literal("3"))));
    assert_eq!(lexer.next_token(), Ok(Some(Token::symbol(TokenKind::ArithOp, "/"))));
    assert_eq!(lexer.next_token(), Ok(Some(Token::number_literal("4"))));
    assert_eq!(lexer.next_token(), Ok(Some(Token::symbol(TokenKind::ArithOp, "-"))));
    assert_eq!(lexer.next_token(), Ok(Some(Token::number_literal("5"))));
    assert_eq!(lexer.next_token(), Ok(None));
}

#[test]
fn lexer_classifies_words() {
    let tokens = lex("true false AND OR exists s2001 bool_param mystery");

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Bool,
            TokenKind::Bool,
            TokenKind::LogOp,
            TokenKind::LogOp,
            TokenKind::ExistsKeyword,
            TokenKind::Ident,
            TokenKind::Ident,
            TokenKind::Ident,
        ]
    );
    assert_eq!(tokens[0].value_type, ValueType::Bool);
    assert_eq!(tokens[5].value_type, ValueType::Number);
    assert_eq!(tokens[6].value_type, ValueType::Bool);
    assert_eq!(tokens[7].value_type, ValueType::Unknown);
}

#[test]
fn lexer_keywords_are_case_sensitive() {
    let tokens = lex("and True EXISTS");
    assert!(tokens.iter().all(|t| t.kind == TokenKind::Ident));
}

#[test]
fn lexer_identifiers_allow_digits_and_underscores() {
    let tokens = lex("stated_capital2 x_1_y");
    assert_eq!(texts(&tokens), vec!["stated_capital2", "x_1_y"]);
    assert!(tokens.iter().all(|t| t.kind == TokenKind::Ident));
}

#[test]
fn lexer_reads_decimal_numbers() {
    let tokens = lex("3.14 0.1 10.");
    assert_eq!(texts(&tokens), vec!["3.14", "0.1", "10."]);
    assert!(tokens.iter().all(|t| t.kind == TokenKind::Number));
}

#[test]
fn lexer_stops_number_when_prefix_no_longer_parses() {
    // "1e" is not a float, so the number ends at "1" and "e5" is a word.
    let tokens = lex("1e5");
    assert_eq!(texts(&tokens), vec!["1", "e5"]);
    assert_eq!(kinds(&tokens), vec![TokenKind::Number, TokenKind::Ident]);

    // A second dot cannot start a new number.
    assert_eq!(tokenize("1.5.3", &types()), Err(TokenizeError { position: 3 }));
}

#[test]
fn lexer_skips_all_whitespace() {
    let tokens = lex("  1\t=\n1  ");
    assert_eq!(texts(&tokens), vec!["1", "=", "1"]);
}

#[test]
fn lexer_rejects_lone_exclamation() {
    assert_eq!(
        tokenize("a ! b", &types()),
        Err(TokenizeError { position: 2 })
    );
    assert_eq!(tokenize("a !", &types()), Err(TokenizeError { position: 2 }));
}

#[test]
fn lexer_rejects_unknown_characters() {
    assert_eq!(tokenize("1 # 2", &types()), Err(TokenizeError { position: 2 }));
    assert_eq!(tokenize(".5", &types()), Err(TokenizeError { position: 0 }));
}

#[test]
fn lexer_error_position_counts_characters() {
    assert_eq!(tokenize("x = ü", &types()), Err(TokenizeError { position: 4 }));
}

#[test]
fn lexer_error_message() {
    let err = tokenize("$", &types()).unwrap_err();
    assert_eq!(err.to_string(), "invalid token at position: 0");
}

#[test]
fn token_number_uses_six_fraction_digits() {
    assert_eq!(Token::number(3.0).text, "3.000000");
    assert_eq!(Token::number(-0.5).text, "-0.500000");
    assert_eq!(Token::number(1.0 / 3.0).text, "0.333333");
}

#[test]
fn token_number_renders_non_finite_values() {
    assert_eq!(Token::number(1e308 * 10.0).text, "+Inf");
    assert_eq!(Token::number(-1e308 * 10.0).text, "-Inf");
    assert_eq!(Token::number(f64::NAN).text, "NaN");
    assert_eq!(Token::number(f64::INFINITY).value_type, ValueType::Number);
}

// ========================================
// GRAMMAR PARSER TESTS
// ========================================

#[test]
fn parser_emits_flat_logic_chain() {
    let tokens = lex("1=2 AND 1=1 OR 1=1");
    let calc = parse(&tokens, &EmptyParams).unwrap();
    assert_eq!(calc, tokens);
}

#[test]
fn parser_keeps_brackets_around_logic() {
    let tokens = lex("1=2 AND (1=1 OR 1=1)");
    let calc = parse(&tokens, &EmptyParams).unwrap();
    assert_eq!(
        texts(&calc),
        vec!["1", "=", "2", "AND", "(", "1", "=", "1", "OR", "1", "=", "1", ")"]
    );
}

#[test]
fn parser_emits_arithmetic_span_with_nested_brackets() {
    let tokens = lex("s2001 > (s6004 *0.1)");
    let calc = parse(&tokens, &EmptyParams).unwrap();
    assert_eq!(texts(&calc), vec!["s2001", ">", "(", "s6004", "*", "0.1", ")"]);
}

#[test]
fn parser_accepts_bracketed_boolean() {
    let tokens = lex("(true) AND (s2001 > 1)");
    let calc = parse(&tokens, &EmptyParams).unwrap();
    assert_eq!(
        texts(&calc),
        vec!["(", "true", ")", "AND", "(", "s2001", ">", "1", ")"]
    );
}

#[test]
fn parser_accepts_bare_identifier() {
    let tokens = lex("bool_param");
    let calc = parse(&tokens, &EmptyParams).unwrap();
    assert_eq!(calc, tokens);
}

#[test]
fn parser_resolves_exists_against_row() {
    let tokens = lex("exists(founder_url) = false AND exists(s2001)");
    let row = ParamRow::new().with("s2001", "10");

    let calc = parse(&tokens, &row).unwrap();

    assert_eq!(
        calc,
        vec![
            Token::boolean(false),
            Token::symbol(TokenKind::CompOp, "="),
            Token::boolean(false),
            Token::symbol(TokenKind::LogOp, "AND"),
            Token::boolean(true),
        ]
    );
}

#[test]
fn parser_exists_ignores_declared_type() {
    let tokens = lex("exists(mystery)");
    let row = ParamRow::new().with("mystery", "\"text\"");
    assert_eq!(parse(&tokens, &row).unwrap(), vec![Token::boolean(true)]);
}

#[test]
fn parser_rejects_exists_with_number() {
    let tokens = lex("exists(5)");
    assert_eq!(parse(&tokens, &EmptyParams), Err(SyntaxError));
}

#[test]
fn parser_rejects_unclosed_exists() {
    let tokens = lex("exists(s2001 = false");
    assert_eq!(parse(&tokens, &EmptyParams), Err(SyntaxError));
}

#[test]
fn parser_rejects_leftover_tokens() {
    assert_eq!(parse(&lex("1 = 1 )"), &EmptyParams), Err(SyntaxError));
    assert_eq!(parse(&lex("1 1"), &EmptyParams), Err(SyntaxError));
    assert_eq!(parse(&lex("1 ="), &EmptyParams), Err(SyntaxError));
}

#[test]
fn parser_rejects_leading_operator() {
    assert_eq!(parse(&lex("AND true"), &EmptyParams), Err(SyntaxError));
    assert_eq!(parse(&lex("- 1 > 0"), &EmptyParams), Err(SyntaxError));
}

#[test]
fn parser_rejects_empty_input() {
    assert_eq!(parse(&[], &EmptyParams), Err(SyntaxError));
}

#[test]
fn parser_rejects_boolean_inside_arithmetic_brackets() {
    // "(true + 1)" is neither an arithmetic term nor a logic expression.
    assert_eq!(parse(&lex("(true + 1) > 0"), &EmptyParams), Err(SyntaxError));
}

#[test]
fn syntax_error_message() {
    assert_eq!(SyntaxError.to_string(), "found a syntax error");
}

// ========================================
// STACK TESTS
// ========================================

#[test]
fn stack_is_lifo() {
    let mut stack = TokenStack::new();
    assert!(stack.is_empty());
    assert_eq!(stack.pop(), None);

    stack.push(Token::number_literal("1"));
    stack.push(Token::number_literal("2"));

    assert_eq!(stack.len(), 2);
    assert_eq!(stack.peek(), Some(&Token::number_literal("2")));
    assert_eq!(stack.pop(), Some(Token::number_literal("2")));
    assert_eq!(stack.pop(), Some(Token::number_literal("1")));
    assert!(stack.is_empty());
}

#[test]
fn stack_grows_past_inline_capacity() {
    let mut stack = TokenStack::with_capacity(2);
    for i in 0..20 {
        stack.push(Token::number(f64::from(i)));
    }
    assert_eq!(stack.len(), 20);
    assert_eq!(stack.peek().map(|t| t.text.as_str()), Some("19.000000"));
}
