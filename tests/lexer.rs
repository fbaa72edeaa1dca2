use jipl::{
    interpreter::{
        lexer::Scanner,
        token::{Token, TokenKind},
    },
    tokenize,
};
use pretty_assertions::assert_eq;

fn kinds(src: &str) -> Vec<TokenKind> {
    tokenize(src).map(|t| t.kind).collect()
}

#[test]
fn scans_a_full_program() {
    use TokenKind::*;

    let src = "def add = function(a, b) { return a + b; };\n\
               for (def i = 0; i <= 10; i++) { out(add(i, [1][0]) % 2 != 0); }\n\
               if (!true == false && 1 >= 2 || 3 > 4 - 5 * 6 / 7) { x = 1; } else { i--; }\n\
               break; continue; \"str\" < 8;";

    assert_eq!(kinds(src),
               vec![Def, Identifier, Assign, Function, LParen, Identifier, Comma, Identifier,
                    RParen, LBrace, Return, Identifier, Plus, Identifier, Semicolon, RBrace,
                    Semicolon, For, LParen, Def, Identifier, Assign, Int, Semicolon, Identifier,
                    LessEqual, Int, Semicolon, Identifier, Increment, RParen, LBrace, Identifier,
                    LParen, Identifier, LParen, Identifier, Comma, LBracket, Int, RBracket,
                    LBracket, Int, RBracket, RParen, Percent, Int, NotEqual, Int, RParen,
                    Semicolon, RBrace, If, LParen, Bang, True, Equal, False, And, Int,
                    GreaterEqual, Int, Or, Int, Greater, Int, Minus, Int, Star, Int, Slash, Int,
                    RParen, LBrace, Identifier, Assign, Int, Semicolon, RBrace, Else, LBrace,
                    Identifier, Decrement, Semicolon, RBrace, Break, Semicolon, Continue,
                    Semicolon, Str, Less, Int, Semicolon, Eof]);
}

#[test]
fn token_text_is_the_source_slice() {
    let tokens = tokenize("def answer = 42;").collect::<Vec<_>>();

    assert_eq!(tokens,
               vec![Token::new(TokenKind::Def, "def", 1),
                    Token::new(TokenKind::Identifier, "answer", 1),
                    Token::new(TokenKind::Assign, "=", 1),
                    Token::new(TokenKind::Int, "42", 1),
                    Token::new(TokenKind::Semicolon, ";", 1),
                    Token::eof(1)]);
}

#[test]
fn string_text_excludes_quotes() {
    let token = tokenize("\"hello world\"").next().unwrap();

    assert_eq!(token, Token::new(TokenKind::Str, "hello world", 1));
}

#[test]
fn unterminated_string_consumes_the_rest() {
    let tokens = tokenize("\"abc def;").collect::<Vec<_>>();

    assert_eq!(tokens, vec![Token::new(TokenKind::Str, "abc def;", 1), Token::eof(1)]);
}

#[test]
fn illegal_characters() {
    use TokenKind::*;

    assert_eq!(kinds("a & b"), vec![Identifier, Illegal, Identifier, Eof]);
    assert_eq!(kinds("a | b"), vec![Identifier, Illegal, Identifier, Eof]);

    let tokens = tokenize("@ é").collect::<Vec<_>>();
    assert_eq!(tokens,
               vec![Token::new(Illegal, "@", 1), Token::new(Illegal, "é", 1), Token::eof(1)]);
}

#[test]
fn longest_match_wins() {
    use TokenKind::*;

    assert_eq!(kinds("&&&"), vec![And, Illegal, Eof]);
    assert_eq!(kinds("==="), vec![Equal, Assign, Eof]);
    assert_eq!(kinds("+++"), vec![Increment, Plus, Eof]);
    assert_eq!(kinds("a_1 _b 9x"), vec![Identifier, Identifier, Int, Identifier, Eof]);
    assert_eq!(kinds("defx iff"), vec![Identifier, Identifier, Eof]);
}

#[test]
fn nul_ends_input() {
    let mut scanner = Scanner::new("a\0b");

    assert_eq!(scanner.next_token().kind, TokenKind::Identifier);
    assert_eq!(scanner.next_token().kind, TokenKind::Eof);
    assert_eq!(scanner.next_token().kind, TokenKind::Eof);
    assert_eq!(scanner.next_token().kind, TokenKind::Eof);
}

#[test]
fn end_of_input_repeats() {
    let mut scanner = Scanner::new("");

    assert!(scanner.next_token().is(TokenKind::Eof));
    assert!(scanner.next_token().is(TokenKind::Eof));
}

#[test]
fn iterator_stops_after_end_of_input() {
    assert_eq!(Scanner::new("x").count(), 2);
    assert_eq!(Scanner::new("").count(), 1);
}

#[test]
fn tracks_lines() {
    let lines = tokenize("a\nb\n\n c").map(|t| t.line).collect::<Vec<_>>();

    assert_eq!(lines, vec![1, 2, 4, 4]);
}

#[test]
fn strings_spanning_lines_advance_the_line_count() {
    let tokens = tokenize("\"one\ntwo\" x").collect::<Vec<_>>();

    assert_eq!(tokens,
               vec![Token::new(TokenKind::Str, "one\ntwo", 1),
                    Token::new(TokenKind::Identifier, "x", 2),
                    Token::eof(2)]);
}
