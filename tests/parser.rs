use jipl::{
    error::ParseError,
    interpreter::token::TokenKind,
    parse, tokenize,
};
use pretty_assertions::assert_eq;

fn render(src: &str) -> String {
    let (program, errors) = parse(tokenize(src));
    assert!(errors.is_empty(), "unexpected parse errors for {src:?}: {errors:?}");

    program.to_string()
}

fn first_error(src: &str) -> ParseError {
    let (_, errors) = parse(tokenize(src));

    errors.into_iter()
          .next()
          .unwrap_or_else(|| panic!("{src:?} parsed without errors"))
}

const PRECEDENCE_CASES: &[(&str, &str)] =
    &[("-a * b;", "((-a)*b)"),
      ("!-a;", "(!(-a))"),
      ("a + b + c;", "((a+b)+c)"),
      ("a + b * c + d / e - f;", "(((a+(b*c))+(d/e))-f)"),
      ("5 > 4 == 3 < 4;", "((5>4)==(3<4))"),
      ("3 + 4 * 5 == 3 * 1 + 4 * 5;", "((3+(4*5))==((3*1)+(4*5)))"),
      ("1 + (2 + 3) + 4;", "((1+(2+3))+4)"),
      ("-(5 + 5);", "(-(5+5))"),
      ("!(true == true);", "(!(true==true))"),
      ("a + add(b * c) + d;", "((a+add((b*c)))+d)"),
      ("add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8));", "add(a,b,1,(2*3),(4+5),add(6,(7*8)))"),
      ("a * [1, 2, 3, 4][b * c] * d;", "((a*([1,2,3,4][(b*c)]))*d)"),
      ("add(a * b[2], b[1], 2 * [1, 2][1]);", "add((a*(b[2])),(b[1]),(2*([1,2][1])))"),
      ("var1 + var2 * var3;", "(var1+(var2*var3))"),
      ("-10/(2+3);", "((-10)/(2+3))"),
      ("777++;", "(777++)"),
      ("a && b || c;", "((a&&b)||c)"),
      ("x++ + 1;", "((x++)+1)"),
      ("-x++;", "(-(x++))"),
      ("10 % 3 * 2;", "((10%3)*2)")];

#[test]
fn operator_precedence() {
    for (src, expected) in PRECEDENCE_CASES {
        assert_eq!(render(src), *expected, "source: {src}");
    }
}

#[test]
fn rendered_single_expressions_parse_back_to_themselves() {
    for (src, _) in PRECEDENCE_CASES {
        let rendered = render(src);
        assert_eq!(render(&format!("{rendered};")), rendered, "source: {src}");
    }
}

#[test]
fn expression_statements_render_without_separators() {
    assert_eq!(render("a; b;"), "ab");
    assert_eq!(render("(1 + 2); (3 + 4);"), "(1+2)(3+4)");
}

#[test]
fn statements_and_keyword_expressions() {
    let cases = [("def x = 5;", "def x = 5;"),
                 ("return x + 1;", "return (x+1);"),
                 ("return;", "return;"),
                 ("x = y + 1;", "x = (y+1)"),
                 ("if (x < y) { x; } else { y; }", "if ((x<y)) {x} else {y}"),
                 ("if (x) { }", "if (x) {}"),
                 ("function add(a, b) { a + b; }", "function add(a,b){(a+b)}"),
                 ("function() { return 1; }", "function(){return 1;}"),
                 ("for (def i = 0; i < 10; i++) { out(i); }", "for (def i = 0; (i<10); (i++)) {out(i)}"),
                 ("[1, 2 * 2, 3 + 3];", "[1,(2*2),(3+3)]"),
                 ("[];", "[]"),
                 ("\"hello world\";", "\"hello world\""),
                 ("def a = 1; a;", "def a = 1;a")];

    for (src, expected) in cases {
        assert_eq!(render(src), expected, "source: {src}");
    }
}

#[test]
fn semicolons_after_expressions_are_optional() {
    assert_eq!(render("1 + 2"), "(1+2)");
    assert_eq!(render("def x = 1 x"), "def x = 1;x");
}

#[test]
fn unterminated_string_runs_to_end_of_input() {
    assert_eq!(render("\"abc"), "\"abc\"");
}

#[test]
fn missing_identifier_in_definition() {
    let error = first_error("def = 5;");

    assert!(matches!(&error, ParseError::UnexpectedToken { found, .. } if found.is(TokenKind::Assign)));
    assert_eq!(error.to_string(), "Error on line 1: Expected identifier, found '='.");
}

#[test]
fn missing_operand() {
    let error = first_error("1 + ;");

    assert!(matches!(&error, ParseError::NoPrefixHandler { token, .. } if token.is(TokenKind::Semicolon)));
    assert_eq!(error.to_string(), "Error on line 1: No prefix parse function for ';'.");
}

#[test]
fn illegal_character() {
    let error = first_error("@;");

    assert_eq!(error.token().kind, TokenKind::Illegal);
    assert_eq!(error.token().text, "@");
}

#[test]
fn integer_literal_out_of_range() {
    let error = first_error("99999999999999999999;");

    assert!(matches!(error, ParseError::InvalidInteger { .. }));
}

#[test]
fn unclosed_condition() {
    let error = first_error("if (x { x; }");

    assert!(matches!(error, ParseError::UnexpectedToken { .. }));
    assert_eq!(error.token().kind, TokenKind::LBrace);
}

#[test]
fn reserved_words_cannot_start_expressions() {
    assert!(matches!(first_error("break;"), ParseError::NoPrefixHandler { .. }));
    assert!(matches!(first_error("continue;"), ParseError::NoPrefixHandler { .. }));
}

#[test]
fn errors_report_their_line() {
    let error = first_error("def a = 1;\n\ndef = 2;");

    assert_eq!(error.line(), 3);
}

#[test]
fn parsing_continues_after_errors() {
    let (program, errors) = parse(tokenize("def = 5; def y = 10; y;"));

    assert_eq!(errors.len(), 2);
    assert_eq!(program.to_string(), "5def y = 10;y");
}
