use super::{
    cursor::Cursor,
    kinds::{Bold, CodeSpan},
    types::Span,
};

/// Splits a line of text into an ordered sequence of styled [`Span`]s.
///
/// # Arguments
/// - `text`: The text to split (one line, markers of the block already removed)
/// - `allow_inline_code`: Whether backtick code spans are recognized
///
/// # Precedence
/// One left-to-right pass. At every position bold is tried before a code
/// span and the earliest match wins; matched text is never rescanned, so
/// `` **a `b** `` is bold and `` `a **b` `` is a code span.
///
/// # Returns
/// Plain spans alternate with matched spans: the sequence always starts and
/// ends with a (possibly empty) plain span, and an empty plain span separates
/// two adjacent matches. Empty input yields a single empty plain span.
pub fn tokenize(text: &str, allow_inline_code: bool) -> Vec<Span> {
    let mut cur = Cursor::new(text);
    let mut out = vec![];
    let mut text_start = cur.pos();

    while !cur.eof() {
        let start = cur.pos();
        let matched = match try_parse_bold(&mut cur) {
            Some(span) => Some(span),
            None if allow_inline_code => try_parse_code_span(&mut cur),
            None => None,
        };

        if let Some(span) = matched {
            out.push(Span::plain(&text[text_start..start]));
            out.push(span);
            text_start = cur.pos();
            continue;
        }
        cur.bump();
    }

    out.push(Span::plain(&text[text_start..]));
    out
}

/// Attempts to parse `**text**` at the current position.
///
/// Returns `None` if not at `**`, if the content is empty, or if the first
/// `*` after the opener does not start a closing `**`. On failure, cursor
/// position is restored.
fn try_parse_bold(cur: &mut Cursor<'_>) -> Option<Span> {
    if !cur.starts_with(Bold::MARKER) {
        return None;
    }

    let saved = cur.clone();
    cur.bump_n(Bold::MARKER.len());
    let inner_start = cur.pos();
    cur.bump_until(Bold::STAR);
    let inner_end = cur.pos();

    if inner_end == inner_start || !cur.starts_with(Bold::MARKER) {
        *cur = saved;
        return None;
    }
    cur.bump_n(Bold::MARKER.len());

    Some(Span::bold(&cur.s[inner_start..inner_end]))
}

/// Attempts to parse a code span starting at the current position.
///
/// Returns `None` if not at a backtick, if the span is empty or if it isn't
/// closed. On failure, cursor position is restored.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<Span> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let saved = cur.clone();
    cur.bump(); // `
    let inner_start = cur.pos();
    cur.bump_until(CodeSpan::TICK);
    let inner_end = cur.pos();

    if inner_end == inner_start || cur.peek() != Some(CodeSpan::TICK) {
        *cur = saved;
        return None;
    }
    cur.bump(); // closing `

    Some(Span::code(&cur.s[inner_start..inner_end]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::inline::types::{SpanKind, plain_text};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn parse_simple_text() {
        assert_eq!(tokenize("hello world", true), vec![Span::plain("hello world")]);
    }

    #[test]
    fn empty_input_is_single_empty_plain() {
        assert_eq!(tokenize("", true), vec![Span::plain("")]);
        assert_eq!(tokenize("", false), vec![Span::plain("")]);
    }

    #[test]
    fn parse_bold_and_code() {
        assert_eq!(
            tokenize("Some **bold** and `code`.", true),
            vec![
                Span::plain("Some "),
                Span::bold("bold"),
                Span::plain(" and "),
                Span::code("code"),
                Span::plain("."),
            ]
        );
    }

    #[test]
    fn whole_line_bold_keeps_empty_plain_edges() {
        assert_eq!(
            tokenize("**all**", false),
            vec![Span::plain(""), Span::bold("all"), Span::plain("")]
        );
    }

    #[test]
    fn adjacent_matches_are_separated_by_empty_plain() {
        assert_eq!(
            tokenize("**a**`b`", true),
            vec![
                Span::plain(""),
                Span::bold("a"),
                Span::plain(""),
                Span::code("b"),
                Span::plain(""),
            ]
        );
    }

    #[test]
    fn code_spans_ignored_when_not_allowed() {
        assert_eq!(
            tokenize("run `cargo` now", false),
            vec![Span::plain("run `cargo` now")]
        );
    }

    #[test]
    fn earliest_opener_wins_bold_first() {
        assert_eq!(
            tokenize("**a `b** c`", true),
            vec![Span::plain(""), Span::bold("a `b"), Span::plain(" c`")]
        );
    }

    #[test]
    fn earliest_opener_wins_code_first() {
        assert_eq!(
            tokenize("`a **b` c**", true),
            vec![Span::plain(""), Span::code("a **b"), Span::plain(" c**")]
        );
    }

    #[test]
    fn bold_may_not_contain_a_star() {
        assert_eq!(tokenize("**a*b**", true), vec![Span::plain("**a*b**")]);
    }

    #[test]
    fn triple_star_opens_one_position_later() {
        assert_eq!(
            tokenize("***x**", false),
            vec![Span::plain("*"), Span::bold("x"), Span::plain("")]
        );
    }

    #[rstest]
    #[case::lone_bold_marker("a ** b")]
    #[case::unclosed_bold("**open")]
    #[case::empty_bold("****")]
    #[case::lone_tick("a ` b")]
    #[case::empty_code("``")]
    fn unbalanced_delimiters_stay_literal(#[case] input: &str) {
        assert_eq!(tokenize(input, true), vec![Span::plain(input)]);
    }

    #[rstest]
    #[case("plain", "plain")]
    #[case("**Name:** value", "Name: value")]
    #[case("a `b` **c** d", "a b c d")]
    #[case("`x``y`", "xy")]
    #[case("**ünï**cödé", "ünïcödé")]
    fn concatenation_strips_only_delimiters(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(plain_text(&tokenize(input, true)), expected);
    }

    #[test]
    fn retokenizing_span_text_adds_no_styles() {
        for span in tokenize("Use **bold** and `code` here", true) {
            let again = tokenize(&span.text, true);
            assert_eq!(again.len(), 1);
            assert_eq!(again[0].kind, SpanKind::Plain);
        }
    }
}
