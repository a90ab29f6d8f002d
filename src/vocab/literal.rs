// Parser for the literal notation vocabulary files are written in.
//
// A vocabulary file holds one literal:
//
//   { 'term': None, 'term': 'variant', 'term': ['variant', ...], ... }
//   { 'term', 'term', ... }      (set)
//   [ 'term', 'term', ... ]      (list, or a parenthesized tuple)
//
// Strings may use single or double quotes with backslash escapes (including
// `\xHH`, `\uHHHH` and `\UHHHHHHHH`) and an optional `r` or `u` prefix. `#`
// starts a comment that runs to the end of the line, and trailing commas are
// allowed anywhere a comma separates items.
//
// A dict value may also be an integer column index, the form count
// vectorizer vocabularies are often saved in. Such terms get no variants and
// keep their file position; the index itself is ignored.

use anyhow::Result;
use indexmap::IndexMap;
use nom::branch::alt;
use nom::bytes::complete::{tag, take_till, take_while_m_n};
use nom::character::complete::{anychar, char, digit1, multispace1, one_of, satisfy};
use nom::combinator::{all_consuming, cut, map, map_opt, opt, recognize, value};
use nom::multi::{many0, separated_list0};
use nom::sequence::{delimited, pair, preceded, separated_pair, terminated};
use nom::IResult;

/// Parse a vocabulary literal into an ordered term -> variants map.
///
/// Duplicate terms keep the position of their first appearance and the
/// variants of their last.
pub fn parse_term_literal(contents: &str) -> Result<IndexMap<String, Vec<String>>> {
    match all_consuming(delimited(ws, literal, ws))(contents) {
        Ok((_, entries)) => {
            let mut terms = IndexMap::with_capacity(entries.len());
            for (term, variants) in entries {
                terms.insert(term, variants);
            }
            Ok(terms)
        }
        Err(nom::Err::Error(e) | nom::Err::Failure(e)) => {
            let offset = contents.len() - e.input.len();
            let (line, column) = line_and_column(contents, offset);
            let snippet: String = e.input.chars().take(24).collect();
            anyhow::bail!("unexpected input at line {line}, column {column}: {snippet:?}")
        }
        Err(nom::Err::Incomplete(_)) => anyhow::bail!("unexpected end of input"),
    }
}

type Entries = Vec<(String, Vec<String>)>;

fn literal(input: &str) -> IResult<&str, Entries> {
    alt((
        dict,
        map(alt((set, list, tuple)), |terms: Vec<String>| -> Entries {
            terms.into_iter().map(|term| (term, Vec::new())).collect()
        }),
    ))(input)
}

fn dict(input: &str) -> IResult<&str, Entries> {
    let (input, _) = pair(char('{'), ws)(input)?;
    let (input, close) = opt(char('}'))(input)?;
    if close.is_some() {
        return Ok((input, Vec::new()));
    }

    // A leading `term:` commits to a dict; anything else may still be a set.
    let (input, first) = dict_entry(input)?;
    let (input, mut entries) = cut(terminated(
        many0(preceded(comma, dict_entry)),
        pair(opt(comma), pair(ws, char('}'))),
    ))(input)?;
    entries.insert(0, first);
    Ok((input, entries))
}

fn dict_entry(input: &str) -> IResult<&str, (String, Vec<String>)> {
    separated_pair(string_literal, delimited(ws, char(':'), ws), cut(variants))(input)
}

fn variants(input: &str) -> IResult<&str, Vec<String>> {
    alt((
        value(Vec::new(), tag("None")),
        value(Vec::new(), pair(opt(char('-')), digit1)),
        list,
        tuple,
        set,
        map(string_literal, |variant| vec![variant]),
    ))(input)
}

fn set(input: &str) -> IResult<&str, Vec<String>> {
    bracketed('{', '}', input)
}

fn list(input: &str) -> IResult<&str, Vec<String>> {
    bracketed('[', ']', input)
}

fn tuple(input: &str) -> IResult<&str, Vec<String>> {
    bracketed('(', ')', input)
}

fn bracketed(open: char, close: char, input: &str) -> IResult<&str, Vec<String>> {
    preceded(
        pair(char(open), ws),
        cut(terminated(
            terminated(separated_list0(comma, string_literal), opt(comma)),
            pair(ws, char(close)),
        )),
    )(input)
}

fn comma(input: &str) -> IResult<&str, ()> {
    value((), delimited(ws, char(','), ws))(input)
}

fn string_literal(input: &str) -> IResult<&str, String> {
    alt((
        preceded(one_of("rR"), alt((raw_quoted('\''), raw_quoted('"')))),
        preceded(opt(one_of("uU")), alt((quoted('\''), quoted('"')))),
    ))(input)
}

fn quoted<'a>(quote: char) -> impl FnMut(&'a str) -> IResult<&'a str, String> {
    move |input: &'a str| {
        let (input, _) = char(quote)(input)?;
        let (input, chars) = many0(alt((
            preceded(char('\\'), escape),
            satisfy(move |c| c != quote && c != '\\' && c != '\n'),
        )))(input)?;
        let (input, _) = char(quote)(input)?;
        Ok((input, chars.into_iter().collect()))
    }
}

/// Backslashes stay literal; an escaped quote still does not end the string.
fn raw_quoted<'a>(quote: char) -> impl FnMut(&'a str) -> IResult<&'a str, String> {
    move |input: &'a str| {
        let (input, _) = char(quote)(input)?;
        let (input, body) = recognize(many0(alt((
            value((), pair(char('\\'), satisfy(|c| c != '\n'))),
            value((), satisfy(move |c| c != quote && c != '\\' && c != '\n')),
        ))))(input)?;
        let (input, _) = char(quote)(input)?;
        Ok((input, body.to_string()))
    }
}

fn escape(input: &str) -> IResult<&str, char> {
    alt((
        preceded(char('x'), code_point(2)),
        preceded(char('u'), code_point(4)),
        preceded(char('U'), code_point(8)),
        map(anychar, unescape),
    ))(input)
}

fn code_point<'a>(digits: usize) -> impl FnMut(&'a str) -> IResult<&'a str, char> {
    map_opt(
        take_while_m_n(digits, digits, |c: char| c.is_ascii_hexdigit()),
        |hex: &str| u32::from_str_radix(hex, 16).ok().and_then(char::from_u32),
    )
}

fn unescape(c: char) -> char {
    match c {
        'n' => '\n',
        't' => '\t',
        'r' => '\r',
        '0' => '\0',
        other => other,
    }
}

/// Whitespace and `#` comments.
fn ws(input: &str) -> IResult<&str, ()> {
    value(
        (),
        many0(alt((
            value((), multispace1),
            value((), pair(char('#'), take_till(|c| c == '\n'))),
        ))),
    )(input)
}

fn line_and_column(contents: &str, offset: usize) -> (usize, usize) {
    let before = &contents[..offset];
    let line = before.matches('\n').count() + 1;
    let column = before
        .rsplit('\n')
        .next()
        .map(|l| l.chars().count())
        .unwrap_or(0)
        + 1;
    (line, column)
}
