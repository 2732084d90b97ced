use super::ast::ParsedGate;
use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_while},
    character::complete::{char, digit1, line_ending, space0},
    combinator::{eof, map, map_res, opt, peek, recognize, value},
    sequence::{delimited, pair, preceded, tuple},
};

// --- Helpers ---

fn usize_parser(input: &str) -> IResult<&str, usize> {
    map_res(digit1, |s: &str| s.parse::<usize>())(input)
}

fn i64_parser(input: &str) -> IResult<&str, i64> {
    map_res(recognize(pair(opt(tag("-")), digit1)), |s: &str| {
        s.parse::<i64>()
    })(input)
}

fn index_arg(input: &str) -> IResult<&str, usize> {
    delimited(space0, usize_parser, space0)(input)
}

pub fn comment(input: &str) -> IResult<&str, ()> {
    value((), pair(tag("//"), take_while(|c| c != '\n')))(input)
}

/// End of a gate statement in a list: `;`, a line break, a trailing comment or end of input.
pub fn statement_end(input: &str) -> IResult<&str, ()> {
    preceded(
        space0,
        alt((
            value((), char(';')),
            value((), line_ending),
            value((), peek(comment)),
            value((), eof),
        )),
    )(input)
}

// --- Gate Label Parsers ---

pub fn z_gate(input: &str) -> IResult<&str, ParsedGate> {
    map(preceded(char('Z'), opt(i64_parser)), |power| {
        ParsedGate::Z(power.unwrap_or(1))
    })(input)
}

pub fn shift_gate(input: &str) -> IResult<&str, ParsedGate> {
    alt((
        value(ParsedGate::PlusCubed, tag("[+++]")),
        value(ParsedGate::PlusSquared, tag("[++]")),
        value(ParsedGate::Plus, tag("[+]")),
    ))(input)
}

pub fn flip_gate(input: &str) -> IResult<&str, ParsedGate> {
    map(
        tuple((
            char('X'),
            space0,
            char('('),
            index_arg,
            char(','),
            index_arg,
            char(')'),
        )),
        |(_, _, _, i, _, j, _)| ParsedGate::Flip(i, j),
    )(input)
}

pub fn controlled_flip_gate(input: &str) -> IResult<&str, ParsedGate> {
    map(
        tuple((
            tag("CX"),
            space0,
            char('('),
            index_arg,
            char(','),
            index_arg,
            char(','),
            index_arg,
            char(')'),
        )),
        |(_, _, _, c, _, i, _, j, _)| ParsedGate::ControlledFlip(c, i, j),
    )(input)
}

pub fn gate(input: &str) -> IResult<&str, ParsedGate> {
    alt((controlled_flip_gate, flip_gate, z_gate, shift_gate))(input)
}
