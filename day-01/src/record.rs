use nom::{
    bytes::complete::{take_till1, take_while, take_while1},
    character::complete::i64 as integer,
    combinator::all_consuming,
    sequence::{delimited, separated_pair},
    IResult,
};

/// Which side of the two location lists a value comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Left,
    Right,
}

/// One input line split into its two raw tokens.
///
/// The tokens are parsed lazily and independently: a line like `abc 3`
/// still carries a usable right-hand value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    left: &'a str,
    right: &'a str,
}

fn token(input: &str) -> IResult<&str, &str> {
    take_till1(char::is_whitespace)(input)
}

fn record(input: &str) -> IResult<&str, (&str, &str)> {
    all_consuming(delimited(
        take_while(char::is_whitespace),
        separated_pair(token, take_while1(char::is_whitespace), token),
        take_while(char::is_whitespace),
    ))(input)
}

/// Parses a whole token as a signed decimal integer.
///
/// Trailing garbage (`3a`) and values outside `i64` are rejected.
pub fn parse_value(token: &str) -> Option<i64> {
    all_consuming(integer::<&str, nom::error::Error<&str>>)(token)
        .ok()
        .map(|(_, value)| value)
}

impl<'a> Record<'a> {
    /// Splits `line` on runs of whitespace. Anything other than exactly two
    /// tokens yields `None`.
    pub fn parse(line: &'a str) -> Option<Self> {
        record(line)
            .ok()
            .map(|(_, (left, right))| Self { left, right })
    }

    pub fn left(&self) -> Option<i64> {
        parse_value(self.left)
    }

    pub fn right(&self) -> Option<i64> {
        parse_value(self.right)
    }

    pub fn value(&self, column: Column) -> Option<i64> {
        match column {
            Column::Left => self.left(),
            Column::Right => self.right(),
        }
    }
}

/// Every valid value of `column` in `input`, in line order.
pub fn column_values(input: &str, column: Column) -> impl Iterator<Item = i64> + '_ {
    input
        .lines()
        .filter_map(move |line| Record::parse(line)?.value(column))
}
