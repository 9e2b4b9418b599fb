use std::str::FromStr;

use pest::iterators::Pair;
use pest::Parser;

use crate::error::{Error, Result};
use crate::hash::DateHash;

#[derive(Parser)]
#[grammar = "grammar.pest"]
struct HashParser;

/// Parse a `year/month/day` key.
///
/// Only the shape of the key is checked here: `2023/2/31` is a valid key
/// even though it doesn't match any date, see [`DateHash::to_date`].
pub fn parse(data: &str) -> Result<DateHash> {
    let date_hash_pair = HashParser::parse(Rule::input_date_hash, data)
        .map_err(Error::from)?
        .next()
        .expect("grammar error: no date_hash found");

    build_date_hash(date_hash_pair)
}

fn unexpected_token<T>(token: Rule, parent: Rule) -> T {
    unreachable!("Grammar error: found `{token:?}` inside of `{parent:?}`")
}

fn build_date_hash(pair: Pair<Rule>) -> Result<DateHash> {
    assert_eq!(pair.as_rule(), Rule::date_hash);
    let mut year = None;
    let mut month = None;
    let mut day = None;

    for pair in pair.into_inner() {
        match pair.as_rule() {
            Rule::year => year = Some(build_component(pair, "a year up to 2147483647")?),
            Rule::month => month = Some(build_component(pair, "a month number")?),
            Rule::day => day = Some(build_component(pair, "a day number")?),
            other => unexpected_token(other, Rule::date_hash),
        }
    }

    Ok(DateHash {
        year: year.expect("grammar error: missing year"),
        month: month.expect("grammar error: missing month"),
        day: day.expect("grammar error: missing day"),
    })
}

fn build_component<T: FromStr>(pair: Pair<Rule>, expected: &str) -> Result<T> {
    let raw = pair.as_str();

    raw.parse().map_err(|_| {
        #[cfg(feature = "log")]
        log::debug!("Rejected date key component {raw}: expected {expected}");

        Error::Overflow { value: raw.to_string(), expected: expected.to_string() }
    })
}
