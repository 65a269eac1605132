//! Rules file parser using Pest
//!
//! Each physical line is parsed on its own. A line that fails the grammar is
//! dropped with a debug event; the rest of the file still applies.

use super::{DefaultRule, PredicateRule, Ruleset, WildcardPattern};
use crate::literal::LiteralKind;
use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;
use tracing::{debug, info};

#[derive(Parser)]
#[grammar = "rules/rules.pest"]
struct RulesParser;

/// Parse a rules document into a [`Ruleset`]
///
/// Never fails: an empty or unparseable document yields an empty ruleset
/// with the default language.
pub fn parse_rules(content: &str) -> Ruleset {
    let mut ruleset = Ruleset::new();

    for (index, text) in content
        .split(['\n', '\r'])
        .enumerate()
        .filter(|(_, text)| !text.trim().is_empty())
    {
        match RulesParser::parse(Rule::line, text) {
            Ok(mut pairs) => {
                if let Some(line) = pairs.next() {
                    apply_line(line, &mut ruleset);
                }
            }
            Err(_) => debug!("Ignoring rules line {}: {:?}", index + 1, text),
        }
    }

    info!(
        "Parsed rules: language {}, {} prefixes, {} predicates, {} defaults",
        ruleset.language,
        ruleset.prefixes.len(),
        ruleset.predicates.len(),
        ruleset.defaults.len()
    );

    ruleset
}

fn apply_line(line: Pair<Rule>, ruleset: &mut Ruleset) {
    for pair in line.into_inner() {
        match pair.as_rule() {
            Rule::language_directive => {
                if let Some(tag) = pair.into_inner().next() {
                    ruleset.language = tag.as_str().to_string();
                }
            }
            Rule::prefix_directive => {
                let mut inner = pair.into_inner();
                if let (Some(prefix), Some(namespace)) = (inner.next(), inner.next()) {
                    let iri = namespace.as_str();
                    let iri = iri
                        .strip_prefix('<')
                        .and_then(|rest| rest.strip_suffix('>'))
                        .unwrap_or(iri);
                    ruleset.prefixes.push(prefix.as_str(), iri);
                }
            }
            Rule::default_directive => {
                let mut inner = pair.into_inner();
                if let (Some(kind), Some(pattern)) = (inner.next(), inner.next()) {
                    match WildcardPattern::new(pattern.as_str()) {
                        Ok(pattern) => ruleset
                            .defaults
                            .push(DefaultRule::new(LiteralKind::from_token(kind.as_str()), pattern)),
                        Err(e) => debug!("Ignoring default pattern {:?}: {}", pattern.as_str(), e),
                    }
                }
            }
            Rule::predicate_rule => {
                if let Some(rule) = parse_predicate_rule(pair) {
                    ruleset.predicates.insert(rule.curie.clone(), rule);
                }
            }
            _ => {}
        }
    }
}

fn parse_predicate_rule(pair: Pair<Rule>) -> Option<PredicateRule> {
    let mut inner = pair.into_inner();
    let curie = inner.next()?;
    let kind = inner.next()?;

    let mut rule = PredicateRule::new(curie.as_str(), LiteralKind::from_token(kind.as_str()));
    for modifier in inner {
        match modifier.as_str() {
            "lang" => rule.localized = true,
            "many" => rule.many = true,
            other => debug!("Ignoring modifier {:?} on {}", other, rule.curie),
        }
    }

    Some(rule)
}
