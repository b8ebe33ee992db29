use anyhow::{Result, bail};
use textparser_config::{Collisions, Config};
use textparser_engine::{CollisionPolicy, Rule};
use textparser_rules::{STANDARD_RULES, dynamic_highlight, rule_by_name};

/// Command-line settings layered over the config file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub rules: Vec<String>,
    pub highlight: Vec<String>,
    pub last_wins: bool,
}

/// The rules a run parses and builds with, plus how renderer name
/// collisions are settled.
#[derive(Debug)]
pub struct RuleSet {
    pub rules: Vec<Rule>,
    pub policy: CollisionPolicy,
}

impl RuleSet {
    pub fn new(config: &Config, overrides: &Overrides) -> Result<Self> {
        let names: Vec<&str> = if !overrides.rules.is_empty() {
            overrides.rules.iter().map(String::as_str).collect()
        } else if let Some(rules) = &config.rules {
            rules.iter().map(String::as_str).collect()
        } else {
            STANDARD_RULES.to_vec()
        };

        let mut rules = Vec::with_capacity(names.len() + 1);

        let words: Vec<&str> = config
            .highlight_words
            .iter()
            .chain(&overrides.highlight)
            .map(String::as_str)
            .collect();
        if !words.is_empty() {
            log::debug!("Highlighting words: {words:?}");
            rules.push(dynamic_highlight(&words)?);
        }

        for name in names {
            let Some(rule) = rule_by_name(name) else {
                bail!(
                    "Unknown rule '{name}', expected one of: {}",
                    STANDARD_RULES.join(", ")
                );
            };
            rules.push(rule);
        }

        let rules = rules
            .into_iter()
            .map(|rule| match config.class_names.get(rule.name()) {
                Some(class_name) => {
                    let class_name = class_name.clone();
                    rule.map_render(move |d| d.with_prop("className", class_name.as_str()))
                }
                None => rule,
            })
            .collect();

        let policy = if overrides.last_wins || config.collisions == Collisions::LastWins {
            CollisionPolicy::LastWins
        } else {
            CollisionPolicy::Reject
        };

        Ok(Self { rules, policy })
    }
}
