use crate::config::MusicConfig;
use regex::Regex;
use std::fmt::Debug;

/// Line predicate of a classification rule.
#[derive(Clone, Debug)]
pub enum Pattern {
    Contains(String),
    AnyOf(Vec<String>),
    Regex(Regex),
}

impl Pattern {
    pub fn contains(token: &str) -> Self {
        Pattern::Contains(token.to_owned())
    }

    pub fn any_of(tokens: &[&str]) -> Self {
        Pattern::AnyOf(tokens.iter().map(|token| token.to_string()).collect())
    }

    /// Compiles a hardcoded pattern.
    pub fn regex(pattern: &str) -> Self {
        Pattern::Regex(Regex::new(pattern).expect("Hardcode regex pattern"))
    }

    pub fn matches(&self, line: &str) -> bool {
        match self {
            Pattern::Contains(token) => line.contains(token.as_str()),
            Pattern::AnyOf(tokens) => tokens.iter().any(|token| line.contains(token.as_str())),
            Pattern::Regex(regex) => regex.is_match(line),
        }
    }
}

/// Timed-slot label at the start of a line: `10:30`, `9：00`.
pub const TIMED_SLOT: &str = r"^\d{1,2}[:：]\d{2}";

#[derive(Clone, Debug)]
pub struct Rule<C> {
    pub pattern: Pattern,
    pub category: C,
}

/// Ordered first-match-wins classification rules with a fallback category.
#[derive(Clone, Debug)]
pub struct RuleSet<C> {
    rules: Vec<Rule<C>>,
    default: C,
}

impl<C: Copy + Eq + Debug> RuleSet<C> {
    pub fn new(default: C) -> Self {
        Self {
            rules: Vec::new(),
            default,
        }
    }

    /// Starts a rule set whose first rule sends every line holding the music
    /// glyph or the designated-song token to `music`.
    pub fn with_music(config: &MusicConfig, music: C, default: C) -> Self {
        Self::new(default).rule(
            Pattern::AnyOf(vec![config.glyph.to_string(), config.designated_token.to_owned()]),
            music,
        )
    }

    pub fn rule(mut self, pattern: Pattern, category: C) -> Self {
        self.rules.push(Rule { pattern, category });
        self
    }

    pub fn rules(&self) -> &[Rule<C>] {
        &self.rules
    }

    pub fn default_category(&self) -> C {
        self.default
    }

    pub fn classify(&self, line: &str) -> C {
        self.rules
            .iter()
            .find(|rule| rule.pattern.matches(line))
            .map(|rule| rule.category)
            .unwrap_or(self.default)
    }

    /// Buckets every line exactly once, preserving input order.
    pub fn bucket(&self, lines: &[String]) -> Buckets<C> {
        Buckets {
            lines: lines
                .iter()
                .map(|line| (self.classify(line), line.to_owned()))
                .collect(),
        }
    }
}

/// Lines tagged with their category, finalized into a record once per day.
#[derive(Clone, Debug, Default)]
pub struct Buckets<C> {
    lines: Vec<(C, String)>,
}

impl<C: Copy + Eq> Buckets<C> {
    /// Removes and returns the lines of one category, in input order.
    pub fn take(&mut self, category: C) -> Vec<String> {
        let (taken, rest): (Vec<_>, Vec<_>) = std::mem::take(&mut self.lines)
            .into_iter()
            .partition(|(tag, _)| *tag == category);
        self.lines = rest;
        taken.into_iter().map(|(_, line)| line).collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
