//! Metadata validation.
//!
//! A single rule set covers both the shape of `meta.json` (exact key set,
//! value types) and the content rules (keyword count, description length,
//! non-empty title). Rules run over the JSON form so that missing and
//! unexpected keys are observable even though [`Meta`] itself is typed.

use std::fmt;

use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::paths::is_slug;
use crate::types::Meta;
use crate::{Error, Result};

pub const REQUIRED_KEYS: [&str; 6] = ["title", "keywords", "description", "platform", "date", "slug"];
pub const KEYWORD_COUNT: usize = 5;
pub const DESCRIPTION_MIN_CHARS: usize = 155;
pub const DESCRIPTION_MAX_CHARS: usize = 160;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    NotAnObject,
    MissingKey(&'static str),
    UnexpectedKey(String),
    WrongType { key: &'static str, expected: &'static str },
    EmptyTitle,
    KeywordCount(usize),
    DescriptionLength(usize),
    InvalidDate(String),
    InvalidSlug(String),
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::NotAnObject => write!(f, "Meta must be a JSON object."),
            Violation::MissingKey(key) => write!(f, "Missing key: {}", key),
            Violation::UnexpectedKey(key) => write!(f, "Unexpected key: {}", key),
            Violation::WrongType { key, expected } => write!(f, "{} must be {}.", key, expected),
            Violation::EmptyTitle => write!(f, "Title missing."),
            Violation::KeywordCount(found) => write!(
                f,
                "Keywords must include {} items (found {}).",
                KEYWORD_COUNT, found
            ),
            Violation::DescriptionLength(found) => write!(
                f,
                "Description must be {}-{} characters (found {}).",
                DESCRIPTION_MIN_CHARS, DESCRIPTION_MAX_CHARS, found
            ),
            Violation::InvalidDate(date) => write!(f, "Date must be YYYY-MM-DD (found {:?}).", date),
            Violation::InvalidSlug(slug) => write!(f, "Slug must match [a-z0-9-]+ (found {:?}).", slug),
        }
    }
}

/// Every rule the value breaks, in a stable order. Empty means valid.
pub fn meta_violations(value: &Value) -> Vec<Violation> {
    let Some(object) = value.as_object() else {
        return vec![Violation::NotAnObject];
    };

    let mut violations = Vec::new();
    for key in REQUIRED_KEYS {
        if !object.contains_key(key) {
            violations.push(Violation::MissingKey(key));
        }
    }
    let mut extra: Vec<&String> = object
        .keys()
        .filter(|key| !REQUIRED_KEYS.contains(&key.as_str()))
        .collect();
    extra.sort();
    violations.extend(extra.into_iter().map(|key| Violation::UnexpectedKey(key.clone())));

    check_title(object, &mut violations);
    check_keywords(object, &mut violations);
    check_description(object, &mut violations);
    check_date(object, &mut violations);
    check_slug(object, &mut violations);
    if let Some(platform) = object.get("platform") {
        if !platform.is_string() {
            violations.push(Violation::WrongType {
                key: "platform",
                expected: "a string",
            });
        }
    }
    violations
}

/// Fails with [`Error::Validation`] listing every violation.
pub fn validate_meta_value(value: &Value) -> Result<()> {
    let violations = meta_violations(value);
    if violations.is_empty() {
        Ok(())
    } else {
        Err(Error::Validation(violations))
    }
}

fn check_title(object: &Map<String, Value>, violations: &mut Vec<Violation>) {
    match object.get("title") {
        None => {}
        Some(Value::String(title)) if title.is_empty() => violations.push(Violation::EmptyTitle),
        Some(Value::String(_)) => {}
        Some(_) => violations.push(Violation::WrongType {
            key: "title",
            expected: "a string",
        }),
    }
}

fn check_keywords(object: &Map<String, Value>, violations: &mut Vec<Violation>) {
    match object.get("keywords") {
        None => {}
        Some(Value::Array(items)) => {
            if items.len() != KEYWORD_COUNT {
                violations.push(Violation::KeywordCount(items.len()));
            }
            if !items.iter().all(Value::is_string) {
                violations.push(Violation::WrongType {
                    key: "keywords",
                    expected: "an array of strings",
                });
            }
        }
        Some(_) => violations.push(Violation::WrongType {
            key: "keywords",
            expected: "an array of strings",
        }),
    }
}

fn check_description(object: &Map<String, Value>, violations: &mut Vec<Violation>) {
    match object.get("description") {
        None => {}
        Some(Value::String(description)) => {
            let length = description.chars().count();
            if !(DESCRIPTION_MIN_CHARS..=DESCRIPTION_MAX_CHARS).contains(&length) {
                violations.push(Violation::DescriptionLength(length));
            }
        }
        Some(_) => violations.push(Violation::WrongType {
            key: "description",
            expected: "a string",
        }),
    }
}

fn check_date(object: &Map<String, Value>, violations: &mut Vec<Violation>) {
    match object.get("date") {
        None => {}
        Some(Value::String(date)) => {
            if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
                violations.push(Violation::InvalidDate(date.clone()));
            }
        }
        Some(_) => violations.push(Violation::WrongType {
            key: "date",
            expected: "a string",
        }),
    }
}

fn check_slug(object: &Map<String, Value>, violations: &mut Vec<Violation>) {
    match object.get("slug") {
        None => {}
        Some(Value::String(slug)) if is_slug(slug) => {}
        Some(Value::String(slug)) => violations.push(Violation::InvalidSlug(slug.clone())),
        Some(_) => violations.push(Violation::WrongType {
            key: "slug",
            expected: "a string",
        }),
    }
}

impl Meta {
    pub fn violations(&self) -> Vec<Violation> {
        match serde_json::to_value(self) {
            Ok(value) => meta_violations(&value),
            Err(_) => vec![Violation::NotAnObject],
        }
    }

    pub fn is_valid(&self) -> bool {
        self.violations().is_empty()
    }

    pub fn validate(&self) -> Result<()> {
        validate_meta_value(&serde_json::to_value(self)?)
    }
}
