//! Rule evaluation - collects every violated rule of a call into one report.
//!
//! A [`Rule`] is a condition paired with the message to report when the
//! condition holds. [`validate`] evaluates an ordered list of rules, each tagged
//! with the parameter it guards, and fails with the full [`Violations`] record
//! when at least one rule fired.

use std::fmt;

use chrono::{DateTime, FixedOffset, TimeDelta};
use serde::ser::{Serialize, SerializeMap, Serializer};
use uuid::Uuid;

/// Maximum distance, in seconds, between a timestamp and the clock for the
/// timestamp to count as recent.
pub const RECENCY_WINDOW_SECS: i64 = 60;

/// A single checkable fact: `condition` is true when the fact is violated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub condition: bool,
    pub message: String,
}

impl Rule {
    pub fn new(condition: bool, message: impl Into<String>) -> Self {
        Self {
            condition,
            message: message.into(),
        }
    }
}

/// Violation record keyed by parameter name, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations {
    entries: Vec<(&'static str, Vec<String>)>,
}

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `message` under `parameter`, creating the key if needed.
    pub fn upsert(&mut self, parameter: &'static str, message: impl Into<String>) {
        let message = message.into();
        match self.entries.iter_mut().find(|(key, _)| *key == parameter) {
            Some((_, messages)) => messages.push(message),
            None => self.entries.push((parameter, vec![message])),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct parameters with at least one violation.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn contains_key(&self, parameter: &str) -> bool {
        self.get(parameter).is_some()
    }

    pub fn get(&self, parameter: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(key, _)| *key == parameter)
            .map(|(_, messages)| messages.as_slice())
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[String])> {
        self.entries
            .iter()
            .map(|(key, messages)| (*key, messages.as_slice()))
    }

    /// `Err(self)` if anything was recorded.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (key, messages)) in self.entries.iter().enumerate() {
            if index > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", key, messages.join(" "))?;
        }
        Ok(())
    }
}

impl Serialize for Violations {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, messages) in &self.entries {
            map.serialize_entry(key, messages)?;
        }
        map.end()
    }
}

/// Evaluate every rule and report all violations at once.
pub fn validate(rules: impl IntoIterator<Item = (Rule, &'static str)>) -> Result<(), Violations> {
    let mut violations = Violations::new();

    for (rule, parameter) in rules {
        if rule.condition {
            violations.upsert(parameter, rule.message);
        }
    }

    violations.into_result()
}

pub fn is_invalid_id(id: Uuid) -> Rule {
    Rule::new(id.is_nil(), "Id is required.")
}

pub fn is_invalid_text(text: &str) -> Rule {
    Rule::new(text.trim().is_empty(), "Text is required.")
}

pub fn is_invalid_date(date: DateTime<FixedOffset>) -> Rule {
    Rule::new(date == DateTime::<FixedOffset>::default(), "Date is required.")
}

pub fn is_not_same(
    first_date: DateTime<FixedOffset>,
    second_date: DateTime<FixedOffset>,
    second_date_name: &str,
) -> Rule {
    Rule::new(
        first_date != second_date,
        format!("Date is not same as {second_date_name}"),
    )
}

pub fn is_same(
    first_date: DateTime<FixedOffset>,
    second_date: DateTime<FixedOffset>,
    second_date_name: &str,
) -> Rule {
    Rule::new(
        first_date == second_date,
        format!("Date is same as {second_date_name}"),
    )
}

/// Fires when `date` is more than [`RECENCY_WINDOW_SECS`] away from `now`,
/// in either direction.
pub fn is_not_recent(date: DateTime<FixedOffset>, now: DateTime<FixedOffset>) -> Rule {
    let window = TimeDelta::seconds(RECENCY_WINDOW_SECS);
    let difference = now.signed_duration_since(date);

    Rule::new(
        difference > window || difference < -window,
        "Date is not recent.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn now() -> DateTime<FixedOffset> {
        chrono::Utc::now().fixed_offset()
    }

    #[test]
    fn test_validate_passes_when_no_rule_fires() {
        let result = validate([
            (Rule::new(false, "first"), "A"),
            (Rule::new(false, "second"), "B"),
        ]);

        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_collects_every_fired_rule_in_order() {
        let violations = validate([
            (Rule::new(true, "first"), "A"),
            (Rule::new(false, "skipped"), "B"),
            (Rule::new(true, "third"), "C"),
        ])
        .unwrap_err();

        assert_eq!(violations.keys().collect::<Vec<_>>(), vec!["A", "C"]);
        assert_eq!(violations.get("A"), Some(&["first".to_string()][..]));
        assert!(!violations.contains_key("B"));
    }

    #[test]
    fn test_upsert_appends_under_existing_key() {
        let violations = validate([
            (Rule::new(true, "Date is required."), "CreatedDate"),
            (Rule::new(true, "Date is not recent."), "CreatedDate"),
        ])
        .unwrap_err();

        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations.get("CreatedDate").unwrap(),
            ["Date is required.", "Date is not recent."]
        );
    }

    #[test]
    fn test_violations_display_and_json() {
        let mut violations = Violations::new();
        violations.upsert("Id", "Id is required.");
        violations.upsert("Title", "Text is required.");

        assert_eq!(
            violations.to_string(),
            "Id: Id is required.; Title: Text is required."
        );

        let json = serde_json::to_value(&violations).unwrap();
        assert_eq!(json["Title"][0], "Text is required.");
    }

    #[test]
    fn test_is_invalid_id() {
        assert!(is_invalid_id(Uuid::nil()).condition);
        assert!(!is_invalid_id(Uuid::new_v4()).condition);
        assert_eq!(is_invalid_id(Uuid::nil()).message, "Id is required.");
    }

    #[test]
    fn test_is_invalid_date_only_for_default() {
        assert!(is_invalid_date(DateTime::<FixedOffset>::default()).condition);
        assert!(!is_invalid_date(now()).condition);
    }

    #[test]
    fn test_same_and_not_same_messages() {
        let date = now();
        let later = date + TimeDelta::days(1);

        let same = is_same(date, date, "CreatedDate");
        assert!(same.condition);
        assert_eq!(same.message, "Date is same as CreatedDate");

        let not_same = is_not_same(later, date, "CreatedDate");
        assert!(not_same.condition);
        assert_eq!(not_same.message, "Date is not same as CreatedDate");

        assert!(!is_same(later, date, "CreatedDate").condition);
        assert!(!is_not_same(date, date, "CreatedDate").condition);
    }

    #[test]
    fn test_same_instant_in_other_offset_is_same() {
        let date = now();
        let shifted = date.with_timezone(&FixedOffset::east_opt(5 * 3600).unwrap());

        assert!(is_same(shifted, date, "CreatedDate").condition);
    }

    #[test]
    fn test_is_not_recent_window_boundaries() {
        let now = now();

        assert!(!is_not_recent(now, now).condition);
        assert!(!is_not_recent(now - TimeDelta::seconds(RECENCY_WINDOW_SECS), now).condition);
        assert!(!is_not_recent(now + TimeDelta::seconds(RECENCY_WINDOW_SECS), now).condition);
        assert!(is_not_recent(now - TimeDelta::seconds(RECENCY_WINDOW_SECS + 1), now).condition);
        assert!(is_not_recent(now + TimeDelta::minutes(5), now).condition);
    }

    proptest! {
        #[test]
        fn prop_whitespace_text_is_invalid(text in "[ \t\r\n]{0,16}") {
            prop_assert!(is_invalid_text(&text).condition);
        }

        #[test]
        fn prop_text_with_content_is_valid(text in "[ \t]{0,4}[a-zA-Z0-9]{1,16}[ \t]{0,4}") {
            prop_assert!(!is_invalid_text(&text).condition);
        }
    }
}
