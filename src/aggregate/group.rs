use std::collections::HashMap;

use serde::ser::{SerializeSeq, Serializer};
use serde::Serialize;

use crate::probe::ProbeOutcome;

/// URLs grouped by outcome.
///
/// Outcomes iterate in the order they were first seen and URLs within an
/// outcome in the order they were inserted.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResultGroup {
    groups: Vec<(ProbeOutcome, Vec<String>)>,
    index: HashMap<ProbeOutcome, usize>,
}

impl ResultGroup {
    pub fn insert(&mut self, outcome: ProbeOutcome, url: String) {
        match self.index.get(&outcome) {
            Some(&slot) => self.groups[slot].1.push(url),
            None => {
                self.index.insert(outcome, self.groups.len());
                self.groups.push((outcome, vec![url]));
            }
        }
    }

    pub fn get(&self, outcome: &ProbeOutcome) -> Option<&[String]> {
        self.index
            .get(outcome)
            .map(|&slot| self.groups[slot].1.as_slice())
    }

    /// URLs for a status code, or an empty slice.
    pub fn urls_for_status(&self, code: u16) -> &[String] {
        self.get(&ProbeOutcome::Status(code)).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (ProbeOutcome, &[String])> {
        self.groups
            .iter()
            .map(|(outcome, urls)| (*outcome, urls.as_slice()))
    }

    /// Number of distinct outcomes.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn total_urls(&self) -> usize {
        self.groups.iter().map(|(_, urls)| urls.len()).sum()
    }
}

#[derive(Serialize)]
struct GroupEntry<'a> {
    outcome: ProbeOutcome,
    urls: &'a [String],
}

impl Serialize for ResultGroup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.groups.len()))?;
        for (outcome, urls) in self.iter() {
            seq.serialize_element(&GroupEntry { outcome, urls })?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_keep_insertion_order() {
        let mut groups = ResultGroup::default();
        groups.insert(ProbeOutcome::Status(200), "u2".into());
        groups.insert(ProbeOutcome::Status(403), "u3".into());
        groups.insert(ProbeOutcome::Status(200), "u1".into());

        assert_eq!(groups.urls_for_status(200), ["u2", "u1"]);
        assert_eq!(groups.urls_for_status(403), ["u3"]);
        assert!(groups.urls_for_status(500).is_empty());
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn test_serializes_as_ordered_list() {
        let mut groups = ResultGroup::default();
        groups.insert(ProbeOutcome::Unreachable, "https://a".into());
        groups.insert(ProbeOutcome::Status(200), "http://a".into());

        let json = serde_json::to_value(&groups).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"outcome": "Unreachable", "urls": ["https://a"]},
                {"outcome": "200", "urls": ["http://a"]},
            ])
        );
    }
}
