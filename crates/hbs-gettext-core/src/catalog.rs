use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use serde::{Deserialize, Serialize};

use crate::error::ExtractError;
use crate::message_key::message_key;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    pub msgid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msgctxt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msgid_plural: Option<String>,
    /// Mirrors `msgid_plural` for consumers of the older output shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plural: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
    pub line: Vec<usize>,
}

impl MessageRecord {
    pub fn new(msgid: impl Into<String>, msgctxt: Option<String>) -> Self {
        Self {
            msgid: msgid.into(),
            msgctxt,
            msgid_plural: None,
            plural: None,
            extra: BTreeMap::new(),
            line: Vec::new(),
        }
    }

    /// Records a plural found at a call site.
    ///
    /// An empty plural never conflicts and never replaces a non-empty one.
    pub fn merge_plural(&mut self, plural: &str) -> Result<(), ExtractError> {
        match self.msgid_plural.as_deref() {
            Some(seen) if !seen.is_empty() => {
                if !plural.is_empty() && seen != plural {
                    return Err(ExtractError::IncompatiblePlurals {
                        msgid: self.msgid.clone(),
                        seen: seen.to_string(),
                        found: plural.to_string(),
                    });
                }
            }
            _ => {
                self.msgid_plural = Some(plural.to_string());
                self.plural = self.msgid_plural.clone();
            }
        }
        Ok(())
    }
}

/// Messages of one template, keyed by [`message_key`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    messages: BTreeMap<String, MessageRecord>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record for (msgid, msgctxt), created empty on first sight.
    pub fn entry(&mut self, msgid: &str, msgctxt: Option<&str>) -> &mut MessageRecord {
        match self.messages.entry(message_key(msgid, msgctxt)) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                entry.insert(MessageRecord::new(msgid, msgctxt.map(str::to_string)))
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&MessageRecord> {
        self.messages.get(key)
    }

    pub fn lookup(&self, msgid: &str, msgctxt: Option<&str>) -> Option<&MessageRecord> {
        self.messages.get(&message_key(msgid, msgctxt))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MessageRecord)> {
        self.messages.iter().map(|(key, record)| (key.as_str(), record))
    }

    pub fn into_messages(self) -> BTreeMap<String, MessageRecord> {
        self.messages
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::{Catalog, MessageRecord};
    use crate::error::ExtractError;

    #[test]
    fn entry_reuses_existing_record() {
        let mut catalog = Catalog::new();
        catalog.entry("Hello", None).line.push(1);
        catalog.entry("Hello", None).line.push(4);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("Hello").expect("record").line, vec![1, 4]);
    }

    #[test]
    fn entry_separates_contexts() {
        let mut catalog = Catalog::new();
        catalog.entry("File", Some("menu"));
        catalog.entry("File", Some(""));
        catalog.entry("File", None);
        assert_eq!(catalog.len(), 3);
        let record = catalog.lookup("File", Some("")).expect("record");
        assert_eq!(record.msgctxt.as_deref(), Some(""));
        assert_eq!(catalog.lookup("File", None).expect("record").msgctxt, None);
    }

    #[test]
    fn merge_plural_sets_alias() {
        let mut record = MessageRecord::new("cat", None);
        record.merge_plural("cats").expect("plural");
        assert_eq!(record.msgid_plural.as_deref(), Some("cats"));
        assert_eq!(record.plural.as_deref(), Some("cats"));
        record.merge_plural("cats").expect("same plural");
    }

    #[test]
    fn merge_plural_rejects_conflict() {
        let mut record = MessageRecord::new("cat", None);
        record.merge_plural("cats").expect("plural");
        let err = record.merge_plural("dogs").expect_err("conflict");
        assert_eq!(
            err,
            ExtractError::IncompatiblePlurals {
                msgid: "cat".to_string(),
                seen: "cats".to_string(),
                found: "dogs".to_string(),
            }
        );
    }

    #[test]
    fn empty_plural_never_conflicts() {
        let mut record = MessageRecord::new("cat", None);
        record.merge_plural("").expect("empty");
        record.merge_plural("cats").expect("fills empty");
        record.merge_plural("").expect("empty again");
        assert_eq!(record.msgid_plural.as_deref(), Some("cats"));
    }

    #[test]
    fn serializes_records_with_flattened_roles() {
        let mut catalog = Catalog::new();
        let record = catalog.entry("cat", Some("animal"));
        record.merge_plural("cats").expect("plural");
        record
            .extra
            .insert("comment".to_string(), "pet".to_string());
        record.line.push(3);

        let value = serde_json::to_value(&catalog).expect("json");
        let record = &value["animal\u{4}cat"];
        assert_eq!(record["msgid"], Value::from("cat"));
        assert_eq!(record["msgctxt"], Value::from("animal"));
        assert_eq!(record["plural"], Value::from("cats"));
        assert_eq!(record["comment"], Value::from("pet"));
        assert_eq!(record["line"], serde_json::json!([3]));

        let plain = serde_json::to_value(MessageRecord::new("Hello", None)).expect("json");
        assert!(plain.get("msgctxt").is_none());
        assert!(plain.get("msgid_plural").is_none());
    }
}
