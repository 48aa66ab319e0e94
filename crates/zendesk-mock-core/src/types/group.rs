//! Group record and the JSON envelopes it travels in.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Group record managed by the mock.
///
/// `name` doubles as a tag carrier in tests: filters look for literal
/// markers such as `Assign:true` or `USER: 42` inside it. Fields the mock
/// does not interpret are kept in `extra` and echoed back untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Group {
    /// Identifier, assigned by the server on creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Remaining fields (`url`, `deleted`, `created_at`, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Group {
    /// Create a group without an id.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            extra: Map::new(),
        }
    }

    /// Return the group with its id set.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

/// Single-item envelope: `{ "group": { ... } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupEnvelope {
    pub group: Group,
}

/// List envelope: `{ "groups": [ ... ] }`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GroupsEnvelope {
    pub groups: Vec<Group>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn test_group_without_id_omits_field() {
        let json = serde_json::to_value(Group::named("Support")).expect("Should serialize");
        assert_eq!(json, json!({"name": "Support"}));
    }

    #[rstest]
    #[case(json!({"id": 7, "name": "Ops"}), Some(7), "Ops")]
    #[case(json!({"name": "Ops"}), None, "Ops")]
    #[case(json!({"id": 3}), Some(3), "")]
    fn test_group_deserialize(
        #[case] input: Value,
        #[case] id: Option<i64>,
        #[case] name: &str,
    ) {
        let group: Group = serde_json::from_value(input).expect("Should deserialize");
        assert_eq!(group.id, id);
        assert_eq!(group.name, name);
        assert!(group.extra.is_empty());
    }

    #[rstest]
    fn test_group_preserves_unknown_fields() {
        let input = json!({
            "id": 12,
            "name": "Billing",
            "deleted": false,
            "url": "https://example.zendesk.com/api/v2/groups/12.json"
        });

        let group: Group = serde_json::from_value(input.clone()).expect("Should deserialize");
        assert_eq!(group.extra.get("deleted"), Some(&json!(false)));

        let output = serde_json::to_value(&group).expect("Should serialize");
        assert_eq!(output, input);
    }

    #[rstest]
    fn test_envelopes_use_resource_keys() {
        let single = GroupEnvelope {
            group: Group::named("A").with_id(1),
        };
        let list = GroupsEnvelope {
            groups: vec![Group::named("A").with_id(1), Group::named("B").with_id(2)],
        };

        assert_eq!(
            serde_json::to_value(&single).expect("Should serialize"),
            json!({"group": {"id": 1, "name": "A"}})
        );
        assert_eq!(
            serde_json::to_value(&list).expect("Should serialize"),
            json!({"groups": [{"id": 1, "name": "A"}, {"id": 2, "name": "B"}]})
        );
    }

    #[rstest]
    fn test_empty_list_envelope() {
        let json = serde_json::to_string(&GroupsEnvelope::default()).expect("Should serialize");
        assert_eq!(json, r#"{"groups":[]}"#);
    }
}
