// SPDX-License-Identifier: Apache-2.0

//! Entity model and staleness classification.
//!
//! Issues and pull requests share one shape: both carry the same
//! `id`/`closed`/`url`/`labels` selection, so one type decodes either.

use serde::{Deserialize, Serialize};

/// Staleness of one fetched entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Staleness {
    /// Open and carrying the stale label.
    Stale,
    /// Open without the stale label.
    Fresh,
    /// Closed. Never considered stale, whatever its labels say.
    Closed,
}

/// A fetched GitHub issue or pull request.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Entity {
    /// Provider-assigned opaque identifier, used as the mutation
    /// subject when commenting.
    pub id: String,
    /// Whether the entity is closed.
    pub closed: bool,
    /// Web URL, used for reporting and prompts.
    pub url: String,
    /// First page of labels.
    #[serde(default)]
    pub labels: Labels,
}

/// Labels connection as GitHub returns it.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Labels {
    /// Label nodes.
    pub nodes: Vec<LabelNode>,
}

/// A single label.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LabelNode {
    /// Label name.
    pub name: String,
}

impl Entity {
    /// Whether the label set contains `name`, compared exactly and
    /// case-sensitively.
    #[must_use]
    pub fn has_label(&self, name: &str) -> bool {
        self.labels.nodes.iter().any(|label| label.name == name)
    }

    /// Classifies the entity against the configured stale label.
    ///
    /// Closed wins over everything else; a closed entity is reported
    /// [`Staleness::Closed`] even when it carries the label.
    #[must_use]
    pub fn classify(&self, stale_label: &str) -> Staleness {
        if self.closed {
            Staleness::Closed
        } else if self.has_label(stale_label) {
            Staleness::Stale
        } else {
            Staleness::Fresh
        }
    }
}

/// Input object for one batched `AddComment` mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCommentInput {
    /// Identifier of the issue or pull request to comment on.
    pub subject_id: String,
    /// Comment body.
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(closed: bool, labels: &[&str]) -> Entity {
        Entity {
            id: "I_abc".to_string(),
            closed,
            url: "https://github.com/acme/widgets/issues/1".to_string(),
            labels: Labels {
                nodes: labels
                    .iter()
                    .map(|name| LabelNode {
                        name: (*name).to_string(),
                    })
                    .collect(),
            },
        }
    }

    #[test]
    fn open_with_stale_label_is_stale() {
        assert_eq!(entity(false, &["Stale"]).classify("Stale"), Staleness::Stale);
        assert_eq!(
            entity(false, &["bug", "Stale"]).classify("Stale"),
            Staleness::Stale
        );
    }

    #[test]
    fn open_without_stale_label_is_fresh() {
        assert_eq!(entity(false, &["bug"]).classify("Stale"), Staleness::Fresh);
        assert_eq!(entity(false, &[]).classify("Stale"), Staleness::Fresh);
    }

    #[test]
    fn closed_is_never_stale() {
        assert_eq!(entity(true, &["Stale"]).classify("Stale"), Staleness::Closed);
        assert_eq!(entity(true, &[]).classify("Stale"), Staleness::Closed);
    }

    #[test]
    fn label_match_is_case_sensitive() {
        assert!(!entity(false, &["stale"]).has_label("Stale"));
        assert_eq!(entity(false, &["stale"]).classify("Stale"), Staleness::Fresh);
    }

    #[test]
    fn custom_label_names_work() {
        assert_eq!(
            entity(false, &["inactive"]).classify("inactive"),
            Staleness::Stale
        );
    }

    #[test]
    fn decodes_the_lookup_selection_shape() {
        let entity: Entity = serde_json::from_str(
            r#"{
                "id": "I_kwDOABCD",
                "closed": false,
                "url": "https://github.com/acme/widgets/issues/1",
                "labels": { "nodes": [{ "name": "Stale" }] }
            }"#,
        )
        .expect("entity should decode");

        assert!(entity.has_label("Stale"));
        assert_eq!(entity.classify("Stale"), Staleness::Stale);
    }

    #[test]
    fn comment_input_serializes_camel_case() {
        let input = AddCommentInput {
            subject_id: "I_abc".to_string(),
            body: "not stale".to_string(),
        };
        let json = serde_json::to_value(&input).expect("input should serialize");

        assert_eq!(json["subjectId"], "I_abc");
        assert_eq!(json["body"], "not stale");
    }
}
