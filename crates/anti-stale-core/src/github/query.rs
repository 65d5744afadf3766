// SPDX-License-Identifier: Apache-2.0

//! Batched GraphQL document builders.
//!
//! Both builders walk their input and take every alias from one
//! monotonic counter (`n0`, `n1`, ...). A token names at most one value
//! per document, so duplicate owner names, repository names, or entity
//! numbers under different parents never collide in the alias
//! namespace or the variable map. Documents are assembled as
//! [`FieldNode`] trees and serialized to wire text in one place.

use std::collections::BTreeMap;
use std::fmt::Write;

use serde::Serialize;

use super::entity::AddCommentInput;
use crate::config::{Owners, RepoTargets};

/// Label page size requested per entity.
pub const LABEL_PAGE_SIZE: u64 = 5;

/// Name of the shared label page size variable.
const FIRST_VAR: &str = "first";

/// A GraphQL variable value, typed by its declared kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum VariableValue {
    /// Owner or repository name.
    String(String),
    /// Entity number or page size.
    Int(u64),
    /// Comment mutation input object.
    CommentInput(AddCommentInput),
}

impl VariableValue {
    /// GraphQL type of the declared variable carrying this value.
    #[must_use]
    pub fn graphql_type(&self) -> &'static str {
        match self {
            VariableValue::String(_) => "String!",
            VariableValue::Int(_) => "Int!",
            VariableValue::CommentInput(_) => "AddCommentInput!",
        }
    }
}

/// One field in a document tree.
struct FieldNode {
    alias: Option<String>,
    name: &'static str,
    args: Vec<(&'static str, String)>,
    children: Vec<FieldNode>,
}

impl FieldNode {
    fn leaf(name: &'static str) -> Self {
        Self {
            alias: None,
            name,
            args: Vec::new(),
            children: Vec::new(),
        }
    }

    fn render(&self, out: &mut String) {
        if let Some(alias) = &self.alias {
            out.push_str(alias);
            out.push_str(": ");
        }
        out.push_str(self.name);
        if !self.args.is_empty() {
            out.push('(');
            for (i, (key, value)) in self.args.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(key);
                out.push_str(": ");
                out.push_str(value);
            }
            out.push(')');
        }
        if !self.children.is_empty() {
            out.push_str(" { ");
            for (i, child) in self.children.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                child.render(out);
            }
            out.push_str(" }");
        }
    }
}

/// Alias allocator and variable registry for one document.
///
/// Variables keep registration order for the declaration list; the
/// finished map is handed back sorted by token, which serializes the
/// same way every run.
struct DocumentBuilder {
    counter: usize,
    variables: Vec<(String, VariableValue)>,
}

impl DocumentBuilder {
    fn new() -> Self {
        Self {
            counter: 0,
            variables: Vec::new(),
        }
    }

    /// Next alias token. Tokens are never reused within a document.
    fn next_alias(&mut self) -> String {
        let token = format!("n{}", self.counter);
        self.counter += 1;
        token
    }

    /// Allocates a fresh token and declares a variable carrying `value`.
    fn bind(&mut self, value: VariableValue) -> String {
        let token = self.next_alias();
        self.variables.push((token.clone(), value));
        token
    }

    /// Declares a variable under a fixed name instead of a token.
    fn bind_named(&mut self, name: &str, value: VariableValue) {
        self.variables.push((name.to_owned(), value));
    }

    /// Serializes the document and hands the variables back in map form.
    fn finish(self, operation: &str, roots: &[FieldNode]) -> Document {
        let mut text = String::from(operation);
        if !self.variables.is_empty() {
            text.push('(');
            for (i, (name, value)) in self.variables.iter().enumerate() {
                if i > 0 {
                    text.push_str(", ");
                }
                let _ = write!(text, "${name}: {}", value.graphql_type());
            }
            text.push(')');
        }
        text.push_str(" { ");
        for (i, root) in roots.iter().enumerate() {
            if i > 0 {
                text.push(' ');
            }
            root.render(&mut text);
        }
        text.push_str(" }");

        (text, self.variables.into_iter().collect())
    }
}

/// A rendered document with its variable map.
pub type Document = (String, BTreeMap<String, VariableValue>);

/// Builds the batched entity lookup for the whole selector.
///
/// Every repository with at least one target becomes an aliased
/// `repository` field whose children alias each issue, then each pull
/// request. Repositories and owners that name no entity are skipped,
/// so the document never declares an unused variable. The shared
/// `first` page size is declared once, with the first entity.
#[must_use]
pub fn lookup_query(owners: &Owners) -> Document {
    let mut doc = DocumentBuilder::new();
    let mut roots = Vec::new();
    let mut first_declared = false;

    for (owner, repos) in owners {
        if repos.values().all(RepoTargets::is_empty) {
            continue;
        }
        let owner_token = doc.bind(VariableValue::String(owner.clone()));

        for (repo, targets) in repos {
            if targets.is_empty() {
                continue;
            }
            let repo_token = doc.bind(VariableValue::String(repo.clone()));

            if !first_declared {
                doc.bind_named(FIRST_VAR, VariableValue::Int(LABEL_PAGE_SIZE));
                first_declared = true;
            }

            let mut entities = Vec::with_capacity(targets.issues.len() + targets.prs.len());
            for number in &targets.issues {
                entities.push(entity_field("issue", doc.bind(VariableValue::Int(*number))));
            }
            for number in &targets.prs {
                entities.push(entity_field(
                    "pullRequest",
                    doc.bind(VariableValue::Int(*number)),
                ));
            }

            roots.push(FieldNode {
                alias: Some(repo_token.clone()),
                name: "repository",
                args: vec![
                    ("owner", format!("${owner_token}")),
                    ("name", format!("${repo_token}")),
                ],
                children: entities,
            });
        }
    }

    doc.finish("query", &roots)
}

/// One aliased `issue`/`pullRequest` field with the standard selection.
fn entity_field(field: &'static str, token: String) -> FieldNode {
    let selection = vec![
        FieldNode::leaf("id"),
        FieldNode::leaf("closed"),
        FieldNode::leaf("url"),
        FieldNode {
            alias: None,
            name: "labels",
            args: vec![("first", format!("${FIRST_VAR}"))],
            children: vec![FieldNode {
                alias: None,
                name: "nodes",
                args: Vec::new(),
                children: vec![FieldNode::leaf("name")],
            }],
        },
    ];

    FieldNode {
        alias: Some(token.clone()),
        name: field,
        args: vec![("number", format!("${token}"))],
        children: selection,
    }
}

/// Builds the batched comment mutation for the confirmed targets.
///
/// Every target takes two fresh tokens: the first declares its
/// `AddCommentInput!` variable, the next aliases the mutation call. K
/// targets produce K `AddComment` fields and K declared variables, and
/// the counter advances by 2K.
#[must_use]
pub fn comment_mutation(subject_ids: &[String], body: &str) -> Document {
    let mut doc = DocumentBuilder::new();
    let mut roots = Vec::with_capacity(subject_ids.len());

    for subject_id in subject_ids {
        let input_token = doc.bind(VariableValue::CommentInput(AddCommentInput {
            subject_id: subject_id.clone(),
            body: body.to_owned(),
        }));
        let result_token = doc.next_alias();

        roots.push(FieldNode {
            alias: Some(result_token),
            name: "AddComment",
            args: vec![("input", format!("${input_token}"))],
            children: vec![FieldNode::leaf("url")],
        });
    }

    doc.finish("mutation", &roots)
}
