//! Record grouping over `;`-delimited wiki edit dumps.
//!
//! # Overview
//!
//! A dump row records one edit event: a contributor touched a page. Rows are
//! grouped by a key chosen by [`GroupMode`]:
//!
//! - [`GroupMode::Users`] — group by page; members are the contributors who
//!   edited it. The resulting graph connects contributors who worked on the
//!   same pages.
//! - [`GroupMode::Pages`] — group by contributor; members are the pages they
//!   edited. The resulting graph connects pages sharing contributors.
//!
//! Member ids are deduplicated within a group, so a contributor editing the
//! same page many times counts once. Labels are resolved first-seen-wins in
//! file order, recorded here at parse time so the policy does not depend on
//! group iteration order.
//!
//! The dump is only ever read; concurrent analyses may share the same file.
//!
//! # Failure
//!
//! A row missing a required field fails the whole request with
//! [`Error::MalformedRow`] carrying the 1-based line number. Malformed rows
//! are never skipped.

use std::collections::HashMap;
use std::io::Read;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Label that marks anonymous (logged-out) contributors in a dump.
pub const ANONYMOUS_LABEL: &str = "Anonymous";

/// One parsed dump row. Extra columns are ignored; these four are required.
#[derive(Debug, Clone, Deserialize)]
pub struct EditRecord {
    /// Identifier of the edited page.
    pub page_id: String,
    /// Human-readable page title.
    pub page_title: String,
    /// Identifier of the editing contributor.
    pub contributor_id: String,
    /// Display name of the contributor (`"Anonymous"` for logged-out edits).
    pub contributor_name: String,
}

/// Which field keys the grouping, and which (id, label) pair becomes the
/// group member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupMode {
    /// Group by page: contributors become graph nodes.
    #[default]
    Users,
    /// Group by contributor: pages become graph nodes.
    Pages,
}

impl GroupMode {
    /// Short name used in logs and human output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Pages => "pages",
        }
    }
}

/// How members labelled [`ANONYMOUS_LABEL`] are treated.
///
/// The two switches are independent: `drop` removes the member entirely,
/// `strip_label` keeps it but blanks the display label. Both default off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnonymousPolicy {
    /// Drop anonymous members before grouping.
    pub drop: bool,
    /// Keep anonymous members but erase their label.
    pub strip_label: bool,
}

/// Records grouped by key, plus the first-seen label per member id.
///
/// Group keys keep their first-seen (file) order so that downstream graph
/// construction, and therefore exchange output, is deterministic.
#[derive(Debug, Clone, Default)]
pub struct Groups {
    order: Vec<String>,
    members: HashMap<String, Vec<String>>,
    labels: HashMap<String, String>,
}

impl Groups {
    /// Append `(id, label)` to the group at `key`, ignoring ids already
    /// present in that group. The label is recorded only on the id's first
    /// appearance anywhere in the dump (first-seen-wins).
    fn insert(&mut self, key: &str, id: &str, label: &str) {
        self.labels
            .entry(id.to_string())
            .or_insert_with(|| label.to_string());

        match self.members.get_mut(key) {
            Some(list) => {
                if !list.iter().any(|m| m == id) {
                    list.push(id.to_string());
                }
            }
            None => {
                self.order.push(key.to_string());
                self.members.insert(key.to_string(), vec![id.to_string()]);
            }
        }
    }

    /// Iterate groups in first-seen order as `(key, member ids)`.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.order.iter().filter_map(|key| {
            self.members
                .get(key)
                .map(|members| (key.as_str(), members.as_slice()))
        })
    }

    /// First-seen label for a member id. Empty string if the id was never
    /// observed (callers only ask about ids from this dump).
    #[must_use]
    pub fn label(&self, id: &str) -> &str {
        self.labels.get(id).map_or("", String::as_str)
    }

    /// Number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// `true` if the dump produced no groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Parse a dump and group its records according to `mode` and `policy`.
///
/// # Errors
///
/// Returns [`Error::MalformedRow`] on the first row that cannot be decoded
/// into an [`EditRecord`].
pub fn group_records<R: Read>(
    reader: R,
    mode: GroupMode,
    policy: AnonymousPolicy,
) -> Result<Groups> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .from_reader(reader);

    let mut groups = Groups::default();
    let mut rows = 0_u64;

    for result in csv_reader.deserialize::<EditRecord>() {
        let record = result.map_err(|e| {
            let line = e.position().map_or(0, csv::Position::line);
            Error::MalformedRow {
                line,
                message: decode_message(&e),
            }
        })?;
        rows += 1;

        let (key, member_id, member_label) = match mode {
            GroupMode::Users => (
                record.page_id.as_str(),
                record.contributor_id.as_str(),
                record.contributor_name.as_str(),
            ),
            GroupMode::Pages => (
                record.contributor_id.as_str(),
                record.page_id.as_str(),
                record.page_title.as_str(),
            ),
        };

        if member_label == ANONYMOUS_LABEL {
            if policy.drop {
                continue;
            }
            if policy.strip_label {
                groups.insert(key, member_id, "");
                continue;
            }
        }
        groups.insert(key, member_id, member_label);
    }

    debug!(
        rows,
        groups = groups.len(),
        mode = mode.as_str(),
        "grouped dump records"
    );
    Ok(groups)
}

/// Strip csv's own position prefix; the line number already lives on the
/// error variant.
fn decode_message(e: &csv::Error) -> String {
    match e.kind() {
        csv::ErrorKind::Deserialize { err, .. } => err.to_string(),
        _ => e.to_string(),
    }
}
