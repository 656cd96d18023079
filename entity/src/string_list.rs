use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

/// A list of strings stored as a JSON array column.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct StringList(pub Vec<String>);

impl StringList {
    /// Builds a list from raw entries, trimming each one and dropping blanks.
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self(
            entries
                .into_iter()
                .map(|entry| entry.as_ref().trim().to_string())
                .filter(|entry| !entry.is_empty())
                .collect(),
        )
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}
