use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

/// jsonb column holding a flat array of strings.
#[derive(
    Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult,
)]
pub struct StringList(pub Vec<String>);

impl From<Vec<String>> for StringList {
    fn from(items: Vec<String>) -> Self {
        StringList(items)
    }
}

impl StringList {
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.clone()
    }
}
