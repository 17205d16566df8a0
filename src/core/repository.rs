use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum RepositoryStore {
    Memory,
    DynamoDB,
    LocalDynamoDB,
}

impl RepositoryStore {
    pub fn is_dynamodb(&self) -> bool {
        matches!(self, RepositoryStore::DynamoDB | RepositoryStore::LocalDynamoDB)
    }
}
