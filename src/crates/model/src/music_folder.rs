use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MusicFolder {
    pub id: String,
    pub name: String,
    pub path: String,
}
