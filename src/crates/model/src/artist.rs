use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub sort_name: String,
    #[serde(default)]
    pub order_name: String,
    #[serde(default)]
    pub album_count: i32,
}

/// 按索引键（通常是首字母）分组的艺术家列表，由存储层生成
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistIndex {
    pub id: String,
    pub artists: Vec<Artist>,
}
