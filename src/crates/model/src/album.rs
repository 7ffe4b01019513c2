use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub name: String,
    pub artist_id: String,
    /// 专辑艺术家名称（冗余字段）
    pub artist: String,
    #[serde(default)]
    pub song_count: i32,
    /// 总时长（秒）
    #[serde(default)]
    pub duration: i64,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub cover_art_id: String,
    pub created_at: NaiveDateTime,
}
