use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioFile {
    pub id: String,
    pub path: String,
    pub title: String,
    pub album: String,
    pub album_id: String,
    pub artist: String,
    pub artist_id: String,
    #[serde(default)]
    pub track_number: i32,
    #[serde(default)]
    pub disc_number: i32,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub size: i64,
    #[serde(default)]
    pub suffix: String,
    /// 时长（秒）
    #[serde(default)]
    pub duration: i64,
    #[serde(default)]
    pub bit_rate: i32,
    #[serde(default)]
    pub has_cover_art: bool,
    pub created_at: NaiveDateTime,
}
