use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 用户对单个条目（专辑或音频文件）的注解
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    #[serde(default)]
    pub play_count: i32,
    #[serde(default)]
    pub play_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub rating: i32,
    /// None 表示未收藏
    #[serde(default)]
    pub starred_at: Option<NaiveDateTime>,
}

impl Annotation {
    /// 没有注解记录时使用的值：从未播放、未评分、未收藏
    pub const ABSENT: Annotation = Annotation {
        play_count: 0,
        play_date: None,
        rating: 0,
        starred_at: None,
    };
}

impl Default for Annotation {
    fn default() -> Self {
        Self::ABSENT
    }
}

/// item_id -> Annotation，查询不到的 id 不会出现在 map 中
pub type AnnotationMap = HashMap<String, Annotation>;

/// 毫秒时间戳转换为时间，超出范围时返回 epoch
pub fn to_time(millis: i64) -> NaiveDateTime {
    DateTime::from_timestamp_millis(millis)
        .unwrap_or_default()
        .naive_utc()
}
