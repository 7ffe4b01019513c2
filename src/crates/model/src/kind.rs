use serde::{Deserialize, Serialize};

/// 注解所属条目的类型。艺术家没有注解，播放次数由专辑汇总得出
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    AudioFile,
    Album,
}
