use crate::context::AppContext;
use crate::query::dao::DataStore;
use crate::query::dto::{DirectoryInfo, Entry};
use crate::query::QueryError;
use chrono::NaiveDateTime;
use log::{debug, warn};
use model::album::Album;
use model::artist::{Artist, ArtistIndex};
use model::audio_file::AudioFile;
use model::genre::Genre;
use model::kind::Kind;
use model::music_folder::MusicFolder;
use model::property::{NEVER_SCANNED, PROP_LAST_SCAN};
use model::shared::{to_time, Annotation};
use serde::Serialize;
use std::sync::Arc;

/// 名称为空的流派的显示名
pub const EMPTY_GENRE_NAME: &str = "<Empty>";

/// getIndexes 的结果。indexes 为 None 表示自 if_modified_since 以来没有变化
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Indexes {
    pub indexes: Option<Vec<ArtistIndex>>,
    pub last_modified: NaiveDateTime,
}

/// id 的解析结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryKind {
    Artist,
    Album,
    NotFound,
}

/// 浏览服务：从存储层读取目录数据并合并当前用户的注解。
/// 不持有跨请求的状态，每次调用都重新读取存储
#[derive(Clone)]
pub struct Browser {
    store: Arc<dyn DataStore>,
}

impl Browser {
    pub fn new(store: Arc<dyn DataStore>) -> Self {
        Self { store }
    }

    pub async fn music_folders(&self, _ctx: &AppContext) -> Result<Vec<MusicFolder>, QueryError> {
        self.store.music_folder().get_all().await
    }

    pub async fn indexes(
        &self,
        ctx: &AppContext,
        if_modified_since: NaiveDateTime,
    ) -> Result<Indexes, QueryError> {
        let last_scan = self
            .store
            .property()
            .default_get(PROP_LAST_SCAN, NEVER_SCANNED)
            .await
            .map_err(|e| e.context(format!("Error retrieving {} property", PROP_LAST_SCAN)))?;
        let last_modified = parse_last_scan(ctx, &last_scan);

        if last_modified > if_modified_since {
            let indexes = self
                .store
                .artist()
                .get_index()
                .await
                .map_err(|e| e.context("Error retrieving artist index"))?;
            return Ok(Indexes {
                indexes: Some(indexes),
                last_modified,
            });
        }

        debug!(
            "[{}] Indexes not modified since {}",
            ctx.request_id, if_modified_since
        );
        Ok(Indexes {
            indexes: None,
            last_modified,
        })
    }

    /// 把不带类型的 id 解析为艺术家目录或专辑目录，先查艺术家再查专辑
    pub async fn directory(&self, ctx: &AppContext, id: &str) -> Result<DirectoryInfo, QueryError> {
        match self.resolve(ctx, id).await {
            DirectoryKind::Artist => self.artist(ctx, id).await,
            DirectoryKind::Album => self.album(ctx, id).await,
            DirectoryKind::NotFound => {
                debug!("[{}] Directory not found id={}", ctx.request_id, id);
                Err(QueryError::NotFound(format!("Directory {}", id)))
            }
        }
    }

    /// 判断 id 属于哪种实体。
    ///
    /// 存在性查询出错时只记录日志，并按"不存在"处理：调用方只会得到
    /// 解析成功或 NotFound，不会看到查询阶段的存储错误。
    /// 因此存储暂时不可用时也会表现为 NotFound
    pub async fn resolve(&self, ctx: &AppContext, id: &str) -> DirectoryKind {
        match self.store.artist().exists(id).await {
            Ok(true) => return DirectoryKind::Artist,
            Ok(false) => {}
            Err(e) => warn!(
                "[{}] Error searching for Artist id={}: {}",
                ctx.request_id, id, e
            ),
        }
        match self.store.album().exists(id).await {
            Ok(true) => return DirectoryKind::Album,
            Ok(false) => {}
            Err(e) => warn!(
                "[{}] Error searching for Album id={}: {}",
                ctx.request_id, id, e
            ),
        }
        DirectoryKind::NotFound
    }

    pub async fn artist(&self, ctx: &AppContext, id: &str) -> Result<DirectoryInfo, QueryError> {
        let (artist, albums) = self.retrieve_artist(id).await?;
        debug!(
            "[{}] Found Artist id={} name={}",
            ctx.request_id, id, artist.name
        );

        let album_ids: Vec<String> = albums.iter().map(|al| al.id.clone()).collect();
        let album_anns = self
            .store
            .annotation()
            .get_map(ctx.user_id(), Kind::Album, &album_ids)
            .await?;

        Ok(DirectoryInfo::for_artist(&artist, &albums, &album_anns))
    }

    pub async fn album(&self, ctx: &AppContext, id: &str) -> Result<DirectoryInfo, QueryError> {
        let (album, audio_files) = self.retrieve_album(id).await?;
        debug!(
            "[{}] Found Album id={} name={}",
            ctx.request_id, id, album.name
        );

        let track_ids: Vec<String> = audio_files.iter().map(|af| af.id.clone()).collect();
        let annotations = self.store.annotation();
        let track_anns = annotations
            .get_map(ctx.user_id(), Kind::AudioFile, &track_ids)
            .await?;
        let album_ann = annotations
            .get(ctx.user_id(), Kind::Album, &album.id)
            .await?
            .unwrap_or(Annotation::ABSENT);

        Ok(DirectoryInfo::for_album(
            &album,
            &album_ann,
            &audio_files,
            &track_anns,
        ))
    }

    pub async fn get_song(&self, ctx: &AppContext, id: &str) -> Result<Entry, QueryError> {
        let audio_file = self
            .store
            .audio_file()
            .get_by_id(id)
            .await?
            .ok_or_else(|| QueryError::NotFound(format!("Song {}", id)))?;

        // 只有"没有记录"按零值处理，读取失败照常返回错误
        let ann = self
            .store
            .annotation()
            .get(ctx.user_id(), Kind::AudioFile, id)
            .await?
            .unwrap_or(Annotation::ABSENT);

        Ok(Entry::from_audio_file(&audio_file, &ann))
    }

    /// 名称为空白的流派改名为 `<Empty>`，然后按名称升序排列
    pub async fn get_genres(&self, ctx: &AppContext) -> Result<Vec<Genre>, QueryError> {
        let mut genres = self.store.genre().get_all().await?;
        for genre in genres.iter_mut() {
            if genre.name.trim().is_empty() {
                debug!(
                    "[{}] Renaming empty genre id={} to {}",
                    ctx.request_id, genre.id, EMPTY_GENRE_NAME
                );
                genre.name = EMPTY_GENRE_NAME.to_string();
            }
        }
        genres.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(genres)
    }

    async fn retrieve_artist(&self, id: &str) -> Result<(Artist, Vec<Album>), QueryError> {
        let artist = self
            .store
            .artist()
            .get_by_id(id)
            .await
            .and_then(|artist| artist.ok_or_else(|| QueryError::NotFound(format!("Artist {}", id))))
            .map_err(|e| e.context(format!("Error reading Artist {} from DB", id)))?;

        let albums = self
            .store
            .album()
            .get_by_artist_id(id)
            .await
            .map_err(|e| e.context(format!("Error reading {}'s albums from DB", artist.name)))?;

        Ok((artist, albums))
    }

    async fn retrieve_album(&self, id: &str) -> Result<(Album, Vec<AudioFile>), QueryError> {
        let album = self
            .store
            .album()
            .get_by_id(id)
            .await
            .and_then(|album| album.ok_or_else(|| QueryError::NotFound(format!("Album {}", id))))
            .map_err(|e| e.context(format!("Error reading Album {} from DB", id)))?;

        let audio_files = self
            .store
            .audio_file()
            .get_by_album_id(id)
            .await
            .map_err(|e| e.context(format!("Error reading {}'s tracks from DB", album.name)))?;

        Ok((album, audio_files))
    }
}

/// LastScan 属性是毫秒时间戳，无法解析时按 0 处理
fn parse_last_scan(ctx: &AppContext, value: &str) -> NaiveDateTime {
    let millis = value.trim().parse::<i64>().unwrap_or_else(|e| {
        warn!(
            "[{}] Invalid {} value {:?}: {}",
            ctx.request_id, PROP_LAST_SCAN, value, e
        );
        0
    });
    to_time(millis)
}
