use crate::query::QueryError;
use async_trait::async_trait;
use model::album::Album;
use model::artist::{Artist, ArtistIndex};
use model::audio_file::AudioFile;
use model::genre::Genre;
use model::kind::Kind;
use model::music_folder::MusicFolder;
use model::shared::{Annotation, AnnotationMap};

#[async_trait]
pub trait MusicFolderDao: Send + Sync {
    async fn get_all(&self) -> Result<Vec<MusicFolder>, QueryError>;
}

#[async_trait]
pub trait PropertyDao: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, QueryError>;

    /// 不存在时返回默认值（不会写入）
    async fn default_get(&self, key: &str, default: &str) -> Result<String, QueryError> {
        Ok(self
            .get(key)
            .await?
            .unwrap_or_else(|| default.to_string()))
    }
}

#[async_trait]
pub trait ArtistDao: Send + Sync {
    async fn get_by_id(&self, id: &str) -> Result<Option<Artist>, QueryError>;
    async fn exists(&self, id: &str) -> Result<bool, QueryError>;
    /// 按索引键分组的全部艺术家，分组按索引键排序
    async fn get_index(&self) -> Result<Vec<ArtistIndex>, QueryError>;
}

#[async_trait]
pub trait AlbumDao: Send + Sync {
    async fn get_by_id(&self, id: &str) -> Result<Option<Album>, QueryError>;
    async fn exists(&self, id: &str) -> Result<bool, QueryError>;
    async fn get_by_artist_id(&self, artist_id: &str) -> Result<Vec<Album>, QueryError>;
}

#[async_trait]
pub trait AudioFileDao: Send + Sync {
    async fn get_by_id(&self, id: &str) -> Result<Option<AudioFile>, QueryError>;
    async fn get_by_album_id(&self, album_id: &str) -> Result<Vec<AudioFile>, QueryError>;
}

#[async_trait]
pub trait AnnotationDao: Send + Sync {
    /// 没有注解记录时返回 Ok(None)
    async fn get(
        &self,
        user_id: &str,
        kind: Kind,
        item_id: &str,
    ) -> Result<Option<Annotation>, QueryError>;
    /// 没有注解记录的 id 不出现在返回的 map 中
    async fn get_map(
        &self,
        user_id: &str,
        kind: Kind,
        item_ids: &[String],
    ) -> Result<AnnotationMap, QueryError>;
}

#[async_trait]
pub trait GenreDao: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Genre>, QueryError>;
}

/// 存储层的聚合入口，每种实体一个访问器
pub trait DataStore: Send + Sync {
    fn music_folder(&self) -> &dyn MusicFolderDao;
    fn property(&self) -> &dyn PropertyDao;
    fn artist(&self) -> &dyn ArtistDao;
    fn album(&self) -> &dyn AlbumDao;
    fn audio_file(&self) -> &dyn AudioFileDao;
    fn annotation(&self) -> &dyn AnnotationDao;
    fn genre(&self) -> &dyn GenreDao;
}
