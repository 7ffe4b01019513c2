use super::catalog::Catalog;
use application::query::dao::AlbumDao;
use application::query::QueryError;
use async_trait::async_trait;
use model::album::Album;
use std::sync::Arc;

pub struct AlbumDaoImpl {
    catalog: Arc<Catalog>,
}

impl AlbumDaoImpl {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl AlbumDao for AlbumDaoImpl {
    async fn get_by_id(&self, id: &str) -> Result<Option<Album>, QueryError> {
        Ok(self.catalog.albums.get(id).map(|a| a.value().clone()))
    }

    async fn exists(&self, id: &str) -> Result<bool, QueryError> {
        Ok(self.catalog.albums.contains_key(id))
    }

    /// 按年份、名称排序，没有年份的排在前面
    async fn get_by_artist_id(&self, artist_id: &str) -> Result<Vec<Album>, QueryError> {
        let mut albums: Vec<Album> = self
            .catalog
            .albums
            .iter()
            .filter(|e| e.value().artist_id == artist_id)
            .map(|e| e.value().clone())
            .collect();
        albums.sort_by(|a, b| {
            a.year
                .cmp(&b.year)
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(albums)
    }
}
