use super::artist_index::ArtistIndexRule;
use super::catalog::Catalog;
use application::query::dao::ArtistDao;
use application::query::QueryError;
use async_trait::async_trait;
use model::artist::{Artist, ArtistIndex};
use std::sync::Arc;

pub struct ArtistDaoImpl {
    catalog: Arc<Catalog>,
    index_rule: ArtistIndexRule,
}

impl ArtistDaoImpl {
    pub fn new(catalog: Arc<Catalog>, index_rule: ArtistIndexRule) -> Self {
        Self {
            catalog,
            index_rule,
        }
    }
}

#[async_trait]
impl ArtistDao for ArtistDaoImpl {
    async fn get_by_id(&self, id: &str) -> Result<Option<Artist>, QueryError> {
        Ok(self.catalog.artists.get(id).map(|a| a.value().clone()))
    }

    async fn exists(&self, id: &str) -> Result<bool, QueryError> {
        Ok(self.catalog.artists.contains_key(id))
    }

    async fn get_index(&self) -> Result<Vec<ArtistIndex>, QueryError> {
        let artists: Vec<Artist> = self
            .catalog
            .artists
            .iter()
            .map(|e| e.value().clone())
            .collect();
        Ok(self.index_rule.group(artists))
    }
}
