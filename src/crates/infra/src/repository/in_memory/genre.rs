use super::catalog::Catalog;
use application::query::dao::GenreDao;
use application::query::QueryError;
use async_trait::async_trait;
use model::genre::Genre;
use std::sync::Arc;

pub struct GenreDaoImpl {
    catalog: Arc<Catalog>,
}

impl GenreDaoImpl {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl GenreDao for GenreDaoImpl {
    async fn get_all(&self) -> Result<Vec<Genre>, QueryError> {
        let mut genres: Vec<Genre> = self
            .catalog
            .genres
            .iter()
            .map(|e| e.value().clone())
            .collect();
        genres.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(genres)
    }
}
