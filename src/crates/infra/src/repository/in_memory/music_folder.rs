use super::catalog::Catalog;
use application::query::dao::MusicFolderDao;
use application::query::QueryError;
use async_trait::async_trait;
use model::music_folder::MusicFolder;
use std::sync::Arc;

pub struct MusicFolderDaoImpl {
    catalog: Arc<Catalog>,
}

impl MusicFolderDaoImpl {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl MusicFolderDao for MusicFolderDaoImpl {
    async fn get_all(&self) -> Result<Vec<MusicFolder>, QueryError> {
        let mut folders: Vec<MusicFolder> = self
            .catalog
            .music_folders
            .iter()
            .map(|e| e.value().clone())
            .collect();
        folders.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(folders)
    }
}
