use super::catalog::Catalog;
use application::query::dao::AudioFileDao;
use application::query::QueryError;
use async_trait::async_trait;
use model::audio_file::AudioFile;
use std::sync::Arc;

pub struct AudioFileDaoImpl {
    catalog: Arc<Catalog>,
}

impl AudioFileDaoImpl {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl AudioFileDao for AudioFileDaoImpl {
    async fn get_by_id(&self, id: &str) -> Result<Option<AudioFile>, QueryError> {
        Ok(self.catalog.audio_files.get(id).map(|af| af.value().clone()))
    }

    async fn get_by_album_id(&self, album_id: &str) -> Result<Vec<AudioFile>, QueryError> {
        let mut audio_files: Vec<AudioFile> = self
            .catalog
            .audio_files
            .iter()
            .filter(|e| e.value().album_id == album_id)
            .map(|e| e.value().clone())
            .collect();
        audio_files.sort_by(|a, b| {
            a.disc_number
                .cmp(&b.disc_number)
                .then_with(|| a.track_number.cmp(&b.track_number))
                .then_with(|| a.title.cmp(&b.title))
        });
        Ok(audio_files)
    }
}
