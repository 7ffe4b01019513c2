use super::catalog::Catalog;
use log::info;
use model::album::Album;
use model::artist::Artist;
use model::audio_file::AudioFile;
use model::genre::Genre;
use model::kind::Kind;
use model::music_folder::MusicFolder;
use model::shared::Annotation;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Failed to read catalog snapshot: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid catalog snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
pub struct AnnotationRecord {
    pub user_id: String,
    pub kind: Kind,
    pub item_id: String,
    #[serde(flatten)]
    pub annotation: Annotation,
}

/// 扫描器导出的目录快照（JSON）
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CatalogSnapshot {
    pub music_folders: Vec<MusicFolder>,
    pub artists: Vec<Artist>,
    pub albums: Vec<Album>,
    pub audio_files: Vec<AudioFile>,
    pub genres: Vec<Genre>,
    pub annotations: Vec<AnnotationRecord>,
    pub properties: HashMap<String, String>,
}

impl CatalogSnapshot {
    pub fn from_path(path: &Path) -> Result<Self, SnapshotError> {
        let data = fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    pub fn from_json(data: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(data)?)
    }

    pub fn into_catalog(self) -> Catalog {
        info!(
            "Loading catalog: {} folders, {} artists, {} albums, {} audio files, {} genres, {} annotations",
            self.music_folders.len(),
            self.artists.len(),
            self.albums.len(),
            self.audio_files.len(),
            self.genres.len(),
            self.annotations.len()
        );
        let catalog = Catalog::new();
        self.music_folders
            .into_iter()
            .for_each(|f| catalog.put_music_folder(f));
        self.artists.into_iter().for_each(|a| catalog.put_artist(a));
        self.albums.into_iter().for_each(|a| catalog.put_album(a));
        self.audio_files
            .into_iter()
            .for_each(|af| catalog.put_audio_file(af));
        self.genres.into_iter().for_each(|g| catalog.put_genre(g));
        for record in self.annotations {
            catalog.put_annotation(
                &record.user_id,
                record.kind,
                &record.item_id,
                record.annotation,
            );
        }
        for (key, value) in &self.properties {
            catalog.set_property(key, value);
        }
        catalog
    }
}
