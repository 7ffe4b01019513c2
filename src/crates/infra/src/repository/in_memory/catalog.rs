use dashmap::DashMap;
use model::album::Album;
use model::artist::Artist;
use model::audio_file::AudioFile;
use model::genre::Genre;
use model::kind::Kind;
use model::music_folder::MusicFolder;
use model::shared::Annotation;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnnotationKey {
    pub user_id: String,
    pub kind: Kind,
    pub item_id: String,
}

impl AnnotationKey {
    pub fn new(user_id: &str, kind: Kind, item_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            kind,
            item_id: item_id.to_string(),
        }
    }
}

/// 内存中的目录数据，所有表按 id 索引
#[derive(Default)]
pub struct Catalog {
    pub music_folders: DashMap<String, MusicFolder>,
    pub properties: DashMap<String, String>,
    pub artists: DashMap<String, Artist>,
    pub albums: DashMap<String, Album>,
    pub audio_files: DashMap<String, AudioFile>,
    pub annotations: DashMap<AnnotationKey, Annotation>,
    pub genres: DashMap<String, Genre>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put_music_folder(&self, folder: MusicFolder) {
        self.music_folders.insert(folder.id.clone(), folder);
    }

    pub fn put_artist(&self, artist: Artist) {
        self.artists.insert(artist.id.clone(), artist);
    }

    pub fn put_album(&self, album: Album) {
        self.albums.insert(album.id.clone(), album);
    }

    pub fn put_audio_file(&self, audio_file: AudioFile) {
        self.audio_files.insert(audio_file.id.clone(), audio_file);
    }

    pub fn put_genre(&self, genre: Genre) {
        self.genres.insert(genre.id.clone(), genre);
    }

    pub fn put_annotation(&self, user_id: &str, kind: Kind, item_id: &str, ann: Annotation) {
        self.annotations
            .insert(AnnotationKey::new(user_id, kind, item_id), ann);
    }

    pub fn set_property(&self, key: &str, value: &str) {
        self.properties.insert(key.to_string(), value.to_string());
    }
}
