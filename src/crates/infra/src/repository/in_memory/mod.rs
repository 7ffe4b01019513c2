pub mod album;
pub mod annotation;
pub mod artist;
pub mod artist_index;
pub mod audio_file;
pub mod catalog;
pub mod genre;
pub mod music_folder;
pub mod property;
pub mod snapshot;

use album::AlbumDaoImpl;
use annotation::AnnotationDaoImpl;
use application::query::dao::{
    AlbumDao, AnnotationDao, ArtistDao, AudioFileDao, DataStore, GenreDao, MusicFolderDao,
    PropertyDao,
};
use artist::ArtistDaoImpl;
use artist_index::ArtistIndexRule;
use audio_file::AudioFileDaoImpl;
use catalog::Catalog;
use genre::GenreDaoImpl;
use music_folder::MusicFolderDaoImpl;
use property::PropertyDaoImpl;
use std::sync::Arc;

/// 基于内存目录数据的 DataStore 实现
pub struct InMemoryDataStore {
    music_folder: MusicFolderDaoImpl,
    property: PropertyDaoImpl,
    artist: ArtistDaoImpl,
    album: AlbumDaoImpl,
    audio_file: AudioFileDaoImpl,
    annotation: AnnotationDaoImpl,
    genre: GenreDaoImpl,
}

impl InMemoryDataStore {
    pub fn new(catalog: Arc<Catalog>, index_rule: ArtistIndexRule) -> Self {
        Self {
            music_folder: MusicFolderDaoImpl::new(catalog.clone()),
            property: PropertyDaoImpl::new(catalog.clone()),
            artist: ArtistDaoImpl::new(catalog.clone(), index_rule),
            album: AlbumDaoImpl::new(catalog.clone()),
            audio_file: AudioFileDaoImpl::new(catalog.clone()),
            annotation: AnnotationDaoImpl::new(catalog.clone()),
            genre: GenreDaoImpl::new(catalog),
        }
    }
}

impl DataStore for InMemoryDataStore {
    fn music_folder(&self) -> &dyn MusicFolderDao {
        &self.music_folder
    }

    fn property(&self) -> &dyn PropertyDao {
        &self.property
    }

    fn artist(&self) -> &dyn ArtistDao {
        &self.artist
    }

    fn album(&self) -> &dyn AlbumDao {
        &self.album
    }

    fn audio_file(&self) -> &dyn AudioFileDao {
        &self.audio_file
    }

    fn annotation(&self) -> &dyn AnnotationDao {
        &self.annotation
    }

    fn genre(&self) -> &dyn GenreDao {
        &self.genre
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use application::context::AppContext;
    use application::query::browser::{Browser, DirectoryKind};
    use chrono::NaiveDateTime;
    use model::album::Album;
    use model::artist::Artist;
    use model::audio_file::AudioFile;
    use model::genre::Genre;
    use model::kind::Kind;
    use model::music_folder::MusicFolder;
    use model::property::PROP_LAST_SCAN;
    use model::shared::{to_time, Annotation};

    const GROUPS: &str = "A B C D E F G H I J K L M N O P Q R S T U V W X-Z(XYZ) [Unknown]([)";

    fn created() -> NaiveDateTime {
        to_time(1_700_000_000_000)
    }

    fn album(id: &str, artist_id: &str, name: &str, year: Option<i32>) -> Album {
        Album {
            id: id.to_string(),
            name: name.to_string(),
            artist_id: artist_id.to_string(),
            artist: "Miles Davis".to_string(),
            song_count: 2,
            duration: 900,
            year,
            genre: "Jazz".to_string(),
            cover_art_id: format!("al-{}", id),
            created_at: created(),
        }
    }

    fn audio_file(id: &str, album_id: &str, disc: i32, track: i32) -> AudioFile {
        AudioFile {
            id: id.to_string(),
            path: format!("/music/{}.flac", id),
            title: format!("Track {}-{}", disc, track),
            album: "Kind of Blue".to_string(),
            album_id: album_id.to_string(),
            artist: "Miles Davis".to_string(),
            artist_id: "ar-1".to_string(),
            track_number: track,
            disc_number: disc,
            year: Some(1959),
            genre: "Jazz".to_string(),
            size: 10_000,
            suffix: "flac".to_string(),
            duration: 450,
            bit_rate: 900,
            has_cover_art: true,
            created_at: created(),
        }
    }

    fn store() -> InMemoryDataStore {
        let catalog = Catalog::new();
        catalog.put_music_folder(MusicFolder {
            id: "2".to_string(),
            name: "Vinyl Rips".to_string(),
            path: "/vinyl".to_string(),
        });
        catalog.put_music_folder(MusicFolder {
            id: "1".to_string(),
            name: "Music".to_string(),
            path: "/music".to_string(),
        });
        catalog.put_artist(Artist {
            id: "ar-1".to_string(),
            name: "Miles Davis".to_string(),
            sort_name: "Davis, Miles".to_string(),
            order_name: "miles davis".to_string(),
            album_count: 2,
        });
        catalog.put_artist(Artist {
            id: "ar-2".to_string(),
            name: "The Bad Plus".to_string(),
            sort_name: String::new(),
            order_name: String::new(),
            album_count: 0,
        });
        catalog.put_album(album("al-2", "ar-1", "Bitches Brew", Some(1970)));
        catalog.put_album(album("al-1", "ar-1", "Kind of Blue", Some(1959)));
        catalog.put_audio_file(audio_file("af-3", "al-1", 2, 1));
        catalog.put_audio_file(audio_file("af-2", "al-1", 1, 2));
        catalog.put_audio_file(audio_file("af-1", "al-1", 1, 1));
        catalog.put_genre(Genre {
            id: "g-1".to_string(),
            name: "Jazz".to_string(),
            song_count: 3,
            album_count: 2,
        });
        catalog.put_genre(Genre {
            id: "g-2".to_string(),
            name: " ".to_string(),
            song_count: 1,
            album_count: 1,
        });
        catalog.put_annotation(
            "u1",
            Kind::Album,
            "al-1",
            Annotation {
                play_count: 4,
                rating: 5,
                ..Annotation::ABSENT
            },
        );
        catalog.put_annotation(
            "u1",
            Kind::Album,
            "al-2",
            Annotation {
                play_count: 1,
                ..Annotation::ABSENT
            },
        );
        catalog.put_annotation(
            "u1",
            Kind::AudioFile,
            "af-2",
            Annotation {
                play_count: 9,
                starred_at: Some(created()),
                ..Annotation::ABSENT
            },
        );
        catalog.set_property(PROP_LAST_SCAN, "1700000000000");

        InMemoryDataStore::new(
            Arc::new(catalog),
            ArtistIndexRule::new(GROUPS, true, vec!["The".to_string()]),
        )
    }

    #[tokio::test]
    async fn test_storage_ordering() {
        let store = store();
        let folders = store.music_folder().get_all().await.unwrap();
        assert_eq!(folders[0].name, "Music");

        let albums = store.album().get_by_artist_id("ar-1").await.unwrap();
        let names: Vec<&str> = albums.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Kind of Blue", "Bitches Brew"]);

        let tracks = store.audio_file().get_by_album_id("al-1").await.unwrap();
        let ids: Vec<&str> = tracks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["af-1", "af-2", "af-3"]);
    }

    #[tokio::test]
    async fn test_annotation_map_skips_missing_ids() {
        let store = store();
        let ids = vec!["af-1".to_string(), "af-2".to_string()];
        let map = store
            .annotation()
            .get_map("u1", Kind::AudioFile, &ids)
            .await
            .unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["af-2"].play_count, 9);

        // 同一 id 不同类型的注解互不影响
        let map = store
            .annotation()
            .get_map("u1", Kind::Album, &ids)
            .await
            .unwrap();
        assert!(map.is_empty());

        let ann = store.annotation().get("u2", Kind::Album, "al-1").await.unwrap();
        assert!(ann.is_none());
    }

    #[tokio::test]
    async fn test_property_default_get() {
        let store = store();
        let value = store
            .property()
            .default_get(PROP_LAST_SCAN, "-1")
            .await
            .unwrap();
        assert_eq!(value, "1700000000000");
        let value = store.property().default_get("Missing", "-1").await.unwrap();
        assert_eq!(value, "-1");
    }

    #[tokio::test]
    async fn test_artist_index_from_storage() {
        let indexes = store().artist().get_index().await.unwrap();
        let ids: Vec<&str> = indexes.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["B", "D"]);
    }

    #[tokio::test]
    async fn test_browser_over_in_memory_store() {
        let browser = Browser::new(Arc::new(store()));
        let ctx = AppContext::new("u1");

        assert_eq!(browser.resolve(&ctx, "ar-1").await, DirectoryKind::Artist);
        assert_eq!(browser.resolve(&ctx, "al-1").await, DirectoryKind::Album);
        assert_eq!(browser.resolve(&ctx, "af-1").await, DirectoryKind::NotFound);

        let artist_dir = browser.directory(&ctx, "ar-1").await.unwrap();
        assert_eq!(artist_dir.play_count, 5);
        assert_eq!(artist_dir.entries[0].title, "Kind of Blue");

        let album_dir = browser.directory(&ctx, "al-1").await.unwrap();
        assert_eq!(album_dir.play_count, 4);
        assert_eq!(album_dir.user_rating, 5);
        assert_eq!(album_dir.entries.len(), 3);
        assert_eq!(album_dir.entries[1].play_count, 9);
        assert!(album_dir.entries[1].content_type.starts_with("audio/"));
        assert!(album_dir.entries[1].starred.is_some());

        let song = browser.get_song(&ctx, "af-2").await.unwrap();
        assert_eq!(song, album_dir.entries[1]);

        let genres = browser.get_genres(&ctx).await.unwrap();
        let names: Vec<&str> = genres.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["<Empty>", "Jazz"]);

        let fresh = browser.indexes(&ctx, to_time(0)).await.unwrap();
        assert!(fresh.indexes.is_some());
        let unchanged = browser
            .indexes(&ctx, fresh.last_modified)
            .await
            .unwrap();
        assert!(unchanged.indexes.is_none());
        assert_eq!(unchanged.last_modified, fresh.last_modified);
    }
}
