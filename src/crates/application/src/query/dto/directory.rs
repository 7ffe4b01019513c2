use chrono::NaiveDateTime;
use model::album::Album;
use model::artist::Artist;
use model::audio_file::AudioFile;
use model::shared::{Annotation, AnnotationMap};
use serde::Serialize;

const MEDIA_TYPE_MUSIC: &str = "music";

/// 目录中的单个条目（专辑或歌曲），合并了目录数据和当前用户的注解
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: String,
    pub title: String,
    pub is_dir: bool,
    pub parent: String,
    pub album: String,
    pub year: Option<i32>,
    pub artist: String,
    pub genre: String,
    pub cover_art: String,
    pub starred: Option<NaiveDateTime>,
    pub track: i32,
    pub duration: i64,
    pub size: i64,
    pub suffix: String,
    pub bit_rate: i32,
    pub content_type: String,
    pub path: String,
    pub play_count: i32,
    pub disc_number: i32,
    pub created: NaiveDateTime,
    pub album_id: String,
    pub artist_id: String,
    #[serde(rename = "type")]
    pub media_type: String,
    pub user_rating: i32,
    pub song_count: i32,
}

impl Entry {
    pub fn from_album(album: &Album, ann: &Annotation) -> Self {
        Entry {
            id: album.id.clone(),
            title: album.name.clone(),
            is_dir: true,
            parent: album.artist_id.clone(),
            album: album.name.clone(),
            year: album.year,
            artist: album.artist.clone(),
            genre: album.genre.clone(),
            cover_art: album.cover_art_id.clone(),
            starred: ann.starred_at,
            duration: album.duration,
            play_count: ann.play_count,
            created: album.created_at,
            album_id: album.id.clone(),
            artist_id: album.artist_id.clone(),
            media_type: MEDIA_TYPE_MUSIC.to_string(),
            user_rating: ann.rating,
            song_count: album.song_count,
            ..Default::default()
        }
    }

    pub fn from_audio_file(audio_file: &AudioFile, ann: &Annotation) -> Self {
        // 有内嵌封面时，封面 id 与歌曲 id 相同
        let cover_art = if audio_file.has_cover_art {
            audio_file.id.clone()
        } else {
            String::new()
        };
        Entry {
            id: audio_file.id.clone(),
            title: audio_file.title.clone(),
            is_dir: false,
            parent: audio_file.album_id.clone(),
            album: audio_file.album.clone(),
            year: audio_file.year,
            artist: audio_file.artist.clone(),
            genre: audio_file.genre.clone(),
            cover_art,
            starred: ann.starred_at,
            track: audio_file.track_number,
            duration: audio_file.duration,
            size: audio_file.size,
            suffix: audio_file.suffix.clone(),
            bit_rate: audio_file.bit_rate,
            content_type: content_type(&audio_file.suffix),
            path: audio_file.path.clone(),
            play_count: ann.play_count,
            disc_number: audio_file.disc_number,
            created: audio_file.created_at,
            album_id: audio_file.album_id.clone(),
            artist_id: audio_file.artist_id.clone(),
            media_type: MEDIA_TYPE_MUSIC.to_string(),
            user_rating: ann.rating,
            song_count: 0,
        }
    }
}

fn content_type(suffix: &str) -> String {
    mime_guess::from_ext(suffix)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

/// 以目录形式展示的艺术家或专辑
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryInfo {
    pub id: String,
    pub name: String,
    pub entries: Vec<Entry>,
    pub parent: Option<String>,
    pub starred: Option<NaiveDateTime>,
    pub play_count: i64,
    pub user_rating: i32,
    pub album_count: i32,
    pub cover_art: Option<String>,
    pub artist: Option<String>,
    pub artist_id: Option<String>,
    pub song_count: i32,
    pub duration: i64,
    pub created: Option<NaiveDateTime>,
    pub year: Option<i32>,
    pub genre: Option<String>,
}

impl DirectoryInfo {
    /// 艺术家目录：每张专辑一个条目，播放次数为各专辑播放次数之和。
    /// parent 和 artist_id 不填
    pub fn for_artist(artist: &Artist, albums: &[Album], album_anns: &AnnotationMap) -> Self {
        let entries: Vec<Entry> = albums
            .iter()
            .map(|album| {
                let ann = album_anns.get(&album.id).unwrap_or(&Annotation::ABSENT);
                Entry::from_album(album, ann)
            })
            .collect();
        let play_count = entries.iter().map(|e| i64::from(e.play_count)).sum();

        DirectoryInfo {
            id: artist.id.clone(),
            name: artist.name.clone(),
            album_count: artist.album_count,
            play_count,
            entries,
            ..Default::default()
        }
    }

    pub fn for_album(
        album: &Album,
        album_ann: &Annotation,
        audio_files: &[AudioFile],
        track_anns: &AnnotationMap,
    ) -> Self {
        let entries = audio_files
            .iter()
            .map(|af| {
                let ann = track_anns.get(&af.id).unwrap_or(&Annotation::ABSENT);
                Entry::from_audio_file(af, ann)
            })
            .collect();

        DirectoryInfo {
            id: album.id.clone(),
            name: album.name.clone(),
            entries,
            parent: Some(album.artist_id.clone()),
            starred: album_ann.starred_at,
            play_count: i64::from(album_ann.play_count),
            user_rating: album_ann.rating,
            album_count: 0,
            cover_art: Some(album.cover_art_id.clone()),
            artist: Some(album.artist.clone()),
            artist_id: Some(album.artist_id.clone()),
            song_count: album.song_count,
            duration: album.duration,
            created: Some(album.created_at),
            year: album.year,
            genre: Some(album.genre.clone()),
        }
    }
}
