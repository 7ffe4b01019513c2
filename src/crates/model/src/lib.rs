pub mod album;
pub mod artist;
pub mod audio_file;
pub mod genre;
pub mod kind;
pub mod music_folder;
pub mod property;
pub mod shared;

