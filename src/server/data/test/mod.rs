mod playlist;
mod playlist_config;
mod song;
mod user;
