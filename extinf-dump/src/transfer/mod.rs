mod playlist_load;
pub use playlist_load::*;
