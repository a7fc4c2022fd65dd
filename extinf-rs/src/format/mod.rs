mod entry;
mod playlist;
pub use entry::*;
pub use playlist::*;

pub mod directives {
    pub const EXTM3U: &str = "#EXTM3U";
    pub const EXTINF: &str = "#EXTINF";
    pub const EXTINF_LEN: usize = EXTINF.len();

    /// First bytes of every playlist file, `#EXTM3U` in ASCII
    pub const SIGNATURE: [u8; 7] = [0x23, 0x45, 0x58, 0x54, 0x4D, 0x33, 0x55];
}
