//! Backend-to-UI events.

use directory_core::DirectoryError;
use shared::domain::Doctor;

pub enum UiEvent {
    RosterLoaded(Vec<Doctor>),
    RosterFailed(DirectoryError),
    PhotoLoaded { url: String, image: PhotoImage },
    PhotoFailed { url: String, reason: String },
}

/// Decoded RGBA thumbnail ready for upload as a texture.
#[derive(Debug, Clone)]
pub struct PhotoImage {
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
}

pub const PHOTO_THUMBNAIL_PX: u32 = 96;

pub fn decode_photo(bytes: &[u8]) -> Result<PhotoImage, String> {
    let dynamic = image::load_from_memory(bytes).map_err(|err| err.to_string())?;
    let resized = dynamic
        .thumbnail(PHOTO_THUMBNAIL_PX, PHOTO_THUMBNAIL_PX)
        .to_rgba8();
    let width = resized.width() as usize;
    let height = resized.height() as usize;
    Ok(PhotoImage {
        width,
        height,
        rgba: resized.into_raw(),
    })
}
