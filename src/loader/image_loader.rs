// src/loader/image_loader.rs
use crate::error::LoadError;
use macroquad::texture::Image;
use std::path::Path;

/// Read and decode a level image. The format is sniffed from the bytes.
pub fn decode_map_file<P: AsRef<Path>>(path: P) -> Result<Image, LoadError> {
    let p = path.as_ref();
    let bytes = std::fs::read(p).map_err(|source| LoadError::Io {
        path: p.to_path_buf(),
        source,
    })?;
    let image = Image::from_file_with_format(&bytes, None).map_err(|source| LoadError::Decode {
        path: p.to_path_buf(),
        source,
    })?;

    if image.width() == 0 || image.height() == 0 {
        return Err(LoadError::EmptyImage {
            path: Some(p.to_path_buf()),
        });
    }
    Ok(image)
}
