use std::path::{Path, PathBuf};

use macroquad::prelude::{FilterMode, Image, Texture2D, load_image};

use crate::error::ClientError;
use crate::theme::{ColorKey, SpriteConfig};

/// Make sure the assets directory exists, creating it if needed.
pub fn ensure_assets_dir(dir: &str) -> Result<PathBuf, ClientError> {
    let path = PathBuf::from(dir);
    if !path.is_dir() {
        std::fs::create_dir_all(&path).map_err(|source| ClientError::AssetsDir {
            path: path.clone(),
            source,
        })?;
        tracing::info!("Created assets directory {}", path.display());
    }
    Ok(path)
}

/// Load a sprite from `assets_dir`, applying its color key.
pub async fn load_sprite(assets_dir: &Path, sprite: &SpriteConfig) -> Result<Texture2D, ClientError> {
    let path = assets_dir.join(&sprite.file);
    let path_str = path.to_string_lossy();
    let mut image = load_image(&path_str)
        .await
        .map_err(|e| ClientError::Asset {
            name: sprite.file.clone(),
            message: e.to_string(),
        })?;

    if let Some(key) = sprite.colorkey {
        let cleared = apply_colorkey(&mut image, key);
        tracing::debug!(file = %sprite.file, cleared, "Applied color key");
    }

    let texture = Texture2D::from_image(&image);
    texture.set_filter(FilterMode::Nearest);
    tracing::info!(
        "Loaded sprite {} ({}x{})",
        sprite.file,
        image.width(),
        image.height()
    );
    Ok(texture)
}

/// Make every pixel matching the key color fully transparent. Returns the
/// number of pixels cleared.
pub fn apply_colorkey(image: &mut Image, key: ColorKey) -> usize {
    let target = match key {
        ColorKey::Rgb(rgb) => [rgb.r, rgb.g, rgb.b],
        ColorKey::TopLeft => match image.bytes.get(..3) {
            Some(px) => [px[0], px[1], px[2]],
            None => return 0,
        },
    };

    let mut cleared = 0;
    for px in image.bytes.chunks_exact_mut(4) {
        if px[..3] == target {
            px[3] = 0;
            cleared += 1;
        }
    }
    cleared
}
