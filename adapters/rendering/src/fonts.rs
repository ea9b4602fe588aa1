//! Search for a usable TrueType font among common system locations.

use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

/// Point size used for every label.
pub const FONT_SIZE: u16 = 24;

/// Font files tried in order until one loads.
///
/// Bare file names are resolved against the working directory.
pub const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/ubuntu/Ubuntu-R.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    "/usr/share/fonts/truetype/liberation2/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/droid/DroidSans.ttf",
    "/usr/share/fonts/google-droid/DroidSans.ttf",
    "FreeSans.ttf",
    "DejaVuSans.ttf",
    "LiberationSans-Regular.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-mono-fonts/DejaVuSansMono.ttf",
    "/usr/share/fonts/dejavu-serif-fonts/DejaVuSerif.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "arial.ttf",
];

/// Returns the first candidate the loader accepts, together with its path.
///
/// Failures are logged at debug level and the search moves on. When nothing
/// loads a warning is logged and `None` is returned.
pub fn first_loadable<P, T, E, F>(candidates: &[P], mut load: F) -> Option<(PathBuf, T)>
where
    P: AsRef<Path>,
    E: Display,
    F: FnMut(&Path) -> Result<T, E>,
{
    for candidate in candidates {
        let path = candidate.as_ref();
        match load(path) {
            Ok(font) => {
                log::info!("Loaded font {}", path.display());
                return Some((path.to_path_buf(), font));
            }
            Err(error) => log::debug!("Skipping font {}: {error}", path.display()),
        }
    }

    log::warn!("Could not load any font, text will not be drawn");
    None
}
