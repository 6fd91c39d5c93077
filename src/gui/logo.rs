// Team logo lookup for the event rows.
use iced::widget::image;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Side of the square bounding box logos are scaled into, in logical pixels.
/// The image widget keeps the aspect ratio (ContentFit::Contain).
pub const LOGO_BOX: f32 = 100.0;

/// `logos/<team-with-spaces-as-dashes>.png` under the data directory.
pub fn logo_path(data_dir: &Path, team: &str) -> PathBuf {
    data_dir
        .join("logos")
        .join(format!("{}.png", team.replace(' ', "-")))
}

/// Builds one image handle per team whose logo file exists. Teams without a
/// logo are warned about once here and rendered with the placeholder; a
/// missing file never aborts a refresh.
pub fn load_logo_handles(data_dir: &Path, teams: &[String]) -> HashMap<String, image::Handle> {
    let mut handles = HashMap::new();
    for team in teams {
        let path = logo_path(data_dir, team);
        if path.is_file() {
            handles.insert(team.clone(), image::Handle::from_path(path));
        } else {
            log::warn!("no logo for {team:?} at {}", path.display());
        }
    }
    handles
}

/// Flat gray square used when a team has no logo file.
pub fn placeholder_handle() -> image::Handle {
    const SIDE: u32 = 16;
    let mut pixels = Vec::with_capacity((SIDE * SIDE * 4) as usize);
    for _ in 0..SIDE * SIDE {
        pixels.extend_from_slice(&[0x7f, 0x7f, 0x7f, 0xff]);
    }
    image::Handle::from_rgba(SIDE, SIDE, pixels)
}
