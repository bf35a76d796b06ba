use std::path::{Path, PathBuf};

const MARKER: &str = "assets/hint_colours.toml";

pub fn resolve_assets_root(cli: Option<PathBuf>) -> PathBuf {
    // CLI flag, then BLACKTOOTH_ASSETS, then the nearest dir holding the marker, then CWD
    if let Some(pb) = cli {
        if pb.exists() {
            return pb;
        }
        log::warn!("assets dir {} does not exist, searching", pb.display());
    }
    if let Ok(p) = std::env::var("BLACKTOOTH_ASSETS") {
        let pb = PathBuf::from(p);
        if pb.exists() {
            return pb;
        }
    }
    let mut bases: Vec<PathBuf> = Vec::new();
    bases.extend(std::env::current_dir().ok());
    bases.extend(
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf)),
    );
    bases.push(PathBuf::from(env!("CARGO_MANIFEST_DIR")));
    if let Some(found) = bases.iter().find_map(|b| find_upwards(b, 5)) {
        return found;
    }
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// First of `base` and its ancestors (at most `depth` levels) holding the marker.
fn find_upwards(base: &Path, depth: usize) -> Option<PathBuf> {
    base.ancestors()
        .take(depth)
        .find(|dir| dir.join(MARKER).exists())
        .map(Path::to_path_buf)
}

pub fn hint_colours_path(root: &Path) -> PathBuf {
    root.join(MARKER)
}

pub fn atlas_overrides_path(root: &Path) -> PathBuf {
    root.join("assets/atlas_overrides.toml")
}

pub fn campaigns_dir(root: &Path) -> PathBuf {
    root.join("assets/campaigns")
}
