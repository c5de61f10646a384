use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::info;
use oled_menu_core::project::Project;

pub const LISTING_FILE: &str = "export.txt";
pub const SOURCE_FILE: &str = "screens.c";
pub const HEADER_FILE: &str = "screens.h";

/// Writes the combined listing, `screens.c` and `screens.h` into `dir`.
pub fn write_all(project: &Project, dir: &Path) -> io::Result<[PathBuf; 3]> {
    fs::create_dir_all(dir)?;

    let contents = [project.listing(), project.source(), project.header()];
    let paths = [LISTING_FILE, SOURCE_FILE, HEADER_FILE].map(|name| dir.join(name));

    for (path, contents) in paths.iter().zip(&contents) {
        fs::write(path, contents)?;
        info!("export: wrote {} ({} bytes)", path.display(), contents.len());
    }

    Ok(paths)
}

#[cfg(test)]
mod tests {
    use oled_menu_core::project::EditorConfig;

    use super::*;

    #[test]
    fn demo_export_lands_in_three_files() {
        let dir = std::env::temp_dir().join(format!("oled-menu-output-{}", std::process::id()));
        let project = Project::demo(EditorConfig::default()).unwrap();

        let paths = write_all(&project, &dir).unwrap();

        let header = fs::read_to_string(&paths[2]).unwrap();
        assert_eq!(header, "extern uint8_t Screen1[1024];\n");
        let source = fs::read_to_string(&paths[1]).unwrap();
        assert!(source.starts_with("// Screen: Screen1\nuint8_t Screen1[1024] = {0,0,"));
        let listing = fs::read_to_string(&paths[0]).unwrap();
        assert!(listing.contains("  \"Park Sensor\",\n"));
        assert!(listing.contains("const uint8_t menuLength = 3;\n"));

        fs::remove_dir_all(&dir).unwrap();
    }
}
