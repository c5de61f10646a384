//! Command-line front end: builds a menu project and writes its C export.

use std::{error::Error, fmt};

use clap::Parser;
use log::{LevelFilter, error, info, warn};
use oled_menu_core::{
    export::ExportConfig,
    project::{EditorConfig, Project},
    screen::ScreenDefaults,
};

use args::Args;

#[path = "main/args.rs"]
mod args;
#[path = "main/import.rs"]
mod import;
#[path = "main/output.rs"]
mod output;

#[derive(Debug)]
enum CliError {
    UnknownScreen(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownScreen(name) => write!(f, "no screen named {name:?} to import into"),
        }
    }
}

impl Error for CliError {}

fn editor_config(args: &Args) -> EditorConfig {
    EditorConfig {
        screen: ScreenDefaults {
            data_type: args.data_type,
            ..ScreenDefaults::default()
        },
        export: ExportConfig {
            word_width: args.data_type,
            ..ExportConfig::default()
        },
    }
}

fn build_project(args: &Args) -> Result<Project, Box<dyn Error>> {
    let config = editor_config(args);
    let mut project = if args.wants_demo() {
        info!("project: no menu or screens given, using demo content");
        Project::demo(config)?
    } else {
        let mut project = Project::new(config);
        for label in &args.menu {
            project.menu_mut().add_item(Some(label.as_str()))?;
        }

        let defaults = config.screen;
        for spec in &args.screens {
            let (width, height) = spec.size.unwrap_or((defaults.width, defaults.height));
            project.screens_mut().insert_screen(&spec.name, width, height)?;
        }
        project
    };

    for spec in &args.imports {
        let screens = project.screens_mut();
        let index = screens
            .position(&spec.screen)
            .ok_or_else(|| CliError::UnknownScreen(spec.screen.clone()))?;
        screens.select(index)?;

        let Some((width, height)) = screens
            .selected_screen()
            .map(|screen| (screen.grid.width(), screen.grid.height()))
        else {
            continue;
        };
        if width == 0 || height == 0 {
            warn!("import: screen {:?} has no pixels, skipping", spec.screen);
            continue;
        }

        let rgba = import::load_rgba(&spec.path, width as u32, height as u32)?;
        screens.import_rgba(&rgba, width, height)?;
        info!(
            "import: {} -> {:?} lit={}",
            spec.path.display(),
            spec.screen,
            screens
                .selected_screen()
                .map_or(0, |screen| screen.grid.lit_count())
        );
    }

    Ok(project)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let project = build_project(&args).inspect_err(|err| error!("{err}"))?;
    let paths = output::write_all(&project, &args.out_dir)?;
    info!(
        "done: {} menu items, {} screens, {} files",
        project.menu().len(),
        project.screens().len(),
        paths.len()
    );
    Ok(())
}
