//! Editor state: the menu, the screens, and export settings.

use core::fmt::{self, Write};

use alloc::string::String;
use log::{debug, info};

use crate::{
    EditorError,
    export::{self, ExportConfig},
    input::{InputEvent, InputProvider},
    menu::Menu,
    screen::{ScreenDefaults, ScreenSet},
};

const DEMO_MENU: [&str; 3] = ["Big Knob", "Park Sensor", "Turbo Gauge"];
const DEMO_SCREEN: &str = "Screen1";

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct EditorConfig {
    pub screen: ScreenDefaults,
    pub export: ExportConfig,
}

/// Everything the editor works on, owned by the caller.
#[derive(Clone, Debug, Default)]
pub struct Project {
    menu: Menu,
    screens: ScreenSet,
    export: ExportConfig,
}

impl Project {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            menu: Menu::new(),
            screens: ScreenSet::new(config.screen),
            export: config.export,
        }
    }

    /// Three sample menu items and one blank screen.
    pub fn demo(config: EditorConfig) -> Result<Self, EditorError> {
        let mut project = Self::new(config);
        for label in DEMO_MENU {
            project.menu.add_item(Some(label))?;
        }
        let defaults = project.screens.defaults();
        project
            .screens
            .insert_screen(DEMO_SCREEN, defaults.width, defaults.height)?;
        info!(
            "project: demo seeded items={} screens={}",
            project.menu.len(),
            project.screens.len()
        );
        Ok(project)
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn menu_mut(&mut self) -> &mut Menu {
        &mut self.menu
    }

    pub fn screens(&self) -> &ScreenSet {
        &self.screens
    }

    pub fn screens_mut(&mut self) -> &mut ScreenSet {
        &mut self.screens
    }

    pub fn export_config(&self) -> ExportConfig {
        self.export
    }

    pub fn set_export_config(&mut self, export: ExportConfig) {
        self.export = export;
    }

    pub fn apply_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Prev => self.menu.select_prev(),
            InputEvent::Next => self.menu.select_next(),
        }
        debug!(
            "project: input event={:?} selected={}/{}",
            event,
            self.menu.selected(),
            self.menu.len()
        );
    }

    /// Drains pending events. Returns how many were applied.
    pub fn process_inputs<IN: InputProvider>(
        &mut self,
        input: &mut IN,
    ) -> Result<usize, IN::Error> {
        let mut applied = 0usize;
        while let Some(event) = input.poll_event()? {
            self.apply_input(event);
            applied = applied.saturating_add(1);
        }
        Ok(applied)
    }

    pub fn write_listing<W: Write>(&self, out: &mut W) -> fmt::Result {
        export::write_listing(out, self.menu.items(), self.screens.screens(), &self.export)
    }

    pub fn write_source<W: Write>(&self, out: &mut W) -> fmt::Result {
        export::write_source(out, self.screens.screens(), &self.export)
    }

    pub fn write_header<W: Write>(&self, out: &mut W) -> fmt::Result {
        export::write_header(out, self.screens.screens(), &self.export)
    }

    pub fn listing(&self) -> String {
        let mut out = String::new();
        let _ = self.write_listing(&mut out);
        out
    }

    pub fn source(&self) -> String {
        let mut out = String::new();
        let _ = self.write_source(&mut out);
        out
    }

    pub fn header(&self) -> String {
        let mut out = String::new();
        let _ = self.write_header(&mut out);
        out
    }
}

#[cfg(test)]
mod tests;
