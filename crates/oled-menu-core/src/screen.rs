//! Bitmap screens and the screen editor.

use core::fmt::Write;

use heapless::{String, Vec};
use log::{debug, info};
use oled_bitmap::{PixelGrid, WordWidth};

use crate::{EditorError, font::MenuFont};

pub const MAX_SCREENS: usize = 16;
pub const SCREEN_NAME_BYTES: usize = 32;

pub type ScreenName = String<SCREEN_NAME_BYTES>;

/// Defaults applied to newly created screens.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScreenDefaults {
    pub width: usize,
    pub height: usize,
    pub data_type: WordWidth,
    pub font: MenuFont,
}

impl Default for ScreenDefaults {
    fn default() -> Self {
        Self {
            width: 128,
            height: 64,
            data_type: WordWidth::U8,
            font: MenuFont::default(),
        }
    }
}

/// One named bitmap.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Screen {
    pub name: ScreenName,
    pub grid: PixelGrid,
    /// Word width picked in the editor for this screen.
    pub data_type: WordWidth,
    pub font: MenuFont,
}

impl Screen {
    pub fn new(name: &str, defaults: ScreenDefaults) -> Result<Self, EditorError> {
        Ok(Self {
            name: bounded_name(name)?,
            grid: PixelGrid::try_new(defaults.width, defaults.height)?,
            data_type: defaults.data_type,
            font: defaults.font,
        })
    }
}

fn bounded_name(name: &str) -> Result<ScreenName, EditorError> {
    let mut out = ScreenName::new();
    out.push_str(name).map_err(|_| EditorError::CapacityExceeded)?;
    Ok(out)
}

/// Ordered screens with one selected for editing.
///
/// Editing calls act on the selected screen and report `false` when there
/// is none.
#[derive(Clone, Debug, Default)]
pub struct ScreenSet {
    screens: Vec<Screen, MAX_SCREENS>,
    selected: usize,
    defaults: ScreenDefaults,
}

impl ScreenSet {
    pub const fn new(defaults: ScreenDefaults) -> Self {
        Self {
            screens: Vec::new(),
            selected: 0,
            defaults,
        }
    }

    pub fn screens(&self) -> &[Screen] {
        &self.screens
    }

    pub fn len(&self) -> usize {
        self.screens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_screen(&self) -> Option<&Screen> {
        self.screens.get(self.selected)
    }

    pub fn defaults(&self) -> ScreenDefaults {
        self.defaults
    }

    /// Editor-level data type and font picked up by later screens.
    pub fn set_defaults(&mut self, defaults: ScreenDefaults) {
        self.defaults = defaults;
    }

    /// Appends `Screen<n>` and selects it. Returns its index.
    pub fn add_screen(&mut self) -> Result<usize, EditorError> {
        let mut name = ScreenName::new();
        write!(name, "Screen{}", self.screens.len() + 1)
            .map_err(|_| EditorError::CapacityExceeded)?;
        let index = self.push(Screen::new(&name, self.defaults)?)?;
        self.selected = index;
        Ok(index)
    }

    /// Appends a named screen of the given size without changing selection.
    pub fn insert_screen(
        &mut self,
        name: &str,
        width: usize,
        height: usize,
    ) -> Result<usize, EditorError> {
        let defaults = ScreenDefaults {
            width,
            height,
            ..self.defaults
        };
        self.push(Screen::new(name, defaults)?)
    }

    fn push(&mut self, screen: Screen) -> Result<usize, EditorError> {
        info!(
            "screens: add name={:?} size={}x{}",
            screen.name.as_str(),
            screen.grid.width(),
            screen.grid.height()
        );
        self.screens
            .push(screen)
            .map_err(|_| EditorError::CapacityExceeded)?;
        Ok(self.screens.len() - 1)
    }

    pub fn remove_screen(&mut self, index: usize) -> Result<Screen, EditorError> {
        if index >= self.screens.len() {
            return Err(EditorError::NoSuchScreen(index));
        }

        let removed = self.screens.remove(index);
        self.selected = self.selected.min(self.screens.len().saturating_sub(1));
        debug!(
            "screens: remove index={} remaining={} selected={}",
            index,
            self.screens.len(),
            self.selected
        );
        Ok(removed)
    }

    pub fn select(&mut self, index: usize) -> Result<(), EditorError> {
        if index >= self.screens.len() {
            return Err(EditorError::NoSuchScreen(index));
        }
        self.selected = index;
        Ok(())
    }

    pub fn rename(&mut self, index: usize, name: &str) -> Result<(), EditorError> {
        let name = bounded_name(name)?;
        self.screens
            .get_mut(index)
            .ok_or(EditorError::NoSuchScreen(index))?
            .name = name;
        Ok(())
    }

    /// Returns the new pixel state, `None` when out of bounds or no screen.
    pub fn toggle_pixel(&mut self, x: usize, y: usize) -> Option<bool> {
        self.selected_mut()?.grid.toggle(x, y)
    }

    pub fn clear(&mut self) -> bool {
        let Some(screen) = self.selected_mut() else {
            return false;
        };
        screen.grid.clear();
        true
    }

    /// Thresholds an RGBA8 image onto the selected screen.
    pub fn import_rgba(
        &mut self,
        rgba: &[u8],
        width: usize,
        height: usize,
    ) -> Result<bool, EditorError> {
        let Some(screen) = self.selected_mut() else {
            return Ok(false);
        };
        screen.grid.import_rgba(rgba, width, height)?;
        Ok(true)
    }

    pub fn set_data_type(&mut self, data_type: WordWidth) -> bool {
        self.defaults.data_type = data_type;
        let Some(screen) = self.selected_mut() else {
            return false;
        };
        screen.data_type = data_type;
        true
    }

    pub fn set_font(&mut self, font: MenuFont) -> bool {
        self.defaults.font = font;
        let Some(screen) = self.selected_mut() else {
            return false;
        };
        screen.font = font;
        true
    }

    /// Index of the first screen called `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.screens.iter().position(|screen| screen.name == name)
    }

    pub fn screen_mut(&mut self, index: usize) -> Option<&mut Screen> {
        self.screens.get_mut(index)
    }

    fn selected_mut(&mut self) -> Option<&mut Screen> {
        self.screens.get_mut(self.selected)
    }
}
