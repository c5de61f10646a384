//! Menu items, selection, and the OLED preview window.

use core::fmt::Write;

use heapless::{String, Vec};
use log::debug;
use oled_bitmap::PixelGrid;

use crate::{EditorError, font::MenuFont};

pub const MAX_MENU_ITEMS: usize = 32;
pub const MENU_LABEL_BYTES: usize = 48;
/// Rows visible on the OLED preview at once.
pub const PREVIEW_ROWS: usize = 3;
/// Icons are imported at this square size.
pub const ICON_SIZE: usize = 18;

pub type MenuLabel = String<MENU_LABEL_BYTES>;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MenuItem {
    pub label: MenuLabel,
    pub font: MenuFont,
    pub icon: Option<PixelGrid>,
}

impl MenuItem {
    pub fn new(label: &str) -> Result<Self, EditorError> {
        Ok(Self {
            label: bounded_label(label)?,
            font: MenuFont::default(),
            icon: None,
        })
    }
}

fn bounded_label(label: &str) -> Result<MenuLabel, EditorError> {
    let mut out = MenuLabel::new();
    out.push_str(label).map_err(|_| EditorError::CapacityExceeded)?;
    Ok(out)
}

/// One row of the preview window.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PreviewSlot {
    pub item: usize,
    /// The centre row carries the selection outline.
    pub highlighted: bool,
}

/// Ordered menu with a circular cursor.
#[derive(Clone, Debug, Default)]
pub struct Menu {
    items: Vec<MenuItem, MAX_MENU_ITEMS>,
    selected: usize,
}

impl Menu {
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            selected: 0,
        }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&MenuItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&MenuItem> {
        self.items.get(self.selected)
    }

    /// Appends an item; `None` gets `Menu Item <n>`. Returns its index.
    pub fn add_item(&mut self, label: Option<&str>) -> Result<usize, EditorError> {
        let item = match label {
            Some(label) => MenuItem::new(label)?,
            None => {
                let mut label = MenuLabel::new();
                write!(label, "Menu Item {}", self.items.len() + 1)
                    .map_err(|_| EditorError::CapacityExceeded)?;
                MenuItem {
                    label,
                    font: MenuFont::default(),
                    icon: None,
                }
            }
        };

        debug!("menu: add item index={} label={:?}", self.items.len(), item.label.as_str());
        self.items
            .push(item)
            .map_err(|_| EditorError::CapacityExceeded)?;
        Ok(self.items.len() - 1)
    }

    /// Removes an item, clamping the cursor to the remaining items.
    pub fn remove_item(&mut self, index: usize) -> Result<MenuItem, EditorError> {
        if index >= self.items.len() {
            return Err(EditorError::NoSuchItem(index));
        }

        let removed = self.items.remove(index);
        self.selected = self.selected.min(self.items.len().saturating_sub(1));
        debug!(
            "menu: remove item index={} remaining={} selected={}",
            index,
            self.items.len(),
            self.selected
        );
        Ok(removed)
    }

    pub fn rename(&mut self, index: usize, label: &str) -> Result<(), EditorError> {
        let label = bounded_label(label)?;
        self.item_mut(index)?.label = label;
        Ok(())
    }

    pub fn set_font(&mut self, index: usize, font: MenuFont) -> Result<(), EditorError> {
        self.item_mut(index)?.font = font;
        Ok(())
    }

    /// Thresholds an RGBA8 image into the item's icon.
    pub fn set_icon_from_rgba(
        &mut self,
        index: usize,
        rgba: &[u8],
        width: usize,
        height: usize,
    ) -> Result<(), EditorError> {
        let item = self.item_mut(index)?;
        let mut icon = PixelGrid::new(ICON_SIZE, ICON_SIZE);
        icon.import_rgba(rgba, width, height)?;
        item.icon = Some(icon);
        Ok(())
    }

    pub fn clear_icon(&mut self, index: usize) -> Result<(), EditorError> {
        self.item_mut(index)?.icon = None;
        Ok(())
    }

    pub fn select(&mut self, index: usize) -> Result<(), EditorError> {
        if index >= self.items.len() {
            return Err(EditorError::NoSuchItem(index));
        }
        self.selected = index;
        Ok(())
    }

    /// Moves the cursor forward, wrapping to the first item.
    pub fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.items.len();
    }

    /// Moves the cursor back, wrapping to the last item.
    pub fn select_prev(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let len = self.items.len();
        self.selected = (self.selected + len - 1) % len;
    }

    /// Items shown on the preview, top to bottom.
    ///
    /// Longer menus centre the cursor; menus that fit start at the first
    /// item and repeat to fill the window.
    pub fn preview_window(&self) -> Vec<PreviewSlot, PREVIEW_ROWS> {
        let mut window = Vec::new();
        let len = self.items.len();
        if len == 0 {
            return window;
        }

        let centre = PREVIEW_ROWS / 2;
        let start = if len <= PREVIEW_ROWS {
            0
        } else {
            (self.selected + len - centre) % len
        };

        for row in 0..PREVIEW_ROWS {
            let _ = window.push(PreviewSlot {
                item: (start + row) % len,
                highlighted: row == centre,
            });
        }
        window
    }

    fn item_mut(&mut self, index: usize) -> Result<&mut MenuItem, EditorError> {
        self.items
            .get_mut(index)
            .ok_or(EditorError::NoSuchItem(index))
    }
}
