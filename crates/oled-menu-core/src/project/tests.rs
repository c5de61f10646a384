use super::*;
use crate::{WordWidth, font::MenuFont};

struct ScriptedInput<'a> {
    events: &'a [InputEvent],
    cursor: usize,
}

impl<'a> ScriptedInput<'a> {
    const fn new(events: &'a [InputEvent]) -> Self {
        Self { events, cursor: 0 }
    }
}

impl InputProvider for ScriptedInput<'_> {
    type Error = ();

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        let Some(event) = self.events.get(self.cursor).copied() else {
            return Ok(None);
        };
        self.cursor = self.cursor.saturating_add(1);
        Ok(Some(event))
    }
}

fn small_config() -> EditorConfig {
    EditorConfig {
        screen: ScreenDefaults {
            width: 10,
            height: 2,
            ..ScreenDefaults::default()
        },
        export: ExportConfig::default(),
    }
}

#[test]
fn demo_project_matches_seed_content() {
    let project = Project::demo(EditorConfig::default()).unwrap();

    let labels: alloc::vec::Vec<&str> = project
        .menu()
        .items()
        .iter()
        .map(|item| item.label.as_str())
        .collect();
    assert_eq!(labels, ["Big Knob", "Park Sensor", "Turbo Gauge"]);

    let screen = &project.screens().screens()[0];
    assert_eq!(screen.name, "Screen1");
    assert_eq!((screen.grid.width(), screen.grid.height()), (128, 64));
}

#[test]
fn scripted_input_walks_menu_circularly() {
    let mut project = Project::demo(EditorConfig::default()).unwrap();
    let events = [
        InputEvent::Prev,
        InputEvent::Prev,
        InputEvent::Next,
        InputEvent::Next,
        InputEvent::Next,
    ];
    let mut input = ScriptedInput::new(&events);

    assert_eq!(project.process_inputs(&mut input), Ok(5));
    assert_eq!(project.menu().selected(), 0);

    project.apply_input(InputEvent::Prev);
    assert_eq!(project.menu().selected(), 2);
}

#[test]
fn listing_matches_exported_layout() {
    let mut project = Project::new(small_config());
    project.menu_mut().add_item(Some("Big Knob")).unwrap();
    project.menu_mut().add_item(Some(r#"Say "hi""#)).unwrap();
    project.screens_mut().add_screen().unwrap();
    assert_eq!(project.screens_mut().toggle_pixel(0, 0), Some(true));
    assert_eq!(project.screens_mut().toggle_pixel(9, 1), Some(true));

    assert_eq!(
        project.listing(),
        "// OLED Menu Code (u8g2)\n\
         const char* menuItems[] = {\n  \
         \"Big Knob\",\n  \
         \"Say \\\"hi\\\"\",\n\
         };\n\
         const uint8_t menuLength = 2;\n\
         // Screen: Screen1\n\
         uint8_t Screen1[4] = {128,0,0,64};\n\
         \n\
         // Add your menu and screen rendering logic here using u8g2\n"
    );
}

#[test]
fn export_width_applies_to_every_screen() {
    let mut project = Project::new(small_config());
    project.screens_mut().add_screen().unwrap();
    project.screens_mut().add_screen().unwrap();
    project.screens_mut().rename(1, "Turbo Gauge!").unwrap();
    project.screens_mut().screen_mut(1).unwrap().grid.fill(true);
    project.set_export_config(ExportConfig {
        word_width: WordWidth::U16,
        ..ExportConfig::default()
    });

    assert_eq!(
        project.source(),
        "// Screen: Screen1\n\
         uint16_t Screen1[2] = {0,0};\n\
         // Screen: Turbo Gauge!\n\
         uint16_t Turbo_Gauge_[2] = {65472,65472};\n"
    );
    assert_eq!(
        project.header(),
        "extern uint16_t Screen1[2];\nextern uint16_t Turbo_Gauge_[2];\n"
    );
}

#[test]
fn deleting_every_screen_leaves_export_empty() {
    let mut project = Project::demo(EditorConfig::default()).unwrap();
    project.screens_mut().remove_screen(0).unwrap();

    assert!(project.source().is_empty());
    assert!(project.header().is_empty());
    assert!(!project.screens_mut().clear());
}

#[test]
fn exported_words_unpack_to_edited_screen() {
    let mut project = Project::new(EditorConfig::default());
    project.screens_mut().add_screen().unwrap();
    for (x, y) in [(0, 0), (127, 0), (64, 32), (5, 63)] {
        project.screens_mut().toggle_pixel(x, y);
    }
    project.screens_mut().set_font(MenuFont::HelvB12);

    let screen = project.screens().selected_screen().unwrap();
    let words = oled_bitmap::pack(&screen.grid, WordWidth::U8);
    assert_eq!(words.len(), 64 * 16);
    assert_eq!(
        oled_bitmap::unpack(&words, WordWidth::U8, 64, 128).unwrap(),
        screen.grid
    );
    assert_eq!(screen.font, MenuFont::HelvB12);
}
