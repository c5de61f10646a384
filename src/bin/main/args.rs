use std::{path::PathBuf, str::FromStr};

use clap::Parser;
use oled_bitmap::WordWidth;

/// Design OLED menus and bitmap screens and export them as C arrays.
#[derive(Debug, Parser)]
#[command(name = "oled-menu", version)]
pub struct Args {
    /// Menu item label, in order. Repeatable.
    #[arg(long = "menu", value_name = "LABEL")]
    pub menu: Vec<String>,

    /// Screen to create, optionally sized: `NAME` or `NAME=WxH`. Repeatable.
    #[arg(long = "screen", value_name = "NAME[=WxH]")]
    pub screens: Vec<ScreenSpec>,

    /// Image to threshold onto a screen: `SCREEN=PATH`. Repeatable.
    #[arg(long = "import", value_name = "SCREEN=PATH")]
    pub imports: Vec<ImportSpec>,

    /// Array element type for every exported screen.
    #[arg(long, default_value = "uint8_t", value_name = "uint8_t|uint16_t")]
    pub data_type: WordWidth,

    /// Directory receiving export.txt, screens.c and screens.h.
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,
}

impl Args {
    /// Nothing to build from; seed the sample project instead.
    pub fn wants_demo(&self) -> bool {
        self.menu.is_empty() && self.screens.is_empty()
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScreenSpec {
    pub name: String,
    pub size: Option<(usize, usize)>,
}

impl FromStr for ScreenSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((name, size)) = s.rsplit_once('=') else {
            return Ok(Self {
                name: s.to_owned(),
                size: None,
            });
        };

        let (w, h) = size
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("screen size {size:?} is not WxH"))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<usize>()
                .map_err(|err| format!("screen size {size:?}: {err}"))
        };

        Ok(Self {
            name: name.to_owned(),
            size: Some((parse(w)?, parse(h)?)),
        })
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ImportSpec {
    pub screen: String,
    pub path: PathBuf,
}

impl FromStr for ImportSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (screen, path) = s
            .split_once('=')
            .ok_or_else(|| format!("import {s:?} is not SCREEN=PATH"))?;
        if path.is_empty() {
            return Err(format!("import {s:?} has no path"));
        }

        Ok(Self {
            screen: screen.to_owned(),
            path: PathBuf::from(path),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_content_flags_select_demo() {
        let args = Args::try_parse_from(["oled-menu"]).unwrap();

        assert!(args.wants_demo());
        assert_eq!(args.data_type, WordWidth::U8);
        assert_eq!(args.out_dir, PathBuf::from("."));
    }

    #[test]
    fn repeated_flags_keep_order() {
        let args = Args::try_parse_from([
            "oled-menu",
            "--menu",
            "Big Knob",
            "--menu",
            "Park Sensor",
            "--screen",
            "Logo=32x16",
            "--screen",
            "Splash",
            "--import",
            "Logo=logo.png",
            "--data-type",
            "uint16_t",
        ])
        .unwrap();

        assert!(!args.wants_demo());
        assert_eq!(args.menu, ["Big Knob", "Park Sensor"]);
        assert_eq!(
            args.screens,
            [
                ScreenSpec {
                    name: "Logo".into(),
                    size: Some((32, 16)),
                },
                ScreenSpec {
                    name: "Splash".into(),
                    size: None,
                },
            ]
        );
        assert_eq!(args.imports[0].path, PathBuf::from("logo.png"));
        assert_eq!(args.data_type, WordWidth::U16);
    }

    #[test]
    fn malformed_specs_are_rejected() {
        assert!("Logo=32by16".parse::<ScreenSpec>().is_err());
        assert!("Logo=x16".parse::<ScreenSpec>().is_err());
        assert!("logo.png".parse::<ImportSpec>().is_err());
        assert!("Logo=".parse::<ImportSpec>().is_err());
        assert!(Args::try_parse_from(["oled-menu", "--data-type", "uint32_t"]).is_err());
    }
}
