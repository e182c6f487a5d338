use std::collections::HashMap;
use std::path::PathBuf;

use fontdue::{Font, FontSettings};

use crate::doc::PoemFont;

/// Width measurement used by layout code. Implemented by [`FontStore`] for
/// real rendering and by fixed-width fakes in layout tests.
pub trait TextMeasure {
    fn text_width(&self, font: PoemFont, size: f32, text: &str) -> f32;
}

/// Loaded typefaces for the four poem families plus the UI chrome.
///
/// Families resolve from candidate files in the standard system font
/// directories; a family whose candidates are all absent falls back to the
/// first font that did load.
pub struct FontStore {
    loaded: Vec<Font>,
    family_index: [usize; 4],
}

const SERIF_CANDIDATES: &[&str] = &[
    "dejavuserif.ttf",
    "liberationserif-regular.ttf",
    "freeserif.ttf",
    "notoserif-regular.ttf",
    "georgia.ttf",
    "times.ttf",
];

const SERIF_ITALIC_CANDIDATES: &[&str] = &[
    "dejavuserif-italic.ttf",
    "liberationserif-italic.ttf",
    "freeserifitalic.ttf",
    "notoserif-italic.ttf",
    "georgiai.ttf",
    "timesi.ttf",
];

const SANS_CANDIDATES: &[&str] = &[
    "dejavusans.ttf",
    "liberationsans-regular.ttf",
    "freesans.ttf",
    "notosans-regular.ttf",
    "arial.ttf",
    "segoeui.ttf",
];

const MONO_CANDIDATES: &[&str] = &[
    "dejavusansmono.ttf",
    "liberationmono-regular.ttf",
    "freemono.ttf",
    "notosansmono-regular.ttf",
    "jetbrainsmono-regular.ttf",
    "consola.ttf",
    "cour.ttf",
];

fn candidates(family: PoemFont) -> &'static [&'static str] {
    match family {
        PoemFont::Serif => SERIF_CANDIDATES,
        PoemFont::SerifItalic => SERIF_ITALIC_CANDIDATES,
        PoemFont::Sans => SANS_CANDIDATES,
        PoemFont::Mono => MONO_CANDIDATES,
    }
}

fn font_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Some(home) = std::env::var_os("HOME") {
        let home = PathBuf::from(home);
        dirs.push(home.join(".local/share/fonts"));
        dirs.push(home.join(".fonts"));
        dirs.push(home.join("Library/Fonts"));
    }
    dirs.push(PathBuf::from("/usr/local/share/fonts"));
    dirs.push(PathBuf::from("/usr/share/fonts"));
    dirs.push(PathBuf::from("/System/Library/Fonts"));
    dirs.push(PathBuf::from("/Library/Fonts"));
    if let Some(windir) = std::env::var_os("WINDIR") {
        dirs.push(PathBuf::from(windir).join("Fonts"));
    }
    dirs
}

/// Walks a font directory tree collecting lowercased file name -> path.
/// Font trees nest (foundry subdirectories), so recurse a few levels.
fn collect_files(dir: &PathBuf, depth: u8, out: &mut HashMap<String, PathBuf>) {
    if depth == 0 {
        return;
    }
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_files(&path, depth - 1, out);
        } else if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
            out.entry(name.to_ascii_lowercase()).or_insert(path);
        }
    }
}

fn slot(family: PoemFont) -> usize {
    match family {
        PoemFont::Serif => 0,
        PoemFont::SerifItalic => 1,
        PoemFont::Sans => 2,
        PoemFont::Mono => 3,
    }
}

impl FontStore {
    /// Scans the system font directories and resolves all four families.
    /// Fails only when not a single candidate font can be loaded.
    pub fn load() -> anyhow::Result<FontStore> {
        let mut files = HashMap::new();
        for dir in font_dirs() {
            collect_files(&dir, 4, &mut files);
        }

        let mut loaded: Vec<Font> = Vec::new();
        let mut resolved: [Option<usize>; 4] = [None; 4];
        for family in PoemFont::ALL {
            for candidate in candidates(family) {
                let Some(path) = files.get(*candidate) else {
                    continue;
                };
                let Ok(bytes) = std::fs::read(path) else {
                    continue;
                };
                match Font::from_bytes(bytes, FontSettings::default()) {
                    Ok(font) => {
                        log::debug!("{}: {}", family.label(), path.display());
                        resolved[slot(family)] = Some(loaded.len());
                        loaded.push(font);
                        break;
                    }
                    Err(err) => {
                        log::warn!("Unusable font file {}: {err}", path.display());
                    }
                }
            }
        }

        anyhow::ensure!(
            !loaded.is_empty(),
            "no usable fonts found in {} system font files",
            files.len()
        );
        let family_index = resolved.map(|index| index.unwrap_or(0));
        Ok(FontStore {
            loaded,
            family_index,
        })
    }

    pub fn get(&self, family: PoemFont) -> &Font {
        &self.loaded[self.family_index[slot(family)]]
    }

    /// Distance from the top of the line box to the baseline.
    pub fn ascent(&self, family: PoemFont, size: f32) -> f32 {
        self.get(family)
            .horizontal_line_metrics(size)
            .map(|metrics| metrics.ascent)
            .unwrap_or(size * 0.8)
    }

    #[cfg(test)]
    pub(crate) fn load_for_tests() -> Option<FontStore> {
        FontStore::load().ok()
    }
}

impl TextMeasure for FontStore {
    fn text_width(&self, family: PoemFont, size: f32, text: &str) -> f32 {
        let font = self.get(family);
        text.chars()
            .map(|ch| font.metrics(ch, size).advance_width)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // These exercise whatever fonts the host machine has; they skip quietly
    // on a machine with no system fonts at all.

    #[test]
    fn every_family_resolves_when_any_font_loads() {
        let Some(store) = FontStore::load_for_tests() else {
            return;
        };
        for family in PoemFont::ALL {
            let _ = store.get(family);
        }
    }

    #[test]
    fn wider_text_measures_wider() {
        let Some(store) = FontStore::load_for_tests() else {
            return;
        };
        let short = store.text_width(PoemFont::Serif, 18.0, "hi");
        let long = store.text_width(PoemFont::Serif, 18.0, "hi there, longer");
        assert!(long > short);
    }

    #[test]
    fn ascent_is_positive() {
        let Some(store) = FontStore::load_for_tests() else {
            return;
        };
        assert!(store.ascent(PoemFont::Sans, 18.0) > 0.0);
    }
}
