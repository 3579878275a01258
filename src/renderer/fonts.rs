//! Resolution of named font faces, with egui's embedded face as fallback.

use ab_glyph::FontArc;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{LogoError, Result};

/// How deep below each search directory font files are looked for.
const MAX_SEARCH_DEPTH: usize = 4;

const FONT_EXTENSIONS: [&str; 3] = ["ttf", "otf", "ttc"];

/// Where a resolved face came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    File(PathBuf),
    Builtin,
}

#[derive(Clone)]
pub struct ResolvedFont {
    pub font: FontArc,
    pub source: FontSource,
}

/// Looks up font faces by family name and caches the outcome per family.
pub struct FontBook {
    search_dirs: Vec<PathBuf>,
    builtin: FontArc,
    cache: Mutex<HashMap<String, Option<(FontArc, PathBuf)>>>,
}

impl std::fmt::Debug for FontBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontBook")
            .field("search_dirs", &self.search_dirs)
            .field("cached_families", &self.cache.lock().len())
            .finish()
    }
}

impl FontBook {
    pub fn new(search_dirs: Vec<PathBuf>) -> Result<Self> {
        Ok(Self {
            search_dirs,
            builtin: builtin_font()?,
            cache: Mutex::new(HashMap::new()),
        })
    }

    /// Resolves `family` to a face, falling back to the built-in face.
    ///
    /// Never fails: a missing or unreadable face degrades to the fallback.
    pub fn resolve(&self, family: &str) -> ResolvedFont {
        let key = normalize_family(family);
        let mut cache = self.cache.lock();
        let entry = cache
            .entry(key)
            .or_insert_with_key(|key| self.load_family(key));

        match entry {
            Some((font, path)) => ResolvedFont {
                font: font.clone(),
                source: FontSource::File(path.clone()),
            },
            None => ResolvedFont {
                font: self.builtin.clone(),
                source: FontSource::Builtin,
            },
        }
    }

    fn load_family(&self, key: &str) -> Option<(FontArc, PathBuf)> {
        if key.is_empty() {
            return None;
        }
        let Some(path) = self
            .search_dirs
            .iter()
            .find_map(|dir| find_font_file(dir, key, MAX_SEARCH_DEPTH))
        else {
            log::debug!("No font file for '{}', using built-in face", key);
            return None;
        };

        match load_font_file(&path) {
            Ok(font) => {
                log::debug!("Resolved font '{}' to {}", key, path.display());
                Some((font, path))
            }
            Err(err) => {
                log::warn!("{}; using built-in face", err);
                None
            }
        }
    }
}

/// Platform directories searched for installed fonts.
pub fn system_font_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    let home = std::env::var_os("HOME").map(PathBuf::from);

    if cfg!(target_os = "windows") {
        let windir = std::env::var_os("WINDIR").map_or_else(|| PathBuf::from(r"C:\Windows"), PathBuf::from);
        dirs.push(windir.join("Fonts"));
        if let Some(local) = std::env::var_os("LOCALAPPDATA") {
            dirs.push(PathBuf::from(local).join(r"Microsoft\Windows\Fonts"));
        }
    } else if cfg!(target_os = "macos") {
        dirs.push(PathBuf::from("/Library/Fonts"));
        dirs.push(PathBuf::from("/System/Library/Fonts"));
        if let Some(home) = &home {
            dirs.push(home.join("Library/Fonts"));
        }
    } else {
        dirs.push(PathBuf::from("/usr/share/fonts"));
        dirs.push(PathBuf::from("/usr/local/share/fonts"));
        if let Some(home) = &home {
            dirs.push(home.join(".fonts"));
            dirs.push(home.join(".local/share/fonts"));
        }
    }

    dirs
}

/// Lowercase alphanumerics only, so "DejaVu Sans" matches `DejaVuSans.ttf`.
fn normalize_family(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

fn is_font_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| FONT_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)))
}

fn find_font_file(dir: &Path, key: &str, depth: usize) -> Option<PathBuf> {
    let entries = std::fs::read_dir(dir).ok()?;
    let mut subdirs = Vec::new();

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            subdirs.push(path);
            continue;
        }
        let matches = path
            .file_stem()
            .is_some_and(|stem| normalize_family(&stem.to_string_lossy()) == key);
        if matches && is_font_file(&path) {
            return Some(path);
        }
    }

    if depth == 0 {
        return None;
    }
    subdirs.sort();
    subdirs
        .iter()
        .find_map(|subdir| find_font_file(subdir, key, depth - 1))
}

fn load_font_file(path: &Path) -> Result<FontArc> {
    let bytes = std::fs::read(path).map_err(|err| LogoError::io(path, err))?;
    FontArc::try_from_vec(bytes).map_err(|_| LogoError::InvalidFont(path.display().to_string()))
}

/// The first proportional face embedded in egui.
fn builtin_font() -> Result<FontArc> {
    let definitions = egui::FontDefinitions::default();
    let name = definitions
        .families
        .get(&egui::FontFamily::Proportional)
        .and_then(|names| names.first())
        .ok_or_else(|| LogoError::InvalidFont("built-in proportional face".to_owned()))?;
    let data = definitions
        .font_data
        .get(name)
        .ok_or_else(|| LogoError::InvalidFont(name.clone()))?;
    let bytes: &[u8] = &data.font;
    FontArc::try_from_vec(bytes.to_vec()).map_err(|_| LogoError::InvalidFont(name.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_family() {
        assert_eq!(normalize_family("DejaVu Sans"), "dejavusans");
        assert_eq!(normalize_family("Open-Sans_Bold"), "opensansbold");
        assert_eq!(normalize_family("Arial"), "arial");
    }

    #[test]
    fn test_unknown_family_falls_back_to_builtin() {
        let book = FontBook::new(Vec::new()).unwrap();
        let resolved = book.resolve("Definitely Not A Real Face");
        assert_eq!(resolved.source, FontSource::Builtin);
    }

    #[test]
    fn test_unparseable_font_file_falls_back() {
        let dir = std::env::temp_dir().join(format!("logo_maker_fonts_{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("Broken.ttf"), b"not a font").unwrap();

        let book = FontBook::new(vec![dir.clone()]).unwrap();
        assert_eq!(book.resolve("Broken").source, FontSource::Builtin);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
