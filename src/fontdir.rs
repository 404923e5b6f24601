use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};

use crate::fon2::Font;

pub const FONT_EXTENSION: &str = "fon2";
pub const DEFAULT_FONT_DIR: &str = "fonts";

/// Directory holding `<name>.fon2` files.
pub struct FontDirectory {
    path: PathBuf,
}

impl FontDirectory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self{ path: path.into() }
    }

    /// Accepts either a path to an existing file or a bare font name.
    pub fn resolve(&self, font: &str) -> Result<PathBuf> {
        let direct = Path::new(font);
        if direct.is_file() {
            return Ok(direct.to_path_buf());
        }
        let candidate = self.path.join(format!("{}.{}", font, FONT_EXTENSION));
        if candidate.is_file() {
            return Ok(candidate);
        }
        Err(anyhow!("font '{}' not found (tried {})", font, candidate.display()))
    }

    pub fn load(&self, font: &str) -> Result<Font> {
        let path = self.resolve(font)?;
        log::info!("loading font {}", path.display());
        let data = std::fs::read(&path).with_context(|| format!("cannot read {}", path.display()))?;
        Font::new(&data).with_context(|| format!("{} is not a valid FON2 font", path.display()))
    }

    /// Font names, sorted.
    pub fn list(&self) -> Result<Vec<String>> {
        let entries = std::fs::read_dir(&self.path)
            .with_context(|| format!("cannot read font directory {}", self.path.display()))?;
        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().map_or(false, |ext| ext.eq_ignore_ascii_case(FONT_EXTENSION)) {
                if let Some(stem) = path.file_stem() {
                    names.push(stem.to_string_lossy().into_owned());
                }
            }
        }
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fon2::testutil::FontBuilder;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("doomtext-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn sample_font() -> Vec<u8> {
        FontBuilder::new(b'A', b'A', 1)
            .palette(&[ [ 0, 0, 0 ], [ 5, 5, 5 ], [ 0, 0, 0 ] ])
            .constant_width(1)
            .pixels(&[ 0, 1 ])
            .build()
    }

    #[test]
    fn lists_and_resolves_fonts() {
        let dir = scratch_dir("list");
        std::fs::write(dir.join("ZD2012.fon2"), sample_font()).unwrap();
        std::fs::write(dir.join("DBIGFONT.fon2"), sample_font()).unwrap();
        std::fs::write(dir.join("readme.txt"), b"hi").unwrap();

        let fonts = FontDirectory::new(&dir);
        assert_eq!(fonts.list().unwrap(), vec![ "DBIGFONT".to_string(), "ZD2012".to_string() ]);
        assert_eq!(fonts.resolve("ZD2012").unwrap(), dir.join("ZD2012.fon2"));

        let direct = dir.join("DBIGFONT.fon2");
        assert_eq!(fonts.resolve(direct.to_str().unwrap()).unwrap(), direct);

        let font = fonts.load("ZD2012").unwrap();
        assert!(font.get_glyph('A').is_some());

        let err = fonts.resolve("MISSING").unwrap_err();
        assert!(err.to_string().contains("MISSING.fon2"));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn invalid_font_reports_path() {
        let dir = scratch_dir("invalid");
        std::fs::write(dir.join("BROKEN.fon2"), b"FON1 not a font").unwrap();
        let fonts = FontDirectory::new(&dir);
        let err = fonts.load("BROKEN").err().unwrap();
        assert!(err.to_string().contains("BROKEN.fon2"));
        assert!(format!("{:#}", err).contains("bad magic"));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
