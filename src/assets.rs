use std::path::{Path, PathBuf};

use anyhow::{bail, Context};

/// Template file name inside the asset directory. Every other file there is
/// a theme style sheet.
pub const TEMPLATE_FILE: &str = "template.html";

/// A validated theme: its name and the style sheet backing it.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub css_path: PathBuf,
}

/// The asset directory and the theme names discovered in it.
#[derive(Debug)]
pub struct Assets {
    dir: PathBuf,
    themes: Vec<String>,
}

impl Assets {
    /// Enumerate the themes available in `dir`. Names are sorted so that
    /// help text and validation messages are deterministic.
    pub fn discover(dir: &Path) -> anyhow::Result<Self> {
        let entries = std::fs::read_dir(dir)
            .with_context(|| format!("while listing assets in {}", dir.display()))?;

        let mut themes = vec![];
        for entry in entries {
            let entry = entry?;
            if !entry.metadata()?.is_file() {
                continue;
            }
            let name = PathBuf::from(entry.file_name());
            if name.as_os_str() == TEMPLATE_FILE {
                continue;
            }
            if let Some(stem) = name.file_stem() {
                themes.push(stem.to_string_lossy().to_string());
            }
        }
        themes.sort();

        Ok(Self {
            dir: dir.to_owned(),
            themes,
        })
    }

    /// Asset directory lookup: `MD2HTML_ASSETS` if set, otherwise `assets/`
    /// next to the executable, otherwise `assets/` in the working directory.
    pub fn default_dir() -> PathBuf {
        if let Some(dir) = std::env::var_os("MD2HTML_ASSETS") {
            return PathBuf::from(dir);
        }
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent().map(|p| p.join("assets")) {
                if dir.is_dir() {
                    return dir;
                }
            }
        }
        PathBuf::from("assets")
    }

    pub fn themes(&self) -> &[String] {
        &self.themes
    }

    pub fn template_path(&self) -> PathBuf {
        self.dir.join(TEMPLATE_FILE)
    }

    /// Validate a requested theme name. This runs before any source file is
    /// read or any network request is made.
    pub fn theme(&self, name: &str) -> anyhow::Result<Theme> {
        if !self.themes.iter().any(|t| t == name) {
            bail!(
                "theme {:?} not in list of valid options: {:?}",
                name,
                self.themes
            );
        }
        Ok(Theme {
            name: name.to_string(),
            css_path: self.dir.join(format!("{name}.css")),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn asset_dir(files: &[&str]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for file in files {
            fs::write(dir.path().join(file), "").unwrap();
        }
        dir
    }

    #[test]
    fn discovers_sorted_themes_excluding_template() {
        let dir = asset_dir(&["light.css", "dark.css", TEMPLATE_FILE]);
        let assets = Assets::discover(dir.path()).unwrap();
        assert_eq!(assets.themes(), ["dark", "light"]);
    }

    #[test]
    fn resolves_theme_paths() {
        let dir = asset_dir(&["dark.css", TEMPLATE_FILE]);
        let assets = Assets::discover(dir.path()).unwrap();
        let theme = assets.theme("dark").unwrap();
        assert_eq!(theme.name, "dark");
        assert_eq!(theme.css_path, dir.path().join("dark.css"));
        assert_eq!(assets.template_path(), dir.path().join(TEMPLATE_FILE));
    }

    #[test]
    fn rejects_unknown_theme() {
        let dir = asset_dir(&["dark.css", TEMPLATE_FILE]);
        let assets = Assets::discover(dir.path()).unwrap();
        let err = assets.theme("solarized").unwrap_err();
        assert!(err.to_string().contains("solarized"));
        assert!(err.to_string().contains("dark"));
    }

    #[test]
    fn env_override_selects_the_asset_dir() {
        // no other test reads this variable, so set/remove is race-free
        let dir = PathBuf::from("/md2html-env-override/assets");
        std::env::set_var("MD2HTML_ASSETS", &dir);
        let resolved = Assets::default_dir();
        std::env::remove_var("MD2HTML_ASSETS");
        assert_eq!(resolved, dir);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(Assets::discover(&missing).is_err());
    }
}
