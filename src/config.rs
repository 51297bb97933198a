use std::{
    env,
    path::{Path, PathBuf},
};

pub const DEFAULT_OUTPUT_DIR: &str = "assets/sprites";
pub const OUTPUT_DIR_VAR: &str = "SPRITES_OUTPUT_DIR";
pub const SKIP_MANIFEST_VAR: &str = "SPRITES_SKIP_MANIFEST";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Must already exist; the generator never creates it.
    pub output_dir: PathBuf,
    pub write_manifest: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            write_manifest: true,
        }
    }
}

impl GeneratorConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var_os(key).map(PathBuf::from))
    }

    fn from_vars(lookup: impl Fn(&str) -> Option<PathBuf>) -> Self {
        let defaults = Self::default();
        Self {
            output_dir: lookup(OUTPUT_DIR_VAR)
                .filter(|dir| !dir.as_os_str().is_empty())
                .unwrap_or(defaults.output_dir),
            write_manifest: lookup(SKIP_MANIFEST_VAR).is_none(),
        }
    }

    pub fn with_output_dir(mut self, output_dir: impl AsRef<Path>) -> Self {
        self.output_dir = output_dir.as_ref().to_path_buf();
        self
    }

    pub fn sprite_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GeneratorConfig::from_vars(|_| None);
        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(
            config.sprite_path("cow.png"),
            Path::new("assets/sprites/cow.png")
        );
    }

    #[test]
    fn overrides() {
        let config = GeneratorConfig::from_vars(|key| match key {
            OUTPUT_DIR_VAR => Some(PathBuf::from("/tmp/out")),
            SKIP_MANIFEST_VAR => Some(PathBuf::from("1")),
            _ => None,
        });
        assert_eq!(config.output_dir, Path::new("/tmp/out"));
        assert!(!config.write_manifest);
    }

    #[test]
    fn empty_dir_falls_back() {
        let config = GeneratorConfig::from_vars(|key| {
            (key == OUTPUT_DIR_VAR).then(PathBuf::new)
        });
        assert_eq!(config.output_dir, Path::new(DEFAULT_OUTPUT_DIR));
        assert!(config.write_manifest);
    }
}
