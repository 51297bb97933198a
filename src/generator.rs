use std::{fs, io::Write, path::PathBuf};

use anyhow::Context;
use log::info;

use crate::{config::GeneratorConfig, sprites::SpriteDefinition};

pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSprite {
    pub name: &'static str,
    pub description: &'static str,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub bytes: usize,
}

/// Renders and writes sheets one after the other. The first failure stops
/// the run; files written before it stay on disk.
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn generate(
        &self,
        sprite: &SpriteDefinition,
        progress: &mut impl Write,
    ) -> anyhow::Result<GeneratedSprite> {
        let file_name = sprite.file_name();
        writeln!(progress, "Generating {file_name}...")?;

        let image = sprite
            .render()
            .with_context(|| format!("Failed to render {}", sprite.name))?;
        let bytes = image.encode();
        let path = self.config.sprite_path(&file_name);
        fs::write(&path, &bytes).with_context(|| format!("Failed to write {}", path.display()))?;

        writeln!(
            progress,
            "✓ Created {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        )?;
        info!("{}: {} bytes", path.display(), bytes.len());
        Ok(GeneratedSprite {
            name: sprite.name,
            description: sprite.description,
            path,
            width: image.width(),
            height: image.height(),
            bytes: bytes.len(),
        })
    }

    pub fn run(
        &self,
        sprites: &[SpriteDefinition],
        progress: &mut impl Write,
    ) -> anyhow::Result<Vec<GeneratedSprite>> {
        let generated = sprites
            .iter()
            .map(|sprite| self.generate(sprite, &mut *progress))
            .collect::<anyhow::Result<Vec<_>>>()?;

        if self.config.write_manifest {
            self.write_manifest(&generated)?;
        }

        writeln!(progress, "\n✓ All placeholder sprite sheets generated successfully!")?;
        writeln!(progress, "\nSprite sheets created:")?;
        for sprite in &generated {
            writeln!(progress, "  - {} ({})", sprite.path.display(), sprite.description)?;
        }
        Ok(generated)
    }

    fn write_manifest(&self, generated: &[GeneratedSprite]) -> anyhow::Result<()> {
        let now = time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Iso8601::DEFAULT)?;
        let sprites: Vec<_> = generated
            .iter()
            .map(|sprite| {
                serde_json::json!({
                    "name": sprite.name,
                    "path": sprite.path.display().to_string(),
                    "width": sprite.width,
                    "height": sprite.height,
                    "bytes": sprite.bytes,
                })
            })
            .collect();
        let manifest = serde_json::json!({
            "generated_at": now,
            "sprites": sprites,
        });
        let path = self.config.sprite_path(MANIFEST_FILE);
        fs::write(&path, serde_json::to_string_pretty(&manifest)?)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("manifest written to {}", path.display());
        Ok(())
    }
}
