use anyhow::Context;
use placeholder_sprites::{
    config::GeneratorConfig,
    generator::Generator,
    sprites::CATALOG,
};

fn main() -> anyhow::Result<()> {
    pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = GeneratorConfig::from_env();
    log::debug!("{config:?}");
    let generator = Generator::new(config);
    let stdout = std::io::stdout();
    generator
        .run(CATALOG, &mut stdout.lock())
        .with_context(|| {
            format!(
                "Sprite generation into {} failed",
                generator.config().output_dir.display()
            )
        })?;
    Ok(())
}
