use anyhow::{bail, Context};
use placeholder_sprites::{
    chunks::{iter_chunks, parse_signature, Chunk},
    decode,
};

fn main() -> anyhow::Result<()> {
    let args: Vec<_> = std::env::args().skip(1).collect();
    let verbosity = if args.first().map(String::as_str) == Some("-v") {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    pretty_env_logger::formatted_builder()
        .filter_level(verbosity)
        .init();
    let Some(file_name) = args.iter().rfind(|arg| *arg != "-v") else {
        bail!("usage: inspect-png [-v] <file.png>");
    };

    let input = std::fs::read(file_name).with_context(|| format!("Failed to read {file_name}"))?;
    let (rest, _) = parse_signature(&input)
        .map_err(|_| anyhow::anyhow!("{file_name} doesn't start with the PNG signature"))?;
    println!("{file_name}: {} bytes", input.len());

    let mut bad_crcs = 0;
    for chunk in iter_chunks(rest) {
        let chunk = chunk?;
        let status = if chunk.crc_matches() {
            "ok"
        } else {
            bad_crcs += 1;
            "BAD CRC"
        };
        println!(
            "  {} {:>8} bytes  crc {:08x} {status}",
            chunk.type_name(),
            chunk.data.len(),
            chunk.crc
        );
        if let Ok(Chunk::IHDR(header)) = chunk.parse() {
            println!(
                "       {}x{} depth {} color type {} interlace {}",
                header.width,
                header.height,
                header.bit_depth,
                header.color_type,
                header.interlace_method
            );
        }
    }
    if bad_crcs > 0 {
        bail!("{bad_crcs} chunk(s) failed CRC verification");
    }

    let image = decode(&input).context("Pixel data does not decode")?;
    println!(
        "decoded {}x{} {:?} image",
        image.width(),
        image.height(),
        image.color_type()
    );
    Ok(())
}
