extern crate doomtext;

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use doomtext::fontdir::{FontDirectory, DEFAULT_FONT_DIR};
use doomtext::render::{sheet, text, util};

#[derive(Subcommand)]
enum CliCommand {
    /// Renders text with a font
    Render {
        /// Font name or path to a .fon2 file
        font: String,
        /// Text to render
        text: String,
        /// Output image (.bmp)
        out: PathBuf,
        #[clap(long, default_value_t=false)]
        /// Upper-case the text before looking up glyphs
        uppercase: bool,
        #[clap(long, value_parser=parse_color, default_value="0,0,0")]
        /// Background colour for transparent pixels, as R,G,B
        background: [u8; 3],
    },
    /// Draws all glyphs of a font
    Sheet {
        /// Font name or path to a .fon2 file
        font: String,
        /// Output image (.bmp)
        out: PathBuf,
        #[clap(long, default_value_t=256)]
        /// Sheet width in pixels
        width: u32,
        #[clap(long, value_parser=parse_color, default_value="0,0,0")]
        /// Background colour for transparent pixels, as R,G,B
        background: [u8; 3],
    },
    /// Shows font metadata
    Info {
        /// Font name or path to a .fon2 file
        font: String,
    },
    /// Lists fonts in the font directory
    List,
}

/// Renders text using ZDoom FON2 fonts
#[derive(Parser)]
struct Cli {
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
    #[clap(long, default_value=DEFAULT_FONT_DIR)]
    /// Directory searched for font names
    font_dir: PathBuf,
    #[command(subcommand)]
    command: CliCommand
}

fn parse_color(s: &str) -> Result<[u8; 3]> {
    let parts: Vec<&str> = s.split(',').map(|p| p.trim()).collect();
    if parts.len() != 3 {
        return Err(anyhow!("expected R,G,B, got '{}'", s));
    }
    let mut color = [ 0u8; 3 ];
    for (n, part) in parts.iter().enumerate() {
        color[n] = part.parse()?;
    }
    Ok(color)
}

fn render(fonts: &FontDirectory, font: &str, input: &str, out: &Path, options: &text::RenderOptions, background: [u8; 3]) -> Result<()> {
    let font = fonts.load(font)?;
    let result = text::render_text(&font, input, options);
    util::save_bmp(out, &result.image, background)?;
    println!("wrote {}x{} image to {}", result.image.width, result.image.height, out.display());
    Ok(())
}

fn info(fonts: &FontDirectory, font: &str) -> Result<()> {
    let font = fonts.load(font)?;
    let header = font.get_header();
    let (min_lightness, max_lightness) = font.lightness_range();
    println!("height:          {}", header.character_height);
    println!("characters:      {}..={}", header.first_char, header.last_char);
    println!("constant width:  {}", header.constant_width);
    println!("shading type:    {}", header.shading_type);
    println!("palette size:    {}", header.palette_size);
    match font.kerning() {
        Some(kerning) => println!("kerning:         {}", kerning),
        None => println!("kerning:         none"),
    }
    println!("lightness range: {:.1}..{:.1}", min_lightness, max_lightness);
    println!("glyphs:          {}", font.get_number_of_glyphs());
    for glyph in font.glyphs() {
        println!("  {:3} {:?} width {}", glyph.code, glyph.character(), glyph.width);
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Cli::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let fonts = FontDirectory::new(&args.font_dir);
    match &args.command {
        CliCommand::Render{ font, text: input, out, uppercase, background } => {
            let options = text::RenderOptions{ uppercase: *uppercase };
            render(&fonts, font, input, out, &options, *background)
        },
        CliCommand::Sheet{ font, out, width, background } => {
            let font = fonts.load(font)?;
            let image = sheet::render_sheet(&font, *width);
            util::save_bmp(out, &image, *background)
        },
        CliCommand::Info{ font } => {
            info(&fonts, font)
        },
        CliCommand::List => {
            for name in fonts.list()? {
                println!("{}", name);
            }
            Ok(())
        },
    }
}
