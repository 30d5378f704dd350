use std::path::PathBuf;

use anyhow::Context;
use clap::{command, Arg, ArgAction};
use md2html::assets::Assets;
use md2html::convert::convert;
use md2html::document::Document;
use md2html::render::GithubRenderer;

fn main() -> anyhow::Result<()> {
    let asset_dir = Assets::default_dir();
    let assets = Assets::discover(&asset_dir)
        .with_context(|| format!("while discovering themes in {}", asset_dir.display()))?;

    let matches = command!()
        .about("Small utility for converting markdown documents to HTML with GitHub styling.")
        .args(&[
            Arg::new("markdown_file")
                .help("Markdown file to render as HTML")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf)),
            Arg::new("theme")
                .short('t')
                .long("theme")
                .default_value("dark")
                .help(format!(
                    "Theme for rendering HTML. Valid themes: {}",
                    assets.themes().join(", ")
                )),
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Control the amount of information to display"),
        ])
        .get_matches();

    env_logger::Builder::new()
        .filter_level(if matches.get_flag("verbose") {
            log::LevelFilter::Info
        } else {
            log::LevelFilter::Warn
        })
        .parse_default_env()
        .init();

    // validated before any file or network I/O
    let theme_name: &String = matches.get_one("theme").unwrap();
    let theme = assets.theme(theme_name)?;

    let file: &PathBuf = matches.get_one("markdown_file").unwrap();
    let document = Document::load(file)?;

    let renderer = GithubRenderer::new()?;
    convert(&document, &theme, &assets.template_path(), &renderer)?;

    Ok(())
}
