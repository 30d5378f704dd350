use std::path::{Path, PathBuf};

use anyhow::Context;
use log::info;

use crate::assets::Theme;
use crate::compose::{compose, write_output};
use crate::document::Document;
use crate::render::Render;

/// Run the whole pipeline for one document: front-matter extraction, remote
/// rendering, template substitution, output write. Returns the output path.
///
/// Theme validation and document loading have already happened by the time
/// this runs, so a failure here never leaves a partial output file: the
/// write is the final step.
pub fn convert(
    document: &Document,
    theme: &Theme,
    template_path: &Path,
    renderer: &dyn Render,
) -> anyhow::Result<PathBuf> {
    let markdown = document.processed();
    let fragment = renderer.render(&markdown)?;

    let template = std::fs::read_to_string(template_path)
        .with_context(|| format!("while reading {}", template_path.display()))?;
    let css = std::fs::read_to_string(&theme.css_path)
        .with_context(|| format!("while reading {}", theme.css_path.display()))?;

    let html = compose(&template, &css, &theme.name, &fragment);
    write_output(&document.out_path, &html)?;

    info!(
        "Rendered {} -> {}",
        document.path.display(),
        document.out_path.display()
    );
    Ok(document.out_path.clone())
}
