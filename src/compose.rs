use std::path::Path;

use anyhow::Context;

const STYLE_TAG: &str = "{% STYLE %}";
const THEME_TAG: &str = "{% THEME %}";
const CONTENT_TAG: &str = "{% CONTENT %}";

/// Substitute the three template placeholders. The tokens are distinct and
/// non-overlapping, so replacement order does not matter.
pub fn compose(template: &str, css: &str, theme: &str, content: &str) -> String {
    let container = format!(
        "<div class=\"github-markdown-body\" \
         data-color-mode=\"{theme}\" \
         data-dark-theme=\"{theme}\" \
         data-light-theme=\"{theme}\">"
    );
    template
        .replace(STYLE_TAG, &format!("<style>{css}</style>"))
        .replace(THEME_TAG, &container)
        .replace(CONTENT_TAG, content)
}

/// Overwrite `path` with the final document in one scoped write.
pub fn write_output(path: &Path, html: &str) -> anyhow::Result<()> {
    std::fs::write(path, html).with_context(|| format!("while writing {}", path.display()))
}
