use std::path::{Path, PathBuf};

use anyhow::{ensure, Context};
use log::info;
use regex::RegexBuilder;

/// The input Markdown file. Read once, never written back.
#[derive(Debug)]
pub struct Document {
    pub path: PathBuf,
    /// Output path: same directory, extension swapped for `.html`.
    pub out_path: PathBuf,
    pub raw: String,
}

impl Document {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        ensure!(path.is_file(), "no such markdown file: {}", path.display());
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("while reading {}", path.display()))?;

        let mut out_path = path.to_path_buf();
        out_path.set_extension("html");

        Ok(Self {
            path: path.to_path_buf(),
            out_path,
            raw,
        })
    }

    /// The text sent to the renderer: front-matter stripped and reformatted
    /// as a Markdown table prepended to the body.
    pub fn processed(&self) -> String {
        extract(&self.raw).1
    }
}

/// Key-value pairs from a pandoc-style metadata block, in insertion order.
/// Order matters: it determines column order in the rendered table.
#[derive(Debug, Default, PartialEq)]
pub struct FrontMatter {
    entries: Vec<(String, String)>,
}

impl FrontMatter {
    /// Last occurrence wins, taking both the value and the position.
    fn insert(&mut self, key: &str, value: &str) {
        self.entries.retain(|(k, _)| k != key);
        self.entries.push((key.to_string(), value.to_string()));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Three-line Markdown table (header, separator, values) followed by a
    /// horizontal rule.
    pub fn to_table(&self) -> String {
        let header: Vec<&str> = self.entries.iter().map(|(k, _)| k.as_str()).collect();
        let values: Vec<&str> = self.entries.iter().map(|(_, v)| v.as_str()).collect();
        format!(
            "{}\n{}\n{}\n---",
            header.join("|"),
            "--- |".repeat(self.entries.len()),
            values.join("|"),
        )
    }

    fn log(&self) {
        let width = self
            .entries
            .iter()
            .map(|(k, _)| k.len())
            .max()
            .unwrap_or(0)
            + 1;
        for (key, value) in self.iter() {
            info!("{key:<width$}{value}");
        }
    }
}

/// Split off a leading metadata block delimited by `---` lines.
///
/// Returns the parsed pairs and the processed text. Without a complete
/// leading block (including an unterminated one) the text passes through
/// unchanged. An empty block is removed but produces no table.
pub fn extract(text: &str) -> (FrontMatter, String) {
    // parsing pandoc-style metadata block; the closing delimiter must be a
    // whole line, not the tail of a content line
    let header_pattern = RegexBuilder::new(r"^---\r?\n(?:(.*?)\r?\n)?---\r?\n(.*)")
        .dot_matches_new_line(true)
        .build()
        .unwrap();

    let Some(caps) = header_pattern.captures(text) else {
        return (FrontMatter::default(), text.to_string());
    };

    let mut front_matter = FrontMatter::default();
    let header = caps.get(1).map_or("", |m| m.as_str());
    for line in header.split('\n') {
        let line = line.trim_end_matches('\r');
        if line.is_empty() || line.trim() == "---" {
            continue;
        }
        let Some((head, _)) = line.split_once(':') else {
            continue;
        };
        // key left of the first colon, value after the last one
        let value = line.rsplit(':').next().unwrap_or("");
        front_matter.insert(head.trim(), value.trim());
    }
    front_matter.log();

    let body = caps[2].to_string();
    let processed = if front_matter.is_empty() {
        body
    } else {
        format!("{}\n{}", front_matter.to_table(), body)
    };
    (front_matter, processed)
}
