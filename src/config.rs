use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};

use crate::syntax::KeywordTable;

/// Raw flags as read from config files or host-supplied tokens.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub tab_width: Option<usize>,
    pub repaint_window_ms: Option<u64>,
    pub no_blink: bool,
    pub keywords: Vec<String>,
}

impl ConfigFlags {
    /// Merge two flag sets; `other` wins for valued options, booleans OR, and
    /// keyword lists concatenate.
    pub fn union(&self, other: &Self) -> Self {
        let mut keywords = self.keywords.clone();
        keywords.extend(other.keywords.iter().cloned());
        Self {
            tab_width: other.tab_width.or(self.tab_width),
            repaint_window_ms: other.repaint_window_ms.or(self.repaint_window_ms),
            no_blink: self.no_blink || other.no_blink,
            keywords,
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("schemelight").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("schemelight")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("schemelight").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".config")
                .join("schemelight")
                .join("config");
        }
    }

    PathBuf::from(".schemelightrc")
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".schemelightrc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# schemelight defaults".to_string());
    if let Some(width) = flags.tab_width {
        lines.push(format!("--tab-width {width}"));
    }
    if let Some(window) = flags.repaint_window_ms {
        lines.push(format!("--repaint-window-ms {window}"));
    }
    if flags.no_blink {
        lines.push("--no-blink".to_string());
    }
    for keyword in &flags.keywords {
        lines.push(format!("--keyword {keyword}"));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token == "--no-blink" {
            flags.no_blink = true;
        } else if token == "--tab-width" {
            if let Some(next) = tokens.get(i + 1) {
                flags.tab_width = next.parse().ok();
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--tab-width=") {
            flags.tab_width = value.parse().ok();
        } else if token == "--repaint-window-ms" {
            if let Some(next) = tokens.get(i + 1) {
                flags.repaint_window_ms = next.parse().ok();
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--repaint-window-ms=") {
            flags.repaint_window_ms = value.parse().ok();
        } else if token == "--keyword" {
            if let Some(next) = tokens.get(i + 1) {
                flags.keywords.push(next.clone());
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--keyword=") {
            flags.keywords.push(value.to_string());
        }
        i += 1;
    }
    flags
}

/// Effective editor settings after defaults are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    /// Spaces inserted per indent step.
    pub tab_width: usize,
    /// Arrow-key repaint suppression window.
    pub repaint_window: Duration,
    /// Whether the caret blinks while the input has focus.
    pub blink: bool,
    /// Keywords recognized beyond the built-in set.
    pub extra_keywords: Vec<String>,
}

impl EditorConfig {
    pub fn from_flags(flags: &ConfigFlags) -> Self {
        Self {
            tab_width: flags.tab_width.unwrap_or(2),
            repaint_window: Duration::from_millis(flags.repaint_window_ms.unwrap_or(10)),
            blink: !flags.no_blink,
            extra_keywords: flags.keywords.clone(),
        }
    }

    /// The literal indentation the host inserts for a tab press.
    pub fn indent(&self) -> String {
        " ".repeat(self.tab_width)
    }

    /// The keyword table this configuration classifies against.
    pub fn keyword_table(&self) -> KeywordTable {
        KeywordTable::with_extra(self.extra_keywords.iter().cloned())
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self::from_flags(&ConfigFlags::default())
    }
}
