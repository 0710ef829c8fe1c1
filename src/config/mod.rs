use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Upper bounds for geometry and counts read from the config file.
pub const MAX_COLORS_LIMIT: usize = 64;
pub const MAX_SWATCH_ROWS: u16 = 64;
pub const MAX_SVG_PIXELS: u32 = 10_000;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub palette: PaletteConfig,
    pub swatches: SwatchConfig,
    pub svg: SvgConfig,
    pub input: InputConfig,
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Upper bound offered by the count selector.
    pub max_colors: usize,
    /// Number of colours generated on startup.
    pub default_count: usize,
}

/// Terminal swatch geometry, in rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SwatchConfig {
    pub height: u16,
    pub spacing: u16,
}

/// SVG output geometry, in pixels.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SvgConfig {
    pub width: u32,
    pub block_height: u32,
    pub spacing: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub mouse: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Where the TUI writes its log file.
    pub data_dir: PathBuf,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            max_colors: 12,
            default_count: 6,
        }
    }
}

impl Default for SwatchConfig {
    fn default() -> Self {
        Self {
            height: 3,
            spacing: 0,
        }
    }
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            width: 400,
            block_height: 60,
            spacing: 2,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { mouse: true }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        let proj = ProjectDirs::from("dev", "swatchy", "swatchy");
        let data_dir = proj
            .as_ref()
            .map(|p| p.data_dir().to_path_buf())
            .unwrap_or_else(|| std::env::temp_dir().join("swatchy"));
        Self { data_dir }
    }
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        let p = &self.palette;
        anyhow::ensure!(
            (1..=MAX_COLORS_LIMIT).contains(&p.max_colors),
            "palette.max_colors must be between 1 and {MAX_COLORS_LIMIT} (got {})",
            p.max_colors
        );
        anyhow::ensure!(
            (1..=p.max_colors).contains(&p.default_count),
            "palette.default_count must be between 1 and {} (got {})",
            p.max_colors,
            p.default_count
        );

        let sw = &self.swatches;
        anyhow::ensure!(
            (1..=MAX_SWATCH_ROWS).contains(&sw.height),
            "swatches.height must be between 1 and {MAX_SWATCH_ROWS} (got {})",
            sw.height
        );
        anyhow::ensure!(
            sw.spacing <= MAX_SWATCH_ROWS,
            "swatches.spacing must be at most {MAX_SWATCH_ROWS} (got {})",
            sw.spacing
        );

        let svg = &self.svg;
        for (name, value, min) in [
            ("width", svg.width, 1),
            ("block_height", svg.block_height, 1),
            ("spacing", svg.spacing, 0),
        ] {
            anyhow::ensure!(
                (min..=MAX_SVG_PIXELS).contains(&value),
                "svg.{name} must be between {min} and {MAX_SVG_PIXELS} (got {value})"
            );
        }
        Ok(())
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let proj =
        ProjectDirs::from("dev", "swatchy", "swatchy").context("ProjectDirs unavailable")?;
    Ok(proj.config_dir().join("config.toml"))
}

fn resolve(override_path: Option<&Path>) -> anyhow::Result<PathBuf> {
    match override_path {
        Some(p) => Ok(p.to_path_buf()),
        None => default_config_path(),
    }
}

/// Reads the config file, falling back to defaults when it does not exist.
pub fn load(override_path: Option<&Path>) -> anyhow::Result<Config> {
    let path = resolve(override_path)?;
    if !path.exists() {
        return Ok(Config::default());
    }

    let raw = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg = parse(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

pub fn parse(raw: &str) -> anyhow::Result<Config> {
    let cfg = toml::from_str::<Config>(raw)?;
    cfg.validate()?;
    Ok(cfg)
}

pub fn save(cfg: &Config, override_path: Option<&Path>) -> anyhow::Result<PathBuf> {
    let path = resolve(override_path)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create dir {}", parent.display()))?;
    }
    let raw = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&path, raw).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let cfg = parse("").unwrap();
        assert_eq!(cfg.palette.max_colors, 12);
        assert_eq!(cfg.palette.default_count, 6);
        assert_eq!(cfg.swatches.height, 3);
        assert_eq!(cfg.svg.block_height, 60);
        assert_eq!(cfg.svg.spacing, 2);
        assert!(cfg.input.mouse);
    }

    #[test]
    fn test_partial_section() {
        let cfg = parse(
            r#"
[palette]
max_colors = 20

[input]
mouse = false
"#,
        )
        .unwrap();
        assert_eq!(cfg.palette.max_colors, 20);
        assert_eq!(cfg.palette.default_count, 6);
        assert!(!cfg.input.mouse);
    }

    #[test]
    fn test_rejects_out_of_range_count() {
        let err = parse("[palette]\nmax_colors = 4\ndefault_count = 5\n").unwrap_err();
        assert!(format!("{err:#}").contains("default_count"));
        assert!(parse("[palette]\nmax_colors = 0\n").is_err());
    }

    #[test]
    fn test_rejects_oversized_swatches() {
        let err = parse("[swatches]\nheight = 65535\nspacing = 1\n").unwrap_err();
        assert!(format!("{err:#}").contains("swatches.height"));
        assert!(parse("[swatches]\nheight = 0\n").is_err());
        assert!(parse("[swatches]\nspacing = 65535\n").is_err());
        assert!(parse("[swatches]\nheight = 64\nspacing = 64\n").is_ok());
    }

    #[test]
    fn test_rejects_oversized_svg() {
        let err = parse("[svg]\nblock_height = 4294967295\nspacing = 1\n").unwrap_err();
        assert!(format!("{err:#}").contains("svg.block_height"));
        assert!(parse("[svg]\nwidth = 0\n").is_err());
        assert!(parse("[svg]\nspacing = 4294967295\n").is_err());
        assert!(parse("[svg]\nwidth = 10000\nblock_height = 10000\nspacing = 10000\n").is_ok());
    }

    #[test]
    fn test_rejects_huge_max_colors() {
        assert!(parse("[palette]\nmax_colors = 65\n").is_err());
        assert!(parse("[palette]\nmax_colors = 64\n").is_ok());
    }

    #[test]
    fn test_save_then_load() {
        let dir = std::env::temp_dir().join(format!("swatchy-test-{}", std::process::id()));
        let path = dir.join("config.toml");
        let mut cfg = Config::default();
        cfg.palette.default_count = 3;
        cfg.swatches.spacing = 1;

        save(&cfg, Some(&path)).unwrap();
        let back = load(Some(&path)).unwrap();
        assert_eq!(back.palette.default_count, 3);
        assert_eq!(back.swatches.spacing, 1);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_file_is_default() {
        let path = std::env::temp_dir().join("swatchy-definitely-missing/config.toml");
        let cfg = load(Some(&path)).unwrap();
        assert_eq!(cfg.palette.max_colors, 12);
        assert!(!path.exists());
    }
}
