use anyhow::{bail, Context, Result};
use std::path::Path;

use circle_line_transit::LineConfig;

/// Read a `{"stations": [...]}` line description from a JSON file
pub fn read_line_config(path: &Path) -> Result<LineConfig> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read line config {}", path.display()))?;

    parse_line_config(&data).with_context(|| format!("Invalid line config {}", path.display()))
}

pub fn parse_line_config(data: &str) -> Result<LineConfig> {
    let config: LineConfig = serde_json::from_str(data).context("Failed to parse JSON")?;
    Ok(config)
}

/// Pick the line to simulate: config file first, then `--stations`, then the default
pub fn resolve_line_config(config: Option<&Path>, stations: &[String]) -> Result<LineConfig> {
    match (config, stations.is_empty()) {
        (Some(_), false) => bail!("--config and --stations cannot be used together"),
        (Some(path), true) => read_line_config(path),
        (None, false) => Ok(LineConfig::from_stations(stations.iter().map(|s| s.trim()))),
        (None, true) => Ok(LineConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_config() {
        let config = parse_line_config(r#"{"stations": ["North", "East", "South", "West"]}"#).unwrap();
        assert_eq!(config.stations.len(), 4);
        assert_eq!(config.stations[2], "South");
    }

    #[test]
    fn test_parse_line_config_rejects_garbage() {
        assert!(parse_line_config("stations: A, B").is_err());
        assert!(parse_line_config(r#"{"stops": ["A"]}"#).is_err());
    }

    #[test]
    fn test_resolve_prefers_flag_over_default() {
        let stations = vec!["X".to_string(), " Y".to_string()];
        let config = resolve_line_config(None, &stations).unwrap();
        assert_eq!(config, LineConfig::from_stations(["X", "Y"]));

        let config = resolve_line_config(None, &[]).unwrap();
        assert_eq!(config, LineConfig::default());
    }

    #[test]
    fn test_resolve_rejects_both_sources() {
        let stations = vec!["X".to_string()];
        assert!(resolve_line_config(Some(Path::new("line.json")), &stations).is_err());
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_line_config(Path::new("/nonexistent/line.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read line config"));
    }
}
