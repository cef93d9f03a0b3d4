//! Command implementations.
//!
//! Each command returns its output as a string so it can be tested without
//! capturing stdout.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use lustre::{validate, Customization, CssVariables, Field, FieldKind, Resolver, PRESETS};
use serde::Serialize;

use crate::swatch::swatch;

/// Loads `path`, or an empty customization when no path is given.
pub fn load(path: Option<&Path>) -> Result<Customization> {
    match path {
        Some(p) => Customization::from_file(p)
            .with_context(|| format!("loading customization from {}", p.display())),
        None => Ok(Customization::new()),
    }
}

fn resolved_value(r: &Resolver<'_>, field: Field) -> String {
    match field.kind() {
        FieldKind::Color | FieldKind::Text => r.text(field).to_string(),
        FieldKind::Flag => r.flag(field).to_string(),
        FieldKind::Integer | FieldKind::Percent | FieldKind::Float => r.length(field),
    }
}

/// Resolves the requested fields, or every schema field when none are named.
pub fn resolve(customization: &Customization, keys: &[String], json: bool) -> Result<String> {
    let fields = if keys.is_empty() {
        Field::all().collect::<Vec<_>>()
    } else {
        keys.iter()
            .map(|k| Field::from_key(k).with_context(|| format!("unknown field '{}'", k)))
            .collect::<Result<Vec<_>>>()?
    };

    let r = customization.resolver();
    let values: Vec<(Field, String)> = fields
        .into_iter()
        .map(|f| (f, resolved_value(&r, f)))
        .collect();

    if json {
        let map: BTreeMap<&str, &str> = values
            .iter()
            .map(|(f, v)| (f.key(), v.as_str()))
            .collect();
        return Ok(serde_json::to_string_pretty(&map)?);
    }

    let width = values.iter().map(|(f, _)| f.key().len()).max().unwrap_or(0);
    let mut out = String::new();
    for (field, value) in &values {
        let shown = if field.kind() == FieldKind::Color {
            swatch(value)
        } else {
            value.clone()
        };
        out.push_str(&format!("{:<width$}  {}\n", field.key(), shown, width = width));
    }
    Ok(out)
}

/// Renders CSS custom properties, optionally applying a preset first.
pub fn css(customization: &Customization, selector: &str, preset: Option<&str>) -> Result<String> {
    let customization = match preset {
        Some(key) => customization.clone().with_preset(key)?,
        None => customization.clone(),
    };
    Ok(CssVariables::new(&customization).selector(selector).to_string())
}

#[derive(Serialize)]
struct DiagnosticRecord {
    field: &'static str,
    value: String,
    message: String,
}

/// Checks a customization. Returns the report and whether it was clean.
pub fn check(customization: &Customization, json: bool) -> Result<(String, bool)> {
    let found = validate::check(customization);
    let clean = found.is_empty();
    for d in &found {
        tracing::info!(field = d.field.key(), value = %d.value, "diagnostic");
    }

    if json {
        let records: Vec<DiagnosticRecord> = found
            .iter()
            .map(|d| DiagnosticRecord {
                field: d.field.key(),
                value: d.value.clone(),
                message: d.to_string(),
            })
            .collect();
        return Ok((serde_json::to_string_pretty(&records)?, clean));
    }

    if clean {
        return Ok(("no problems found\n".to_string(), true));
    }
    let mut out = String::new();
    for d in &found {
        out.push_str(&format!("{}\n", d));
    }
    out.push_str(&format!("{} problem(s) found\n", found.len()));
    Ok((out, false))
}

#[derive(Serialize)]
struct PresetRecord {
    key: &'static str,
    name: &'static str,
    primary: &'static str,
    secondary: &'static str,
    background: &'static str,
    text: &'static str,
}

/// Lists the built-in color presets.
pub fn presets(json: bool) -> Result<String> {
    if json {
        let records: Vec<PresetRecord> = PRESETS
            .iter()
            .map(|p| PresetRecord {
                key: p.key,
                name: p.name,
                primary: p.primary,
                secondary: p.secondary,
                background: p.background,
                text: p.text,
            })
            .collect();
        return Ok(serde_json::to_string_pretty(&records)?);
    }

    let mut out = String::new();
    for p in PRESETS {
        out.push_str(&format!("{:<10}", p.key));
        for (_, color) in p.colors() {
            out.push_str(&format!("  {}", swatch(color)));
        }
        out.push('\n');
    }
    Ok(out)
}

/// Rejects a selector that would produce a broken rule.
pub fn validate_selector(selector: &str) -> Result<()> {
    if selector.trim().is_empty() || selector.contains(&['{', '}'][..]) {
        bail!("invalid selector '{}'", selector);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Customization {
        Customization::new()
            .with("primaryColor", "#ff0000")
            .with("borderRadius", "abc")
            .with("showRating", "false")
    }

    #[test]
    fn test_resolve_selected_fields_json() {
        let keys = vec![
            "borderRadius".to_string(),
            "showRating".to_string(),
            "hoverScale".to_string(),
        ];
        let out = resolve(&sample(), &keys, true).unwrap();
        let parsed: BTreeMap<String, String> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["borderRadius"], "8px");
        assert_eq!(parsed["showRating"], "false");
        assert_eq!(parsed["hoverScale"], "1.05");
    }

    #[test]
    fn test_resolve_unknown_field() {
        let err = resolve(&sample(), &["nope".to_string()], false).unwrap_err();
        assert!(err.to_string().contains("unknown field 'nope'"));
    }

    #[test]
    fn test_resolve_all_fields_text() {
        let out = resolve(&sample(), &[], false).unwrap();
        assert_eq!(out.lines().count(), Field::all().count());
        assert!(out.contains("#ff0000"));
    }

    #[test]
    fn test_css_with_preset() {
        let out = css(&sample(), ":root", Some("sunset")).unwrap();
        assert!(out.contains("--primary-color: #f97316;"));
        assert!(out.contains("--border-radius: 8px;"));
    }

    #[test]
    fn test_css_unknown_preset() {
        assert!(css(&sample(), ":root", Some("neon")).is_err());
    }

    #[test]
    fn test_check_reports_problems() {
        let (out, clean) = check(&sample(), false).unwrap();
        assert!(!clean);
        assert!(out.contains("borderRadius"));
        assert!(out.ends_with("1 problem(s) found\n"));
    }

    #[test]
    fn test_check_clean() {
        let (out, clean) = check(&Customization::defaults(), false).unwrap();
        assert!(clean);
        assert_eq!(out, "no problems found\n");
    }

    #[test]
    fn test_check_json() {
        let (out, _) = check(&sample(), true).unwrap();
        let parsed: Vec<serde_json::Value> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0]["field"], "borderRadius");
    }

    #[test]
    fn test_presets_json() {
        let out = presets(true).unwrap();
        let parsed: Vec<serde_json::Value> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed.len(), PRESETS.len());
        assert_eq!(parsed[0]["key"], "terminal");
    }

    #[test]
    fn test_presets_text_lists_each() {
        let out = presets(false).unwrap();
        for p in PRESETS {
            assert!(out.contains(p.key));
            assert!(out.contains(p.primary));
        }
    }

    #[test]
    fn test_selector_validation() {
        assert!(validate_selector(".card").is_ok());
        assert!(validate_selector("").is_err());
        assert!(validate_selector("a { b").is_err());
    }

    #[test]
    fn test_load_without_path() {
        assert!(load(None).unwrap().is_empty());
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("c.yaml");
        std::fs::write(&path, "glassOpacity: 30\n").unwrap();
        let c = load(Some(&path)).unwrap();
        assert_eq!(c.get("glassOpacity"), Some("30"));
    }

    #[test]
    fn test_load_error_has_context() {
        let err = load(Some(Path::new("/definitely/missing.yaml"))).unwrap_err();
        assert!(err.to_string().contains("loading customization"));
    }
}
