use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::schedule::clock::parse_duration;

// Factory programs with their advertised runtimes; "cotton" is the
// prefill the appliance panel suggests by default.
pub const BUILTIN_PROGRAMS: &[(&str, &str)] = &[
    ("cotton", "3:39"),
    ("cotton-eco", "2:59"),
    ("minimum-iron", "2:09"),
    ("delicates", "1:39"),
    ("silks", "0:41"),
    ("woollens", "0:39"),
    ("quick-power-wash", "0:49"),
    ("express", "0:20"),
];

#[derive(Debug, Clone)]
pub struct ProgramPreset {
    pub label: String,
    pub duration_text: String,
    pub duration_minutes: i32,
}

pub fn builtin_catalog() -> Result<Vec<ProgramPreset>> {
    build_catalog(
        BUILTIN_PROGRAMS
            .iter()
            .map(|(label, duration)| (label.to_string(), duration.to_string())),
    )
}

pub fn find_program<'a>(catalog: &'a [ProgramPreset], label: &str) -> Option<&'a ProgramPreset> {
    catalog
        .iter()
        .find(|preset| preset.label.eq_ignore_ascii_case(label))
}

pub fn load_program_catalog(path: &Path) -> Result<Vec<ProgramPreset>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("unable to read program catalog {}", path.display()))?;
    parse_program_catalog_text(&content)
}

pub fn parse_program_catalog_text(content: &str) -> Result<Vec<ProgramPreset>> {
    let raw = serde_json::from_str::<ProgramCatalogFile>(content).map_err(|err| {
        let line = err.line();
        let column = err.column();
        anyhow::anyhow!("invalid JSON at line {line}, column {column}: {err}")
    })?;

    if raw.version != 1 {
        bail!(
            "unsupported program catalog version {}; expected version 1",
            raw.version
        );
    }

    build_catalog(
        raw.programs
            .into_iter()
            .map(|program| (program.label, program.duration)),
    )
}

fn build_catalog(entries: impl Iterator<Item = (String, String)>) -> Result<Vec<ProgramPreset>> {
    let mut seen = HashSet::new();
    let mut catalog = Vec::new();
    for (label, duration_text) in entries {
        if label.trim().is_empty() {
            bail!("program labels must not be empty");
        }
        if !seen.insert(label.to_ascii_lowercase()) {
            bail!("duplicate program label found: {label}");
        }
        let duration_minutes = parse_duration(&duration_text).with_context(|| {
            format!("program '{label}' has invalid duration '{duration_text}', expected H:MM")
        })?;
        catalog.push(ProgramPreset {
            label,
            duration_text,
            duration_minutes,
        });
    }
    Ok(catalog)
}

#[derive(Debug, Deserialize)]
struct ProgramCatalogFile {
    version: u32,
    programs: Vec<ProgramEntryFile>,
}

#[derive(Debug, Deserialize)]
struct ProgramEntryFile {
    label: String,
    duration: String,
}
