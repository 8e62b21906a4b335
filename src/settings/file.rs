//! Settings file persistence.
//!
//! One line: `length,min_special,mode,alphabet,split,max_attempts`. Inside
//! the alphabet `,` and `|` are escaped with a leading `|`; an empty
//! `max_attempts` means uncapped.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::Settings;
use crate::error::SettingsError;
use crate::pass::Alphabet;
use crate::rand::EntropyMode;

const FIELDS: usize = 6;

pub fn save(settings: &Settings, path: &Path) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let alphabet = settings
        .alphabet
        .as_str()
        .chars()
        .map(|c| match c {
            ',' => "|,".to_string(),
            '|' => "||".to_string(),
            _ => c.to_string(),
        })
        .collect::<String>();

    let data = format!(
        "{},{},{},{},{},{}\n",
        settings.length,
        settings.min_special,
        settings.mode.name(),
        alphabet,
        settings.alphabet.split(),
        settings.max_attempts.map(|n| n.to_string()).unwrap_or_default(),
    );

    file.write_all(data.as_bytes())?;
    Ok(())
}

pub fn load(settings: &mut Settings, path: &Path) -> Result<(), SettingsError> {
    if !path.exists() {
        return save(settings, path);
    }

    let content = fs::read_to_string(path)?;
    let line = content.lines().next().unwrap_or("").trim();
    if line.is_empty() {
        return save(settings, path);
    }

    let parts = split_escaped(line, ',');
    if parts.len() != FIELDS {
        return Err(SettingsError::Parse {
            field: "line",
            value: line.to_string(),
        });
    }

    settings.length = parse_field("length", &parts[0])?;
    settings.min_special = parse_field("min_special", &parts[1])?;
    settings.mode = EntropyMode::from_name(&parts[2]).ok_or_else(|| SettingsError::Parse {
        field: "mode",
        value: parts[2].clone(),
    })?;
    let split = parse_field("split", &parts[4])?;
    settings.alphabet = Alphabet::new(&parts[3], split)?;
    settings.max_attempts = match parts[5].as_str() {
        "" => None,
        raw => Some(parse_field("max_attempts", raw)?),
    };

    Ok(())
}

pub fn default_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/quotapass/settings")
}

fn parse_field<T: std::str::FromStr>(field: &'static str, raw: &str) -> Result<T, SettingsError> {
    raw.trim().parse().map_err(|_| SettingsError::Parse {
        field,
        value: raw.to_string(),
    })
}

/// Splits on `delimiter`, treating the character after `|` as literal.
fn split_escaped(s: &str, delimiter: char) -> Vec<String> {
    let mut parts = vec![];
    let mut current = String::new();
    let mut escape_next = false;

    for c in s.chars() {
        if escape_next {
            current.push(c);
            escape_next = false;
        } else if c == '|' {
            escape_next = true;
        } else if c == delimiter {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }

    parts.push(current);
    parts
}
