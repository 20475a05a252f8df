//! Theme and accent preference commands.

use thiserror::Error;

use sundial_core::{Accent, Theme};
use sundial_storefront::prefs::Preferences;
use sundial_storefront::{FileStore, StorefrontConfig};

/// Errors from preference commands.
#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("Unknown theme: {0}. Valid themes: light, dark")]
    UnknownTheme(String),

    #[error("Unknown accent: {0}. Valid accents: gold, blue, emerald, rose")]
    UnknownAccent(String),
}

fn open_prefs() -> Result<Preferences<FileStore>, Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    Ok(Preferences::new(FileStore::open(&config.store_path)))
}

/// Show or set the theme.
#[allow(clippy::print_stdout)]
pub fn theme(value: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let mut prefs = open_prefs()?;
    match value {
        None => match prefs.theme() {
            Theme::Light => println!("light"),
            Theme::Dark => println!("dark"),
        },
        Some("light") => prefs.set_theme(Theme::Light)?,
        Some("dark") => prefs.set_theme(Theme::Dark)?,
        Some(other) => return Err(PrefsError::UnknownTheme(other.to_string()).into()),
    }
    Ok(())
}

/// Show or set the accent color.
#[allow(clippy::print_stdout)]
pub fn accent(value: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let mut prefs = open_prefs()?;
    match value {
        None => println!("{}", prefs.accent()),
        Some(name) => {
            let accent = Accent::ALL
                .into_iter()
                .find(|accent| accent.as_str() == name)
                .ok_or_else(|| PrefsError::UnknownAccent(name.to_string()))?;
            prefs.set_accent(accent)?;
        }
    }
    Ok(())
}
