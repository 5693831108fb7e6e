use crate::error::{Result, ThemeError};
use crate::scheme::{ColorScheme, Composer, UiSlot};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    pub color_scheme: ColorScheme,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub is_system: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    pub version: u32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Lowercase ASCII alphanumerics with every other run collapsed to `-`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

fn checked_slug(name: &str) -> Result<String> {
    let slug = slugify(name);
    if slug.is_empty() {
        return Err(ThemeError::InvalidThemeName(name.to_string()));
    }
    Ok(slug)
}

impl Theme {
    pub fn new(name: &str, primary: &str, secondary: &str) -> Result<Self> {
        Self::with_composer(&Composer::default(), name, primary, secondary)
    }

    pub fn with_composer(
        composer: &Composer,
        name: &str,
        primary: &str,
        secondary: &str,
    ) -> Result<Self> {
        let slug = checked_slug(name)?;
        let color_scheme = composer.compose(primary, secondary, None)?;

        tracing::info!("created theme '{slug}'");
        Ok(Self {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
            slug,
            description: String::new(),
            color_scheme,
            is_default: false,
            is_system: false,
            tags: Vec::new(),
            version: 1,
            is_active: true,
            created_at: Utc::now(),
        })
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn system(mut self, is_system: bool) -> Self {
        self.is_system = is_system;
        self
    }

    /// Renames the theme and re-derives its slug. System themes keep their
    /// identity.
    pub fn rename(&mut self, name: &str) -> Result<()> {
        if self.is_system {
            tracing::warn!("refused to rename system theme '{}'", self.slug);
            return Err(ThemeError::SystemThemeLocked(self.slug.clone()));
        }

        self.slug = checked_slug(name)?;
        self.name = name.trim().to_string();
        Ok(())
    }

    /// Recomposes the scheme from new base colors, keeping UI overrides.
    pub fn recolor(&mut self, primary: &str, secondary: &str) -> Result<()> {
        self.recolor_with(&Composer::default(), primary, secondary)
    }

    pub fn recolor_with(&mut self, composer: &Composer, primary: &str, secondary: &str) -> Result<()> {
        self.color_scheme = composer.compose(primary, secondary, Some(&self.color_scheme))?;
        self.version += 1;
        tracing::info!("recolored theme '{}' (version {})", self.slug, self.version);
        Ok(())
    }

    pub fn set_ui_color(&mut self, slot: UiSlot, value: &str) -> Result<()> {
        self.color_scheme.set_ui_color(slot, value)?;
        self.version += 1;
        Ok(())
    }
}
