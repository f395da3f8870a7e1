//! Class tokens the template expects from its style sheet.
//!
//! By default the tokens are the literal authored names. When the host app
//! builds its CSS as a module, the bundler emits a JSON map from authored name
//! to generated name; [`StyleTokens::from_module_json`] resolves both tokens
//! through that map.

use serde::Deserialize;
use std::borrow::Cow;
use std::collections::BTreeMap;

pub const BASE_CLASS: &str = "component-name";
pub const DISABLED_CLASS: &str = "component-name--disabled";

#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Style module has no entry for `{0}`")]
    MissingToken(&'static str),
    #[error("Style token `{0}` resolves to an empty class")]
    EmptyToken(&'static str),
}

/// Generated (or literal) class names for the base and disabled tokens.
///
/// Deserializing goes through the same empty-token check as
/// [`StyleTokens::from_module_json`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawStyleTokens")]
pub struct StyleTokens {
    pub base: Cow<'static, str>,
    pub disabled: Cow<'static, str>,
}

impl Default for StyleTokens {
    fn default() -> Self {
        Self {
            base: Cow::Borrowed(BASE_CLASS),
            disabled: Cow::Borrowed(DISABLED_CLASS),
        }
    }
}

#[derive(Deserialize)]
struct RawStyleTokens {
    base: String,
    disabled: String,
}

impl TryFrom<RawStyleTokens> for StyleTokens {
    type Error = StyleError;

    fn try_from(raw: RawStyleTokens) -> Result<Self, Self::Error> {
        Ok(Self {
            base: non_empty("base", &raw.base)?,
            disabled: non_empty("disabled", &raw.disabled)?,
        })
    }
}

impl StyleTokens {
    /// Resolve both tokens through a CSS-module class map.
    ///
    /// Entries for other class names are ignored.
    ///
    /// # Errors
    /// Returns [`StyleError::Json`] when the input is not a string-to-string
    /// object, and [`StyleError::MissingToken`] or [`StyleError::EmptyToken`]
    /// when either authored token does not resolve to a usable class.
    pub fn from_module_json(json: &str) -> Result<Self, StyleError> {
        let map: BTreeMap<String, String> = serde_json::from_str(json)?;
        Ok(Self {
            base: lookup(&map, BASE_CLASS)?,
            disabled: lookup(&map, DISABLED_CLASS)?,
        })
    }

    /// Like [`Self::from_module_json`], but logs the failure and keeps the
    /// literal tokens.
    #[must_use]
    pub fn from_module_json_or_default(json: &str) -> Self {
        Self::from_module_json(json).unwrap_or_else(|e| {
            log::warn!("Failed to resolve style module, using literal classes: {e}");
            Self::default()
        })
    }
}

fn lookup(
    map: &BTreeMap<String, String>,
    name: &'static str,
) -> Result<Cow<'static, str>, StyleError> {
    let class = map.get(name).ok_or(StyleError::MissingToken(name))?;
    non_empty(name, class)
}

fn non_empty(name: &'static str, class: &str) -> Result<Cow<'static, str>, StyleError> {
    let class = class.trim();
    if class.is_empty() {
        return Err(StyleError::EmptyToken(name));
    }
    Ok(Cow::Owned(class.to_string()))
}
