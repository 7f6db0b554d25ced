use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::avatar::{render_avatar, PresentationDescriptor};
use crate::initials::{InitialOptions, NameInput};
use crate::style::StyleOptions;

#[derive(Debug, Deserialize, Serialize, Clone, JsonSchema)]
pub struct AvatarProfilesFile {
    pub profiles: HashMap<String, AvatarProfile>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, JsonSchema)]
pub struct AvatarProfile {
    #[serde(default)]
    pub style: StyleOptions,
    #[serde(default)]
    pub initials: InitialOptions,
}

#[derive(thiserror::Error, Debug)]
pub enum ProfileError {
    #[error("invalid profiles yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid profiles json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid profile `{profile}`: {reason}")]
    InvalidProfile { profile: String, reason: String },
    #[error("unknown profile: {0}")]
    UnknownProfile(String),
}

impl AvatarProfile {
    /// Checks values that would produce a degenerate box or empty initials.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(size) = self.style.size {
            if !size.is_finite() || size <= 0.0 {
                return Err(format!("size must be a positive number, got {size}"));
            }
        }
        if let Some(font_size) = self.style.font_size {
            if !font_size.is_finite() || font_size < 0.0 {
                return Err(format!(
                    "fontSize must be a non-negative number, got {font_size}"
                ));
            }
        }
        if self.initials.max_length == Some(0) {
            return Err("maxLength must be at least 1".to_string());
        }
        Ok(())
    }

    pub fn render<'a>(&self, name: impl Into<NameInput<'a>>) -> PresentationDescriptor {
        render_avatar(name, &self.style, &self.initials)
    }
}

#[derive(Debug, Clone)]
pub struct ProfileRegistry {
    profiles: HashMap<String, AvatarProfile>,
}

impl ProfileRegistry {
    pub fn from_yaml(contents: &str) -> Result<Self, ProfileError> {
        let file: AvatarProfilesFile = serde_yaml::from_str(contents)?;
        Self::from_file(file)
    }

    pub fn from_json(contents: &str) -> Result<Self, ProfileError> {
        let file: AvatarProfilesFile = serde_json::from_str(contents)?;
        Self::from_file(file)
    }

    fn from_file(file: AvatarProfilesFile) -> Result<Self, ProfileError> {
        for (name, profile) in &file.profiles {
            if let Err(reason) = profile.validate() {
                warn!(event = "profile_invalid", profile = %name, reason = %reason);
                return Err(ProfileError::InvalidProfile {
                    profile: name.clone(),
                    reason,
                });
            }
        }
        debug!(event = "profiles_loaded", count = file.profiles.len());
        Ok(Self {
            profiles: file.profiles,
        })
    }

    pub fn profile(&self, name: &str) -> Option<&AvatarProfile> {
        self.profiles.get(name)
    }

    pub fn profiles(&self) -> &HashMap<String, AvatarProfile> {
        &self.profiles
    }

    /// Profile names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.profiles.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn render<'a>(
        &self,
        profile: &str,
        name: impl Into<NameInput<'a>>,
    ) -> Result<PresentationDescriptor, ProfileError> {
        let Some(found) = self.profile(profile) else {
            return Err(ProfileError::UnknownProfile(profile.to_string()));
        };
        Ok(found.render(name))
    }
}
