//! Media resource categories and upload constants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Upload profile used when none is configured.
pub const DEFAULT_UPLOAD_PRESET: &str = "portfolio_uploads";

/// Destination folder used when none is configured.
pub const DEFAULT_UPLOAD_FOLDER: &str = "portfolio_uploads";

/// Resource category the media CDN files an upload under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    #[default]
    Image,
    Video,
    Raw,
}

impl ResourceType {
    /// Pick the category from a MIME type: `image/*`, `video/*`, else raw.
    pub fn from_mime(mime: &str) -> Self {
        let mime = mime.trim().to_ascii_lowercase();
        if mime.starts_with("image/") {
            ResourceType::Image
        } else if mime.starts_with("video/") {
            ResourceType::Video
        } else {
            ResourceType::Raw
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ResourceType::Image => "image",
            ResourceType::Video => "video",
            ResourceType::Raw => "raw",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image" => Ok(ResourceType::Image),
            "video" => Ok(ResourceType::Video),
            "raw" => Ok(ResourceType::Raw),
            other => Err(CoreError::Validation(format!(
                "Invalid resource type '{other}'. Must be one of: image, video, raw"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_prefix_picks_category() {
        assert_eq!(ResourceType::from_mime("image/jpeg"), ResourceType::Image);
        assert_eq!(ResourceType::from_mime("Video/MP4"), ResourceType::Video);
        assert_eq!(ResourceType::from_mime("application/pdf"), ResourceType::Raw);
        assert_eq!(ResourceType::from_mime(""), ResourceType::Raw);
    }

    #[test]
    fn parses_known_names_only() {
        assert_eq!("video".parse::<ResourceType>().unwrap(), ResourceType::Video);
        assert!("audio".parse::<ResourceType>().is_err());
    }
}
