//! Text roles and the role information produced by the classifier.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Requested lengths above this are treated as corrupted.
const MAX_HOLDER_LENGTH: usize = 1000;

/// The semantic role a piece of text plays on a score page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextRole {
    /// No role known.
    Unknown,
    /// (Part of) lyrics.
    Lyrics,
    /// Title of the opus.
    Title,
    /// Playing instruction.
    Direction,
    /// Number for this opus.
    Number,
    /// Name for the part.
    Name,
    /// A creator (composer, etc.).
    Creator,
    /// Copyright notice.
    Rights,
    /// Chord mark.
    Chord,
}

impl TextRole {
    pub fn name(&self) -> &'static str {
        match self {
            TextRole::Unknown => "Unknown",
            TextRole::Lyrics => "Lyrics",
            TextRole::Title => "Title",
            TextRole::Direction => "Direction",
            TextRole::Number => "Number",
            TextRole::Name => "Name",
            TextRole::Creator => "Creator",
            TextRole::Rights => "Rights",
            TextRole::Chord => "Chord",
        }
    }

    /// Forge a string to stand in for the real text value.
    ///
    /// The result is `len` characters long: the role name repeated between
    /// brackets, e.g. `[Title-Tit]`. The filler is always [`TextRole::name`], so
    /// the unknown role gives `[Unknown-Un]`. Abnormally large lengths yield a
    /// short `<<len>>` marker instead.
    pub fn string_holder(&self, len: usize) -> String {
        if len > MAX_HOLDER_LENGTH {
            tracing::warn!(len, role = self.name(), "abnormal text length");
            return format!("<<{len}>>");
        }

        let interior = len.saturating_sub(1);
        let mut holder = String::with_capacity(len + self.name().len() + 1);
        holder.push('[');
        while holder.len() < interior {
            holder.push_str(self.name());
            holder.push('-');
        }
        holder.truncate(interior);
        holder.push(']');
        holder
    }
}

impl fmt::Display for TextRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind of creator credited by a `Creator` text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreatorType {
    Arranger,
    Composer,
    Lyricist,
    Poet,
    Transcriber,
    Translator,
}

impl fmt::Display for CreatorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CreatorType::Arranger => "arranger",
            CreatorType::Composer => "composer",
            CreatorType::Lyricist => "lyricist",
            CreatorType::Poet => "poet",
            CreatorType::Transcriber => "transcriber",
            CreatorType::Translator => "translator",
        };
        f.write_str(s)
    }
}

/// A role plus, for creators only, the kind of creator.
///
/// Fields are private: a creator kind never comes with another role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRoleInfo")]
pub struct RoleInfo {
    role: TextRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    creator: Option<CreatorType>,
}

/// Unchecked wire form of [`RoleInfo`].
#[derive(Deserialize)]
struct RawRoleInfo {
    role: TextRole,
    #[serde(default)]
    creator: Option<CreatorType>,
}

impl TryFrom<RawRoleInfo> for RoleInfo {
    type Error = String;

    fn try_from(raw: RawRoleInfo) -> Result<Self, Self::Error> {
        match (raw.role, raw.creator) {
            (TextRole::Creator, Some(kind)) => Ok(Self::creator(kind)),
            (role, None) => Ok(Self::new(role)),
            (role, Some(kind)) => Err(format!("creator type {kind} given for role {role}")),
        }
    }
}

impl RoleInfo {
    /// Role without sub-kind. A `Creator` built this way has no known type.
    pub const fn new(role: TextRole) -> Self {
        Self {
            role,
            creator: None,
        }
    }

    pub const fn creator(kind: CreatorType) -> Self {
        Self {
            role: TextRole::Creator,
            creator: Some(kind),
        }
    }

    pub const fn unknown() -> Self {
        Self::new(TextRole::Unknown)
    }

    pub fn role(&self) -> TextRole {
        self.role
    }

    /// Kind of creator, only ever set for the `Creator` role.
    pub fn creator_type(&self) -> Option<CreatorType> {
        self.creator
    }

    pub fn is_unknown(&self) -> bool {
        self.role == TextRole::Unknown
    }
}

impl Default for RoleInfo {
    fn default() -> Self {
        Self::unknown()
    }
}

impl From<TextRole> for RoleInfo {
    fn from(role: TextRole) -> Self {
        Self::new(role)
    }
}

impl fmt::Display for RoleInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.creator {
            Some(kind) => write!(f, "{}({kind})", self.role),
            None => write!(f, "{}", self.role),
        }
    }
}
