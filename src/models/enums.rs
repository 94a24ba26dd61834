use serde::{Deserialize, Serialize};

use super::ModelError;

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(DocumentType {
    Financial => "financial",
    Strategic => "strategic",
    Market => "market",
    Legal => "legal",
    General => "general",
});

str_enum!(DocumentStatus {
    Analyzing => "analyzing",
    Analyzed => "analyzed",
    Failed => "failed",
});

str_enum!(Trend {
    Up => "up",
    Down => "down",
    Stable => "stable",
});

str_enum!(InsightPriority {
    High => "high",
    Medium => "medium",
    Low => "low",
});

impl DocumentType {
    pub const ALL: [DocumentType; 5] = [
        Self::Financial,
        Self::Strategic,
        Self::Market,
        Self::Legal,
        Self::General,
    ];

    /// Icon hint for the rendering layer.
    pub fn icon_key(&self) -> &'static str {
        match self {
            Self::Financial => "dollar-sign",
            Self::Strategic => "target",
            Self::Market => "users",
            Self::Legal => "shield",
            Self::General => "file-text",
        }
    }

    /// Color hint for the rendering layer.
    pub fn color_key(&self) -> &'static str {
        match self {
            Self::Financial => "green",
            Self::Strategic => "blue",
            Self::Market => "purple",
            Self::Legal => "red",
            Self::General => "gray",
        }
    }
}

impl DocumentStatus {
    /// Badge shown next to a document in the list.
    pub fn badge(&self) -> &'static str {
        match self {
            Self::Analyzed => "check",
            Self::Analyzing => "spinner",
            Self::Failed => "alert",
        }
    }

    /// No transition leaves a terminal status.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Analyzed | Self::Failed)
    }
}
