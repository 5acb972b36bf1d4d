//! Scene parameter vocabulary and the sparse selection record.
//!
//! [`ParameterCategory`] is the closed set of categories a scene can be
//! tagged with. Every category carries a label and an ordered list of allowed
//! values in the process-wide [`CATEGORY_DEFINITIONS`] table. The canonical
//! iteration order is [`ParameterCategory::ALL`]; manual assembly, the AI
//! instruction block and validation all walk it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Category enumeration
// ---------------------------------------------------------------------------

/// A parameter category. Serialized in camelCase (`timeOfDay`, `cameraAngle`).
///
/// Variants are declared in canonical order so the derived `Ord` agrees with
/// [`ParameterCategory::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterCategory {
    Genre,
    Landscape,
    TimeOfDay,
    Weather,
    Lighting,
    CameraAngle,
    Framing,
    Mood,
    Tone,
    CameraMovement,
    MotionStyle,
    AspectRatio,
    Duration,
    ColorGrading,
    FilmStock,
    Lens,
    Depth,
    Transition,
    Pacing,
    VisualStyle,
    Soundscape,
    Platform,
}

impl ParameterCategory {
    /// Canonical order of all categories.
    pub const ALL: [ParameterCategory; 22] = [
        Self::Genre,
        Self::Landscape,
        Self::TimeOfDay,
        Self::Weather,
        Self::Lighting,
        Self::CameraAngle,
        Self::Framing,
        Self::Mood,
        Self::Tone,
        Self::CameraMovement,
        Self::MotionStyle,
        Self::AspectRatio,
        Self::Duration,
        Self::ColorGrading,
        Self::FilmStock,
        Self::Lens,
        Self::Depth,
        Self::Transition,
        Self::Pacing,
        Self::VisualStyle,
        Self::Soundscape,
        Self::Platform,
    ];

    /// Position of this category in the canonical order.
    pub fn position(self) -> usize {
        self as usize
    }

    /// Static definition (key, label, allowed values) for this category.
    pub fn definition(self) -> &'static CategoryDefinition {
        &CATEGORY_DEFINITIONS[self.position()]
    }

    /// Wire key, e.g. `timeOfDay`.
    pub fn as_str(self) -> &'static str {
        self.definition().key
    }

    /// Label used in assembled prompts and instruction blocks.
    pub fn label(self) -> &'static str {
        self.definition().label
    }

    /// Ordered list of allowed values.
    pub fn values(self) -> &'static [&'static str] {
        self.definition().values
    }

    /// Look up a category by its wire key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == key)
    }

    /// Whether `value` is one of this category's allowed values.
    pub fn allows(self, value: &str) -> bool {
        self.values().contains(&value)
    }
}

impl std::fmt::Display for ParameterCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Category table
// ---------------------------------------------------------------------------

/// Static description of one parameter category.
#[derive(Debug, Serialize)]
pub struct CategoryDefinition {
    pub key: &'static str,
    pub label: &'static str,
    pub values: &'static [&'static str],
}

/// Category table indexed by [`ParameterCategory::position`].
pub static CATEGORY_DEFINITIONS: [CategoryDefinition; 22] = [
    CategoryDefinition {
        key: "genre",
        label: "Genre",
        values: &[
            "Documentary",
            "Commercial",
            "Cinematic",
            "Vlog",
            "Tutorial",
            "Music Video",
            "Short Film",
            "Animation",
            "Experimental",
        ],
    },
    CategoryDefinition {
        key: "landscape",
        label: "Setting",
        values: &[
            "Urban",
            "Rural",
            "Mountain",
            "Beach",
            "Forest",
            "Desert",
            "Indoor",
            "Studio",
            "Cityscape",
            "Countryside",
            "Underwater",
            "Space",
        ],
    },
    CategoryDefinition {
        key: "timeOfDay",
        label: "Time of Day",
        values: &[
            "Dawn",
            "Morning",
            "Noon",
            "Afternoon",
            "Golden Hour",
            "Dusk",
            "Night",
            "Blue Hour",
            "Twilight",
            "Midnight",
        ],
    },
    CategoryDefinition {
        key: "weather",
        label: "Weather",
        values: &[
            "Clear", "Cloudy", "Rainy", "Snowy", "Foggy", "Stormy", "Overcast", "Sunny", "Misty",
            "Windy", "Humid",
        ],
    },
    CategoryDefinition {
        key: "lighting",
        label: "Lighting",
        values: &[
            "Natural",
            "Studio",
            "Low Key",
            "High Key",
            "Silhouette",
            "Backlit",
            "Soft",
            "Hard",
            "Dramatic",
            "Ambient",
            "Neon",
            "Candlelit",
        ],
    },
    CategoryDefinition {
        key: "cameraAngle",
        label: "Camera Angle",
        values: &[
            "Eye Level",
            "Low Angle",
            "High Angle",
            "Bird's Eye",
            "Dutch Angle",
            "Over-the-Shoulder",
            "POV",
            "Worm's Eye",
            "Aerial",
        ],
    },
    CategoryDefinition {
        key: "framing",
        label: "Framing",
        values: &[
            "Close-up",
            "Medium Shot",
            "Wide Shot",
            "Extreme Close-up",
            "Full Shot",
            "Two Shot",
            "Establishing",
            "Cowboy Shot",
            "Long Shot",
        ],
    },
    CategoryDefinition {
        key: "mood",
        label: "Mood",
        values: &[
            "Happy",
            "Sad",
            "Tense",
            "Calm",
            "Exciting",
            "Melancholic",
            "Hopeful",
            "Dark",
            "Joyful",
            "Mysterious",
            "Romantic",
            "Intense",
        ],
    },
    CategoryDefinition {
        key: "tone",
        label: "Tone",
        values: &[
            "Professional",
            "Casual",
            "Dramatic",
            "Upbeat",
            "Serene",
            "Energetic",
            "Mysterious",
            "Playful",
            "Epic",
            "Intimate",
            "Whimsical",
            "Dark",
        ],
    },
    CategoryDefinition {
        key: "cameraMovement",
        label: "Camera Movement",
        values: &[
            "Static",
            "Pan Left",
            "Pan Right",
            "Tilt Up",
            "Tilt Down",
            "Dolly In",
            "Dolly Out",
            "Tracking Shot",
            "Crane Up",
            "Crane Down",
            "Handheld",
            "Steadicam",
        ],
    },
    CategoryDefinition {
        key: "motionStyle",
        label: "Motion Style",
        values: &[
            "Slow Motion",
            "Normal Speed",
            "Time Lapse",
            "Hyperlapse",
            "Stop Motion",
            "Smooth",
            "Dynamic",
            "Fast Paced",
        ],
    },
    CategoryDefinition {
        key: "aspectRatio",
        label: "Aspect Ratio",
        values: &[
            "16:9", "9:16", "4:3", "1:1", "21:9", "2.39:1", "Vertical", "Square",
        ],
    },
    CategoryDefinition {
        key: "duration",
        label: "Duration",
        values: &[
            "5 seconds",
            "10 seconds",
            "15 seconds",
            "30 seconds",
            "1 minute",
            "2 minutes",
            "5 minutes",
        ],
    },
    CategoryDefinition {
        key: "colorGrading",
        label: "Color Grading",
        values: &[
            "Natural",
            "Warm",
            "Cool",
            "Desaturated",
            "High Contrast",
            "Vintage",
            "Cinematic",
            "Noir",
            "Pastel",
            "Vibrant",
        ],
    },
    CategoryDefinition {
        key: "filmStock",
        label: "Film Stock",
        values: &[
            "Digital",
            "35mm",
            "16mm",
            "8mm",
            "IMAX",
            "Anamorphic",
            "Super 8",
            "VHS",
        ],
    },
    CategoryDefinition {
        key: "lens",
        label: "Lens",
        values: &[
            "Wide Angle",
            "Standard",
            "Telephoto",
            "Fisheye",
            "Macro",
            "Tilt-Shift",
            "Anamorphic",
        ],
    },
    CategoryDefinition {
        key: "depth",
        label: "Depth of Field",
        values: &[
            "Shallow Depth of Field",
            "Deep Focus",
            "Rack Focus",
            "Split Focus",
            "Bokeh",
        ],
    },
    CategoryDefinition {
        key: "transition",
        label: "Transition",
        values: &[
            "Cut",
            "Fade",
            "Dissolve",
            "Wipe",
            "Match Cut",
            "J-Cut",
            "L-Cut",
            "Crossfade",
        ],
    },
    CategoryDefinition {
        key: "pacing",
        label: "Pacing",
        values: &[
            "Slow",
            "Medium",
            "Fast",
            "Rhythmic",
            "Contemplative",
            "Energetic",
            "Urgent",
        ],
    },
    CategoryDefinition {
        key: "visualStyle",
        label: "Visual Style",
        values: &[
            "Realistic",
            "Stylized",
            "Abstract",
            "Minimalist",
            "Maximalist",
            "Surreal",
            "Photorealistic",
            "Artistic",
        ],
    },
    CategoryDefinition {
        key: "soundscape",
        label: "Soundscape",
        values: &[
            "Ambient",
            "Silent",
            "Dialogue Heavy",
            "Music Driven",
            "Sound Effects",
            "Voiceover",
            "Diegetic",
            "Non-Diegetic",
        ],
    },
    CategoryDefinition {
        key: "platform",
        label: "Target Platform",
        values: &[
            "YouTube",
            "TikTok",
            "Instagram Reels",
            "Facebook",
            "LinkedIn",
            "Twitter",
            "Veo 3",
            "Sora 2",
            "Runway",
            "General",
        ],
    },
];

// ---------------------------------------------------------------------------
// ParameterSet
// ---------------------------------------------------------------------------

/// Sparse category -> value selection for one scene.
///
/// A key is present only when a value has been selected. Empty strings and
/// JSON `null` are treated as "unset" on the way in, so an empty value is
/// never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<ParameterCategory, Option<String>>")]
pub struct ParameterSet(BTreeMap<ParameterCategory, String>);

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: ParameterCategory) -> Option<&str> {
        self.0.get(&category).map(String::as_str)
    }

    /// Select a value. An empty value clears the category instead.
    pub fn set(&mut self, category: ParameterCategory, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.0.remove(&category);
        } else {
            self.0.insert(category, value);
        }
    }

    pub fn remove(&mut self, category: ParameterCategory) -> Option<String> {
        self.0.remove(&category)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Present entries in canonical category order.
    pub fn iter(&self) -> impl Iterator<Item = (ParameterCategory, &str)> + '_ {
        ParameterCategory::ALL
            .into_iter()
            .filter_map(|category| self.get(category).map(|value| (category, value)))
    }
}

impl From<BTreeMap<ParameterCategory, Option<String>>> for ParameterSet {
    fn from(raw: BTreeMap<ParameterCategory, Option<String>>) -> Self {
        let mut set = Self::new();
        for (category, value) in raw {
            if let Some(value) = value {
                set.set(category, value);
            }
        }
        set
    }
}

impl<S: Into<String>> FromIterator<(ParameterCategory, S)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (ParameterCategory, S)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (category, value) in iter {
            set.set(category, value);
        }
        set
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Check that every present value is one of its category's allowed values.
pub fn validate_parameter_set(parameters: &ParameterSet) -> Result<(), CoreError> {
    for (category, value) in parameters.iter() {
        if !category.allows(value) {
            return Err(CoreError::Validation(format!(
                "Invalid value '{value}' for parameter '{category}'. Must be one of: {}",
                category.values().join(", ")
            )));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
