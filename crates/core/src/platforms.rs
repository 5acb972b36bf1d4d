//! AI video platforms a finished prompt can be sent to.

use serde::Serialize;

/// An external video-generation platform.
#[derive(Debug, Serialize)]
pub struct ExportPlatform {
    pub id: &'static str,
    pub name: &'static str,
    pub url: &'static str,
    pub description: &'static str,
}

/// Known export platforms, in display order.
pub static EXPORT_PLATFORMS: [ExportPlatform; 5] = [
    ExportPlatform {
        id: "veo3",
        name: "Google Veo 3",
        url: "https://deepmind.google/technologies/veo/",
        description: "Latest AI video generation model from Google",
    },
    ExportPlatform {
        id: "sora2",
        name: "OpenAI Sora 2",
        url: "https://openai.com/sora",
        description: "Advanced text-to-video AI model",
    },
    ExportPlatform {
        id: "runway",
        name: "Runway Gen-3",
        url: "https://runwayml.com/",
        description: "Professional AI video generation",
    },
    ExportPlatform {
        id: "pika",
        name: "Pika Labs",
        url: "https://pika.art/",
        description: "Creative video generation platform",
    },
    ExportPlatform {
        id: "stability",
        name: "Stability AI",
        url: "https://stability.ai/",
        description: "Stable Video Diffusion",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        for (i, a) in EXPORT_PLATFORMS.iter().enumerate() {
            for b in &EXPORT_PLATFORMS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn urls_are_https() {
        assert!(EXPORT_PLATFORMS.iter().all(|p| p.url.starts_with("https://")));
    }
}
