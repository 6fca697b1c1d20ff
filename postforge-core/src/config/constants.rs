/// Model label constants reported alongside generated prompts
pub mod models {
    /// Label for prompts built from a free-text topic
    pub const GENERAL_TEXT: &str = "general-purpose text model";
    /// Label for prompts built from a video URL
    pub const VIDEO_CAPABLE: &str = "video-capable model";
}

/// Placeholder names understood by the template renderer
pub mod placeholders {
    pub const CATEGORY: &str = "category";
    pub const TOPIC: &str = "topic";
    pub const TONE: &str = "tone";
    pub const TRANSCRIPT: &str = "transcript";
    pub const TRANSCRIPT_MARKER: &str = "{{transcript}}";
}

/// Content category labels accepted by the front-end
pub mod categories {
    pub const EDUCATIONAL: &str = "Skool Community/Educational";
    pub const CASE_STUDY: &str = "Case studies/Testimonials/Results";
    pub const PERSONAL_STORY: &str = "Personal Story/Behind the Scenes";
    pub const PROMOTIONAL: &str = "Promotional/Offer";
}

/// Tone labels accepted by the front-end
pub mod tones {
    pub const CASUAL: &str = "Casual";
    pub const AUTHORITATIVE: &str = "Authoritative";
    pub const INSPIRATIONAL: &str = "Inspirational";
    pub const HUMOROUS: &str = "Humorous";
    pub const PROFESSIONAL: &str = "Professional";
}

/// Suggestion webhook constants
pub mod webhook {
    pub const ACTION_SUGGEST_TOPICS: &str = "suggest_topics";
    pub const URL_ENV: &str = "POSTFORGE_WEBHOOK_URL";
    pub const DEFAULT_TIMEOUT_SECS: u64 = 0;
    pub const DEFAULT_USER_AGENT: &str = concat!("postforge/", env!("CARGO_PKG_VERSION"));
}

/// URL normalization constants
pub mod urls {
    pub const DEFAULT_SCHEME_PREFIX: &str = "https://";
    pub const SCHEME_SEPARATOR: &str = "://";
}

/// Configuration file locations
pub mod files {
    pub const CONFIG_FILE: &str = "postforge.toml";
    pub const CONFIG_DIR: &str = ".postforge";
}
