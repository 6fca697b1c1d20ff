//! Fixed category and tone vocabularies offered by the front-end

use crate::config::constants::{categories, tones};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Content category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Skool Community/Educational")]
    Educational,
    #[serde(rename = "Case studies/Testimonials/Results")]
    CaseStudy,
    #[serde(rename = "Personal Story/Behind the Scenes")]
    PersonalStory,
    #[serde(rename = "Promotional/Offer")]
    Promotional,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Educational,
        Category::CaseStudy,
        Category::PersonalStory,
        Category::Promotional,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Educational => categories::EDUCATIONAL,
            Self::CaseStudy => categories::CASE_STUDY,
            Self::PersonalStory => categories::PERSONAL_STORY,
            Self::Promotional => categories::PROMOTIONAL,
        }
    }

    /// Short name accepted on the command line
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Educational => "educational",
            Self::CaseStudy => "case-study",
            Self::PersonalStory => "story",
            Self::Promotional => "promo",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(needle) || c.slug().eq_ignore_ascii_case(needle))
            .ok_or(())
    }
}

/// Writing tone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tone {
    Casual,
    Authoritative,
    Inspirational,
    Humorous,
    Professional,
}

impl Tone {
    pub const ALL: [Tone; 5] = [
        Tone::Casual,
        Tone::Authoritative,
        Tone::Inspirational,
        Tone::Humorous,
        Tone::Professional,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Casual => tones::CASUAL,
            Self::Authoritative => tones::AUTHORITATIVE,
            Self::Inspirational => tones::INSPIRATIONAL,
            Self::Humorous => tones::HUMOROUS,
            Self::Professional => tones::PROFESSIONAL,
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tone {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(needle))
            .ok_or(())
    }
}
