use rand::Rng;
use rand::rngs::SmallRng;
use rust_embed::Embed;
use serde::Deserialize;

#[derive(Embed)]
#[folder = "assets/stories/"]
struct StoryAssets;

/// Difficulty levels, in menu order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Beginner,
    Medium,
    Advanced,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Medium, Level::Advanced];

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Medium => "medium",
            Level::Advanced => "advanced",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Medium => "Medium",
            Level::Advanced => "Advanced",
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Story {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Deserialize)]
struct StoryFile {
    #[serde(default)]
    stories: Vec<Story>,
}

/// Bundled stories for a level. A missing or unparsable asset file yields an
/// empty list rather than an error; the picker shows it as such.
pub fn stories_for(level: Level) -> Vec<Story> {
    let filename = format!("{}.toml", level.as_str());
    let Some(file) = StoryAssets::get(&filename) else {
        return Vec::new();
    };
    let Ok(content) = std::str::from_utf8(file.data.as_ref()) else {
        return Vec::new();
    };
    toml::from_str::<StoryFile>(content)
        .map(|f| f.stories)
        .unwrap_or_default()
}

pub fn random_story(level: Level, rng: &mut SmallRng) -> Option<Story> {
    let stories = stories_for(level);
    if stories.is_empty() {
        return None;
    }
    let idx = rng.gen_range(0..stories.len());
    stories.into_iter().nth(idx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::tokenizer::{TokenMode, tokenize};
    use rand::SeedableRng;

    #[test]
    fn every_level_has_stories() {
        for level in Level::ALL {
            let stories = stories_for(level);
            assert!(!stories.is_empty(), "no stories for {}", level.as_str());
        }
    }

    #[test]
    fn every_story_is_typable_in_both_modes() {
        for level in Level::ALL {
            for story in stories_for(level) {
                assert!(!story.title.is_empty());
                assert!(!tokenize(&story.text, TokenMode::Verbatim).is_empty());
                assert!(!tokenize(&story.text, TokenMode::StripPunctuation).is_empty());
            }
        }
    }

    #[test]
    fn titles_are_unique_within_a_level() {
        for level in Level::ALL {
            let stories = stories_for(level);
            let mut titles: Vec<&str> = stories.iter().map(|s| s.title.as_str()).collect();
            titles.sort_unstable();
            titles.dedup();
            assert_eq!(titles.len(), stories.len());
        }
    }

    #[test]
    fn random_story_draws_from_the_level() {
        let mut rng = SmallRng::seed_from_u64(7);
        let story = random_story(Level::Beginner, &mut rng).unwrap();
        let titles: Vec<String> = stories_for(Level::Beginner)
            .into_iter()
            .map(|s| s.title)
            .collect();
        assert!(titles.contains(&story.title));
    }
}
