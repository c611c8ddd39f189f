pub const APP_TITLE: &str = "Creative Spark AI";

pub const MODEL_NAME: &str = "gemini-2.5-flash-preview-04-17";

/// Value meaning "no constraint" for a choice field. Compared case-insensitively.
pub const ANY: &str = "Any";

pub const STORY_GENRES: &[&str] = &[
    ANY,
    "Fantasy",
    "Sci-Fi",
    "Mystery",
    "Thriller",
    "Romance",
    "Historical Fiction",
    "Humor",
    "Adventure",
    "Contemporary",
    "Dystopian",
    "Fairy Tale",
];

pub const POEM_GENRES: &[&str] = &[
    ANY,
    "Lyric",
    "Narrative",
    "Descriptive",
    "Reflective",
    "Elegy",
    "Ode",
    "Ballad",
];

pub const POEM_STRUCTURES: &[&str] = &[
    ANY,
    "Haiku (3 lines, 5-7-5 syllables)",
    "Sonnet (14 lines, specific rhyme)",
    "Limerick (5 lines, AABBA rhyme)",
    "Free Verse (no strict rules)",
    "Acrostic",
    "Villanelle",
];

pub const RHYME_SCHEMES: &[&str] = &[
    ANY,
    "AABB",
    "ABAB",
    "ABCB",
    "AA BB CC",
    "AABA",
    "None (Free Verse)",
];

pub const LENGTH_OPTIONS: &[&str] = &[
    "Brief (a few sentences)",
    "Short (approx. 100-200 words)",
    "Medium (approx. 300-500 words)",
    "Long (approx. 600-800 words)",
    "Epic (approx. 1000+ words)",
];

pub const TONE_OPTIONS: &[&str] = &[
    ANY,
    "Neutral",
    "Joyful",
    "Serious",
    "Humorous",
    "Whimsical",
    "Melancholic",
    "Suspenseful",
    "Inspiring",
    "Romantic",
    "Dark",
    "Satirical",
    "Nostalgic",
    "Hopeful",
];

/// Returns true when `value` is empty or the "Any" sentinel.
pub fn is_unconstrained(value: &str) -> bool {
    value.is_empty() || value.eq_ignore_ascii_case(ANY)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentType {
    #[default]
    Story,
    Poem,
}

impl ContentType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Story => "Story",
            Self::Poem => "Poem",
        }
    }

    pub const fn genres(self) -> &'static [&'static str] {
        match self {
            Self::Story => STORY_GENRES,
            Self::Poem => POEM_GENRES,
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Story => Self::Poem,
            Self::Poem => Self::Story,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOptions {
    pub content_type: ContentType,
    pub user_prompt: String,
    pub length: String,
    pub genre: String,
    pub keywords: String,
    pub tone: String,
    // Poem only
    pub rhyme_scheme: String,
    pub poem_structure: String,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            content_type: ContentType::Story,
            user_prompt: String::new(),
            length: LENGTH_OPTIONS[1].to_string(),
            genre: STORY_GENRES[0].to_string(),
            keywords: String::new(),
            tone: TONE_OPTIONS[0].to_string(),
            rhyme_scheme: RHYME_SCHEMES[0].to_string(),
            poem_structure: POEM_STRUCTURES[0].to_string(),
        }
    }
}

/// A partial set of overrides for [`GenerationOptions`]. Unset fields are preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionsUpdate {
    pub content_type: Option<ContentType>,
    pub user_prompt: Option<String>,
    pub length: Option<String>,
    pub genre: Option<String>,
    pub keywords: Option<String>,
    pub tone: Option<String>,
    pub rhyme_scheme: Option<String>,
    pub poem_structure: Option<String>,
}

impl GenerationOptions {
    /// Shallow-merge `update` into the options.
    ///
    /// Changing the content type resets the genre to the first genre of the
    /// new type, unless the same update names a genre explicitly.
    pub fn apply(&mut self, update: OptionsUpdate) {
        if let Some(content_type) = update.content_type {
            if content_type != self.content_type && update.genre.is_none() {
                self.genre = content_type.genres()[0].to_string();
            }
            self.content_type = content_type;
        }
        if let Some(user_prompt) = update.user_prompt {
            self.user_prompt = user_prompt;
        }
        if let Some(length) = update.length {
            self.length = length;
        }
        if let Some(genre) = update.genre {
            self.genre = genre;
        }
        if let Some(keywords) = update.keywords {
            self.keywords = keywords;
        }
        if let Some(tone) = update.tone {
            self.tone = tone;
        }
        if let Some(rhyme_scheme) = update.rhyme_scheme {
            self.rhyme_scheme = rhyme_scheme;
        }
        if let Some(poem_structure) = update.poem_structure {
            self.poem_structure = poem_structure;
        }
    }

    pub fn has_prompt(&self) -> bool {
        !self.user_prompt.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = GenerationOptions::default();
        assert_eq!(options.content_type, ContentType::Story);
        assert!(options.user_prompt.is_empty());
        assert_eq!(options.length, "Short (approx. 100-200 words)");
        assert_eq!(options.genre, "Any");
        assert_eq!(options.tone, "Any");
        assert_eq!(options.rhyme_scheme, "Any");
        assert_eq!(options.poem_structure, "Any");
    }

    #[test]
    fn test_apply_preserves_unnamed_fields() {
        let mut options = GenerationOptions::default();
        options.apply(OptionsUpdate {
            user_prompt: Some("a lighthouse keeper".to_string()),
            ..Default::default()
        });
        options.apply(OptionsUpdate {
            tone: Some("Dark".to_string()),
            ..Default::default()
        });

        assert_eq!(options.user_prompt, "a lighthouse keeper");
        assert_eq!(options.tone, "Dark");
        assert_eq!(options.length, LENGTH_OPTIONS[1]);
    }

    #[test]
    fn test_content_type_change_resets_genre() {
        let mut options = GenerationOptions {
            genre: "Fantasy".to_string(),
            ..Default::default()
        };
        options.apply(OptionsUpdate {
            content_type: Some(ContentType::Poem),
            ..Default::default()
        });
        assert_eq!(options.content_type, ContentType::Poem);
        assert_eq!(options.genre, POEM_GENRES[0]);

        options.genre = "Elegy".to_string();
        options.apply(OptionsUpdate {
            content_type: Some(ContentType::Story),
            ..Default::default()
        });
        assert_eq!(options.genre, STORY_GENRES[0]);
    }

    #[test]
    fn test_same_content_type_keeps_genre() {
        let mut options = GenerationOptions {
            genre: "Mystery".to_string(),
            ..Default::default()
        };
        options.apply(OptionsUpdate {
            content_type: Some(ContentType::Story),
            ..Default::default()
        });
        assert_eq!(options.genre, "Mystery");
    }

    #[test]
    fn test_explicit_genre_wins_over_reset() {
        let mut options = GenerationOptions::default();
        options.apply(OptionsUpdate {
            content_type: Some(ContentType::Poem),
            genre: Some("Ode".to_string()),
            ..Default::default()
        });
        assert_eq!(options.genre, "Ode");
    }

    #[test]
    fn test_has_prompt() {
        let mut options = GenerationOptions::default();
        assert!(!options.has_prompt());
        options.user_prompt = "   \t\n".to_string();
        assert!(!options.has_prompt());
        options.user_prompt = " rain ".to_string();
        assert!(options.has_prompt());
    }

    #[test]
    fn test_is_unconstrained() {
        assert!(is_unconstrained(""));
        assert!(is_unconstrained("Any"));
        assert!(is_unconstrained("ANY"));
        assert!(is_unconstrained("any"));
        assert!(!is_unconstrained("Anything"));
    }

    #[test]
    fn test_content_type_labels() {
        assert_eq!(ContentType::Story.label(), "Story");
        assert_eq!(ContentType::Poem.label(), "Poem");
        assert_eq!(ContentType::Story.toggled(), ContentType::Poem);
    }
}
