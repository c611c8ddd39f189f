// Prompt construction from generation options

use std::fmt::Write;

use crate::models::{is_unconstrained, ContentType, GenerationOptions};

pub const SYSTEM_INSTRUCTION: &str = "You are an expert creative writing assistant. Your goal is to generate high-quality, engaging, and imaginative content based precisely on the user's specifications. Pay close attention to the requested content type, length, genre, keywords, tone, and any structural requirements (like rhyme scheme or poem structure). If 'Any' is selected for a parameter, feel free to choose what fits best or interpret it broadly.";

const POEM_GUIDANCE: &str = "If a specific structure like Haiku or Sonnet is requested, strictly adhere to its rules. For Haikus, focus on the 5-7-5 syllable structure. For Sonnets, aim for 14 lines with a common sonnet rhyme scheme unless another is specified. If 'Any' is selected for structure or rhyme, you have creative freedom.";

const STORY_GUIDANCE: &str = "Ensure the story has a clear beginning, middle, and end, with engaging plot development and characterization appropriate for the genre and tone. If 'Any' is selected for genre or tone, choose what you think fits best for the topic.";

const CLOSING_INSTRUCTION: &str =
    "Generate the creative piece. Be imaginative and fulfill the request to the best of your abilities:";

/// Build the instruction sent to the model. Pure: the same options always
/// produce the same string.
pub fn build_prompt(options: &GenerationOptions) -> String {
    let mut prompt = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(
        prompt,
        "Please write a {} based on the following details:",
        options.content_type.label().to_lowercase()
    );
    let _ = writeln!(prompt, "- Topic/Core Idea: \"{}\"", options.user_prompt);
    let _ = writeln!(prompt, "- Desired Length: {}", options.length);

    if !is_unconstrained(&options.genre) {
        let _ = writeln!(prompt, "- Genre: {}", options.genre);
    }
    if !options.keywords.is_empty() {
        let _ = writeln!(
            prompt,
            "- Keywords to incorporate (if applicable): {}",
            options.keywords
        );
    }
    if !is_unconstrained(&options.tone) {
        let _ = writeln!(prompt, "- Desired Tone: {}", options.tone);
    }

    match options.content_type {
        ContentType::Poem => {
            if !is_unconstrained(&options.poem_structure) {
                let _ = writeln!(prompt, "- Specific Structure: {}", options.poem_structure);
            }
            if !is_unconstrained(&options.rhyme_scheme) {
                let _ = writeln!(prompt, "- Rhyme Scheme: {}", options.rhyme_scheme);
            }
            prompt.push_str(POEM_GUIDANCE);
        }
        ContentType::Story => prompt.push_str(STORY_GUIDANCE),
    }

    prompt.push_str("\n\n");
    prompt.push_str(CLOSING_INSTRUCTION);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn haiku_options() -> GenerationOptions {
        GenerationOptions {
            content_type: ContentType::Poem,
            user_prompt: "autumn leaves".to_string(),
            length: "Brief (a few sentences)".to_string(),
            genre: "Any".to_string(),
            keywords: String::new(),
            tone: "Any".to_string(),
            rhyme_scheme: "Any".to_string(),
            poem_structure: "Haiku (3 lines, 5-7-5 syllables)".to_string(),
        }
    }

    #[test]
    fn test_haiku_prompt() {
        let prompt = build_prompt(&haiku_options());

        assert!(prompt.starts_with("Please write a poem based on the following details:\n"));
        assert!(prompt.contains("- Topic/Core Idea: \"autumn leaves\"\n"));
        assert!(prompt.contains("- Desired Length: Brief (a few sentences)\n"));
        assert!(prompt.contains("- Specific Structure: Haiku (3 lines, 5-7-5 syllables)\n"));
        assert!(!prompt.contains("- Genre:"));
        assert!(!prompt.contains("- Desired Tone:"));
        assert!(!prompt.contains("- Rhyme Scheme:"));
        assert!(!prompt.contains("- Keywords"));
        assert!(prompt.contains(POEM_GUIDANCE));
        assert!(!prompt.contains(STORY_GUIDANCE));
    }

    #[test]
    fn test_story_prompt_full_layout() {
        let options = GenerationOptions {
            user_prompt: "a dragon who hoards books".to_string(),
            genre: "Fantasy".to_string(),
            keywords: "library, ember".to_string(),
            tone: "Whimsical".to_string(),
            ..Default::default()
        };

        let expected = format!(
            "Please write a story based on the following details:\n\
             - Topic/Core Idea: \"a dragon who hoards books\"\n\
             - Desired Length: Short (approx. 100-200 words)\n\
             - Genre: Fantasy\n\
             - Keywords to incorporate (if applicable): library, ember\n\
             - Desired Tone: Whimsical\n\
             {STORY_GUIDANCE}\n\n{CLOSING_INSTRUCTION}"
        );
        assert_eq!(build_prompt(&options), expected);
    }

    #[test]
    fn test_story_ignores_poem_fields() {
        let options = GenerationOptions {
            user_prompt: "heist".to_string(),
            rhyme_scheme: "ABAB".to_string(),
            poem_structure: "Sonnet (14 lines, specific rhyme)".to_string(),
            ..Default::default()
        };
        let prompt = build_prompt(&options);
        assert!(!prompt.contains("- Specific Structure:"));
        assert!(!prompt.contains("- Rhyme Scheme:"));
        assert!(prompt.contains(STORY_GUIDANCE));
    }

    #[test]
    fn test_any_sentinel_is_case_insensitive() {
        let options = GenerationOptions {
            content_type: ContentType::Poem,
            user_prompt: "tides".to_string(),
            genre: "ANY".to_string(),
            tone: "any".to_string(),
            rhyme_scheme: "aNy".to_string(),
            poem_structure: "Any".to_string(),
            ..Default::default()
        };
        let prompt = build_prompt(&options);
        assert!(!prompt.contains("- Genre:"));
        assert!(!prompt.contains("- Desired Tone:"));
        assert!(!prompt.contains("- Rhyme Scheme:"));
        assert!(!prompt.contains("- Specific Structure:"));
    }

    #[test]
    fn test_poem_rhyme_line_included() {
        let mut options = haiku_options();
        options.rhyme_scheme = "AABB".to_string();
        options.genre = "Elegy".to_string();
        let prompt = build_prompt(&options);
        assert!(prompt.contains("- Rhyme Scheme: AABB\n"));
        assert!(prompt.contains("- Genre: Elegy\n"));
    }

    #[test]
    fn test_prompt_is_quoted_verbatim() {
        let options = GenerationOptions {
            user_prompt: "  spaced \"quotes\"  ".to_string(),
            ..Default::default()
        };
        let prompt = build_prompt(&options);
        assert!(prompt.contains("- Topic/Core Idea: \"  spaced \"quotes\"  \"\n"));
    }

    #[test]
    fn test_prompt_ends_with_closing_instruction() {
        let prompt = build_prompt(&haiku_options());
        assert!(prompt.ends_with(&format!("\n\n{CLOSING_INSTRUCTION}")));
    }

    #[test]
    fn test_build_prompt_is_deterministic() {
        let options = haiku_options();
        assert_eq!(build_prompt(&options), build_prompt(&options));
    }
}
