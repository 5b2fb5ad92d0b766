//! Prompt construction for story generation.

/// Target story length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoryLength {
    Short,
    Medium,
    Long,
}

impl StoryLength {
    /// Word-count descriptor embedded in the prompt.
    pub fn descriptor(self) -> &'static str {
        match self {
            StoryLength::Short => "a short story of 100-150 words",
            StoryLength::Medium => "a medium story of 200-300 words",
            StoryLength::Long => "a long story of 400-500 words",
        }
    }
}

impl From<&str> for StoryLength {
    fn from(token: &str) -> Self {
        match token {
            "short" => StoryLength::Short,
            "medium" => StoryLength::Medium,
            "long" => StoryLength::Long,
            _ => StoryLength::Medium, // Unrecognized tokens fall back to medium
        }
    }
}

/// Build the full generation prompt for the given theme, genre and length.
///
/// The genre and theme are embedded verbatim; the closing section pins the
/// JSON shape the generator must return.
pub fn build_story_prompt(theme: &str, genre: &str, length: StoryLength) -> String {
    format!(
        r#"Create {descriptor} in the {genre} genre with the theme: {theme}.
The story must have:
- A creative title
- Interesting characters
- A conflict or challenge
- A satisfying resolution
- Optionally a moral or lesson

If the theme is inappropriate, return a polite message about creating positive stories.

Respond in JSON with exactly this shape:
{{
    "title": "Story title",
    "theme": "Requested theme",
    "genre": "Literary genre",
    "length": "Story length",
    "characters": [
        "Name and brief description of the main character",
        "Other relevant characters"
    ],
    "body": [
        "Paragraph 1 - introduction",
        "Paragraph 2 - development",
        "Paragraph 3 - conclusion"
    ],
    "moral": "Moral of the story (optional)"
}}"#,
        descriptor = length.descriptor(),
        genre = genre,
        theme = theme,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_length_tokens() {
        assert_eq!(StoryLength::from("short"), StoryLength::Short);
        assert_eq!(StoryLength::from("medium"), StoryLength::Medium);
        assert_eq!(StoryLength::from("long"), StoryLength::Long);
    }

    #[test]
    fn unknown_length_token_falls_back_to_medium() {
        assert_eq!(StoryLength::from("epic"), StoryLength::Medium);
        assert_eq!(StoryLength::from(""), StoryLength::Medium);
        assert_eq!(StoryLength::from("LONG"), StoryLength::Medium);
    }

    #[test]
    fn descriptors_carry_word_counts() {
        assert_eq!(
            StoryLength::Short.descriptor(),
            "a short story of 100-150 words"
        );
        assert_eq!(
            StoryLength::Medium.descriptor(),
            "a medium story of 200-300 words"
        );
        assert_eq!(
            StoryLength::Long.descriptor(),
            "a long story of 400-500 words"
        );
    }

    #[test]
    fn prompt_embeds_theme_genre_and_descriptor_verbatim() {
        let prompt = build_story_prompt("a brave robot", "sci-fi", StoryLength::Long);
        assert!(prompt.contains("a long story of 400-500 words"));
        assert!(prompt.contains("in the sci-fi genre"));
        assert!(prompt.contains("with the theme: a brave robot"));
    }

    #[test]
    fn prompt_pins_the_response_shape() {
        let prompt = build_story_prompt("abc", "fantasy", StoryLength::Medium);
        for key in ["\"title\"", "\"theme\"", "\"genre\"", "\"length\"", "\"characters\"", "\"body\"", "\"moral\""] {
            assert!(prompt.contains(key), "prompt missing {key}");
        }
        assert!(prompt.contains("polite message about creating positive stories"));
    }
}
