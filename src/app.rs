use crate::models::{
    ContentType, GenerationOptions, OptionsUpdate, LENGTH_OPTIONS, POEM_STRUCTURES,
    RHYME_SCHEMES, TONE_OPTIONS,
};

pub const EMPTY_PROMPT_MESSAGE: &str = "Please enter a prompt or topic.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    ContentType,
    Length,
    Prompt,
    Genre,
    Tone,
    Keywords,
    PoemStructure,
    RhymeScheme,
}

const STORY_FIELDS: &[FormField] = &[
    FormField::ContentType,
    FormField::Length,
    FormField::Prompt,
    FormField::Genre,
    FormField::Tone,
    FormField::Keywords,
];

const POEM_FIELDS: &[FormField] = &[
    FormField::ContentType,
    FormField::Length,
    FormField::Prompt,
    FormField::Genre,
    FormField::Tone,
    FormField::Keywords,
    FormField::PoemStructure,
    FormField::RhymeScheme,
];

/// Form fields shown for a content type, in display order.
pub const fn visible_fields(content_type: ContentType) -> &'static [FormField] {
    match content_type {
        ContentType::Story => STORY_FIELDS,
        ContentType::Poem => POEM_FIELDS,
    }
}

impl FormField {
    pub const fn label(self) -> &'static str {
        match self {
            Self::ContentType => "Content Type",
            Self::Length => "Length",
            Self::Prompt => "Topic / Prompt",
            Self::Genre => "Genre",
            Self::Tone => "Tone",
            Self::Keywords => "Keywords (optional, comma-separated)",
            Self::PoemStructure => "Poem Structure (optional)",
            Self::RhymeScheme => "Rhyme Scheme (optional)",
        }
    }

    pub const fn is_text(self) -> bool {
        matches!(self, Self::Prompt | Self::Keywords)
    }

    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Prompt => "e.g., \"A brave knight on a quest to find a mythical creature\"",
            Self::Keywords => "e.g., magic, dragon, friendship, betrayal",
            _ => "",
        }
    }

    /// Current value of this field in `options`.
    pub fn value(self, options: &GenerationOptions) -> &str {
        match self {
            Self::ContentType => options.content_type.label(),
            Self::Length => &options.length,
            Self::Prompt => &options.user_prompt,
            Self::Genre => &options.genre,
            Self::Tone => &options.tone,
            Self::Keywords => &options.keywords,
            Self::PoemStructure => &options.poem_structure,
            Self::RhymeScheme => &options.rhyme_scheme,
        }
    }
}

/// Step through `choices` from `current`, wrapping at either end. A value not
/// in the list steps to the first entry.
fn cycle(choices: &[&'static str], current: &str, forward: bool) -> &'static str {
    let Some(index) = choices.iter().position(|c| *c == current) else {
        return choices[0];
    };
    let next = if forward {
        (index + 1) % choices.len()
    } else {
        (index + choices.len() - 1) % choices.len()
    };
    choices[next]
}

#[derive(Debug)]
pub struct App {
    pub should_quit: bool,
    pub options: GenerationOptions,
    pub focus: FormField,
    pub generated_content: String,
    pub error: Option<String>,
    pub is_loading: bool,
    /// Id of the most recent submission. Results tagged with an older id are dropped.
    pub generation_id: u64,
    pub scroll_offset: usize,
    pub show_help: bool,
    pub exit_pending: bool,
    pub model: String,
    pub has_api_key: bool,
}

impl App {
    pub fn new(model: String, has_api_key: bool) -> Self {
        Self {
            should_quit: false,
            options: GenerationOptions::default(),
            focus: FormField::ContentType,
            generated_content: String::new(),
            error: None,
            is_loading: false,
            generation_id: 0,
            scroll_offset: 0,
            show_help: false,
            exit_pending: false,
            model,
            has_api_key,
        }
    }

    pub const fn quit(&mut self) {
        self.should_quit = true;
    }

    pub const fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn update_options(&mut self, update: OptionsUpdate) {
        self.options.apply(update);
        if !visible_fields(self.options.content_type).contains(&self.focus) {
            self.focus = FormField::ContentType;
        }
    }

    pub fn visible_fields(&self) -> &'static [FormField] {
        visible_fields(self.options.content_type)
    }

    fn move_focus(&mut self, forward: bool) {
        let fields = self.visible_fields();
        let index = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (index + 1) % fields.len()
        } else {
            (index + fields.len() - 1) % fields.len()
        };
        self.focus = fields[next];
    }

    pub fn focus_next(&mut self) {
        self.move_focus(true);
    }

    pub fn focus_prev(&mut self) {
        self.move_focus(false);
    }

    /// Select the next (or previous) choice of the focused field. No-op for text fields.
    pub fn cycle_choice(&mut self, forward: bool) {
        let update = match self.focus {
            FormField::ContentType => OptionsUpdate {
                content_type: Some(self.options.content_type.toggled()),
                ..Default::default()
            },
            FormField::Length => OptionsUpdate {
                length: Some(cycle(LENGTH_OPTIONS, &self.options.length, forward).to_string()),
                ..Default::default()
            },
            FormField::Genre => OptionsUpdate {
                genre: Some(
                    cycle(self.options.content_type.genres(), &self.options.genre, forward)
                        .to_string(),
                ),
                ..Default::default()
            },
            FormField::Tone => OptionsUpdate {
                tone: Some(cycle(TONE_OPTIONS, &self.options.tone, forward).to_string()),
                ..Default::default()
            },
            FormField::PoemStructure => OptionsUpdate {
                poem_structure: Some(
                    cycle(POEM_STRUCTURES, &self.options.poem_structure, forward).to_string(),
                ),
                ..Default::default()
            },
            FormField::RhymeScheme => OptionsUpdate {
                rhyme_scheme: Some(
                    cycle(RHYME_SCHEMES, &self.options.rhyme_scheme, forward).to_string(),
                ),
                ..Default::default()
            },
            FormField::Prompt | FormField::Keywords => return,
        };
        self.update_options(update);
    }

    fn edit_text(&mut self, edit: impl FnOnce(&mut String)) {
        let (mut value, field) = match self.focus {
            FormField::Prompt => (self.options.user_prompt.clone(), FormField::Prompt),
            FormField::Keywords => (self.options.keywords.clone(), FormField::Keywords),
            _ => return,
        };
        edit(&mut value);
        let update = if field == FormField::Prompt {
            OptionsUpdate {
                user_prompt: Some(value),
                ..Default::default()
            }
        } else {
            OptionsUpdate {
                keywords: Some(value),
                ..Default::default()
            }
        };
        self.update_options(update);
    }

    pub fn input_char(&mut self, c: char) {
        self.edit_text(|value| value.push(c));
    }

    pub fn backspace(&mut self) {
        self.edit_text(|value| {
            value.pop();
        });
    }

    /// Start a submission. Returns the submission id and an options snapshot
    /// to dispatch, or `None` if a request is in flight or the prompt is blank.
    pub fn begin_generation(&mut self) -> Option<(u64, GenerationOptions)> {
        if self.is_loading {
            return None;
        }
        if !self.options.has_prompt() {
            self.error = Some(EMPTY_PROMPT_MESSAGE.to_string());
            return None;
        }

        self.generation_id += 1;
        self.is_loading = true;
        self.error = None;
        self.generated_content.clear();
        self.scroll_to_top();

        Some((self.generation_id, self.options.clone()))
    }

    /// Apply a dispatcher result. Returns false if it belongs to an abandoned
    /// submission and was dropped.
    pub fn finish_generation(&mut self, id: u64, text: String) -> bool {
        if !self.is_loading || id != self.generation_id {
            return false;
        }
        self.is_loading = false;
        self.generated_content = text;
        true
    }

    /// Clear the output and error. An in-flight request keeps running but its
    /// result will be dropped on arrival.
    pub fn new_piece(&mut self) {
        if self.is_loading {
            self.generation_id += 1;
            self.is_loading = false;
        }
        self.generated_content.clear();
        self.error = None;
        self.scroll_to_top();
    }

    pub const fn scroll_up(&mut self, amount: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(amount);
    }

    pub const fn scroll_down(&mut self, amount: usize) {
        self.scroll_offset = self.scroll_offset.saturating_add(amount);
    }

    pub const fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }
}
