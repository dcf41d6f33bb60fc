use std::sync::mpsc;

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::config::Config;
use crate::event::AppEvent;
use crate::lookup::{Definition, LookupError, LookupState};
use crate::prompt::{Cue, word_completion_cue};
use crate::session::exercise::Exercise;
use crate::session::state::{Session, SessionEvent};
use crate::speech::{SpeechService, ToneService, detect_speech, detect_tone};
use crate::stories::{Level, Story, random_story, stories_for};
use crate::text::tokenizer::{TokenMode, normalize_for_lookup};
use crate::ui::line_input::LineInput;
use crate::ui::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppScreen {
    Picker,
    CustomText,
    Practice,
    Settings,
}

pub const TRANSLATE_LANGUAGES: [&str; 6] = ["es", "fr", "de", "it", "pt", "ja"];

pub struct App {
    pub screen: AppScreen,
    pub session: Session,
    pub level: Level,
    pub picker_stories: Vec<Story>,
    pub picker_selected: usize,
    pub custom_input: LineInput,
    pub lookup: LookupState,
    pub word_select: Option<usize>,
    pub config: Config,
    pub theme: &'static Theme,
    pub should_quit: bool,
    pub settings_selected: usize,
    speech: Option<Box<dyn SpeechService>>,
    tone: Option<Box<dyn ToneService>>,
    #[cfg_attr(not(feature = "network"), allow(dead_code))]
    events: mpsc::Sender<AppEvent>,
    lookup_seq: u64,
    rng: SmallRng,
}

impl App {
    pub fn new(mut config: Config, events: mpsc::Sender<AppEvent>) -> Self {
        config.normalize_theme(&Theme::available_themes());
        config.normalize_translate_language();

        let loaded_theme = Theme::load(&config.theme, config.dark_mode).unwrap_or_default();
        let theme: &'static Theme = Box::leak(Box::new(loaded_theme));

        let speech = detect_speech(&config.speech_command, config.speech_voice.as_deref());
        let tone = detect_tone();

        let level = Level::Beginner;
        let picker_stories = stories_for(level);

        Self {
            screen: AppScreen::Picker,
            session: Session::new(config.case_sensitive),
            level,
            picker_stories,
            picker_selected: 0,
            custom_input: LineInput::new(""),
            lookup: LookupState::Idle,
            word_select: None,
            config,
            theme,
            should_quit: false,
            settings_selected: 0,
            speech,
            tone,
            events,
            lookup_seq: 0,
            rng: SmallRng::from_entropy(),
        }
    }

    fn token_mode(&self) -> TokenMode {
        TokenMode::from_check_punctuation(self.config.check_punctuation)
    }

    // --- picker ---

    pub fn set_level(&mut self, level: Level) {
        self.level = level;
        self.picker_stories = stories_for(level);
        self.picker_selected = 0;
    }

    pub fn next_level(&mut self) {
        let idx = Level::ALL.iter().position(|l| *l == self.level).unwrap_or(0);
        self.set_level(Level::ALL[(idx + 1) % Level::ALL.len()]);
    }

    pub fn prev_level(&mut self) {
        let idx = Level::ALL.iter().position(|l| *l == self.level).unwrap_or(0);
        let prev = (idx + Level::ALL.len() - 1) % Level::ALL.len();
        self.set_level(Level::ALL[prev]);
    }

    pub fn picker_next(&mut self) {
        if !self.picker_stories.is_empty() {
            self.picker_selected = (self.picker_selected + 1) % self.picker_stories.len();
        }
    }

    pub fn picker_prev(&mut self) {
        if !self.picker_stories.is_empty() {
            self.picker_selected = (self.picker_selected + self.picker_stories.len() - 1)
                % self.picker_stories.len();
        }
    }

    pub fn start_selected_story(&mut self) {
        if let Some(story) = self.picker_stories.get(self.picker_selected).cloned() {
            self.start_text(Some(story.title), story.text);
        }
    }

    pub fn start_random_story(&mut self) {
        if let Some(story) = random_story(self.level, &mut self.rng) {
            self.start_text(Some(story.title), story.text);
        }
    }

    pub fn start_custom_text(&mut self) {
        let text = self.custom_input.value().trim().to_string();
        if text.is_empty() {
            return;
        }
        self.start_text(None, text);
    }

    pub fn start_text(&mut self, title: Option<String>, text: String) {
        let exercise = Exercise::new(title, text, self.token_mode());
        self.session.apply(SessionEvent::LoadExercise(exercise));
        self.lookup = LookupState::Idle;
        self.word_select = None;
        self.screen = AppScreen::Practice;
    }

    pub fn go_to_picker(&mut self) {
        self.word_select = None;
        self.screen = AppScreen::Picker;
    }

    pub fn go_to_custom_text(&mut self) {
        self.custom_input = LineInput::new("");
        self.screen = AppScreen::CustomText;
    }

    pub fn go_to_settings(&mut self) {
        self.settings_selected = 0;
        self.screen = AppScreen::Settings;
    }

    // --- practice ---

    pub fn type_char(&mut self, ch: char) {
        if !self.session.can_type() {
            return;
        }
        let prev = self.session.input().to_string();
        let mut next = prev.clone();
        next.push(ch);

        // Cues are a read-next-word feature; with it off neither the spoken
        // word nor the error tone fires.
        let cue = if self.config.read_next_word {
            self.session.exercise().and_then(|ex| {
                word_completion_cue(
                    &prev,
                    &next,
                    ex.tokens(),
                    ex.mode,
                    self.session.case_sensitive(),
                )
            })
        } else {
            None
        };

        self.session.apply(SessionEvent::InputChanged(next));

        match cue {
            Some(Cue::Speak(word)) => self.speak(&word),
            Some(Cue::ErrorTone) => self.error_tone(),
            None => {}
        }
    }

    pub fn backspace(&mut self) {
        let mut input = self.session.input().to_string();
        if input.pop().is_some() {
            self.session.apply(SessionEvent::InputChanged(input));
        }
    }

    pub fn check(&mut self) {
        self.session.apply(SessionEvent::Check);
    }

    pub fn reset(&mut self) {
        self.session.apply(SessionEvent::Reset);
        self.word_select = None;
    }

    fn speak(&self, word: &str) {
        if let Some(speech) = &self.speech {
            if let Err(err) = speech.speak(word) {
                log::warn!("speech failed for {word:?}: {err}");
            }
        }
    }

    fn error_tone(&self) {
        if let Some(tone) = &self.tone {
            if let Err(err) = tone.error_tone() {
                log::warn!("error tone failed: {err}");
            }
        }
    }

    // --- word selection and lookup ---

    pub fn word_count(&self) -> usize {
        self.session
            .exercise()
            .map(|ex| ex.tokens().len())
            .unwrap_or(0)
    }

    pub fn enter_word_select(&mut self) {
        let count = self.word_count();
        if count == 0 {
            return;
        }
        self.word_select = Some(self.session.current_word().min(count - 1));
    }

    pub fn exit_word_select(&mut self) {
        self.word_select = None;
    }

    pub fn select_next_word(&mut self) {
        let count = self.word_count();
        if let Some(idx) = self.word_select {
            self.word_select = Some((idx + 1).min(count.saturating_sub(1)));
        }
    }

    pub fn select_prev_word(&mut self) {
        if let Some(idx) = self.word_select {
            self.word_select = Some(idx.saturating_sub(1));
        }
    }

    fn selected_word(&self) -> Option<String> {
        let idx = self.word_select?;
        let token = self.session.exercise()?.tokens().get(idx)?.clone();
        let word = normalize_for_lookup(&token);
        (!word.is_empty()).then_some(word)
    }

    pub fn lookup_selected(&mut self) {
        let Some(word) = self.selected_word() else {
            return;
        };
        self.lookup_seq += 1;
        let seq = self.lookup_seq;
        self.lookup = LookupState::Loading {
            word: word.clone(),
            seq,
        };

        #[cfg(feature = "network")]
        crate::lookup::spawn_lookup(word, seq, self.events.clone());

        #[cfg(not(feature = "network"))]
        {
            self.lookup = LookupState::Failed {
                word,
                message: LookupError::Disabled.to_string(),
            };
        }
    }

    /// Late responses for anything but the newest request are dropped.
    pub fn on_lookup(&mut self, seq: u64, word: String, result: Result<Definition, LookupError>) {
        if seq != self.lookup_seq {
            log::debug!("dropping stale lookup response for {word:?} (seq {seq})");
            return;
        }
        self.lookup = match result {
            Ok(def) => LookupState::Ready(def),
            Err(err) => LookupState::Failed {
                word,
                message: err.to_string(),
            },
        };
    }

    pub fn speak_selected(&mut self) {
        if let Some(word) = self.selected_word() {
            self.speak(&word);
        }
    }

    pub fn translate_selected(&mut self) {
        let Some(word) = self.selected_word() else {
            return;
        };
        let url = format!(
            "https://translate.google.com/?sl=en&tl={}&text={}&op=translate",
            self.config.translate_language, word
        );
        if let Err(err) = webbrowser::open(&url) {
            log::warn!("failed to open browser for translation: {err}");
        }
    }

    // --- settings ---

    pub const SETTINGS_FIELDS: usize = 6;

    pub fn settings_cycle_forward(&mut self) {
        match self.settings_selected {
            0 => self.set_dark_mode(!self.config.dark_mode),
            1 => self.cycle_theme(1),
            2 => self.set_case_sensitive(!self.config.case_sensitive),
            3 => self.set_check_punctuation(!self.config.check_punctuation),
            4 => self.config.read_next_word = !self.config.read_next_word,
            5 => self.cycle_translate_language(1),
            _ => {}
        }
    }

    pub fn settings_cycle_backward(&mut self) {
        match self.settings_selected {
            0 => self.set_dark_mode(!self.config.dark_mode),
            1 => self.cycle_theme(-1),
            2 => self.set_case_sensitive(!self.config.case_sensitive),
            3 => self.set_check_punctuation(!self.config.check_punctuation),
            4 => self.config.read_next_word = !self.config.read_next_word,
            5 => self.cycle_translate_language(-1),
            _ => {}
        }
    }

    fn set_dark_mode(&mut self, dark: bool) {
        self.config.dark_mode = dark;
        self.reload_theme();
    }

    fn cycle_theme(&mut self, direction: isize) {
        let themes = Theme::available_themes();
        if themes.is_empty() {
            return;
        }
        let idx = themes
            .iter()
            .position(|t| *t == self.config.theme)
            .unwrap_or(0) as isize;
        let len = themes.len() as isize;
        let next = (idx + direction + len) % len;
        self.config.theme = themes[next as usize].clone();
        self.reload_theme();
    }

    fn reload_theme(&mut self) {
        if let Some(new_theme) = Theme::load(&self.config.theme, self.config.dark_mode) {
            let theme: &'static Theme = Box::leak(Box::new(new_theme));
            self.theme = theme;
        }
    }

    fn set_case_sensitive(&mut self, value: bool) {
        self.config.case_sensitive = value;
        self.session.set_case_sensitive(value);
    }

    /// Mode changes retokenize the text, which discards in-progress typing.
    fn set_check_punctuation(&mut self, value: bool) {
        self.config.check_punctuation = value;
        let rebuilt = self
            .session
            .exercise()
            .map(|ex| Exercise::new(ex.title.clone(), ex.text.clone(), self.token_mode()));
        if let Some(exercise) = rebuilt {
            self.session.apply(SessionEvent::LoadExercise(exercise));
        }
    }

    fn cycle_translate_language(&mut self, direction: isize) {
        let idx = TRANSLATE_LANGUAGES
            .iter()
            .position(|l| *l == self.config.translate_language)
            .unwrap_or(0) as isize;
        let len = TRANSLATE_LANGUAGES.len() as isize;
        let next = (idx + direction + len) % len;
        self.config.translate_language = TRANSLATE_LANGUAGES[next as usize].to_string();
    }
}
