use serde::Deserialize;
use thiserror::Error;

#[cfg(feature = "network")]
use std::sync::mpsc;
#[cfg(feature = "network")]
use std::time::Duration;

#[cfg(feature = "network")]
use crate::event::AppEvent;

const API_BASE: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// Lossy projection of a dictionary response: only the first entry's first
/// meaning's first definition survives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Definition {
    pub word: String,
    pub phonetic: Option<String>,
    pub part_of_speech: String,
    pub definition: String,
    pub example: Option<String>,
    pub audio: Option<String>,
}

/// What the details panel knows about the most recent lookup. `Loading`
/// remembers the sequence number so stale responses can be ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LookupState {
    Idle,
    Loading { word: String, seq: u64 },
    Ready(Definition),
    Failed { word: String, message: String },
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("No definition found for '{0}'")]
    NotFound(String),
    #[error("Dictionary API error: {0}")]
    Api(String),
    #[error("Lookup request failed: {0}")]
    Transport(String),
    #[error("Dictionary lookups need the 'network' feature")]
    Disabled,
}

// Wire shape of api.dictionaryapi.dev. Everything beyond the first sense is
// parsed but discarded.
#[derive(Debug, Deserialize)]
struct ApiEntry {
    word: String,
    #[serde(default)]
    phonetic: Option<String>,
    #[serde(default)]
    phonetics: Vec<ApiPhonetic>,
    #[serde(default)]
    meanings: Vec<ApiMeaning>,
}

#[derive(Debug, Deserialize)]
struct ApiPhonetic {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    audio: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiMeaning {
    part_of_speech: String,
    #[serde(default)]
    definitions: Vec<ApiDefinition>,
}

#[derive(Debug, Deserialize)]
struct ApiDefinition {
    definition: String,
    #[serde(default)]
    example: Option<String>,
}

/// Reduce a raw API response body to a [`Definition`]. An entry without any
/// meaning/definition counts as not found, matching the service's own 404.
pub fn parse_response(body: &str, word: &str) -> Result<Definition, LookupError> {
    let entries: Vec<ApiEntry> =
        serde_json::from_str(body).map_err(|e| LookupError::Api(e.to_string()))?;

    let entry = entries
        .into_iter()
        .next()
        .ok_or_else(|| LookupError::NotFound(word.to_string()))?;
    let meaning = entry
        .meanings
        .into_iter()
        .next()
        .ok_or_else(|| LookupError::NotFound(word.to_string()))?;
    let definition = meaning
        .definitions
        .into_iter()
        .next()
        .ok_or_else(|| LookupError::NotFound(word.to_string()))?;

    let phonetic = entry.phonetic.filter(|p| !p.is_empty()).or_else(|| {
        entry
            .phonetics
            .iter()
            .find_map(|p| p.text.clone().filter(|t| !t.is_empty()))
    });
    let audio = entry
        .phonetics
        .iter()
        .find_map(|p| p.audio.clone().filter(|a| !a.is_empty()));

    Ok(Definition {
        word: entry.word,
        phonetic,
        part_of_speech: meaning.part_of_speech,
        definition: definition.definition,
        example: definition.example,
        audio,
    })
}

#[cfg(feature = "network")]
pub fn fetch_definition(word: &str) -> Result<Definition, LookupError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .map_err(|e| LookupError::Transport(e.to_string()))?;

    let url = format!("{API_BASE}/{word}");
    let response = client
        .get(&url)
        .send()
        .map_err(|e| LookupError::Transport(e.to_string()))?;

    let status = response.status();
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(LookupError::NotFound(word.to_string()));
    }
    if !status.is_success() {
        return Err(LookupError::Api(status.to_string()));
    }

    let body = response
        .text()
        .map_err(|e| LookupError::Transport(e.to_string()))?;
    parse_response(&body, word)
}

#[cfg(not(feature = "network"))]
pub fn fetch_definition(_word: &str) -> Result<Definition, LookupError> {
    Err(LookupError::Disabled)
}

/// Run a lookup on a worker thread and post the result back into the single
/// event loop. The sequence number lets the app drop responses that were
/// superseded by a later click.
#[cfg(feature = "network")]
pub fn spawn_lookup(word: String, seq: u64, tx: mpsc::Sender<AppEvent>) {
    std::thread::spawn(move || {
        let result = fetch_definition(&word);
        // Receiver gone means the app is shutting down.
        let _ = tx.send(AppEvent::Lookup { seq, word, result });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {
            "word": "hello",
            "phonetic": "/həˈləʊ/",
            "phonetics": [
                {"text": "/həˈləʊ/", "audio": ""},
                {"text": "/hɛˈloʊ/", "audio": "https://example.com/hello.mp3"}
            ],
            "meanings": [
                {
                    "partOfSpeech": "interjection",
                    "definitions": [
                        {"definition": "A greeting.", "example": "Hello, everyone."},
                        {"definition": "An expression of surprise."}
                    ]
                },
                {
                    "partOfSpeech": "noun",
                    "definitions": [{"definition": "The word \"hello\"."}]
                }
            ]
        }
    ]"#;

    #[test]
    fn keeps_only_the_first_sense() {
        let def = parse_response(SAMPLE, "hello").unwrap();
        assert_eq!(def.word, "hello");
        assert_eq!(def.part_of_speech, "interjection");
        assert_eq!(def.definition, "A greeting.");
        assert_eq!(def.example.as_deref(), Some("Hello, everyone."));
        assert_eq!(def.phonetic.as_deref(), Some("/həˈləʊ/"));
        assert_eq!(def.audio.as_deref(), Some("https://example.com/hello.mp3"));
    }

    #[test]
    fn empty_phonetic_falls_back_to_phonetics_list() {
        let body = r#"[{
            "word": "cat",
            "phonetic": "",
            "phonetics": [{"text": "/kæt/"}],
            "meanings": [{"partOfSpeech": "noun", "definitions": [{"definition": "A small feline."}]}]
        }]"#;
        let def = parse_response(body, "cat").unwrap();
        assert_eq!(def.phonetic.as_deref(), Some("/kæt/"));
        assert_eq!(def.audio, None);
    }

    #[test]
    fn empty_array_is_not_found() {
        let err = parse_response("[]", "blorp").unwrap_err();
        assert_eq!(err, LookupError::NotFound("blorp".to_string()));
        assert_eq!(err.to_string(), "No definition found for 'blorp'");
    }

    #[test]
    fn entry_without_meanings_is_not_found() {
        let body = r#"[{"word": "x", "meanings": []}]"#;
        assert!(matches!(
            parse_response(body, "x"),
            Err(LookupError::NotFound(_))
        ));
    }

    #[test]
    fn malformed_body_is_an_api_error() {
        assert!(matches!(
            parse_response("not json", "word"),
            Err(LookupError::Api(_))
        ));
    }
}
