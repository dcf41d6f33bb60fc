use std::io::{self, Write};
use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::Result;

/// Speaks single words. The host decides at startup whether a speech backend
/// exists and injects one (or none); the session core never probes platform
/// capabilities itself.
pub trait SpeechService: Send {
    fn speak(&self, word: &str) -> Result<()>;
}

/// Plays the short error tone for an incorrectly completed word.
pub trait ToneService: Send {
    fn error_tone(&self) -> Result<()>;
}

/// TTS via a detached subprocess (`espeak-ng`, `say`, ...). The child is
/// reaped on a background thread so a slow engine never blocks typing.
pub struct CommandSpeech {
    program: String,
    voice: Option<String>,
}

impl SpeechService for CommandSpeech {
    fn speak(&self, word: &str) -> Result<()> {
        let mut cmd = Command::new(&self.program);
        if let Some(voice) = &self.voice {
            cmd.arg("-v").arg(voice);
        }
        cmd.arg(word)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        let mut child = cmd.spawn()?;
        std::thread::spawn(move || {
            let _ = child.wait();
        });
        Ok(())
    }
}

/// The terminal's BEL. Raw mode passes it through to the emulator, which
/// renders it as the system alert sound.
pub struct TerminalBell;

impl ToneService for TerminalBell {
    fn error_tone(&self) -> Result<()> {
        let mut out = io::stdout();
        out.write_all(b"\x07")?;
        out.flush()?;
        Ok(())
    }
}

pub fn default_speech_program() -> &'static str {
    if cfg!(target_os = "macos") {
        "say"
    } else {
        "espeak-ng"
    }
}

/// One-time startup probe: hand back a speech service only if the configured
/// program is on PATH. Called from main, never from the session core.
pub fn detect_speech(program: &str, voice: Option<&str>) -> Option<Box<dyn SpeechService>> {
    if !command_on_path(program) {
        log::warn!("speech program '{program}' not found on PATH; read-next-word disabled");
        return None;
    }
    Some(Box::new(CommandSpeech {
        program: program.to_string(),
        voice: voice.map(str::to_string),
    }))
}

pub fn detect_tone() -> Option<Box<dyn ToneService>> {
    Some(Box::new(TerminalBell))
}

fn command_on_path(program: &str) -> bool {
    // Absolute/relative paths bypass the PATH search.
    if program.contains(std::path::MAIN_SEPARATOR) {
        return Path::new(program).is_file();
    }
    std::env::var_os("PATH")
        .map(|paths| {
            std::env::split_paths(&paths).any(|dir| {
                let candidate = dir.join(program);
                candidate.is_file()
            })
        })
        .unwrap_or(false)
}
