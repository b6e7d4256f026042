use console::Style;

/// Terminal styles used for user-facing output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Attention,
    Hint,
}

impl Tone {
    fn style(self) -> Style {
        match self {
            Self::Success => Style::new().green(),
            Self::Attention => Style::new().red(),
            Self::Hint => Style::new().dim(),
        }
    }
}

/// Style `text` for stdout. Plain when stdout is not a terminal.
pub fn paint(tone: Tone, text: &str) -> String {
    tone.style().apply_to(text).to_string()
}

/// Style `text` for stderr. Plain when stderr is not a terminal.
pub fn paint_err(tone: Tone, text: &str) -> String {
    tone.style().for_stderr().apply_to(text).to_string()
}
