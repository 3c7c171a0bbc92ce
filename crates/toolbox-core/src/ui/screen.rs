//! The closed set of screens and the effects they can request

use super::feature::FeatureScreen;
use super::generator::GeneratorScreen;
use super::main_menu::MainMenu;
use super::Key;
use crate::error::GenerateError;
use crate::scaffold::GenerationReport;
use crate::tool::ToolSpec;

/// What a screen asks the navigator to do after handling a key
#[derive(Debug)]
pub enum Effect {
    Push(Screen),
    Pop,
    Quit,
    Generate(ToolSpec),
}

/// Every screen the session can show
#[derive(Debug)]
pub enum Screen {
    MainMenu(MainMenu),
    Feature(FeatureScreen),
    Generator(GeneratorScreen),
}

impl Screen {
    pub fn update(&mut self, key: &Key) -> Option<Effect> {
        match self {
            Screen::MainMenu(screen) => screen.update(key),
            Screen::Feature(screen) => screen.update(key),
            Screen::Generator(screen) => screen.update(key),
        }
    }

    pub fn render(&self) -> String {
        match self {
            Screen::MainMenu(screen) => screen.render(),
            Screen::Feature(screen) => screen.render(),
            Screen::Generator(screen) => screen.render(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::MainMenu(_) => MainMenu::TITLE,
            Screen::Feature(screen) => screen.feature().title(),
            Screen::Generator(_) => GeneratorScreen::TITLE,
        }
    }

    /// Deliver a generation outcome to the screen that requested it
    pub fn finish_generation(&mut self, result: Result<GenerationReport, GenerateError>) {
        match self {
            Screen::Generator(screen) => screen.wizard_mut().finish_generation(result),
            Screen::MainMenu(_) | Screen::Feature(_) => {
                tracing::warn!(screen = self.title(), "generation result with no wizard active");
            }
        }
    }
}

/// Plain-text frame builder shared by all screens
#[derive(Debug, Default)]
pub(crate) struct Frame {
    out: String,
}

impl Frame {
    pub(crate) fn new(title: &str) -> Self {
        let mut frame = Self::default();
        frame.out.push_str(&format!(" {} \n\n", title));
        frame
    }

    pub(crate) fn line(mut self, text: impl AsRef<str>) -> Self {
        self.out.push_str(text.as_ref());
        self.out.push('\n');
        self
    }

    pub(crate) fn blank(self) -> Self {
        self.line("")
    }

    /// Menu entries with a `>` marker on the selected one
    pub(crate) fn menu<'a>(mut self, items: impl IntoIterator<Item = &'a str>, cursor: usize) -> Self {
        for (i, item) in items.into_iter().enumerate() {
            if i == cursor {
                self = self.line(format!("  > {}", item));
            } else {
                self = self.line(format!("    {}", item));
            }
        }
        self
    }

    pub(crate) fn help(self, text: &str) -> String {
        self.blank().line(format!("  {}", text)).out
    }
}
