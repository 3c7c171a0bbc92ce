//! Navigation controller: owns the screen stack and routes key events

use super::main_menu::MainMenu;
use super::screen::{Effect, Screen};
use super::Key;
use crate::config::Config;
use crate::scaffold::{GenerationReport, Scaffolder};

/// Everything the session depends on, built once at startup
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub config: Config,
    pub scaffolder: Scaffolder,
}

impl SessionContext {
    pub fn new(config: Config) -> Self {
        let scaffolder = Scaffolder::new(config.output_dir.clone());
        Self { config, scaffolder }
    }
}

/// Whether the session continues after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Screen stack whose bottom is always the main menu
#[derive(Debug)]
struct ScreenStack {
    root: Screen,
    pushed: Vec<Screen>,
}

impl ScreenStack {
    fn new() -> Self {
        Self {
            root: Screen::MainMenu(MainMenu::new()),
            pushed: Vec::new(),
        }
    }

    fn top(&self) -> &Screen {
        self.pushed.last().unwrap_or(&self.root)
    }

    fn top_mut(&mut self) -> &mut Screen {
        match self.pushed.last_mut() {
            Some(screen) => screen,
            None => &mut self.root,
        }
    }

    fn push(&mut self, screen: Screen) {
        self.pushed.push(screen);
    }

    /// No-op when only the main menu remains
    fn pop(&mut self) -> Option<Screen> {
        self.pushed.pop()
    }

    fn len(&self) -> usize {
        self.pushed.len() + 1
    }
}

/// Drives a session one key at a time
#[derive(Debug)]
pub struct Navigator {
    stack: ScreenStack,
    context: SessionContext,
    generated: Vec<GenerationReport>,
}

impl Navigator {
    pub fn new(context: SessionContext) -> Self {
        Self {
            stack: ScreenStack::new(),
            context,
            generated: Vec::new(),
        }
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    /// The screen receiving input
    pub fn active(&self) -> &Screen {
        self.stack.top()
    }

    /// Number of screens on the stack, including the main menu
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Reports of every tool generated this session
    pub fn generated(&self) -> &[GenerationReport] {
        &self.generated
    }

    pub fn into_generated(self) -> Vec<GenerationReport> {
        self.generated
    }

    /// Render the active screen
    pub fn render(&self) -> String {
        self.active().render()
    }

    /// Process one key completely before the next is accepted
    pub fn handle_key(&mut self, key: &Key) -> Flow {
        let Some(effect) = self.stack.top_mut().update(key) else {
            return Flow::Continue;
        };

        match effect {
            Effect::Push(screen) => {
                tracing::debug!(screen = screen.title(), depth = self.depth() + 1, "push screen");
                self.stack.push(screen);
            }
            Effect::Pop => {
                if let Some(screen) = self.stack.pop() {
                    tracing::debug!(screen = screen.title(), "pop screen");
                }
            }
            Effect::Quit => {
                tracing::info!(screen = self.active().title(), "session quit");
                return Flow::Quit;
            }
            Effect::Generate(spec) => {
                let result = self.context.scaffolder.generate(&spec);
                if let Ok(report) = &result {
                    self.generated.push(report.clone());
                }
                self.stack.top_mut().finish_generation(result);
            }
        }

        Flow::Continue
    }

    /// Feed keys until one ends the session
    pub fn handle_keys<'a>(&mut self, keys: impl IntoIterator<Item = &'a Key>) -> Flow {
        for key in keys {
            if self.handle_key(key) == Flow::Quit {
                return Flow::Quit;
            }
        }
        Flow::Continue
    }
}
