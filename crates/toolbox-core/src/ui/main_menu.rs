//! Main menu: the root screen

use super::feature::{Feature, FeatureScreen};
use super::generator::GeneratorScreen;
use super::screen::{Effect, Frame, Screen};
use super::Key;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Feature(Feature),
    ToolGenerator,
    Exit,
}

impl MenuItem {
    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Feature(feature) => feature.title(),
            MenuItem::ToolGenerator => "Tool Generator",
            MenuItem::Exit => "Exit",
        }
    }
}

pub const MENU_ITEMS: [MenuItem; 8] = [
    MenuItem::Feature(Feature::FileOperations),
    MenuItem::Feature(Feature::NetworkTools),
    MenuItem::Feature(Feature::SystemInformation),
    MenuItem::Feature(Feature::StringUtilities),
    MenuItem::Feature(Feature::RandomGenerators),
    MenuItem::Feature(Feature::Configuration),
    MenuItem::ToolGenerator,
    MenuItem::Exit,
];

/// State for the main menu
#[derive(Debug, Default)]
pub struct MainMenu {
    cursor: usize,
}

impl MainMenu {
    pub const TITLE: &'static str = "Toolbox TUI";

    pub fn new() -> Self {
        Self { cursor: 0 }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected(&self) -> MenuItem {
        MENU_ITEMS[self.cursor]
    }

    pub fn previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn next(&mut self) {
        if self.cursor + 1 < MENU_ITEMS.len() {
            self.cursor += 1;
        }
    }

    pub fn update(&mut self, key: &Key) -> Option<Effect> {
        match key {
            Key::Char('q') | Key::CtrlC => Some(Effect::Quit),
            Key::Up | Key::Char('k') => {
                self.previous();
                None
            }
            Key::Down | Key::Char('j') => {
                self.next();
                None
            }
            Key::Enter | Key::Char(' ') => Some(match self.selected() {
                MenuItem::Feature(feature) => {
                    Effect::Push(Screen::Feature(FeatureScreen::new(feature)))
                }
                MenuItem::ToolGenerator => Effect::Push(Screen::Generator(GeneratorScreen::new())),
                MenuItem::Exit => Effect::Quit,
            }),
            _ => None,
        }
    }

    pub fn render(&self) -> String {
        Frame::new(Self::TITLE)
            .menu(MENU_ITEMS.iter().map(MenuItem::label), self.cursor)
            .help("↑↓ Navigate • Enter Select • q Quit")
    }
}
