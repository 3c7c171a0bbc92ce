//! Placeholder screens for toolbox features

use super::screen::{Effect, Frame};
use super::Key;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    FileOperations,
    NetworkTools,
    SystemInformation,
    StringUtilities,
    RandomGenerators,
    Configuration,
}

impl Feature {
    pub fn title(&self) -> &'static str {
        match self {
            Feature::FileOperations => "File Operations",
            Feature::NetworkTools => "Network Tools",
            Feature::SystemInformation => "System Information",
            Feature::StringUtilities => "String Utilities",
            Feature::RandomGenerators => "Random Generators",
            Feature::Configuration => "Configuration",
        }
    }

    fn intro(&self) -> (&'static str, &'static str) {
        match self {
            Feature::FileOperations => (
                "This is where file operations would be implemented.",
                "Features could include:",
            ),
            Feature::NetworkTools => (
                "Network utilities would be implemented here.",
                "Features could include:",
            ),
            Feature::SystemInformation => (
                "System information would be displayed here.",
                "Information could include:",
            ),
            Feature::StringUtilities => (
                "String manipulation tools would be here.",
                "Operations could include:",
            ),
            Feature::RandomGenerators => (
                "Random generation tools would be here.",
                "Generators could include:",
            ),
            Feature::Configuration => (
                "Configuration settings would be here.",
                "Settings could include:",
            ),
        }
    }

    fn bullets(&self) -> &'static [&'static str] {
        match self {
            Feature::FileOperations => &[
                "File hash calculation",
                "File size analysis",
                "Directory tree view",
                "File search",
            ],
            Feature::NetworkTools => &[
                "Ping tool",
                "Port scanner",
                "Network interface info",
                "DNS lookup",
            ],
            Feature::SystemInformation => &[
                "OS and version",
                "CPU information",
                "Memory usage",
                "Disk usage",
                "Running processes",
            ],
            Feature::StringUtilities => &[
                "Case conversions",
                "String reversal",
                "Text encoding/decoding",
                "Regular expression testing",
            ],
            Feature::RandomGenerators => &["Random strings", "UUIDs", "Passwords", "Random numbers"],
            Feature::Configuration => &[
                "Theme selection",
                "Default output formats",
                "Logging preferences",
                "Key bindings",
            ],
        }
    }
}

/// Static placeholder content with back/quit
#[derive(Debug)]
pub struct FeatureScreen {
    feature: Feature,
}

impl FeatureScreen {
    pub fn new(feature: Feature) -> Self {
        Self { feature }
    }

    pub fn feature(&self) -> Feature {
        self.feature
    }

    pub fn update(&mut self, key: &Key) -> Option<Effect> {
        match key {
            Key::Char('q') | Key::CtrlC => Some(Effect::Quit),
            Key::Escape | Key::Char('b') => Some(Effect::Pop),
            _ => None,
        }
    }

    pub fn render(&self) -> String {
        let (summary, lead) = self.feature.intro();
        let mut frame = Frame::new(self.feature.title())
            .line(format!("    {}", summary))
            .line(format!("    {}", lead));
        for bullet in self.feature.bullets() {
            frame = frame.line(format!("      • {}", bullet));
        }
        frame.help("Press 'b' or 'esc' to go back, 'q' to quit.")
    }
}
