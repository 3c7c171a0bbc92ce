//! Tool generator screen: hosts the wizard and renders its steps

use super::screen::{Effect, Frame};
use super::Key;
use crate::wizard::{Step, Wizard, WizardEffect};

/// State for the tool generator screen
#[derive(Debug, Default)]
pub struct GeneratorScreen {
    wizard: Wizard,
}

impl GeneratorScreen {
    pub const TITLE: &'static str = "Tool Generator";

    pub fn new() -> Self {
        Self {
            wizard: Wizard::new(),
        }
    }

    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    pub fn wizard_mut(&mut self) -> &mut Wizard {
        &mut self.wizard
    }

    pub fn update(&mut self, key: &Key) -> Option<Effect> {
        self.wizard.update(key).map(|effect| match effect {
            WizardEffect::Exit => Effect::Pop,
            WizardEffect::Quit => Effect::Quit,
            WizardEffect::Generate(spec) => Effect::Generate(spec),
        })
    }

    pub fn render(&self) -> String {
        let wizard = &self.wizard;
        let frame = Frame::new(Self::TITLE);
        let tool_type = wizard
            .tool_type()
            .map(|t| t.display_name())
            .unwrap_or_default();

        let frame = match wizard.step() {
            Step::ToolTypeSelect => frame
                .line("Select the type of tool to generate:")
                .blank()
                .menu(Wizard::choices(), wizard.cursor()),
            Step::NameInput => frame
                .line(format!("Creating {} Tool", tool_type))
                .blank()
                .line("    Enter tool name (lowercase, no spaces):")
                .line(format!("    [ {}█ ]", wizard.input()))
                .blank()
                .line("    Examples: file-hasher, net-ping, json-format"),
            Step::DescriptionInput => frame
                .line(format!("Creating {} Tool", tool_type))
                .blank()
                .line("    Enter tool description:")
                .line(format!("    [ {}█ ]", wizard.input()))
                .blank()
                .line("    Example: A CLI tool for calculating file hashes"),
            Step::Completion => {
                let mut frame = frame
                    .line("Tool Generation Complete!")
                    .blank()
                    .line(format!("  ✓ {}", wizard.success().unwrap_or_default()))
                    .blank()
                    .line(format!(
                        "    Tool: {}",
                        wizard.name().map(|n| n.as_str()).unwrap_or_default()
                    ))
                    .line(format!("    Type: {}", tool_type))
                    .line(format!(
                        "    Description: {}",
                        wizard.description().unwrap_or_default()
                    ))
                    .blank()
                    .line("    Files created:");
                for path in wizard.created() {
                    frame = frame.line(format!("      • {}", path.display()));
                }
                frame
            }
            Step::Error => frame.line("Tool Generation Failed"),
        };

        let frame = match wizard.error() {
            Some(error) => frame.blank().line(format!("  ✗ {}", error)),
            None => frame,
        };

        frame.help(match wizard.step() {
            Step::ToolTypeSelect => "↑↓ Navigate • Enter Select • Esc Back • q Quit",
            Step::NameInput | Step::DescriptionInput => {
                "Enter Continue • Esc Go back • Ctrl+C Quit"
            }
            Step::Completion => "Press 'r' to create another tool, 'b' to go back, or 'q' to quit",
            Step::Error => {
                "Press 'e' to edit the name, 'r' to start over, 'b' to go back, or 'q' to quit"
            }
        })
    }
}
