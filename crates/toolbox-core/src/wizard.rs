//! Tool generator wizard state machine
//!
//! Steps run `ToolTypeSelect -> NameInput -> DescriptionInput` and end in
//! `Completion` or `Error`. Each step is either a menu or a text field, and
//! keys are interpreted according to that mode only.
//!
//! The wizard performs no I/O. Confirming the description yields
//! [`WizardEffect::Generate`]; the caller runs the scaffolder and reports the
//! outcome back through [`Wizard::finish_generation`].

use crate::error::{GenerateError, ValidationError};
use crate::scaffold::GenerationReport;
use crate::tool::{ToolName, ToolSpec, ToolType};
use crate::ui::Key;
use std::path::PathBuf;

/// Label of the last tool type choice, which leaves the wizard
pub const BACK_CHOICE: &str = "Back to Main Menu";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    ToolTypeSelect,
    NameInput,
    DescriptionInput,
    Completion,
    Error,
}

/// How keys are interpreted in a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Menu,
    TextEntry,
}

impl Step {
    pub fn mode(self) -> InputMode {
        match self {
            Step::NameInput | Step::DescriptionInput => InputMode::TextEntry,
            Step::ToolTypeSelect | Step::Completion | Step::Error => InputMode::Menu,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Up,
    Down,
    Confirm,
    Back,
    Retry,
    Edit,
    Quit,
}

impl MenuAction {
    fn from_key(key: &Key) -> Option<Self> {
        match key {
            Key::Up | Key::Char('k') => Some(MenuAction::Up),
            Key::Down | Key::Char('j') => Some(MenuAction::Down),
            Key::Enter | Key::Char(' ') => Some(MenuAction::Confirm),
            Key::Escape | Key::Char('b') => Some(MenuAction::Back),
            Key::Char('r') => Some(MenuAction::Retry),
            Key::Char('e') => Some(MenuAction::Edit),
            Key::Char('q') | Key::CtrlC => Some(MenuAction::Quit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum TextAction {
    Insert(String),
    DeleteChar,
    Confirm,
    Cancel,
    Quit,
}

impl TextAction {
    fn from_key(key: &Key) -> Option<Self> {
        match key {
            Key::CtrlC => Some(TextAction::Quit),
            Key::Escape => Some(TextAction::Cancel),
            Key::Enter => Some(TextAction::Confirm),
            Key::Backspace => Some(TextAction::DeleteChar),
            Key::Char(c) if !c.is_control() => Some(TextAction::Insert(c.to_string())),
            Key::Paste(text) => Some(TextAction::Insert(text.clone())),
            _ => None,
        }
    }
}

/// Requests the wizard makes of whoever hosts it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEffect {
    /// Leave the wizard, discarding its state
    Exit,
    /// End the whole session
    Quit,
    /// Generate the tool and report back via `finish_generation`
    Generate(ToolSpec),
}

/// Wizard state
#[derive(Debug, Clone)]
pub struct Wizard {
    step: Step,
    cursor: usize,
    input: String,
    error: Option<String>,
    success: Option<String>,
    tool_type: Option<ToolType>,
    name: Option<ToolName>,
    description: Option<String>,
    created: Vec<PathBuf>,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            step: Step::ToolTypeSelect,
            cursor: 0,
            input: String::new(),
            error: None,
            success: None,
            tool_type: None,
            name: None,
            description: None,
            created: Vec::new(),
        }
    }

    /// Labels shown in the tool type menu
    pub fn choices() -> Vec<&'static str> {
        ToolType::ALL
            .iter()
            .map(|t| t.menu_label())
            .chain(std::iter::once(BACK_CHOICE))
            .collect()
    }

    fn choice_count() -> usize {
        ToolType::ALL.len() + 1
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn success(&self) -> Option<&str> {
        self.success.as_deref()
    }

    pub fn tool_type(&self) -> Option<ToolType> {
        self.tool_type
    }

    pub fn name(&self) -> Option<&ToolName> {
        self.name.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Files written by the last successful generation
    pub fn created(&self) -> &[PathBuf] {
        &self.created
    }

    /// Apply one key event
    pub fn update(&mut self, key: &Key) -> Option<WizardEffect> {
        match self.step.mode() {
            InputMode::Menu => MenuAction::from_key(key).and_then(|a| self.handle_menu(a)),
            InputMode::TextEntry => TextAction::from_key(key).and_then(|a| self.handle_text(a)),
        }
    }

    fn handle_menu(&mut self, action: MenuAction) -> Option<WizardEffect> {
        if action == MenuAction::Quit {
            return Some(WizardEffect::Quit);
        }

        match (self.step, action) {
            (Step::ToolTypeSelect, MenuAction::Up) => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            (Step::ToolTypeSelect, MenuAction::Down) => {
                if self.cursor + 1 < Self::choice_count() {
                    self.cursor += 1;
                }
                None
            }
            (Step::ToolTypeSelect, MenuAction::Confirm) => match ToolType::ALL.get(self.cursor) {
                Some(&tool_type) => {
                    tracing::debug!(%tool_type, "tool type selected");
                    self.tool_type = Some(tool_type);
                    self.enter_text_step(Step::NameInput, String::new());
                    None
                }
                None => Some(WizardEffect::Exit),
            },
            (Step::ToolTypeSelect, MenuAction::Back) => Some(WizardEffect::Exit),
            (Step::Completion | Step::Error, MenuAction::Retry) => {
                tracing::debug!("wizard reset for another tool");
                *self = Self::new();
                None
            }
            (Step::Completion | Step::Error, MenuAction::Back) => Some(WizardEffect::Exit),
            (Step::Error, MenuAction::Edit) => {
                let name = self.name.take().map(|n| n.to_string()).unwrap_or_default();
                self.error = None;
                self.enter_text_step(Step::NameInput, name);
                None
            }
            _ => None,
        }
    }

    fn handle_text(&mut self, action: TextAction) -> Option<WizardEffect> {
        match action {
            TextAction::Quit => Some(WizardEffect::Quit),
            TextAction::Insert(text) => {
                self.input.extend(text.chars().filter(|c| !c.is_control()));
                None
            }
            TextAction::DeleteChar => {
                self.input.pop();
                None
            }
            TextAction::Cancel => {
                self.cancel();
                None
            }
            TextAction::Confirm => self.confirm_text(),
        }
    }

    fn enter_text_step(&mut self, step: Step, input: String) {
        self.step = step;
        self.input = input;
        self.error = None;
    }

    /// Step back exactly one position, discarding the current buffer
    fn cancel(&mut self) {
        match self.step {
            Step::NameInput => {
                // A description kept for editing belongs to the abandoned name.
                self.name = None;
                self.description = None;
                self.input.clear();
                self.error = None;
                self.step = Step::ToolTypeSelect;
            }
            Step::DescriptionInput => {
                self.description = None;
                let name = self.name.take().map(|n| n.to_string()).unwrap_or_default();
                self.enter_text_step(Step::NameInput, name);
            }
            _ => {}
        }
        tracing::debug!(step = ?self.step, "wizard step cancelled");
    }

    fn confirm_text(&mut self) -> Option<WizardEffect> {
        match self.step {
            Step::NameInput => {
                match ToolName::parse(&self.input) {
                    Ok(name) => {
                        self.name = Some(name);
                        let retained = self.description.take().unwrap_or_default();
                        self.enter_text_step(Step::DescriptionInput, retained);
                    }
                    Err(e) => self.reject(e),
                }
                None
            }
            Step::DescriptionInput => {
                let (Some(tool_type), Some(name)) = (self.tool_type, self.name.clone()) else {
                    // Unreachable through update(); recover by starting over.
                    *self = Self::new();
                    return None;
                };
                match ToolSpec::new(tool_type, name, &self.input) {
                    Ok(spec) => {
                        self.description = Some(spec.description().to_string());
                        Some(WizardEffect::Generate(spec))
                    }
                    Err(e) => {
                        self.reject(e);
                        None
                    }
                }
            }
            _ => None,
        }
    }

    fn reject(&mut self, error: ValidationError) {
        tracing::debug!(step = ?self.step, %error, "input rejected");
        self.error = Some(error.to_string());
    }

    /// Record the outcome of a `Generate` request
    pub fn finish_generation(&mut self, result: Result<GenerationReport, GenerateError>) {
        self.input.clear();
        match result {
            Ok(report) => {
                let tool_type = self.tool_type.map(|t| t.display_name()).unwrap_or("unknown");
                let name = self.name.as_ref().map(ToolName::as_str).unwrap_or_default();
                self.success = Some(format!(
                    "Successfully generated {} tool: {}",
                    tool_type, name
                ));
                self.error = None;
                self.created = report.created;
                self.step = Step::Completion;
            }
            Err(e) => {
                tracing::warn!(error = %e, "tool generation failed");
                self.success = None;
                self.error = Some(format!("Error generating tool: {}", e));
                self.created.clear();
                self.step = Step::Error;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::key::keys_for;

    fn press(wizard: &mut Wizard, keys: &[Key]) -> Option<WizardEffect> {
        let mut last = None;
        for key in keys {
            last = wizard.update(key);
        }
        last
    }

    fn at_name_input(tool_type_index: usize) -> Wizard {
        let mut wizard = Wizard::new();
        for _ in 0..tool_type_index {
            wizard.update(&Key::Down);
        }
        wizard.update(&Key::Enter);
        assert_eq!(wizard.step(), Step::NameInput);
        wizard
    }

    fn at_description(name: &str) -> Wizard {
        let mut wizard = at_name_input(0);
        press(&mut wizard, &keys_for(name));
        wizard.update(&Key::Enter);
        assert_eq!(wizard.step(), Step::DescriptionInput);
        wizard
    }

    #[test]
    fn test_initial_state() {
        let wizard = Wizard::new();
        assert_eq!(wizard.step(), Step::ToolTypeSelect);
        assert_eq!(wizard.cursor(), 0);
        assert_eq!(wizard.input(), "");
        assert!(wizard.error().is_none());
        assert!(wizard.success().is_none());
        assert_eq!(
            Wizard::choices(),
            vec!["CLI Tool", "TUI Tool", "Web Tool", "Back to Main Menu"]
        );
    }

    #[test]
    fn test_cursor_clamps_without_wrapping() {
        let mut wizard = Wizard::new();
        press(&mut wizard, &[Key::Down, Key::Down, Key::Down, Key::Up]);
        assert_eq!(wizard.cursor(), 2);

        press(&mut wizard, &[Key::Down, Key::Down, Key::Down]);
        assert_eq!(wizard.cursor(), 3);

        press(&mut wizard, &[Key::Up, Key::Up, Key::Up, Key::Up, Key::Up]);
        assert_eq!(wizard.cursor(), 0);
        assert_eq!(wizard.step(), Step::ToolTypeSelect);
    }

    #[test]
    fn test_vim_keys_navigate_menu() {
        let mut wizard = Wizard::new();
        press(&mut wizard, &[Key::Char('j'), Key::Char('j'), Key::Char('k')]);
        assert_eq!(wizard.cursor(), 1);
    }

    #[test]
    fn test_back_choice_exits() {
        let mut wizard = Wizard::new();
        let effect = press(&mut wizard, &[Key::Down, Key::Down, Key::Down, Key::Enter]);
        assert_eq!(effect, Some(WizardEffect::Exit));
    }

    #[test]
    fn test_escape_in_type_select_exits() {
        let mut wizard = Wizard::new();
        assert_eq!(wizard.update(&Key::Escape), Some(WizardEffect::Exit));
    }

    #[test]
    fn test_confirm_carries_tool_type() {
        let wizard = at_name_input(2);
        assert_eq!(wizard.tool_type(), Some(ToolType::Web));
        assert_eq!(wizard.input(), "");
    }

    #[test]
    fn test_menu_keys_are_text_in_entry_steps() {
        let mut wizard = at_name_input(0);
        let effect = press(&mut wizard, &keys_for("bjkqre "));
        assert_eq!(effect, None);
        assert_eq!(wizard.step(), Step::NameInput);
        assert_eq!(wizard.input(), "bjkqre ");
    }

    #[test]
    fn test_backspace_removes_whole_characters() {
        let mut wizard = at_name_input(0);
        press(&mut wizard, &keys_for("héé🦀"));
        wizard.update(&Key::Backspace);
        assert_eq!(wizard.input(), "héé");
        press(&mut wizard, &[Key::Backspace, Key::Backspace, Key::Backspace, Key::Backspace]);
        assert_eq!(wizard.input(), "");
    }

    #[test]
    fn test_paste_is_inserted_atomically_without_controls() {
        let mut wizard = at_name_input(0);
        wizard.update(&Key::Paste("file-\nhasher".to_string()));
        assert_eq!(wizard.input(), "file-hasher");
    }

    #[test]
    fn test_cancel_then_reenter_has_empty_buffer() {
        let mut wizard = at_name_input(0);
        press(&mut wizard, &keys_for("abc"));
        wizard.update(&Key::Escape);
        assert_eq!(wizard.step(), Step::ToolTypeSelect);

        wizard.update(&Key::Enter);
        assert_eq!(wizard.step(), Step::NameInput);
        assert_eq!(wizard.input(), "");
    }

    #[test]
    fn test_invalid_name_stays_on_step() {
        let mut wizard = at_name_input(0);
        press(&mut wizard, &keys_for("My Tool!"));
        let effect = wizard.update(&Key::Enter);

        assert_eq!(effect, None);
        assert_eq!(wizard.step(), Step::NameInput);
        assert!(wizard.error().unwrap().contains("invalid tool name"));
        assert_eq!(wizard.input(), "My Tool!");
    }

    #[test]
    fn test_empty_inputs_are_rejected() {
        let mut wizard = at_name_input(0);
        press(&mut wizard, &[Key::Char(' '), Key::Enter]);
        assert_eq!(wizard.step(), Step::NameInput);
        assert_eq!(wizard.error(), Some("tool name cannot be empty"));

        let mut wizard = at_description("pinger");
        assert_eq!(wizard.update(&Key::Enter), None);
        assert_eq!(wizard.step(), Step::DescriptionInput);
        assert_eq!(wizard.error(), Some("description cannot be empty"));
    }

    #[test]
    fn test_cancel_description_restores_name() {
        let mut wizard = at_description("pinger");
        press(&mut wizard, &keys_for("half typed"));
        wizard.update(&Key::Escape);

        assert_eq!(wizard.step(), Step::NameInput);
        assert_eq!(wizard.input(), "pinger");

        wizard.update(&Key::Enter);
        assert_eq!(wizard.step(), Step::DescriptionInput);
        assert_eq!(wizard.input(), "");
    }

    #[test]
    fn test_description_confirm_requests_generation() {
        let mut wizard = at_description("pinger");
        press(&mut wizard, &keys_for("Pings a host"));

        let expected = ToolSpec::new(
            ToolType::Cli,
            ToolName::parse("pinger").unwrap(),
            "Pings a host",
        )
        .unwrap();
        assert_eq!(
            wizard.update(&Key::Enter),
            Some(WizardEffect::Generate(expected))
        );
    }

    #[test]
    fn test_success_moves_to_completion() {
        let mut wizard = at_description("pinger");
        press(&mut wizard, &keys_for("Pings a host"));
        wizard.update(&Key::Enter);

        wizard.finish_generation(Ok(GenerationReport {
            destination: PathBuf::from("cmd/cli/pinger"),
            created: vec![PathBuf::from("cmd/cli/pinger/main.rs")],
        }));

        assert_eq!(wizard.step(), Step::Completion);
        assert_eq!(
            wizard.success(),
            Some("Successfully generated CLI tool: pinger")
        );
        assert_eq!(wizard.created().len(), 1);
    }

    #[test]
    fn test_failure_retains_collected_values() {
        let mut wizard = at_description("pinger");
        press(&mut wizard, &keys_for("Pings a host"));
        wizard.update(&Key::Enter);

        wizard.finish_generation(Err(GenerateError::NameCollision {
            path: PathBuf::from("cmd/cli/pinger/main.rs"),
        }));

        assert_eq!(wizard.step(), Step::Error);
        assert!(wizard.error().unwrap().starts_with("Error generating tool:"));
        assert_eq!(wizard.tool_type(), Some(ToolType::Cli));
        assert_eq!(wizard.name().map(ToolName::as_str), Some("pinger"));
        assert_eq!(wizard.description(), Some("Pings a host"));
    }

    #[test]
    fn test_edit_after_error_keeps_description() {
        let mut wizard = at_description("pinger");
        press(&mut wizard, &keys_for("Pings a host"));
        wizard.update(&Key::Enter);
        wizard.finish_generation(Err(GenerateError::NameCollision {
            path: PathBuf::from("x"),
        }));

        wizard.update(&Key::Char('e'));
        assert_eq!(wizard.step(), Step::NameInput);
        assert_eq!(wizard.input(), "pinger");

        press(&mut wizard, &keys_for("2"));
        wizard.update(&Key::Enter);
        assert_eq!(wizard.step(), Step::DescriptionInput);
        assert_eq!(wizard.input(), "Pings a host");
    }

    #[test]
    fn test_cancel_to_type_select_after_edit_drops_description() {
        let mut wizard = at_description("pinger");
        press(&mut wizard, &keys_for("Pings a host"));
        wizard.update(&Key::Enter);
        wizard.finish_generation(Err(GenerateError::NameCollision {
            path: PathBuf::from("x"),
        }));

        wizard.update(&Key::Char('e'));
        wizard.update(&Key::Escape);
        assert_eq!(wizard.step(), Step::ToolTypeSelect);
        assert!(wizard.description().is_none());

        wizard.update(&Key::Down);
        wizard.update(&Key::Enter);
        press(&mut wizard, &keys_for("viewer"));
        wizard.update(&Key::Enter);
        assert_eq!(wizard.step(), Step::DescriptionInput);
        assert_eq!(wizard.input(), "");
    }

    #[test]
    fn test_retry_resets_everything() {
        let mut wizard = at_description("pinger");
        press(&mut wizard, &keys_for("Pings a host"));
        wizard.update(&Key::Enter);
        wizard.finish_generation(Ok(GenerationReport {
            destination: PathBuf::from("d"),
            created: vec![],
        }));

        wizard.update(&Key::Char('r'));
        assert_eq!(wizard.step(), Step::ToolTypeSelect);
        assert!(wizard.tool_type().is_none());
        assert!(wizard.name().is_none());
        assert!(wizard.description().is_none());
        assert!(wizard.success().is_none());
    }

    #[test]
    fn test_back_from_terminal_steps_exits() {
        let mut wizard = at_description("pinger");
        press(&mut wizard, &keys_for("Pings a host"));
        wizard.update(&Key::Enter);
        wizard.finish_generation(Err(GenerateError::NameCollision {
            path: PathBuf::from("x"),
        }));
        assert_eq!(wizard.update(&Key::Char('b')), Some(WizardEffect::Exit));
    }

    #[test]
    fn test_quit_from_every_step() {
        let mut wizard = Wizard::new();
        assert_eq!(wizard.update(&Key::Char('q')), Some(WizardEffect::Quit));

        let mut wizard = at_name_input(1);
        assert_eq!(wizard.update(&Key::CtrlC), Some(WizardEffect::Quit));

        let mut wizard = at_description("viewer");
        assert_eq!(wizard.update(&Key::CtrlC), Some(WizardEffect::Quit));
    }
}
