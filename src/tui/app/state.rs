use crate::cards::Card;
use crate::game::{Game, GameConfig, Phase, StepOutcome};
use crate::report::{EventLog, GameEvent, Reporter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Setup,
    Table,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuChar(char),
    MenuBackspace,
    MenuApply,
    MenuCancel,
    ToggleMenu,
    ToggleHelp,
    Step,
    PlayHand,
    ToggleAuto,
    NewGame,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    pub game: Game,
    pub config: GameConfig,
    pub log: EventLog,
    // Setup fields being edited
    pub menu_index: usize,
    pub name_inputs: [String; 2],
    pub seed_input: String,
    pub auto_play: bool,
    help_open: bool,
    error: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        let config = GameConfig::default();
        let [first, second] = config.names.clone();
        Self {
            scene: Scene::Setup,
            game: Game::new(first, second),
            config,
            log: EventLog::new(),
            menu_index: 0,
            name_inputs: [String::new(), String::new()],
            seed_input: String::new(),
            auto_play: false,
            help_open: false,
            error: None,
        }
    }
}

impl AppState {
    pub const LOG_LINES: usize = 12;

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub(crate) fn close_help(&mut self) {
        self.help_open = false;
    }

    pub(crate) fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }

    /// The most recent pair of face-up cards, first seat's card first.
    pub fn last_pair(&self) -> Option<(Card, Card)> {
        self.log.events().iter().rev().find_map(|e| match e {
            GameEvent::CardsInPlay { c1, c2, .. } => Some((*c1, *c2)),
            _ => None,
        })
    }

    pub fn recent_log_lines(&self) -> Vec<String> {
        self.log
            .recent(Self::LOG_LINES)
            .iter()
            .filter(|e| !matches!(e, GameEvent::Deck { .. } | GameEvent::Hand { .. }))
            .map(GameEvent::describe)
            .collect()
    }

    /// Deal a fresh game from the current config.
    pub fn new_game(&mut self) {
        self.log.clear();
        self.error = None;
        self.auto_play = false;
        match Game::start(&self.config, &mut self.log) {
            Ok(game) => self.game = game,
            Err(e) => self.set_error(e.to_string()),
        }
    }

    fn can_step(&self) -> bool {
        self.scene == Scene::Table
            && matches!(
                self.game.phase(),
                Phase::ResolvingHand | Phase::WarEscalation | Phase::HandResolved
            )
    }

    fn step(&mut self) -> bool {
        if !self.can_step() {
            return false;
        }
        match self.game.step(&mut self.log) {
            Ok(outcome) => {
                if matches!(outcome, StepOutcome::Forfeit { .. }) {
                    self.finish();
                }
                true
            }
            Err(e) => {
                self.set_error(e.to_string());
                false
            }
        }
    }

    fn play_hand(&mut self) -> bool {
        if !self.can_step() {
            return false;
        }
        match self.game.play_hand(&mut self.log) {
            Ok(outcome) => {
                if matches!(outcome, StepOutcome::Forfeit { .. }) {
                    self.finish();
                }
                true
            }
            Err(e) => {
                self.set_error(e.to_string());
                false
            }
        }
    }

    fn finish(&mut self) {
        self.auto_play = false;
        let summary = self.game.summary();
        self.log.report_final_stats(&summary);
    }

    /// Called on every controller tick.
    pub fn on_tick(&mut self) {
        if self.auto_play {
            let _ = self.step();
        }
    }

    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::MenuNext => {
                self.menu_next();
                true
            }
            InputAction::MenuPrev => {
                self.menu_prev();
                true
            }
            InputAction::MenuChar(c) => self.menu_char(c),
            InputAction::MenuBackspace => self.menu_backspace(),
            InputAction::MenuApply => {
                self.apply_menu();
                true
            }
            InputAction::MenuCancel => self.cancel_menu(),
            InputAction::ToggleMenu => {
                self.toggle_menu();
                true
            }
            InputAction::ToggleHelp => {
                self.help_open = !self.help_open;
                true
            }
            InputAction::Step => {
                if self.game.phase() == Phase::NotStarted && self.scene == Scene::Table {
                    self.new_game();
                    return true;
                }
                self.step()
            }
            InputAction::PlayHand => self.play_hand(),
            InputAction::ToggleAuto => {
                if !self.can_step() {
                    return false;
                }
                self.auto_play = !self.auto_play;
                true
            }
            InputAction::NewGame => {
                if self.scene != Scene::Table {
                    return false;
                }
                self.new_game();
                true
            }
        }
    }
}
