use crate::game::{Game, GameConfig, Phase};

use super::{AppState, Scene};

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    FirstName,
    SecondName,
    Seed,
}

const MENU_ITEMS: [MenuItem; 3] = [MenuItem::FirstName, MenuItem::SecondName, MenuItem::Seed];

const MAX_NAME_LEN: usize = 24;
const MAX_SEED_DIGITS: usize = 20;

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        let value = |s: &str, placeholder: &str| {
            if s.is_empty() {
                format!("<{placeholder}>")
            } else {
                s.to_string()
            }
        };
        match self {
            MenuItem::FirstName => format!(
                "Player 1: {}",
                value(&app.name_inputs[0], GameConfig::DEFAULT_NAMES[0])
            ),
            MenuItem::SecondName => format!(
                "Player 2: {}",
                value(&app.name_inputs[1], GameConfig::DEFAULT_NAMES[1])
            ),
            MenuItem::Seed => format!("Seed: {}", value(&app.seed_input, "random")),
        }
    }

    fn push(self, app: &mut AppState, c: char) -> bool {
        match self {
            MenuItem::FirstName | MenuItem::SecondName => {
                let idx = if matches!(self, MenuItem::FirstName) { 0 } else { 1 };
                let field = &mut app.name_inputs[idx];
                if c.is_control() || field.chars().count() >= MAX_NAME_LEN {
                    return false;
                }
                field.push(c);
                true
            }
            MenuItem::Seed => {
                if !c.is_ascii_digit() || app.seed_input.len() >= MAX_SEED_DIGITS {
                    return false;
                }
                app.seed_input.push(c);
                true
            }
        }
    }

    fn pop(self, app: &mut AppState) -> bool {
        let field = match self {
            MenuItem::FirstName => &mut app.name_inputs[0],
            MenuItem::SecondName => &mut app.name_inputs[1],
            MenuItem::Seed => &mut app.seed_input,
        };
        field.pop().is_some()
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    pub fn toggle_menu(&mut self) {
        self.close_help();
        self.scene = match self.scene {
            Scene::Setup => Scene::Table,
            _ => {
                self.open_menu();
                Scene::Setup
            }
        };
    }

    // --- Setup operations ---
    pub fn open_menu(&mut self) {
        self.close_help();
        self.auto_play = false;
        self.menu_index = 0;
        self.name_inputs = self.config.names.clone();
        self.seed_input = self.config.seed.map(|s| s.to_string()).unwrap_or_default();
        self.scene = Scene::Setup;
    }

    /// Build a config from the setup fields and deal a new game.
    pub fn apply_menu(&mut self) {
        let [first, second] = self.name_inputs.clone();
        let mut config = GameConfig::new(first, second);
        match self.seed_input.parse::<u64>() {
            Ok(seed) => config = config.with_seed(seed),
            Err(_) if self.seed_input.is_empty() => {}
            Err(e) => {
                self.set_error(format!("invalid seed: {e}"));
                return;
            }
        }
        self.config = config;
        let [first, second] = self.config.names.clone();
        self.game = Game::new(first, second);
        self.scene = Scene::Table;
        self.new_game();
    }

    /// Leave setup without changes. Returns false when no game has been dealt yet.
    pub fn cancel_menu(&mut self) -> bool {
        if self.game.phase() == Phase::NotStarted {
            return false;
        }
        self.scene = Scene::Table;
        true
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }
    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }
    pub fn menu_char(&mut self, c: char) -> bool {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.push(self, c)
    }
    pub fn menu_backspace(&mut self) -> bool {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.pop(self)
    }
}
