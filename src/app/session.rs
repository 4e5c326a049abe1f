use crate::app::console::Console;
use crate::core::menu::MenuOption;
use crate::core::roster::RosterService;
use crate::domain::model::Position;
use crate::domain::ports::RosterStore;
use crate::utils::error::{ErrorCategory, Result, RosterError};
use std::io::{BufRead, Write};

const LINE_LEN: usize = 64;

/// 互動式選單：讀取選項、交給 `RosterService`，變更類選項之後一律存檔
pub struct Session<S, R, W> {
    service: RosterService,
    store: S,
    console: Console<R, W>,
}

impl<S: RosterStore, R: BufRead, W: Write> Session<S, R, W> {
    pub fn new(store: S, console: Console<R, W>) -> Result<Self> {
        let players = store.load()?;
        tracing::info!("👥 Loaded {} players", players.len());

        Ok(Self {
            service: RosterService::new(players),
            store,
            console,
        })
    }

    pub fn service(&self) -> &RosterService {
        &self.service
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            self.display_menu()?;
            let choice = match self.console.read_line("Menu option: ") {
                Ok(choice) => choice,
                Err(RosterError::InputClosed) => break,
                Err(e) => return Err(e),
            };

            match choice.parse::<MenuOption>() {
                Ok(MenuOption::Exit) => {
                    self.console.line("Bye!")?;
                    break;
                }
                Ok(option) => match self.dispatch(option) {
                    Ok(()) => {}
                    Err(RosterError::InputClosed) => break,
                    Err(e) => return Err(e),
                },
                Err(()) => self.console.line("Invalid menu option. Please try again.")?,
            }
            self.console.blank()?;
        }

        tracing::info!("👋 Session finished");
        Ok(())
    }

    pub fn dispatch(&mut self, option: MenuOption) -> Result<()> {
        let result = match option {
            MenuOption::DisplayLineup => self.display_lineup(),
            MenuOption::AddPlayer => self.add_player(),
            MenuOption::RemovePlayer => self.remove_player(),
            MenuOption::MovePlayer => self.move_player(),
            MenuOption::EditPosition => self.edit_position(),
            MenuOption::EditStats => self.edit_stats(),
            MenuOption::Exit => Ok(()),
        };

        // 與操作結果無關，只要分派到變更類選項就存檔
        if option.is_mutating() {
            self.persist()?;
        }

        match result {
            Err(e) if e.category() == ErrorCategory::Validation => {
                tracing::debug!(?option, "operation rejected: {}", e);
                self.console.line(e.user_friendly_message())
            }
            other => other,
        }
    }

    fn persist(&mut self) -> Result<()> {
        if let Err(e) = self.store.save(self.service.players()) {
            tracing::error!("❌ Failed to save roster: {} (Category: {:?})", e, e.category());
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            self.console.line(format!("❌ {}", e.user_friendly_message()))?;
        }
        Ok(())
    }

    fn display_menu(&mut self) -> Result<()> {
        let line = "=".repeat(LINE_LEN);
        self.console.line(&line)?;
        self.console.line("Baseball Team Manager")?;
        self.console.blank()?;
        self.console.line("MENU OPTIONS")?;
        for option in MenuOption::ALL {
            self.console
                .line(format!("{} - {}", option.number(), option.label()))?;
        }
        self.console.blank()?;
        self.console.line("POSITIONS")?;
        let codes: Vec<&str> = Position::ALL.iter().map(|p| p.code()).collect();
        self.console.line(codes.join(", "))?;
        self.console.line(&line)
    }

    fn display_lineup(&mut self) -> Result<()> {
        self.console.blank()?;
        self.console
            .line("  Player                 POS     AB      H    AVG")?;
        self.console.line("-".repeat(LINE_LEN))?;
        for row in self.service.lineup() {
            self.console.line(row)?;
        }
        self.console.blank()
    }

    fn add_player(&mut self) -> Result<()> {
        self.console.blank()?;
        let name = self.console.read_line("Name: ")?;
        let position = self.console.read_position("Position: ")?;
        let at_bats = self.console.read_count("At bats: ")?;
        let hits = self.console.read_count("Hits: ")?;

        let name = self
            .service
            .add(name.trim(), position.code(), at_bats, hits)?;
        self.console.line(format!("{} was added.", name))
    }

    fn remove_player(&mut self) -> Result<()> {
        self.console.blank()?;
        let number = self.console.read_lineup_number("Number: ")?;

        let removed = self.service.remove(number)?;
        self.console.line(format!("{} was deleted.", removed.name))
    }

    fn move_player(&mut self) -> Result<()> {
        self.console.blank()?;
        let current = self.console.read_lineup_number("Current lineup number: ")?;
        let selected = self.service.get(current)?;
        self.console.line(format!("{} was selected.", selected.name))?;

        let new = self.console.read_lineup_number("New lineup number: ")?;
        let name = self.service.move_player(current, new)?;
        self.console.line(format!("{} was moved.", name))
    }

    fn edit_position(&mut self) -> Result<()> {
        self.console.blank()?;
        let number = self.console.read_lineup_number("Lineup number: ")?;
        let player = self.service.get(number)?;
        self.console
            .line(format!("You selected {} POS={}", player.name, player.position))?;

        let position = self.console.read_position("Position: ")?;
        let name = self.service.edit_position(number, position.code())?;
        self.console.line(format!("{} was updated.", name))
    }

    fn edit_stats(&mut self) -> Result<()> {
        self.console.blank()?;
        let number = self.console.read_lineup_number("Lineup number: ")?;
        self.service.get(number)?;

        let at_bats = self.console.read_count("At bats: ")?;
        let hits = self.console.read_count("Hits: ")?;
        let name = self.service.edit_stats(number, at_bats, hits)?;
        self.console.line(format!("{} was updated.", name))
    }
}
