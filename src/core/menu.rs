use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    DisplayLineup,
    AddPlayer,
    RemovePlayer,
    MovePlayer,
    EditPosition,
    EditStats,
    Exit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 7] = [
        MenuOption::DisplayLineup,
        MenuOption::AddPlayer,
        MenuOption::RemovePlayer,
        MenuOption::MovePlayer,
        MenuOption::EditPosition,
        MenuOption::EditStats,
        MenuOption::Exit,
    ];

    pub fn number(&self) -> u8 {
        match self {
            MenuOption::DisplayLineup => 1,
            MenuOption::AddPlayer => 2,
            MenuOption::RemovePlayer => 3,
            MenuOption::MovePlayer => 4,
            MenuOption::EditPosition => 5,
            MenuOption::EditStats => 6,
            MenuOption::Exit => 7,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuOption::DisplayLineup => "Display lineup",
            MenuOption::AddPlayer => "Add player",
            MenuOption::RemovePlayer => "Remove player",
            MenuOption::MovePlayer => "Move player",
            MenuOption::EditPosition => "Edit player position",
            MenuOption::EditStats => "Edit player stats",
            MenuOption::Exit => "Exit program",
        }
    }

    /// 選單分派後是否需要存檔 (不論操作本身是否被拒絕)
    pub fn is_mutating(&self) -> bool {
        !matches!(self, MenuOption::DisplayLineup | MenuOption::Exit)
    }
}

impl FromStr for MenuOption {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MenuOption::ALL
            .into_iter()
            .find(|option| option.number().to_string() == s.trim())
            .ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_menu_option() {
        assert_eq!("1".parse::<MenuOption>(), Ok(MenuOption::DisplayLineup));
        assert_eq!(" 7 ".parse::<MenuOption>(), Ok(MenuOption::Exit));
        assert!("0".parse::<MenuOption>().is_err());
        assert!("8".parse::<MenuOption>().is_err());
        assert!("add".parse::<MenuOption>().is_err());
    }

    #[test]
    fn test_mutating_options() {
        let mutating: Vec<u8> = MenuOption::ALL
            .iter()
            .filter(|o| o.is_mutating())
            .map(|o| o.number())
            .collect();
        assert_eq!(mutating, vec![2, 3, 4, 5, 6]);
    }
}
