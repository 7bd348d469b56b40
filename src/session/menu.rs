/// Top-level menu entries, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Draw,
    List,
    Save,
    Load,
    Exit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 5] = [
        MenuOption::Draw,
        MenuOption::List,
        MenuOption::Save,
        MenuOption::Load,
        MenuOption::Exit,
    ];

    /// Parse a menu choice; surrounding whitespace is ignored
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::ALL
            .into_iter()
            .find(|option| option.key().to_string() == input)
    }

    /// Key the user types to pick this entry
    pub fn key(self) -> char {
        match self {
            MenuOption::Draw => '1',
            MenuOption::List => '2',
            MenuOption::Save => '3',
            MenuOption::Load => '4',
            MenuOption::Exit => '5',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuOption::Draw => "Draw a new figure",
            MenuOption::List => "Show figures drawn in this session",
            MenuOption::Save => "Save figures to file",
            MenuOption::Load => "Load figures from file",
            MenuOption::Exit => "Exit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keys() {
        assert_eq!(MenuOption::parse("1"), Some(MenuOption::Draw));
        assert_eq!(MenuOption::parse("2\n"), Some(MenuOption::List));
        assert_eq!(MenuOption::parse(" 3 "), Some(MenuOption::Save));
        assert_eq!(MenuOption::parse("4"), Some(MenuOption::Load));
        assert_eq!(MenuOption::parse("5"), Some(MenuOption::Exit));
    }

    #[test]
    fn test_parse_rejects_other_input() {
        for input in ["", "0", "6", "x", "15", "draw"] {
            assert_eq!(MenuOption::parse(input), None, "{input:?}");
        }
    }

    #[test]
    fn test_keys_are_unique() {
        for a in MenuOption::ALL {
            for b in MenuOption::ALL {
                if a != b {
                    assert_ne!(a.key(), b.key());
                }
            }
        }
    }
}
