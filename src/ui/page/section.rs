/// Page sections, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Section::Home => 0,
            Section::About => 1,
            Section::Skills => 2,
            Section::Projects => 3,
        }
    }

    /// Section for a `1..=4` hotkey.
    pub fn from_digit(digit: char) -> Option<Self> {
        let index = digit.to_digit(10)? as usize;
        Self::ALL.get(index.checked_sub(1)?).copied()
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_map_to_sections() {
        assert_eq!(Section::from_digit('1'), Some(Section::Home));
        assert_eq!(Section::from_digit('4'), Some(Section::Projects));
        assert_eq!(Section::from_digit('0'), None);
        assert_eq!(Section::from_digit('5'), None);
        assert_eq!(Section::from_digit('x'), None);
    }

    #[test]
    fn next_and_prev_wrap() {
        assert_eq!(Section::Projects.next(), Section::Home);
        assert_eq!(Section::Home.prev(), Section::Projects);
        assert_eq!(Section::About.next(), Section::Skills);
    }
}
