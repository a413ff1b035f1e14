//! Dashboard navigation sections.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Sidebar entries. Only [`Section::Journal`] has content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Journal,
    Quiz,
    Achievements,
    Progress,
    Streak,
    History,
    Goals,
    Bookmarks,
    Settings,
}

impl Section {
    pub const ALL: [Section; 9] = [
        Section::Journal,
        Section::Quiz,
        Section::Achievements,
        Section::Progress,
        Section::Streak,
        Section::History,
        Section::Goals,
        Section::Bookmarks,
        Section::Settings,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Section::Journal => "journal",
            Section::Quiz => "quiz",
            Section::Achievements => "achievements",
            Section::Progress => "progress",
            Section::Streak => "streak",
            Section::History => "history",
            Section::Goals => "goals",
            Section::Bookmarks => "bookmarks",
            Section::Settings => "settings",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Journal => "My Journal",
            Section::Quiz => "Quiz Me!",
            Section::Achievements => "Achievements",
            Section::Progress => "Progress",
            Section::Streak => "Daily Streak",
            Section::History => "Study History",
            Section::Goals => "Goals",
            Section::Bookmarks => "Bookmarks",
            Section::Settings => "Settings",
        }
    }

    pub fn has_content(&self) -> bool {
        matches!(self, Section::Journal)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Section {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format("section", format!("unknown section '{s}'"))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn journal_is_the_default_and_only_populated_section() {
        assert_eq!(Section::default(), Section::Journal);
        let populated: Vec<_> = Section::ALL.iter().filter(|s| s.has_content()).collect();
        assert_eq!(populated, vec![&Section::Journal]);
    }

    #[test]
    fn ids_parse_back_to_sections() {
        for section in Section::ALL {
            assert_eq!(section.id().parse::<Section>().unwrap(), section);
        }
        assert!("journals".parse::<Section>().is_err());
    }

    #[test]
    fn labels_match_navigation() {
        assert_eq!(Section::Quiz.label(), "Quiz Me!");
        assert_eq!(Section::Streak.to_string(), "Daily Streak");
    }
}
