use serde::{Deserialize, Serialize};

use crate::model::ids::ChapterId;

//
// ─── SECTION ───────────────────────────────────────────────────────────────────
//

/// Syllabus section a chapter belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Section {
    Common,
    Life,
    Health,
}

impl Section {
    /// Sections in syllabus order.
    pub const ALL: [Section; 3] = [Section::Common, Section::Life, Section::Health];

    /// Heading shown above the section's chapters.
    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            Section::Common => "खंड 1: सामान्य अध्याय",
            Section::Life => "खंड 2: जीवन बीमा",
            Section::Health => "खंड 3: स्वास्थ्य बीमा",
        }
    }
}

//
// ─── CHAPTER ───────────────────────────────────────────────────────────────────
//

/// One syllabus chapter, or the synthetic full mock exam when `id == 0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    id: ChapterId,
    title: String,
    section: Section,
    description: String,
}

impl Chapter {
    #[must_use]
    pub fn new(
        id: ChapterId,
        title: impl Into<String>,
        section: Section,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            section,
            description: description.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> ChapterId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn section(&self) -> Section {
        self.section
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// True for the chapter that stands for the whole syllabus.
    #[must_use]
    pub fn is_mock(&self) -> bool {
        self.id.is_mock()
    }
}
