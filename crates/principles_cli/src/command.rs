//! Console command vocabulary.

/// One parsed console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    ListPrinciples,
    ListCategories,
    AddPrinciple,
    EditPrinciple,
    LinkPrinciples,
    Exit,
    Unknown(String),
}

impl Command {
    /// Parses a trimmed line.
    ///
    /// `help`, `listp`, `listc` and `exit` must match exactly; `addp`,
    /// `editp` and `linkp` match as prefixes, so trailing text is ignored.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line {
            "help" => Self::Help,
            "listp" => Self::ListPrinciples,
            "listc" => Self::ListCategories,
            "exit" => Self::Exit,
            _ if line.starts_with("addp") => Self::AddPrinciple,
            _ if line.starts_with("editp") => Self::EditPrinciple,
            _ if line.starts_with("linkp") => Self::LinkPrinciples,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Stable name used in log events.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::ListPrinciples => "listp",
            Self::ListCategories => "listc",
            Self::AddPrinciple => "addp",
            Self::EditPrinciple => "editp",
            Self::LinkPrinciples => "linkp",
            Self::Exit => "exit",
            Self::Unknown(_) => "unknown",
        }
    }
}
