//! Renderable list rows.
//!
//! Entries of every list screen materialize into [`ListRow`] only when a
//! transition inserts or updates them.

/// A concrete row handed to a list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListRow {
    PeerInfo {
        title: String,
        status: Option<String>,
    },
    SectionHeader(String),
    Switch {
        title: String,
        value: bool,
        enabled: bool,
    },
    Text(String),
    Action {
        title: String,
        destructive: bool,
    },
    /// Service or quoted message in the recent actions log.
    Message {
        author: Option<String>,
        text: String,
    },
    Command {
        command: String,
        description: String,
    },
    /// Row loaded from a snapshot file.
    Plain {
        id: String,
        content: Option<String>,
    },
}

impl ListRow {
    /// Single-line text form used by the CLI report.
    pub fn display_line(&self) -> String {
        match self {
            Self::PeerInfo { title, status } => match status {
                Some(status) => format!("{title} ({status})"),
                None => title.clone(),
            },
            Self::SectionHeader(text) => text.to_uppercase(),
            Self::Switch {
                title,
                value,
                enabled,
            } => {
                let mark = if *value { "[x]" } else { "[ ]" };
                let lock = if *enabled { "" } else { " (locked)" };
                format!("{mark} {title}{lock}")
            }
            Self::Text(text) => text.clone(),
            Self::Action { title, destructive } => {
                if *destructive {
                    format!("! {title}")
                } else {
                    format!("> {title}")
                }
            }
            Self::Message { author, text } => match author {
                Some(author) => format!("{author}: {text}"),
                None => text.clone(),
            },
            Self::Command {
                command,
                description,
            } => {
                if description.is_empty() {
                    format!("/{command}")
                } else {
                    format!("/{command} - {description}")
                }
            }
            Self::Plain { id, content } => match content {
                Some(content) => format!("{id} = {content}"),
                None => id.clone(),
            },
        }
    }
}
