use std::fmt;
use std::str::FromStr;

/// Topic a visitor picks when writing in. Stored as the lowercase key;
/// intake rejects anything outside this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageSubject {
    General,
    Membership,
    Events,
    Feedback,
}

impl MessageSubject {
    pub const ALL: [MessageSubject; 4] = [
        MessageSubject::General,
        MessageSubject::Membership,
        MessageSubject::Events,
        MessageSubject::Feedback,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MessageSubject::General => "general",
            MessageSubject::Membership => "membership",
            MessageSubject::Events => "events",
            MessageSubject::Feedback => "feedback",
        }
    }

    /// Human-readable form for the inbox listing.
    pub fn label(&self) -> &'static str {
        match self {
            MessageSubject::General => "General Inquiry",
            MessageSubject::Membership => "Membership Information",
            MessageSubject::Events => "Events & Programs",
            MessageSubject::Feedback => "Feedback",
        }
    }
}

impl fmt::Display for MessageSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MessageSubject {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "general" => Ok(MessageSubject::General),
            "membership" => Ok(MessageSubject::Membership),
            "events" => Ok(MessageSubject::Events),
            "feedback" => Ok(MessageSubject::Feedback),
            _ => Err(anyhow::anyhow!("Invalid message subject: {}", s)),
        }
    }
}
