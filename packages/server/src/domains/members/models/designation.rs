use std::fmt;
use std::str::FromStr;

/// Society role held by a member.
///
/// Stored as the uppercase key. The roster sorts on the stored text, so
/// groups appear alphabetically by key, not by rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocietyDesignation {
    President,
    VicePresident,
    GeneralSecretary,
    Secretary,
    Treasurer,
    ExecutiveMember,
    GeneralMember,
}

impl SocietyDesignation {
    pub const ALL: [SocietyDesignation; 7] = [
        SocietyDesignation::President,
        SocietyDesignation::VicePresident,
        SocietyDesignation::GeneralSecretary,
        SocietyDesignation::Secretary,
        SocietyDesignation::Treasurer,
        SocietyDesignation::ExecutiveMember,
        SocietyDesignation::GeneralMember,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SocietyDesignation::President => "PRESIDENT",
            SocietyDesignation::VicePresident => "VICE_PRESIDENT",
            SocietyDesignation::GeneralSecretary => "GENERAL_SECRETARY",
            SocietyDesignation::Secretary => "SECRETARY",
            SocietyDesignation::Treasurer => "TREASURER",
            SocietyDesignation::ExecutiveMember => "EXECUTIVE_MEMBER",
            SocietyDesignation::GeneralMember => "GENERAL_MEMBER",
        }
    }

    /// Human-readable form for rendered rosters.
    pub fn label(&self) -> &'static str {
        match self {
            SocietyDesignation::President => "President",
            SocietyDesignation::VicePresident => "Vice President",
            SocietyDesignation::GeneralSecretary => "General Secretary",
            SocietyDesignation::Secretary => "Secretary",
            SocietyDesignation::Treasurer => "Treasurer",
            SocietyDesignation::ExecutiveMember => "Executive Member",
            SocietyDesignation::GeneralMember => "General Member",
        }
    }
}

impl fmt::Display for SocietyDesignation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SocietyDesignation {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PRESIDENT" => Ok(SocietyDesignation::President),
            "VICE_PRESIDENT" => Ok(SocietyDesignation::VicePresident),
            "GENERAL_SECRETARY" => Ok(SocietyDesignation::GeneralSecretary),
            "SECRETARY" => Ok(SocietyDesignation::Secretary),
            "TREASURER" => Ok(SocietyDesignation::Treasurer),
            "EXECUTIVE_MEMBER" => Ok(SocietyDesignation::ExecutiveMember),
            "GENERAL_MEMBER" => Ok(SocietyDesignation::GeneralMember),
            _ => Err(anyhow::anyhow!("Invalid society designation: {}", s)),
        }
    }
}
