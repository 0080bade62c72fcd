use chrono::{DateTime, NaiveDate, Utc};
use juniper::{GraphQLEnum, GraphQLObject};
use serde::{Deserialize, Serialize};

use crate::common::PageInfo;
use crate::domains::members::models::{Member, SocietyDesignation};

/// GraphQL mirror of the stored designation key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, GraphQLEnum)]
#[graphql(description = "Society role held by a member")]
pub enum SocietyDesignationData {
    President,
    VicePresident,
    GeneralSecretary,
    Secretary,
    Treasurer,
    ExecutiveMember,
    GeneralMember,
}

impl From<SocietyDesignation> for SocietyDesignationData {
    fn from(designation: SocietyDesignation) -> Self {
        match designation {
            SocietyDesignation::President => SocietyDesignationData::President,
            SocietyDesignation::VicePresident => SocietyDesignationData::VicePresident,
            SocietyDesignation::GeneralSecretary => SocietyDesignationData::GeneralSecretary,
            SocietyDesignation::Secretary => SocietyDesignationData::Secretary,
            SocietyDesignation::Treasurer => SocietyDesignationData::Treasurer,
            SocietyDesignation::ExecutiveMember => SocietyDesignationData::ExecutiveMember,
            SocietyDesignation::GeneralMember => SocietyDesignationData::GeneralMember,
        }
    }
}

impl From<SocietyDesignationData> for SocietyDesignation {
    fn from(designation: SocietyDesignationData) -> Self {
        match designation {
            SocietyDesignationData::President => SocietyDesignation::President,
            SocietyDesignationData::VicePresident => SocietyDesignation::VicePresident,
            SocietyDesignationData::GeneralSecretary => SocietyDesignation::GeneralSecretary,
            SocietyDesignationData::Secretary => SocietyDesignation::Secretary,
            SocietyDesignationData::Treasurer => SocietyDesignation::Treasurer,
            SocietyDesignationData::ExecutiveMember => SocietyDesignation::ExecutiveMember,
            SocietyDesignationData::GeneralMember => SocietyDesignation::GeneralMember,
        }
    }
}

/// Member GraphQL data type
///
/// Public API representation of a member (for GraphQL responses)
#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[graphql(description = "A society member or pending membership application")]
pub struct MemberData {
    /// Unique identifier
    pub id: String,

    /// Admin-facing heading; intake fills this from the applicant's name
    pub title: String,

    /// Admin-facing note; intake fills this from the application details
    pub content: String,

    /// Member's display name
    pub member_name: String,

    /// Academic or professional position
    pub member_position: String,

    /// Portrait URL, if one is set
    pub member_image: Option<String>,

    /// Short biography
    pub member_bio: Option<String>,

    /// Contact email (unique across members)
    pub email: String,

    /// Contact phone number
    pub phone_number: Option<String>,

    /// When the member joined the society
    pub date_of_joining: Option<NaiveDate>,

    /// Society role
    pub society_designation: SocietyDesignationData,

    /// Human-readable role name
    pub designation_label: String,

    /// Everyone except general members
    pub is_executive_member: bool,

    /// Whether the member appears on the public roster
    pub is_active: bool,

    /// Last edit timestamp
    pub last_updated: DateTime<Utc>,
}

impl From<Member> for MemberData {
    fn from(member: Member) -> Self {
        // Unknown stored keys read as general members.
        let designation = member
            .society_designation
            .parse::<SocietyDesignation>()
            .unwrap_or(SocietyDesignation::GeneralMember);

        Self {
            id: member.id.to_string(),
            title: member.title,
            content: member.content,
            member_name: member.member_name,
            member_position: member.member_position,
            member_image: member.member_image,
            member_bio: member.member_bio,
            email: member.email,
            phone_number: member.phone_number,
            date_of_joining: member.date_of_joining,
            society_designation: designation.into(),
            designation_label: designation.label().to_string(),
            is_executive_member: designation != SocietyDesignation::GeneralMember,
            is_active: member.is_active,
            last_updated: member.last_updated,
        }
    }
}

/// One admin page of members plus the cursor to ask for the next.
#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[graphql(description = "Paginated member listing")]
pub struct MemberConnection {
    pub nodes: Vec<MemberData>,
    pub page_info: PageInfo,
}
