//! Club and membership domain models and parameters.

use entity::club_role::ClubRoleName;

use crate::{
    model::club::{
        AssignAdvisorDto, ClubDto, ClubMemberDto, ClubRoleNameDto, CreateClubDto, MembershipDto,
        SetMemberRoleDto,
    },
    server::{error::AppError, util::validate::validate_name},
};

/// Role a student holds inside a club.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberRole {
    Member,
    BoardMember,
    President,
}

impl MemberRole {
    pub fn from_entity(role: ClubRoleName) -> Self {
        match role {
            ClubRoleName::Member => Self::Member,
            ClubRoleName::BoardMember => Self::BoardMember,
            ClubRoleName::President => Self::President,
        }
    }

    pub fn into_entity(self) -> ClubRoleName {
        match self {
            Self::Member => ClubRoleName::Member,
            Self::BoardMember => ClubRoleName::BoardMember,
            Self::President => ClubRoleName::President,
        }
    }

    pub fn from_dto(role: ClubRoleNameDto) -> Self {
        match role {
            ClubRoleNameDto::Member => Self::Member,
            ClubRoleNameDto::BoardMember => Self::BoardMember,
            ClubRoleNameDto::President => Self::President,
        }
    }

    pub fn into_dto(self) -> ClubRoleNameDto {
        match self {
            Self::Member => ClubRoleNameDto::Member,
            Self::BoardMember => ClubRoleNameDto::BoardMember,
            Self::President => ClubRoleNameDto::President,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Club {
    pub id: i32,
    pub name: String,
    /// Advisor managing the club, at most one club per advisor.
    pub advisor_id: Option<i32>,
}

impl Club {
    pub fn from_entity(entity: entity::club::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            advisor_id: entity.advisor_id,
        }
    }

    /// Converts to a DTO without member information.
    pub fn into_dto(self) -> ClubDto {
        ClubDto {
            id: self.id,
            name: self.name,
            advisor_id: self.advisor_id,
            members: Vec::new(),
        }
    }
}

/// A single ClubRole row.
#[derive(Debug, Clone, PartialEq)]
pub struct Membership {
    pub id: i32,
    pub student_id: i32,
    pub club_id: i32,
    pub role: MemberRole,
}

impl Membership {
    pub fn from_entity(entity: entity::club_role::Model) -> Self {
        Self {
            id: entity.id,
            student_id: entity.student_id,
            club_id: entity.club_id,
            role: MemberRole::from_entity(entity.role),
        }
    }
}

/// Member of a club as shown in the club view.
#[derive(Debug, Clone, PartialEq)]
pub struct ClubMember {
    pub student_id: i32,
    pub name: String,
    pub role: MemberRole,
}

impl ClubMember {
    pub fn into_dto(self) -> ClubMemberDto {
        ClubMemberDto {
            student_id: self.student_id,
            name: self.name,
            role: self.role.into_dto(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClubWithMembers {
    pub club: Club,
    pub members: Vec<ClubMember>,
}

impl ClubWithMembers {
    pub fn into_dto(self) -> ClubDto {
        let mut dto = self.club.into_dto();
        dto.members = self.members.into_iter().map(ClubMember::into_dto).collect();
        dto
    }
}

#[derive(Debug, Clone)]
pub struct CreateClubParam {
    pub name: String,
    pub advisor_id: Option<i32>,
}

impl CreateClubParam {
    pub fn from_dto(dto: CreateClubDto) -> Result<Self, AppError> {
        Ok(Self {
            name: validate_name(&dto.name)?,
            advisor_id: dto.advisor_id,
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AssignAdvisorParam {
    pub club_id: i32,
    pub advisor_id: i32,
}

impl AssignAdvisorParam {
    pub fn from_dto(dto: AssignAdvisorDto) -> Self {
        Self {
            club_id: dto.club_id,
            advisor_id: dto.advisor_id,
        }
    }
}

/// A (student, club) pair used to join or leave a club.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MembershipParam {
    pub student_id: i32,
    pub club_id: i32,
}

impl MembershipParam {
    pub fn from_dto(dto: MembershipDto) -> Self {
        Self {
            student_id: dto.student_id,
            club_id: dto.club_id,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SetMemberRoleParam {
    pub student_id: i32,
    pub club_id: i32,
    pub role: MemberRole,
}

impl SetMemberRoleParam {
    pub fn from_dto(dto: SetMemberRoleDto) -> Self {
        Self {
            student_id: dto.student_id,
            club_id: dto.club_id,
            role: MemberRole::from_dto(dto.role),
        }
    }
}
