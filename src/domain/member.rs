//! Member domain model
//!
//! A member is identified by student number alone. Two members may share a
//! name; they may not share a student number (compared case-insensitively).

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::fields::{non_blank, Email, FieldError, Phone, StudentNumber, Tag, Year};

/// A club member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MemberRecord")]
pub struct Member {
    /// Display name (duplicates allowed)
    pub name: String,

    /// Identity key
    pub student_number: StudentNumber,

    /// Year of study
    pub year: Year,

    pub email: Email,

    pub phone: Phone,

    /// Dietary requirements, empty when none
    #[serde(skip_serializing_if = "String::is_empty")]
    pub dietary: String,

    /// Role within the club (e.g. "Treasurer"), empty for ordinary members
    #[serde(skip_serializing_if = "String::is_empty")]
    pub role: String,

    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<Tag>,
}

/// Unchecked form read from disk
#[derive(Deserialize)]
struct MemberRecord {
    name: String,
    student_number: StudentNumber,
    year: Year,
    email: Email,
    phone: Phone,
    #[serde(default)]
    dietary: String,
    #[serde(default)]
    role: String,
    #[serde(default)]
    tags: BTreeSet<Tag>,
}

impl TryFrom<MemberRecord> for Member {
    type Error = FieldError;

    fn try_from(record: MemberRecord) -> Result<Self, Self::Error> {
        Ok(Member::new(
            &record.name,
            record.student_number,
            record.year,
            record.email,
            record.phone,
        )?
        .with_dietary(record.dietary)
        .with_role(record.role)
        .with_tags(record.tags))
    }
}

impl Member {
    /// Creates a member with the required fields; dietary, role and tags start empty
    pub fn new(
        name: &str,
        student_number: StudentNumber,
        year: Year,
        email: Email,
        phone: Phone,
    ) -> Result<Self, FieldError> {
        Ok(Self {
            name: non_blank("Name", name)?,
            student_number,
            year,
            email,
            phone,
            dietary: String::new(),
            role: String::new(),
            tags: BTreeSet::new(),
        })
    }

    /// Returns a copy with the given dietary requirements
    pub fn with_dietary(mut self, dietary: impl Into<String>) -> Self {
        self.dietary = dietary.into().trim().to_string();
        self
    }

    /// Returns a copy with the given role
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into().trim().to_string();
        self
    }

    /// Returns a copy carrying the given tags
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    /// Returns a copy with a different name, keeping every other field
    pub fn renamed(&self, name: &str) -> Result<Self, FieldError> {
        Ok(Self {
            name: non_blank("Name", name)?,
            ..self.clone()
        })
    }

    /// Returns true if this member and `other` share a student number
    pub fn is_same_member(&self, other: &Member) -> bool {
        self.student_number.matches(&other.student_number)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.as_str().eq_ignore_ascii_case(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(name: &str, number: &str) -> Member {
        Member::new(
            name,
            number.parse().unwrap(),
            Year::new(2).unwrap(),
            "someone@u.nus.edu".parse().unwrap(),
            "91234567".parse().unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn identity_is_student_number_only() {
        let alice = member("Alice", "A1234567X");
        let also_alice = member("Alice Tan", "a1234567x");
        let other = member("Alice", "A7654321Y");

        assert!(alice.is_same_member(&also_alice));
        assert!(!alice.is_same_member(&other));
        assert_ne!(alice, also_alice);
    }

    #[test]
    fn blank_name_rejected() {
        let result = Member::new(
            "  ",
            "A1234567X".parse().unwrap(),
            Year::new(1).unwrap(),
            "a@b.com".parse().unwrap(),
            "123".parse().unwrap(),
        );
        assert_eq!(result, Err(FieldError::Blank("Name")));
    }

    #[test]
    fn builders_set_optional_fields() {
        let m = member("Bob", "A1111111B")
            .with_role(" Treasurer ")
            .with_dietary("Vegetarian")
            .with_tags(vec!["exco".parse().unwrap()]);

        assert_eq!(m.role, "Treasurer");
        assert_eq!(m.dietary, "Vegetarian");
        assert!(m.has_tag("EXCO"));
        assert!(!m.has_tag("member"));
    }

    #[test]
    fn renamed_keeps_identity() {
        let m = member("Bob", "A1111111B");
        let renamed = m.renamed("Robert").unwrap();

        assert!(m.is_same_member(&renamed));
        assert_eq!(renamed.name, "Robert");
    }

    #[test]
    fn serde_roundtrip_omits_empty_optionals() {
        let m = member("Bob", "A1111111B");
        let json = serde_json::to_string(&m).unwrap();

        assert!(!json.contains("dietary"));
        assert!(!json.contains("tags"));

        let parsed: Member = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, m);
    }
}
