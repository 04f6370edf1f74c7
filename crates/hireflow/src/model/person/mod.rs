//! Candidate records.

mod fields;

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

pub use fields::{Address, Degree, Email, Name, Phone, Remark, School, Tag};

use super::unique::{EntityKind, WeakIdentity};

/// Immutable candidate record.
///
/// `PartialEq` is structural and compares every field. Duplicate detection uses the
/// narrower [`Person::is_same_person`], which only looks at the name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    school: School,
    degree: Degree,
    #[serde(default)]
    remark: Remark,
    #[serde(default)]
    tags: BTreeSet<Tag>,
}

impl Person {
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        school: School,
        degree: Degree,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            school,
            degree,
            remark: Remark::empty(),
            tags: BTreeSet::new(),
        }
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    pub fn with_remark(mut self, remark: Remark) -> Self {
        self.remark = remark;
        self
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn school(&self) -> &School {
        &self.school
    }

    pub fn degree(&self) -> &Degree {
        &self.degree
    }

    pub fn remark(&self) -> &Remark {
        &self.remark
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Two persons are the same candidate when their names match.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name == other.name
    }
}

impl WeakIdentity for Person {
    const KIND: EntityKind = EntityKind::Person;

    fn is_same(&self, other: &Self) -> bool {
        self.is_same_person(other)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}; School: {}; Degree: {}",
            self.name, self.phone, self.email, self.address, self.school, self.degree
        )?;
        if !self.remark.is_empty() {
            write!(f, "; Remark: {}", self.remark)?;
        }
        if !self.tags.is_empty() {
            f.write_str("; Tags: ")?;
            for tag in &self.tags {
                write!(f, "[{tag}]")?;
            }
        }
        Ok(())
    }
}

/// Field overrides applied to an existing [`Person`] to produce its edited copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonEdit {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    pub school: Option<School>,
    pub degree: Option<Degree>,
    pub remark: Option<Remark>,
    pub tags: Option<BTreeSet<Tag>>,
}

impl PersonEdit {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.phone.is_none()
            && self.email.is_none()
            && self.address.is_none()
            && self.school.is_none()
            && self.degree.is_none()
            && self.remark.is_none()
            && self.tags.is_none()
    }

    pub fn apply(&self, person: &Person) -> Person {
        Person {
            name: self.name.clone().unwrap_or_else(|| person.name.clone()),
            phone: self.phone.clone().unwrap_or_else(|| person.phone.clone()),
            email: self.email.clone().unwrap_or_else(|| person.email.clone()),
            address: self
                .address
                .clone()
                .unwrap_or_else(|| person.address.clone()),
            school: self.school.clone().unwrap_or_else(|| person.school.clone()),
            degree: self.degree.clone().unwrap_or_else(|| person.degree.clone()),
            remark: self.remark.clone().unwrap_or_else(|| person.remark.clone()),
            tags: self.tags.clone().unwrap_or_else(|| person.tags.clone()),
        }
    }
}
