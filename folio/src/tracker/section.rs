//! Section identifiers and the ordered section list

use super::error::TrackerError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Identifier of a page section, also used as its anchor (`#id`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A named section of the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionDescriptor {
    /// Section identifier
    pub id: SectionId,
    /// Navigation label
    pub label: String,
}

impl SectionDescriptor {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: SectionId::new(id),
            label: label.into(),
        }
    }
}

/// Fixed, ordered list of sections
///
/// Ids are unique and the list is never empty. The declared order is the
/// order the resolver scans in, so it also decides ties between overlapping
/// ranges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionList {
    sections: Vec<SectionDescriptor>,
}

impl SectionList {
    /// Build a section list, rejecting empty lists, blank ids and duplicates
    pub fn new(sections: Vec<SectionDescriptor>) -> Result<Self, TrackerError> {
        if sections.is_empty() {
            return Err(TrackerError::EmptySectionList);
        }

        let mut seen = HashSet::with_capacity(sections.len());
        for section in &sections {
            if section.id.as_str().trim().is_empty() {
                return Err(TrackerError::BlankSectionId);
            }
            if !seen.insert(&section.id) {
                return Err(TrackerError::DuplicateSection(section.id.clone()));
            }
        }

        Ok(Self { sections })
    }

    /// Build a section list whose labels equal the ids
    pub fn from_ids<I, S>(ids: I) -> Result<Self, TrackerError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sections = ids
            .into_iter()
            .map(|id| {
                let id = id.into();
                SectionDescriptor::new(id.clone(), id)
            })
            .collect();
        Self::new(sections)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SectionDescriptor> {
        self.sections.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &SectionId> {
        self.sections.iter().map(|s| &s.id)
    }

    pub fn get(&self, id: &SectionId) -> Option<&SectionDescriptor> {
        self.sections.iter().find(|s| &s.id == id)
    }

    pub fn contains(&self, id: &SectionId) -> bool {
        self.get(id).is_some()
    }

    pub fn position(&self, id: &SectionId) -> Option<usize> {
        self.sections.iter().position(|s| &s.id == id)
    }

    /// First declared section (the list is never empty)
    pub fn first(&self) -> &SectionDescriptor {
        &self.sections[0]
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl<'a> IntoIterator for &'a SectionList {
    type Item = &'a SectionDescriptor;
    type IntoIter = std::slice::Iter<'a, SectionDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_list_keeps_declared_order() {
        let list = SectionList::from_ids(["home", "about", "skills"]).unwrap();
        let ids: Vec<&str> = list.ids().map(SectionId::as_str).collect();
        assert_eq!(ids, vec!["home", "about", "skills"]);
        assert_eq!(list.first().id.as_str(), "home");
        assert_eq!(list.position(&SectionId::from("skills")), Some(2));
    }

    #[test]
    fn test_section_list_rejects_empty() {
        let result = SectionList::new(Vec::new());
        assert_eq!(result, Err(TrackerError::EmptySectionList));
    }

    #[test]
    fn test_section_list_rejects_duplicates() {
        let result = SectionList::from_ids(["home", "about", "home"]);
        assert_eq!(
            result,
            Err(TrackerError::DuplicateSection(SectionId::from("home")))
        );
    }

    #[test]
    fn test_section_list_rejects_blank_ids() {
        let result = SectionList::from_ids(["home", "  "]);
        assert_eq!(result, Err(TrackerError::BlankSectionId));
    }

    #[test]
    fn test_section_id_deserializes_from_plain_string() {
        #[derive(Deserialize)]
        struct Wrapper {
            id: SectionId,
        }

        let wrapper: Wrapper = toml::from_str("id = \"contact\"").unwrap();
        assert_eq!(wrapper.id, SectionId::from("contact"));
        assert_eq!(wrapper.id.to_string(), "contact");
    }
}
