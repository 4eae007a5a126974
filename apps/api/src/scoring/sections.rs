//! Résumé section detection.
//!
//! `SectionChecks` is a fixed record of the seven standard sections. Detection
//! sits behind the `SectionDetector` trait so the scorer's arithmetic does not
//! depend on how presence is inferred.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// A standard résumé section, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    ContactInfo,
    Summary,
    Skills,
    Experience,
    Education,
    Projects,
    Certifications,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::ContactInfo,
        Section::Summary,
        Section::Skills,
        Section::Experience,
        Section::Education,
        Section::Projects,
        Section::Certifications,
    ];

    /// Display label, also used as the JSON key.
    pub fn label(self) -> &'static str {
        match self {
            Section::ContactInfo => "Contact Info",
            Section::Summary => "Summary",
            Section::Skills => "Skills",
            Section::Experience => "Experience",
            Section::Education => "Education",
            Section::Projects => "Projects",
            Section::Certifications => "Certifications",
        }
    }

    pub fn from_label(label: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.label() == label)
    }

    /// Heading variants that mark the section as present. Contact info is
    /// detected by pattern instead and has none.
    pub fn headings(self) -> &'static [&'static str] {
        match self {
            Section::ContactInfo => &[],
            Section::Summary => &["summary", "professional summary", "profile"],
            Section::Skills => &["skills", "technical skills", "core skills"],
            Section::Experience => &[
                "experience",
                "work experience",
                "professional experience",
                "employment",
            ],
            Section::Education => &["education"],
            Section::Projects => &["projects", "project experience"],
            Section::Certifications => &["certifications", "certification"],
        }
    }
}

/// Presence of each standard section in a résumé.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionChecks {
    pub contact_info: bool,
    pub summary: bool,
    pub skills: bool,
    pub experience: bool,
    pub education: bool,
    pub projects: bool,
    pub certifications: bool,
}

impl SectionChecks {
    pub fn get(&self, section: Section) -> bool {
        match section {
            Section::ContactInfo => self.contact_info,
            Section::Summary => self.summary,
            Section::Skills => self.skills,
            Section::Experience => self.experience,
            Section::Education => self.education,
            Section::Projects => self.projects,
            Section::Certifications => self.certifications,
        }
    }

    pub fn set(&mut self, section: Section, present: bool) {
        let slot = match section {
            Section::ContactInfo => &mut self.contact_info,
            Section::Summary => &mut self.summary,
            Section::Skills => &mut self.skills,
            Section::Experience => &mut self.experience,
            Section::Education => &mut self.education,
            Section::Projects => &mut self.projects,
            Section::Certifications => &mut self.certifications,
        };
        *slot = present;
    }

    /// All seven entries in canonical order.
    pub fn entries(&self) -> [(Section, bool); 7] {
        Section::ALL.map(|s| (s, self.get(s)))
    }

    pub fn passed_count(&self) -> usize {
        self.entries().iter().filter(|(_, present)| *present).count()
    }
}

// Serialized as an ordered `{ "Contact Info": bool, ... }` object so stored
// results and API responses keep the human-readable labels.
impl Serialize for SectionChecks {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Section::ALL.len()))?;
        for (section, present) in self.entries() {
            map.serialize_entry(section.label(), &present)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SectionChecks {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ChecksVisitor;

        impl<'de> Visitor<'de> for ChecksVisitor {
            type Value = SectionChecks;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of section label to boolean")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut checks = SectionChecks::default();
                while let Some((label, present)) = access.next_entry::<String, bool>()? {
                    if let Some(section) = Section::from_label(&label) {
                        checks.set(section, present);
                    }
                }
                Ok(checks)
            }
        }

        deserializer.deserialize_map(ChecksVisitor)
    }
}

/// Decides which standard sections a raw résumé contains.
pub trait SectionDetector: Send + Sync {
    fn detect(&self, resume_raw: &str) -> SectionChecks;
}

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}\b").expect("email pattern is valid")
});

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    // ASCII whitespace only; NBSP and other Unicode spaces are not separators.
    Regex::new(
        r"\b(\+?1[-. \t\n\x0B\f\r]?)?(\(?[0-9]{3}\)?[-. \t\n\x0B\f\r]?)[0-9]{3}[-. \t\n\x0B\f\r]?[0-9]{4}\b",
    )
    .expect("phone pattern is valid")
});

/// Default detector: contact info by email/phone pattern, every other section
/// by plain substring search for any of its heading variants.
///
/// Matching runs on the raw text lowercased. Headings are not required to sit
/// on their own line, so "experience" inside a sentence still counts.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeadingSectionDetector;

impl SectionDetector for HeadingSectionDetector {
    fn detect(&self, resume_raw: &str) -> SectionChecks {
        let lower = resume_raw.to_lowercase();
        let mut checks = SectionChecks::default();
        for section in Section::ALL {
            let present = match section {
                Section::ContactInfo => has_contact_info(&lower),
                other => other.headings().iter().any(|h| lower.contains(h)),
            };
            checks.set(section, present);
        }
        checks
    }
}

fn has_contact_info(lower: &str) -> bool {
    EMAIL_RE.is_match(lower) || PHONE_RE.is_match(lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(text: &str) -> SectionChecks {
        HeadingSectionDetector.detect(text)
    }

    #[test]
    fn test_email_alone_counts_as_contact() {
        let checks = detect("Jane Doe\njane@example.com\n");
        assert!(checks.contact_info);
    }

    #[test]
    fn test_phone_formats_count_as_contact() {
        for phone in [
            "555-123-4567",
            "(555) 123-4567",
            "555.123.4567",
            "+1 555 123 4567",
            "1-555-123-4567",
            "5551234567",
        ] {
            assert!(detect(phone).contact_info, "phone {phone} not detected");
        }
    }

    #[test]
    fn test_unicode_spaces_are_not_phone_separators() {
        for sep in ['\u{00A0}', '\u{2003}', '\u{3000}'] {
            let text = format!("555{sep}123{sep}4567");
            assert!(!detect(&text).contact_info, "separator {sep:?} accepted");
        }
        assert!(detect("555\t123\t4567").contact_info);
    }

    #[test]
    fn test_no_contact_info() {
        let checks = detect("Jane Doe\nSoftware engineer\n12345");
        assert!(!checks.contact_info);
        assert!(!detect("jane at example dot com").contact_info);
    }

    #[test]
    fn test_headings_detected_case_insensitively() {
        let resume = "PROFESSIONAL SUMMARY\nBuilt things.\n\nTechnical Skills\nRust\n\n\
                      Work Experience\nAcme\n\nEducation\nBSc\n\nProjects\nats\n\n\
                      Certifications\nCKA";
        let checks = detect(resume);
        assert_eq!(
            checks,
            SectionChecks {
                contact_info: false,
                summary: true,
                skills: true,
                experience: true,
                education: true,
                projects: true,
                certifications: true,
            }
        );
    }

    #[test]
    fn test_heading_matches_anywhere_in_text() {
        // No line boundary needed: "employment" mid-sentence still marks Experience.
        let checks = detect("Seeking employment in a friendly team");
        assert!(checks.experience);
        assert!(!checks.education);
    }

    #[test]
    fn test_profile_and_certification_variants() {
        let checks = detect("My profile. One certification.");
        assert!(checks.summary);
        assert!(checks.certifications);
    }

    #[test]
    fn test_empty_resume_has_nothing() {
        assert_eq!(detect(""), SectionChecks::default());
        assert_eq!(detect("").passed_count(), 0);
    }

    #[test]
    fn test_entries_fixed_order() {
        let labels: Vec<&str> = SectionChecks::default()
            .entries()
            .iter()
            .map(|(s, _)| s.label())
            .collect();
        assert_eq!(
            labels,
            vec![
                "Contact Info",
                "Summary",
                "Skills",
                "Experience",
                "Education",
                "Projects",
                "Certifications"
            ]
        );
        assert_eq!(SectionChecks::default().entries().len(), 7);
    }

    #[test]
    fn test_serializes_as_ordered_label_map() {
        let checks = SectionChecks {
            contact_info: true,
            skills: true,
            ..SectionChecks::default()
        };
        let json = serde_json::to_string(&checks).unwrap();
        assert_eq!(
            json,
            r#"{"Contact Info":true,"Summary":false,"Skills":true,"Experience":false,"Education":false,"Projects":false,"Certifications":false}"#
        );
        let back: SectionChecks = serde_json::from_str(&json).unwrap();
        assert_eq!(back, checks);
    }

    #[test]
    fn test_deserialize_ignores_unknown_and_defaults_missing() {
        let checks: SectionChecks =
            serde_json::from_str(r#"{"Skills":true,"Hobbies":true}"#).unwrap();
        assert!(checks.skills);
        assert_eq!(checks.passed_count(), 1);
    }
}
