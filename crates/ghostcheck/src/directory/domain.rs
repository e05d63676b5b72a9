use std::fmt;

use serde::{Deserialize, Serialize};

/// Highest ghost score a listing or company can carry.
pub const MAX_GHOST_SCORE: u8 = 10;

/// Identifier wrapper for job postings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub String);

impl JobId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier wrapper for employers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyId(pub String);

impl CompanyId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Work mode inferred from a listing's free-text location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RemoteType {
    Remote,
    Hybrid,
    Onsite,
}

impl RemoteType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Remote => "Remote",
            Self::Hybrid => "Hybrid",
            Self::Onsite => "Onsite",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Seniority {
    Junior,
    Mid,
    Senior,
    Staff,
    Principal,
}

impl Seniority {
    pub(crate) fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "junior" => Some(Self::Junior),
            "mid" => Some(Self::Mid),
            "senior" => Some(Self::Senior),
            "staff" => Some(Self::Staff),
            "principal" => Some(Self::Principal),
            _ => None,
        }
    }
}

/// Employer record. Listings point at companies by id; companies never own listing data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    pub slug: String,
    pub ghost_score: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Company {
    pub fn ghost_band(&self) -> GhostScoreBand {
        GhostScoreBand::from_score(self.ghost_score)
    }
}

/// A single job posting as supplied by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub id: JobId,
    pub title: String,
    pub company_id: CompanyId,
    pub location: String,
    pub tech_stack: Vec<String>,
    pub salary_min: u32,
    pub salary_max: u32,
    pub days_posted: u32,
    pub ghost_score: u8,
    #[serde(default)]
    pub red_flags: Vec<String>,
    #[serde(default)]
    pub green_flags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seniority: Option<Seniority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_url: Option<String>,
}

impl Listing {
    pub fn compensation(&self) -> Compensation {
        Compensation {
            min: self.salary_min,
            max: self.salary_max,
        }
    }

    pub fn ghost_band(&self) -> GhostScoreBand {
        GhostScoreBand::from_score(self.ghost_score)
    }

    /// Low scores mean applicants often hear nothing back.
    pub fn is_high_risk(&self) -> bool {
        self.ghost_score <= 4
    }

    pub fn posted_label(&self) -> String {
        match self.days_posted {
            0 => "today".to_string(),
            1 => "1 day ago".to_string(),
            days => format!("{days} days ago"),
        }
    }

    /// The catalog's own description, or a generated overview built from the
    /// structured fields when the listing has none.
    pub fn full_description(&self, company_name: &str) -> String {
        if let Some(text) = self.description.as_deref().filter(|text| !text.trim().is_empty()) {
            return text.to_string();
        }

        let compensation = self.compensation();
        let salary = if compensation.is_disclosed() {
            compensation.label()
        } else {
            "Competitive salary".to_string()
        };

        format!(
            "{company_name} is hiring a {title} to join the team. This role is based in {location}.\n\n\
             ## Compensation\n{salary}\n\n\
             ## Tech stack\nWe use {tech} in our day-to-day work. Experience with these or similar technologies is a plus.\n\n\
             ## What we're looking for\nWe're seeking a strong fit for our team who can contribute from day one. \
             This position was posted {posted}.",
            title = self.title,
            location = self.location,
            tech = self.tech_stack.join(", "),
            posted = self.posted_label(),
        )
    }
}

/// Salary bounds; `0, 0` means the employer did not disclose a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Compensation {
    pub min: u32,
    pub max: u32,
}

impl Compensation {
    pub fn is_disclosed(&self) -> bool {
        !(self.min == 0 && self.max == 0)
    }

    /// Bounds are rendered as given, even when `min > max`.
    pub fn label(&self) -> String {
        if !self.is_disclosed() {
            return "Salary not disclosed".to_string();
        }
        format!(
            "${} – ${}",
            group_thousands(self.min),
            group_thousands(self.max)
        )
    }
}

fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GhostScoreBand {
    High,
    Mid,
    Low,
}

impl GhostScoreBand {
    pub const fn from_score(score: u8) -> Self {
        if score >= 8 {
            Self::High
        } else if score >= 4 {
            Self::Mid
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Mid => "Mid",
            Self::Low => "Low",
        }
    }
}

/// URL slug for a company name: lower-case ASCII alphanumerics joined by single dashes.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compensation_label_marks_undisclosed_ranges() {
        let hidden = Compensation { min: 0, max: 0 };
        assert!(!hidden.is_disclosed());
        assert_eq!(hidden.label(), "Salary not disclosed");

        let range = Compensation {
            min: 120_000,
            max: 1_500_000,
        };
        assert_eq!(range.label(), "$120,000 – $1,500,000");
    }

    #[test]
    fn compensation_label_keeps_inverted_bounds() {
        let inverted = Compensation { min: 90_000, max: 0 };
        assert!(inverted.is_disclosed());
        assert_eq!(inverted.label(), "$90,000 – $0");
    }

    #[test]
    fn ghost_band_thresholds() {
        assert_eq!(GhostScoreBand::from_score(10), GhostScoreBand::High);
        assert_eq!(GhostScoreBand::from_score(8), GhostScoreBand::High);
        assert_eq!(GhostScoreBand::from_score(7), GhostScoreBand::Mid);
        assert_eq!(GhostScoreBand::from_score(4), GhostScoreBand::Mid);
        assert_eq!(GhostScoreBand::from_score(3), GhostScoreBand::Low);
        assert_eq!(GhostScoreBand::from_score(0), GhostScoreBand::Low);
    }

    #[test]
    fn slugify_collapses_punctuation() {
        assert_eq!(slugify("Acme Corp."), "acme-corp");
        assert_eq!(slugify("  Data & Dogs, Inc "), "data-dogs-inc");
        assert_eq!(slugify("Nimbus"), "nimbus");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn remote_type_serializes_upper_case() {
        let json = serde_json::to_string(&RemoteType::Hybrid).expect("serialize");
        assert_eq!(json, "\"HYBRID\"");
    }
}
