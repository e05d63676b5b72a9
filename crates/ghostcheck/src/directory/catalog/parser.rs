use std::io::Read;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};
use tracing::warn;

use super::super::domain::{slugify, Company, CompanyId, JobId, Listing, Seniority};

const LIST_SEPARATOR: char = ';';

pub(crate) fn parse_companies<R: Read>(reader: R) -> Result<Vec<Company>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut companies = Vec::new();

    for record in csv_reader.deserialize::<CompanyRow>() {
        let row = record?;
        let slug = row
            .slug
            .clone()
            .unwrap_or_else(|| slugify(&row.name));
        companies.push(Company {
            id: CompanyId(row.id),
            name: row.name,
            slug,
            ghost_score: row.ghost_score,
            logo_url: row.logo_url,
            website: row.website,
            description: row.description,
        });
    }

    Ok(companies)
}

pub(crate) fn parse_listings<R: Read>(
    reader: R,
    as_of: NaiveDate,
) -> Result<Vec<Listing>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut listings = Vec::new();

    for record in csv_reader.deserialize::<ListingRow>() {
        let row = record?;
        let days_posted = row.days_posted(as_of);
        let seniority = row.seniority.as_deref().and_then(|value| {
            let parsed = Seniority::parse(value);
            if parsed.is_none() {
                warn!(job_id = %row.id, value, "ignoring unknown seniority");
            }
            parsed
        });

        listings.push(Listing {
            id: JobId(row.id),
            title: row.title,
            company_id: CompanyId(row.company_id),
            location: row.location.unwrap_or_default(),
            tech_stack: split_list(row.tech_stack.as_deref()),
            salary_min: row.salary_min.unwrap_or(0),
            salary_max: row.salary_max.unwrap_or(0),
            days_posted,
            ghost_score: row.ghost_score,
            red_flags: split_list(row.red_flags.as_deref()),
            green_flags: split_list(row.green_flags.as_deref()),
            seniority,
            description: row.description,
            application_url: row.application_url,
        });
    }

    Ok(listings)
}

#[derive(Debug, Deserialize)]
struct CompanyRow {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Slug", default, deserialize_with = "empty_string_as_none")]
    slug: Option<String>,
    #[serde(rename = "Ghost Score")]
    ghost_score: u8,
    #[serde(rename = "Logo URL", default, deserialize_with = "empty_string_as_none")]
    logo_url: Option<String>,
    #[serde(rename = "Website", default, deserialize_with = "empty_string_as_none")]
    website: Option<String>,
    #[serde(
        rename = "Description",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ListingRow {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Company ID")]
    company_id: String,
    #[serde(rename = "Location", default, deserialize_with = "empty_string_as_none")]
    location: Option<String>,
    #[serde(
        rename = "Tech Stack",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    tech_stack: Option<String>,
    #[serde(rename = "Salary Min", default)]
    salary_min: Option<u32>,
    #[serde(rename = "Salary Max", default)]
    salary_max: Option<u32>,
    #[serde(rename = "Days Posted", default)]
    days_posted: Option<u32>,
    #[serde(rename = "Posted On", default, deserialize_with = "empty_string_as_none")]
    posted_on: Option<String>,
    #[serde(rename = "Ghost Score")]
    ghost_score: u8,
    #[serde(rename = "Red Flags", default, deserialize_with = "empty_string_as_none")]
    red_flags: Option<String>,
    #[serde(
        rename = "Green Flags",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    green_flags: Option<String>,
    #[serde(rename = "Seniority", default, deserialize_with = "empty_string_as_none")]
    seniority: Option<String>,
    #[serde(
        rename = "Description",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    description: Option<String>,
    #[serde(
        rename = "Application URL",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    application_url: Option<String>,
}

impl ListingRow {
    fn days_posted(&self, as_of: NaiveDate) -> u32 {
        if let Some(days) = self.days_posted {
            return days;
        }

        self.posted_on
            .as_deref()
            .and_then(parse_date)
            .map(|posted| (as_of - posted).num_days().clamp(0, i64::from(u32::MAX)) as u32)
            .unwrap_or(0)
    }
}

fn split_list(value: Option<&str>) -> Vec<String> {
    value
        .map(|raw| {
            raw.split(LIST_SEPARATOR)
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc().date());
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}
