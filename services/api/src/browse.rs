use crate::infra::{parse_date, parse_page_size, parse_remote_filter, CatalogOverrides, Directory};
use chrono::{Local, NaiveDate};
use clap::Args;
use ghostcheck::config::AppConfig;
use ghostcheck::directory::views::{
    CompanyProfile, JobDetailView, ListingCard, SavedListingsView, SavedStatusView, SearchPage,
};
use ghostcheck::directory::{JobId, ListingFilter, RemoteFilter, MAX_GHOST_SCORE};
use ghostcheck::error::AppError;
use serde::Serialize;
use std::fmt::Write;
use std::path::PathBuf;

#[derive(Args, Debug, Default, Clone)]
pub(crate) struct CatalogArgs {
    /// Company CSV export (requires --jobs-csv)
    #[arg(long, requires = "jobs_csv")]
    pub(crate) companies_csv: Option<PathBuf>,
    /// Job CSV export (requires --companies-csv)
    #[arg(long, requires = "companies_csv")]
    pub(crate) jobs_csv: Option<PathBuf>,
    /// Reference date for `Posted On` columns (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
    /// Print the JSON payload instead of the text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct SearchArgs {
    #[command(flatten)]
    pub(crate) catalog: CatalogArgs,
    /// Case-insensitive substring of the job title
    #[arg(long)]
    pub(crate) keywords: Option<String>,
    /// Case-insensitive substring of the location
    #[arg(long)]
    pub(crate) location: Option<String>,
    /// Required technology tag; repeat for several
    #[arg(long = "tech")]
    pub(crate) tech: Vec<String>,
    /// Hide listings scoring above this value
    #[arg(long, default_value_t = i32::from(MAX_GHOST_SCORE), allow_negative_numbers = true)]
    pub(crate) max_ghost_score: i32,
    /// Work mode: all, remote, hybrid or onsite
    #[arg(long, value_parser = parse_remote_filter, default_value = "all")]
    pub(crate) remote: RemoteFilter,
    /// 1-based page number; out-of-range values clamp
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub(crate) page: i64,
    /// Override the configured page size
    #[arg(long, value_parser = parse_page_size)]
    pub(crate) page_size: Option<usize>,
}

impl SearchArgs {
    fn filter(&self) -> ListingFilter {
        ListingFilter {
            keywords: self.keywords.clone().unwrap_or_default(),
            location: self.location.clone().unwrap_or_default(),
            tech_stack: self.tech.clone(),
            max_ghost_score: self.max_ghost_score,
            remote_type: self.remote,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct CompanyArgs {
    #[command(flatten)]
    pub(crate) catalog: CatalogArgs,
    /// Company slug, e.g. `northwind-labs`
    pub(crate) slug: String,
}

#[derive(Args, Debug)]
pub(crate) struct JobArgs {
    #[command(flatten)]
    pub(crate) catalog: CatalogArgs,
    /// Listing identifier
    pub(crate) job_id: String,
}

#[derive(Args, Debug)]
pub(crate) struct SavedListArgs {
    #[command(flatten)]
    pub(crate) catalog: CatalogArgs,
}

#[derive(Args, Debug)]
pub(crate) struct SavedToggleArgs {
    #[command(flatten)]
    pub(crate) catalog: CatalogArgs,
    /// Listing identifier to save or unsave
    pub(crate) job_id: String,
}

fn open_directory(catalog: &CatalogArgs, page_size: Option<usize>) -> Result<Directory, AppError> {
    let mut config = AppConfig::load()?;
    CatalogOverrides {
        companies_csv: catalog.companies_csv.clone(),
        jobs_csv: catalog.jobs_csv.clone(),
        page_size,
    }
    .apply(&mut config)?;

    let as_of = catalog
        .as_of
        .unwrap_or_else(|| Local::now().date_naive());
    crate::infra::build_directory(&config, as_of)
}

fn emit<T: Serialize>(json: bool, payload: &T, text: impl FnOnce(&T) -> String) {
    if json {
        match serde_json::to_string_pretty(payload) {
            Ok(rendered) => println!("{rendered}"),
            Err(err) => println!("JSON output unavailable: {err}"),
        }
    } else {
        print!("{}", text(payload));
    }
}

pub(crate) fn run_search(args: SearchArgs) -> Result<(), AppError> {
    let directory = open_directory(&args.catalog, args.page_size)?;
    let page = directory.search(&args.filter(), args.page)?;
    emit(args.catalog.json, &page, render_search_page);
    Ok(())
}

pub(crate) fn run_company(args: CompanyArgs) -> Result<(), AppError> {
    let directory = open_directory(&args.catalog, None)?;
    match directory.company_profile(&args.slug) {
        Some(profile) => emit(args.catalog.json, &profile, render_company_profile),
        None => println!("No company with slug '{}'", args.slug),
    }
    Ok(())
}

pub(crate) fn run_job(args: JobArgs) -> Result<(), AppError> {
    let directory = open_directory(&args.catalog, None)?;
    match directory.job_detail(&JobId::new(args.job_id.as_str())) {
        Some(detail) => emit(args.catalog.json, &detail, render_job_detail),
        None => println!("No listing with id '{}'", args.job_id),
    }
    Ok(())
}

pub(crate) fn run_saved_list(args: SavedListArgs) -> Result<(), AppError> {
    let directory = open_directory(&args.catalog, None)?;
    let saved = directory.saved_listings();
    emit(args.catalog.json, &saved, render_saved_listings);
    Ok(())
}

pub(crate) fn run_saved_toggle(args: SavedToggleArgs) -> Result<(), AppError> {
    let directory = open_directory(&args.catalog, None)?;
    let status = directory.toggle_saved(JobId::new(args.job_id));
    emit(args.catalog.json, &status, render_saved_status);
    Ok(())
}

pub(crate) fn render_search_page(page: &SearchPage) -> String {
    let mut out = String::new();
    let results = &page.results;
    let _ = writeln!(
        out,
        "Page {} of {} ({} matching listings)",
        results.page, results.total_pages, results.total_items
    );
    if results.items.is_empty() {
        let _ = writeln!(out, "No listings match these filters.");
    }
    for card in &results.items {
        push_card(&mut out, card);
    }
    if page.has_previous || page.has_next {
        let mut hints = Vec::new();
        if page.has_previous {
            hints.push(format!("--page {} for previous", results.page - 1));
        }
        if page.has_next {
            hints.push(format!("--page {} for next", results.page + 1));
        }
        let _ = writeln!(out, "({})", hints.join(", "));
    }
    out
}

fn push_card(out: &mut String, card: &ListingCard) {
    let listing = &card.listing.listing;
    let _ = writeln!(
        out,
        "- [{}] {} | {} | {} ({})",
        listing.id,
        listing.title,
        card.listing.company_name,
        listing.location,
        card.listing.remote_type.label()
    );
    let _ = writeln!(
        out,
        "    {} | ghost score {}/{} ({}) | posted {}{}",
        card.salary_label,
        listing.ghost_score,
        MAX_GHOST_SCORE,
        card.ghost_band.label(),
        card.posted_label,
        if card.saved { " | saved" } else { "" }
    );
}

pub(crate) fn render_company_profile(profile: &CompanyProfile) -> String {
    let mut out = String::new();
    let company = &profile.company;
    let metrics = &profile.metrics;
    let _ = writeln!(
        out,
        "{} (ghost score {}/{}, {})",
        company.name,
        company.ghost_score,
        MAX_GHOST_SCORE,
        profile.ghost_band.label()
    );
    if let Some(description) = &company.description {
        let _ = writeln!(out, "{description}");
    }
    if let Some(website) = &company.website {
        let _ = writeln!(out, "Website: {website}");
    }
    let _ = writeln!(out, "Open roles: {}", metrics.open_roles);
    let _ = writeln!(out, "Average days posted: {}", metrics.avg_days_posted);
    let _ = writeln!(out, "Average ghost score: {}", metrics.avg_ghost_score_label);
    let _ = writeln!(
        out,
        "Estimated fill rate: {}% (estimate)",
        metrics.estimated_fill_rate_pct
    );

    if !profile.hiring_activity.is_empty() {
        let _ = writeln!(out, "Hiring activity:");
        for entry in &profile.hiring_activity {
            let _ = writeln!(out, "  - {} ({})", entry.title, entry.posted_label);
        }
    }
    if !profile.open_roles.is_empty() {
        let _ = writeln!(out, "Open roles:");
        for card in &profile.open_roles {
            push_card(&mut out, card);
        }
    }
    out
}

pub(crate) fn render_job_detail(detail: &JobDetailView) -> String {
    let mut out = String::new();
    let card = &detail.card;
    let listing = &card.listing.listing;
    let _ = writeln!(out, "{} at {}", listing.title, card.listing.company_name);
    let _ = writeln!(
        out,
        "{} ({}) | posted {}",
        listing.location,
        card.listing.remote_type.label(),
        card.posted_label
    );
    let _ = writeln!(out, "Compensation: {}", card.salary_label);
    let _ = writeln!(
        out,
        "Ghost score: {}/{} ({})",
        listing.ghost_score,
        MAX_GHOST_SCORE,
        card.ghost_band.label()
    );
    if detail.is_high_risk {
        let _ = writeln!(
            out,
            "Warning: applicants to this listing often hear nothing back."
        );
    }
    if !listing.tech_stack.is_empty() {
        let _ = writeln!(out, "Tech stack: {}", listing.tech_stack.join(", "));
    }
    if let Some(seniority) = listing.seniority {
        let _ = writeln!(out, "Seniority: {seniority:?}");
    }
    for flag in &listing.red_flags {
        let _ = writeln!(out, "  ! {flag}");
    }
    for flag in &listing.green_flags {
        let _ = writeln!(out, "  + {flag}");
    }
    if let Some(url) = &listing.application_url {
        let _ = writeln!(out, "Apply: {url}");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", detail.description);
    let _ = writeln!(out);
    if let Some(slug) = &detail.company_slug {
        let _ = writeln!(out, "Company profile: ghostcheck company {slug}");
    }
    if card.saved {
        let _ = writeln!(out, "Saved");
    }
    out
}

pub(crate) fn render_saved_listings(saved: &SavedListingsView) -> String {
    let mut out = String::new();
    if saved.jobs.is_empty() {
        let _ = writeln!(out, "No saved listings.");
        return out;
    }
    let _ = writeln!(out, "{} saved listings", saved.count);
    for card in &saved.jobs {
        push_card(&mut out, card);
    }
    out
}

pub(crate) fn render_saved_status(status: &SavedStatusView) -> String {
    let verb = if status.saved { "Saved" } else { "Removed" };
    format!(
        "{verb} {} ({} saved listings)\n",
        status.job_id, status.count
    )
}
