use super::super::domain::{slugify, Company, CompanyId, JobId, Listing, Seniority};

struct SampleCompany {
    id: &'static str,
    name: &'static str,
    ghost_score: u8,
    website: &'static str,
    description: &'static str,
}

struct SampleListing {
    id: &'static str,
    title: &'static str,
    company_id: &'static str,
    location: &'static str,
    tech_stack: &'static [&'static str],
    salary: (u32, u32),
    days_posted: u32,
    ghost_score: u8,
    seniority: Option<Seniority>,
    red_flags: &'static [&'static str],
    green_flags: &'static [&'static str],
}

const COMPANIES: &[SampleCompany] = &[
    SampleCompany {
        id: "c-northwind",
        name: "Northwind Labs",
        ghost_score: 9,
        website: "https://northwind.example",
        description: "Developer tooling for data teams.",
    },
    SampleCompany {
        id: "c-bluefin",
        name: "Bluefin Health",
        ghost_score: 7,
        website: "https://bluefin.example",
        description: "Care coordination software for clinics.",
    },
    SampleCompany {
        id: "c-quarry",
        name: "Quarry & Co.",
        ghost_score: 3,
        website: "https://quarry.example",
        description: "Logistics marketplace for regional freight.",
    },
    SampleCompany {
        id: "c-lumen",
        name: "Lumen Retail",
        ghost_score: 5,
        website: "https://lumen.example",
        description: "Omnichannel commerce platform.",
    },
    SampleCompany {
        id: "c-stratus",
        name: "Stratus Cloudworks",
        ghost_score: 2,
        website: "https://stratus.example",
        description: "Managed Kubernetes hosting.",
    },
    SampleCompany {
        id: "c-orchard",
        name: "Orchard Finance",
        ghost_score: 8,
        website: "https://orchard.example",
        description: "Budgeting tools for households.",
    },
];

const LISTINGS: &[SampleListing] = &[
    SampleListing {
        id: "job-101",
        title: "Senior Frontend Engineer",
        company_id: "c-northwind",
        location: "Remote - US",
        tech_stack: &["React", "TypeScript", "GraphQL"],
        salary: (150_000, 185_000),
        days_posted: 2,
        ghost_score: 9,
        seniority: Some(Seniority::Senior),
        red_flags: &[],
        green_flags: &["Salary range posted", "Recruiter replies within a week"],
    },
    SampleListing {
        id: "job-102",
        title: "Backend Engineer (Rust)",
        company_id: "c-northwind",
        location: "Hybrid - Seattle, WA",
        tech_stack: &["Rust", "PostgreSQL", "AWS"],
        salary: (140_000, 175_000),
        days_posted: 6,
        ghost_score: 8,
        seniority: Some(Seniority::Mid),
        red_flags: &[],
        green_flags: &["Hiring manager named in posting"],
    },
    SampleListing {
        id: "job-103",
        title: "Staff Platform Engineer",
        company_id: "c-northwind",
        location: "Remote (Canada or US)",
        tech_stack: &["Go", "Kubernetes", "AWS"],
        salary: (0, 0),
        days_posted: 14,
        ghost_score: 7,
        seniority: Some(Seniority::Staff),
        red_flags: &["No salary range"],
        green_flags: &["Clear interview loop"],
    },
    SampleListing {
        id: "job-201",
        title: "Full Stack Developer",
        company_id: "c-bluefin",
        location: "Boston, MA",
        tech_stack: &["Node.js", "React", "MongoDB"],
        salary: (115_000, 140_000),
        days_posted: 4,
        ghost_score: 7,
        seniority: Some(Seniority::Mid),
        red_flags: &[],
        green_flags: &["Benefits listed"],
    },
    SampleListing {
        id: "job-202",
        title: "Data Engineer",
        company_id: "c-bluefin",
        location: "Hybrid / Remote - Boston",
        tech_stack: &["Python", "Django", "PostgreSQL"],
        salary: (125_000, 150_000),
        days_posted: 4,
        ghost_score: 6,
        seniority: None,
        red_flags: &["Reposted twice"],
        green_flags: &[],
    },
    SampleListing {
        id: "job-301",
        title: "Software Engineer",
        company_id: "c-quarry",
        location: "Chicago, IL",
        tech_stack: &["Java", "AWS"],
        salary: (0, 0),
        days_posted: 58,
        ghost_score: 2,
        seniority: None,
        red_flags: &["Open for two months", "No salary range", "Evergreen posting"],
        green_flags: &[],
    },
    SampleListing {
        id: "job-302",
        title: "Junior Ruby Engineer",
        company_id: "c-quarry",
        location: "Remote",
        tech_stack: &["Ruby", "PostgreSQL"],
        salary: (70_000, 85_000),
        days_posted: 31,
        ghost_score: 4,
        seniority: Some(Seniority::Junior),
        red_flags: &["Vague responsibilities"],
        green_flags: &[],
    },
    SampleListing {
        id: "job-401",
        title: "Engineering Manager, Checkout",
        company_id: "c-lumen",
        location: "New York, NY (Hybrid)",
        tech_stack: &["Java", "Kubernetes"],
        salary: (190_000, 230_000),
        days_posted: 9,
        ghost_score: 6,
        seniority: Some(Seniority::Principal),
        red_flags: &[],
        green_flags: &["Team size disclosed"],
    },
    SampleListing {
        id: "job-402",
        title: "Mobile Engineer",
        company_id: "c-lumen",
        location: "Remote - EMEA",
        tech_stack: &["TypeScript", "React"],
        salary: (95_000, 120_000),
        days_posted: 1,
        ghost_score: 5,
        seniority: Some(Seniority::Mid),
        red_flags: &[],
        green_flags: &[],
    },
    SampleListing {
        id: "job-501",
        title: "Site Reliability Engineer",
        company_id: "c-stratus",
        location: "Austin, TX",
        tech_stack: &["Go", "Kubernetes", "AWS"],
        salary: (0, 0),
        days_posted: 73,
        ghost_score: 1,
        seniority: Some(Seniority::Senior),
        red_flags: &["Open for over two months", "No salary range", "Unanswered applications reported"],
        green_flags: &[],
    },
    SampleListing {
        id: "job-601",
        title: "Senior .NET Engineer",
        company_id: "c-orchard",
        location: "Remote - US",
        tech_stack: &[".NET", "PostgreSQL"],
        salary: (145_000, 170_000),
        days_posted: 3,
        ghost_score: 8,
        seniority: Some(Seniority::Senior),
        red_flags: &[],
        green_flags: &["Salary range posted"],
    },
    SampleListing {
        id: "job-602",
        title: "Python Engineer, Risk",
        company_id: "c-orchard",
        location: "Hybrid - Denver, CO",
        tech_stack: &["Python", "AWS"],
        salary: (130_000, 160_000),
        days_posted: 12,
        ghost_score: 9,
        seniority: None,
        red_flags: &[],
        green_flags: &["Interview process documented"],
    },
];

pub(super) fn dataset() -> (Vec<Company>, Vec<Listing>) {
    let companies = COMPANIES
        .iter()
        .map(|company| Company {
            id: CompanyId::new(company.id),
            name: company.name.to_string(),
            slug: slugify(company.name),
            ghost_score: company.ghost_score,
            logo_url: None,
            website: Some(company.website.to_string()),
            description: Some(company.description.to_string()),
        })
        .collect();

    let listings = LISTINGS
        .iter()
        .map(|listing| Listing {
            id: JobId::new(listing.id),
            title: listing.title.to_string(),
            company_id: CompanyId::new(listing.company_id),
            location: listing.location.to_string(),
            tech_stack: to_strings(listing.tech_stack),
            salary_min: listing.salary.0,
            salary_max: listing.salary.1,
            days_posted: listing.days_posted,
            ghost_score: listing.ghost_score,
            red_flags: to_strings(listing.red_flags),
            green_flags: to_strings(listing.green_flags),
            seniority: listing.seniority,
            description: None,
            application_url: None,
        })
        .collect();

    (companies, listings)
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
