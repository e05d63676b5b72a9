use ghostcheck::directory::{
    estimated_fill_rate_pct, hiring_activity, AverageGhostScore, Company, CompanyId,
    CompanyMetrics, JobId, Listing,
};

fn company(ghost_score: u8) -> Company {
    Company {
        id: CompanyId::new("c-acme"),
        name: "Acme".to_string(),
        slug: "acme".to_string(),
        ghost_score,
        logo_url: None,
        website: None,
        description: None,
    }
}

fn listing(id: &str, days_posted: u32, ghost_score: u8) -> Listing {
    Listing {
        id: JobId::new(id),
        title: "Engineer".to_string(),
        company_id: CompanyId::new("c-acme"),
        location: "Remote".to_string(),
        tech_stack: Vec::new(),
        salary_min: 0,
        salary_max: 0,
        days_posted,
        ghost_score,
        red_flags: Vec::new(),
        green_flags: Vec::new(),
        seniority: None,
        description: None,
        application_url: None,
    }
}

#[test]
fn two_listings_produce_documented_metrics() {
    let listings = [listing("a", 3, 4), listing("b", 7, 6)];
    let metrics = CompanyMetrics::compute(&company(5), &listings);

    assert_eq!(metrics.open_roles, 2);
    assert_eq!(metrics.avg_days_posted, 5);
    assert_eq!(metrics.avg_ghost_score, AverageGhostScore::Tenths(50));
    assert_eq!(metrics.avg_ghost_score.to_string(), "5.0");
    assert_eq!(metrics.estimated_fill_rate_pct, 77);
}

#[test]
fn uneven_pair_averages_to_whole_values() {
    let listings = [listing("a", 2, 3), listing("b", 8, 7)];
    let metrics = CompanyMetrics::compute(&company(5), &listings);

    assert_eq!(metrics.open_roles, 2);
    assert_eq!(metrics.avg_days_posted, 5);
    assert_eq!(metrics.avg_ghost_score, AverageGhostScore::Tenths(50));
    assert_eq!(metrics.avg_ghost_score.to_string(), "5.0");
    assert_eq!(metrics.estimated_fill_rate_pct, 77);
}

#[test]
fn company_without_listings_reports_sentinel() {
    let none: Vec<Listing> = Vec::new();
    let metrics = CompanyMetrics::compute(&company(6), &none);

    assert_eq!(metrics.open_roles, 0);
    assert_eq!(metrics.avg_days_posted, 0);
    assert_eq!(metrics.avg_ghost_score, AverageGhostScore::NoData);
    assert_eq!(metrics.avg_ghost_score.to_string(), "—");
    assert!((60..=95).contains(&metrics.estimated_fill_rate_pct));

    let view = metrics.to_view();
    let json = serde_json::to_value(&view).expect("serialize view");
    assert!(json["avg_ghost_score"].is_null());
    assert_eq!(json["fill_rate_is_estimate"], true);
}

#[test]
fn averages_round_half_up() {
    let listings = [listing("a", 1, 7), listing("b", 2, 8)];
    let metrics = CompanyMetrics::compute(&company(7), &listings);
    assert_eq!(metrics.avg_days_posted, 2);
    assert_eq!(metrics.avg_ghost_score.to_string(), "7.5");

    let thirds = [listing("a", 0, 1), listing("b", 0, 1), listing("c", 0, 2)];
    let metrics = CompanyMetrics::compute(&company(7), &thirds);
    assert_eq!(metrics.avg_ghost_score.to_string(), "1.3");
}

#[test]
fn fill_rate_is_bounded_for_all_inputs() {
    for score in 0..=10 {
        for roles in 0..30 {
            let pct = estimated_fill_rate_pct(score, roles);
            assert!((60..=95).contains(&pct), "score {score} roles {roles} -> {pct}");
        }
    }
}

#[test]
fn hiring_activity_is_stable_for_equal_ages() {
    let listings = [
        listing("old", 40, 5),
        listing("first-tie", 4, 5),
        listing("fresh", 1, 5),
        listing("second-tie", 4, 5),
    ];
    let order: Vec<&str> = hiring_activity(&listings)
        .into_iter()
        .map(|listing| listing.id.as_str())
        .collect();
    assert_eq!(order, vec!["fresh", "first-tie", "second-tie", "old"]);
}
