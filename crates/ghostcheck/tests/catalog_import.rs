use chrono::NaiveDate;
use ghostcheck::directory::{
    CatalogImportError, CatalogImporter, CompanyId, JobId, ListingSource, Seniority,
};

const COMPANIES: &str = "ID,Name,Slug,Ghost Score,Logo URL,Website,Description\n\
c-1,Acme Robotics,,7,,https://acme.example,Warehouse automation\n\
c-2,Nimbus,nimbus-cloud,3,,,\n";

const JOBS: &str = "ID,Title,Company ID,Location,Tech Stack,Salary Min,Salary Max,Days Posted,Posted On,Ghost Score,Red Flags,Green Flags,Seniority,Description,Application URL\n\
j-1,Robotics Engineer,c-1,Hybrid - Pittsburgh,Rust; ROS ;C++,120000,150000,3,,8,,Salary range posted,senior,,https://acme.example/apply\n\
j-2,Cloud Engineer,c-2,Remote,Go;AWS,,,,2025-09-01,2,No salary range;Reposted,,,,\n\
j-3,Field Technician,c-missing,Reno,,,,,,5,,,wizard,,\n";

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 15).expect("valid date")
}

#[test]
fn importer_builds_catalog_from_exports() {
    let catalog = CatalogImporter::from_readers(COMPANIES.as_bytes(), JOBS.as_bytes(), as_of())
        .expect("import succeeds");

    assert_eq!(catalog.companies().len(), 2);
    assert_eq!(catalog.listings().len(), 3);

    let acme = catalog
        .company_by_slug("acme-robotics")
        .expect("derived slug");
    assert_eq!(acme.ghost_score, 7);
    assert!(catalog.company_by_slug("nimbus-cloud").is_some());

    let robotics = catalog.listing(&JobId::new("j-1")).expect("listing j-1");
    assert_eq!(robotics.tech_stack, vec!["Rust", "ROS", "C++"]);
    assert_eq!(robotics.seniority, Some(Seniority::Senior));
    assert_eq!(robotics.compensation().label(), "$120,000 – $150,000");

    let cloud = catalog.listing(&JobId::new("j-2")).expect("listing j-2");
    assert_eq!(cloud.days_posted, 14);
    assert!(!cloud.compensation().is_disclosed());
    assert_eq!(cloud.red_flags, vec!["No salary range", "Reposted"]);

    let technician = catalog.listing(&JobId::new("j-3")).expect("listing j-3");
    assert_eq!(technician.seniority, None);
    assert_eq!(catalog.dangling_listings(), vec![&JobId::new("j-3")]);
    assert_eq!(
        catalog
            .listings_for_company(&CompanyId::new("c-1"))
            .len(),
        1
    );
}

#[test]
fn importer_rejects_out_of_range_scores() {
    let companies = "ID,Name,Ghost Score\nc-1,Acme,11\n";
    let jobs = "ID,Title,Company ID,Ghost Score\n";

    let err = CatalogImporter::from_readers(companies.as_bytes(), jobs.as_bytes(), as_of())
        .expect_err("score above ten fails");
    assert!(matches!(err, CatalogImportError::Catalog(_)));
}

#[test]
fn importer_reports_malformed_rows() {
    let jobs = "ID,Title,Company ID,Ghost Score\nj-1,Engineer,c-1,high\n";
    let err = CatalogImporter::from_readers(COMPANIES.as_bytes(), jobs.as_bytes(), as_of())
        .expect_err("non-numeric score fails");
    assert!(matches!(err, CatalogImportError::Csv(_)));
}

#[test]
fn listings_by_ids_keeps_request_order() {
    let catalog = CatalogImporter::from_readers(COMPANIES.as_bytes(), JOBS.as_bytes(), as_of())
        .expect("import succeeds");
    let ids = [JobId::new("j-3"), JobId::new("nope"), JobId::new("j-1")];
    let found: Vec<&str> = catalog
        .listings_by_ids(&ids)
        .into_iter()
        .map(|listing| listing.id.as_str())
        .collect();
    assert_eq!(found, vec!["j-3", "j-1"]);
}
