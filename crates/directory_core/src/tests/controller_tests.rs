use super::*;
use crate::test_support::{mixed_roster, names, two_doctors};

fn controller(query: &str) -> PageController {
    PageController::new(QueryParams::parse(query))
}

#[test]
fn fetch_is_requested_once() {
    let mut page = controller("");
    assert_eq!(page.state(), PageState::Loading);
    assert!(page.begin_fetch());
    assert!(!page.begin_fetch());
}

#[test]
fn initial_view_comes_from_url() {
    let mut page = controller("search=dr.+b");
    page.roster_loaded(two_doctors());

    assert_eq!(page.state(), PageState::Ready);
    assert_eq!(names(page.filtered()), vec!["Dr. B"]);
    assert_eq!(page.search_text(), "dr. b");
    assert_eq!(page.query().get(query::SEARCH), Some("dr. b"));
}

#[test]
fn shared_link_reproduces_all_filters() {
    let mut page = controller(
        "search=dr&mode=Video+Consultation&specialties=Cardiology&sort=experience",
    );
    page.roster_loaded(mixed_roster());

    assert_eq!(
        names(page.filtered()),
        vec!["Dr. Kavya Menon", "Dr. Meera Iyer"]
    );
    assert_eq!(page.panel().mode(), Some(ConsultationMode::Video));
    assert!(page.panel().is_selected("Cardiology"));
}

#[test]
fn all_mode_in_url_means_no_mode_filter() {
    let mut page = controller("mode=All");
    page.roster_loaded(mixed_roster());
    assert_eq!(page.filtered().len(), mixed_roster().len());
    assert!(!page.query().contains(query::MODE));
}

#[test]
fn failed_fetch_leaves_empty_ready_page() {
    let mut page = controller("sort=fees");
    assert!(page.begin_fetch());
    page.roster_failed(&DirectoryError::Config("unreachable".to_string()));

    assert_eq!(page.state(), PageState::Ready);
    assert!(page.load_failed());
    assert!(page.roster().is_empty());
    assert!(page.filtered().is_empty());
    assert!(!page.begin_fetch());
}

#[test]
fn panel_events_before_roster_do_not_touch_view_or_url() {
    let mut page = controller("search=x");
    assert!(!page.select_sort(Some(SortKey::Fees)));
    assert!(!page.toggle_specialty("Cardiology"));

    assert!(page.filtered().is_empty());
    assert_eq!(page.query(), &QueryParams::parse("search=x"));
}

#[test]
fn search_replaces_view_and_updates_url() {
    let mut page = controller("sort=fees");
    page.roster_loaded(two_doctors());

    page.search_input("dr. a");
    assert_eq!(names(page.filtered()), vec!["Dr. A"]);
    assert_eq!(page.query().get(query::SEARCH), Some("dr. a"));
    assert_eq!(page.query().get(query::SORT), Some("fees"));

    page.search_input("");
    assert_eq!(names(page.filtered()), vec!["Dr. A", "Dr. B"]);
    assert!(!page.query().contains(query::SEARCH));
}

#[test]
fn panel_update_mirrors_active_filters_into_url() {
    let mut page = controller("search=dr");
    page.roster_loaded(mixed_roster());

    assert!(page.select_mode(Some(ConsultationMode::InClinic)));
    assert!(page.toggle_specialty("Dentist"));
    assert!(page.select_sort(Some(SortKey::Fees)));
    assert_eq!(names(page.filtered()), vec!["Dr. Arjun Rao"]);
    assert_eq!(
        page.query().to_query_string(),
        "search=dr&mode=In-clinic+Consultation&specialties=Dentist&sort=fees"
    );

    assert!(page.select_mode(None));
    assert!(page.toggle_specialty("Dentist"));
    assert_eq!(page.query().to_query_string(), "search=dr&sort=fees");
}

#[test]
fn page_url_carries_query() {
    let mut page = controller("");
    page.roster_loaded(two_doctors());
    page.select_sort(Some(SortKey::Experience));

    let base = Url::parse("http://localhost:3000/").expect("url");
    assert_eq!(
        page.page_url(&base).as_str(),
        "http://localhost:3000/?sort=experience"
    );
}

#[test]
fn scenario_sorts_from_url() {
    let mut by_fees = controller("sort=fees");
    by_fees.roster_loaded(two_doctors());
    assert_eq!(names(by_fees.filtered()), vec!["Dr. B", "Dr. A"]);

    let mut by_experience = controller("sort=experience");
    by_experience.roster_loaded(two_doctors());
    assert_eq!(names(by_experience.filtered()), vec!["Dr. B", "Dr. A"]);
}

#[test]
fn initial_view_is_pure() {
    let roster = mixed_roster();
    let params = QueryParams::parse("mode=Video+Consultation&sort=fees");
    assert_eq!(initial_view(&roster, &params), initial_view(&roster, &params));
    assert_eq!(
        names(&initial_view(&roster, &params)),
        vec!["Dr. Kavya Menon", "Dr. Meera Iyer"]
    );
}
