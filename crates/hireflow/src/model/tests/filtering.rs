use super::common::*;
use crate::model::{
    ApplicationJobContainsKeywords, Index, JobContainsKeywords, Keywords, ModelError,
    NameContainsKeywords, Person, PersonSelector,
};

#[test]
fn person_filters_stack_until_reset() {
    let Fixture { mut model, .. } = fixture();
    model.add_person(person("Ada Byron", "93330000")).expect("add");

    model.update_person_filter(NameContainsKeywords::new(Keywords::new(["ada", "bob"])));
    assert_eq!(model.filtered_persons().len(), 3);

    model.update_person_filter(NameContainsKeywords::new(Keywords::new(["byron", "tan"])));
    let names: Vec<String> = model
        .filtered_persons()
        .iter()
        .map(|person| person.name().to_string())
        .collect();
    assert_eq!(names, ["Bob Tan", "Ada Byron"]);
    assert_eq!(model.person_filters().len(), 2);

    model.reset_person_filter();
    assert_eq!(model.filtered_persons().len(), 3);
}

#[test]
fn stacked_filters_match_a_single_conjunction() {
    let Fixture { mut model, .. } = fixture();
    let first = NameContainsKeywords::new(Keywords::new(["ada", "bob"]));
    let second = |person: &Person| person.phone().as_str().starts_with('9');

    model.update_person_filter(first.clone());
    model.update_person_filter(second);
    let stacked = model.filtered_persons().to_vec();

    model.reset_person_filter();
    model.update_person_filter(move |person: &Person| {
        crate::model::Predicate::test(&first, person) && second(person)
    });
    assert_eq!(model.filtered_persons().to_vec(), stacked);
}

#[test]
fn displayed_index_follows_the_filtered_view() {
    let Fixture { mut model, bob, .. } = fixture();
    model.update_person_filter(NameContainsKeywords::new(Keywords::new(["bob"])));

    let first = model
        .resolve_person(&PersonSelector::Displayed(Index::from_zero_based(0)))
        .expect("bob is displayed");
    assert_eq!(first, &bob);
    assert!(matches!(
        model.resolve_person(&PersonSelector::Displayed(Index::from_zero_based(1))),
        Err(ModelError::IndexOutOfRange { len: 1, .. })
    ));
}

#[test]
fn views_observe_mutations_made_after_filtering() {
    let Fixture { mut model, .. } = fixture();
    model.update_job_filter(JobContainsKeywords::new(Keywords::new(["engineer"])));
    assert_eq!(model.filtered_jobs().len(), 2);

    model
        .add_job(job("Site Reliability Engineer", "Initech", 2))
        .expect("add job");
    model
        .add_job(job("Designer", "Initech", 2))
        .expect("add job");
    assert_eq!(model.filtered_jobs().len(), 3);
    assert_eq!(model.filtered_jobs().backing_len(), 4);
}

#[test]
fn application_filter_matches_job_title_words() {
    let Fixture { mut model, .. } = fixture();
    model.update_application_filter(ApplicationJobContainsKeywords::new(Keywords::new([
        "frontend",
    ])));
    let visible = model.filtered_applications().to_vec();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].job().title().as_str(), "Frontend Engineer");

    model.reset_application_filter();
    assert_eq!(model.filtered_applications().len(), 3);
}

#[test]
fn job_filter_matches_skills_and_type() {
    let Fixture { mut model, .. } = fixture();
    model.update_job_filter(JobContainsKeywords::new(Keywords::new(["sql"])));
    assert_eq!(model.filtered_jobs().len(), 2);
    model.reset_job_filter();
    model.update_job_filter(JobContainsKeywords::new(Keywords::new(["intern"])));
    assert!(model.filtered_jobs().is_empty());
}
