use super::common::*;
use crate::model::{
    ApplicationSelector, ApplicationStatus, EntityKind, Index, JobKey, JobSelector, ModelError,
    PersonKey, PersonSelector,
};

fn pair(fixture: &Fixture) -> ApplicationSelector {
    ApplicationSelector::Pair {
        person: PersonSelector::Key(PersonKey::new(fixture.bob.phone().clone())),
        job: JobSelector::Key(JobKey::new(
            fixture.backend.title().clone(),
            Some(fixture.backend.company().clone()),
        )),
    }
}

#[test]
fn advance_by_pair_updates_the_stored_status() {
    let fixture = fixture();
    let selector = pair(&fixture);
    let Fixture {
        mut model,
        bob,
        backend,
        ..
    } = fixture;

    let advanced = model
        .advance_application_by(&selector, 2)
        .expect("0 + 2 <= 3");
    assert_eq!(advanced.status().get(), 2);
    let stored = model
        .applications_by_person_and_job(&bob, &backend)
        .expect("still stored");
    assert_eq!(stored.status(), ApplicationStatus::new(2));
}

#[test]
fn advance_past_the_last_round_leaves_the_status_unchanged() {
    let fixture = fixture();
    let selector = pair(&fixture);
    let Fixture {
        mut model,
        bob,
        backend,
        ..
    } = fixture;

    model.advance_application_by(&selector, 3).expect("0 + 3 <= 3");
    let err = model
        .advance_application_by(&selector, 1)
        .expect_err("3 is terminal");
    assert_eq!(
        err,
        ModelError::InvalidApplicationStatus {
            status: 4,
            rounds: 3
        }
    );
    let stored = model
        .applications_by_person_and_job(&bob, &backend)
        .expect("still stored");
    assert_eq!(stored.status().get(), 3);
    assert_consistent(&model);
}

#[test]
fn negative_advance_is_rejected() {
    let Fixture { mut model, .. } = fixture();
    let selector = ApplicationSelector::Displayed(Index::from_zero_based(0));
    assert_eq!(
        model.advance_application_by(&selector, -1),
        Err(ModelError::NegativeAdvance(-1))
    );
}

#[test]
fn add_application_requires_stored_endpoints_and_a_fresh_pair() {
    let Fixture {
        mut model,
        ada,
        backend,
        ..
    } = fixture();

    let stranger = person("Carol Lim", "95550000");
    assert_eq!(
        model.add_application(application(&stranger, &backend, 0)),
        Err(ModelError::NotFound(EntityKind::Person))
    );

    let unknown_job = job("Data Engineer", "Initech", 2);
    assert_eq!(
        model.add_application(application(&ada, &unknown_job, 0)),
        Err(ModelError::NotFound(EntityKind::Job))
    );

    assert_eq!(
        model.add_application(application(&ada, &backend, 3)),
        Err(ModelError::Duplicate(EntityKind::Application))
    );
}

#[test]
fn add_application_by_selectors_checks_initial_status() {
    let Fixture { mut model, .. } = fixture();
    model
        .add_person(person("Carol Lim", "95550000"))
        .expect("add carol");

    let carol = PersonSelector::Displayed(Index::from_zero_based(2));
    let frontend = JobSelector::Displayed(Index::from_zero_based(1));
    assert!(model
        .add_application_by(&carol, &frontend, ApplicationStatus::new(3))
        .expect_err("frontend has two rounds")
        .is_status_violation());

    let added = model
        .add_application_by(&carol, &frontend, ApplicationStatus::new(0))
        .expect("fresh pair");
    assert_eq!(added.applicant().name().as_str(), "Carol Lim");
    assert_consistent(&model);
}

#[test]
fn delete_application_by_displayed_index() {
    let Fixture { mut model, ada, .. } = fixture();
    let removed = model
        .delete_application_by(&ApplicationSelector::Displayed(Index::from_zero_based(0)))
        .expect("first application");
    assert_eq!(removed.applicant(), &ada);
    assert_eq!(model.applications_manager().applications().len(), 2);
    assert!(model.has_person(&ada));
}
