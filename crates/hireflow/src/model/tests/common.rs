use crate::model::{
    Address, Application, ApplicationStatus, Degree, Email, Job, JobAddress, JobCompany,
    JobRounds, JobSkills, JobTitle, JobType, Model, Name, Person, Phone, School,
};

pub(crate) fn person(name: &str, phone: &str) -> Person {
    let email = format!("{}@example.com", name.to_lowercase().replace(' ', "."));
    Person::new(
        Name::new(name).expect("valid name"),
        Phone::new(phone).expect("valid phone"),
        Email::new(email).expect("valid email"),
        Address::new("Blk 30 Geylang Street 29, #06-40").expect("valid address"),
        School::new("NUS").expect("valid school"),
        Degree::new("Computer Science").expect("valid degree"),
    )
}

pub(crate) fn job(title: &str, company: &str, rounds: u32) -> Job {
    Job::new(
        JobTitle::new(title).expect("valid title"),
        JobCompany::new(company).expect("valid company"),
        JobRounds::new(rounds).expect("valid rounds"),
        JobSkills::new(["Rust", "SQL"]).expect("valid skills"),
        JobAddress::new("1 Fusionopolis Way").expect("valid address"),
        JobType::FullTime,
    )
}

pub(crate) fn application(applicant: &Person, job: &Job, status: u32) -> Application {
    Application::new(applicant.clone(), job.clone(), ApplicationStatus::new(status))
        .expect("status within rounds")
}

/// Ada and Bob, a three-round backend job and a two-round frontend job.
/// Ada is at round 1 of backend and round 2 of frontend; Bob is at round 0 of backend.
pub(crate) struct Fixture {
    pub model: Model,
    pub ada: Person,
    pub bob: Person,
    pub backend: Job,
    pub frontend: Job,
}

pub(crate) fn fixture() -> Fixture {
    let ada = person("Ada Lovelace", "91234567");
    let bob = person("Bob Tan", "98765432");
    let backend = job("Backend Engineer", "Acme", 3);
    let frontend = job("Frontend Engineer", "Globex", 2);

    let mut model = Model::new();
    model.add_person(ada.clone()).expect("add ada");
    model.add_person(bob.clone()).expect("add bob");
    model.add_job(backend.clone()).expect("add backend");
    model.add_job(frontend.clone()).expect("add frontend");
    model
        .add_application(application(&ada, &backend, 1))
        .expect("ada -> backend");
    model
        .add_application(application(&ada, &frontend, 2))
        .expect("ada -> frontend");
    model
        .add_application(application(&bob, &backend, 0))
        .expect("bob -> backend");

    Fixture {
        model,
        ada,
        bob,
        backend,
        frontend,
    }
}

/// Every stored application respects its job's round count and points at stored records.
pub(crate) fn assert_consistent(model: &Model) {
    for application in model.applications_manager().applications() {
        assert!(application.status().get() <= application.job().rounds().get());
        assert!(model
            .address_book()
            .persons()
            .contains(application.applicant()));
        assert!(model.address_book().jobs().contains(application.job()));
    }
}
