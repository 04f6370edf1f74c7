//! Demo records seeded when no data file exists yet.

use super::address_book::AddressBook;
use super::application::{Application, ApplicationStatus};
use super::applications_manager::ApplicationsManager;
use super::error::ModelError;
use super::job::{Job, JobAddress, JobCompany, JobRounds, JobSkills, JobTitle, JobType};
use super::person::{Address, Degree, Email, Name, Person, Phone, School, Tag};

struct SamplePerson {
    name: &'static str,
    phone: &'static str,
    email: &'static str,
    address: &'static str,
    school: &'static str,
    degree: &'static str,
    tags: &'static [&'static str],
}

struct SampleJob {
    title: &'static str,
    company: &'static str,
    rounds: u32,
    skills: &'static [&'static str],
    address: &'static str,
    job_type: JobType,
}

const PERSONS: [SamplePerson; 6] = [
    SamplePerson {
        name: "Alex Yeoh",
        phone: "87438807",
        email: "alexyeoh@example.com",
        address: "Blk 30 Geylang Street 29, #06-40",
        school: "NUS",
        degree: "Computer Science",
        tags: &["DataScience", "Python"],
    },
    SamplePerson {
        name: "Bernice Yu",
        phone: "99272758",
        email: "berniceyu@example.com",
        address: "Blk 30 Lorong 3 Serangoon Gardens, #07-18",
        school: "NUS",
        degree: "Information Systems",
        tags: &["Flutter", "JavaScript"],
    },
    SamplePerson {
        name: "Charlotte Oliveiro",
        phone: "93210283",
        email: "charlotte@example.com",
        address: "Blk 11 Ang Mo Kio Street 74, #11-04",
        school: "NTU",
        degree: "Business Analytics",
        tags: &["Python"],
    },
    SamplePerson {
        name: "David Li",
        phone: "91031282",
        email: "lidavid@example.com",
        address: "Blk 436 Serangoon Gardens Street 26, #16-43",
        school: "NTU",
        degree: "Mathematics",
        tags: &["Java"],
    },
    SamplePerson {
        name: "Irfan Ibrahim",
        phone: "92492021",
        email: "irfan@example.com",
        address: "Blk 47 Tampines Street 20, #17-35",
        school: "SMU",
        degree: "Business",
        tags: &["Clang"],
    },
    SamplePerson {
        name: "Roy Balakrishnan",
        phone: "92624417",
        email: "royb@example.com",
        address: "Blk 45 Aljunied Street 85, #11-31",
        school: "SMU",
        degree: "Political Science",
        tags: &["AWSCertified"],
    },
];

const JOBS: [SampleJob; 6] = [
    SampleJob {
        title: "Software Engineer",
        company: "Google",
        rounds: 5,
        skills: &["Java", "Spring Boot", "Microservices"],
        address: "70 Pasir Panjang Road, #03-71",
        job_type: JobType::Intern,
    },
    SampleJob {
        title: "Data Scientist",
        company: "Microsoft",
        rounds: 4,
        skills: &["Python", "ML", "TensorFlow"],
        address: "182 Cecil Street, #13-01",
        job_type: JobType::FullTime,
    },
    SampleJob {
        title: "Product Manager",
        company: "Apple",
        rounds: 3,
        skills: &["Agile", "Roadmap Planning"],
        address: "7 Ang Mo Kio Street 64",
        job_type: JobType::Contract,
    },
    SampleJob {
        title: "UX Designer",
        company: "Meta",
        rounds: 3,
        skills: &["Figma", "User Research", "Wire Framing"],
        address: "9 Straits View, Marina One West Tower",
        job_type: JobType::Freelance,
    },
    SampleJob {
        title: "DevOps Engineer",
        company: "Amazon",
        rounds: 4,
        skills: &["AWS", "Kubernetes", "CI/CD"],
        address: "23 Church Street, Capital Square",
        job_type: JobType::PartTime,
    },
    SampleJob {
        title: "Full Stack Developer",
        company: "Netflix",
        rounds: 4,
        skills: &["React", "Node.js", "MongoDB"],
        address: "1 Raffles Quay, North Tower",
        job_type: JobType::FullTime,
    },
];

/// (person, job, rounds completed), indexing into the tables above.
const APPLICATIONS: [(usize, usize, u32); 8] = [
    (0, 0, 2),
    (1, 1, 3),
    (2, 2, 1),
    (3, 3, 2),
    (4, 4, 1),
    (5, 5, 3),
    (0, 1, 1),
    (1, 0, 4),
];

fn build_person(sample: &SamplePerson) -> Result<Person, ModelError> {
    let tags = sample
        .tags
        .iter()
        .map(|tag| Tag::new(*tag))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Person::new(
        Name::new(sample.name)?,
        Phone::new(sample.phone)?,
        Email::new(sample.email)?,
        Address::new(sample.address)?,
        School::new(sample.school)?,
        Degree::new(sample.degree)?,
    )
    .with_tags(tags))
}

fn build_job(sample: &SampleJob) -> Result<Job, ModelError> {
    Ok(Job::new(
        JobTitle::new(sample.title)?,
        JobCompany::new(sample.company)?,
        JobRounds::new(sample.rounds)?,
        JobSkills::new(sample.skills.iter().copied())?,
        JobAddress::new(sample.address)?,
        sample.job_type,
    ))
}

pub fn sample_persons() -> Result<Vec<Person>, ModelError> {
    PERSONS.iter().map(build_person).collect()
}

pub fn sample_jobs() -> Result<Vec<Job>, ModelError> {
    JOBS.iter().map(build_job).collect()
}

pub fn sample_address_book() -> Result<AddressBook, ModelError> {
    AddressBook::from_lists(sample_persons()?, sample_jobs()?)
}

pub fn sample_applications() -> Result<ApplicationsManager, ModelError> {
    let persons = sample_persons()?;
    let jobs = sample_jobs()?;
    let applications = APPLICATIONS
        .iter()
        .map(|&(person, job, status)| {
            Application::new(
                persons[person].clone(),
                jobs[job].clone(),
                ApplicationStatus::new(status),
            )
        })
        .collect::<Result<Vec<_>, _>>()?;
    ApplicationsManager::from_list(applications)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Model;

    #[test]
    fn sample_data_forms_a_consistent_model() {
        let book = sample_address_book().expect("sample address book");
        let applications = sample_applications().expect("sample applications");
        assert_eq!(book.persons().len(), 6);
        assert_eq!(book.jobs().len(), 6);
        assert_eq!(applications.applications().len(), 8);

        let model = Model::from_parts(book, applications).expect("no dangling applications");
        let alex = &model.address_book().persons()[0];
        assert_eq!(model.applications_by_person(alex).len(), 2);
    }
}
