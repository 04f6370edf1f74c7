use hireflow::error::AppError;
use hireflow::model::{
    ApplicationJobContainsKeywords, ApplicationSelector, Job, JobContainsKeywords, JobEdit,
    JobKey, JobSelector, JobSkills, Keywords, Model, ModelError, NameContainsKeywords, Person,
    PersonEdit, PersonKey, PersonSelector, Remark,
};

use crate::cli::{
    ApplicationTargetArgs, Command, JobArgs, JobEditArgs, PairArgs, PersonArgs, PersonEditArgs,
};
use crate::render;

/// Text to show the user, and whether the stores changed and need saving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Outcome {
    pub(crate) message: String,
    pub(crate) mutated: bool,
}

impl Outcome {
    fn view(message: String) -> Self {
        Self {
            message,
            mutated: false,
        }
    }

    fn changed(message: String) -> Self {
        Self {
            message,
            mutated: true,
        }
    }
}

pub(crate) fn execute(model: &mut Model, command: Command) -> Result<Outcome, AppError> {
    match command {
        Command::List => {
            model.reset_person_filter();
            Ok(Outcome::view(render::persons(model)))
        }
        Command::Find(args) => {
            let keywords = Keywords::new(&args.keywords);
            model.update_person_filter(NameContainsKeywords::new(keywords));
            Ok(Outcome::view(render::persons(model)))
        }
        Command::Add(args) => {
            let person = person_from(args);
            let message = format!("New person added: {person}");
            model.add_person(person)?;
            Ok(Outcome::changed(message))
        }
        Command::Edit { index, fields } => {
            let edit = person_edit_from(fields)?;
            let edited = model.edit_person_by(&PersonSelector::Displayed(index), &edit)?;
            Ok(Outcome::changed(format!(
                "Edited person: {}{}",
                edited.record,
                render::cascade_note("updated", edited.applications)
            )))
        }
        Command::Delete { index } => {
            let removed = model.delete_person_by(&PersonSelector::Displayed(index))?;
            Ok(Outcome::changed(format!(
                "Deleted person: {}{}",
                removed.record,
                render::cascade_note("removed", removed.applications)
            )))
        }
        Command::Remark { index, text } => {
            let remark = Remark::new(text.join(" "))?;
            let cleared = remark.is_empty();
            let edited = model.set_remark_by(&PersonSelector::Displayed(index), remark)?;
            let verb = if cleared { "Removed remark from" } else { "Added remark to" };
            Ok(Outcome::changed(format!("{verb} person: {}", edited.record)))
        }
        Command::ListJobs => {
            model.reset_job_filter();
            Ok(Outcome::view(render::jobs(model)))
        }
        Command::FindJob(args) => {
            let keywords = Keywords::new(&args.keywords);
            model.update_job_filter(JobContainsKeywords::new(keywords));
            Ok(Outcome::view(render::jobs(model)))
        }
        Command::AddJob(args) => {
            let job = job_from(args)?;
            let message = format!("New job added: {job}");
            model.add_job(job)?;
            Ok(Outcome::changed(message))
        }
        Command::EditJob { index, fields } => {
            let edit = job_edit_from(fields)?;
            let edited = model.edit_job_by(&JobSelector::Displayed(index), &edit)?;
            Ok(Outcome::changed(format!(
                "Edited job: {}{}",
                edited.record,
                render::cascade_note("updated", edited.applications)
            )))
        }
        Command::DeleteJob { index } => {
            let removed = model.delete_job_by(&JobSelector::Displayed(index))?;
            Ok(Outcome::changed(format!(
                "Deleted job: {}{}",
                removed.record,
                render::cascade_note("removed", removed.applications)
            )))
        }
        Command::ListApps => {
            model.reset_application_filter();
            Ok(Outcome::view(render::applications(model)))
        }
        Command::FindApp(args) => {
            let keywords = Keywords::new(&args.keywords);
            model.update_application_filter(ApplicationJobContainsKeywords::new(keywords));
            Ok(Outcome::view(render::applications(model)))
        }
        Command::AddApp { pair, status } => {
            let (person, job) = pair_selectors(pair)?;
            let added = model.add_application_by(&person, &job, status)?;
            Ok(Outcome::changed(format!("New application added: {added}")))
        }
        Command::AdvanceApp { target, rounds } => {
            let selector = application_selector(target)?;
            let advanced = model
                .advance_application_by(&selector, rounds)
                .map_err(|err| advance_hint(err, rounds))?;
            Ok(Outcome::changed(format!("Advanced application: {advanced}")))
        }
        Command::DeleteApp { target } => {
            let selector = application_selector(target)?;
            let removed = model.delete_application_by(&selector)?;
            Ok(Outcome::changed(format!("Deleted application: {removed}")))
        }
        Command::Shell => Err(AppError::Command(
            "already in an interactive session".to_string(),
        )),
    }
}

fn person_from(args: PersonArgs) -> Person {
    Person::new(
        args.name,
        args.phone,
        args.email,
        args.address,
        args.school,
        args.degree,
    )
    .with_tags(args.tags)
}

fn person_edit_from(args: PersonEditArgs) -> Result<PersonEdit, AppError> {
    let tags = if args.clear_tags {
        Some(Default::default())
    } else if args.tags.is_empty() {
        None
    } else {
        Some(args.tags.into_iter().collect())
    };
    let edit = PersonEdit {
        name: args.name,
        phone: args.phone,
        email: args.email,
        address: args.address,
        school: args.school,
        degree: args.degree,
        remark: None,
        tags,
    };
    if edit.is_empty() {
        return Err(AppError::Command(
            "at least one field to edit must be provided".to_string(),
        ));
    }
    Ok(edit)
}

fn job_from(args: JobArgs) -> Result<Job, AppError> {
    Ok(Job::new(
        args.title,
        args.company,
        args.rounds,
        JobSkills::new(args.skills)?,
        args.address,
        args.job_type,
    ))
}

fn job_edit_from(args: JobEditArgs) -> Result<JobEdit, AppError> {
    let skills = if args.skills.is_empty() {
        None
    } else {
        Some(JobSkills::new(args.skills)?)
    };
    let edit = JobEdit {
        title: args.title,
        company: args.company,
        rounds: args.rounds,
        skills,
        address: args.address,
        job_type: args.job_type,
    };
    if edit.is_empty() {
        return Err(AppError::Command(
            "at least one field to edit must be provided".to_string(),
        ));
    }
    Ok(edit)
}

fn pair_selectors(pair: PairArgs) -> Result<(PersonSelector, JobSelector), AppError> {
    let person = match (pair.person_index, pair.phone) {
        (Some(index), _) => PersonSelector::Displayed(index),
        (None, Some(phone)) => PersonSelector::Key(PersonKey::new(phone)),
        (None, None) => {
            return Err(AppError::Command(
                "identify the candidate with --person-index or --phone".to_string(),
            ))
        }
    };
    let job = match (pair.job_index, pair.title) {
        (Some(index), _) => JobSelector::Displayed(index),
        (None, Some(title)) => JobSelector::Key(JobKey::new(title, pair.company)),
        (None, None) => {
            return Err(AppError::Command(
                "identify the job with --job-index or --title".to_string(),
            ))
        }
    };
    Ok((person, job))
}

fn application_selector(target: ApplicationTargetArgs) -> Result<ApplicationSelector, AppError> {
    match target.app_index {
        Some(index) => Ok(ApplicationSelector::Displayed(index)),
        None => {
            let (person, job) = pair_selectors(target.pair)?;
            Ok(ApplicationSelector::Pair { person, job })
        }
    }
}

fn advance_hint(err: ModelError, rounds: i64) -> AppError {
    if err.is_status_violation() {
        AppError::Command(format!(
            "{err}; cannot advance by {rounds}, delete the application instead if the process has ended"
        ))
    } else {
        AppError::Model(err)
    }
}
