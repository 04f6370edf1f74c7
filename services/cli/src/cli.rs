use clap::{Args, Parser, Subcommand};
use hireflow::config::AppConfig;
use hireflow::error::AppError;
use hireflow::model::{
    Address, Degree, Email, Index, JobAddress, JobCompany, JobRounds, JobTitle, JobType, Name,
    Phone, School, Tag,
};
use hireflow::storage::{load_model, save_model, JsonFileStorage};
use hireflow::telemetry;
use tracing::info;

use crate::{commands, shell};

#[derive(Parser, Debug)]
#[command(
    name = "hireflow",
    about = "Track candidates, job openings and their interview progress",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Show every candidate, clearing candidate filters
    List,
    /// Narrow the candidate list to names containing any keyword
    Find(KeywordArgs),
    /// Add a candidate
    Add(PersonArgs),
    /// Edit the candidate at a displayed index
    Edit {
        index: Index,
        #[command(flatten)]
        fields: PersonEditArgs,
    },
    /// Delete the candidate at a displayed index, with their applications
    Delete { index: Index },
    /// Set or clear the remark of the candidate at a displayed index
    Remark {
        index: Index,
        /// Remark text; leave empty to clear it
        text: Vec<String>,
    },
    /// Show every job, clearing job filters
    ListJobs,
    /// Narrow the job list to jobs mentioning any keyword
    FindJob(KeywordArgs),
    /// Add a job opening
    AddJob(JobArgs),
    /// Edit the job at a displayed index
    EditJob {
        index: Index,
        #[command(flatten)]
        fields: JobEditArgs,
    },
    /// Delete the job at a displayed index, with its applications
    DeleteJob { index: Index },
    /// Show every application, clearing application filters
    ListApps,
    /// Narrow the application list to job titles containing any keyword
    FindApp(KeywordArgs),
    /// Record a candidate's application to a job
    AddApp {
        #[command(flatten)]
        pair: PairArgs,
        /// Interview rounds already completed
        #[arg(long, default_value = "0")]
        status: hireflow::model::ApplicationStatus,
    },
    /// Move an application forward by some interview rounds
    AdvanceApp {
        #[command(flatten)]
        target: ApplicationTargetArgs,
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        rounds: i64,
    },
    /// Delete an application
    DeleteApp {
        #[command(flatten)]
        target: ApplicationTargetArgs,
    },
    /// Interactive session keeping filters between commands (default command)
    Shell,
}

#[derive(Args, Debug)]
pub(crate) struct KeywordArgs {
    #[arg(required = true)]
    pub(crate) keywords: Vec<String>,
}

#[derive(Args, Debug)]
pub(crate) struct PersonArgs {
    #[arg(long, short = 'n')]
    pub(crate) name: Name,
    #[arg(long, short = 'p')]
    pub(crate) phone: Phone,
    #[arg(long, short = 'e')]
    pub(crate) email: Email,
    #[arg(long, short = 'a')]
    pub(crate) address: Address,
    #[arg(long, short = 's')]
    pub(crate) school: School,
    #[arg(long, short = 'd')]
    pub(crate) degree: Degree,
    /// Repeat for several tags
    #[arg(long = "tag", short = 't')]
    pub(crate) tags: Vec<Tag>,
}

#[derive(Args, Debug)]
pub(crate) struct PersonEditArgs {
    #[arg(long, short = 'n')]
    pub(crate) name: Option<Name>,
    #[arg(long, short = 'p')]
    pub(crate) phone: Option<Phone>,
    #[arg(long, short = 'e')]
    pub(crate) email: Option<Email>,
    #[arg(long, short = 'a')]
    pub(crate) address: Option<Address>,
    #[arg(long, short = 's')]
    pub(crate) school: Option<School>,
    #[arg(long, short = 'd')]
    pub(crate) degree: Option<Degree>,
    /// Replaces every tag; repeat for several tags
    #[arg(long = "tag", short = 't')]
    pub(crate) tags: Vec<Tag>,
    /// Remove every tag
    #[arg(long, conflicts_with = "tags")]
    pub(crate) clear_tags: bool,
}

#[derive(Args, Debug)]
pub(crate) struct JobArgs {
    #[arg(long)]
    pub(crate) title: JobTitle,
    #[arg(long)]
    pub(crate) company: JobCompany,
    #[arg(long)]
    pub(crate) rounds: JobRounds,
    /// Repeat for several skills
    #[arg(long = "skill")]
    pub(crate) skills: Vec<String>,
    #[arg(long)]
    pub(crate) address: JobAddress,
    /// Intern, Part Time, Full Time, Freelance or Contract
    #[arg(long = "type")]
    pub(crate) job_type: JobType,
}

#[derive(Args, Debug)]
pub(crate) struct JobEditArgs {
    #[arg(long)]
    pub(crate) title: Option<JobTitle>,
    #[arg(long)]
    pub(crate) company: Option<JobCompany>,
    #[arg(long)]
    pub(crate) rounds: Option<JobRounds>,
    /// Replaces every skill; repeat for several skills
    #[arg(long = "skill")]
    pub(crate) skills: Vec<String>,
    #[arg(long)]
    pub(crate) address: Option<JobAddress>,
    #[arg(long = "type")]
    pub(crate) job_type: Option<JobType>,
}

/// Candidate and job of an application, by displayed index or by key.
///
/// Exactly one of `--person-index`/`--phone` and one of `--job-index`/`--title` is
/// expected; the command layer reports a missing side.
#[derive(Args, Debug)]
pub(crate) struct PairArgs {
    #[arg(long)]
    pub(crate) person_index: Option<Index>,
    #[arg(long, conflicts_with = "person_index")]
    pub(crate) phone: Option<Phone>,
    #[arg(long)]
    pub(crate) job_index: Option<Index>,
    #[arg(long, conflicts_with = "job_index")]
    pub(crate) title: Option<JobTitle>,
    /// Narrows --title when several companies offer it
    #[arg(long, requires = "title")]
    pub(crate) company: Option<JobCompany>,
}

#[derive(Args, Debug)]
pub(crate) struct ApplicationTargetArgs {
    /// Position in the displayed application list
    #[arg(
        long,
        conflicts_with_all = ["person_index", "phone", "job_index", "title", "company"]
    )]
    pub(crate) app_index: Option<Index>,
    #[command(flatten)]
    pub(crate) pair: PairArgs,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let storage = JsonFileStorage::from_config(&config.storage);
    let mut model = load_model(&storage, config.storage.seed_sample_data)?;
    info!(environment = ?config.environment, data_dir = %config.storage.data_dir.display(), "hireflow ready");

    match cli.command.unwrap_or(Command::Shell) {
        Command::Shell => shell::run(&mut model, &storage),
        command => {
            let outcome = commands::execute(&mut model, command)?;
            if outcome.mutated {
                save_model(&storage, &model)?;
            }
            println!("{}", outcome.message);
            Ok(())
        }
    }
}
