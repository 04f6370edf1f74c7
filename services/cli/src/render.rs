//! Plain-text listings of the filtered views.

use std::fmt::Display;

use hireflow::model::{FilteredView, Model};

pub(crate) fn persons(model: &Model) -> String {
    listing("candidates", model.filtered_persons(), &model.person_filters())
}

pub(crate) fn jobs(model: &Model) -> String {
    listing("jobs", model.filtered_jobs(), &model.job_filters())
}

pub(crate) fn applications(model: &Model) -> String {
    listing(
        "applications",
        model.filtered_applications(),
        &model.application_filters(),
    )
}

/// Suffix for feedback on a person or job operation that touched applications.
pub(crate) fn cascade_note(verb: &str, count: usize) -> String {
    match count {
        0 => String::new(),
        1 => format!(" (1 application {verb})"),
        n => format!(" ({n} applications {verb})"),
    }
}

fn listing<T: Display>(noun: &str, view: FilteredView<'_, T>, filters: &[String]) -> String {
    let header = if filters.is_empty() {
        format!("{} {noun}", view.len())
    } else {
        format!(
            "{} of {} {noun} matching {}",
            view.len(),
            view.backing_len(),
            filters.join(" and ")
        )
    };
    std::iter::once(header)
        .chain(
            view.iter()
                .enumerate()
                .map(|(position, item)| format!("{:>3}. {item}", position + 1)),
        )
        .collect::<Vec<_>>()
        .join("\n")
}
