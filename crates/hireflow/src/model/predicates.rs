//! Keyword predicates behind the `find` family of commands.
//!
//! A predicate matches when any of its keywords equals, ignoring case, a whole word of
//! the inspected text. Narrowing by several criteria is done by stacking predicates.

use super::application::Application;
use super::filtered::Predicate;
use super::job::Job;
use super::person::Person;

/// Normalized keyword list shared by the predicates below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keywords(Vec<String>);

impl Keywords {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            keywords
                .into_iter()
                .flat_map(|keyword| {
                    keyword
                        .as_ref()
                        .split_whitespace()
                        .map(str::to_lowercase)
                        .collect::<Vec<_>>()
                })
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// True when some keyword is a whole word of `text`.
    pub fn match_words(&self, text: &str) -> bool {
        self.match_any(text.split_whitespace())
    }

    /// True when some keyword equals one of `words`, ignoring case.
    pub fn match_any<'w>(&self, words: impl IntoIterator<Item = &'w str>) -> bool {
        words.into_iter().any(|word| {
            let word = word.to_lowercase();
            self.0.iter().any(|keyword| word == *keyword)
        })
    }

    fn joined(&self) -> String {
        self.0.join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameContainsKeywords {
    keywords: Keywords,
}

impl NameContainsKeywords {
    pub fn new(keywords: Keywords) -> Self {
        Self { keywords }
    }
}

impl Predicate<Person> for NameContainsKeywords {
    fn test(&self, person: &Person) -> bool {
        self.keywords.match_any(person.name().words())
    }

    fn describe(&self) -> String {
        format!("name contains any of [{}]", self.keywords.joined())
    }
}

/// Matches on the words of a job's title, company, skills and type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobContainsKeywords {
    keywords: Keywords,
}

impl JobContainsKeywords {
    pub fn new(keywords: Keywords) -> Self {
        Self { keywords }
    }
}

impl Predicate<Job> for JobContainsKeywords {
    fn test(&self, job: &Job) -> bool {
        self.keywords.match_words(job.title().as_str())
            || self.keywords.match_words(job.company().as_str())
            || self.keywords.match_words(job.job_type().label())
            || job
                .skills()
                .iter()
                .any(|skill| self.keywords.match_words(skill.as_str()))
    }

    fn describe(&self) -> String {
        format!("job contains any of [{}]", self.keywords.joined())
    }
}

/// Matches applications whose job title contains a keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationJobContainsKeywords {
    keywords: Keywords,
}

impl ApplicationJobContainsKeywords {
    pub fn new(keywords: Keywords) -> Self {
        Self { keywords }
    }
}

impl Predicate<Application> for ApplicationJobContainsKeywords {
    fn test(&self, application: &Application) -> bool {
        self.keywords
            .match_words(application.job().title().as_str())
    }

    fn describe(&self) -> String {
        format!("applied job title contains any of [{}]", self.keywords.joined())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_split_and_lowercase() {
        let keywords = Keywords::new(["Alex  yeoh", "BERNICE"]);
        assert_eq!(keywords.as_slice(), &["alex", "yeoh", "bernice"]);
        assert!(Keywords::new(["   "]).is_empty());
    }

    #[test]
    fn matching_is_whole_word_and_case_insensitive() {
        let keywords = Keywords::new(["engineer"]);
        assert!(keywords.match_words("Software Engineer"));
        assert!(!keywords.match_words("Engineering Manager"));
        assert!(!Keywords::new(["eng"]).match_words("Software Engineer"));
    }

    #[test]
    fn name_predicate_matches_any_name_word() {
        let ada = crate::model::tests::common::person("Ada Lovelace", "91234567");
        assert!(NameContainsKeywords::new(Keywords::new(["lovelace"])).test(&ada));
        assert!(NameContainsKeywords::new(Keywords::new(["bob", "ADA"])).test(&ada));
        assert!(!NameContainsKeywords::new(Keywords::new(["love"])).test(&ada));
    }
}
