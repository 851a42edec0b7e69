//! Predicates for filtered views
//!
//! A [`Filter`] is a boxed predicate. [`Filter::all`] is the "show all"
//! default; the constructors below cover the usual list queries.

use chrono::NaiveDate;
use std::fmt;

use crate::domain::{Event, Member, Task};

/// A predicate over one entity kind
pub struct Filter<T> {
    label: String,
    predicate: Option<Box<dyn Fn(&T) -> bool>>,
}

impl<T> Filter<T> {
    /// Wraps an arbitrary predicate
    pub fn new(label: impl Into<String>, predicate: impl Fn(&T) -> bool + 'static) -> Self {
        Self {
            label: label.into(),
            predicate: Some(Box::new(predicate)),
        }
    }

    /// Accepts everything
    pub fn all() -> Self {
        Self {
            label: "all".to_string(),
            predicate: None,
        }
    }

    pub fn matches(&self, item: &T) -> bool {
        self.predicate.as_ref().map_or(true, |p| p(item))
    }

    /// Short description of what the filter keeps
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_all(&self) -> bool {
        self.predicate.is_none()
    }
}

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Self::all()
    }
}

impl<T> fmt::Debug for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Filter").field(&self.label).finish()
    }
}

fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

impl Filter<Member> {
    /// Members whose name contains any of the keywords as a whole word (any case)
    pub fn name_keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keywords: Vec<String> = keywords.into_iter().map(Into::into).collect();
        let label = format!("name: {}", keywords.join(" "));
        Self::new(label, move |m: &Member| {
            keywords
                .iter()
                .any(|k| words(&m.name).any(|w| w.eq_ignore_ascii_case(k)))
        })
    }

    /// Members carrying the tag (any case)
    pub fn tag(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        Self::new(format!("tag: {tag}"), move |m: &Member| m.has_tag(&tag))
    }

    /// Members holding the role (any case)
    pub fn role(role: impl Into<String>) -> Self {
        let role = role.into();
        Self::new(format!("role: {role}"), move |m: &Member| {
            m.role.eq_ignore_ascii_case(&role)
        })
    }
}

impl Filter<Event> {
    /// Events dated within `[start, end]`
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self::new(format!("between {start} and {end}"), move |e: &Event| {
            e.is_within(start, end)
        })
    }

    /// Events whose description contains the keyword as a whole word (any case)
    pub fn description_keyword(keyword: impl Into<String>) -> Self {
        let keyword = keyword.into();
        Self::new(format!("description: {keyword}"), move |e: &Event| {
            words(&e.description).any(|w| w.eq_ignore_ascii_case(&keyword))
        })
    }
}

impl Filter<Task> {
    /// Tasks with the given done flag
    pub fn done(done: bool) -> Self {
        let label = if done { "done" } else { "not done" };
        Self::new(label, move |t: &Task| t.done == done)
    }

    /// Tasks due on or before `date`
    pub fn due_by(date: NaiveDate) -> Self {
        Self::new(format!("due by {date}"), move |t: &Task| t.deadline <= date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Amount, Year};

    fn member(name: &str) -> Member {
        Member::new(
            name,
            "A1234567X".parse().unwrap(),
            Year::new(1).unwrap(),
            "m@u.nus.edu".parse().unwrap(),
            "91234567".parse().unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn all_accepts_everything() {
        let filter: Filter<Member> = Filter::all();
        assert!(filter.matches(&member("Anyone")));
        assert!(filter.is_all());
    }

    #[test]
    fn name_keywords_match_whole_words() {
        let filter = Filter::name_keywords(["alice", "bob"]);

        assert!(filter.matches(&member("Alice Tan")));
        assert!(filter.matches(&member("Bob")));
        assert!(!filter.matches(&member("Alicia")));
        assert!(!filter.is_all());
    }

    #[test]
    fn tag_and_role() {
        let m = member("Alice")
            .with_role("Treasurer")
            .with_tags(vec!["exco".parse().unwrap()]);

        assert!(Filter::tag("Exco").matches(&m));
        assert!(!Filter::tag("sports").matches(&m));
        assert!(Filter::role("treasurer").matches(&m));
    }

    #[test]
    fn event_filters() {
        let e = Event::new(
            "E1".parse().unwrap(),
            "2024-03-10".parse().unwrap(),
            "Freshmen Camp",
            Amount::ZERO,
        )
        .unwrap();

        let march = Filter::between("2024-03-01".parse().unwrap(), "2024-03-31".parse().unwrap());
        assert!(march.matches(&e));
        assert!(Filter::description_keyword("camp").matches(&e));
        assert!(!Filter::description_keyword("dinner").matches(&e));
    }

    #[test]
    fn task_filters() {
        let t = Task::new("Book venue", "2024-05-01".parse().unwrap()).unwrap();

        assert!(Filter::done(false).matches(&t));
        assert!(Filter::done(true).matches(&t.marked_done()));
        assert!(Filter::due_by("2024-05-01".parse().unwrap()).matches(&t));
        assert!(!Filter::due_by("2024-04-30".parse().unwrap()).matches(&t));
    }
}
