use anyhow::*;
use lazy_static::lazy_static;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

pub mod question;
pub mod term;


pub use question::{Question, RawQuestion};
pub use term::Term;

const BUILTIN_CATEGORIES: &str = include_str!("../../data/categories.csv");
const BUILTIN_TERMS: &str = include_str!("../../data/terms.csv");
const BUILTIN_QUESTIONS: &str = include_str!("../../data/questions.csv");

lazy_static! {
    static ref BUILTIN_CATALOG: Catalog =
        Catalog::from_csv(BUILTIN_CATEGORIES, BUILTIN_TERMS, BUILTIN_QUESTIONS)
            .expect("built-in data set is well-formed");
}

/// The built-in data set, parsed once per process.
pub fn catalog() -> &'static Catalog {
    &BUILTIN_CATALOG
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
}

/// Category scope for a quiz or a term listing. `All` is the "mixed quiz"
/// option spanning the entire catalog.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CategoryFilter {
    All,
    Category(String),
}

impl CategoryFilter {
    pub fn matches(&self, category_id: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(id) => id == category_id,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "all"),
            CategoryFilter::Category(id) => write!(f, "{}", id),
        }
    }
}

/// Immutable table of categories, terms and quiz questions. Loaded once,
/// queried by the presentation layer and by quiz sessions. Unknown
/// categories yield empty results, never errors.
#[derive(Debug)]
pub struct Catalog {
    categories: Vec<Category>,
    terms: Vec<Term>,
    questions: Vec<Question>,
}

impl Catalog {
    /// Reads `categories.csv`, `terms.csv` and `questions.csv` from a directory.
    pub fn open(dir: &Path) -> Result<Catalog> {
        let read = |name: &str| -> Result<String> {
            fs::read_to_string(dir.join(name))
                .with_context(|| format!("could not read {} in {}", name, dir.display()))
        };
        Catalog::from_csv(
            &read("categories.csv")?,
            &read("terms.csv")?,
            &read("questions.csv")?,
        )
    }

    pub fn from_csv(categories: &str, terms: &str, questions: &str) -> Result<Catalog> {
        let mut catalog = Catalog {
            categories: Vec::new(),
            terms: Vec::new(),
            questions: Vec::new(),
        };

        let mut csv_reader = csv::Reader::from_reader(categories.as_bytes());
        for category in csv_reader.deserialize() {
            let category: Category = category.context("malformed category entry")?;
            catalog.categories.push(category);
        }

        let mut csv_reader = csv::Reader::from_reader(terms.as_bytes());
        for term in csv_reader.deserialize() {
            let term: Term = term.context("malformed term entry")?;
            catalog.terms.push(term);
        }

        let mut csv_reader = csv::Reader::from_reader(questions.as_bytes());
        for raw_question in csv_reader.deserialize() {
            let raw_question: RawQuestion = raw_question.context("malformed question entry")?;
            let question = Question::try_from_raw(raw_question)?;
            catalog.questions.push(question);
        }

        Ok(catalog)
    }

    /// All categories, in declaration order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Questions in scope for a quiz, in declaration order.
    pub fn questions_for(&self, filter: &CategoryFilter) -> Vec<Question> {
        self.questions
            .iter()
            .filter(|q| filter.matches(&q.category))
            .cloned()
            .collect()
    }

    /// Terms in scope, narrowed by a case-insensitive substring search
    /// against the term name or its definition. An empty search matches
    /// everything.
    pub fn terms_for(&self, filter: &CategoryFilter, search: &str) -> Vec<&Term> {
        let search = search.to_lowercase();
        self.terms
            .iter()
            .filter(|t| filter.matches(&t.category))
            .filter(|t| {
                search.is_empty()
                    || t.term.to_lowercase().contains(&search)
                    || t.definition.to_lowercase().contains(&search)
            })
            .collect()
    }

    // Category-picker badge counts.

    pub fn question_count(&self, filter: &CategoryFilter) -> usize {
        self.questions
            .iter()
            .filter(|q| filter.matches(&q.category))
            .count()
    }

    pub fn term_count(&self, filter: &CategoryFilter) -> usize {
        self.terms
            .iter()
            .filter(|t| filter.matches(&t.category))
            .count()
    }
}
