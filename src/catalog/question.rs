use anyhow::*;
use serde::Deserialize;

/// Every question offers exactly this many answer options.
pub const OPTION_COUNT: usize = 4;

/// A question row as it appears in the data file, one column per option.
#[derive(Debug, Deserialize, Eq, PartialEq)]
pub struct RawQuestion {
    pub id: String,
    pub question: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    pub correct_answer: usize,
    pub category: String,
    pub explanation: Option<String>,
}

/// A multiple-choice question. Option order is meaningful: `correct_answer`
/// indexes into `options`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Question {
    pub id: String,
    pub question: String,
    pub options: [String; OPTION_COUNT],
    pub correct_answer: usize,
    pub category: String,
    pub explanation: Option<String>,
}

impl Question {
    pub fn try_from_raw(raw: RawQuestion) -> Result<Question> {
        if raw.correct_answer >= OPTION_COUNT {
            return Err(anyhow!(
                "question {} has answer index {} out of range",
                raw.id,
                raw.correct_answer
            ));
        }
        Ok(Question {
            id: raw.id,
            question: raw.question,
            options: [raw.option_a, raw.option_b, raw.option_c, raw.option_d],
            correct_answer: raw.correct_answer,
            category: raw.category,
            explanation: raw.explanation,
        })
    }

    pub fn is_correct(&self, option_index: usize) -> bool {
        option_index == self.correct_answer
    }
}
