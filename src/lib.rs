//! Engine for a medical terminology learning app: a read-only catalog of
//! categorized terms and multiple-choice questions, a quiz session state
//! machine with timed auto-advance, and an append-only local score log.
//!
//! The presentation layer owns a single [`quiz::QuizSession`], reads its
//! current [`quiz::Phase`] to render, and forwards user intents
//! (`start`, `select_option`, `submit`, `reset`) into it. Wall-clock time
//! is fed in through [`quiz::QuizSession::tick`].

pub mod catalog;
pub mod output;
pub mod quiz;
pub mod score;
