//! Fraud Review Common Library
//!
//! Web(WASM)ダッシュボードと共有される型・状態マシン・表示ポリシー

pub mod error;
pub mod history;
pub mod render;
pub mod submission;
pub mod types;

pub use error::{Result, ServiceError};
pub use history::HistoryLog;
pub use submission::{Resolution, SubmissionFlow, SubmissionSeq, SubmissionState};
pub use types::{AnalysisResult, HistoryEntry, Verdict};
