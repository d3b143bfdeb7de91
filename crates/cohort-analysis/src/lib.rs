//! Record-level analysis for student test data
//!
//! This crate wires the tabular model from `cohort-table` to the statistical
//! primitives in `cohort-stats` and exposes the analysis operations a host
//! front end calls:
//!
//! # Overview
//!
//! The analysis surface covers four user-facing views over one uploaded
//! dataset:
//!
//! 1. **Chapter listing** ([`aggregate::distinct_groups`]): drives a chapter
//!    selector
//! 2. **Performance summary** ([`summary::performance_summary`]): mean score
//!    per chapter plus a histogram-ready score distribution
//! 3. **Skills summary** ([`summary::skills_summary`]): frequency counts over
//!    the categorical skill columns
//! 4. **Correlation summary** ([`summary::correlation_summary`]): a Pearson
//!    matrix over the score and the encoded skill columns of one chapter
//!
//! All operations are pure: a record set goes in, an immutable result comes
//! out, and nothing is cached between calls. The one mutable resource, the
//! currently-loaded record set, lives in [`session::Session`]; a host decides
//! when to call which operation (on a button click, on a selection change),
//! which is presentation policy outside this crate.
//!
//! # Encoding scope
//!
//! Categorical codes are assigned over exactly the row subset being analyzed
//! ([`encoder::encode_column`]), so the correlation view encodes *after*
//! chapter filtering. The same skill text can therefore receive different
//! integer codes for different chapters; this affects coefficient magnitude
//! but not the rank order within one matrix.
//!
//! # Examples
//!
//! ```
//! use cohort_analysis::session::Session;
//!
//! let csv = "\
//! Test Chapter,Test Score,Strength,Opportunity,Challenge
//! Ch1,80,Teamwork,Focus,Time
//! Ch1,60,Listening,Focus,Patience
//! Ch2,90,Teamwork,Planning,Time
//! ";
//!
//! let mut session = Session::default();
//! session.load_csv(csv.as_bytes())?;
//!
//! assert_eq!(session.chapters()?, vec!["Ch1".to_string(), "Ch2".to_string()]);
//!
//! let performance = session.performance(None)?;
//! assert_eq!(performance.mean_by_group["Ch1"], 70.0);
//!
//! let matrix = session.correlation("Ch1")?;
//! assert_eq!(matrix.size(), 4);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod aggregate;
pub mod encoder;
pub mod error;
pub mod session;
pub mod summary;

pub use error::AnalysisError;
pub use session::Session;
pub use summary::{PerformanceSummary, SkillCount, SkillsSummary};
