//! Relevance assessments and the Mean Reciprocal Rank metric.
//!
//! # Example
//!
//! ```rust
//! use ircodec::evaluate::{Assessments, MeanReciprocalRank};
//!
//! let qrels = "1 0 doc-a 0\n1 0 doc-b 1\n";
//! let assessments = Assessments::from_trec_qrels(qrels).unwrap();
//! let metric = MeanReciprocalRank::new(&assessments);
//!
//! let results = ["doc-a", "doc-b", "doc-c"];
//! assert_eq!(metric.compute_default("1", &results), 0.5);
//! ```

use crate::error::AssessmentError;

/// One judged (query, document) pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assessment {
    /// Query identifier.
    pub query_id: String,
    /// External (primary key) document identifier.
    pub document_id: String,
    /// Relevance grade; 0 is not relevant.
    pub score: i32,
}

/// A set of relevance judgments, searchable by (query, document).
#[derive(Clone, Debug, Default)]
pub struct Assessments {
    // sorted by (query_id, document_id)
    entries: Vec<Assessment>,
}

impl Assessments {
    /// Build from judgments in any order. Later duplicates win.
    pub fn new(mut entries: Vec<Assessment>) -> Self {
        entries.reverse();
        entries.sort_by(|a, b| {
            (a.query_id.as_str(), a.document_id.as_str())
                .cmp(&(b.query_id.as_str(), b.document_id.as_str()))
        });
        entries.dedup_by(|a, b| a.query_id == b.query_id && a.document_id == b.document_id);
        Self { entries }
    }

    /// Parse TREC qrels: `query_id iteration document_id score` per line.
    ///
    /// Blank lines are skipped; the iteration column is ignored.
    ///
    /// # Errors
    ///
    /// [`AssessmentError::MalformedLine`] for a line without exactly four
    /// fields or with a non-integer score.
    pub fn from_trec_qrels(text: &str) -> Result<Self, AssessmentError> {
        let mut entries = Vec::new();

        for (number, line) in text.lines().enumerate() {
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.is_empty() {
                continue;
            }
            if fields.len() != 4 {
                return Err(AssessmentError::MalformedLine {
                    line: number + 1,
                    reason: format!("expected 4 fields, found {}", fields.len()),
                });
            }
            let score = fields[3]
                .parse::<i32>()
                .map_err(|e| AssessmentError::MalformedLine {
                    line: number + 1,
                    reason: format!("bad score {:?}: {}", fields[3], e),
                })?;

            entries.push(Assessment {
                query_id: fields[0].to_string(),
                document_id: fields[2].to_string(),
                score,
            });
        }

        log::debug!("loaded {} relevance assessments", entries.len());
        Ok(Self::new(entries))
    }

    /// Number of judgments.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when there are no judgments.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The judgment for `document_id` on `query_id`, if one exists.
    pub fn find(&self, query_id: &str, document_id: &str) -> Option<&Assessment> {
        self.entries
            .binary_search_by(|entry| {
                (entry.query_id.as_str(), entry.document_id.as_str()).cmp(&(query_id, document_id))
            })
            .ok()
            .map(|at| &self.entries[at])
    }

    /// Relevance grade of `document_id` on `query_id`; unjudged pairs score 0.
    pub fn score(&self, query_id: &str, document_id: &str) -> i32 {
        self.find(query_id, document_id).map_or(0, |entry| entry.score)
    }
}

/// Reciprocal rank of the first relevant result.
///
/// Averaging [`compute`](Self::compute) over a query set gives MRR.
#[derive(Clone, Copy, Debug)]
pub struct MeanReciprocalRank<'a> {
    assessments: &'a Assessments,
}

impl<'a> MeanReciprocalRank<'a> {
    /// Evaluate against `assessments`.
    pub fn new(assessments: &'a Assessments) -> Self {
        Self { assessments }
    }

    /// `1 / rank` of the first relevant document among the top `depth`
    /// results, or 0 if none is relevant. Ranks start at 1.
    pub fn compute<S: AsRef<str>>(&self, query_id: &str, results: &[S], depth: usize) -> f64 {
        results
            .iter()
            .take(depth)
            .position(|document| self.assessments.score(query_id, document.as_ref()) != 0)
            .map_or(0.0, |at| 1.0 / (at + 1) as f64)
    }

    /// [`compute`](Self::compute) over the whole results list.
    pub fn compute_default<S: AsRef<str>>(&self, query_id: &str, results: &[S]) -> f64 {
        self.compute(query_id, results, usize::MAX)
    }

    /// Mean of the per-query reciprocal ranks; 0 for an empty run.
    pub fn mean<Q, S>(&self, run: &[(Q, Vec<S>)], depth: usize) -> f64
    where
        Q: AsRef<str>,
        S: AsRef<str>,
    {
        if run.is_empty() {
            return 0.0;
        }
        let total: f64 = run
            .iter()
            .map(|(query_id, results)| self.compute(query_id.as_ref(), results, depth))
            .sum();
        total / run.len() as f64
    }
}
