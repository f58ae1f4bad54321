//! Verification engine: runs every enabled detector over a document,
//! aggregates findings, applies the enforcement policy, and hands the
//! report to the session for auditing.

use std::path::PathBuf;

use veritas_core::config::{PolicyRule, VerificationPolicy, ViolationAction};
use veritas_core::models::{ContentKind, Document, Verdict, VerificationReport, Violation};

use veritas_observability::tracing_setup::events;

use crate::detectors::{self, Detector};
use crate::rules::RuleSet;
use crate::session::VerificationSession;

/// Findings of one detector, tagged with the rule that produced them.
#[derive(Debug, Clone)]
pub struct RuleFindings {
    pub rule: PolicyRule,
    pub findings: Vec<Violation>,
}

impl RuleFindings {
    pub fn has_errors(&self) -> bool {
        self.findings.iter().any(Violation::is_error)
    }
}

/// Result of verifying one document through a session.
#[derive(Debug, Clone)]
pub struct VerificationOutcome {
    pub report: VerificationReport,
    pub verdict: Verdict,
    /// Where the audit record landed, when the session has a sink and the
    /// write succeeded.
    pub audit_path: Option<PathBuf>,
}

/// Policy-driven orchestrator over the detector set.
///
/// Holds no per-document state: every call starts from empty finding lists.
pub struct VerificationEngine {
    policy: VerificationPolicy,
    rules: RuleSet,
    detectors: Vec<Box<dyn Detector>>,
}

impl VerificationEngine {
    /// Engine with the built-in rule table.
    pub fn new(policy: VerificationPolicy) -> Self {
        Self::with_rules(policy, RuleSet::builtin())
    }

    pub fn with_rules(policy: VerificationPolicy, rules: RuleSet) -> Self {
        Self {
            policy,
            rules,
            detectors: detectors::all(),
        }
    }

    pub fn policy(&self) -> &VerificationPolicy {
        &self.policy
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Run every enabled detector. Detectors are independent; order only
    /// affects the order of findings in the report.
    pub fn scan(&self, document: &Document) -> Vec<RuleFindings> {
        self.detectors
            .iter()
            .filter(|d| self.policy.is_enabled(d.rule()))
            .map(|d| RuleFindings {
                rule: d.rule(),
                findings: d.detect(document, &self.rules),
            })
            .collect()
    }

    /// Build a report without auditing it.
    pub fn verify(&self, session_id: &str, document: &Document) -> (VerificationReport, Verdict) {
        let scanned = self.scan(document);
        let verdict = self.verdict(&scanned);

        let mut violations = Vec::new();
        let mut warnings = Vec::new();
        for finding in scanned.into_iter().flat_map(|r| r.findings) {
            if finding.is_error() {
                violations.push(finding);
            } else {
                warnings.push(finding);
            }
        }

        let report = VerificationReport::new(
            session_id,
            document.filename().map(str::to_string),
            violations,
            warnings,
            document.len(),
        );
        (report, verdict)
    }

    /// Verify one document within `session` and record one audit entry.
    pub fn verify_document(
        &self,
        session: &mut VerificationSession,
        document: &Document,
    ) -> VerificationOutcome {
        let (report, verdict) = self.verify(session.id(), document);

        events::document_verified(
            session.id(),
            document.filename(),
            report.violations().len(),
            report.warnings().len(),
            verdict.as_str(),
        );

        let audit_path = session.record(&report);
        VerificationOutcome {
            report,
            verdict,
            audit_path,
        }
    }

    /// Verify raw content of the given kind within `session`.
    pub fn verify_content(
        &self,
        session: &mut VerificationSession,
        content: &str,
        kind: ContentKind,
    ) -> VerificationOutcome {
        self.verify_document(session, &Document::new(content, kind))
    }

    /// Decide the caller-facing verdict.
    ///
    /// Any violation fails the report. It blocks when the missing-citation
    /// rule is set to block, or when a rule that produced a violation is.
    pub fn verdict(&self, scanned: &[RuleFindings]) -> Verdict {
        let violated: Vec<PolicyRule> = scanned
            .iter()
            .filter(|r| r.has_errors())
            .map(|r| r.rule)
            .collect();

        if violated.is_empty() {
            return Verdict::Pass;
        }

        let blocks = |rule: PolicyRule| self.policy.action(rule) == ViolationAction::Block;
        if blocks(PolicyRule::PmidCitations) || violated.iter().any(|r| blocks(*r)) {
            Verdict::Block
        } else {
            Verdict::Warn
        }
    }
}

impl Default for VerificationEngine {
    fn default() -> Self {
        Self::new(VerificationPolicy::default())
    }
}
