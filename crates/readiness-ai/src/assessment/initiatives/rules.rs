use super::super::domain::{AnswerSheet, Pillar};

/// Rating at which a governance control counts as adequately covered.
pub(crate) const ADEQUACY_BAR: u8 = 3;

/// Answer-derived quantity an impact or hours term is built from.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Signal {
    /// The rating itself: stronger agreement means a bigger opportunity.
    Rating(&'static str),
    /// Distance below the adequacy bar: weaker coverage means a bigger gap.
    Shortfall(&'static str),
}

impl Signal {
    pub(crate) fn strength(&self, answers: &AnswerSheet) -> u16 {
        match self {
            Signal::Rating(id) => answers.rating(id) as u16,
            Signal::Shortfall(id) => (ADEQUACY_BAR - answers.rating(id).min(ADEQUACY_BAR)) as u16,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) enum Trigger {
    AnyAtLeast(Vec<(&'static str, u8)>),
    AllAtLeast(Vec<(&'static str, u8)>),
    AnyAtMost(Vec<(&'static str, u8)>),
}

impl Trigger {
    pub(crate) fn fires(&self, answers: &AnswerSheet) -> bool {
        match self {
            Trigger::AnyAtLeast(checks) => checks
                .iter()
                .any(|(id, bar)| answers.rating(id) >= *bar),
            Trigger::AllAtLeast(checks) => checks
                .iter()
                .all(|(id, bar)| answers.rating(id) >= *bar),
            Trigger::AnyAtMost(checks) => checks
                .iter()
                .any(|(id, cap)| answers.rating(id) <= *cap),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct ImpactTerm {
    pub(crate) signal: Signal,
    pub(crate) weight: u16,
}

/// One inference rule: when `trigger` fires, the weighted `impact` terms set
/// the ranking score and `hours_rate` times the summed `hours_basis` signals
/// estimates hours saved per month.
#[derive(Debug, Clone)]
pub(crate) struct InitiativeRule {
    pub(crate) id: &'static str,
    pub(crate) title: &'static str,
    pub(crate) description: &'static str,
    pub(crate) pillar: Pillar,
    pub(crate) trigger: Trigger,
    pub(crate) impact: Vec<ImpactTerm>,
    pub(crate) hours_rate: u16,
    pub(crate) hours_basis: Vec<Signal>,
}

impl InitiativeRule {
    pub(crate) fn raw_impact(&self, answers: &AnswerSheet) -> u16 {
        self.impact
            .iter()
            .map(|term| term.signal.strength(answers) * term.weight)
            .sum()
    }

    pub(crate) fn hours_saved(&self, answers: &AnswerSheet) -> u16 {
        let basis: u16 = self
            .hours_basis
            .iter()
            .map(|signal| signal.strength(answers))
            .sum();
        self.hours_rate * basis
    }
}

pub(crate) fn standard_rules() -> Vec<InitiativeRule> {
    vec![
        InitiativeRule {
            id: "triage",
            title: "Inbox & Ticket Triage Copilot",
            description: "Auto-classify, route, and draft first responses for common requests; surface KB answers inline.",
            pillar: Pillar::Insight360,
            trigger: Trigger::AnyAtLeast(vec![("ticket_volume", 2), ("repetitive_tasks", 3)]),
            impact: vec![
                ImpactTerm { signal: Signal::Rating("ticket_volume"), weight: 18 },
                ImpactTerm { signal: Signal::Rating("kb_quality"), weight: 8 },
            ],
            hours_rate: 8,
            hours_basis: vec![Signal::Rating("ticket_volume"), Signal::Rating("kb_quality")],
        },
        InitiativeRule {
            id: "doc-intake",
            title: "Document Intake & Data Extraction",
            description: "Parse invoices/forms/PDFs to structured data with validation and ERP/PSA handoff.",
            pillar: Pillar::Insight360,
            trigger: Trigger::AnyAtLeast(vec![("document_intake", 2), ("data_quality", 2)]),
            impact: vec![
                ImpactTerm { signal: Signal::Rating("document_intake"), weight: 20 },
                ImpactTerm { signal: Signal::Rating("data_quality"), weight: 10 },
            ],
            hours_rate: 6,
            hours_basis: vec![Signal::Rating("document_intake"), Signal::Rating("data_quality")],
        },
        InitiativeRule {
            id: "approvals",
            title: "AI-Assisted Approvals & Exceptions",
            description: "Policy-aware summaries and risk flags speed up PO/access approvals with audit trails.",
            pillar: Pillar::Insight360,
            trigger: Trigger::AllAtLeast(vec![("approvals", 2), ("exec_sponsor", 2)]),
            impact: vec![
                ImpactTerm { signal: Signal::Rating("approvals"), weight: 18 },
                ImpactTerm { signal: Signal::Rating("security_basics"), weight: 6 },
            ],
            hours_rate: 5,
            hours_basis: vec![Signal::Rating("approvals"), Signal::Rating("security_basics")],
        },
        InitiativeRule {
            id: "kb-copilot",
            title: "Knowledge Base Q&A Copilot",
            description: "Ask natural-language questions across SOPs and policies; cite sources & links.",
            pillar: Pillar::Insight360,
            trigger: Trigger::AllAtLeast(vec![("kb_quality", 1), ("ticket_volume", 2)]),
            impact: vec![
                ImpactTerm { signal: Signal::Rating("kb_quality"), weight: 12 },
                ImpactTerm { signal: Signal::Rating("ticket_volume"), weight: 14 },
            ],
            hours_rate: 5,
            hours_basis: vec![Signal::Rating("kb_quality"), Signal::Rating("ticket_volume")],
        },
        InitiativeRule {
            id: "predict",
            title: "Predictive KPIs & Anomaly Alerts",
            description: "Blend PSA/ERP/CRM to forecast demand, detect churn/drift, and flag bottlenecks.",
            pillar: Pillar::PredictIQ,
            trigger: Trigger::AllAtLeast(vec![("data_sources", 2), ("data_quality", 2)]),
            impact: vec![
                ImpactTerm { signal: Signal::Rating("data_sources"), weight: 12 },
                ImpactTerm { signal: Signal::Rating("data_quality"), weight: 16 },
            ],
            hours_rate: 4,
            hours_basis: vec![Signal::Rating("data_sources"), Signal::Rating("data_quality")],
        },
        InitiativeRule {
            id: "policy",
            title: "AI Usage Policy & Guardrails",
            description: "Define safe prompts/data handling, enable enterprise controls, and monitor usage.",
            pillar: Pillar::VCiso,
            trigger: Trigger::AnyAtMost(vec![("security_basics", 2), ("data_handling", 2)]),
            impact: vec![
                ImpactTerm { signal: Signal::Shortfall("security_basics"), weight: 25 },
                ImpactTerm { signal: Signal::Shortfall("data_handling"), weight: 20 },
            ],
            hours_rate: 3,
            hours_basis: vec![Signal::Shortfall("data_handling")],
        },
    ]
}
