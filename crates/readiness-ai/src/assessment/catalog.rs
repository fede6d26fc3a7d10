use serde::Serialize;

use super::domain::Category;

/// One survey prompt. `weight` sets how much the answer moves its category
/// score relative to the other prompts in the same category.
#[derive(Debug, Clone)]
pub struct Question {
    pub id: &'static str,
    pub text: &'static str,
    pub helper: Option<&'static str>,
    pub category: Category,
    pub weight: f32,
}

impl Question {
    pub fn to_view(&self) -> QuestionView {
        QuestionView {
            id: self.id,
            text: self.text,
            helper: self.helper,
            category: self.category,
            category_label: self.category.label(),
            weight: self.weight,
        }
    }
}

/// Serializable catalog entry with the category label resolved for clients.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub id: &'static str,
    pub text: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub helper: Option<&'static str>,
    pub category: Category,
    pub category_label: &'static str,
    pub weight: f32,
}

/// The fixed survey shipped with the readiness finder.
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    pub fn standard() -> Self {
        Self {
            questions: standard_questions(),
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn questions_for(&self, category: Category) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|question| question.category == category)
            .collect()
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }
}

fn standard_questions() -> Vec<Question> {
    vec![
        Question {
            id: "repetitive_tasks",
            text: "Teams spend time on repetitive digital tasks (copy/paste, renaming files, routing emails).",
            helper: Some("Think back-office, helpdesk triage, report formatting, content prep."),
            category: Category::Automation,
            weight: 1.2,
        },
        Question {
            id: "ticket_volume",
            text: "We handle many inbound tickets/emails/chats with recurring themes/questions.",
            helper: None,
            category: Category::Automation,
            weight: 1.1,
        },
        Question {
            id: "document_intake",
            text: "We manually process documents (invoices, PDFs, forms) and re-key data.",
            helper: None,
            category: Category::Automation,
            weight: 1.25,
        },
        Question {
            id: "approvals",
            text: "Approvals (POs, access, exceptions) are manual, slow, or inconsistent.",
            helper: None,
            category: Category::Automation,
            weight: 0.9,
        },
        Question {
            id: "data_sources",
            text: "We know where our key data lives and can access it (PSA, ERP, CRM, file shares).",
            helper: None,
            category: Category::Data,
            weight: 1.0,
        },
        Question {
            id: "kb_quality",
            text: "We have a usable knowledge base / SOPs (even if imperfect).",
            helper: None,
            category: Category::Data,
            weight: 0.9,
        },
        Question {
            id: "data_quality",
            text: "Our data is reasonably clean and structured (naming, owners, duplicates).",
            helper: None,
            category: Category::Data,
            weight: 1.2,
        },
        Question {
            id: "exec_sponsor",
            text: "We have an executive sponsor who wants AI-enabled efficiency gains.",
            helper: None,
            category: Category::People,
            weight: 1.1,
        },
        Question {
            id: "champions",
            text: "We have team champions who can test new workflows and give feedback.",
            helper: None,
            category: Category::People,
            weight: 1.0,
        },
        Question {
            id: "training_budget",
            text: "We can allocate a small budget/time for training and change management.",
            helper: None,
            category: Category::People,
            weight: 0.9,
        },
        Question {
            id: "security_basics",
            text: "Security basics are in place (MFA, least privilege, EDR, email security).",
            helper: None,
            category: Category::Risk,
            weight: 1.0,
        },
        Question {
            id: "compliance_req",
            text: "We have compliance requirements (HIPAA/PCI/FINRA) that shape AI usage.",
            helper: Some("Higher score = clearer governance; lower = unknowns or blockers."),
            category: Category::Risk,
            weight: 0.8,
        },
        Question {
            id: "data_handling",
            text: "We can keep sensitive data out of consumer AI tools (policies/controls).",
            helper: None,
            category: Category::Risk,
            weight: 1.1,
        },
    ]
}
