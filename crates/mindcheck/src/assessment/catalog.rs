use std::collections::HashMap;
use std::sync::OnceLock;

use super::domain::{AnswerOption, Question, QuestionId};

/// Raw definition used to build the built-in question bank.
struct QuestionDefinition {
    id: QuestionId,
    text: &'static str,
    options: &'static [(&'static str, u32, u32)],
}

const STANDARD_QUESTIONS: &[QuestionDefinition] = &[
    QuestionDefinition {
        id: 1,
        text: "How often have you felt overwhelmed by your responsibilities in the past two weeks?",
        options: &[
            ("Not at all", 0, 0),
            ("Several days", 1, 1),
            ("More than half the days", 2, 2),
            ("Nearly every day", 3, 3),
        ],
    },
    QuestionDefinition {
        id: 2,
        text: "How would you rate your energy levels throughout the day?",
        options: &[
            ("Consistently high", 0, 0),
            ("Moderate with some fluctuation", 1, 1),
            ("Low with occasional bursts", 2, 1),
            ("Constantly depleted", 3, 2),
        ],
    },
    QuestionDefinition {
        id: 3,
        text: "How often do you find yourself worrying about future events?",
        options: &[
            ("Rarely or never", 0, 0),
            ("Occasionally", 0, 1),
            ("Frequently", 1, 2),
            ("Almost constantly", 2, 3),
        ],
    },
    QuestionDefinition {
        id: 4,
        text: "How would you describe your sleep pattern recently?",
        options: &[
            ("Regular and restful", 0, 0),
            ("Occasional difficulty", 1, 1),
            ("Frequently disrupted", 2, 2),
            ("Severe insomnia or excessive sleeping", 3, 2),
        ],
    },
    QuestionDefinition {
        id: 5,
        text: "How often do you experience physical symptoms of stress (headaches, muscle tension, etc.)?",
        options: &[
            ("Rarely or never", 0, 0),
            ("Occasionally", 0, 1),
            ("Weekly", 1, 2),
            ("Daily", 2, 3),
        ],
    },
    QuestionDefinition {
        id: 6,
        text: "How would you rate your ability to concentrate on tasks?",
        options: &[
            ("Excellent", 0, 0),
            ("Good with minor distractions", 1, 1),
            ("Difficult with frequent distractions", 2, 2),
            ("Very poor concentration", 3, 2),
        ],
    },
    QuestionDefinition {
        id: 7,
        text: "How often do you feel a sense of hopelessness about the future?",
        options: &[
            ("Never", 0, 0),
            ("Occasionally", 1, 1),
            ("Frequently", 2, 1),
            ("Most of the time", 3, 2),
        ],
    },
    QuestionDefinition {
        id: 8,
        text: "How would you describe your interest in activities you usually enjoy?",
        options: &[
            ("Strong interest and enjoyment", 0, 0),
            ("Somewhat interested", 1, 0),
            ("Limited interest", 2, 1),
            ("No interest or enjoyment", 3, 1),
        ],
    },
    QuestionDefinition {
        id: 9,
        text: "How often do you experience racing thoughts or difficulty controlling worry?",
        options: &[
            ("Rarely or never", 0, 0),
            ("Occasionally", 0, 1),
            ("Frequently", 1, 2),
            ("Almost constantly", 1, 3),
        ],
    },
    QuestionDefinition {
        id: 10,
        text: "How would you rate your overall mood on most days?",
        options: &[
            ("Generally positive", 0, 0),
            ("Neutral", 1, 1),
            ("Mildly negative", 2, 1),
            ("Predominantly negative", 3, 2),
        ],
    },
    QuestionDefinition {
        id: 11,
        text: "How often do you feel irritable or easily annoyed?",
        options: &[
            ("Rarely or never", 0, 0),
            ("Occasionally", 1, 1),
            ("Frequently", 2, 2),
            ("Most of the time", 3, 3),
        ],
    },
];

/// Immutable question bank with O(1) lookup by id.
#[derive(Debug, Clone)]
pub struct Catalog {
    questions: Vec<Question>,
    positions: HashMap<QuestionId, usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("question id {0} appears more than once")]
    DuplicateQuestionId(QuestionId),
    #[error("question {0} has no options")]
    EmptyOptions(QuestionId),
}

impl Catalog {
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        let mut positions = HashMap::with_capacity(questions.len());
        for (position, question) in questions.iter().enumerate() {
            if question.options.is_empty() {
                return Err(CatalogError::EmptyOptions(question.id));
            }
            if positions.insert(question.id, position).is_some() {
                return Err(CatalogError::DuplicateQuestionId(question.id));
            }
        }

        Ok(Self {
            questions,
            positions,
        })
    }

    /// The built-in question bank, built on first use and shared for the life of the process.
    pub fn standard() -> &'static Catalog {
        static STANDARD: OnceLock<Catalog> = OnceLock::new();
        STANDARD.get_or_init(|| {
            let questions = STANDARD_QUESTIONS
                .iter()
                .map(|definition| Question {
                    id: definition.id,
                    text: definition.text.to_string(),
                    options: definition
                        .options
                        .iter()
                        .map(|&(text, depression, anxiety)| {
                            AnswerOption::new(text, depression, anxiety)
                        })
                        .collect(),
                })
                .collect();

            match Catalog::new(questions) {
                Ok(catalog) => catalog,
                Err(err) => unreachable!("built-in question bank is invalid: {err}"),
            }
        })
    }

    pub fn all_questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn find_by_id(&self, id: QuestionId) -> Option<&Question> {
        self.positions
            .get(&id)
            .map(|&position| &self.questions[position])
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
