use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    Personal,
    Technical,
}

/// Prompt shown to the candidate together with the reference answer used for accuracy scoring.
#[derive(Debug, Clone, Serialize)]
pub struct InterviewQuestion {
    pub prompt: &'static str,
    pub kind: QuestionKind,
    pub ideal_answer: &'static str,
    pub tip: &'static str,
}

#[derive(Debug)]
pub struct QuestionBank {
    questions: Vec<InterviewQuestion>,
}

impl QuestionBank {
    pub fn standard() -> Self {
        Self {
            questions: standard_questions(),
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&InterviewQuestion> {
        self.questions.get(index)
    }

    pub fn questions(&self) -> &[InterviewQuestion] {
        &self.questions
    }
}

fn standard_questions() -> Vec<InterviewQuestion> {
    vec![
        InterviewQuestion {
            prompt: "Tell me about yourself.",
            kind: QuestionKind::Personal,
            ideal_answer: "I'm a computer science postgraduate with a strong interest in AI and software development. I've worked on several projects involving Python, machine learning, and data analysis, which helped me improve both my technical and problem-solving skills. I enjoy learning new technologies and applying them to create practical solutions. Outside of academics, I like collaborating on team projects and continuously developing my professional skills.",
            tip: "Focus on your background, skills, and personality",
        },
        InterviewQuestion {
            prompt: "What are your strengths and weaknesses?",
            kind: QuestionKind::Personal,
            ideal_answer: "One of my key strengths is that I'm very detail-oriented and persistent; I make sure my work is accurate and well-tested. I also enjoy solving complex problems and learning new tools quickly. As for weaknesses, I used to spend too much time perfecting small details, which sometimes slowed me down. But I've been improving by prioritizing tasks better and focusing on overall impact.",
            tip: "Be honest and show self-awareness",
        },
        InterviewQuestion {
            prompt: "Where do you see yourself in the next 5 years?",
            kind: QuestionKind::Personal,
            ideal_answer: "In the next five years, I see myself growing into a more responsible and skilled professional, ideally in a role where I can contribute to meaningful projects involving AI and software development. I'd also like to take on leadership responsibilities and guide new team members as I gain experience.",
            tip: "Show ambition aligned with career growth",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_bank_has_three_personal_questions() {
        let bank = QuestionBank::standard();
        assert_eq!(bank.len(), 3);
        assert!(bank
            .questions()
            .iter()
            .all(|question| question.kind == QuestionKind::Personal));
        assert_eq!(
            bank.get(0).map(|question| question.prompt),
            Some("Tell me about yourself.")
        );
        assert!(bank.get(3).is_none());
    }
}
