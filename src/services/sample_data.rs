//! Built-in sample content. Built through the same public construction API as
//! any other caller; nothing here touches aggregate internals.

use crate::models::domain::{Category, Difficulty, Question, ReadingType, SubQuestion};

pub fn sample_questions() -> Vec<Question> {
    vec![
        environment_passage(),
        interview_dialogue(),
        vocabulary_basics(),
    ]
}

fn reading_category() -> Category {
    Category::new("Reading", "Reading comprehension passages", "#3b82f6")
}

fn environment_passage() -> Question {
    let mut question = Question::new_reading(
        "Environmental Protection",
        "Environmental protection has become one of the most pressing issues of our time. \
         Climate change, pollution, and loss of biodiversity are threatening ecosystems \
         worldwide. Individuals can contribute by reducing waste, conserving energy, and \
         supporting sustainable practices, while governments and businesses implement \
         policies and technologies that minimize environmental damage.",
        Some(reading_category()),
    );

    if let Some(reading) = question.reading.as_mut() {
        reading.passage_title = Some("The Importance of Environmental Protection".to_string());
        reading.source = Some("Sample Textbook".to_string());
        reading.reading_type = ReadingType::ShortPassage;

        let mut first = SubQuestion::new(
            "What are the three main environmental threats mentioned in the passage?",
            "Climate change, pollution, and loss of biodiversity",
        );
        first.explanation = Some("The passage names these three threats outright.".to_string());
        first.difficulty = Some(Difficulty::Easy);
        first.points = 2;
        reading.add_sub_question(first);

        let mut second = SubQuestion::new(
            "How can individuals contribute to environmental protection according to the text?",
            "By reducing waste, conserving energy, and supporting sustainable practices",
        );
        second.explanation = Some("Listed as the three individual actions.".to_string());
        second.difficulty = Some(Difficulty::Medium);
        second.points = 3;
        reading.add_sub_question(second);

        let mut third = SubQuestion::new(
            "What role do governments and businesses play?",
            "They implement policies and technologies that minimize environmental damage",
        );
        third.difficulty = Some(Difficulty::Medium);
        third.points = 2;
        reading.add_sub_question(third);
    }

    question
}

fn interview_dialogue() -> Question {
    let mut question = Question::new_reading(
        "Job Interview Dialogue",
        "Sarah: Good morning! Thank you for coming in today. I'm Sarah, the HR manager.\n\
         Mike: Good morning, Sarah. I'm Mike Johnson.\n\
         Sarah: Tell me a bit about your experience in software development.\n\
         Mike: I've been working as a software developer for five years, mostly on web \
         applications. I'm most proficient in Java and Python.\n\
         Sarah: Why are you interested in joining our company?\n\
         Mike: I've been following your projects and I'm excited about the chance to contribute.",
        Some(reading_category()),
    );

    if let Some(reading) = question.reading.as_mut() {
        reading.passage_title = Some("Job Interview Conversation".to_string());
        reading.source = Some("Business English Sample".to_string());
        reading.reading_type = ReadingType::Dialogue;

        let mut first = SubQuestion::new("What is Sarah's role in the company?", "HR manager");
        first.difficulty = Some(Difficulty::Easy);
        reading.add_sub_question(first);

        let mut second = SubQuestion::new(
            "How long has Mike been working as a software developer?",
            "Five years",
        );
        second.difficulty = Some(Difficulty::Easy);
        reading.add_sub_question(second);

        let mut third = SubQuestion::new(
            "Which languages does Mike name as his strongest?",
            "Java and Python",
        );
        third.difficulty = Some(Difficulty::Medium);
        third.points = 2;
        reading.add_sub_question(third);
    }

    question
}

fn vocabulary_basics() -> Question {
    let mut question = Question::new(
        "Synonym of 'rapid'",
        "Choose the word closest in meaning to 'rapid'.",
        "quick",
        Some(Category::new("Vocabulary", "Word knowledge", "#10b981")),
        Difficulty::Easy,
    );
    question.explanation = Some("'Rapid' and 'quick' both describe high speed.".to_string());
    question.tags = Some(vec!["vocabulary".to_string(), "synonyms".to_string()]);
    question
}
