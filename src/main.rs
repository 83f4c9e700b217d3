use question_bank::config::Config;
use question_bank::repositories::{JsonQuestionRepository, QuestionRepository};
use question_bank::services::sample_data;

fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let mut repository = JsonQuestionRepository::open(&config);

    let mut questions = repository.find_all().unwrap_or_default();
    if questions.is_empty() {
        log::info!("question bank is empty, seeding sample questions");
        for question in sample_data::sample_questions() {
            if let Err(err) = repository.save(question) {
                log::warn!("could not seed sample question: {}", err);
            }
        }
        questions = repository.find_all().unwrap_or_default();
    }

    let active = repository
        .find_active_questions()
        .map(|qs| qs.len())
        .unwrap_or(0);

    println!("question bank at {}", config.questions_path().display());
    println!("{} questions ({} active)", questions.len(), active);
    for question in &questions {
        let title = question.title.as_deref().unwrap_or("(untitled)");
        match &question.reading {
            Some(reading) => println!(
                "  [{}] {} ({} sub-questions, {} points)",
                question.difficulty,
                title,
                reading.sub_question_count(),
                reading.total_points()
            ),
            None => println!("  [{}] {}", question.difficulty, title),
        }
    }
}
