use std::fs;

use tempfile::TempDir;

use question_bank::{
    config::Config,
    models::domain::{Category, Difficulty, Question, SubQuestion},
    repositories::{JsonQuestionRepository, QuestionRepository},
};

fn test_config(dir: &TempDir) -> Config {
    Config {
        data_dir: dir.path().to_path_buf(),
        questions_file: "questions.json".to_string(),
    }
}

fn make_category(name: &str) -> Category {
    Category::new(name, "test category", "#3b82f6")
}

fn make_question(title: &str, category: Option<Category>, difficulty: Difficulty) -> Question {
    Question::new(
        title,
        &format!("{} body text", title),
        "answer",
        category,
        difficulty,
    )
}

fn make_reading_question(title: &str, category: Option<Category>) -> Question {
    let mut question = Question::new_reading(title, "A short passage body.", category);
    if let Some(reading) = question.reading.as_mut() {
        let mut first = SubQuestion::new("What does the passage say first?", "The first thing");
        first.points = 2;
        reading.add_sub_question(first);
        let mut second = SubQuestion::new("And second?", "The second thing");
        second.points = 3;
        reading.add_sub_question(second);
    }
    question
}

#[test]
fn save_then_reload_round_trips_both_record_shapes() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = test_config(&dir);

    let plain = make_question("Plain", Some(make_category("Grammar")), Difficulty::Easy);
    let reading = make_reading_question("Passage", Some(make_category("Reading")));

    let mut repository = JsonQuestionRepository::open(&config);
    repository.save(plain.clone()).expect("save plain");
    repository.save(reading.clone()).expect("save reading");

    let found = repository
        .find_by_id(&reading.id)
        .expect("lookup should work")
        .expect("reading question should be present");
    assert_eq!(found, reading);

    // Simulated restart: a fresh repository over the same snapshot.
    drop(repository);
    let reopened = JsonQuestionRepository::open(&config);

    let reloaded_plain = reopened
        .find_by_id(&plain.id)
        .expect("lookup should work")
        .expect("plain question should survive restart");
    assert_eq!(reloaded_plain, plain);

    let reloaded_reading = reopened
        .find_by_id(&reading.id)
        .expect("lookup should work")
        .expect("reading question should survive restart");
    assert_eq!(reloaded_reading, reading);

    let payload = reloaded_reading.reading.expect("payload should survive");
    assert_eq!(payload.total_points(), 5);
    let numbers: Vec<u32> = payload
        .sub_questions()
        .iter()
        .map(|sq| sq.question_number)
        .collect();
    assert_eq!(numbers, vec![1, 2]);
}

#[test]
fn save_existing_id_replaces_in_place_preserving_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut repository = JsonQuestionRepository::open(&test_config(&dir));

    let first = make_question("First", None, Difficulty::Easy);
    let second = make_question("Second", None, Difficulty::Medium);
    let third = make_question("Third", None, Difficulty::Hard);
    repository.save(first.clone()).expect("save first");
    repository.save(second.clone()).expect("save second");
    repository.save(third.clone()).expect("save third");

    let mut edited = second.clone();
    edited.title = Some("Second, revised".to_string());
    repository.save(edited).expect("save edited");

    let all = repository.find_all().expect("find_all should work");
    assert_eq!(all.len(), 3);
    let ids: Vec<&str> = all.iter().map(|q| q.id.as_str()).collect();
    assert_eq!(ids, vec![&first.id, &second.id, &third.id]);
    assert_eq!(all[1].title.as_deref(), Some("Second, revised"));
}

#[test]
fn missing_id_is_a_result_value_not_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut repository = JsonQuestionRepository::open(&test_config(&dir));

    let found = repository
        .find_by_id("no-such-id")
        .expect("lookup should not fail");
    assert!(found.is_none());

    assert!(!repository
        .exists_by_id("no-such-id")
        .expect("exists should not fail"));

    // Deleting an absent id is a no-op, not an error.
    repository
        .delete_by_id("no-such-id")
        .expect("delete should not fail");
}

#[test]
fn delete_removes_record_and_rewrites_snapshot() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = test_config(&dir);
    let mut repository = JsonQuestionRepository::open(&config);

    let keep = make_question("Keep", None, Difficulty::Easy);
    let remove = make_question("Remove", None, Difficulty::Easy);
    repository.save(keep.clone()).expect("save keep");
    repository.save(remove.clone()).expect("save remove");

    repository.delete_by_id(&remove.id).expect("delete should work");
    assert!(!repository.exists_by_id(&remove.id).expect("exists"));

    let reopened = JsonQuestionRepository::open(&config);
    let all = reopened.find_all().expect("find_all after reload");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, keep.id);
}

#[test]
fn title_and_content_search_are_case_insensitive_substring() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut repository = JsonQuestionRepository::open(&test_config(&dir));

    let tenses = make_question("Past Tenses", None, Difficulty::Easy);
    let articles = make_question("Articles", None, Difficulty::Easy);
    // A reading question has no content of its own and must never match a
    // content search.
    let passage = make_reading_question("Tense Passage", None);
    repository.save(tenses.clone()).expect("save tenses");
    repository.save(articles).expect("save articles");
    repository.save(passage.clone()).expect("save passage");

    let by_title = repository
        .search_by_title("tense")
        .expect("title search should work");
    let titles: Vec<&str> = by_title.iter().filter_map(|q| q.title.as_deref()).collect();
    assert_eq!(titles, vec!["Past Tenses", "Tense Passage"]);

    let by_content = repository
        .search_by_content("TENSES BODY")
        .expect("content search should work");
    assert_eq!(by_content.len(), 1);
    assert_eq!(by_content[0].id, tenses.id);
}

#[test]
fn tag_search_is_loose_case_insensitive_containment() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut repository = JsonQuestionRepository::open(&test_config(&dir));

    let mut tagged = make_question("Tagged", None, Difficulty::Easy);
    tagged.tags = Some(vec!["Java".to_string(), "advanced".to_string()]);
    let mut other = make_question("Other", None, Difficulty::Easy);
    other.tags = Some(vec!["python".to_string()]);
    let untagged = make_question("Untagged", None, Difficulty::Easy);
    repository.save(tagged.clone()).expect("save tagged");
    repository.save(other).expect("save other");
    repository.save(untagged).expect("save untagged");

    let matches = repository
        .search_by_tags(&["java".to_string()])
        .expect("tag search should work");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].id, tagged.id);

    // Substring containment, not equality.
    let partial = repository
        .search_by_tags(&["adv".to_string()])
        .expect("tag search should work");
    assert_eq!(partial.len(), 1);
    assert_eq!(partial[0].id, tagged.id);

    let none = repository
        .search_by_tags(&["geography".to_string()])
        .expect("tag search should work");
    assert!(none.is_empty());
}

#[test]
fn category_filters_match_by_id_not_name_or_instance() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut repository = JsonQuestionRepository::open(&test_config(&dir));

    let reading = make_category("Reading");
    let grammar = make_category("Grammar");

    let easy = make_question("Easy reading", Some(reading.clone()), Difficulty::Easy);
    let hard = make_question("Hard reading", Some(reading.clone()), Difficulty::Hard);
    let other = make_question("Grammar drill", Some(grammar.clone()), Difficulty::Easy);
    let uncategorized = make_question("Loose", None, Difficulty::Easy);
    repository.save(easy.clone()).expect("save easy");
    repository.save(hard.clone()).expect("save hard");
    repository.save(other).expect("save other");
    repository.save(uncategorized).expect("save uncategorized");

    // Same id, different instance and name: still matches.
    let mut renamed = reading.clone();
    renamed.name = "Totally different".to_string();
    let by_category = repository
        .find_by_category(&renamed)
        .expect("category filter should work");
    assert_eq!(by_category.len(), 2);

    let by_both = repository
        .find_by_category_and_difficulty(&reading, Difficulty::Hard)
        .expect("combined filter should work");
    assert_eq!(by_both.len(), 1);
    assert_eq!(by_both[0].id, hard.id);

    let by_name = repository
        .find_by_category_name("rEaDiNg")
        .expect("name filter should work");
    assert_eq!(by_name.len(), 2);

    assert_eq!(
        repository
            .count_by_category(&reading)
            .expect("count should work"),
        2
    );
    assert_eq!(
        repository
            .count_by_difficulty(Difficulty::Easy)
            .expect("count should work"),
        3
    );
}

#[test]
fn active_and_inactive_partition_the_collection() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut repository = JsonQuestionRepository::open(&test_config(&dir));

    let active = make_question("Active", None, Difficulty::Easy);
    let mut retired = make_question("Retired", None, Difficulty::Easy);
    retired.is_active = false;
    repository.save(active.clone()).expect("save active");
    repository.save(retired.clone()).expect("save retired");

    let actives = repository
        .find_active_questions()
        .expect("active filter should work");
    let inactives = repository
        .find_inactive_questions()
        .expect("inactive filter should work");
    let all = repository.find_all().expect("find_all should work");

    assert_eq!(actives.len(), 1);
    assert_eq!(actives[0].id, active.id);
    assert_eq!(inactives.len(), 1);
    assert_eq!(inactives[0].id, retired.id);

    let mut partition_ids: Vec<String> = actives
        .iter()
        .chain(inactives.iter())
        .map(|q| q.id.clone())
        .collect();
    let mut all_ids: Vec<String> = all.iter().map(|q| q.id.clone()).collect();
    partition_ids.sort();
    all_ids.sort();
    assert_eq!(partition_ids, all_ids);
}

#[test]
fn find_all_returns_a_defensive_copy() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut repository = JsonQuestionRepository::open(&test_config(&dir));
    repository
        .save(make_question("Kept", None, Difficulty::Easy))
        .expect("save");

    let mut copy = repository.find_all().expect("find_all should work");
    copy.clear();

    assert_eq!(repository.find_all().expect("find_all again").len(), 1);
}

#[test]
fn corrupt_snapshot_degrades_to_an_empty_bank() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = test_config(&dir);
    fs::write(config.questions_path(), "this is not json").expect("write corrupt snapshot");

    let mut repository = JsonQuestionRepository::open(&config);
    assert!(repository.find_all().expect("find_all").is_empty());

    // The bank stays usable: the next save rewrites a valid snapshot.
    let question = make_question("Fresh start", None, Difficulty::Easy);
    repository.save(question.clone()).expect("save should work");

    let reopened = JsonQuestionRepository::open(&config);
    let all = reopened.find_all().expect("find_all after recovery");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, question.id);
}
