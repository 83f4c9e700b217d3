use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct Config {
    pub data_dir: PathBuf,
    pub questions_file: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            data_dir: env::var("QUESTION_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),
            questions_file: env::var("QUESTIONS_FILE")
                .unwrap_or_else(|_| "questions.json".to_string()),
        }
    }

    /// Full path of the snapshot file holding the question collection.
    pub fn questions_path(&self) -> PathBuf {
        self.data_dir.join(&self.questions_file)
    }

    #[cfg(test)]
    pub fn test_config(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            questions_file: "questions.json".to_string(),
        }
    }
}
