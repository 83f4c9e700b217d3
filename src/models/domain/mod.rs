pub mod category;
pub mod question;
pub mod reading_comprehension;
pub mod statistics;
pub mod sub_question;
pub mod user_progress;

pub use category::Category;
pub use question::{Difficulty, Question};
pub use reading_comprehension::{ReadingComprehension, ReadingType};
pub use statistics::Statistics;
pub use sub_question::SubQuestion;
pub use user_progress::UserProgress;
