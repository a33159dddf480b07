use std::collections::HashMap;

/// Text shown when a clue table has no entry for a revealed tile.
pub const MISSING_CLUE: &str = "(clue unavailable)";

/// Composite tile identifier: category column plus dollar value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileKey {
    pub category: usize,
    pub value: u32,
}

impl TileKey {
    pub fn new(category: usize, value: u32) -> Self {
        Self { category, value }
    }
}

/// A single question/answer pair
#[derive(Debug, Clone)]
pub struct Clue {
    pub question: String,
    pub answer: String,
}

impl Clue {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// The single end-of-game clue with its own category banner
#[derive(Debug, Clone)]
pub struct FinalClue {
    pub category: String,
    pub question: String,
    pub answer: String,
}

/// Static board configuration: categories, dollar values, and the clue
/// table keyed by (category, value). The session works with any
/// well-formed table; nothing in the game logic assumes the sample pack.
#[derive(Debug, Clone)]
pub struct BoardContent {
    pub categories: Vec<String>,
    pub values: Vec<u32>,
    clues: HashMap<TileKey, Clue>,
    pub final_clue: FinalClue,
}

impl BoardContent {
    pub fn new(
        categories: Vec<String>,
        values: Vec<u32>,
        clues: HashMap<TileKey, Clue>,
        final_clue: FinalClue,
    ) -> Self {
        Self {
            categories,
            values,
            clues,
            final_clue,
        }
    }

    /// Every tile key on the board, column-major within each value row
    pub fn all_keys(&self) -> Vec<TileKey> {
        let mut keys = Vec::with_capacity(self.categories.len() * self.values.len());
        for &value in &self.values {
            for category in 0..self.categories.len() {
                keys.push(TileKey::new(category, value));
            }
        }
        keys
    }

    pub fn clue(&self, key: TileKey) -> Option<&Clue> {
        self.clues.get(&key)
    }

    /// Question text for a tile, falling back to a placeholder
    pub fn question(&self, key: TileKey) -> &str {
        self.clues
            .get(&key)
            .map(|c| c.question.as_str())
            .unwrap_or(MISSING_CLUE)
    }

    /// Answer text for a tile, falling back to a placeholder
    pub fn answer(&self, key: TileKey) -> &str {
        self.clues
            .get(&key)
            .map(|c| c.answer.as_str())
            .unwrap_or(MISSING_CLUE)
    }

    pub fn category_name(&self, category: usize) -> &str {
        self.categories
            .get(category)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// The bundled AI-themed pack: 4 categories, values 100-500
    pub fn sample() -> Self {
        let categories = vec![
            "AI Basics".to_string(),
            "AI in Everyday Life".to_string(),
            "Famous AI Milestones".to_string(),
            "Ethics & AI".to_string(),
        ];
        let values = vec![100, 200, 300, 400, 500];

        let mut clues = HashMap::new();
        let mut add = |cat: usize, val: u32, q: &str, a: &str| {
            clues.insert(TileKey::new(cat, val), Clue::new(q, a));
        };

        add(
            0,
            100,
            "This term refers to machines that mimic human intelligence.",
            "What is Artificial Intelligence?",
        );
        add(
            0,
            200,
            "The branch of AI focused on learning from data.",
            "What is Machine Learning?",
        );
        add(
            0,
            300,
            "The type of AI that can perform only one specific task.",
            "What is Narrow AI?",
        );
        add(
            0,
            400,
            "The year the term \"Artificial Intelligence\" was coined.",
            "What is 1956?",
        );
        add(
            0,
            500,
            "The test designed by Alan Turing to measure machine intelligence.",
            "What is the Turing Test?",
        );

        add(
            1,
            100,
            "This AI assistant was introduced by Apple in 2011.",
            "What is Siri?",
        );
        add(
            1,
            200,
            "Netflix uses this type of AI to recommend shows.",
            "What is a Recommendation System?",
        );
        add(
            1,
            300,
            "The AI behind self-driving cars relies heavily on this type of sensor.",
            "What is Lidar?",
        );
        add(1, 400, "This AI model powers ChatGPT.", "What is GPT?");
        add(
            1,
            500,
            "The company that created AlphaGo.",
            "What is DeepMind?",
        );

        add(
            2,
            100,
            "IBM's AI that beat Garry Kasparov in chess.",
            "What is Deep Blue?",
        );
        add(
            2,
            200,
            "Year AlphaGo defeated a world champion in Go.",
            "What is 2016?",
        );
        add(
            2,
            300,
            "The AI that beat humans in Jeopardy.",
            "What is Watson?",
        );
        add(
            2,
            400,
            "The first chatbot created in the 1960s.",
            "What is ELIZA?",
        );
        add(
            2,
            500,
            "The AI that generated realistic images from text prompts in 2022.",
            "What is DALL-E?",
        );

        add(
            3,
            100,
            "The term for bias in AI systems.",
            "What is Algorithmic Bias?",
        );
        add(
            3,
            200,
            "This principle ensures AI decisions can be explained.",
            "What is Explainability?",
        );
        add(
            3,
            300,
            "The EU's major AI regulation proposal.",
            "What is the AI Act?",
        );
        add(
            3,
            400,
            "The concept of AI behaving in a way that aligns with human values.",
            "What is AI Alignment?",
        );
        add(
            3,
            500,
            "The term for unintended harmful consequences of AI.",
            "What is AI Risk?",
        );

        Self {
            categories,
            values,
            clues,
            final_clue: FinalClue {
                category: "Legendary Final Category".to_string(),
                question:
                    "This is a test final question so you can verify wagers, timer, and reveal flow."
                        .to_string(),
                answer: "This is the test final answer.".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_pack_is_complete() {
        let content = BoardContent::sample();
        assert_eq!(content.categories.len(), 4);
        assert_eq!(content.values.len(), 5);
        assert_eq!(content.all_keys().len(), 20);
        for key in content.all_keys() {
            assert!(content.clue(key).is_some(), "missing clue for {:?}", key);
        }
    }

    #[test]
    fn test_missing_clue_falls_back_to_placeholder() {
        let content = BoardContent::sample();
        let bogus = TileKey::new(9, 999);
        assert_eq!(content.question(bogus), MISSING_CLUE);
        assert_eq!(content.answer(bogus), MISSING_CLUE);
    }
}
