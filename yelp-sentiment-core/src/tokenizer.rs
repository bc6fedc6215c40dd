use {
    std::{collections::HashSet, fs::File, io::{BufRead, BufReader}, path::Path},
    anyhow::{Context, Result},
    once_cell::sync::Lazy,
    regex::Regex,
    unicode_segmentation::UnicodeSegmentation,
    tracing::info,
    crate::models::{Review, TokenOccurrence},
};

static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z']+$").unwrap());

// snowball list
const ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours", "yourself",
    "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself", "it", "its", "itself",
    "they", "them", "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
    "having", "do", "does", "did", "doing", "would", "should", "could", "ought", "i'm", "you're", "he's",
    "she's", "it's", "we're", "they're", "i've", "you've", "we've", "they've", "i'd", "you'd", "he'd",
    "she'd", "we'd", "they'd", "i'll", "you'll", "he'll", "she'll", "we'll", "they'll", "isn't",
    "aren't", "wasn't", "weren't", "hasn't", "haven't", "hadn't", "doesn't", "don't", "didn't", "won't",
    "wouldn't", "shan't", "shouldn't", "can't", "cannot", "couldn't", "mustn't", "let's", "that's",
    "who's", "what's", "here's", "there's", "when's", "where's", "why's", "how's", "a", "an", "the",
    "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by", "for", "with",
    "about", "against", "between", "into", "through", "during", "before", "after", "above", "below",
    "to", "from", "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then",
    "once", "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than", "too",
    "very",
];

#[derive(Clone, Debug)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn english() -> Self {
        ENGLISH_STOP_WORDS.iter().copied().collect()
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open stop words file {}", path.display()))?;

        let stop_words = Self::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to read stop words from {}", path.display()))?;
        info!("loaded {} stop words from {}", stop_words.len(), path.display());

        Ok(stop_words)
    }

    /// One word per line, case-insensitive. Blank lines are ignored.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut words = HashSet::new();

        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                words.insert(word.to_lowercase());
            }
        }

        Ok(Self { words })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for StopWords {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        Self {
            words: iter.into_iter().map(str::to_lowercase).collect(),
        }
    }
}

pub struct Tokenizer {
    stop_words: StopWords,
}

impl Tokenizer {
    pub fn new(stop_words: StopWords) -> Self {
        Self {
            stop_words,
        }
    }

    /// Lowercase words of `text` in order, without stop words and without anything
    /// that is not made of letters and apostrophes only.
    pub fn tokens<'a>(&'a self, text: &'a str) -> impl Iterator<Item = String> + 'a {
        text.unicode_words()
            .map(str::to_lowercase)
            .filter(move |word| !self.stop_words.contains(word))
            .filter(|word| TOKEN_PATTERN.is_match(word))
    }

    pub fn occurrences<'a>(&'a self, reviews: &'a [Review]) -> impl Iterator<Item = TokenOccurrence<'a>> + 'a {
        reviews.iter()
            .flat_map(move |review| self.tokens(&review.text).map(move |word| review.occurrence(word)))
    }
}
