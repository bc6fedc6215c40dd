use {
    std::{fs::read_to_string, path::PathBuf},
    tracing::warn,
    serde::Deserialize,
    crate::aggregator::WordSummaryFilter,
};

#[derive(Deserialize, Debug)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    word_summary: Option<WordSummaryConfig>,
    output: Option<OutputConfig>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct InputConfig {
    reviews_path: Option<PathBuf>,
    max_reviews: Option<usize>,
    lexicon_path: Option<PathBuf>,
    stop_words_path: Option<PathBuf>,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct WordSummaryConfig {
    pub min_reviews: usize,
    pub min_businesses: usize,
}

#[derive(Deserialize, Clone, Debug)]
pub struct OutputConfig {
    directory: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: InputConfig::default(),
            word_summary: None,
            output: None,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            reviews_path: None,
            max_reviews: None,
            lexicon_path: None,
            stop_words_path: None,
        }
    }
}

// words seen in at least 200 reviews across 10 businesses
impl Default for WordSummaryConfig {
    fn default() -> Self {
        Self {
            min_reviews: 200,
            min_businesses: 10,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: None,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        read_to_string("./config.toml")
            .or_else(|_| read_to_string("/config/config.toml"))
            .map_err(|err| err.to_string())
            .and_then(|v| Self::from_toml(&v))
            .unwrap_or_else(|err| {
                warn!("failed to read config: {}", err);
                Config::default()
            })
    }

    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|err| err.to_string())
    }

    pub fn word_summary(&self) -> WordSummaryConfig {
        self.word_summary.as_ref().cloned().unwrap_or_default()
    }

    pub fn output(&self) -> OutputConfig {
        self.output.as_ref().cloned().unwrap_or_default()
    }
}

impl InputConfig {
    pub fn reviews_path(&self) -> PathBuf {
        self.reviews_path.as_ref().cloned().unwrap_or(PathBuf::from("data/yelp_academic_dataset_review.json"))
    }

    pub fn max_reviews(&self) -> Option<usize> {
        self.max_reviews
    }

    pub fn lexicon_path(&self) -> PathBuf {
        self.lexicon_path.as_ref().cloned().unwrap_or(PathBuf::from("data/AFINN-111.txt"))
    }

    pub fn stop_words_path(&self) -> Option<&PathBuf> {
        self.stop_words_path.as_ref()
    }
}

impl WordSummaryConfig {
    pub fn filter(&self) -> WordSummaryFilter {
        WordSummaryFilter {
            min_reviews: self.min_reviews,
            min_businesses: self.min_businesses,
        }
    }
}

impl OutputConfig {
    pub fn directory(&self) -> PathBuf {
        self.directory.as_ref().cloned().unwrap_or(PathBuf::from("output"))
    }
}
