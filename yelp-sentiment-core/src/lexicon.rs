use {
    std::{collections::{HashMap, hash_map::Entry}, fs::File, io::Read, path::Path},
    anyhow::{anyhow, Context, Result},
    tracing::info,
    crate::models::{TokenOccurrence, ScoredOccurrence},
};

pub const MIN_SCORE: i64 = -5;
pub const MAX_SCORE: i64 = 5;

/// Word to sentiment score mapping, AFINN style.
#[derive(Clone, Debug, Default)]
pub struct Lexicon {
    scores: HashMap<String, i8>,
}

impl Lexicon {
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open lexicon file {}", path.display()))?;

        let lexicon = Self::from_reader(file)
            .with_context(|| format!("failed to read lexicon from {}", path.display()))?;
        info!("loaded lexicon with {} words from {}", lexicon.len(), path.display());

        Ok(lexicon)
    }

    /// Reads `word<TAB>score` rows without a header. Blank lines are skipped and do not count
    /// as entries, so errors name the entry, not the file line.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .quoting(false)
            .from_reader(reader);

        let mut entries = Vec::new();
        for (index, record) in reader.deserialize::<(String, i64)>().enumerate() {
            let entry = index + 1;
            let (word, score) = record.with_context(|| format!("invalid lexicon entry {}", entry))?;
            entries.push((word, score));
        }

        Self::from_entries(entries)
    }

    pub fn from_entries<I, W>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (W, i64)>,
        W: AsRef<str>,
    {
        let mut scores = HashMap::new();

        for (index, (word, score)) in entries.into_iter().enumerate() {
            let entry = index + 1;
            let word = word.as_ref().trim().to_lowercase();

            if word.is_empty() {
                return Err(anyhow!("empty word in lexicon entry {}", entry));
            }
            if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
                return Err(anyhow!("score {} for \"{}\" in lexicon entry {} is outside of [{}, {}]", score, word, entry, MIN_SCORE, MAX_SCORE));
            }

            match scores.entry(word) {
                Entry::Occupied(occupied) => return Err(anyhow!("duplicate lexicon word \"{}\" in entry {}", occupied.key(), entry)),
                Entry::Vacant(vacant) => {
                    vacant.insert(score as i8);
                },
            }
        }

        Ok(Self { scores })
    }

    pub fn score(&self, word: &str) -> Option<i8> {
        self.scores.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Keeps occurrences of lexicon words and attaches their score. Everything else is dropped.
    pub fn join<'a>(&self, occurrences: &'a [TokenOccurrence<'a>]) -> Vec<ScoredOccurrence<'a>> {
        occurrences.iter()
            .filter_map(|occurrence| self.score(&occurrence.word).map(|score| occurrence.scored(score)))
            .collect()
    }
}
