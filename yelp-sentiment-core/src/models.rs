use {
    typed_builder::TypedBuilder,
    serde::{Serialize, Deserialize},
};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Review {
    pub review_id: String,
    pub business_id: String,
    pub stars: u8,
    pub text: String,
}

/// One qualifying word instance of a review. Borrows the review it came from.
#[derive(Clone, Debug, PartialEq)]
pub struct TokenOccurrence<'a> {
    pub review_id: &'a str,
    pub business_id: &'a str,
    pub stars: u8,
    pub word: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScoredOccurrence<'a> {
    pub review_id: &'a str,
    pub business_id: &'a str,
    pub stars: u8,
    pub word: &'a str,
    pub score: i8,
}

#[derive(TypedBuilder, Serialize, Clone, Debug, PartialEq)]
pub struct ReviewSentiment {
    review_id: String,
    stars: u8,
    sentiment_score: f64,
}

#[derive(TypedBuilder, Serialize, Clone, Debug, PartialEq)]
pub struct WordSummary {
    word: String,
    businesses: usize,
    reviews: usize,
    uses: usize,
    average_stars: f64,
}

// word, score, then the summary columns
#[derive(TypedBuilder, Serialize, Clone, Debug, PartialEq)]
pub struct WordSentiment {
    word: String,
    afinn_score: i8,
    average_stars: f64,
    reviews: usize,
    businesses: usize,
}

#[derive(TypedBuilder, Serialize, Clone, Debug, PartialEq)]
pub struct StarSummary {
    stars: u8,
    reviews: usize,
    average_sentiment: f64,
}

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct LexiconCoverage {
    pub total_tokens: usize,
    pub matched_tokens: usize,
    pub total_reviews: usize,
    pub scored_reviews: usize,
}

impl Review {
    pub fn occurrence(&self, word: String) -> TokenOccurrence<'_> {
        TokenOccurrence {
            review_id: &self.review_id,
            business_id: &self.business_id,
            stars: self.stars,
            word,
        }
    }
}

impl<'a> TokenOccurrence<'a> {
    pub fn scored(&'a self, score: i8) -> ScoredOccurrence<'a> {
        ScoredOccurrence {
            review_id: self.review_id,
            business_id: self.business_id,
            stars: self.stars,
            word: &self.word,
            score,
        }
    }
}

impl ReviewSentiment {
    pub fn review_id(&self) -> &str {
        &self.review_id
    }

    pub fn stars(&self) -> u8 {
        self.stars
    }

    pub fn sentiment_score(&self) -> f64 {
        self.sentiment_score
    }
}

impl WordSummary {
    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn businesses(&self) -> usize {
        self.businesses
    }

    pub fn reviews(&self) -> usize {
        self.reviews
    }

    pub fn uses(&self) -> usize {
        self.uses
    }

    pub fn average_stars(&self) -> f64 {
        self.average_stars
    }

    pub fn with_score(&self, afinn_score: i8) -> WordSentiment {
        WordSentiment::builder()
            .word(self.word.clone())
            .afinn_score(afinn_score)
            .average_stars(self.average_stars)
            .reviews(self.reviews)
            .businesses(self.businesses)
            .build()
    }
}

impl WordSentiment {
    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn afinn_score(&self) -> i8 {
        self.afinn_score
    }

    pub fn average_stars(&self) -> f64 {
        self.average_stars
    }
}

impl StarSummary {
    pub fn stars(&self) -> u8 {
        self.stars
    }

    pub fn reviews(&self) -> usize {
        self.reviews
    }

    pub fn average_sentiment(&self) -> f64 {
        self.average_sentiment
    }
}

impl LexiconCoverage {
    /// Share of tokens that had a lexicon score. `None` when there were no tokens at all.
    pub fn token_rate(&self) -> Option<f64> {
        ratio(self.matched_tokens, self.total_tokens)
    }

    pub fn review_rate(&self) -> Option<f64> {
        ratio(self.scored_reviews, self.total_reviews)
    }
}

fn ratio(part: usize, total: usize) -> Option<f64> {
    if total == 0 {
        None
    } else {
        Some(part as f64 / total as f64)
    }
}
