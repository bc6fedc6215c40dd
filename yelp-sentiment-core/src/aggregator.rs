use {
    std::collections::{BTreeMap, HashMap, HashSet},
    crate::{
        lexicon::Lexicon,
        models::{
            TokenOccurrence,
            ScoredOccurrence,
            ReviewSentiment,
            WordSummary,
            WordSentiment,
            StarSummary,
            LexiconCoverage,
        },
    },
};

/// Minimum support for a word summary to be kept. Always supplied by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WordSummaryFilter {
    pub min_reviews: usize,
    pub min_businesses: usize,
}

struct ReviewAccumulator {
    stars: u8,
    score_sum: i64,
    matched: usize,
}

#[derive(Default)]
struct WordAccumulator<'a> {
    businesses: HashSet<&'a str>,
    review_stars: HashMap<&'a str, u8>,
    uses: usize,
}

/// Mean lexicon score per review. Reviews without a single scored word are not in the output.
pub fn review_sentiments(scored: &[ScoredOccurrence]) -> Vec<ReviewSentiment> {
    let mut by_review: BTreeMap<&str, ReviewAccumulator> = BTreeMap::new();

    for occurrence in scored {
        let accumulator = by_review.entry(occurrence.review_id).or_insert(ReviewAccumulator {
            stars: occurrence.stars,
            score_sum: 0,
            matched: 0,
        });
        accumulator.score_sum += occurrence.score as i64;
        accumulator.matched += 1;
    }

    by_review.into_iter()
        .map(|(review_id, accumulator)| ReviewSentiment::builder()
            .review_id(review_id.to_owned())
            .stars(accumulator.stars)
            .sentiment_score(accumulator.score_sum as f64 / accumulator.matched as f64)
            .build())
        .collect()
}

/// Per word statistics over all tokens, scored by the lexicon or not.
pub fn word_summaries(occurrences: &[TokenOccurrence]) -> Vec<WordSummary> {
    let mut by_word: BTreeMap<&str, WordAccumulator> = BTreeMap::new();

    for occurrence in occurrences {
        let accumulator = by_word.entry(occurrence.word.as_str()).or_default();
        accumulator.businesses.insert(occurrence.business_id);
        accumulator.review_stars.insert(occurrence.review_id, occurrence.stars);
        accumulator.uses += 1;
    }

    by_word.into_iter()
        .map(|(word, accumulator)| {
            let reviews = accumulator.review_stars.len();
            let stars_sum: u64 = accumulator.review_stars.values().map(|stars| *stars as u64).sum();

            WordSummary::builder()
                .word(word.to_owned())
                .businesses(accumulator.businesses.len())
                .reviews(reviews)
                .uses(accumulator.uses)
                .average_stars(stars_sum as f64 / reviews as f64)
                .build()
        })
        .collect()
}

/// Filtered word summaries that have a lexicon score, joined with that score.
pub fn word_sentiments(summaries: &[WordSummary], lexicon: &Lexicon) -> Vec<WordSentiment> {
    summaries.iter()
        .filter_map(|summary| lexicon.score(summary.word()).map(|score| summary.with_score(score)))
        .collect()
}

pub fn star_summaries(sentiments: &[ReviewSentiment]) -> Vec<StarSummary> {
    let mut by_stars: BTreeMap<u8, (usize, f64)> = BTreeMap::new();

    for sentiment in sentiments {
        let (reviews, sum) = by_stars.entry(sentiment.stars()).or_insert((0, 0.0));
        *reviews += 1;
        *sum += sentiment.sentiment_score();
    }

    by_stars.into_iter()
        .map(|(stars, (reviews, sum))| StarSummary::builder()
            .stars(stars)
            .reviews(reviews)
            .average_sentiment(sum / reviews as f64)
            .build())
        .collect()
}

pub fn lexicon_coverage(total_reviews: usize, occurrences: &[TokenOccurrence], scored: &[ScoredOccurrence]) -> LexiconCoverage {
    let scored_reviews: HashSet<&str> = scored.iter().map(|occurrence| occurrence.review_id).collect();

    LexiconCoverage {
        total_tokens: occurrences.len(),
        matched_tokens: scored.len(),
        total_reviews,
        scored_reviews: scored_reviews.len(),
    }
}

impl WordSummaryFilter {
    pub fn accepts(&self, summary: &WordSummary) -> bool {
        summary.reviews() >= self.min_reviews && summary.businesses() >= self.min_businesses
    }

    pub fn apply(&self, summaries: &[WordSummary]) -> Vec<WordSummary> {
        summaries.iter()
            .filter(|summary| self.accepts(summary))
            .cloned()
            .collect()
    }
}
