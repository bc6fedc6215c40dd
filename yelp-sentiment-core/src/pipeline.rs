use {
    tracing::info,
    crate::{
        aggregator::{
            WordSummaryFilter,
            review_sentiments,
            word_summaries,
            word_sentiments,
            star_summaries,
            lexicon_coverage,
        },
        lexicon::Lexicon,
        models::{
            Review,
            TokenOccurrence,
            ReviewSentiment,
            WordSummary,
            WordSentiment,
            StarSummary,
            LexiconCoverage,
        },
        progress::Progress,
        tokenizer::Tokenizer,
    },
};

#[derive(Debug, PartialEq)]
pub struct PipelineOutput {
    pub review_sentiments: Vec<ReviewSentiment>,
    pub word_summaries: Vec<WordSummary>,
    pub filtered_word_summaries: Vec<WordSummary>,
    pub word_sentiments: Vec<WordSentiment>,
    pub star_summaries: Vec<StarSummary>,
    pub coverage: LexiconCoverage,
}

pub struct Pipeline<'a> {
    lexicon: &'a Lexicon,
    tokenizer: &'a Tokenizer,
    filter: WordSummaryFilter,
}

impl<'a> Pipeline<'a> {
    pub fn new(lexicon: &'a Lexicon, tokenizer: &'a Tokenizer, filter: WordSummaryFilter) -> Self {
        Self {
            lexicon,
            tokenizer,
            filter,
        }
    }

    pub fn run(&self, reviews: &[Review]) -> PipelineOutput {
        let occurrences = self.tokenize(reviews);

        let scored = self.lexicon.join(&occurrences);
        let coverage = lexicon_coverage(reviews.len(), &occurrences, &scored);
        info!(
            "lexicon matched {} of {} tokens in {} of {} reviews",
            coverage.matched_tokens,
            coverage.total_tokens,
            coverage.scored_reviews,
            coverage.total_reviews,
        );

        let review_sentiments = review_sentiments(&scored);
        let star_summaries = star_summaries(&review_sentiments);

        let word_summaries = word_summaries(&occurrences);
        let filtered_word_summaries = self.filter.apply(&word_summaries);
        let word_sentiments = word_sentiments(&filtered_word_summaries, self.lexicon);
        info!(
            "{} distinct words, {} pass the filter (min {} reviews, min {} businesses), {} of them have a lexicon score",
            word_summaries.len(),
            filtered_word_summaries.len(),
            self.filter.min_reviews,
            self.filter.min_businesses,
            word_sentiments.len(),
        );

        PipelineOutput {
            review_sentiments,
            word_summaries,
            filtered_word_summaries,
            word_sentiments,
            star_summaries,
            coverage,
        }
    }

    fn tokenize<'r>(&'r self, reviews: &'r [Review]) -> Vec<TokenOccurrence<'r>> {
        let mut progress = Progress::new("tokenizing reviews".to_owned());
        let mut occurrences = Vec::new();

        for review in reviews {
            occurrences.extend(self.tokenizer.occurrences(std::slice::from_ref(review)));
            progress.update();
        }

        progress.finish();
        occurrences
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::tokenizer::StopWords,
    };

    fn review(review_id: &str, business_id: &str, stars: u8, text: &str) -> Review {
        Review {
            review_id: review_id.to_owned(),
            business_id: business_id.to_owned(),
            stars,
            text: text.to_owned(),
        }
    }

    fn no_threshold() -> WordSummaryFilter {
        WordSummaryFilter { min_reviews: 0, min_businesses: 0 }
    }

    #[test]
    fn reruns_produce_identical_output() {
        let lexicon = Lexicon::from_entries(vec![("great", 3), ("bad", -3), ("love", 3), ("slow", -2)]).unwrap();
        let tokenizer = Tokenizer::new(StopWords::english());
        let pipeline = Pipeline::new(&lexicon, &tokenizer, no_threshold());
        let reviews = vec![
            review("r3", "b2", 2, "Slow service and bad coffee"),
            review("r1", "b1", 5, "Great tacos, love the salsa"),
            review("r2", "b1", 4, "great tacos but slow"),
            review("r4", "b3", 3, "It was fine"),
        ];

        let first = pipeline.run(&reviews);
        let second = pipeline.run(&reviews);

        assert_eq!(first, second);
    }

    #[test]
    fn runs_end_to_end() {
        let lexicon = Lexicon::from_entries(vec![("great", 3), ("bad", -3)]).unwrap();
        let tokenizer = Tokenizer::new(vec!["the", "was"].into_iter().collect());
        let pipeline = Pipeline::new(&lexicon, &tokenizer, WordSummaryFilter { min_reviews: 2, min_businesses: 1 });
        let reviews = vec![
            review("r1", "b1", 5, "the food was great"),
            review("r2", "b1", 1, "the food was bad"),
            review("r3", "b1", 3, "the the was"),
        ];

        let output = pipeline.run(&reviews);

        let scores: Vec<_> = output.review_sentiments.iter()
            .map(|sentiment| (sentiment.review_id(), sentiment.sentiment_score()))
            .collect();
        assert_eq!(scores, vec![("r1", 3.0), ("r2", -3.0)]);

        let filtered: Vec<_> = output.filtered_word_summaries.iter().map(|summary| summary.word()).collect();
        assert_eq!(filtered, vec!["food"]);
        assert!(output.word_sentiments.is_empty());

        assert_eq!(output.star_summaries.len(), 2);
        assert_eq!(output.coverage.total_reviews, 3);
        assert_eq!(output.coverage.scored_reviews, 2);
        assert_eq!(output.coverage.total_tokens, 4);
        assert_eq!(output.coverage.matched_tokens, 2);
    }

    #[test]
    fn no_reviews_gives_empty_output() {
        let lexicon = Lexicon::from_entries(vec![("great", 3)]).unwrap();
        let tokenizer = Tokenizer::new(StopWords::english());

        let output = Pipeline::new(&lexicon, &tokenizer, no_threshold()).run(&[]);

        assert!(output.review_sentiments.is_empty());
        assert!(output.word_summaries.is_empty());
        assert!(output.word_sentiments.is_empty());
        assert!(output.star_summaries.is_empty());
        assert_eq!(output.coverage, LexiconCoverage::default());
    }
}
