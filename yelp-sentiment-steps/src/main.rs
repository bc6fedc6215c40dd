use {
    tracing::{info, error},
    anyhow::Result,
    yelp_sentiment_core::{
        config::Config,
        lexicon::Lexicon,
        loader::load_reviews_file,
        pipeline::Pipeline,
        tokenizer::{StopWords, Tokenizer},
    },
    crate::{
        report::write_report,
        utils::init_logging,
    },
};

mod report;
mod utils;

fn main() {
    init_logging();

    info!("yelp review sentiment analysis");

    if let Err(err) = run(Config::load()) {
        error!("sentiment analysis failed: {:#}", err);
        std::process::exit(1);
    }
}

fn run(config: Config) -> Result<()> {
    let lexicon = Lexicon::load(&config.input.lexicon_path())?;
    let stop_words = match config.input.stop_words_path() {
        Some(path) => StopWords::load(path)?,
        None => {
            info!("no stop words file configured, using built-in english list");
            StopWords::english()
        },
    };

    let reviews = load_reviews_file(&config.input.reviews_path(), config.input.max_reviews())?;

    let tokenizer = Tokenizer::new(stop_words);
    let pipeline = Pipeline::new(&lexicon, &tokenizer, config.word_summary().filter());
    let output = pipeline.run(&reviews);

    if let Some(rate) = output.coverage.token_rate() {
        info!("lexicon coverage: {:.2}% of tokens", rate * 100.0);
    }

    let output_directory = config.output().directory();
    write_report(&output_directory, &output)?;
    info!("report written to {}", output_directory.display());

    Ok(())
}
