use {
    std::{fs::{File, create_dir_all}, io::{BufWriter, Write}, path::Path},
    anyhow::{Context, Result},
    serde::Serialize,
    tracing::info,
    yelp_sentiment_core::{models::LexiconCoverage, pipeline::PipelineOutput},
};

#[derive(Serialize)]
struct CoverageReport<'a> {
    #[serde(flatten)]
    coverage: &'a LexiconCoverage,
    token_rate: Option<f64>,
    review_rate: Option<f64>,
}

pub fn write_report(directory: &Path, output: &PipelineOutput) -> Result<()> {
    create_dir_all(directory)
        .with_context(|| format!("failed to create output directory {}", directory.display()))?;

    write_csv_file(&directory.join("review_sentiment.csv"), &output.review_sentiments)?;
    write_csv_file(&directory.join("word_summary.csv"), &output.filtered_word_summaries)?;
    write_csv_file(&directory.join("word_summary_unfiltered.csv"), &output.word_summaries)?;
    write_csv_file(&directory.join("word_sentiment.csv"), &output.word_sentiments)?;
    write_csv_file(&directory.join("star_summary.csv"), &output.star_summaries)?;

    let path = directory.join("coverage.json");
    let file = File::create(&path).with_context(|| format!("failed to create {}", path.display()))?;
    write_coverage(BufWriter::new(file), &output.coverage)
        .with_context(|| format!("failed to write {}", path.display()))?;

    Ok(())
}

fn write_csv_file<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    write_csv(file, rows).with_context(|| format!("failed to write {}", path.display()))?;
    info!("wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

fn write_csv<W: Write, T: Serialize>(writer: W, rows: &[T]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_coverage<W: Write>(mut writer: W, coverage: &LexiconCoverage) -> Result<()> {
    let report = CoverageReport {
        coverage,
        token_rate: coverage.token_rate(),
        review_rate: coverage.review_rate(),
    };
    serde_json::to_writer_pretty(&mut writer, &report)?;
    writer.flush()?;
    Ok(())
}
