use {
    std::{collections::HashMap, fs::File, io::{BufRead, BufReader}, path::Path},
    anyhow::{anyhow, Context, Result},
    tracing::info,
    crate::models::Review,
};

pub fn load_reviews_file(path: &Path, max_lines: Option<usize>) -> Result<Vec<Review>> {
    info!("loading reviews from: {}", path.display());

    let file = File::open(path)
        .with_context(|| format!("failed to open reviews file {}", path.display()))?;

    load_reviews(BufReader::new(file), max_lines)
        .with_context(|| format!("failed to load reviews from {}", path.display()))
}

/// Reads one review per line. Stops after `max_lines` lines, blank ones included.
/// Review ids must be unique.
pub fn load_reviews<R: BufRead>(reader: R, max_lines: Option<usize>) -> Result<Vec<Review>> {
    let mut reviews = Vec::new();
    let mut seen_on_line: HashMap<String, usize> = HashMap::new();

    for (index, line) in reader.lines().take(max_lines.unwrap_or(usize::MAX)).enumerate() {
        let line_number = index + 1;
        let line = line.with_context(|| format!("failed to read line {}", line_number))?;

        if line.trim().is_empty() {
            continue;
        }

        let review = parse_review(&line)
            .and_then(|review| match seen_on_line.get(&review.review_id) {
                Some(first_line) => Err(anyhow!("duplicate review_id \"{}\", first seen on line {}", review.review_id, first_line)),
                None => Ok(review),
            })
            .with_context(|| format!("malformed review on line {}", line_number))?;

        seen_on_line.insert(review.review_id.clone(), line_number);
        reviews.push(review);
    }

    info!("loaded {} reviews", reviews.len());

    Ok(reviews)
}

fn parse_review(line: &str) -> Result<Review> {
    let review: Review = serde_json::from_str(line)?;

    if !(1..=5).contains(&review.stars) {
        return Err(anyhow!("stars must be between 1 and 5, got {}", review.stars));
    }

    Ok(review)
}

#[cfg(test)]
mod tests {
    use {
        std::io::Cursor,
        super::*,
    };

    #[test]
    fn loads_reviews_and_ignores_unknown_fields() {
        let input = r#"{"review_id":"r1","user_id":"u1","business_id":"b1","stars":5,"date":"2012-05-01","text":"Great food","votes":{"useful":1}}
{"review_id":"r2","business_id":"b2","stars":1,"text":"Cold and bad"}
"#;

        let reviews = load_reviews(Cursor::new(input), None).unwrap();

        assert_eq!(reviews, vec![
            Review {
                review_id: "r1".to_owned(),
                business_id: "b1".to_owned(),
                stars: 5,
                text: "Great food".to_owned(),
            },
            Review {
                review_id: "r2".to_owned(),
                business_id: "b2".to_owned(),
                stars: 1,
                text: "Cold and bad".to_owned(),
            },
        ]);
    }

    #[test]
    fn respects_max_lines() {
        let input = (1..=10)
            .map(|i| format!(r#"{{"review_id":"r{}","business_id":"b","stars":3,"text":"ok"}}"#, i))
            .collect::<Vec<_>>()
            .join("\n");

        let reviews = load_reviews(Cursor::new(input), Some(4)).unwrap();

        assert_eq!(reviews.len(), 4);
        assert_eq!(reviews[3].review_id, "r4");
    }

    #[test]
    fn lines_past_the_cap_are_never_parsed() {
        let input = "{\"review_id\":\"r1\",\"business_id\":\"b\",\"stars\":3,\"text\":\"ok\"}\nnot json at all\n";

        assert_eq!(load_reviews(Cursor::new(input), Some(1)).unwrap().len(), 1);
    }

    #[test]
    fn malformed_line_fails_whole_load() {
        let input = "{\"review_id\":\"r1\",\"business_id\":\"b\",\"stars\":3,\"text\":\"ok\"}\n{\"review_id\":\"r2\",\"stars\":3}\n";

        let err = load_reviews(Cursor::new(input), None).unwrap_err();

        assert!(format!("{:#}", err).contains("line 2"), "unexpected error: {:#}", err);
    }

    #[test]
    fn stars_out_of_range_is_malformed() {
        let input = "{\"review_id\":\"r1\",\"business_id\":\"b\",\"stars\":6,\"text\":\"ok\"}";

        let err = load_reviews(Cursor::new(input), None).unwrap_err();

        assert!(format!("{:#}", err).contains("line 1"));
        assert!(format!("{:#}", err).contains("between 1 and 5"));
    }

    #[test]
    fn repeated_review_id_is_malformed() {
        let input = concat!(
            r#"{"review_id":"r","business_id":"b","stars":5,"text":"great"}"#, "\n",
            r#"{"review_id":"other","business_id":"b","stars":3,"text":"fine"}"#, "\n",
            r#"{"review_id":"r","business_id":"b","stars":1,"text":"great great"}"#, "\n",
        );

        let err = format!("{:#}", load_reviews(Cursor::new(input), None).unwrap_err());

        assert!(err.contains("malformed review on line 3"), "unexpected error: {}", err);
        assert!(err.contains("duplicate review_id \"r\", first seen on line 1"), "unexpected error: {}", err);
    }

    #[test]
    fn repeated_review_id_past_the_cap_is_not_read() {
        let input = concat!(
            r#"{"review_id":"r","business_id":"b","stars":5,"text":"great"}"#, "\n",
            r#"{"review_id":"r","business_id":"b","stars":1,"text":"bad"}"#, "\n",
        );

        assert_eq!(load_reviews(Cursor::new(input), Some(1)).unwrap().len(), 1);
    }

    #[test]
    fn blank_lines_count_toward_max_lines() {
        let input = "\n{\"review_id\":\"r1\",\"business_id\":\"b\",\"stars\":2,\"text\":\"ok\"}\n";

        assert!(load_reviews(Cursor::new(input), Some(1)).unwrap().is_empty());
        assert_eq!(load_reviews(Cursor::new(input), Some(2)).unwrap().len(), 1);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let input = "\n{\"review_id\":\"r1\",\"business_id\":\"b\",\"stars\":2,\"text\":\"ok\"}\n   \n";

        assert_eq!(load_reviews(Cursor::new(input), None).unwrap().len(), 1);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_reviews_file(Path::new("/nonexistent/reviews.json"), None).unwrap_err();

        assert!(err.to_string().contains("/nonexistent/reviews.json"));
    }
}
