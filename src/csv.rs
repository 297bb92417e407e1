use crate::models::Card;

/// Parse raw CSV text into cards.
///
/// Column 0 is the question and column 1 the answer. There is no header row.
/// Rows whose question or answer is blank after trimming, and records the
/// reader cannot decode, are dropped without error.
pub fn parse_cards(content: &str) -> Vec<Card> {
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut cards = Vec::new();
    for result in reader.records() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                tracing::debug!("dropping unreadable csv record: {}", e);
                continue;
            }
        };

        if let Some((question, answer)) = card_fields(&record) {
            cards.push(Card { question, answer });
        }
    }

    cards
}

fn card_fields(record: &::csv::StringRecord) -> Option<(String, String)> {
    let question = record.get(0)?;
    let answer = record.get(1)?;
    if question.trim().is_empty() || answer.trim().is_empty() {
        return None;
    }
    Some((question.to_string(), answer.to_string()))
}
