use std::str::FromStr;

use gloo::utils::document;

use crate::{config::SEED_ELEMENT_ID, errors::Error, types::AnswerSeed};

impl FromStr for AnswerSeed {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(s)?)
    }
}

pub fn read_seed(id: &str) -> Result<AnswerSeed, Error> {
    let element = document()
        .get_element_by_id(id)
        .ok_or_else(|| Error::MissingSeed(id.to_owned()))?;

    let text = element.text_content().unwrap_or_default();
    if text.trim().is_empty() {
        return Err(Error::EmptySeed(id.to_owned()));
    }

    text.parse()
}

/// Never fails, a page without a usable seed just shows nothing.
pub fn load_seed() -> AnswerSeed {
    match read_seed(SEED_ELEMENT_ID) {
        Ok(seed) => {
            log::info!(
                "seed:loaded entries={} loading={}",
                seed.history.len(),
                seed.loading
            );
            seed
        }
        Err(e @ (Error::MissingSeed(_) | Error::EmptySeed(_))) => {
            log::info!("seed: {}", e);
            AnswerSeed::default()
        }
        Err(e) => {
            log::warn!("seed: {}", e);
            AnswerSeed::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_parses_a_seed() {
        let seed: AnswerSeed = r#"{ "history": [{ "question": "Define Z", "answer": "<b>Z</b>" }], "loading": true }"#
            .parse()
            .unwrap();

        assert_eq!(seed.history.len(), 1);
        assert!(seed.loading);
    }

    #[test]
    fn it_rejects_malformed_seeds() {
        let seed = "{ history: ".parse::<AnswerSeed>();

        assert!(matches!(seed, Err(Error::MalformedSeed(_))));
    }

    #[test]
    fn it_keeps_every_entry_when_one_is_incomplete() {
        let seed: AnswerSeed =
            r#"{ "history": [{ "question": "ok", "answer": "A" }, { "question": "no answer" }] }"#
                .parse()
                .unwrap();

        let questions = seed
            .history
            .entries()
            .iter()
            .map(|e| e.question.as_str())
            .collect::<Vec<_>>();

        assert_eq!(questions, vec!["ok", "no answer"]);
        assert_eq!(seed.history.entries()[1].answer.as_str(), "");
    }
}
