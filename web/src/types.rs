use serde::{Deserialize, Deserializer, Serialize};
use yew::prelude::*;

/// Markup that is injected into the page without escaping.
///
/// Nothing here sanitizes the contents. Whoever constructs one of these
/// (including by deserializing it) is vouching that the markup is safe to
/// place in the document.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct TrustedHtml(String);

impl TrustedHtml {
    pub fn trusted(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    /// Generations usually arrive as markdown, this is the same conversion
    /// the history view has always used for descriptions.
    pub fn from_markdown(text: &str) -> Self {
        Self(markdown::to_html(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_html(&self) -> Html {
        Html::from_html_unchecked(AttrValue::from(self.0.clone()))
    }
}

impl From<TrustedHtml> for String {
    fn from(value: TrustedHtml) -> Self {
        value.0
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// A missing or `null` question or answer renders as empty text rather
    /// than throwing away the rest of the history.
    #[serde(default, deserialize_with = "null_as_default")]
    pub question: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub answer: TrustedHtml,
    /// Missing and `null` are both the same as empty.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub urls: Vec<String>,
}

impl HistoryEntry {
    pub fn new(question: impl Into<String>, answer: TrustedHtml) -> Self {
        Self {
            id: None,
            question: question.into(),
            answer,
            urls: Vec::new(),
        }
    }

    pub fn with_urls<I, S>(self, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            urls: urls.into_iter().map(Into::into).collect(),
            ..self
        }
    }

    pub fn with_id(self, id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..self
        }
    }

    pub fn has_references(&self) -> bool {
        !self.urls.is_empty()
    }
}

/// Ordered question/answer history, oldest first.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(from = "Option<Vec<HistoryEntry>>", into = "Vec<HistoryEntry>")]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn append(&self, entry: HistoryEntry) -> Self {
        Self {
            entries: self.entries.iter().cloned().chain([entry]).collect(),
        }
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<HistoryEntry>> for History {
    fn from(entries: Vec<HistoryEntry>) -> Self {
        Self { entries }
    }
}

impl From<Option<Vec<HistoryEntry>>> for History {
    fn from(entries: Option<Vec<HistoryEntry>>) -> Self {
        entries.unwrap_or_default().into()
    }
}

impl From<History> for Vec<HistoryEntry> {
    fn from(history: History) -> Self {
        history.entries
    }
}

impl FromIterator<HistoryEntry> for History {
    fn from_iter<T: IntoIterator<Item = HistoryEntry>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Everything the page needs to draw the history view.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnswerSeed {
    #[serde(default)]
    pub history: History,
    #[serde(default, deserialize_with = "null_as_default")]
    pub loading: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> HistoryEntry {
        HistoryEntry::new("What is X?", TrustedHtml::trusted("<p>X is Y.</p>"))
            .with_urls(["https://a.com"])
    }

    #[test]
    fn it_serializes_entries_with_references() {
        insta::assert_json_snapshot!(sample(), @r###"
        {
          "question": "What is X?",
          "answer": "<p>X is Y.</p>",
          "urls": [
            "https://a.com"
          ]
        }
        "###);
    }

    #[test]
    fn it_omits_empty_references_when_serializing() {
        let entry = HistoryEntry::new("Define Z", TrustedHtml::trusted("<b>Z</b>")).with_id("z");

        insta::assert_json_snapshot!(entry, @r###"
        {
          "id": "z",
          "question": "Define Z",
          "answer": "<b>Z</b>"
        }
        "###);
    }

    #[test]
    fn it_treats_missing_and_null_urls_as_empty() {
        let missing: HistoryEntry =
            serde_json::from_str(r#"{ "question": "Q", "answer": "A" }"#).unwrap();
        let null: HistoryEntry =
            serde_json::from_str(r#"{ "question": "Q", "answer": "A", "urls": null }"#).unwrap();

        assert!(!missing.has_references());
        assert!(!null.has_references());
        assert_eq!(missing, null);
    }

    #[test]
    fn it_keeps_entries_missing_questions_or_answers() {
        let history: History = serde_json::from_str(
            r#"[
                { "question": "ok", "answer": "A" },
                { "question": "no answer" },
                { "answer": "no question" },
                { "question": null, "answer": null }
            ]"#,
        )
        .unwrap();

        assert_eq!(history.len(), 4);
        assert_eq!(history.entries()[1].answer, TrustedHtml::default());
        assert_eq!(history.entries()[2].question, "");
        assert_eq!(history.entries()[3].answer.as_str(), "");
    }

    #[test]
    fn it_treats_null_history_as_empty() {
        let seed: AnswerSeed =
            serde_json::from_str(r#"{ "history": null, "loading": true }"#).unwrap();

        assert!(seed.history.is_empty());
        assert!(seed.loading);
    }

    #[test]
    fn it_defaults_missing_seed_fields() {
        let seed: AnswerSeed = serde_json::from_str("{}").unwrap();

        assert_eq!(seed, AnswerSeed::default());

        let seed: AnswerSeed = serde_json::from_str(r#"{ "loading": null }"#).unwrap();

        assert!(!seed.loading);
    }

    #[test]
    fn it_preserves_history_order() {
        let seed: AnswerSeed = serde_json::from_str(
            r#"{ "history": [
                { "question": "first", "answer": "1" },
                { "question": "second", "answer": "2", "urls": ["https://b.com", "https://c.com"] }
            ] }"#,
        )
        .unwrap();

        let questions = seed
            .history
            .entries()
            .iter()
            .map(|e| e.question.as_str())
            .collect::<Vec<_>>();

        assert_eq!(questions, vec!["first", "second"]);
        assert_eq!(
            seed.history.latest().map(|e| e.urls.clone()),
            Some(vec!["https://b.com".to_owned(), "https://c.com".to_owned()])
        );
    }

    #[test]
    fn it_appends_without_touching_the_original() {
        let history = History::default();
        let appended = history.append(sample());

        assert!(history.is_empty());
        assert_eq!(appended.len(), 1);
        assert_eq!(appended.latest(), Some(&sample()));
    }

    #[test]
    fn it_converts_markdown_to_trusted_markup() {
        let html = TrustedHtml::from_markdown("Cardio is **important**.");

        assert!(html.as_str().contains("<strong>important</strong>"));
    }
}
