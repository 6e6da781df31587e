use std::collections::HashSet;

use yew::prelude::*;

use super::icon::{Glyph, Icon};
use crate::types::{History, HistoryEntry, TrustedHtml};


/// One card, with every display decision already made.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView<'a> {
    pub key: String,
    pub question: &'a str,
    pub answer: &'a TrustedHtml,
    pub badge: Glyph,
    pub references: Option<&'a [String]>,
}

impl<'a> CardView<'a> {
    fn new(key: String, entry: &'a HistoryEntry) -> Self {
        let references = if entry.has_references() {
            Some(entry.urls.as_slice())
        } else {
            None
        };

        Self {
            key,
            question: &entry.question,
            answer: &entry.answer,
            badge: if references.is_some() {
                Glyph::Globe
            } else {
                Glyph::Book
            },
            references,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnswerView<'a> {
    pub loading: bool,
    pub cards: Vec<CardView<'a>>,
}

impl<'a> AnswerView<'a> {
    pub fn new(history: &'a History, loading: bool) -> Self {
        let entries = history.entries();
        let keys = card_keys(entries);

        Self {
            loading,
            cards: keys
                .into_iter()
                .zip(entries)
                .map(|(key, entry)| CardView::new(key, entry))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Explicit ids make for stable keys, but only if every entry has one and
/// none repeat. Otherwise everything falls back to position.
fn card_keys(entries: &[HistoryEntry]) -> Vec<String> {
    let mut seen = HashSet::new();
    let ids = entries
        .iter()
        .map(|e| e.id.as_ref().filter(|id| seen.insert(id.as_str())))
        .collect::<Option<Vec<_>>>();

    match ids {
        Some(ids) => ids.into_iter().map(|id| format!("id-{}", id)).collect(),
        None => (0..entries.len()).map(|i| format!("at-{}", i)).collect(),
    }
}

fn references(urls: &[String]) -> Html {
    html! {
        <div class="url-list mt-4">
            <div class="flex items-start space-x-2">
                <Icon glyph={Glyph::Link} class={classes!("text-blue-500", "mt-1")} />
                <p class="text-left text-sm font-semibold">{ "References:" }</p>
            </div>
            <ul class="text-sm mt-2 list-disc pl-5">
                { for urls.iter().map(|url| html! {
                    <li class="text-left">
                        <a href={url.clone()} class="text-blue-400" target="_blank" rel="noopener noreferrer">{ url }</a>
                    </li>
                }) }
            </ul>
        </div>
    }
}

fn card(card: &CardView) -> Html {
    html! {
        <div key={card.key.clone()} class="card relative bg-gray-800 p-4 rounded-2xl shadow-lg transition transform hover:scale-101 duration-200">
            <div class="icon-container absolute top-4 right-4">
                <Icon glyph={card.badge} class={classes!("icon", "text-blue-500")} />
            </div>
            <div class="question flex items-start space-x-2 pr-10 mb-4">
                <Icon glyph={Glyph::Search} class={classes!("text-blue-500", "mt-1")} />
                <p class="mb-2 font-semibold text-left">{ card.question }</p>
            </div>
            <div class="flex items-start space-x-2 pr-10 mb-6">
                <Icon glyph={Glyph::Idea} class={classes!("text-yellow-500", "mt-1")} />
                <div class="answer text-left text-gray-200">{ card.answer.to_html() }</div>
            </div>
            if let Some(urls) = card.references {
                { references(urls) }
            }
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub history: History,
    #[prop_or_default]
    pub loading: bool,
}

/// Question/answer history, newest last. Answers are injected as-is, see
/// [`TrustedHtml`].
#[function_component(Answer)]
pub fn answer(props: &Props) -> Html {
    let view = AnswerView::new(&props.history, props.loading);

    html! {
        <div class="answers flex flex-col items-center justify-center w-full max-w-4xl p-6 space-y-6 h-full">
            if view.loading {
                <div class="loader" role="progressbar" aria-busy="true"></div>
            }
            if view.is_empty() {
                <p class="placeholder text-gray-500"></p>
            } else {
                <div class="cards flex flex-col space-y-12 w-full max-w-4xl">
                    { for view.cards.iter().map(card) }
                </div>
            }
        </div>
    }
}
