use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    Search,
    Idea,
    Book,
    Globe,
    Link,
}

impl Glyph {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Idea => "idea",
            Self::Book => "book",
            Self::Globe => "globe",
            Self::Link => "link",
        }
    }

    fn font_awesome(&self) -> &'static str {
        match self {
            Self::Search => "fa-magnifying-glass",
            Self::Idea => "fa-lightbulb",
            Self::Book => "fa-book",
            Self::Globe => "fa-globe",
            Self::Link => "fa-link",
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub glyph: Glyph,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &Props) -> Html {
    let class = classes!("fa-solid", props.glyph.font_awesome(), props.class.clone());

    html! {
        <i {class} data-glyph={props.glyph.name()} aria-hidden="true"></i>
    }
}
