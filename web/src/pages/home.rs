use web_sys::HtmlElement;
use yew::prelude::*;
use yew_hooks::use_timeout;

use medilens_web::config::SCROLL_DELAY_MS;
use medilens_web::seed::load_seed;
use medilens_web::Answer;

#[function_component(Home)]
pub fn home() -> Html {
    let seed = use_memo(|_| load_seed(), ());
    let scroller = use_node_ref();

    // The seed is read once, so one jump to the newest card after the first
    // layout is all this page ever needs.
    {
        let scroller = scroller.clone();
        use_timeout(
            move || match scroller.cast::<HtmlElement>() {
                Some(element) => {
                    log::trace!("home:newest-card height={}", element.scroll_height());
                    element.set_scroll_top(element.scroll_height());
                }
                None => log::debug!("home: no scroller"),
            },
            SCROLL_DELAY_MS,
        );
    }

    html! {
        <div id="upper" class="h-full overflow-y-auto" ref={scroller}>
            <div id="main">
                <Answer history={seed.history.clone()} loading={seed.loading} />
            </div>
        </div>
    }
}
