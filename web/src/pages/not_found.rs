use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found flex flex-col items-center p-6 space-y-4">
            <p class="text-gray-500">{ "Nothing here." }</p>
            <Link<Route> to={Route::Home}>{ "Back to answers" }</Link<Route>>
        </div>
    }
}
