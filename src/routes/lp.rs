use yew::prelude::*;

use super::{COMPETITIONS, MYPAGE};
use crate::utils::router::NamedLink;
use crate::Title;

/// The landing page of a tenant.
pub struct LandingPage;

impl Component for LandingPage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Title::clear();

        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="lp">
                <h1>{ "ISUPORTS" }</h1>
                <ul>
                    <li><NamedLink name={MYPAGE}>{ "My Page" }</NamedLink></li>
                    <li><NamedLink name={COMPETITIONS}>{ "Competitions" }</NamedLink></li>
                </ul>
            </div>
        }
    }
}
