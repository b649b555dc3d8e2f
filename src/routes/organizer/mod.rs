mod billing;
mod competitions;
mod players;

pub use billing::Billing;
pub use competitions::CompetitionList;
pub use players::PlayerList;

use yew::prelude::*;

use super::{BILLING, COMPETITIONS, PLAYERS};
use crate::utils::router::NamedLink;
use crate::Title;

/// The organizer dashboard.
pub struct Organizer;

impl Component for Organizer {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Title::set("Organizer");

        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div>
                <h2>{ "Organizer" }</h2>
                <div class="navbar">
                    <ul>
                        <li><NamedLink name={PLAYERS}>{ "Players" }</NamedLink></li>
                        <li><NamedLink name={COMPETITIONS}>{ "Competitions" }</NamedLink></li>
                        <li><NamedLink name={BILLING}>{ "Billing" }</NamedLink></li>
                    </ul>
                </div>
            </div>
        }
    }
}
