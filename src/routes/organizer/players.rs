use yew::prelude::*;

use crate::routes::ORGANIZER;
use crate::utils::router::NamedLink;
use crate::Title;

pub struct PlayerList;

impl Component for PlayerList {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Title::set("Players");

        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div>
                <NamedLink classes="link-inline link-back" name={ORGANIZER}>
                    { "Back to Organizer" }
                </NamedLink>
                <h2>{ "Players" }</h2>
            </div>
        }
    }
}
