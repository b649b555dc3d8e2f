use yew::prelude::*;

use crate::routes::ORGANIZER;
use crate::utils::router::NamedLink;
use crate::Title;

pub struct CompetitionList;

impl Component for CompetitionList {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Title::set("Competitions");

        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div>
                <NamedLink classes="link-inline link-back" name={ORGANIZER}>
                    { "Back to Organizer" }
                </NamedLink>
                <h2>{ "Competitions" }</h2>
            </div>
        }
    }
}
