use yew::prelude::*;

use crate::routes::ORGANIZER;
use crate::utils::router::NamedLink;
use crate::Title;

/// Billing report of the tenant.
pub struct Billing;

impl Component for Billing {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Title::set("Billing");

        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div>
                <NamedLink classes="link-inline link-back" name={ORGANIZER}>
                    { "Back to Organizer" }
                </NamedLink>
                <h2>{ "Billing" }</h2>
            </div>
        }
    }
}
