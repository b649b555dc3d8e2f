use yew::prelude::*;

use crate::Title;

pub struct MyPage;

impl Component for MyPage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Title::set("My Page");

        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div>
                <h2>{ "My Page" }</h2>
            </div>
        }
    }
}
