use web_sys::MouseEvent;
use yew::{html, Component, Context, Html};

use crate::routes::{LP, MYPAGE, ORGANIZER};
use crate::utils::router::{NamedLink, RouterContextExt};

#[derive(Debug)]
pub struct Navbar {
    _priv: (),
}

impl Component for Navbar {
    type Message = Message;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self { _priv: () }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let history = ctx.history();

        match msg {
            Message::Back => history.back(),
            Message::Forward => history.forward(),
        }

        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let back = ctx.link().callback(|_: MouseEvent| Message::Back);
        let forward = ctx.link().callback(|_: MouseEvent| Message::Forward);

        html! {
            <div class="navbar">
                <ul>
                    <li>
                        <button title="Back" onclick={back}>
                            <i aria-hidden="true" class="fa-solid fa-angle-left"></i>
                        </button>
                        <button title="Forward" onclick={forward}>
                            <i aria-hidden="true" class="fa-solid fa-angle-right"></i>
                        </button>
                    </li>
                    <li><NamedLink name={LP}>{ "Home" }</NamedLink></li>
                    <li><NamedLink name={MYPAGE}>{ "My Page" }</NamedLink></li>
                    <li><NamedLink name={ORGANIZER}>{ "Organizer" }</NamedLink></li>
                </ul>
            </div>
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Message {
    Back,
    Forward,
}
