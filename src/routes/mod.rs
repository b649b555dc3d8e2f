pub mod competition;
pub mod lp;
pub mod mypage;
pub mod organizer;
pub mod player;

use std::rc::Rc;

use yew::prelude::*;

use crate::components::Navbar;
use crate::routing::{Base, Builder, RouteTable, TableError};
use crate::utils::router::{Route, Router, Switch};

use competition::Competition;
use lp::LandingPage;
use mypage::MyPage;
use organizer::{Billing, CompetitionList, Organizer, PlayerList};
use player::Player;

pub const LP: &str = "lp";
pub const MYPAGE: &str = "mypage";
pub const COMPETITION: &str = "competition";
pub const PLAYER: &str = "player";
pub const ORGANIZER: &str = "organizer";
pub const PLAYERS: &str = "players";
pub const COMPETITIONS: &str = "competitions";
pub const BILLING: &str = "billing";
pub const NOT_FOUND: &str = "notfound";

/// The page views of the tenant application.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum View {
    LandingPage,
    MyPage,
    Competition,
    Player,
    Organizer,
    PlayerList,
    CompetitionList,
    Billing,
}

fn routes() -> Builder<View> {
    RouteTable::builder()
        .view("/", LP, View::LandingPage)
        .view("/mypage", MYPAGE, View::MyPage)
        .view("/competition/:competition_id", COMPETITION, View::Competition)
        .view("/player/:player_id", PLAYER, View::Player)
        .view("/organizer", ORGANIZER, View::Organizer)
        .view("/organizer/players", PLAYERS, View::PlayerList)
        .view("/organizer/competitions", COMPETITIONS, View::CompetitionList)
        .view("/organizer/billing", BILLING, View::Billing)
        // Unknown paths land on the landing page.
        .redirect("/:catchall(.*)", NOT_FOUND, "/")
}

/// Builds the route table of the tenant application.
pub fn table() -> Result<RouteTable<View>, TableError> {
    routes().build()
}

#[derive(Debug, Properties)]
pub struct Props {
    pub table: Rc<RouteTable<View>>,
    pub base: Rc<Base>,
}

impl PartialEq for Props {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.table, &other.table) && self.base == other.base
    }
}

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let table = ctx.props().table.clone();
        let base = ctx.props().base.clone();

        html! {
            <Router {table} {base}>
                <div class="main-wrapper">
                    <Navbar />
                    <div class="main">
                        <Switch render={Switch::render(switch)} />
                    </div>
                </div>
            </Router>
        }
    }
}

pub fn switch(route: &Route) -> Html {
    match route.view {
        View::LandingPage => html! { <LandingPage /> },
        View::MyPage => html! { <MyPage /> },
        View::Competition => html! {
            <Competition id={param(route, "competition_id")} />
        },
        View::Player => html! {
            <Player id={param(route, "player_id")} />
        },
        View::Organizer => html! { <Organizer /> },
        View::PlayerList => html! { <PlayerList /> },
        View::CompetitionList => html! { <CompetitionList /> },
        View::Billing => html! { <Billing /> },
    }
}

fn param(route: &Route, name: &str) -> String {
    route.params.get(name).unwrap_or_default().to_owned()
}
