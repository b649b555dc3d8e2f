use yew::prelude::*;

use super::PLAYERS;
use crate::utils::router::NamedLink;
use crate::Title;

/// The profile of a single player.
#[derive(Debug)]
pub struct Player {
    id: String,
}

impl Component for Player {
    type Message = ();
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let id = ctx.props().id.clone();
        Title::set(&title(&id));

        Self { id }
    }

    fn changed(&mut self, ctx: &Context<Self>) -> bool {
        let id = &ctx.props().id;
        if *id == self.id {
            return false;
        }

        self.id = id.clone();
        Title::set(&title(&self.id));

        true
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div>
                <NamedLink classes="link-inline link-back" name={PLAYERS}>
                    { "Back to Players" }
                </NamedLink>
                <h2>{ "Player" }</h2>
                <span class="player-id">{ self.id.clone() }</span>
            </div>
        }
    }
}

fn title(id: &str) -> String {
    format!("Player {}", id)
}

#[derive(Clone, Debug, PartialEq, Eq, Properties)]
pub struct Props {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::title;

    #[test]
    fn test_title() {
        assert_eq!(title("42"), "Player 42");
    }
}
