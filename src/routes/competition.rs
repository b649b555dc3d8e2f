use yew::prelude::*;

use super::COMPETITIONS;
use crate::utils::router::NamedLink;
use crate::Title;

/// A single competition of the tenant.
#[derive(Debug)]
pub struct Competition {
    id: String,
}

impl Component for Competition {
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
                <NamedLink classes="link-inline link-back" name={COMPETITIONS}>
                    { "Back to Competitions" }
                </NamedLink>
                <h2>{ "Competition" }</h2>
                <span class="competition-id">{ self.id.clone() }</span>
            </div>
        }
    }
}

fn title(id: &str) -> String {
    format!("Competition {}", id)
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
        assert_eq!(title("42"), "Competition 42");
    }
}
