use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt::{self, Debug, Formatter};
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsValue;
use web_sys::MouseEvent;
use yew::context::ContextProvider;
use yew::html::Classes;
use yew::{html, Callback, Children, Component, Context, Html, Properties};

use crate::routes::View;
use crate::routing::{Base, LinkError, Params, RouteMatch, RouteTable};

/// A resolved route of the tenant route table.
pub type Route = RouteMatch<View>;

#[derive(Debug, Properties)]
pub struct Props {
    pub table: Rc<RouteTable<View>>,
    pub base: Rc<Base>,
    pub children: Children,
}

impl PartialEq for Props {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.table, &other.table)
            && self.base == other.base
            && self.children == other.children
    }
}

/// Binds a [`RouteTable`] to the browser history and provides a [`History`] to its children.
pub struct Router {
    history: History,
    _popstate: EventListener,
}

impl Component for Router {
    /// The app-relative location to navigate to.
    type Message = String;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();

        let callback = ctx.link().callback(|location| location);
        let history = History::new(props.table.clone(), props.base.clone(), callback);

        // Back and forward navigation only changes the location, we need to resolve
        // the new location ourselves.
        let popstate = {
            let history = history.clone();
            EventListener::new(&super::window(), "popstate", move |_| history.sync())
        };

        Self {
            history,
            _popstate: popstate,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: String) -> bool {
        self.history.navigate(&msg);

        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let history = self.history.clone();

        html! {
            <ContextProvider<History> context={history}>
                { for ctx.props().children.iter() }
            </ContextProvider<History>>
        }
    }
}

#[derive(Clone, Debug)]
struct State {
    route: Route,
}

/// A handle to the router, available to all components below a [`Router`].
#[derive(Clone)]
pub struct History {
    history: web_sys::History,
    table: Rc<RouteTable<View>>,
    base: Rc<Base>,
    callback: Callback<String>,
    state: Rc<RefCell<State>>,
    // Switches in registered order.
    switches: Rc<RefCell<SwitchList>>,
}

impl History {
    fn new(table: Rc<RouteTable<View>>, base: Rc<Base>, callback: Callback<String>) -> Self {
        let location = base.strip(&super::location());
        let route = table.resolve(&location);

        let history = Self {
            history: super::history(),
            table,
            base,
            callback,
            state: Rc::new(RefCell::new(State {
                route: route.clone(),
            })),
            switches: Rc::new(RefCell::new(SwitchList::new())),
        };

        if route.is_redirect() {
            history.replace_url(&route.path);
        }

        history
    }

    /// Returns the currently active route.
    pub fn current(&self) -> Route {
        self.state.borrow().route.clone()
    }

    /// Navigates to the app-relative `path`, adding a new history entry.
    pub fn push(&self, path: &str) {
        let url = self.url(path);
        log::debug!("History::push {:?}", url);

        if let Err(err) = self
            .history
            .push_state_with_url(&JsValue::NULL, "", Some(&url))
        {
            log::error!("Failed to push history state {:?}: {:?}", url, err);
            return;
        }

        self.callback.emit(path.to_owned());
    }

    /// Navigates to the app-relative `path`, replacing the current history entry.
    pub fn replace(&self, path: &str) {
        if self.replace_url(path) {
            self.callback.emit(path.to_owned());
        }
    }

    /// Navigates to the route `name`.
    pub fn push_named(&self, name: &str, params: &Params) -> Result<(), LinkError> {
        let path = self.href(name, params)?;
        self.push(&path);

        Ok(())
    }

    /// Returns the app-relative path of the route `name`.
    pub fn href(&self, name: &str, params: &Params) -> Result<String, LinkError> {
        self.table.href(name, params)
    }

    /// Returns the browser url of the app-relative `path`.
    pub fn url(&self, path: &str) -> String {
        self.base.join(path)
    }

    pub fn back(&self) {
        if let Err(err) = self.history.back() {
            log::error!("Failed to go back in history: {:?}", err);
        }
    }

    pub fn forward(&self) {
        if let Err(err) = self.history.forward() {
            log::error!("Failed to go forward in history: {:?}", err);
        }
    }

    /// Navigates to the location currently shown by the browser.
    fn sync(&self) {
        let location = self.base.strip(&super::location());
        log::debug!("History::sync {:?}", location);

        self.callback.emit(location);
    }

    /// Resolves `location`, stores the new route and wakes all switches.
    fn navigate(&self, location: &str) {
        let route = self.table.resolve(location);

        if route.is_redirect() {
            self.replace_url(&route.path);
        }

        self.state.borrow_mut().route = route;
        self.switches.borrow().wake();
    }

    fn replace_url(&self, path: &str) -> bool {
        let url = self.url(path);
        log::debug!("History::replace {:?}", url);

        match self
            .history
            .replace_state_with_url(&JsValue::NULL, "", Some(&url))
        {
            Ok(()) => true,
            Err(err) => {
                log::error!("Failed to replace history state {:?}: {:?}", url, err);
                false
            }
        }
    }
}

impl PartialEq for History {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl Debug for History {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("History")
            .field("base", &self.base)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct LinkProps {
    pub children: Children,
    #[prop_or_default]
    pub classes: Classes,
    /// The app-relative path to link to.
    pub to: String,
}

#[derive(Debug)]
pub struct Link {
    _priv: (),
}

impl Component for Link {
    type Message = ();
    type Properties = LinkProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { _priv: () }
    }

    fn update(&mut self, ctx: &Context<Self>, _msg: ()) -> bool {
        ctx.history().push(&ctx.props().to);
        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        // Clicks opening a new tab or window are left to the browser.
        let onclick = ctx.link().batch_callback(|event: MouseEvent| {
            let click = Click {
                button: event.button(),
                ctrl: event.ctrl_key(),
                meta: event.meta_key(),
                shift: event.shift_key(),
                alt: event.alt_key(),
            };

            if click.is_plain() {
                event.prevent_default();
                Some(())
            } else {
                None
            }
        });

        let classes = ctx.props().classes.clone();
        let href = ctx.history().url(&ctx.props().to);

        html! {
            <a class={classes} {href} {onclick}>
                { for ctx.props().children.iter() }
            </a>
        }
    }
}

/// The button and modifier state of a click on a [`Link`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
struct Click {
    button: i16,
    ctrl: bool,
    meta: bool,
    shift: bool,
    alt: bool,
}

impl Click {
    /// Returns `true` for an unmodified primary button click.
    fn is_plain(&self) -> bool {
        self.button == 0 && !(self.ctrl || self.meta || self.shift || self.alt)
    }
}

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct NamedLinkProps {
    pub children: Children,
    #[prop_or_default]
    pub classes: Classes,
    /// The name of the route to link to.
    pub name: &'static str,
    #[prop_or_default]
    pub params: Params,
}

/// A [`Link`] to a route referenced by name.
#[derive(Debug)]
pub struct NamedLink {
    _priv: (),
}

impl Component for NamedLink {
    type Message = ();
    type Properties = NamedLinkProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { _priv: () }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let classes = props.classes.clone();

        match ctx.history().href(props.name, &props.params) {
            Ok(to) => html! {
                <Link {classes} {to}>
                    { for props.children.iter() }
                </Link>
            },
            Err(err) => {
                log::warn!("Cannot link to route {:?}: {}", props.name, err);

                html! {
                    <span class={classes}>
                        { for props.children.iter() }
                    </span>
                }
            }
        }
    }
}

#[derive(Properties)]
pub struct SwitchProps {
    pub render: Rc<dyn Fn(&Route) -> Html>,
}

impl PartialEq for SwitchProps {
    #[allow(clippy::vtable_address_comparisons)]
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.render, &other.render)
    }
}

/// Mounts the view of the current route.
#[derive(Debug)]
pub struct Switch {
    handle: usize,
}

impl Switch {
    pub fn render<F>(f: F) -> Rc<dyn Fn(&Route) -> Html>
    where
        F: Fn(&Route) -> Html + 'static,
    {
        Rc::new(f)
    }
}

impl Component for Switch {
    type Message = ();
    type Properties = SwitchProps;

    fn create(ctx: &Context<Self>) -> Self {
        let history = ctx.history();

        let cb = ctx.link().callback(|_| ());
        let handle = history.switches.borrow_mut().push(cb);

        Self { handle }
    }

    fn update(&mut self, _ctx: &Context<Self>, _msg: ()) -> bool {
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let route = ctx.history().current();
        log::debug!("Mounting route {:?} at {:?}", route.name, route.path);

        (ctx.props().render)(&route)
    }

    fn destroy(&mut self, ctx: &Context<Self>) {
        ctx.history().switches.borrow_mut().remove(self.handle);
    }
}

#[derive(Clone, Debug)]
struct SwitchList {
    list: BTreeMap<usize, Callback<()>>,
    id: usize,
}

impl SwitchList {
    fn new() -> Self {
        Self {
            list: BTreeMap::new(),
            id: 0,
        }
    }

    /// Pushes a new switch to the list and returns a handle to it.
    fn push(&mut self, cb: Callback<()>) -> usize {
        let id = self.id;
        self.id += 1;
        self.list.insert(id, cb);

        id
    }

    fn remove(&mut self, handle: usize) {
        self.list.remove(&handle);
    }

    fn wake(&self) {
        log::debug!("Waking {} waiting switches", self.list.len());

        for cb in self.list.values() {
            cb.emit(());
        }
    }
}

pub trait RouterContextExt {
    fn history(&self) -> History;
}

impl<C> RouterContextExt for Context<C>
where
    C: Component,
{
    fn history(&self) -> History {
        let (h, _) = self
            .link()
            .context::<History>(Callback::noop())
            .expect("no router installed");
        h
    }
}

#[cfg(test)]
mod tests {
    use yew::Callback;

    use super::{Click, SwitchList};

    #[test]
    fn test_click_is_plain() {
        assert!(Click::default().is_plain());

        assert!(!Click { button: 1, ..Default::default() }.is_plain());
        assert!(!Click { button: 2, ..Default::default() }.is_plain());
        assert!(!Click { ctrl: true, ..Default::default() }.is_plain());
        assert!(!Click { meta: true, ..Default::default() }.is_plain());
        assert!(!Click { shift: true, ..Default::default() }.is_plain());
        assert!(!Click { alt: true, ..Default::default() }.is_plain());
    }

    #[test]
    fn test_switch_list() {
        let mut list = SwitchList::new();

        let a = list.push(Callback::noop());
        let b = list.push(Callback::noop());
        assert_ne!(a, b);
        assert_eq!(list.list.len(), 2);

        list.remove(a);
        assert_eq!(list.list.len(), 1);

        // Handles are never reused.
        let c = list.push(Callback::noop());
        assert_ne!(c, a);
        assert_ne!(c, b);

        list.wake();
    }
}
