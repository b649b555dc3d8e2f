#![deny(unused_crate_dependencies)]
// Fix for html! macro doing unit value assignments. (yew 0.19.3)
#![allow(clippy::let_unit_value)]

mod components;
mod config;
mod consts;
mod logger;
pub mod routes;
pub mod routing;
pub mod utils;

use std::rc::Rc;

use thiserror::Error;
use wasm_bindgen::prelude::*;
use yew::start_app_with_props_in_element;

pub use config::{Config, Mountpoint};

use consts::TITLE_BASE;
use routes::App;
use routing::TableError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid route table: {0}")]
    Table(#[from] TableError),
    #[error("cannot find element with id {0:?}")]
    MissingMountpoint(String),
    #[error("document has no body")]
    MissingBody,
}

#[wasm_bindgen]
pub fn run(config: JsValue) -> Result<(), JsValue> {
    let config = serde_wasm_bindgen::from_value(config)
        .map_err(|err| JsValue::from_str(&format!("invalid config: {}", err)))?;

    run_with_config(config).map_err(|err| JsValue::from_str(&err.to_string()))
}

pub fn run_with_config(config: Config) -> Result<(), Error> {
    // SAFETY: Called from a single threaded context. No race conditions can occur.
    unsafe {
        logger::init(config.log_level);
    }

    let table = match routes::table() {
        Ok(table) => table,
        Err(err) => {
            log::error!("Fatal error: {}", err);
            return Err(err.into());
        }
    };

    let document = utils::document();

    let element = match config.mountpoint() {
        Mountpoint::Body => document.body().map(Into::into).ok_or(Error::MissingBody)?,
        Mountpoint::Element(id) => match document.get_element_by_id(id) {
            Some(element) => element,
            None => {
                log::error!("Cannot find element with id {}", id);
                log::error!("Fatal error: Failed to mount app");

                return Err(Error::MissingMountpoint(id.to_owned()));
            }
        },
    };

    let base = config.base();
    log::info!("Mounting app with base path {}", base);

    let props = routes::Props {
        table: Rc::new(table),
        base: Rc::new(base),
    };

    start_app_with_props_in_element::<App>(element, props);

    Ok(())
}

pub struct Title;

impl Title {
    pub fn set(title: &str) {
        utils::document().set_title(&format!("{} - {}", title, TITLE_BASE));
    }

    pub fn clear() {
        utils::document().set_title(TITLE_BASE);
    }
}
