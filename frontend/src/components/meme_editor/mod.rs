//! Meme editor: root module wiring the Yew `Component` implementation with
//! submodules for state, update logic, view rendering, export and helpers.
//!
//! On first render the template list is requested from the listing API. A
//! failed request is logged and leaves the list empty, so the initial image
//! stays in place and "new image" does nothing.

use yew::platform::spawn_local;
use yew::prelude::*;

mod export;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

use crate::config;
use helpers::fetch_templates;
pub use messages::Msg;
pub use props::MemeEditorProps;
pub use state::MemeEditorComponent;

impl Component for MemeEditorComponent {
    type Message = Msg;
    type Properties = MemeEditorProps;

    fn create(ctx: &Context<Self>) -> Self {
        let initial_image = ctx
            .props()
            .initial_image
            .as_deref()
            .unwrap_or(config::DEFAULT_IMAGE_URL);
        MemeEditorComponent::new(initial_image)
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let url = ctx
                .props()
                .templates_url
                .as_deref()
                .unwrap_or(config::TEMPLATES_URL)
                .to_string();
            let link = ctx.link().clone();
            spawn_local(async move {
                match fetch_templates(&url).await {
                    Ok(templates) => link.send_message(Msg::TemplatesLoaded(templates)),
                    Err(err) => link.send_message(Msg::TemplatesFailed(err)),
                }
            });
        }
    }
}
