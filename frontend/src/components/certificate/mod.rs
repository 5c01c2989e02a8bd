//! Certificate request form: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, view rendering,
//! HTTP calls and the browser download.
//!
//! On first render the template catalog is fetched once; a failure degrades to
//! an empty catalog and never blocks the form.

use yew::platform::spawn_local;
use yew::prelude::*;

mod api;
mod download;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::CertificateRequestProps;
pub use state::CertificateRequestComponent;

impl Component for CertificateRequestComponent {
    type Message = Msg;
    type Properties = CertificateRequestProps;

    fn create(ctx: &Context<Self>) -> Self {
        CertificateRequestComponent::new(ctx.props())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let link = ctx.link().clone();
            let api_base = self.api_base.clone();
            spawn_local(async move {
                let result = api::fetch_catalog(&api_base).await;
                link.send_message(Msg::CatalogLoaded(result));
            });
        }
    }
}
