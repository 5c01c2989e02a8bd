//! Update function for the certificate request component.
//!
//! Elm-style: receives the component state, the `Context` and a `Msg`, mutates
//! the workflow accordingly and returns whether the view should re-render.
//! Network work is spawned with `spawn_local`; its outcome comes back as a
//! `*Finished` / `CatalogLoaded` message.

use gloo_console::{error, log};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::api;
use super::download;
use super::messages::Msg;
use super::state::CertificateRequestComponent;

pub fn update(
    component: &mut CertificateRequestComponent,
    ctx: &Context<CertificateRequestComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::CatalogLoaded(result) => {
            if let Err(e) = &result {
                error!(format!("Error fetching templates: {}", e));
            }
            component.workflow.apply_catalog(result);

            let ignored = &component.workflow.catalog().ignored;
            if !ignored.is_empty() {
                log!(format!(
                    "Ignoring unknown catalog entries: {}",
                    ignored.join(", ")
                ));
            }
            true
        }
        Msg::UpdateField(field, value) => {
            component.workflow.update_field(field, value);
            true
        }
        Msg::SelectTemplate(template) => {
            component.workflow.select_template(template);
            true
        }
        Msg::SelectStyle(style) => {
            component.workflow.select_style(style);
            true
        }
        Msg::Generate => {
            // Refused while busy or invalid; the workflow has set the message.
            let Some(pending) = component.workflow.begin_generate() else {
                return true;
            };

            let link = ctx.link().clone();
            let api_base = component.api_base.clone();
            spawn_local(async move {
                let result = api::request_generation(&api_base, &pending.request).await;
                if let Err(e) = &result {
                    error!(format!("Error generating certificate: {}", e));
                }
                link.send_message(Msg::GenerateFinished {
                    ticket: pending.ticket,
                    result,
                });
            });
            true
        }
        Msg::GenerateFinished { ticket, result } => {
            let accepted = component.workflow.finish_generate(ticket, result);
            if !accepted {
                log!("Discarding completion of a superseded generate request");
            }
            accepted
        }
        Msg::Download => {
            let Some(target) = component.workflow.begin_download() else {
                return false;
            };

            let link = ctx.link().clone();
            let api_base = component.api_base.clone();
            spawn_local(async move {
                let result = match api::fetch_certificate(&api_base, &target.remote_id).await {
                    Ok(bytes) => download::save_as(&bytes, &target.file_name),
                    Err(e) => Err(e),
                };
                link.send_message(Msg::DownloadFinished {
                    ticket: target.ticket,
                    result,
                });
            });
            false
        }
        Msg::DownloadFinished { ticket, result } => {
            let failed = result.is_err();
            if let Err(e) = &result {
                error!(format!("Error downloading certificate: {}", e));
            }
            let accepted = component.workflow.finish_download(ticket, result);
            if !accepted {
                log!("Discarding result of a superseded download");
            }
            accepted && failed
        }
        Msg::Reset => {
            component.workflow.reset();
            true
        }
    }
}
