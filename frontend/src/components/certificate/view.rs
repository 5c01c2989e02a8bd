//! View rendering for the certificate request form.
//!
//! Layout: a header, the details card (field grid, template and style cards,
//! status banner, action row) and a static "How it works" card. While a
//! generation is in flight the action row is replaced by a progress indicator.

use common::api::LOGO_PATH;
use common::model::certificate::FormField;
use common::model::template::{CertificateStyle, TemplateKind};
use common::workflow::CatalogStatus;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::CertificateRequestComponent;
use crate::field_grid::FieldGrid;

pub fn view(component: &CertificateRequestComponent, ctx: &Context<CertificateRequestComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="container">
            { build_header() }
            <div class="card">
                <h2>{"Volunteer Details"}</h2>
                <form onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
                    { build_fields(component, link) }
                    { build_template_cards(component, link) }
                    { build_style_cards(component, link) }
                    { build_status(component) }
                    <div style="text-align: center; margin-top: 30px;">
                        { build_actions(component, link) }
                    </div>
                </form>
            </div>
            { build_how_it_works() }
        </div>
    }
}

fn build_header() -> Html {
    html! {
        <div class="header">
            <div class="logo">
                <img src={LOGO_PATH} alt="Akshar Paaul Logo" class="logo-image" />
                <div class="logo-text">
                    <span class="akshar">{"AKSHAR"}</span>{" "}<span class="paaul">{"PAAUL"}</span>
                </div>
            </div>
            <h1>{"Certificate Generator"}</h1>
        </div>
    }
}

/// Two inputs per row, in `FormField::ALL` order.
fn build_fields(component: &CertificateRequestComponent, link: &Scope<CertificateRequestComponent>) -> Html {
    FormField::ALL
        .chunks(2)
        .map(|row| {
            html! {
                <FieldGrid columns={2}>
                    { for row.iter().map(|field| build_input(component, link, *field)) }
                </FieldGrid>
            }
        })
        .collect::<Html>()
}

fn build_input(
    component: &CertificateRequestComponent,
    link: &Scope<CertificateRequestComponent>,
    field: FormField,
) -> Html {
    let value = component.workflow.form().get(field).to_string();
    let min = (field == FormField::Duration).then_some("1");

    html! {
        <div class="form-group">
            <label for={field.id()}>{field.label()}</label>
            <input
                type={field.input_type()}
                id={field.id()}
                name={field.id()}
                value={value}
                placeholder={field.placeholder()}
                min={min}
                required={field.required()}
                oninput={link.callback(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::UpdateField(field, input.value())
                })}
            />
        </div>
    }
}

/// Notice for a catalog that is still loading or failed to load.
fn catalog_notice(status: &CatalogStatus) -> Html {
    match status {
        CatalogStatus::Pending => html! { <p class="catalog-notice">{"Loading templates..."}</p> },
        CatalogStatus::Unavailable(_) => html! {
            <p class="catalog-notice">
                {"Template list unavailable; the current selection will be used."}
            </p>
        },
        CatalogStatus::Loaded => html! {},
    }
}

fn option_card(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    selected: bool,
    onclick: Callback<MouseEvent>,
) -> Html {
    html! {
        <div class={classes!("option-card", selected.then_some("selected"))} onclick={onclick}>
            <div class="option-icon">{icon}</div>
            <h3>{title}</h3>
            <p>{description}</p>
        </div>
    }
}

fn build_template_cards(
    component: &CertificateRequestComponent,
    link: &Scope<CertificateRequestComponent>,
) -> Html {
    let workflow = &component.workflow;
    let templates = &workflow.catalog().templates;

    html! {
        <div class="selection">
            <h3>{"Certificate Template"}</h3>
            { catalog_notice(workflow.catalog_status()) }
            <FieldGrid columns={templates.len()}>
                { for templates.iter().copied().map(|kind: TemplateKind| option_card(
                    kind.icon(),
                    kind.title(),
                    kind.description(),
                    workflow.selected_template() == kind,
                    link.callback(move |_| Msg::SelectTemplate(kind)),
                )) }
            </FieldGrid>
        </div>
    }
}

fn build_style_cards(
    component: &CertificateRequestComponent,
    link: &Scope<CertificateRequestComponent>,
) -> Html {
    let workflow = &component.workflow;
    let styles = &workflow.catalog().styles;

    html! {
        <div class="selection">
            <h3>{"Certificate Style"}</h3>
            <FieldGrid columns={styles.len()}>
                { for styles.iter().copied().map(|style: CertificateStyle| option_card(
                    style.icon(),
                    style.title(),
                    style.description(),
                    workflow.selected_style() == style,
                    link.callback(move |_| Msg::SelectStyle(style)),
                )) }
            </FieldGrid>
        </div>
    }
}

fn build_status(component: &CertificateRequestComponent) -> Html {
    match component.workflow.status() {
        Some(status) => html! {
            <div class={status.kind.css_class()}>{ status.text.clone() }</div>
        },
        None => html! {},
    }
}

fn build_actions(component: &CertificateRequestComponent, link: &Scope<CertificateRequestComponent>) -> Html {
    let workflow = &component.workflow;

    if workflow.is_busy() {
        return html! {
            <div class="loading">
                <div class="spinner"></div>
                <span style="margin-left: 10px;">{"Generating certificate..."}</span>
            </div>
        };
    }

    html! {
        <div class="btn-group">
            <button
                type="button"
                class="btn"
                disabled={!workflow.can_submit()}
                onclick={link.callback(|_| Msg::Generate)}
            >
                {"Generate Certificate"}
            </button>
            {
                if workflow.can_download() {
                    html! {
                        <button
                            type="button"
                            class="btn btn-success"
                            onclick={link.callback(|_| Msg::Download)}
                        >
                            {"Download Certificate"}
                        </button>
                    }
                } else {
                    html! {}
                }
            }
            <button
                type="button"
                class="btn btn-secondary"
                onclick={link.callback(|_| Msg::Reset)}
            >
                {"Reset Form"}
            </button>
        </div>
    }
}

fn how_it_works_step(icon: &'static str, title: &'static str, text: &'static str) -> Html {
    html! {
        <div style="text-align: center;">
            <div style="font-size: 3rem; margin-bottom: 15px;">{icon}</div>
            <h3>{title}</h3>
            <p>{text}</p>
        </div>
    }
}

fn build_how_it_works() -> Html {
    html! {
        <div class="card">
            <h2>{"How It Works"}</h2>
            <FieldGrid columns={3}>
                { how_it_works_step(
                    "📝",
                    "1. Fill Details",
                    "Enter the volunteer's information including name, duration, and organization",
                ) }
                { how_it_works_step(
                    "✨",
                    "2. Generate Certificate",
                    "Click generate to create a beautiful certificate with your details",
                ) }
                { how_it_works_step(
                    "📄",
                    "3. Download PDF",
                    "Download your certificate as a professional PDF document",
                ) }
            </FieldGrid>
        </div>
    }
}
