use yew::{html, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct FieldGridProps {
    pub columns: usize,
    #[prop_or(20)]
    pub gap_px: usize,
    pub children: Children,
}

/// Equal-width CSS grid used for form rows and card lists.
pub struct FieldGrid;

impl Component for FieldGrid {
    type Message = ();
    type Properties = FieldGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        FieldGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = format!(
            "display: grid;
             grid-template-columns: repeat({}, 1fr);
             gap: {}px;
             margin-bottom: 20px;",
            props.columns.max(1),
            props.gap_px
        );

        html! {
            <div class="grid" style={style}>
                { for props.children.iter() }
            </div>
        }
    }
}
