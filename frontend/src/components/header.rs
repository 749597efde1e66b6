use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PageHeaderProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub on_back: Option<Callback<()>>,
    #[prop_or_default]
    pub on_sign_out: Option<Callback<()>>,
}

/// Sticky page header shared by every view: title on the left, back and
/// sign-out controls on the right.
#[function_component(PageHeader)]
pub fn page_header(props: &PageHeaderProps) -> Html {
    html! {
        <header class="page-header">
            <div class="container">
                <h1 class="page-title">{props.title.clone()}</h1>
                <div class="header-actions">
                    {if let Some(on_back) = props.on_back.clone() {
                        html! {
                            <button
                                class="btn btn-ghost"
                                onclick={Callback::from(move |_| on_back.emit(()))}
                            >
                                {"Back"}
                            </button>
                        }
                    } else { html! {} }}
                    {if let Some(on_sign_out) = props.on_sign_out.clone() {
                        html! {
                            <button
                                class="btn btn-ghost"
                                onclick={Callback::from(move |_| on_sign_out.emit(()))}
                            >
                                {"Sign out"}
                            </button>
                        }
                    } else { html! {} }}
                </div>
            </div>
        </header>
    }
}
