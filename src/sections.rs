use yew::prelude::*;

use crate::tracker::SectionId;

pub mod hero;
pub mod about;
pub mod services;
pub mod team;
pub mod testimonials;
pub mod clients;
pub mod contact;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    /// Hands the mounted section element to the page's section tracker.
    pub register: Callback<(SectionId, NodeRef)>,
}

/// Registers the section once it is mounted and returns the ref to attach
/// to its `<section>` element.
#[hook]
pub fn use_section_registration(section: SectionId, register: &Callback<(SectionId, NodeRef)>) -> NodeRef {
    let node = use_node_ref();
    {
        let node = node.clone();
        let register = register.clone();
        use_effect_with_deps(move |_| {
            register.emit((section, node));
            || ()
        }, ());
    }
    node
}

#[derive(Properties, PartialEq)]
pub struct SectionTitleProps {
    pub lead: AttrValue,
    pub accent: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub light: bool,
}

#[function_component(SectionTitle)]
pub fn section_title(props: &SectionTitleProps) -> Html {
    html! {
        <div class={classes!("section-title", props.light.then(|| "light"))}>
            <h2>{props.lead.clone()}{" "}<span class="accent">{props.accent.clone()}</span></h2>
            <div class="title-bar"></div>
            if let Some(subtitle) = &props.subtitle {
                <p>{subtitle.clone()}</p>
            }
        </div>
    }
}
