use yew::prelude::*;
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::config;
use crate::content::FIRM_NAME;
use crate::scroll::{scroll_offset, scroll_to_section};
use crate::tracker::SectionId;

const NAV_SECTIONS: [SectionId; 4] = [
    SectionId::About,
    SectionId::Services,
    SectionId::Testimonials,
    SectionId::Contact,
];

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub active: SectionId,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();

            let scroll_callback = Closure::wrap(Box::new(move || {
                is_scrolled.set(scroll_offset() > config::HEADER_SCROLLED_THRESHOLD_PX);
            }) as Box<dyn FnMut()>);

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let navigate = {
        let menu_open = menu_open.clone();
        Callback::from(move |section: SectionId| {
            scroll_to_section(section);
            menu_open.set(false);
        })
    };

    let nav_links = |mobile: bool| -> Html {
        html! {
            <>
                { for NAV_SECTIONS.iter().map(|&section| {
                    let navigate = navigate.clone();
                    let onclick = Callback::from(move |_: MouseEvent| navigate.emit(section));
                    html! {
                        <button
                            key={section.as_str()}
                            class={classes!(
                                "nav-link",
                                mobile.then(|| "nav-link-mobile"),
                                (props.active == section).then(|| "active")
                            )}
                            {onclick}
                        >
                            {section.label()}
                        </button>
                    }
                }) }
            </>
        }
    };

    let home = {
        let navigate = navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(SectionId::Hero))
    };

    html! {
        <header class={classes!("site-header", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 50;
                    background: #fff;
                    box-shadow: 0 2px 6px rgba(0, 0, 0, 0.08);
                    transition: padding 0.3s ease;
                }
                .site-header .header-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .site-header.scrolled .header-inner {
                    padding: 0.6rem 1.5rem;
                }
                .brand {
                    font-family: Georgia, serif;
                    font-size: 1.4rem;
                    font-weight: bold;
                    color: #0A2463;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .nav-desktop {
                    display: flex;
                    gap: 2rem;
                }
                .nav-link {
                    background: none;
                    border: none;
                    color: #343A40;
                    font-size: 1rem;
                    cursor: pointer;
                    position: relative;
                    transition: color 0.3s;
                }
                .nav-link:hover, .nav-link.active {
                    color: #E6AF2E;
                }
                .nav-link.active {
                    font-weight: 600;
                }
                .nav-link.active:not(.nav-link-mobile)::after {
                    content: "";
                    position: absolute;
                    left: 0;
                    bottom: -5px;
                    width: 100%;
                    height: 2px;
                    background: #E6AF2E;
                }
                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    font-size: 1.3rem;
                    cursor: pointer;
                }
                .nav-mobile {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    padding: 0 1.5rem 1rem;
                }
                .nav-mobile .nav-link {
                    text-align: left;
                    padding: 0.5rem 0;
                }
                @media (max-width: 768px) {
                    .nav-desktop { display: none; }
                    .burger-menu { display: block; }
                }
                "#}
            </style>
            <div class="header-inner">
                <button class="brand" onclick={home}>{FIRM_NAME}</button>
                <nav class="nav-desktop">
                    { nav_links(false) }
                </nav>
                <button class="burger-menu" onclick={toggle_menu}>
                    <i class={if *menu_open { "fas fa-times" } else { "fas fa-bars" }}></i>
                </button>
            </div>
            if *menu_open {
                <nav class="nav-mobile">
                    { nav_links(true) }
                </nav>
            }
        </header>
    }
}
