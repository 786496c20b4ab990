use chrono::Datelike;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::content::{FIRM_NAME, FIRM_TAGLINE};
use crate::scroll::{scroll_to_section, smooth_scroll_to};
use crate::tracker::SectionId;

const FOOTER_LINKS: [SectionId; 4] = [
    SectionId::About,
    SectionId::Services,
    SectionId::Testimonials,
    SectionId::Contact,
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div class="footer-top">
                    <div>
                        <button class="brand" onclick={Callback::from(|_: MouseEvent| scroll_to_section(SectionId::Hero))}>
                            {FIRM_NAME}
                        </button>
                        <p class="muted">{FIRM_TAGLINE}</p>
                    </div>
                    <div class="footer-links">
                        { for FOOTER_LINKS.iter().map(|&section| html! {
                            <button onclick={Callback::from(move |_: MouseEvent| scroll_to_section(section))}>
                                {section.label()}
                            </button>
                        }) }
                        <a href="#">{"Privacy Policy"}</a>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>{format!("© {} {}. All rights reserved.", year, FIRM_NAME)}</p>
                    <div class="footer-social">
                        <a href="#" aria-label="LinkedIn"><i class="fab fa-linkedin-in"></i></a>
                        <a href="#" aria-label="Twitter"><i class="fab fa-twitter"></i></a>
                        <a href="#" aria-label="Facebook"><i class="fab fa-facebook-f"></i></a>
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[function_component(ScrollToTop)]
pub fn scroll_to_top() -> Html {
    let (_, y) = use_window_scroll();

    if y <= config::SCROLL_TO_TOP_THRESHOLD_PX {
        return html! {};
    }

    html! {
        <button
            class="scroll-to-top"
            aria-label="Scroll to top"
            onclick={Callback::from(|_: MouseEvent| smooth_scroll_to(0.0))}
        >
            <i class="fas fa-arrow-up"></i>
        </button>
    }
}
