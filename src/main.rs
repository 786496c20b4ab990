use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use web_sys::HtmlElement;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod content;
mod disclaimer;
mod form;
mod scroll;
mod sections;
mod storage;
mod tracker;

mod components {
    pub mod header;
    pub mod disclaimer_popup;
    pub mod callback_form;
    pub mod cards;
    pub mod footer;
}

use components::{
    header::Header,
    disclaimer_popup::DisclaimerPopup,
    footer::{Footer, ScrollToTop},
};
use sections::{
    hero::HeroSection,
    about::AboutSection,
    services::ServicesSection,
    team::TeamSection,
    testimonials::TestimonialsSection,
    clients::ClientsSection,
    contact::ContactSection,
};
use config::TrackerConfig;
use scroll::scroll_offset;
use tracker::{SectionId, SectionTracker};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <LandingPage /> }
        },
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}


#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    let tracker = use_mut_ref(|| SectionTracker::new(TrackerConfig::default()));
    let active_section = {
        let tracker = tracker.clone();
        use_state_eq(move || tracker.borrow().active())
    };

    let register = {
        let tracker = tracker.clone();
        use_callback(move |(section, node): (SectionId, NodeRef), _| {
            tracker.borrow_mut().register(section, node.cast::<HtmlElement>());
        }, ())
    };

    // Sections register from their own mount effects, which run before this one,
    // so the first evaluation already sees every mounted section.
    {
        let tracker = tracker.clone();
        let active_section = active_section.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();

            let on_scroll = move || {
                let section = tracker.borrow_mut().evaluate(scroll_offset());
                active_section.set(section);
            };

            // Initial check
            on_scroll();

            let scroll_callback = Closure::wrap(Box::new(on_scroll) as Box<dyn FnMut()>);
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

    html! {
        <div class="site">
            <DisclaimerPopup />
            <Header active={*active_section} />

            <HeroSection register={register.clone()} />
            <AboutSection register={register.clone()} />
            <ServicesSection register={register.clone()} />
            <TeamSection register={register.clone()} />
            <TestimonialsSection register={register.clone()} />
            <ClientsSection register={register.clone()} />
            <ContactSection register={register} />

            <Footer />
            <ScrollToTop />
        </div>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
