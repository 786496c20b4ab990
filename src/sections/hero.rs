use yew::prelude::*;

use super::{use_section_registration, SectionProps};
use crate::scroll::scroll_to_section;
use crate::tracker::SectionId;

const HIGHLIGHTS: [(&str, &str); 3] = [
    ("fas fa-balance-scale", "Skilled Litigation"),
    ("fas fa-landmark", "Trusted Counsel"),
    ("fas fa-shield-alt", "Client Protection"),
];

fn go_to(section: SectionId) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| scroll_to_section(section))
}

#[function_component(HeroSection)]
pub fn hero_section(props: &SectionProps) -> Html {
    let section_ref = use_section_registration(SectionId::Hero, &props.register);

    html! {
        <section id={SectionId::Hero.as_str()} ref={section_ref} class="hero">
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    color: #fff;
                    background:
                        linear-gradient(rgba(10, 36, 99, 0.92), rgba(10, 36, 99, 0.92)),
                        url('https://images.unsplash.com/photo-1454165804606-c3d57bc86b40?auto=format&fit=crop&w=1740&q=80') center / cover;
                }
                .hero-content {
                    max-width: 48rem;
                    margin: 0 auto;
                    padding: 6rem 1.5rem 4rem;
                    text-align: center;
                }
                .hero h1 {
                    font-family: Georgia, serif;
                    font-size: clamp(2.25rem, 5vw, 3.75rem);
                    line-height: 1.2;
                    margin-bottom: 1.5rem;
                }
                .hero h1 .accent { color: #E6AF2E; }
                .hero-subtitle {
                    font-size: 1.2rem;
                    opacity: 0.9;
                    margin-bottom: 2.5rem;
                }
                .hero-actions {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1rem;
                    margin-bottom: 3rem;
                }
                .hero-cta {
                    background: #E6AF2E;
                    color: #0A2463;
                    font-weight: bold;
                    border: none;
                    border-radius: 6px;
                    padding: 0.8rem 2rem;
                    cursor: pointer;
                }
                .hero-secondary {
                    background: transparent;
                    color: #fff;
                    border: 2px solid #fff;
                    border-radius: 6px;
                    font-weight: bold;
                    padding: 0.8rem 2rem;
                    cursor: pointer;
                }
                .hero-highlights {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr));
                    gap: 0.75rem;
                }
                .hero-highlight {
                    background: rgba(255, 255, 255, 0.1);
                    border-radius: 8px;
                    padding: 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.75rem;
                }
                .hero-highlight i { color: #E6AF2E; }
                .hero-down {
                    position: absolute;
                    bottom: 2.5rem;
                    left: 50%;
                    transform: translateX(-50%);
                    width: 3.5rem;
                    height: 3.5rem;
                    border-radius: 50%;
                    border: 2px solid rgba(255, 255, 255, 0.8);
                    background: rgba(10, 36, 99, 0.6);
                    color: #fff;
                    cursor: pointer;
                }
                "#}
            </style>
            <div class="hero-content">
                <h1>
                    <span class="accent">{"Legal Excellence"}</span>{","}<br/>
                    {"Personalized Approach"}
                </h1>
                <p class="hero-subtitle">
                    {"Dedicated to providing exceptional legal counsel with integrity, expertise, and commitment to your success. Our team brings over 15 years of experience to your most challenging legal matters."}
                </p>
                <div class="hero-actions">
                    <button class="hero-cta" onclick={go_to(SectionId::Contact)}>
                        {"Schedule Consultation"}
                    </button>
                    <button class="hero-secondary" onclick={go_to(SectionId::Services)}>
                        {"Learn About Services"}
                    </button>
                </div>
                <div class="hero-highlights">
                    { for HIGHLIGHTS.iter().map(|(icon, text)| html! {
                        <div class="hero-highlight">
                            <i class={*icon}></i>
                            <span>{*text}</span>
                        </div>
                    }) }
                </div>
            </div>
            <button class="hero-down" aria-label="Scroll to about" onclick={go_to(SectionId::About)}>
                <i class="fas fa-chevron-down"></i>
            </button>
        </section>
    }
}
