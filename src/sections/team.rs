use yew::prelude::*;

use super::{use_section_registration, SectionProps, SectionTitle};
use crate::components::cards::AttorneyCard;
use crate::content::ATTORNEYS;
use crate::scroll::scroll_to_section;
use crate::tracker::SectionId;

#[function_component(TeamSection)]
pub fn team_section(props: &SectionProps) -> Html {
    let section_ref = use_section_registration(SectionId::Team, &props.register);

    html! {
        <section id={SectionId::Team.as_str()} ref={section_ref} class="page-section alt-bg">
            <div class="container">
                <div class="section-badge"><span>{"Meet Our Team"}</span></div>
                <SectionTitle
                    lead="Our"
                    accent="Legal Team"
                    subtitle="Meet our experienced attorneys who are dedicated to providing exceptional legal representation and achieving the best outcomes for our clients."
                />
                <div class="card-grid card-grid-4">
                    { for ATTORNEYS.iter().map(|attorney| html! {
                        <AttorneyCard key={attorney.name} {attorney} />
                    }) }
                </div>
                <div class="section-cta">
                    <button
                        class="primary-button"
                        onclick={Callback::from(|_: MouseEvent| scroll_to_section(SectionId::Contact))}
                    >
                        <i class="fas fa-users"></i>{" Join Our Team "}<i class="fas fa-arrow-right"></i>
                    </button>
                </div>
            </div>
        </section>
    }
}
