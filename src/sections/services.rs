use yew::prelude::*;

use super::{use_section_registration, SectionProps, SectionTitle};
use crate::components::cards::ServiceCard;
use crate::content::SERVICES;
use crate::scroll::scroll_to_section;
use crate::tracker::SectionId;

#[function_component(ServicesSection)]
pub fn services_section(props: &SectionProps) -> Html {
    let section_ref = use_section_registration(SectionId::Services, &props.register);

    html! {
        <section id={SectionId::Services.as_str()} ref={section_ref} class="page-section">
            <div class="container">
                <SectionTitle
                    lead="Legal"
                    accent="Services"
                    subtitle={AttrValue::from("We offer comprehensive legal services tailored to meet your specific needs. Our expertise spans multiple practice areas, ensuring you receive exceptional representation.")}
                />
                <div class="card-grid">
                    { for SERVICES.iter().map(|service| html! {
                        <ServiceCard key={service.title} {service} />
                    }) }
                </div>
                <div class="section-cta">
                    <button
                        class="primary-button"
                        onclick={Callback::from(|_: MouseEvent| scroll_to_section(SectionId::Contact))}
                    >
                        {"Discuss Your Legal Needs"}
                    </button>
                </div>
            </div>
        </section>
    }
}
