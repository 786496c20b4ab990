use yew::prelude::*;

use super::{use_section_registration, SectionProps, SectionTitle};
use crate::components::callback_form::CallbackForm;
use crate::content::{MAP_EMBED_URL, OFFICE_ADDRESS};
use crate::tracker::SectionId;

#[function_component(ContactSection)]
pub fn contact_section(props: &SectionProps) -> Html {
    let section_ref = use_section_registration(SectionId::Contact, &props.register);

    html! {
        <section id={SectionId::Contact.as_str()} ref={section_ref} class="page-section">
            <div class="container">
                <SectionTitle
                    lead="Our"
                    accent="Location"
                    subtitle="Visit us at our office in Lucknow for a consultation"
                />
                <div class="map-frame">
                    <iframe
                        src={MAP_EMBED_URL}
                        width="100%"
                        height="100%"
                        style="border: 0;"
                        allowfullscreen=true
                        loading="lazy"
                        referrerpolicy="no-referrer-when-downgrade"
                        title="Office Location Map"
                    ></iframe>
                </div>
                <p class="address">
                    <strong>{"Address: "}</strong>{OFFICE_ADDRESS}
                </p>
                <CallbackForm />
            </div>
        </section>
    }
}
