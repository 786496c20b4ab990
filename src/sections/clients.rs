use yew::prelude::*;

use super::{use_section_registration, SectionProps, SectionTitle};
use crate::content::{CLIENTS, LOCATIONS};
use crate::tracker::SectionId;

#[function_component(ClientsSection)]
pub fn clients_section(props: &SectionProps) -> Html {
    let section_ref = use_section_registration(SectionId::Clients, &props.register);

    html! {
        <section id={SectionId::Clients.as_str()} ref={section_ref} class="page-section">
            <style>
                {r#"
                .client-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(9rem, 1fr));
                    gap: 2rem;
                    margin-bottom: 4rem;
                }
                .client-tile {
                    text-align: center;
                    padding: 1.5rem;
                }
                .client-tile img {
                    width: 3rem;
                    height: 3rem;
                    object-fit: cover;
                    border-radius: 50%;
                }
                .client-tile h3 {
                    font-size: 0.9rem;
                    font-weight: 500;
                }
                .client-quote {
                    text-align: center;
                    background: #F8F9FA;
                    border-radius: 8px;
                    padding: 1rem;
                    max-width: 36rem;
                    margin: 0 auto;
                }
                .locations {
                    text-align: center;
                    margin-top: 5rem;
                }
                .location-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
                    gap: 1.5rem;
                    text-align: left;
                }
                .location-card {
                    background: #F8F9FA;
                    border-radius: 12px;
                    padding: 1.5rem;
                    box-shadow: 0 4px 10px rgba(0, 0, 0, 0.06);
                }
                .location-card a {
                    color: #E6AF2E;
                    font-weight: 500;
                }
                "#}
            </style>
            <div class="container">
                <SectionTitle
                    lead="Our"
                    accent="Clients"
                    subtitle="We are proud to provide legal counsel to a diverse range of businesses and organizations across various industries."
                />
                <div class="client-grid">
                    { for CLIENTS.iter().map(|client| html! {
                        <div key={client.name} class="card client-tile">
                            <img src={client.logo} alt={format!("{} logo", client.name)} loading="lazy" />
                            <h3>{client.name}</h3>
                        </div>
                    }) }
                </div>
                <div class="client-quote">
                    <p><em>{"\"We trust this firm with our legal matters. Their expertise and dedication are unmatched.\""}</em></p>
                    <p><strong>{"CEO, Rivigo"}</strong></p>
                </div>

                <div class="locations">
                    <h3>{"Office "}<span class="accent">{"Locations"}</span></h3>
                    <p class="muted">{"We are available at the following locations; you can come and take help from us without any hesitation."}</p>
                    <div class="location-grid">
                        { for LOCATIONS.iter().map(|location| html! {
                            <div key={location.city} class="location-card">
                                <h4><i class="fas fa-map-marker-alt"></i>{" "}{location.city}</h4>
                                <p>{location.address}</p>
                                <p>{location.phone}</p>
                                <a href={location.directions} target="_blank" rel="noopener noreferrer">
                                    {"Get Directions"}
                                </a>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
