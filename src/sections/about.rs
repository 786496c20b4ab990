use yew::prelude::*;

use super::{use_section_registration, SectionProps, SectionTitle};
use crate::tracker::SectionId;

const CREDENTIALS: [(&str, &str, &str, &str); 3] = [
    ("fas fa-user-graduate", "Education", "Harvard Law School, J.D.", "Yale University, B.A."),
    ("fas fa-gavel", "Experience", "15+ Years of Practice", "500+ Cases Handled"),
    ("fas fa-award", "Recognition", "Super Lawyers 2018-2023", "Best Attorneys of America"),
];

#[function_component(AboutSection)]
pub fn about_section(props: &SectionProps) -> Html {
    let section_ref = use_section_registration(SectionId::About, &props.register);

    html! {
        <section id={SectionId::About.as_str()} ref={section_ref} class="page-section alt-bg">
            <style>
                {r#"
                .about-layout {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    gap: 3rem;
                }
                .about-photo {
                    flex: 1 1 18rem;
                    position: relative;
                }
                .about-photo::before {
                    content: "";
                    position: absolute;
                    inset: 0;
                    border: 2px solid #E6AF2E;
                    border-radius: 6px;
                    transform: translate(1rem, 1rem);
                }
                .about-photo img {
                    position: relative;
                    width: 100%;
                    border-radius: 6px;
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.2);
                }
                .about-text {
                    flex: 2 1 24rem;
                    font-size: 1.1rem;
                }
                .about-text h3 {
                    font-family: Georgia, serif;
                    color: #0A2463;
                    font-size: 1.5rem;
                }
                .credentials {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(10rem, 1fr));
                    gap: 1.5rem;
                    margin-top: 2.5rem;
                }
                .credential {
                    text-align: center;
                    padding: 1rem;
                    border-top: 2px solid #E6AF2E;
                }
                .credential i {
                    color: #E6AF2E;
                    font-size: 1.8rem;
                }
                "#}
            </style>
            <div class="container">
                <SectionTitle lead="About" accent="Our Practice" />
                <div class="about-layout">
                    <div class="about-photo">
                        <img
                            src="https://images.unsplash.com/photo-1564564321837-a57b7070ac4f?auto=format&fit=crop&w=1776&q=80"
                            alt="Attorney at Law"
                        />
                    </div>
                    <div class="about-text">
                        <h3>{"A Dedicated Advocate For Your Legal Needs"}</h3>
                        <p>
                            {"With over 15 years of experience, we have established a reputation for providing exceptional legal representation and counsel to individuals and businesses across a wide range of practice areas."}
                        </p>
                        <p>
                            {"Our approach combines rigorous legal analysis with a deep commitment to understanding each client's unique circumstances and objectives."}
                        </p>
                        <div class="credentials">
                            { for CREDENTIALS.iter().map(|(icon, title, first, second)| html! {
                                <div class="credential">
                                    <i class={*icon}></i>
                                    <h4>{*title}</h4>
                                    <p>{*first}<br/>{*second}</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
