use yew::prelude::*;

use super::{use_section_registration, SectionProps, SectionTitle};
use crate::components::cards::TestimonialCard;
use crate::content::TESTIMONIALS;
use crate::tracker::SectionId;

#[function_component(TestimonialsSection)]
pub fn testimonials_section(props: &SectionProps) -> Html {
    let section_ref = use_section_registration(SectionId::Testimonials, &props.register);

    html! {
        <section
            id={SectionId::Testimonials.as_str()}
            ref={section_ref}
            class="page-section testimonials"
            aria-label="Client testimonials"
        >
            <style>
                {r#"
                .testimonials {
                    background:
                        linear-gradient(rgba(10, 36, 99, 0.85), rgba(10, 36, 99, 0.85)),
                        url('https://images.unsplash.com/photo-1589829545856-d10d557cf95f?auto=format&fit=crop&w=1740&q=80') center / cover fixed;
                }
                .testimonial-card {
                    position: relative;
                    padding: 2rem;
                }
                .testimonial-card .quote-mark {
                    position: absolute;
                    top: -1.25rem;
                    left: 1.5rem;
                    color: #E6AF2E;
                    font-size: 2.25rem;
                }
                .testimonial-card blockquote {
                    font-style: italic;
                    color: #374151;
                    margin: 1rem 0 1.5rem;
                }
                .testimonial-author {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .testimonial-author img {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    object-fit: cover;
                    background: #e5e7eb;
                }
                .testimonial-author h4, .testimonial-author p { margin: 0; }
                .rating {
                    color: #E6AF2E;
                    margin-top: 1rem;
                }
                "#}
            </style>
            <div class="container">
                <SectionTitle
                    lead="Client"
                    accent="Testimonials"
                    subtitle="What clients are saying about their experience working with us on their legal matters."
                    light=true
                />
                <div class="card-grid">
                    { for TESTIMONIALS.iter().enumerate().map(|(i, testimonial)| html! {
                        <TestimonialCard key={format!("{}-{}", testimonial.name, i)} {testimonial} />
                    }) }
                </div>
            </div>
        </section>
    }
}
