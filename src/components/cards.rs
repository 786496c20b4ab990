use yew::prelude::*;

use crate::content::{star_counts, Attorney, Service, Testimonial};

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub service: &'static Service,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let service = props.service;
    html! {
        <div class="card service-card">
            <div class="card-accent"></div>
            <div class="card-body">
                <div class="service-icon">
                    <i class={service.icon}></i>
                </div>
                <h3>{service.title}</h3>
                <p>{service.description}</p>
                <ul class="check-list">
                    { for service.items.iter().map(|item| html! {
                        <li><i class="fas fa-check"></i><span>{*item}</span></li>
                    }) }
                </ul>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AttorneyCardProps {
    pub attorney: &'static Attorney,
}

#[function_component(AttorneyCard)]
pub fn attorney_card(props: &AttorneyCardProps) -> Html {
    let attorney = props.attorney;
    html! {
        <div class="card attorney-card">
            <div class="attorney-photo">
                <img src={attorney.image} alt={attorney.name} loading="lazy" />
                <div class="attorney-social">
                    if let Some(linkedin) = attorney.linkedin {
                        <a href={linkedin} aria-label="LinkedIn"><i class="fab fa-linkedin-in"></i></a>
                    }
                    if let Some(twitter) = attorney.twitter {
                        <a href={twitter} aria-label="Twitter"><i class="fab fa-twitter"></i></a>
                    }
                    if let Some(email) = attorney.email {
                        <a href={format!("mailto:{}", email)} aria-label="Email"><i class="fas fa-envelope"></i></a>
                    }
                </div>
            </div>
            <div class="card-body">
                <h3>{attorney.name}</h3>
                <p class="attorney-title">{attorney.title}</p>
                <p>{attorney.bio}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RatingStarsProps {
    pub rating: f32,
}

#[function_component(RatingStars)]
pub fn rating_stars(props: &RatingStarsProps) -> Html {
    let (full, half) = star_counts(props.rating);
    html! {
        <div class="rating" aria-label={format!("Rating: {} out of 5", props.rating)}>
            { for (0..full).map(|_| html! { <i class="fas fa-star"></i> }) }
            if half {
                <i class="fas fa-star-half-alt"></i>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TestimonialCardProps {
    pub testimonial: &'static Testimonial,
}

#[function_component(TestimonialCard)]
pub fn testimonial_card(props: &TestimonialCardProps) -> Html {
    let testimonial = props.testimonial;
    html! {
        <div class="card testimonial-card">
            <div class="quote-mark"><i class="fas fa-quote-left" aria-hidden="true"></i></div>
            <blockquote>{testimonial.quote}</blockquote>
            <div class="testimonial-author">
                <img src={testimonial.image} alt={format!("{}'s profile", testimonial.name)} loading="lazy" />
                <div>
                    <h4>{testimonial.name}</h4>
                    <p>{testimonial.title}</p>
                </div>
            </div>
            <RatingStars rating={testimonial.rating} />
        </div>
    }
}
