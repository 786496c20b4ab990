//! Page copy and the tables the section grids are rendered from.

pub const FIRM_NAME: &str = "Aftab Alam Ansari & Associates";
pub const FIRM_TAGLINE: &str = "Advocates & Legal Consultants";
pub const OFFICE_ADDRESS: &str =
    "Law Office Of Aftab Alam Ansari Advocate, Vibhuti Khand, Gomti Nagar, Lucknow, Uttar Pradesh 226010";
pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3558.143168051921!2d80.9971883150445!3d26.89802898313407!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x399957b5a8b6f4a1%3A0x8a3b6c6b1a3b3b1a!2sLaw%20Office%20Of%20Aftab%20Alam%20Ansari%20Advocate!5e0!3m2!1sen!2sin!4v1620000000000!5m2!1sen!2sin";

pub const DISCLAIMER_TEXT: &str = "The Bar Council of India prohibits advocates from advertising or soliciting in any form. By accessing this website, you confirm that you are seeking information about the firm voluntarily, with no solicitation, advertisement, or inducement by the firm or its members. The site content is for informational purposes only and should not be viewed as solicitation or legal advice. Legal matters should be addressed with a practising legal expert. By continuing to browse, you agree to this and the full disclaimer on the website.";

#[derive(Debug, PartialEq)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub items: &'static [&'static str],
}

pub const SERVICES: &[Service] = &[
    Service {
        icon: "fas fa-building",
        title: "Corporate Law",
        description: "Comprehensive legal solutions for businesses of all sizes, from formation to complex transactions and compliance.",
        items: &[
            "Business Formation & Structuring",
            "Contract Drafting & Negotiation",
            "Mergers & Acquisitions",
            "Corporate Governance",
        ],
    },
    Service {
        icon: "fas fa-gavel",
        title: "Litigation",
        description: "Strategic representation in court proceedings with a proven track record of successful outcomes for clients.",
        items: &[
            "Civil Litigation",
            "Commercial Disputes",
            "Alternative Dispute Resolution",
            "Appellate Advocacy",
        ],
    },
    Service {
        icon: "fas fa-lightbulb",
        title: "Intellectual Property",
        description: "Protection and enforcement of your intellectual property rights in an increasingly competitive marketplace.",
        items: &[
            "Trademark Registration & Protection",
            "Copyright Law",
            "IP Licensing & Transactions",
            "IP Litigation & Enforcement",
        ],
    },
    Service {
        icon: "fas fa-home",
        title: "Real Estate Law",
        description: "Comprehensive legal guidance for all aspects of real estate transactions and property law matters.",
        items: &[
            "Residential & Commercial Transactions",
            "Lease Agreements",
            "Property Disputes",
            "Zoning & Land Use",
        ],
    },
    Service {
        icon: "fas fa-file-contract",
        title: "Estate Planning",
        description: "Personalized estate planning solutions to protect your assets and provide for your loved ones.",
        items: &[
            "Wills & Trusts",
            "Power of Attorney",
            "Probate Administration",
            "Asset Protection Strategies",
        ],
    },
    Service {
        icon: "fas fa-balance-scale",
        title: "Employment Law",
        description: "Expert guidance on employment matters for both employers and employees in today's complex legal landscape.",
        items: &[
            "Employment Contracts",
            "Workplace Discrimination",
            "Wrongful Termination",
            "HR Policy Development",
        ],
    },
];

#[derive(Debug, PartialEq)]
pub struct Attorney {
    pub image: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub bio: &'static str,
    pub linkedin: Option<&'static str>,
    pub twitter: Option<&'static str>,
    pub email: Option<&'static str>,
}

pub const ATTORNEYS: &[Attorney] = &[
    Attorney {
        image: "https://images.unsplash.com/photo-1560250097-0b93528c311a?auto=format&fit=crop&w=687&q=80",
        name: "James Wilson",
        title: "Founding Partner",
        bio: "With over 15 years of experience, James has established a reputation for excellence in corporate law and intellectual property. Harvard Law School graduate and recognized by Super Lawyers 2018-2023.",
        linkedin: Some("#"),
        twitter: Some("#"),
        email: Some("james@wilsonlaw.com"),
    },
    Attorney {
        image: "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?auto=format&fit=crop&w=688&q=80",
        name: "Sarah Johnson",
        title: "Senior Associate",
        bio: "Sarah specializes in litigation and employment law. With her background in both corporate and non-profit sectors, she brings valuable insights to complex cases. Yale Law School graduate.",
        linkedin: Some("#"),
        twitter: None,
        email: Some("sarah@wilsonlaw.com"),
    },
    Attorney {
        image: "https://images.unsplash.com/photo-1564564321837-a57b7070ac4f?auto=format&fit=crop&w=687&q=80",
        name: "Michael Chen",
        title: "Partner",
        bio: "Michael's expertise in real estate law and estate planning has helped numerous clients protect their assets and secure their futures. Columbia Law School graduate with 10 years of experience.",
        linkedin: Some("#"),
        twitter: Some("#"),
        email: Some("michael@wilsonlaw.com"),
    },
    Attorney {
        image: "https://images.unsplash.com/photo-1580894732444-8ecded7900cd?auto=format&fit=crop&w=1170&q=80",
        name: "Alexandra Davis",
        title: "Associate",
        bio: "Alexandra focuses on intellectual property and technology law. Her background in computer science provides her with unique insights into tech-related legal matters. Stanford Law School graduate.",
        linkedin: Some("#"),
        twitter: None,
        email: Some("alexandra@wilsonlaw.com"),
    },
];

#[derive(Debug, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub rating: f32,
    pub image: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Hi, I am Roli Mehrotra. My Matrimonial Dispute was resolved by Aftab Sir in 06 Months. Thanks to Aftab Sir.",
        name: "Roli Mehrotra",
        title: "Client",
        rating: 5.0,
        image: "https://i.ibb.co/WvZGSXkh/IMG-20250130-WA0040.jpg",
    },
    Testimonial {
        quote: "Competent lawyer with professional approach to his work and client. My experience with him in a civil suit was quite satisfactory. He understands and adjusts himself for his clients requirements and believes in results.",
        name: "Srikant Verma",
        title: "Client",
        rating: 5.0,
        image: "https://i.ibb.co/Lzqr2Qxd/IMG-20250201-WA0001.jpg",
    },
    Testimonial {
        quote: "Hi, I am Mumtaz. My Civil Dispute Of Arbitration and Conciliation Matter was Resolved By Aftab Sir. Very Thanks to Aftab Sir.",
        name: "Mumtaz",
        title: "Client",
        rating: 5.0,
        image: "https://i.ibb.co/dsZTBbWM/IMG-20250130-WA0041.jpg",
    },
];

#[derive(Debug, PartialEq)]
pub struct Client {
    pub logo: &'static str,
    pub name: &'static str,
}

pub const CLIENTS: &[Client] = &[
    Client { logo: "https://i.ibb.co/bjjn9jMs/1.jpg", name: "Travel Agency" },
    Client { logo: "https://i.ibb.co/Fbs9tLJN/7.jpg", name: "Maurya Krishi & Steels" },
    Client { logo: "https://i.ibb.co/FbvjWCHH/3.jpg", name: "The Desire Company" },
    Client { logo: "https://i.ibb.co/230yZgxd/4.jpg", name: "Avtar Steels" },
    Client { logo: "https://i.ibb.co/s9tb8g0D/5.jpg", name: "Jindal Steel & Power" },
    Client { logo: "https://i.ibb.co/JjvxSJBP/6.jpg", name: "Rivigo" },
];

#[derive(Debug, PartialEq)]
pub struct Location {
    pub city: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    pub directions: &'static str,
}

pub const LOCATIONS: &[Location] = &[
    Location {
        city: "Lucknow",
        address: "Vibhuti Khand, Gomti Nagar Opposite High Court Bench Lucknow Gate No. 06",
        phone: "+91 9554505557",
        directions: "https://maps.app.goo.gl/LX6DDXXxRvsRd2RR6?g_st=awb",
    },
    Location {
        city: "Lakhimpur Kheri",
        address: "Civil Court's Near: Neta Ji Subash Chandra Bose Chamber's Compound Lakhimpur Kheri 262701",
        phone: "+91 9554505557",
        directions: "https://maps.app.goo.gl/JZWFQpLHNQUSPHKK7?g_st=awb",
    },
    Location {
        city: "Delhi",
        address: "Tis Hazaari Court Near District Bar Association Delhi, New Delhi 110054",
        phone: "+91 9554505557",
        directions: "https://maps.app.goo.gl/jvA5TVHaArU4T7aw5?g_st=awb",
    },
];

/// Full and half stars for a rating, clamped to 0..=5.
pub fn star_counts(rating: f32) -> (usize, bool) {
    let rating = if rating.is_nan() { 0.0 } else { rating.clamp(0.0, 5.0) };
    let full = rating.floor();
    (full as usize, rating - full >= 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_counts_clamp_and_round_down() {
        assert_eq!(star_counts(5.0), (5, false));
        assert_eq!(star_counts(4.5), (4, true));
        assert_eq!(star_counts(4.4), (4, false));
        assert_eq!(star_counts(0.0), (0, false));
        assert_eq!(star_counts(7.0), (5, false));
        assert_eq!(star_counts(-2.0), (0, false));
        assert_eq!(star_counts(f32::NAN), (0, false));
    }

    #[test]
    fn tables_have_renderable_entries() {
        assert!(SERVICES.iter().all(|s| !s.title.is_empty() && !s.items.is_empty()));
        assert!(ATTORNEYS.iter().all(|a| !a.name.is_empty() && !a.image.is_empty()));
        assert!(TESTIMONIALS.iter().all(|t| (0.0..=5.0).contains(&t.rating)));
        assert!(CLIENTS.iter().all(|c| c.logo.starts_with("https://")));
        assert!(LOCATIONS.iter().all(|l| l.directions.starts_with("https://")));
    }
}
