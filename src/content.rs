//! Fixed copy and outbound links rendered by the landing page.

pub const BRAND_NAME: &str = "UK Work Connect Group";
pub const BRAND_SHORT: &str = "UK Work Connect";
pub const BRAND_MONOGRAM: &str = "UKC";

pub const HERO_TITLE_LINES: [&str; 2] = ["Together, we can turn your", "career goals into reality"];
pub const HERO_SUBTITLE: &str =
    "We provide tailored solutions to help you meet your career goals and achieve success";

pub const INTRO_TITLE: &str = "Expert Consulting Services";
pub const INTRO_TEXT: &str = "Welcome to UK Work Connect Group, your trusted source for expert consulting services throughout the UK. We provide tailored solutions to help you meet your career goals and achieve success, no matter where you are located.";

pub const BANNER_TEXT: &str = "Be the part of our Success Story";

pub const ABOUT_IMAGE: &str = "https://images.unsplash.com/photo-1650784854945-264d5b0b6b07";
pub const MISSION_PARAGRAPHS: [&str; 2] = [
    "Our goal at UK Work Connect Group is to empower job seekers with the right guidance and support to secure opportunities in the UK, US and Dubai. As a freelance service provider, our team offers comprehensive assistance to help you land your next role and enhance your professional profile. With 20 years of industry expertise, our team efficiently delivers high-quality hiring and staffing support tailored specifically to the international job market.",
    "Leveraging 20 years of industry experience, our professional team excels in recruitment and staffing tailored specifically for the UK job market.",
];

pub const SERVICES_TITLE: &str = "Career Consulting Services for Professional and Freshers";

#[derive(Debug, PartialEq)]
pub struct ServiceOffering {
    pub title: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

pub const SERVICES: [ServiceOffering; 4] = [
    ServiceOffering {
        title: "Resume Review",
        image: "https://images.unsplash.com/photo-1698047681432-006d2449c631",
        description: "In today's competitive job market, a standout resume is your key to unlocking new opportunities. We specialize in helping job seekers like you craft resumes that not only capture attention but also leave a lasting impression.",
    },
    ServiceOffering {
        title: "Career Guidance",
        image: "https://images.unsplash.com/photo-1758520144417-e1c432042dec",
        description: "Navigating your career path can be challenging, but with the right guidance, you can achieve your professional goals with confidence. We offer comprehensive career guidance services designed to help you make informed decisions.",
    },
    ServiceOffering {
        title: "Interview Support",
        image: "https://images.unsplash.com/photo-1698047681452-08eba22d0c64",
        description: "Securing an interview is just the beginning. To land the job you want, you need to excel in the interview itself. We offer comprehensive interview support services designed to help you impress potential employers.",
    },
    ServiceOffering {
        title: "Resume Marketing",
        image: "https://images.unsplash.com/photo-1758519288417-d359ac3c494d",
        description: "Creating a stellar resume is only the first step in your job search. We specialize in resume marketing services designed to connect you with potential employers and maximize your chances of landing your dream job.",
    },
];

#[derive(Debug, PartialEq)]
pub struct SocialLink {
    pub label: &'static str,
    pub icon: &'static str,
    pub url: &'static str,
}

// The only published profiles still carry the former DN Consulting handles.
pub const SOCIAL_LINKS: [SocialLink; 2] = [
    SocialLink {
        label: "Instagram",
        icon: "📷",
        url: "https://www.instagram.com/dn_consulting_group_",
    },
    SocialLink {
        label: "LinkedIn",
        icon: "💼",
        url: "https://www.linkedin.com/company/dn-consultinggroup",
    },
];

pub const CONTACT_TITLE: &str = "Better yet, Give us a call or drop an email";
pub const CONTACT_TEXT: &str = "We value our customers! Please feel free to call us during our normal business hours or send us a message or email.";

pub const WHATSAPP_URL: &str = "https://wa.me/447407832548";
pub const EMAIL_ADDRESS: &str = "ukworkconnect@gmail.com";
pub const PHONE_DISPLAY: &str = "+44-7407832548";
pub const PHONE_DIAL: &str = "+447407832548";

pub const OPENING_HOURS: [(&str, &str); 1] = [("Mon - Sun", "09:00 – 17:00")];

pub fn mailto_link() -> String {
    format!("mailto:{}", EMAIL_ADDRESS)
}

pub fn tel_link() -> String {
    format!("tel:{}", PHONE_DIAL)
}

pub fn copyright_line(year: i32) -> String {
    format!("Copyright © {} {} - All Rights Reserved.", year, BRAND_NAME)
}
