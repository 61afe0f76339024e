//! Localized page copy.
//!
//! Every string is stored unescaped; the page renderer escapes on output.
//! Locales without a table (including disabled ones) fall back to English.

/// A service card in the services section.
#[derive(Debug, Clone, Copy)]
pub struct ServiceCopy {
    pub title: &'static str,
    pub body: &'static str,
}

/// A pricing bundle card.
#[derive(Debug, Clone, Copy)]
pub struct BundleCopy {
    pub name: &'static str,
    pub price: &'static str,
    pub summary: &'static str,
    pub features: &'static [&'static str],
}

/// All user-facing copy for one locale.
#[derive(Debug, Clone)]
pub struct SiteStrings {
    // ==================== Document ====================
    pub site_title: &'static str,
    pub nav_home: &'static str,
    pub nav_team: &'static str,
    pub language_label: &'static str,

    // ==================== Hero ====================
    pub hero_heading: &'static str,
    pub hero_subheading: &'static str,
    pub hero_cta: &'static str,

    // ==================== Services ====================
    pub services_heading: &'static str,
    pub services: &'static [ServiceCopy],

    // ==================== Pricing ====================
    pub pricing_heading: &'static str,
    pub bundles: &'static [BundleCopy],

    // ==================== Contact ====================
    pub contact_heading: &'static str,
    pub contact_name: &'static str,
    pub contact_email: &'static str,
    pub contact_message: &'static str,
    pub contact_submit: &'static str,

    // ==================== Team ====================
    pub team_heading: &'static str,
    pub team_body: &'static str,

    // ==================== Errors ====================
    pub not_found_heading: &'static str,
    pub not_found_body: &'static str,
}

impl SiteStrings {
    /// Copy for a locale code, English when the code has no table.
    pub fn for_code(code: &str) -> &'static SiteStrings {
        match code {
            "sl" => &SLOVENIAN,
            _ => &ENGLISH,
        }
    }
}

static ENGLISH: SiteStrings = SiteStrings {
    site_title: "Northlight Studio",
    nav_home: "Home",
    nav_team: "Team",
    language_label: "Language",

    hero_heading: "Websites that bring you customers",
    hero_subheading: "We design, build and run fast marketing sites for small businesses.",
    hero_cta: "Get a quote",

    services_heading: "What we do",
    services: &[
        ServiceCopy {
            title: "Design",
            body: "Brand-aligned layouts that read well on every screen.",
        },
        ServiceCopy {
            title: "Development",
            body: "Fast, accessible pages with search engines in mind.",
        },
        ServiceCopy {
            title: "Care",
            body: "Hosting, updates and monitoring so you never have to think about it.",
        },
    ],

    pricing_heading: "Bundles",
    bundles: &[
        BundleCopy {
            name: "Starter",
            price: "€490",
            summary: "A one-page site to get you online.",
            features: &["One page", "Contact form", "Basic SEO"],
        },
        BundleCopy {
            name: "Business",
            price: "€1,290",
            summary: "A multi-page site for growing teams.",
            features: &["Up to 6 pages", "Two languages", "Analytics setup"],
        },
        BundleCopy {
            name: "Care plan",
            price: "€59 / month",
            summary: "Ongoing hosting and maintenance.",
            features: &["Managed hosting", "Monthly updates", "Uptime monitoring"],
        },
    ],

    contact_heading: "Tell us about your project",
    contact_name: "Name",
    contact_email: "Email",
    contact_message: "Message",
    contact_submit: "Send",

    team_heading: "Team dashboard",
    team_body: "The team area is coming soon.",

    not_found_heading: "Page not found",
    not_found_body: "The page you are looking for does not exist.",
};

static SLOVENIAN: SiteStrings = SiteStrings {
    site_title: "Northlight Studio",
    nav_home: "Domov",
    nav_team: "Ekipa",
    language_label: "Jezik",

    hero_heading: "Spletne strani, ki vam prinesejo stranke",
    hero_subheading: "Oblikujemo, izdelamo in vzdržujemo hitre predstavitvene strani za mala podjetja.",
    hero_cta: "Pridobite ponudbo",

    services_heading: "Kaj delamo",
    services: &[
        ServiceCopy {
            title: "Oblikovanje",
            body: "Postavitve v skladu z vašo blagovno znamko, berljive na vsakem zaslonu.",
        },
        ServiceCopy {
            title: "Razvoj",
            body: "Hitre in dostopne strani, pripravljene za iskalnike.",
        },
        ServiceCopy {
            title: "Vzdrževanje",
            body: "Gostovanje, posodobitve in nadzor, da vam ni treba skrbeti.",
        },
    ],

    pricing_heading: "Paketi",
    bundles: &[
        BundleCopy {
            name: "Začetni",
            price: "490 €",
            summary: "Enostranska stran za začetek.",
            features: &["Ena stran", "Kontaktni obrazec", "Osnovni SEO"],
        },
        BundleCopy {
            name: "Poslovni",
            price: "1.290 €",
            summary: "Večstranska stran za rastoče ekipe.",
            features: &["Do 6 strani", "Dva jezika", "Nastavitev analitike"],
        },
        BundleCopy {
            name: "Vzdrževanje",
            price: "59 € / mesec",
            summary: "Stalno gostovanje in vzdrževanje.",
            features: &["Upravljano gostovanje", "Mesečne posodobitve", "Nadzor delovanja"],
        },
    ],

    contact_heading: "Povejte nam o svojem projektu",
    contact_name: "Ime",
    contact_email: "E-pošta",
    contact_message: "Sporočilo",
    contact_submit: "Pošlji",

    team_heading: "Nadzorna plošča ekipe",
    team_body: "Območje za ekipo bo kmalu na voljo.",

    not_found_heading: "Strani ni mogoče najti",
    not_found_body: "Stran, ki jo iščete, ne obstaja.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slovenian_table() {
        assert_eq!(SiteStrings::for_code("sl").nav_team, "Ekipa");
    }

    #[test]
    fn test_unknown_and_disabled_fall_back_to_english() {
        assert_eq!(SiteStrings::for_code("hr").nav_team, "Team");
        assert_eq!(SiteStrings::for_code("xx").nav_team, "Team");
    }

    #[test]
    fn test_tables_have_matching_sections() {
        let en = SiteStrings::for_code("en");
        let sl = SiteStrings::for_code("sl");
        assert_eq!(en.services.len(), sl.services.len());
        assert_eq!(en.bundles.len(), sl.bundles.len());
    }
}
