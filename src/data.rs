//! Compiled-in site dataset.
//!
//! Regions, FAQ entries, per-location content, and the static per-page
//! metadata layers. This is deliberately code, not a runtime file: the
//! service area and page set change with releases, not with deployments, and
//! compiled-in data lets the registry validate everything at startup.
//!
//! Everything here is plain data — the resolution logic never lives in this
//! module, only the values the builders consume.

use crate::config::SiteConfig;
use crate::regions::ServiceRegion;
use crate::schema;
use crate::types::{AlternateHref, OgOverride, PageId, SeoOverride};

/// One FAQ entry, tagged with a category and optionally scoped to a region.
#[derive(Debug, Clone)]
pub struct FaqEntry {
    /// Coarse topic bucket: `allgemein`, `kosten`, `technik`, `standort`.
    pub category: &'static str,
    /// When set, the entry only appears on that region's location page.
    pub region_slug: Option<&'static str>,
    pub question: &'static str,
    pub answer: &'static str,
}

/// A titled link into local content (blog post, case study, service page).
#[derive(Debug, Clone)]
pub struct ContentLink {
    pub title: &'static str,
    /// Site-relative URL.
    pub url: &'static str,
}

/// Region-specific content feeding ItemList schema on location pages.
#[derive(Debug, Clone, Default)]
pub struct LocalContent {
    pub posts: Vec<ContentLink>,
    pub case_studies: Vec<ContentLink>,
    pub service_links: Vec<ContentLink>,
}

/// A single onboarding step for HowTo schema.
#[derive(Debug, Clone)]
pub struct HowToStep {
    pub name: &'static str,
    pub text: &'static str,
}

/// The fixed list of serviceable regions.
pub fn service_regions() -> Vec<ServiceRegion> {
    fn region(
        city: &str,
        state: &str,
        region_code: &str,
        postal_code: &str,
        latitude: f64,
        longitude: f64,
        radius_km: f64,
        slug: Option<&str>,
    ) -> ServiceRegion {
        ServiceRegion {
            city: city.to_string(),
            state: state.to_string(),
            region_code: region_code.to_string(),
            postal_code: postal_code.to_string(),
            latitude,
            longitude,
            radius_km,
            slug: slug.map(String::from),
        }
    }

    vec![
        region("Berlin", "Berlin", "DE-BE", "10115", 52.520008, 13.404954, 60.0, None),
        region("Hamburg", "Hamburg", "DE-HH", "20095", 53.550341, 9.992196, 50.0, None),
        region("München", "Bayern", "DE-BY", "80331", 48.137154, 11.576124, 55.0, None),
        region("Köln", "Nordrhein-Westfalen", "DE-NW", "50667", 50.937531, 6.960279, 45.0, None),
        region(
            "Frankfurt am Main",
            "Hessen",
            "DE-HE",
            "60311",
            50.110924,
            8.682127,
            50.0,
            Some("frankfurt"),
        ),
        region("Stuttgart", "Baden-Württemberg", "DE-BW", "70173", 48.775846, 9.182932, 45.0, None),
        region("Düsseldorf", "Nordrhein-Westfalen", "DE-NW", "40213", 51.227741, 6.773456, 40.0, None),
        region("Leipzig", "Sachsen", "DE-SN", "04109", 51.339695, 12.373075, 40.0, None),
        region("Wien", "Wien", "AT-9", "1010", 48.208174, 16.373819, 50.0, None),
        region("Zürich", "Zürich", "CH-ZH", "8001", 47.376887, 8.541694, 40.0, None),
    ]
}

/// All FAQ entries, site-wide and region-tagged.
pub fn faq_entries() -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            category: "allgemein",
            region_slug: None,
            question: "Wie lange dauert die Installation einer Photovoltaikanlage?",
            answer: "Die Montage auf dem Dach dauert in der Regel ein bis zwei Tage. \
                     Inklusive Netzanmeldung und Inbetriebnahme sollten Sie mit vier bis \
                     acht Wochen ab Vertragsunterzeichnung rechnen.",
        },
        FaqEntry {
            category: "allgemein",
            region_slug: None,
            question: "Lohnt sich eine Photovoltaikanlage auch ohne Süddach?",
            answer: "Ja. Ost-West-Dächer erreichen etwa 80 bis 90 Prozent des Ertrags \
                     eines Süddachs und verteilen die Erzeugung gleichmäßiger über den Tag.",
        },
        FaqEntry {
            category: "kosten",
            region_slug: None,
            question: "Was kostet eine Photovoltaikanlage für ein Einfamilienhaus?",
            answer: "Eine Anlage mit 8 bis 10 kWp kostet inklusive Montage typischerweise \
                     zwischen 14.000 und 20.000 Euro; mit Speicher entsprechend mehr.",
        },
        FaqEntry {
            category: "technik",
            region_slug: None,
            question: "Brauche ich einen Stromspeicher?",
            answer: "Ein Speicher erhöht den Eigenverbrauchsanteil von rund 30 auf bis zu \
                     70 Prozent. Ob er sich rechnet, hängt von Ihrem Verbrauchsprofil ab.",
        },
        FaqEntry {
            category: "standort",
            region_slug: Some("berlin"),
            question: "Gibt es in Berlin eine Solarpflicht?",
            answer: "Ja, das Solargesetz Berlin verpflichtet seit 2023 bei Neubauten und \
                     wesentlichen Dachumbauten zur Installation einer Solaranlage.",
        },
        FaqEntry {
            category: "standort",
            region_slug: Some("berlin"),
            question: "Welche Förderung bietet das Land Berlin?",
            answer: "Das Programm SolarPLUS bezuschusst unter anderem Stromspeicher und \
                     Steckersolargeräte. Die Förderung ist mit der Bundesförderung kombinierbar.",
        },
        FaqEntry {
            category: "standort",
            region_slug: Some("muenchen"),
            question: "Fördert die Stadt München Photovoltaik?",
            answer: "Ja, das Förderprogramm Klimaneutrale Gebäude bezuschusst \
                     Photovoltaikanlagen und Speicher im Stadtgebiet München.",
        },
        FaqEntry {
            category: "standort",
            region_slug: Some("wien"),
            question: "Welche Genehmigungen brauche ich in Wien?",
            answer: "Anlagen bis 15 kWp sind in Wien meldepflichtig, aber in der Regel \
                     nicht bewilligungspflichtig. Wir übernehmen die Meldung für Sie.",
        },
    ]
}

/// Region-scoped content for location pages, keyed by canonical slug.
///
/// Regions without an entry simply get no ItemList schema — absence is a
/// normal, non-error state.
pub fn local_content(slug: &str) -> Option<LocalContent> {
    match slug {
        "berlin" => Some(LocalContent {
            posts: vec![
                ContentLink {
                    title: "Solarpflicht in Berlin: Was Eigentümer wissen müssen",
                    url: "/magazin/solarpflicht-berlin",
                },
                ContentLink {
                    title: "Balkonkraftwerke in Berlin anmelden",
                    url: "/magazin/balkonkraftwerk-berlin-anmelden",
                },
            ],
            case_studies: vec![ContentLink {
                title: "9,8 kWp Anlage mit Speicher in Berlin-Pankow",
                url: "/projekte/berlin-pankow-9-8-kwp",
            }],
            service_links: vec![
                ContentLink {
                    title: "Photovoltaik für Einfamilienhäuser",
                    url: "/photovoltaik",
                },
                ContentLink {
                    title: "Preise und Finanzierung",
                    url: "/preise",
                },
            ],
        }),
        "muenchen" => Some(LocalContent {
            posts: vec![ContentLink {
                title: "Förderprogramm Klimaneutrale Gebäude in München",
                url: "/magazin/foerderung-muenchen",
            }],
            case_studies: vec![],
            service_links: vec![ContentLink {
                title: "Photovoltaik für Einfamilienhäuser",
                url: "/photovoltaik",
            }],
        }),
        _ => None,
    }
}

/// Onboarding steps rendered as HowTo schema on location pages.
pub fn onboarding_steps() -> Vec<HowToStep> {
    vec![
        HowToStep {
            name: "Beratung anfragen",
            text: "Fordern Sie eine kostenlose Erstberatung mit Dachanalyse an.",
        },
        HowToStep {
            name: "Angebot erhalten",
            text: "Sie erhalten ein Festpreisangebot inklusive Ertragsprognose.",
        },
        HowToStep {
            name: "Installation",
            text: "Unser regionales Montageteam installiert die Anlage in ein bis zwei Tagen.",
        },
        HowToStep {
            name: "Inbetriebnahme",
            text: "Wir übernehmen Netzanmeldung, Zählertausch und Inbetriebnahme.",
        },
    ]
}

/// CSS selectors marked speakable for voice assistants and AI surfaces.
pub fn speakable_selectors() -> Vec<&'static str> {
    vec!["h1", ".seo-summary", ".faq-answer"]
}

/// The global default layer — lowest precedence in every merge.
pub fn global_defaults(site: &SiteConfig) -> SeoOverride {
    SeoOverride {
        title: Some(format!(
            "{} – Photovoltaik, Stromspeicher & Wallboxen",
            site.site_name
        )),
        description: Some(
            "Planung, Installation und Wartung von Photovoltaikanlagen mit Speicher \
             und Wallbox. Festpreisangebote, regionale Montageteams, alles aus einer Hand."
                .to_string(),
        ),
        keywords: vec![
            "Photovoltaik".to_string(),
            "Solaranlage".to_string(),
            "Stromspeicher".to_string(),
            "Wallbox".to_string(),
        ],
        og: Some(OgOverride {
            og_type: Some("website".to_string()),
            site_name: Some(site.site_name.clone()),
            locale: Some(site.default_locale.clone()),
            ..OgOverride::default()
        }),
        alternates: vec![
            AlternateHref::new("de", &format!("{}/", site.base_url)),
            AlternateHref::new("x-default", &format!("{}/", site.base_url)),
        ],
        structured_data: vec![schema::organization(site)],
        ..SeoOverride::default()
    }
}

/// Static page-specific layer, middle precedence. Pages without one merge
/// with nothing.
pub fn page_config(page: PageId, site: &SiteConfig) -> Option<SeoOverride> {
    let base = &site.base_url;
    match page {
        PageId::Home => Some(SeoOverride {
            title: Some(format!(
                "{} – Ihre Photovoltaik-Komplettlösung",
                site.site_name
            )),
            canonical: Some(format!("{base}/")),
            ..SeoOverride::default()
        }),
        PageId::Photovoltaik => Some(SeoOverride {
            title: Some("Photovoltaikanlagen mit Speicher zum Festpreis".to_string()),
            description: Some(
                "Photovoltaikanlagen für Ein- und Mehrfamilienhäuser: Planung, \
                 Festpreisangebot und Installation durch regionale Montageteams."
                    .to_string(),
            ),
            keywords: vec![
                "Photovoltaikanlage kaufen".to_string(),
                "Solaranlage Komplettpaket".to_string(),
            ],
            canonical: Some(format!("{base}/photovoltaik")),
            ..SeoOverride::default()
        }),
        PageId::Preise => Some(SeoOverride {
            title: Some("Photovoltaik Preise & Finanzierung".to_string()),
            description: Some(
                "Transparente Festpreise für Photovoltaikanlagen mit und ohne Speicher, \
                 inklusive Finanzierungs- und Förderübersicht."
                    .to_string(),
            ),
            keywords: vec!["Photovoltaik Kosten".to_string(), "Solaranlage Preis".to_string()],
            canonical: Some(format!("{base}/preise")),
            ..SeoOverride::default()
        }),
        PageId::Kontakt => Some(SeoOverride {
            title: Some("Kontakt & kostenlose Beratung".to_string()),
            description: Some(
                "Kostenlose Erstberatung anfragen: telefonisch, per E-Mail oder über \
                 unser Formular."
                    .to_string(),
            ),
            canonical: Some(format!("{base}/kontakt")),
            ..SeoOverride::default()
        }),
        PageId::UeberUns => Some(SeoOverride {
            title: Some(format!("Über {}", site.site_name)),
            description: Some(
                "Wer hinter den Montageteams steht: Unternehmen, Partner und Zertifizierungen."
                    .to_string(),
            ),
            canonical: Some(format!("{base}/ueber-uns")),
            ..SeoOverride::default()
        }),
        PageId::Magazin => Some(SeoOverride {
            title: Some("Magazin – Wissen rund um Photovoltaik".to_string()),
            description: Some(
                "Ratgeber, Marktüberblicke und Praxisberichte rund um Solarstrom."
                    .to_string(),
            ),
            canonical: Some(format!("{base}/magazin")),
            ..SeoOverride::default()
        }),
        PageId::Ratgeber => Some(SeoOverride {
            title: Some("Ratgeber – Schritt für Schritt zur eigenen Anlage".to_string()),
            canonical: Some(format!("{base}/ratgeber")),
            ..SeoOverride::default()
        }),
        PageId::Standort => Some(SeoOverride {
            title: Some("Standorte – Photovoltaik in Ihrer Region".to_string()),
            description: Some(
                "Regionale Montageteams in Deutschland, Österreich und der Schweiz."
                    .to_string(),
            ),
            ..SeoOverride::default()
        }),
        // Detail pages are fully described by their dynamic layer.
        PageId::ArticleDetail
        | PageId::GuideDetail
        | PageId::HerstellerDetail
        | PageId::AnwendungsfallDetail => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regions::RegionRegistry;

    #[test]
    fn region_dataset_is_valid() {
        let registry = RegionRegistry::new(service_regions()).unwrap();
        assert_eq!(registry.len(), 10);
    }

    #[test]
    fn berlin_has_tagged_faq_entries() {
        let tagged: Vec<_> = faq_entries()
            .into_iter()
            .filter(|f| f.region_slug == Some("berlin"))
            .collect();
        assert!(tagged.len() >= 2);
        assert!(tagged.iter().all(|f| f.category == "standort"));
    }

    #[test]
    fn local_content_exists_for_berlin_only_where_curated() {
        assert!(local_content("berlin").is_some());
        assert!(local_content("muenchen").is_some());
        assert!(local_content("leipzig").is_none());
    }

    #[test]
    fn global_defaults_carry_og_and_alternates() {
        let site = SiteConfig::default();
        let defaults = global_defaults(&site);
        assert_eq!(defaults.og.unwrap().og_type.as_deref(), Some("website"));
        assert_eq!(defaults.alternates.len(), 2);
    }

    #[test]
    fn detail_pages_have_no_static_config() {
        let site = SiteConfig::default();
        assert!(page_config(PageId::ArticleDetail, &site).is_none());
        assert!(page_config(PageId::GuideDetail, &site).is_none());
    }

    #[test]
    fn home_canonical_is_base_url_root() {
        let site = SiteConfig::default();
        let home = page_config(PageId::Home, &site).unwrap();
        assert_eq!(
            home.canonical.as_deref(),
            Some("https://www.solarkraft-direkt.de/")
        );
    }
}
