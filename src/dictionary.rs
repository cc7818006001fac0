//! Per-locale UI strings for the rendered pages.
//!
//! The default locale (Hebrew) carries the complete base dictionary; the
//! other locales are expressed as partial overrides merged onto the base,
//! section by section, so the fallback behavior for a missing key is
//! explicit and auditable. Routing correctness never depends on this module;
//! paths and URLs are built from the segment table alone.

use crate::routing::{Locale, RouteKey};
use std::sync::OnceLock;

// ==================== Sections ====================

/// Page metadata strings.
#[derive(Debug, Clone)]
pub struct Metadata {
    /// Site title, appended to every page title
    pub title: &'static str,
    /// Site description for the meta description tag
    pub description: &'static str,
}

/// Navigation labels, one per route.
#[derive(Debug, Clone)]
pub struct Nav {
    pub home: &'static str,
    pub transportation: &'static str,
    pub services: &'static str,
    pub calculate: &'static str,
    pub articles: &'static str,
    pub about: &'static str,
    pub contact: &'static str,
}

/// Complete dictionary for one locale.
#[derive(Debug, Clone)]
pub struct Dictionary {
    pub metadata: Metadata,
    pub nav: Nav,
}

impl Dictionary {
    /// The navigation label for a route.
    pub fn nav_label(&self, route: RouteKey) -> &'static str {
        match route {
            RouteKey::Home => self.nav.home,
            RouteKey::Transportation => self.nav.transportation,
            RouteKey::Services => self.nav.services,
            RouteKey::Calculate => self.nav.calculate,
            RouteKey::Articles => self.nav.articles,
            RouteKey::About => self.nav.about,
            RouteKey::Contact => self.nav.contact,
        }
    }
}

// ==================== Overrides ====================

/// Partial metadata override; `None` falls back to the base value.
#[derive(Debug, Clone, Default)]
pub struct MetadataOverride {
    pub title: Option<&'static str>,
    pub description: Option<&'static str>,
}

/// Partial navigation override; `None` falls back to the base value.
#[derive(Debug, Clone, Default)]
pub struct NavOverride {
    pub home: Option<&'static str>,
    pub transportation: Option<&'static str>,
    pub services: Option<&'static str>,
    pub calculate: Option<&'static str>,
    pub articles: Option<&'static str>,
    pub about: Option<&'static str>,
    pub contact: Option<&'static str>,
}

/// Partial dictionary override for a non-default locale.
#[derive(Debug, Clone, Default)]
pub struct DictionaryOverride {
    pub metadata: MetadataOverride,
    pub nav: NavOverride,
}

fn merge_metadata(base: &Metadata, over: &MetadataOverride) -> Metadata {
    Metadata {
        title: over.title.unwrap_or(base.title),
        description: over.description.unwrap_or(base.description),
    }
}

fn merge_nav(base: &Nav, over: &NavOverride) -> Nav {
    Nav {
        home: over.home.unwrap_or(base.home),
        transportation: over.transportation.unwrap_or(base.transportation),
        services: over.services.unwrap_or(base.services),
        calculate: over.calculate.unwrap_or(base.calculate),
        articles: over.articles.unwrap_or(base.articles),
        about: over.about.unwrap_or(base.about),
        contact: over.contact.unwrap_or(base.contact),
    }
}

/// Merge a partial override onto the base dictionary, section by section.
fn merge(base: &Dictionary, over: &DictionaryOverride) -> Dictionary {
    Dictionary {
        metadata: merge_metadata(&base.metadata, &over.metadata),
        nav: merge_nav(&base.nav, &over.nav),
    }
}

// ==================== Hebrew (base) ====================

/// Hebrew dictionary, the complete base every other locale merges onto.
const BASE_DICTIONARY: Dictionary = Dictionary {
    metadata: Metadata {
        title: "הובלות ומעברי דירה",
        description: "חברת הובלות ומעברי דירה בכל הארץ",
    },
    nav: Nav {
        home: "בית",
        transportation: "הובלות",
        services: "שירותים",
        calculate: "חישוב עלות",
        articles: "מאמרים",
        about: "אודות",
        contact: "צור קשר",
    },
};

// ==================== Russian ====================

const RUSSIAN_OVERRIDE: DictionaryOverride = DictionaryOverride {
    metadata: MetadataOverride {
        title: Some("Перевозки и квартирные переезды"),
        description: Some("Компания по перевозкам и переездам по всей стране"),
    },
    nav: NavOverride {
        home: Some("Главная"),
        transportation: Some("Перевозки"),
        services: Some("Услуги"),
        calculate: Some("Расчёт стоимости"),
        articles: Some("Статьи"),
        about: Some("О компании"),
        contact: Some("Контакты"),
    },
};

// ==================== English ====================

const ENGLISH_OVERRIDE: DictionaryOverride = DictionaryOverride {
    metadata: MetadataOverride {
        title: Some("Moving & Relocation Services"),
        description: Some("Nationwide moving and relocation company"),
    },
    nav: NavOverride {
        home: Some("Home"),
        transportation: Some("Transportation"),
        services: Some("Services"),
        calculate: Some("Cost calculator"),
        articles: Some("Articles"),
        about: Some("About"),
        contact: Some("Contact"),
    },
};

fn override_for(code: &str) -> DictionaryOverride {
    match code {
        "ru" => RUSSIAN_OVERRIDE,
        "en" => ENGLISH_OVERRIDE,
        // The default locale (and anything unknown) is the base itself.
        _ => DictionaryOverride::default(),
    }
}

// Merged dictionaries, one per supported locale, built on first access.
static DICTIONARIES: OnceLock<Vec<(&'static str, Dictionary)>> = OnceLock::new();

/// The merged dictionary for `locale`.
pub fn dictionary_for(locale: Locale) -> &'static Dictionary {
    let dictionaries = DICTIONARIES.get_or_init(|| {
        Locale::supported()
            .into_iter()
            .map(|locale| {
                let code = locale.code();
                (code, merge(&BASE_DICTIONARY, &override_for(code)))
            })
            .collect()
    });

    dictionaries
        .iter()
        .find(|(code, _)| *code == locale.code())
        .map(|(_, dictionary)| dictionary)
        .expect("every supported locale has a merged dictionary")
}
