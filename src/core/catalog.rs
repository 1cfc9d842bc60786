//! Category synonym table shared by every lookup on the page.
//!
//! Each canonical category carries its display text per locale, the machine
//! value used by the category dropdown, and the ordered list of every spelling
//! the page has been seen to use for it.

use crate::domain::model::{CanonicalCategory, Locale};
use once_cell::sync::Lazy;
use std::collections::HashMap;

#[derive(Debug)]
pub struct CategoryEntry {
    pub category: CanonicalCategory,
    pub english: &'static str,
    pub dropdown_value: &'static str,
    pub german: &'static str,
    pub french: &'static str,
    pub synonyms: &'static [&'static str],
}

static ENTRIES: [CategoryEntry; 10] = [
    CategoryEntry {
        category: CanonicalCategory::AssetPropertyManagement,
        english: "Asset Property Management",
        dropdown_value: "Asset-Property-Management",
        german: "Asset- und Immobilienverwaltung",
        french: "Gestion d'actifs et de biens immobiliers",
        synonyms: &[
            "Asset Property Management",
            "Asset-Property-Management",
            "Asset and real estate management",
            "Asset- und Immobilienverwaltung",
            "Gestion d'actifs et de biens immobiliers",
        ],
    },
    CategoryEntry {
        category: CanonicalCategory::FacilityManagementCafm,
        english: "Facility Management / CAFM",
        dropdown_value: "Facility-Management / CAFM",
        german: "Facility-Management / CAFM",
        french: "Gestion des installations / CAFM",
        synonyms: &[
            "Facility Management / CAFM",
            "Facility-Management / CAFM",
            "Facility Management/CAFM",
            "Facility Management",
            "Gestion des installations / CAFM",
        ],
    },
    CategoryEntry {
        category: CanonicalCategory::SmartMeteringSubmetering,
        english: "Smart Metering / Submetering",
        dropdown_value: "Smart Metering / Submetering",
        german: "Smart Metering / Untermessung",
        french: "Comptage intelligent / Sous-comptage",
        synonyms: &[
            "Smart Metering / Submetering",
            "Smart metering/undermeasurement",
            "Smart Metering / Untermessung",
            "Comptage intelligent / Sous-comptage",
        ],
    },
    CategoryEntry {
        category: CanonicalCategory::TechnicalBuildingEquipment,
        english: "Technical Building Equipment",
        dropdown_value: "Technische Gebäudeausrüstung",
        german: "Technische Gebäudeausrüstung",
        french: "Équipements techniques du bâtiment",
        synonyms: &[
            "Technical Building Equipment",
            "Technische Gebäudeausrüstung",
            "Technical building equipment",
            "Équipements techniques du bâtiment",
        ],
    },
    CategoryEntry {
        category: CanonicalCategory::ConsultingPlanningImplementation,
        english: "Consulting, Planning, and Implementation Partner",
        dropdown_value: "Beratungs-, Planungs- und Umsetzungspartner",
        german: "Beratungs-, Planungs- und Umsetzungspartner",
        french: "Partenaire de conseil, de planification et de mise en œuvre",
        synonyms: &[
            "Consulting, Planning, and Implementation Partner",
            "Beratungs-, Planungs- und Umsetzungspartner",
            "Consulting & implementation",
            "Beratung & Implementierung",
            "Partenaire de conseil, de planification et de mise en œuvre",
        ],
    },
    CategoryEntry {
        category: CanonicalCategory::StandardsCertification,
        english: "Standards and Certification",
        dropdown_value: "Standards und Zertifizierung",
        german: "Standards und Zertifizierung",
        french: "Normes et certification",
        synonyms: &[
            "Standards and Certification",
            "Standards und Zertifizierung",
            "Standards and certification",
            "Normes et certification",
        ],
    },
    CategoryEntry {
        category: CanonicalCategory::EsgSoftware,
        english: "ESG Software",
        dropdown_value: "ESG-Software",
        german: "ESG-Software",
        french: "Logiciel ESG",
        synonyms: &["ESG Software", "ESG-Software", "ESG software", "Logiciel ESG"],
    },
    CategoryEntry {
        category: CanonicalCategory::TechnicalMonitoringSoftware,
        english: "Technical Monitoring Software",
        dropdown_value: "Technisches-Monitoring-Software",
        german: "Technische Überwachungssoftware",
        french: "Logiciel de surveillance technique",
        synonyms: &[
            "Technical Monitoring Software",
            "Technisches-Monitoring-Software",
            "Technical monitoring software",
            "Technische Überwachungssoftware",
            "Logiciel de surveillance technique",
        ],
    },
    CategoryEntry {
        category: CanonicalCategory::ActiveOperationalOptimizationSoftware,
        english: "Active Operational Optimization Software",
        dropdown_value: "Aktive-Betriebsoptimierung-Software",
        german: "Betriebliche Optimierung",
        french: "Logiciel d'optimisation opérationnelle active",
        synonyms: &[
            "Active Operational Optimization Software",
            "Aktive-Betriebsoptimierung-Software",
            "Operational optimization",
            "Betriebliche Optimierung",
            "Logiciel d'optimisation opérationnelle active",
        ],
    },
    CategoryEntry {
        category: CanonicalCategory::WorkspaceAppsSmartBuilding,
        english: "Workspace Apps / Smart Building",
        dropdown_value: "Workspace Apps / Smart Building",
        german: "Workspace-Apps/Smart Building",
        french: "Applications de travail / Smart Building",
        synonyms: &[
            "Workspace Apps / Smart Building",
            "Workspace apps/smart building",
            "Workspace-Apps/Smart Building",
            "Applications de travail / Smart Building",
        ],
    },
];

pub struct Catalog {
    entries: &'static [CategoryEntry],
    exact_keys: HashMap<&'static str, CanonicalCategory>,
    synonyms: HashMap<&'static str, CanonicalCategory>,
}

static CATALOG: Lazy<Catalog> = Lazy::new(Catalog::build);

pub fn catalog() -> &'static Catalog {
    &CATALOG
}

impl Catalog {
    fn build() -> Self {
        let mut exact_keys = HashMap::new();
        let mut synonyms = HashMap::new();

        for entry in ENTRIES.iter() {
            exact_keys.insert(entry.english, entry.category);
            exact_keys.insert(entry.dropdown_value, entry.category);
            for synonym in entry.synonyms {
                synonyms.entry(*synonym).or_insert(entry.category);
            }
        }

        tracing::debug!(
            "Built category catalog: {} categories, {} exact keys, {} synonyms",
            ENTRIES.len(),
            exact_keys.len(),
            synonyms.len()
        );

        Self {
            entries: &ENTRIES,
            exact_keys,
            synonyms,
        }
    }

    /// Entries in tie-break order.
    pub fn entries(&self) -> &'static [CategoryEntry] {
        self.entries
    }

    pub fn entry(&self, category: CanonicalCategory) -> &'static CategoryEntry {
        // ENTRIES is declared in the same order as CanonicalCategory::ALL.
        &self.entries[category as usize]
    }

    /// English display name or dropdown machine value.
    pub fn exact_key(&self, label: &str) -> Option<CanonicalCategory> {
        self.exact_keys.get(label).copied()
    }

    pub fn synonym(&self, label: &str) -> Option<CanonicalCategory> {
        self.synonyms.get(label).copied()
    }

    /// Maps a dropdown machine value to the English display name.
    pub fn display_for_value(&self, value: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|e| e.dropdown_value == value)
            .map(|e| e.english)
    }
}

impl CanonicalCategory {
    pub fn display_name(&self, locale: Locale) -> &'static str {
        let entry = catalog().entry(*self);
        match locale {
            Locale::English => entry.english,
            Locale::German => entry.german,
            Locale::French => entry.french,
        }
    }

    pub fn dropdown_value(&self) -> &'static str {
        catalog().entry(*self).dropdown_value
    }

    pub fn synonyms(&self) -> &'static [&'static str] {
        catalog().entry(*self).synonyms
    }
}
