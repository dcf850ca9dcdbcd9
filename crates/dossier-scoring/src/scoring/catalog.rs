use serde::Serialize;

use super::error::ShapeMismatch;

/// Number of criteria in the standard grading grid.
pub const CRITERIA_COUNT: usize = 10;

/// A scorable facet of a financing dossier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Criterion {
    pub index: usize,
    pub name: &'static str,
    pub description: &'static str,
    pub weight: f64,
}

static STANDARD_CRITERIA: [Criterion; CRITERIA_COUNT] = [
    Criterion {
        index: 0,
        name: "Garanties",
        description: "Nature et niveau de couverture des sûretés (hypothèque, GAPD, caution).",
        weight: 1.5,
    },
    Criterion {
        index: 1,
        name: "Expérience de l'opérateur",
        description: "Historique du porteur sur des opérations comparables et solidité de l'équipe.",
        weight: 1.0,
    },
    Criterion {
        index: 2,
        name: "Localisation et marché",
        description: "Attractivité de l'emplacement, profondeur du marché local et prix de sortie.",
        weight: 1.0,
    },
    Criterion {
        index: 3,
        name: "Qualité du dossier",
        description: "Complétude et cohérence des pièces transmises par le porteur.",
        weight: 0.5,
    },
    Criterion {
        index: 4,
        name: "Structure financière",
        description: "Apport en fonds propres, dette senior et place du financement participatif.",
        weight: 1.0,
    },
    Criterion {
        index: 5,
        name: "Pré-commercialisation",
        description: "Part des lots réservés ou vendus au moment de la collecte.",
        weight: 0.5,
    },
    Criterion {
        index: 6,
        name: "Marge de l'opération",
        description: "Marge prévisionnelle et résistance du bilan à une baisse des prix.",
        weight: 1.0,
    },
    Criterion {
        index: 7,
        name: "Avancement administratif",
        description: "Permis purgé, foncier maîtrisé, autorisations obtenues.",
        weight: 1.0,
    },
    Criterion {
        index: 8,
        name: "Ratio LTV / LTC",
        description: "Montant financé rapporté à la valeur du bien et au coût total de l'opération.",
        weight: 1.5,
    },
    Criterion {
        index: 9,
        name: "Durée et sortie",
        description: "Réalisme du calendrier et crédibilité du scénario de remboursement.",
        weight: 1.0,
    },
];

/// The standard grading grid, in display order.
pub fn criteria() -> &'static [Criterion] {
    &STANDARD_CRITERIA
}

pub(crate) fn validate_catalog(criteria: &[Criterion]) -> Result<(), ShapeMismatch> {
    if criteria.is_empty() {
        return Err(ShapeMismatch::EmptyCatalog);
    }

    for (position, criterion) in criteria.iter().enumerate() {
        if criterion.index != position {
            return Err(ShapeMismatch::CatalogIndex {
                position,
                index: criterion.index,
            });
        }
        if !criterion.weight.is_finite() || criterion.weight <= 0.0 {
            return Err(ShapeMismatch::InvalidWeight {
                index: criterion.index,
                weight: criterion.weight,
            });
        }
    }

    Ok(())
}
