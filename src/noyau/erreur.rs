// src/noyau/erreur.rs
//
// Erreurs du noyau (toutes fatales : aucun résultat partiel).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Erreur {
    /// arctan(1/x) n’est évalué que pour x ≥ 2.
    #[error("argument hors domaine : arctan(1/{inverse_x}) exige inverse_x > 1")]
    HorsDomaine { inverse_x: u32 },

    /// Garde-fou : la série n’a pas atteint un terme nul dans le budget d’itérations.
    #[error("série arctan(1/{inverse_x}) non convergente après {iterations} itérations")]
    NonConvergence { inverse_x: u32, iterations: u64 },

    #[error("division par zéro")]
    DivisionParZero,

    /// Le convertisseur attend une valeur de la forme 3.xxx (fraction dans [0, 1)).
    #[error("partie fractionnaire hors de [0, 1) : {fraction}")]
    FractionHorsIntervalle { fraction: String },

    #[error("littéral décimal invalide : {texte:?}")]
    Litteral { texte: String },

    #[error("écriture des chiffres impossible : {0}")]
    Sortie(#[from] std::io::Error),
}

pub type Resultat<T> = std::result::Result<T, Erreur>;
