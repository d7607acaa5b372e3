//! Noyau π base 12
//!
//! Organisation interne :
//! - decimal.rs  : décimal à échelle explicite (BigInt scalé) + modes d’arrondi
//! - arctan.rs   : série atan(1/x) à échelle fixe (plafond d’itérations)
//! - pi.rs       : Machin, fork/join des deux séries
//! - base12.rs   : conversion radix-12 de π − 3 (séquence paresseuse)
//! - pipeline.rs : flux complet "3.xxxx"
//! - erreur.rs   : erreurs du noyau

pub mod arctan;
pub mod base12;
pub mod decimal;
pub mod erreur;
pub mod pi;
pub mod pipeline;

#[cfg(test)]
mod tests_scientifiques;

/// Arrondi de toutes les divisions du calcul.
pub const ARRONDI: decimal::Arrondi = decimal::Arrondi::DemiPair;

// API publique minimale
pub use arctan::evaluate;
pub use base12::{to_base12_fraction, Chiffre12, DeveloppementBase12};
pub use decimal::{Arrondi, Decimal};
pub use erreur::{Erreur, Resultat};
pub use pi::compute_pi;
pub use pipeline::{developper, run, Bilan, Demande};
